//! Size-reduction statistics.
//!
//! The baseline is a fixed 8 bits per input symbol.

use std::fmt;

/// Bits per symbol in the uncompressed baseline.
pub const BASELINE_BITS_PER_SYMBOL: u64 = 8;

/// Bytes per mebibyte, for display.
const MIB: f64 = 1024.0 * 1024.0;

/// Reduction percentage of `encoded_bits` against `symbol_count` 8-bit
/// symbols. Empty input reports 0%.
pub fn reduction_percent(symbol_count: u64, encoded_bits: u64) -> f64 {
    let original_bits = symbol_count * BASELINE_BITS_PER_SYMBOL;
    if original_bits == 0 {
        return 0.0;
    }
    (original_bits as f64 - encoded_bits as f64) / original_bits as f64 * 100.0
}

/// Size statistics of one compression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompressionStats {
    /// Input length in bytes (one symbol per byte).
    pub original_bytes: u64,
    /// Exact length of the encoded bit string.
    pub encoded_bits: u64,
}

impl CompressionStats {
    /// Create statistics from the input length and encoded bit length.
    pub fn new(original_bytes: u64, encoded_bits: u64) -> Self {
        Self {
            original_bytes,
            encoded_bits,
        }
    }

    /// Input size in bits under the 8-bit baseline.
    pub fn original_bits(&self) -> u64 {
        self.original_bytes * BASELINE_BITS_PER_SYMBOL
    }

    /// Encoded size as a fractional byte count (bits / 8).
    pub fn encoded_bytes(&self) -> f64 {
        self.encoded_bits as f64 / 8.0
    }

    /// Encoded size in whole packed bytes, including padding.
    pub fn packed_bytes(&self) -> u64 {
        self.encoded_bits.div_ceil(8)
    }

    /// Percentage of the baseline saved.
    pub fn reduction_percent(&self) -> f64 {
        reduction_percent(self.original_bytes, self.encoded_bits)
    }

    /// Original bits per encoded bit (0 when nothing was encoded).
    pub fn compression_ratio(&self) -> f64 {
        if self.encoded_bits == 0 {
            0.0
        } else {
            self.original_bits() as f64 / self.encoded_bits as f64
        }
    }

    /// Average code length in bits per symbol.
    pub fn bits_per_symbol(&self) -> f64 {
        if self.original_bytes == 0 {
            0.0
        } else {
            self.encoded_bits as f64 / self.original_bytes as f64
        }
    }
}

impl fmt::Display for CompressionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Original Size: {:.2} MB",
            self.original_bytes as f64 / MIB
        )?;
        writeln!(f, "Compressed Size: {:.2} MB", self.encoded_bytes() / MIB)?;
        write!(f, "Size Reduced by: {:.2}%", self.reduction_percent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aaaab_reduction() {
        let stats = CompressionStats::new(5, 5);
        assert_eq!(stats.original_bits(), 40);
        assert!((stats.reduction_percent() - 87.5).abs() < 1e-9);
        assert_eq!(stats.packed_bytes(), 1);
        assert!((stats.encoded_bytes() - 0.625).abs() < 1e-9);
        assert!((stats.compression_ratio() - 8.0).abs() < 1e-9);
        assert!((stats.bits_per_symbol() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_input_is_zero_percent() {
        let stats = CompressionStats::new(0, 0);
        assert_eq!(stats.reduction_percent(), 0.0);
        assert_eq!(stats.compression_ratio(), 0.0);
        assert_eq!(stats.bits_per_symbol(), 0.0);
        assert_eq!(reduction_percent(0, 0), 0.0);
    }

    #[test]
    fn test_no_reduction() {
        // 256 equiprobable symbols need the full 8 bits each
        assert_eq!(reduction_percent(256, 2048), 0.0);
    }

    #[test]
    fn test_display() {
        let stats = CompressionStats::new(2 * 1024 * 1024, 8 * 1024 * 1024);
        let text = stats.to_string();
        assert!(text.contains("Original Size: 2.00 MB"));
        assert!(text.contains("Compressed Size: 1.00 MB"));
        assert!(text.contains("Size Reduced by: 50.00%"));
    }
}
