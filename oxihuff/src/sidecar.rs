//! Code-table sidecar for persisted payloads.
//!
//! A payload is bare packed bits, so decoding it later needs the code table
//! and the exact bit length. `CodeTableFile` carries both (plus the original
//! length as a check) in a serde-friendly shape; codes are stored as `"0101"`
//! strings so the file stays readable.

use crate::Compressed;
use crate::codes::{Code, CodeTable};
use oxihuff_core::error::{HuffError, Result};
use serde::{Deserialize, Serialize};

/// Sidecar format version written by this build.
pub const CODE_TABLE_VERSION: u32 = 1;

/// One symbol and its code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeEntry {
    /// The symbol (byte value).
    pub symbol: u8,
    /// The code as a bit string.
    pub code: String,
}

/// Everything needed to decode a payload besides the payload itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeTableFile {
    /// Format version.
    pub version: u32,
    /// Length of the original input in bytes.
    pub original_len: u64,
    /// Exact number of meaningful bits in the payload.
    pub bit_len: u64,
    /// Code for every symbol of the input.
    pub codes: Vec<CodeEntry>,
}

impl CodeTableFile {
    /// Describe a payload encoded with `codes`.
    pub fn new(codes: &CodeTable, original_len: u64, bit_len: u64) -> Self {
        Self {
            version: CODE_TABLE_VERSION,
            original_len,
            bit_len,
            codes: codes
                .iter()
                .map(|(symbol, code)| CodeEntry {
                    symbol,
                    code: code.to_string(),
                })
                .collect(),
        }
    }

    /// Describe the result of a compression.
    pub fn from_compressed(compressed: &Compressed) -> Self {
        Self::new(
            &compressed.codes,
            compressed.stats.original_bytes,
            compressed.payload.bit_len(),
        )
    }

    /// Rebuild and validate the code table.
    pub fn code_table(&self) -> Result<CodeTable> {
        if self.version != CODE_TABLE_VERSION {
            return Err(HuffError::unsupported_version(
                self.version,
                CODE_TABLE_VERSION,
            ));
        }

        let entries = self
            .codes
            .iter()
            .map(|entry| Ok((entry.symbol, entry.code.parse::<Code>()?)))
            .collect::<Result<Vec<_>>>()?;

        if entries.is_empty() && self.bit_len > 0 {
            return Err(HuffError::invalid_code_table(format!(
                "empty table cannot decode {} bits",
                self.bit_len
            )));
        }

        CodeTable::from_entries(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compress;

    #[test]
    fn test_from_compressed() {
        let compressed = compress(b"aaaab").unwrap();
        let file = CodeTableFile::from_compressed(&compressed);
        assert_eq!(file.version, CODE_TABLE_VERSION);
        assert_eq!(file.original_len, 5);
        assert_eq!(file.bit_len, 5);
        assert_eq!(
            file.codes,
            vec![
                CodeEntry {
                    symbol: b'a',
                    code: "1".to_string()
                },
                CodeEntry {
                    symbol: b'b',
                    code: "0".to_string()
                },
            ]
        );
        assert_eq!(file.code_table().unwrap(), compressed.codes);
    }

    #[test]
    fn test_rejects_other_version() {
        let mut file = CodeTableFile::new(&CodeTable::new(), 0, 0);
        file.version = 2;
        assert!(matches!(
            file.code_table(),
            Err(HuffError::UnsupportedVersion {
                found: 2,
                expected: 1
            })
        ));
    }

    #[test]
    fn test_rejects_bad_code_string() {
        let file = CodeTableFile {
            version: CODE_TABLE_VERSION,
            original_len: 1,
            bit_len: 1,
            codes: vec![CodeEntry {
                symbol: 0,
                code: "0x".to_string(),
            }],
        };
        assert!(matches!(
            file.code_table(),
            Err(HuffError::InvalidCodeTable { .. })
        ));
    }

    #[test]
    fn test_rejects_empty_table_with_bits() {
        let file = CodeTableFile::new(&CodeTable::new(), 3, 3);
        assert!(file.code_table().is_err());
    }
}
