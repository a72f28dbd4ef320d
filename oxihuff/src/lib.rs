//! # OxiHuff: Pure Rust Huffman Coding
//!
//! This crate derives a prefix-free code from the byte frequencies of an
//! input, packs the input with it, and reports the size reduction.
//!
//! ## Features
//!
//! - **Pure Rust**: No C dependencies, 100% safe Rust
//! - **Deterministic codes**: equal weights merge in creation order
//! - **Explicit code table**: the table and exact bit length are returned
//!   alongside the payload, since the payload carries no header
//! - **`parallel`**: frequency counting on the rayon pool for large inputs
//! - **`serde`**: [`CodeTableFile`] sidecar for persisting code tables
//!
//! ## Pipeline
//!
//! ```text
//! bytes ─▶ FrequencyTable ─▶ HuffmanTree ─▶ CodeTable ─▶ HuffmanEncoder ─▶ EncodedPayload
//!                                                                              │
//! bytes ◀──────────────────────── HuffmanDecoder (tree or table) ◀────────────┘
//! ```
//!
//! Symbols are single bytes. Packed bits are MSB-first and the final byte is
//! zero-padded on the right.
//!
//! ## Example
//!
//! ```rust
//! use oxihuff::{compress, decompress};
//!
//! let original = b"aaaab";
//! let compressed = compress(original).unwrap();
//!
//! assert_eq!(compressed.payload.bit_len(), 5);
//! assert_eq!(compressed.stats.reduction_percent(), 87.5);
//!
//! let restored = decompress(
//!     compressed.payload.bytes(),
//!     compressed.payload.bit_len(),
//!     &compressed.codes,
//! )
//! .unwrap();
//! assert_eq!(restored, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod codes;
mod config;
mod decoder;
mod encoder;
mod frequency;
mod metrics;
mod progress;
#[cfg(feature = "serde")]
mod sidecar;
mod tree;

pub use codes::{Code, CodeTable, MAX_CODE_LENGTH};
pub use config::HuffmanConfig;
pub use decoder::HuffmanDecoder;
pub use encoder::{EncodedPayload, HuffmanEncoder};
pub use frequency::{ALPHABET_SIZE, FrequencyTable};
pub use metrics::{BASELINE_BITS_PER_SYMBOL, CompressionStats, reduction_percent};
pub use oxihuff_core::error::{HuffError, Result};
pub use progress::{Progress, Stage};
#[cfg(feature = "serde")]
pub use sidecar::{CODE_TABLE_VERSION, CodeEntry, CodeTableFile};
pub use tree::{HuffmanTree, Node};

/// Everything a compression produces.
///
/// `payload` alone cannot be decoded: keep `codes` (or `tree`) and the
/// payload's bit length with it.
#[derive(Debug, Clone)]
pub struct Compressed {
    /// Packed bits and their exact length.
    pub payload: EncodedPayload,
    /// Symbol to code mapping used for the payload.
    pub codes: CodeTable,
    /// The tree the codes were derived from (`None` for empty input).
    pub tree: Option<HuffmanTree>,
    /// Symbol counts of the input.
    pub frequencies: FrequencyTable,
    /// Size statistics.
    pub stats: CompressionStats,
}

/// Compress `data` with the default configuration.
///
/// # Example
///
/// ```rust
/// use oxihuff::compress;
///
/// let compressed = compress(b"").unwrap();
/// assert!(compressed.payload.is_empty());
/// assert!(compressed.tree.is_none());
/// assert_eq!(compressed.stats.reduction_percent(), 0.0);
/// ```
pub fn compress(data: &[u8]) -> Result<Compressed> {
    compress_with_config(data, &HuffmanConfig::DEFAULT)
}

/// Compress `data` with the given configuration.
pub fn compress_with_config(data: &[u8], config: &HuffmanConfig) -> Result<Compressed> {
    compress_with_progress(data, config, |_| {})
}

/// Compress `data`, reporting bytes processed to `progress`.
///
/// The callback sees [`Stage::Counting`] reports followed by
/// [`Stage::Encoding`] reports, once per configured chunk.
///
/// # Example
///
/// ```rust
/// use oxihuff::{HuffmanConfig, Stage, compress_with_progress};
///
/// let config = HuffmanConfig::DEFAULT.with_chunk_size(2);
/// let mut stages = Vec::new();
/// compress_with_progress(b"abcd", &config, |p| stages.push((p.stage, p.processed))).unwrap();
/// assert_eq!(
///     stages,
///     vec![
///         (Stage::Counting, 2),
///         (Stage::Counting, 4),
///         (Stage::Encoding, 2),
///         (Stage::Encoding, 4),
///     ]
/// );
/// ```
pub fn compress_with_progress<F>(
    data: &[u8],
    config: &HuffmanConfig,
    mut progress: F,
) -> Result<Compressed>
where
    F: FnMut(Progress),
{
    let frequencies = FrequencyTable::count_with_progress(data, config, &mut progress)?;
    let tree = HuffmanTree::build(&frequencies);
    let codes = tree
        .as_ref()
        .map(HuffmanTree::code_table)
        .unwrap_or_default();

    let payload = HuffmanEncoder::new(&codes).encode_with_progress(
        data,
        config.effective_chunk_size(),
        &mut progress,
    )?;

    let stats = CompressionStats::new(data.len() as u64, payload.bit_len());

    Ok(Compressed {
        payload,
        codes,
        tree,
        frequencies,
        stats,
    })
}

/// Decode `bit_len` bits of `data` with a code table.
pub fn decompress(data: &[u8], bit_len: u64, codes: &CodeTable) -> Result<Vec<u8>> {
    HuffmanDecoder::from_code_table(codes)?.decode(data, bit_len)
}

/// Decode `bit_len` bits of `data` by walking `tree`.
pub fn decompress_with_tree(data: &[u8], bit_len: u64, tree: &HuffmanTree) -> Result<Vec<u8>> {
    HuffmanDecoder::from_tree(tree).decode(data, bit_len)
}
