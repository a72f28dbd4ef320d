//! Error types for OxiHuff operations.
//!
//! A single error enum covers every failure the codec can report: I/O from
//! the front end, broken internal invariants, corrupt bitstreams and invalid
//! code tables loaded from outside.

use std::io;
use thiserror::Error;

/// The main error type for OxiHuff operations.
#[derive(Debug, Error)]
pub enum HuffError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An internal invariant did not hold (e.g. a symbol with no code).
    #[error("Invariant violation: {message}")]
    InvariantViolation {
        /// Description of the broken invariant.
        message: String,
    },

    /// The bitstream cannot be decoded with the given tree or code table.
    #[error("Corrupt stream at bit position {bit_position}: {message}")]
    CorruptStream {
        /// Bit position where decoding failed.
        bit_position: u64,
        /// Description of the corruption.
        message: String,
    },

    /// A code table is empty, not prefix-free, or otherwise unusable.
    #[error("Invalid code table: {message}")]
    InvalidCodeTable {
        /// Description of the table error.
        message: String,
    },

    /// Read past the declared end of the bitstream.
    #[error("Unexpected end of stream at bit position {bit_position}")]
    UnexpectedEof {
        /// Bit position where the stream ran out.
        bit_position: u64,
    },

    /// Sidecar file written by an incompatible version.
    #[error("Unsupported code table version: found {found}, expected {expected}")]
    UnsupportedVersion {
        /// Version found in the file.
        found: u32,
        /// Version this build understands.
        expected: u32,
    },
}

/// Result type alias for OxiHuff operations.
pub type Result<T> = std::result::Result<T, HuffError>;

impl HuffError {
    /// Create an invariant violation error.
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::InvariantViolation {
            message: message.into(),
        }
    }

    /// Create a corrupt stream error.
    pub fn corrupt_stream(bit_position: u64, message: impl Into<String>) -> Self {
        Self::CorruptStream {
            bit_position,
            message: message.into(),
        }
    }

    /// Create an invalid code table error.
    pub fn invalid_code_table(message: impl Into<String>) -> Self {
        Self::InvalidCodeTable {
            message: message.into(),
        }
    }

    /// Create an unexpected EOF error.
    pub fn unexpected_eof(bit_position: u64) -> Self {
        Self::UnexpectedEof { bit_position }
    }

    /// Create an unsupported version error.
    pub fn unsupported_version(found: u32, expected: u32) -> Self {
        Self::UnsupportedVersion { found, expected }
    }

    /// Whether this error means the payload itself is damaged.
    pub fn is_corruption(&self) -> bool {
        matches!(self, Self::CorruptStream { .. } | Self::UnexpectedEof { .. })
    }
}
