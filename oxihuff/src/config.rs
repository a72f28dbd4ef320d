//! Codec configuration.

/// Huffman codec configuration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HuffmanConfig {
    /// Input bytes handled per step when counting and packing.
    /// Progress callbacks fire once per chunk.
    pub chunk_size: usize,
    /// Minimum input length before frequency counting fans out to the
    /// rayon pool (only with the `parallel` feature).
    pub parallel_threshold: usize,
}

impl HuffmanConfig {
    /// Default configuration.
    ///
    /// - 64 KiB chunks
    /// - Parallel counting from 1 MiB of input
    pub const DEFAULT: Self = Self {
        chunk_size: 64 * 1024,
        parallel_threshold: 1024 * 1024,
    };

    /// Never count in parallel, even with the `parallel` feature enabled.
    pub const SEQUENTIAL: Self = Self {
        chunk_size: 64 * 1024,
        parallel_threshold: usize::MAX,
    };

    /// Set the chunk size.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set the parallel counting threshold.
    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    /// Chunk size clamped to at least one byte.
    pub fn effective_chunk_size(&self) -> usize {
        self.chunk_size.max(1)
    }

    /// Whether an input of `len` bytes should be counted in parallel.
    pub fn counts_in_parallel(&self, len: usize) -> bool {
        cfg!(feature = "parallel") && len >= self.parallel_threshold
    }
}

impl Default for HuffmanConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
