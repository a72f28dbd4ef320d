//! Symbol frequency counting.
//!
//! A symbol is one byte, so the table is a fixed 256-entry array. Counting is
//! the only embarrassingly parallel stage of the pipeline; with the
//! `parallel` feature large inputs are split into chunks, counted on the
//! rayon pool and merged.

use crate::config::HuffmanConfig;
use crate::progress::{Progress, Stage};
use oxihuff_core::error::{HuffError, Result};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Number of distinct symbols.
pub const ALPHABET_SIZE: usize = 256;

/// Occurrence count of every symbol in an input.
///
/// Invariant: the counts sum to the input length, and a symbol present in
/// the input has a count of at least one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; ALPHABET_SIZE],
    total: u64,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            counts: [0; ALPHABET_SIZE],
            total: 0,
        }
    }

    /// Count every byte of `data`.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut table = Self::new();
        table.add_bytes(data);
        table
    }

    /// Build a table from explicit `(symbol, count)` pairs.
    ///
    /// Zero counts are ignored; repeated symbols accumulate. Fails if the
    /// counts do not sum within `u64`.
    pub fn from_counts<I>(counts: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u8, u64)>,
    {
        let mut table = Self::new();
        for (symbol, count) in counts {
            table.total = table
                .total
                .checked_add(count)
                .ok_or_else(|| total_overflow(symbol))?;
            // Never exceeds the total checked above
            table.counts[symbol as usize] += count;
        }
        Ok(table)
    }

    /// Count `data` using the configured chunking, reporting progress after
    /// every chunk.
    pub fn count_with_progress(
        data: &[u8],
        config: &HuffmanConfig,
        progress: &mut dyn FnMut(Progress),
    ) -> Result<Self> {
        let total = data.len() as u64;
        let chunk_size = config.effective_chunk_size();

        #[cfg(feature = "parallel")]
        if config.counts_in_parallel(data.len()) {
            let table = Self::count_parallel(data, chunk_size)?;
            progress(Progress::new(Stage::Counting, total, total));
            return Ok(table);
        }

        let mut table = Self::new();
        let mut processed = 0u64;
        for chunk in data.chunks(chunk_size) {
            table.add_bytes(chunk);
            processed += chunk.len() as u64;
            progress(Progress::new(Stage::Counting, processed, total));
        }
        Ok(table)
    }

    /// Count `data` in `chunk_size` pieces on the rayon pool.
    #[cfg(feature = "parallel")]
    pub fn count_parallel(data: &[u8], chunk_size: usize) -> Result<Self> {
        data.par_chunks(chunk_size.max(1))
            .map(|chunk| Ok(Self::from_bytes(chunk)))
            .try_reduce(Self::new, |mut acc, partial| {
                acc.merge(&partial)?;
                Ok(acc)
            })
    }

    fn add_bytes(&mut self, data: &[u8]) {
        for &byte in data {
            self.counts[byte as usize] += 1;
        }
        self.total += data.len() as u64;
    }

    /// Add the counts of another table to this one.
    ///
    /// Fails, leaving `self` unchanged, if the combined total overflows.
    pub fn merge(&mut self, other: &Self) -> Result<()> {
        self.total = self.total.checked_add(other.total).ok_or_else(|| {
            HuffError::invariant(format!(
                "merged symbol total exceeds {} ({} + {})",
                u64::MAX,
                self.total,
                other.total
            ))
        })?;
        for (count, extra) in self.counts.iter_mut().zip(other.counts.iter()) {
            *count += extra;
        }
        Ok(())
    }

    /// Occurrences of `symbol` (zero if absent).
    pub fn count(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Sum of all counts, equal to the input length.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct symbols present.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Whether no symbol was counted.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Iterate present symbols and their counts in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(symbol, &count)| (symbol as u8, count))
    }

    /// Shannon entropy of the distribution in bits per symbol.
    ///
    /// This is the lower bound on the average Huffman code length.
    pub fn entropy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let total = self.total as f64;
        self.iter()
            .map(|(_, count)| {
                let p = count as f64 / total;
                -p * p.log2()
            })
            .sum()
    }
}

fn total_overflow(symbol: u8) -> HuffError {
    HuffError::invariant(format!(
        "symbol counts exceed {} at symbol {symbol:#04x}",
        u64::MAX
    ))
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let table = FrequencyTable::from_bytes(b"");
        assert!(table.is_empty());
        assert_eq!(table.distinct(), 0);
        assert_eq!(table.iter().count(), 0);
        assert_eq!(table.entropy(), 0.0);
    }

    #[test]
    fn test_counts_every_occurrence() {
        let table = FrequencyTable::from_bytes(b"abracadabra");
        assert_eq!(table.count(b'a'), 5);
        assert_eq!(table.count(b'b'), 2);
        assert_eq!(table.count(b'r'), 2);
        assert_eq!(table.count(b'c'), 1);
        assert_eq!(table.count(b'd'), 1);
        assert_eq!(table.count(b'z'), 0);
        assert_eq!(table.total(), 11);
        assert_eq!(table.distinct(), 5);
    }

    #[test]
    fn test_iter_ascending() {
        let table = FrequencyTable::from_bytes(b"cab");
        let symbols: Vec<u8> = table.iter().map(|(s, _)| s).collect();
        assert_eq!(symbols, vec![b'a', b'b', b'c']);
    }

    #[test]
    fn test_from_counts() {
        let table = FrequencyTable::from_counts([(b'a', 5), (b'b', 0), (b'a', 2)]).unwrap();
        assert_eq!(table.count(b'a'), 7);
        assert_eq!(table.distinct(), 1);
        assert_eq!(table.total(), 7);
    }

    #[test]
    fn test_merge_matches_single_pass() {
        let data = b"the quick brown fox jumps over the lazy dog";
        let (head, tail) = data.split_at(17);
        let mut merged = FrequencyTable::from_bytes(head);
        merged.merge(&FrequencyTable::from_bytes(tail)).unwrap();
        assert_eq!(merged, FrequencyTable::from_bytes(data));
    }

    #[test]
    fn test_chunked_progress() {
        let data = vec![7u8; 10];
        let config = HuffmanConfig::SEQUENTIAL.with_chunk_size(4);
        let mut reports = Vec::new();
        let table =
            FrequencyTable::count_with_progress(&data, &config, &mut |p| reports.push(p)).unwrap();

        assert_eq!(table.count(7), 10);
        let processed: Vec<u64> = reports.iter().map(|p| p.processed).collect();
        assert_eq!(processed, vec![4, 8, 10]);
        assert!(reports.iter().all(|p| p.stage == Stage::Counting));
    }

    #[test]
    fn test_from_counts_overflow() {
        let err = FrequencyTable::from_counts([(0, u64::MAX), (1, 1)]).unwrap_err();
        assert!(matches!(err, HuffError::InvariantViolation { .. }));

        let table = FrequencyTable::from_counts([(0, u64::MAX - 1), (1, 1)]).unwrap();
        assert_eq!(table.total(), u64::MAX);
    }

    #[test]
    fn test_merge_overflow_leaves_table_unchanged() {
        let half = FrequencyTable::from_counts([(b'a', u64::MAX / 2 + 1)]).unwrap();
        let mut merged = half.clone();
        assert!(merged.merge(&half).is_err());
        assert_eq!(merged, half);
    }

    #[test]
    fn test_entropy_uniform() {
        let data: Vec<u8> = (0..=255).collect();
        let table = FrequencyTable::from_bytes(&data);
        assert!((table.entropy() - 8.0).abs() < 1e-9);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let data: Vec<u8> = (0..100_000u32).map(|i| (i * 7 % 251) as u8).collect();
        assert_eq!(
            FrequencyTable::count_parallel(&data, 4096).unwrap(),
            FrequencyTable::from_bytes(&data)
        );
    }
}
