//! Code tables: the symbol to bit-string mapping derived from a tree.
//!
//! Codes are root-to-leaf paths with left = 0 and right = 1. A tree that is
//! a single leaf has no path at all, so its symbol is given the one-bit code
//! `0`; an empty code could not delimit symbols in the packed stream.

use crate::frequency::{ALPHABET_SIZE, FrequencyTable};
use crate::tree::{HuffmanTree, Node};
use oxihuff_core::error::{HuffError, Result};
use std::fmt;
use std::str::FromStr;

/// Longest code a table can hold.
///
/// Weights are `u64`, so a real Huffman tree never gets deeper than 92
/// levels; the extra room only matters for tables loaded from outside.
pub const MAX_CODE_LENGTH: u8 = 128;

/// A single prefix code, stored MSB-first in the low `len` bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code {
    bits: u128,
    len: u8,
}

impl Code {
    /// The one-bit code given to the only symbol of a single-leaf tree.
    pub const SINGLE: Self = Self { bits: 0, len: 1 };

    /// Zero-length path at the root (never stored in a table).
    const ROOT: Self = Self { bits: 0, len: 0 };

    /// Create a code from its bits and length.
    pub fn new(bits: u128, len: u8) -> Result<Self> {
        if len == 0 || len > MAX_CODE_LENGTH {
            return Err(HuffError::invalid_code_table(format!(
                "code length {len} outside 1..={MAX_CODE_LENGTH}"
            )));
        }
        if len < 128 && bits >> len != 0 {
            return Err(HuffError::invalid_code_table(format!(
                "code value {bits:#b} does not fit in {len} bits"
            )));
        }
        Ok(Self { bits, len })
    }

    /// The code bits, right-aligned.
    pub fn bits(&self) -> u128 {
        self.bits
    }

    /// Number of bits in the code.
    pub fn len(&self) -> u8 {
        self.len
    }

    /// Always false for a code in a table.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The `index`-th bit, counting from the first bit emitted, or `None`
    /// past the end of the code.
    pub fn bit(&self, index: u8) -> Option<bool> {
        (index < self.len).then(|| (self.bits >> (self.len - 1 - index)) & 1 == 1)
    }

    /// Iterate the bits in emission order.
    pub fn iter_bits(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| (self.bits >> (self.len - 1 - i)) & 1 == 1)
    }

    /// Whether `self` is a prefix of `other` (a code is a prefix of itself).
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        self.len <= other.len && other.bits >> (other.len - self.len) == self.bits
    }

    /// Extend the path by one step.
    fn push(self, bit: bool) -> Self {
        Self {
            bits: (self.bits << 1) | u128::from(bit),
            len: self.len + 1,
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter_bits() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = HuffError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() || s.len() > MAX_CODE_LENGTH as usize {
            return Err(HuffError::invalid_code_table(format!(
                "code string length {} outside 1..={MAX_CODE_LENGTH}",
                s.len()
            )));
        }

        let mut code = Self::ROOT;
        for c in s.chars() {
            code = match c {
                '0' => code.push(false),
                '1' => code.push(true),
                other => {
                    return Err(HuffError::invalid_code_table(format!(
                        "invalid character {other:?} in code {s:?}"
                    )));
                }
            };
        }
        Ok(code)
    }
}

/// Mapping from every present symbol to its code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: [Option<Code>; ALPHABET_SIZE],
}

impl CodeTable {
    /// Create an empty table (the table of an empty input).
    pub fn new() -> Self {
        Self {
            codes: [None; ALPHABET_SIZE],
        }
    }

    /// Derive the table by walking `tree` depth-first.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut table = Self::new();
        match tree.root() {
            Node::Leaf { symbol, .. } => table.codes[*symbol as usize] = Some(Code::SINGLE),
            root => table.assign(root, Code::ROOT),
        }
        table
    }

    fn assign(&mut self, node: &Node, path: Code) {
        match node {
            Node::Leaf { symbol, .. } => self.codes[*symbol as usize] = Some(path),
            Node::Internal { left, right, .. } => {
                self.assign(left, path.push(false));
                self.assign(right, path.push(true));
            }
        }
    }

    /// Build and validate a table from explicit entries.
    ///
    /// Fails if a symbol appears twice or the codes are not prefix-free.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u8, Code)>,
    {
        let mut table = Self::new();
        for (symbol, code) in entries {
            let slot = &mut table.codes[symbol as usize];
            if slot.is_some() {
                return Err(HuffError::invalid_code_table(format!(
                    "symbol {symbol:#04x} listed twice"
                )));
            }
            *slot = Some(code);
        }
        table.validate()?;
        Ok(table)
    }

    /// Code for `symbol`, if present.
    pub fn get(&self, symbol: u8) -> Option<Code> {
        self.codes[symbol as usize]
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|c| c.is_some()).count()
    }

    /// Whether the table holds no codes.
    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(Option::is_none)
    }

    /// Iterate `(symbol, code)` in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Code)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(symbol, code)| code.map(|c| (symbol as u8, c)))
    }

    /// Length of the longest code (0 for an empty table).
    pub fn max_code_len(&self) -> u8 {
        self.iter().map(|(_, c)| c.len()).max().unwrap_or(0)
    }

    /// Check that no code is a prefix of another.
    pub fn validate(&self) -> Result<()> {
        let entries: Vec<(u8, Code)> = self.iter().collect();
        for (i, (sym_a, a)) in entries.iter().enumerate() {
            for (sym_b, b) in &entries[i + 1..] {
                if a.is_prefix_of(b) || b.is_prefix_of(a) {
                    return Err(HuffError::invalid_code_table(format!(
                        "codes for {sym_a:#04x} ({a}) and {sym_b:#04x} ({b}) are not prefix-free"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Exact encoded bit length of an input with these frequencies.
    ///
    /// Fails if a present symbol has no code or the length overflows `u64`.
    pub fn encoded_bit_len(&self, frequencies: &FrequencyTable) -> Result<u64> {
        frequencies.iter().try_fold(0u64, |bits, (symbol, count)| {
            let code = self.get(symbol).ok_or_else(|| missing_code(symbol))?;
            count
                .checked_mul(u64::from(code.len()))
                .and_then(|symbol_bits| bits.checked_add(symbol_bits))
                .ok_or_else(|| {
                    HuffError::invariant(format!(
                        "encoded length exceeds {} bits at symbol {symbol:#04x}",
                        u64::MAX
                    ))
                })
        })
    }
}

impl Default for CodeTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Error for a symbol the table has no code for.
pub(crate) fn missing_code(symbol: u8) -> HuffError {
    HuffError::invariant(format!("symbol {symbol:#04x} has no code in the table"))
}
