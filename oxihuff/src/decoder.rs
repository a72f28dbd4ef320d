//! Huffman decoder (bit unpacking).
//!
//! Decoding walks a binary trie one bit at a time: 0 goes left, 1 goes
//! right, and reaching a leaf emits its symbol and restarts at the root. The
//! trie is flattened into an arena so it can be built either from a
//! [`HuffmanTree`] or from a [`CodeTable`] persisted next to the payload.
//!
//! A single-leaf tree is decoded through a root whose only child is the
//! leaf on the 0 branch, matching the one-bit code `0` the encoder emits.

use crate::codes::{Code, CodeTable};
use crate::encoder::EncodedPayload;
use crate::tree::{HuffmanTree, Node};
use oxihuff_core::bitstream::BitReader;
use oxihuff_core::error::{HuffError, Result};

/// Index of the root in the arena.
const ROOT: usize = 0;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: [Option<usize>; 2],
    symbol: Option<u8>,
}

/// Huffman decoder.
#[derive(Debug, Clone)]
pub struct HuffmanDecoder {
    nodes: Vec<TrieNode>,
}

impl HuffmanDecoder {
    fn empty() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
        }
    }

    /// Create a decoder that walks `tree`.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut decoder = Self::empty();
        match tree.root() {
            leaf @ Node::Leaf { .. } => {
                let child = decoder.push_subtree(leaf);
                decoder.nodes[ROOT].children[0] = Some(child);
            }
            Node::Internal { left, right, .. } => {
                let l = decoder.push_subtree(left);
                let r = decoder.push_subtree(right);
                decoder.nodes[ROOT].children = [Some(l), Some(r)];
            }
        }
        decoder
    }

    fn push_subtree(&mut self, node: &Node) -> usize {
        let index = self.nodes.len();
        self.nodes.push(TrieNode::default());
        match node {
            Node::Leaf { symbol, .. } => self.nodes[index].symbol = Some(*symbol),
            Node::Internal { left, right, .. } => {
                let l = self.push_subtree(left);
                let r = self.push_subtree(right);
                self.nodes[index].children = [Some(l), Some(r)];
            }
        }
        index
    }

    /// Create a decoder from a code table.
    ///
    /// The table is checked while the trie is built: two codes sharing a
    /// prefix fail with an invalid code table error.
    pub fn from_code_table(codes: &CodeTable) -> Result<Self> {
        let mut decoder = Self::empty();
        for (symbol, code) in codes.iter() {
            decoder.insert(symbol, code)?;
        }
        Ok(decoder)
    }

    fn insert(&mut self, symbol: u8, code: Code) -> Result<()> {
        let conflict = || {
            HuffError::invalid_code_table(format!(
                "code {code} for symbol {symbol:#04x} overlaps another code"
            ))
        };

        let mut node = ROOT;
        for bit in code.iter_bits() {
            if self.nodes[node].symbol.is_some() {
                return Err(conflict());
            }
            let bit = usize::from(bit);
            node = match self.nodes[node].children[bit] {
                Some(next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node].children[bit] = Some(next);
                    next
                }
            };
        }

        let leaf = &mut self.nodes[node];
        if leaf.symbol.is_some() || leaf.children.iter().any(Option::is_some) {
            return Err(conflict());
        }
        leaf.symbol = Some(symbol);
        Ok(())
    }

    /// Decode exactly `bit_len` bits of `data`, ignoring any pad bits.
    ///
    /// Fails with a corrupt stream error if a bit has no matching branch or
    /// the stream ends part-way through a code.
    pub fn decode(&self, data: &[u8], bit_len: u64) -> Result<Vec<u8>> {
        let mut reader = BitReader::new(data, bit_len)?;
        let mut output = Vec::new();
        let mut node = ROOT;

        while !reader.is_at_end() {
            let position = reader.bit_position();
            let bit = reader.read_bit()?;

            let Some(next) = self.nodes[node].children[usize::from(bit)] else {
                return Err(HuffError::corrupt_stream(
                    position,
                    format!("no code continues with bit {}", u8::from(bit)),
                ));
            };

            match self.nodes[next].symbol {
                Some(symbol) => {
                    output.push(symbol);
                    node = ROOT;
                }
                None => node = next,
            }
        }

        if node != ROOT {
            return Err(HuffError::corrupt_stream(
                bit_len,
                "stream ended in the middle of a code",
            ));
        }

        Ok(output)
    }

    /// Decode a packed payload.
    pub fn decode_payload(&self, payload: &EncodedPayload) -> Result<Vec<u8>> {
        self.decode(payload.bytes(), payload.bit_len())
    }
}
