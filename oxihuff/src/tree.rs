//! Huffman tree construction.
//!
//! The tree is built by repeatedly merging the two lightest nodes of a
//! min-heap. Equal weights are ordered by creation sequence: leaves are
//! numbered in ascending symbol order, merged nodes continue the numbering.
//! This makes the resulting tree (and therefore every code) deterministic.

use crate::codes::CodeTable;
use crate::frequency::FrequencyTable;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Huffman tree node.
///
/// Each internal node owns exactly two subtrees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A symbol and its weight.
    Leaf {
        /// The symbol.
        symbol: u8,
        /// Occurrence count.
        weight: u64,
    },
    /// A merge of two subtrees.
    Internal {
        /// Sum of both children's weights.
        weight: u64,
        /// Subtree reached by a 0 bit.
        left: Box<Node>,
        /// Subtree reached by a 1 bit.
        right: Box<Node>,
    },
}

impl Node {
    /// Weight of this node.
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    /// Symbol held by a leaf.
    pub fn symbol(&self) -> Option<u8> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Child reached by `bit` (false = left, true = right).
    pub fn child(&self, bit: bool) -> Option<&Node> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { left, right, .. } => Some(if bit { &**right } else { &**left }),
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Heap entry ordered so that `BinaryHeap` pops the lightest, oldest node.
#[derive(Debug)]
struct HeapEntry {
    weight: u64,
    sequence: u64,
    node: Node,
}

impl HeapEntry {
    fn key(&self) -> (u64, u64) {
        (self.weight, self.sequence)
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key()) // Min-priority queue
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A Huffman tree built from a frequency table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Node,
}

impl HuffmanTree {
    /// Build the tree for `frequencies`.
    ///
    /// Returns `None` for an empty table. A table with a single symbol yields
    /// a lone leaf. Every subtree weight is at most the table total, so
    /// building never overflows.
    pub fn build(frequencies: &FrequencyTable) -> Option<Self> {
        let mut heap = BinaryHeap::with_capacity(frequencies.distinct());
        let mut sequence = 0u64;

        for (symbol, weight) in frequencies.iter() {
            heap.push(HeapEntry {
                weight,
                sequence,
                node: Node::Leaf { symbol, weight },
            });
            sequence += 1;
        }

        while heap.len() > 1 {
            let (Some(left), Some(right)) = (heap.pop(), heap.pop()) else {
                break;
            };

            // Bounded by the table total, which `FrequencyTable` keeps within u64
            let weight = left.weight.saturating_add(right.weight);
            heap.push(HeapEntry {
                weight,
                sequence,
                node: Node::Internal {
                    weight,
                    left: Box::new(left.node),
                    right: Box::new(right.node),
                },
            });
            sequence += 1;
        }

        heap.pop().map(|entry| Self { root: entry.node })
    }

    /// Build a tree directly from input bytes.
    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        Self::build(&FrequencyTable::from_bytes(data))
    }

    /// The root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Total weight, equal to the input length.
    pub fn weight(&self) -> u64 {
        self.root.weight()
    }

    /// Number of leaves (distinct symbols).
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Number of internal nodes, always `leaf_count() - 1`.
    pub fn internal_count(&self) -> usize {
        self.leaf_count() - 1
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Derive the code table for this tree.
    pub fn code_table(&self) -> CodeTable {
        CodeTable::from_tree(self)
    }
}
