//! MSB-first bit-level I/O for Huffman codes.
//!
//! This module provides `BitWriter` and `BitReader` for packing variable-length
//! codes into bytes and reading them back one bit at a time.
//!
//! # Bit Ordering
//!
//! Bits are packed MSB-first: the first bit written becomes bit 7 of byte 0.
//! This matches reading a bit string such as `"10110"` left to right and
//! grouping it into 8-bit chunks. A final partial byte is zero-padded on the
//! right, so the exact bit length has to travel alongside the bytes.
//!
//! # Example
//!
//! ```
//! use oxihuff_core::bitstream::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.write_bits(0b101, 3);
//! writer.write_bits(0b1100, 4);
//! let (bytes, bit_len) = writer.finish();
//! assert_eq!(bytes, vec![0b1011_1000]);
//! assert_eq!(bit_len, 7);
//!
//! let mut reader = BitReader::new(&bytes, bit_len).unwrap();
//! assert_eq!(reader.read_bits(3).unwrap(), 0b101);
//! assert_eq!(reader.read_bits(4).unwrap(), 0b1100);
//! assert!(reader.is_at_end());
//! ```

use crate::error::{HuffError, Result};

/// A bit-level writer that packs MSB-first into an owned buffer.
#[derive(Debug, Default)]
pub struct BitWriter {
    /// Completed bytes.
    output: Vec<u8>,
    /// Pending bits, right-aligned.
    buffer: u64,
    /// Number of pending bits in buffer (always < 8 between calls).
    bits_in_buffer: u8,
    /// Total bits written.
    total_bits_written: u64,
}

impl BitWriter {
    /// Create a new, empty `BitWriter`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a `BitWriter` with room for `bytes` output bytes.
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            output: Vec::with_capacity(bytes),
            ..Self::default()
        }
    }

    /// Get the total number of bits written so far.
    pub fn bits_written(&self) -> u64 {
        self.total_bits_written
    }

    /// Move complete bytes from the bit buffer to the output.
    #[inline]
    fn flush_bytes(&mut self) {
        while self.bits_in_buffer >= 8 {
            let byte = (self.buffer >> (self.bits_in_buffer - 8)) as u8;
            self.output.push(byte);
            self.bits_in_buffer -= 8;
        }
        self.buffer &= (1u64 << self.bits_in_buffer) - 1;
    }

    /// Write up to 32 bits, most significant first.
    ///
    /// # Arguments
    ///
    /// * `value` - The bits to write, right-aligned
    /// * `count` - Number of bits to write (0-32)
    #[inline]
    pub fn write_bits(&mut self, value: u32, count: u8) {
        debug_assert!(count <= 32, "Cannot write more than 32 bits at once");

        if count == 0 {
            return;
        }

        let mask = if count == 32 {
            u32::MAX
        } else {
            (1u32 << count) - 1
        };

        self.buffer = (self.buffer << count) | u64::from(value & mask);
        self.bits_in_buffer += count;
        self.total_bits_written += u64::from(count);

        self.flush_bytes();
    }

    /// Write a single bit.
    #[inline]
    pub fn write_bit(&mut self, bit: bool) {
        self.write_bits(u32::from(bit), 1);
    }

    /// Write a code of up to 128 bits, most significant first.
    pub fn write_code(&mut self, value: u128, len: u8) {
        debug_assert!(len <= 128, "Codes are at most 128 bits");

        let mut remaining = len;
        while remaining > 0 {
            let take = remaining.min(32);
            let shift = remaining - take;
            let chunk = ((value >> shift) & ((1u128 << take) - 1)) as u32;
            self.write_bits(chunk, take);
            remaining -= take;
        }
    }

    /// Pad the final byte with zeros and return `(bytes, bit_len)`.
    pub fn finish(mut self) -> (Vec<u8>, u64) {
        if self.bits_in_buffer > 0 {
            let padding = 8 - self.bits_in_buffer;
            let byte = (self.buffer << padding) as u8;
            self.output.push(byte);
            self.buffer = 0;
            self.bits_in_buffer = 0;
        }
        (self.output, self.total_bits_written)
    }
}

/// A bit-level reader over a packed MSB-first buffer with a declared length.
///
/// Reads stop at the declared bit length; pad bits past it are never
/// returned.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    /// Packed input.
    data: &'a [u8],
    /// Number of meaningful bits in `data`.
    bit_len: u64,
    /// Next bit to read.
    position: u64,
}

impl<'a> BitReader<'a> {
    /// Create a reader over `data` holding exactly `bit_len` meaningful bits.
    ///
    /// Fails with a corrupt stream error if `bit_len` is larger than the
    /// buffer can hold.
    pub fn new(data: &'a [u8], bit_len: u64) -> Result<Self> {
        let capacity = data.len() as u64 * 8;
        if bit_len > capacity {
            return Err(HuffError::corrupt_stream(
                capacity,
                format!("declared bit length {bit_len} exceeds buffer of {capacity} bits"),
            ));
        }

        Ok(Self {
            data,
            bit_len,
            position: 0,
        })
    }

    /// Get the current bit position (for error reporting).
    pub fn bit_position(&self) -> u64 {
        self.position
    }

    /// Get the declared number of meaningful bits.
    pub fn bit_len(&self) -> u64 {
        self.bit_len
    }

    /// Number of meaningful bits not yet read.
    pub fn remaining(&self) -> u64 {
        self.bit_len - self.position
    }

    /// Whether every meaningful bit has been read.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.bit_len
    }

    /// Read a single bit.
    #[inline]
    pub fn read_bit(&mut self) -> Result<bool> {
        if self.is_at_end() {
            return Err(HuffError::unexpected_eof(self.position));
        }

        let byte = self.data[(self.position / 8) as usize];
        let shift = 7 - (self.position % 8) as u8;
        self.position += 1;

        Ok((byte >> shift) & 1 == 1)
    }

    /// Read up to 32 bits, most significant first.
    ///
    /// # Arguments
    ///
    /// * `count` - Number of bits to read (0-32)
    pub fn read_bits(&mut self, count: u8) -> Result<u32> {
        debug_assert!(count <= 32, "Cannot read more than 32 bits at once");

        if u64::from(count) > self.remaining() {
            return Err(HuffError::unexpected_eof(self.position));
        }

        let mut value = 0u32;
        for _ in 0..count {
            value = (value << 1) | u32::from(self.read_bit()?);
        }
        Ok(value)
    }
}
