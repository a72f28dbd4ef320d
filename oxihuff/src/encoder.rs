//! Huffman encoder (bit packing).

use crate::codes::{CodeTable, missing_code};
use crate::progress::{Progress, Stage};
use oxihuff_core::bitstream::{BitReader, BitWriter};
use oxihuff_core::error::{HuffError, Result};

/// Packed output of an encoding: zero-padded bytes plus the exact number of
/// meaningful bits.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EncodedPayload {
    bytes: Vec<u8>,
    bit_len: u64,
}

impl EncodedPayload {
    /// Wrap packed bytes read back from storage.
    ///
    /// The bit length must fit in the buffer and leave less than one byte of
    /// padding.
    pub fn new(bytes: Vec<u8>, bit_len: u64) -> Result<Self> {
        let expected_len = bit_len.div_ceil(8);
        if bytes.len() as u64 != expected_len {
            return Err(HuffError::corrupt_stream(
                bytes.len() as u64 * 8,
                format!(
                    "{bit_len} bits need {expected_len} packed bytes, found {}",
                    bytes.len()
                ),
            ));
        }
        Ok(Self { bytes, bit_len })
    }

    /// The packed bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the payload and return the packed bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Number of meaningful bits.
    pub fn bit_len(&self) -> u64 {
        self.bit_len
    }

    /// Number of packed bytes.
    pub fn packed_len(&self) -> usize {
        self.bytes.len()
    }

    /// Number of zero bits padding the final byte.
    pub fn padding_bits(&self) -> u8 {
        (self.bytes.len() as u64 * 8 - self.bit_len) as u8
    }

    /// Whether the payload holds no bits.
    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }

    /// Render the meaningful bits as a `"0101..."` string.
    pub fn to_bit_string(&self) -> String {
        let mut out = String::with_capacity(self.bit_len as usize);
        if let Ok(mut reader) = BitReader::new(&self.bytes, self.bit_len) {
            while let Ok(bit) = reader.read_bit() {
                out.push(if bit { '1' } else { '0' });
            }
        }
        out
    }
}

/// Huffman encoder for a fixed code table.
#[derive(Debug, Clone, Copy)]
pub struct HuffmanEncoder<'a> {
    codes: &'a CodeTable,
}

impl<'a> HuffmanEncoder<'a> {
    /// Create an encoder that emits codes from `codes`.
    pub fn new(codes: &'a CodeTable) -> Self {
        Self { codes }
    }

    /// Encode `input` into a packed payload.
    ///
    /// Every input byte must have a code; a missing code is an invariant
    /// violation and aborts the encoding.
    pub fn encode(&self, input: &[u8]) -> Result<EncodedPayload> {
        self.encode_with_progress(input, input.len().max(1), &mut |_| {})
    }

    /// Encode `input`, reporting progress every `chunk_size` input bytes.
    pub fn encode_with_progress(
        &self,
        input: &[u8],
        chunk_size: usize,
        progress: &mut dyn FnMut(Progress),
    ) -> Result<EncodedPayload> {
        let total = input.len() as u64;
        let mut writer = BitWriter::with_capacity(input.len() / 2);
        let mut processed = 0u64;

        for chunk in input.chunks(chunk_size.max(1)) {
            for &symbol in chunk {
                let code = self.codes.get(symbol).ok_or_else(|| missing_code(symbol))?;
                writer.write_code(code.bits(), code.len());
            }
            processed += chunk.len() as u64;
            progress(Progress::new(Stage::Encoding, processed, total));
        }

        let (bytes, bit_len) = writer.finish();
        Ok(EncodedPayload { bytes, bit_len })
    }
}
