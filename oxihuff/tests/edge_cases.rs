//! Edge case tests for Huffman compression.

use oxihuff::{
    Code, CodeTable, FrequencyTable, HuffError, HuffmanConfig, HuffmanDecoder, HuffmanTree, Stage,
    compress, compress_with_progress, decompress, decompress_with_tree,
};

fn roundtrip(input: &[u8]) {
    let compressed = compress(input).unwrap();
    let payload = &compressed.payload;
    let decompressed = decompress(payload.bytes(), payload.bit_len(), &compressed.codes).unwrap();
    assert_eq!(decompressed, input);
}

#[test]
fn test_empty_input() {
    let compressed = compress(b"").unwrap();
    assert!(compressed.payload.bytes().is_empty());
    assert_eq!(compressed.payload.bit_len(), 0);
    assert_eq!(compressed.stats.reduction_percent(), 0.0);
    assert!(decompress(&[], 0, &compressed.codes).unwrap().is_empty());
}

#[test]
fn test_single_byte() {
    let compressed = compress(b"A").unwrap();
    assert_eq!(compressed.payload.bit_len(), 1);
    assert_eq!(compressed.payload.bytes(), &[0x00]);
    roundtrip(b"A");
}

#[test]
fn test_thousand_copies_of_one_byte() {
    let input = vec![0x41u8; 1000];
    let compressed = compress(&input).unwrap();
    let code = compressed.codes.get(0x41).unwrap();
    assert_eq!(code.len(), 1);
    assert_eq!(compressed.payload.bit_len(), 1000);

    let tree = compressed.tree.as_ref().unwrap();
    let decompressed = decompress_with_tree(
        compressed.payload.bytes(),
        compressed.payload.bit_len(),
        tree,
    )
    .unwrap();
    assert_eq!(decompressed, input);
}

#[test]
fn test_aaaab_reduction() {
    let compressed = compress(b"aaaab").unwrap();
    assert_eq!(compressed.payload.to_bit_string(), "11110");
    assert_eq!(compressed.stats.original_bits(), 40);
    assert_eq!(compressed.stats.encoded_bits, 5);
    assert!((compressed.stats.reduction_percent() - 87.5).abs() < 1e-9);
}

#[test]
fn test_equal_weight_pair_is_reproducible() {
    let table = FrequencyTable::from_counts([(b'a', 5), (b'b', 5)]).unwrap();
    for _ in 0..10 {
        let codes = HuffmanTree::build(&table).unwrap().code_table();
        assert_eq!(codes.get(b'a').unwrap().to_string(), "0");
        assert_eq!(codes.get(b'b').unwrap().to_string(), "1");
    }
}

#[test]
fn test_padding_is_zero_and_ignored() {
    // c = 0, a = 10, b = 11: "abc" is 5 bits
    let input = b"abc";
    let compressed = compress(input).unwrap();
    let payload = &compressed.payload;
    assert_eq!(payload.to_bit_string(), "10110");
    assert_eq!(payload.bit_len(), 5);
    assert_eq!(payload.padding_bits(), 3);
    assert_eq!(payload.bytes(), &[0b1011_0000]);
    roundtrip(input);
}

#[test]
fn test_all_byte_values() {
    let input: Vec<u8> = (0..=255).collect();
    roundtrip(&input);
}

#[test]
fn test_skewed_distribution() {
    // Fibonacci-like weights produce a deep tree
    let mut input = Vec::new();
    let (mut a, mut b) = (1usize, 1usize);
    for symbol in 0..20u8 {
        input.extend(std::iter::repeat_n(symbol, a));
        (a, b) = (b, a + b);
    }
    let compressed = compress(&input).unwrap();
    assert_eq!(compressed.codes.max_code_len(), 19);
    roundtrip(&input);
}

#[test]
fn test_large_input() {
    let mut input = Vec::with_capacity(1024 * 1024);
    let pattern = b"The quick brown fox jumps over the lazy dog. ";
    while input.len() < 1024 * 1024 {
        input.extend_from_slice(pattern);
    }
    input.truncate(1024 * 1024);

    let compressed = compress(&input).unwrap();
    assert!(compressed.stats.reduction_percent() > 30.0);
    roundtrip(&input);
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_and_sequential_counts_agree() {
    let input: Vec<u8> = (0..2 * 1024 * 1024u32).map(|i| (i % 97) as u8).collect();
    assert!(HuffmanConfig::DEFAULT.counts_in_parallel(input.len()));
    assert!(!HuffmanConfig::SEQUENTIAL.counts_in_parallel(input.len()));

    let default = compress(&input).unwrap();
    let sequential = oxihuff::compress_with_config(&input, &HuffmanConfig::SEQUENTIAL).unwrap();
    assert_eq!(default.frequencies, sequential.frequencies);
    assert_eq!(default.payload, sequential.payload);
}

#[test]
fn test_progress_is_monotonic_and_complete() {
    let input = vec![3u8; 10_000];
    let config = HuffmanConfig::SEQUENTIAL.with_chunk_size(1000);
    let mut reports = Vec::new();
    compress_with_progress(&input, &config, |p| reports.push(p)).unwrap();

    assert_eq!(reports.len(), 20);
    assert!(reports.windows(2).all(|w| w[0].overall() < w[1].overall()));
    let last = reports.last().unwrap();
    assert_eq!(last.stage, Stage::Encoding);
    assert_eq!(last.processed, 10_000);
}

#[test]
fn test_truncated_payload_is_corrupt() {
    let compressed = compress(b"abc").unwrap();
    // A lone 1 bit stops inside the code for a or b
    let err = decompress(compressed.payload.bytes(), 1, &compressed.codes).unwrap_err();
    assert!(matches!(err, HuffError::CorruptStream { bit_position: 1, .. }));
}

#[test]
fn test_declared_length_beyond_buffer() {
    let compressed = compress(b"hello").unwrap();
    let too_long = compressed.payload.packed_len() as u64 * 8 + 1;
    let err = decompress(compressed.payload.bytes(), too_long, &compressed.codes).unwrap_err();
    assert!(err.is_corruption());
}

#[test]
fn test_decoder_rejects_foreign_table() {
    let codes = CodeTable::from_entries([(b'x', "1".parse::<Code>().unwrap())]).unwrap();
    let decoder = HuffmanDecoder::from_code_table(&codes).unwrap();
    // A 0 bit has no branch in this table
    assert!(decoder.decode(&[0x00], 1).is_err());
}
