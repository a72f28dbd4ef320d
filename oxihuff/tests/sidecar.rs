//! Code-table sidecar persistence tests.

use oxihuff::{CodeTableFile, EncodedPayload, HuffError, compress, decompress};

#[test]
fn test_json_roundtrip() {
    let input = b"She sells sea shells by the sea shore";
    let compressed = compress(input).unwrap();

    let json = serde_json::to_string_pretty(&CodeTableFile::from_compressed(&compressed)).unwrap();
    let packed = compressed.payload.bytes().to_vec();

    let file: CodeTableFile = serde_json::from_str(&json).unwrap();
    assert_eq!(file.original_len, input.len() as u64);

    let payload = EncodedPayload::new(packed, file.bit_len).unwrap();
    let codes = file.code_table().unwrap();
    let restored = decompress(payload.bytes(), payload.bit_len(), &codes).unwrap();
    assert_eq!(restored, input);
}

#[test]
fn test_json_shape() {
    let compressed = compress(b"aaaab").unwrap();
    let value = serde_json::to_value(CodeTableFile::from_compressed(&compressed)).unwrap();
    assert_eq!(value["version"], 1);
    assert_eq!(value["bit_len"], 5);
    assert_eq!(value["codes"][0]["symbol"], 97);
    assert_eq!(value["codes"][0]["code"], "1");
}

#[test]
fn test_tampered_table_is_rejected() {
    let compressed = compress(b"abcc").unwrap();
    let mut file = CodeTableFile::from_compressed(&compressed);
    // Make one code a prefix of another
    file.codes[0].code = "1".to_string();
    assert!(matches!(
        file.code_table(),
        Err(HuffError::InvalidCodeTable { .. })
    ));
}
