//! Stats command implementation.

use crate::utils::read_file;
use oxihuff::compress;
use std::path::Path;

pub fn cmd_stats(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let data = read_file(input)?;
    let compressed = compress(&data)?;
    let stats = &compressed.stats;
    let frequencies = &compressed.frequencies;

    if json {
        let json_output = serde_json::json!({
            "file": input.display().to_string(),
            "original_bytes": stats.original_bytes,
            "original_bits": stats.original_bits(),
            "encoded_bits": stats.encoded_bits,
            "packed_bytes": stats.packed_bytes(),
            "reduction_percent": stats.reduction_percent(),
            "compression_ratio": stats.compression_ratio(),
            "bits_per_symbol": stats.bits_per_symbol(),
            "entropy": frequencies.entropy(),
            "distinct_symbols": frequencies.distinct(),
            "max_code_length": compressed.codes.max_code_len(),
        });
        println!("{}", serde_json::to_string_pretty(&json_output)?);
        return Ok(());
    }

    println!("File Statistics");
    println!("===============");
    println!("File: {}", input.display());
    println!("Distinct symbols: {}", frequencies.distinct());
    println!("Entropy: {:.4} bits/symbol", frequencies.entropy());
    println!("Average code length: {:.4} bits/symbol", stats.bits_per_symbol());
    println!("Longest code: {} bits", compressed.codes.max_code_len());
    println!();
    println!("{}", stats);

    Ok(())
}
