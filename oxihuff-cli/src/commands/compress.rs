//! Compress command implementation.

use crate::utils::{
    create_progress_bar, default_payload_path, read_file, sidecar_path, write_file,
};
use oxihuff::{CodeTableFile, HuffmanConfig, compress_with_progress};
use std::path::{Path, PathBuf};

/// Options for compressing a file.
pub struct CompressOptions {
    pub output: Option<PathBuf>,
    pub codes: Option<PathBuf>,
    pub verbose: bool,
    pub progress: bool,
    pub json: bool,
}

pub fn cmd_compress(
    input: &Path,
    options: &CompressOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = read_file(input)?;
    let output = options
        .output
        .clone()
        .unwrap_or_else(|| default_payload_path(input));
    let codes_path = sidecar_path(&output, options.codes.clone());

    // Counting and packing each walk the whole input once
    let pb = create_progress_bar(data.len() as u64 * 2, options.progress && !options.json);
    let compressed = compress_with_progress(&data, &HuffmanConfig::DEFAULT, |p| {
        pb.set_message(p.stage.name());
        pb.set_position(p.overall());
    })?;
    pb.finish_and_clear();

    write_file(&output, compressed.payload.bytes())?;
    let sidecar = CodeTableFile::from_compressed(&compressed);
    write_file(&codes_path, serde_json::to_string_pretty(&sidecar)?)?;

    let stats = &compressed.stats;
    if options.json {
        let json_output = serde_json::json!({
            "input": input.display().to_string(),
            "output": output.display().to_string(),
            "codes": codes_path.display().to_string(),
            "original_bytes": stats.original_bytes,
            "encoded_bits": stats.encoded_bits,
            "packed_bytes": stats.packed_bytes(),
            "reduction_percent": stats.reduction_percent(),
        });
        println!("{}", serde_json::to_string_pretty(&json_output)?);
        return Ok(());
    }

    println!("Compressed: {} -> {}", input.display(), output.display());
    if options.verbose {
        println!("  Code table: {}", codes_path.display());
        println!("  Symbols: {}", compressed.codes.len());
        println!("  Longest code: {} bits", compressed.codes.max_code_len());
        println!(
            "  Encoded: {} bits ({} bytes, {} pad bits)",
            stats.encoded_bits,
            stats.packed_bytes(),
            compressed.payload.padding_bits()
        );
    }
    println!();
    println!("{}", stats);

    Ok(())
}
