//! Decompress command implementation.

use crate::utils::{default_restored_path, load_payload, sidecar_path, write_file};
use oxihuff::HuffmanDecoder;
use std::path::{Path, PathBuf};

pub fn cmd_decompress(
    input: &Path,
    output: Option<PathBuf>,
    codes: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let codes_path = sidecar_path(input, codes);
    let output = output.unwrap_or_else(|| default_restored_path(input));

    let (payload, sidecar) = load_payload(input, &codes_path)?;
    let table = sidecar.code_table()?;
    let data = HuffmanDecoder::from_code_table(&table)?.decode_payload(&payload)?;

    if data.len() as u64 != sidecar.original_len {
        return Err(format!(
            "decoded {} bytes but the code table records {}",
            data.len(),
            sidecar.original_len
        )
        .into());
    }

    write_file(&output, &data)?;

    if verbose {
        println!("  Code table: {}", codes_path.display());
        println!(
            "  Decoded {} bits into {} bytes",
            payload.bit_len(),
            data.len()
        );
    }
    println!("Decompressed: {} -> {}", input.display(), output.display());

    Ok(())
}
