//! Codes command implementation.

use crate::utils::{display_symbol, read_file};
use oxihuff::compress;
use serde::Serialize;
use std::path::Path;

/// JSON serializable row of the code table.
#[derive(Debug, Serialize)]
struct CodeRowJson {
    symbol: u8,
    count: u64,
    length: u8,
    code: String,
}

pub fn cmd_codes(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let data = read_file(input)?;
    let compressed = compress(&data)?;

    let mut rows: Vec<CodeRowJson> = compressed
        .codes
        .iter()
        .map(|(symbol, code)| CodeRowJson {
            symbol,
            count: compressed.frequencies.count(symbol),
            length: code.len(),
            code: code.to_string(),
        })
        .collect();
    // Most frequent first, ties in symbol order
    rows.sort_by(|a, b| b.count.cmp(&a.count).then(a.symbol.cmp(&b.symbol)));

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("{:>8} {:>10} {:>4}  Code", "Symbol", "Count", "Bits");
    println!("{}", "-".repeat(40));
    for row in &rows {
        println!(
            "{:>8} {:>10} {:>4}  {}",
            display_symbol(row.symbol),
            row.count,
            row.length,
            row.code
        );
    }
    println!("{}", "-".repeat(40));
    println!("{} symbols, {} bytes", rows.len(), data.len());

    Ok(())
}
