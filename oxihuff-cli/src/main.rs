//! OxiHuff CLI - The Oxidized Huffman coder
//!
//! A Pure Rust Huffman compressor. The packed payload carries no header, so
//! every payload is written with a JSON code-table sidecar next to it.

mod commands;
mod utils;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oxihuff")]
#[command(author, version, about = "The Oxidized Huffman coder - Pure Rust entropy coding")]
#[command(long_about = "
OxiHuff compresses a file with a Huffman code built from its own byte
frequencies. The payload is written as packed bits; the code table and exact
bit length go to a JSON sidecar (<output>.codes.json).

Examples:
  oxihuff compress book.txt
  oxihuff compress book.txt -o book.bin --codes book.json
  oxihuff decompress book.txt.huff
  oxihuff test book.txt.huff
  oxihuff stats book.txt
  oxihuff codes book.txt --json
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    #[command(alias = "c")]
    Compress {
        /// File to compress
        input: PathBuf,

        /// Output payload file (default: <input>.huff)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Code-table sidecar file (default: <output>.codes.json)
        #[arg(long)]
        codes: Option<PathBuf>,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,

        /// Show progress bar
        #[arg(short = 'P', long)]
        progress: bool,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Decompress a payload using its code-table sidecar
    #[command(aliases = ["x", "d"])]
    Decompress {
        /// Payload file to decompress
        input: PathBuf,

        /// Output file (default: strip .huff, else append .out)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Code-table sidecar file (default: <input>.codes.json)
        #[arg(long)]
        codes: Option<PathBuf>,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Test that a payload decodes against its sidecar
    #[command(alias = "t")]
    Test {
        /// Payload file to test
        input: PathBuf,

        /// Code-table sidecar file (default: <input>.codes.json)
        #[arg(long)]
        codes: Option<PathBuf>,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show compression statistics without writing anything
    #[command(aliases = ["s", "i"])]
    Stats {
        /// File to analyze
        input: PathBuf,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Print the code table of a file
    Codes {
        /// File to analyze
        input: PathBuf,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            codes,
            verbose,
            progress,
            json,
        } => commands::cmd_compress(
            &input,
            &commands::CompressOptions {
                output,
                codes,
                verbose,
                progress,
                json,
            },
        ),
        Commands::Decompress {
            input,
            output,
            codes,
            verbose,
        } => commands::cmd_decompress(&input, output, codes, verbose),
        Commands::Test {
            input,
            codes,
            verbose,
        } => commands::cmd_test(&input, codes, verbose),
        Commands::Stats { input, json } => commands::cmd_stats(&input, json),
        Commands::Codes { input, json } => commands::cmd_codes(&input, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
