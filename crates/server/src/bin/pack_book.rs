//! Convert a JSON opening book into the binary format the server can also load.
//!
//! Usage: cargo run --bin pack-book -- <input.json> [output.bin]
//!
//! The input is validated with the same loader the server uses, so a book that
//! packs cleanly will also load at startup.

use anyhow::{bail, Context};
use chess_core::{load_book, save_book};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_OUTPUT_PATH: &str = "data/openings.bin";

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    let Some(input) = args.get(1).map(PathBuf::from) else {
        bail!("Usage: pack-book <input.json> [output.bin]");
    };
    let output = args
        .get(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH));

    if output.extension().and_then(|e| e.to_str()) != Some("bin") {
        bail!("Output path must end in .bin: {}", output.display());
    }

    println!("Reading {}...", input.display());
    let book = load_book(&input).with_context(|| format!("Failed to load {}", input.display()))?;

    let with_info = book.iter().filter(|(_, entry)| entry.has_info()).count();

    // Ensure output directory exists
    if let Some(parent) = Path::new(&output).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    println!("Writing to {}...", output.display());
    save_book(&book, &output).with_context(|| format!("Failed to write {}", output.display()))?;

    let file_size = fs::metadata(&output)?.len();

    println!();
    println!("Pack complete!");
    println!("  Positions: {}", book.len());
    println!("  With info: {}", with_info);
    println!("  File size: {} KB", file_size / 1024);
    println!("  Path:      {}", output.display());

    Ok(())
}
