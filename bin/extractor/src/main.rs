use anyhow::Result;
use clap::Parser;
use txcap_transcript::{extract_file, ExtractConfig};

use crate::cli::AppArgs;

mod cli;

const PROG: &str = "Extract Transactions";

/// Writes the eth_sendRawTransaction requests of a transcript to a file.
///
/// ```command
/// cargo run -p txcap_extractor -- anvil.log transactions.txt --mode raw-transaction
/// ```
fn main() -> Result<()> {
    env_logger::init();

    let args = AppArgs::parse();
    println!("Welcome to {PROG}");
    println!("In file: {}", args.infile.display());
    println!("Out file: {}", args.outfile.display());

    let config = ExtractConfig::from(args);
    let summary = extract_file(&config)?;
    log::debug!("{summary:?}");

    println!("Done");
    Ok(())
}
