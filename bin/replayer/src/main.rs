use anyhow::Result;
use clap::Parser;
use txcap_replay::replay_file;

use crate::cli::AppArgs;

mod cli;

const PROG: &str = "Process Transactions";

/// Re-sends every eth_sendRawTransaction request in a transcript to a node, in order,
/// printing each request and the node's response.
///
/// ```command
/// anvil &
/// cargo run -p txcap_replayer -- anvil.log http://127.0.0.1:8545
/// ```
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = AppArgs::parse();
    println!("Welcome to {PROG}");
    println!("In file: {}", args.infile.display());
    println!("URL: {}", args.url);

    let mut stdout = std::io::stdout();
    let summary = replay_file(&args.infile, args.replay_config(), &mut stdout).await?;
    log::debug!("{summary:?}");

    println!("Done");
    Ok(())
}
