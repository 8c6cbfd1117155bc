//! For Command Line Interface for txcap_extractor

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use txcap_transcript::{CleanMode, ExtractConfig};

/// Extract eth_sendRawTransaction requests from a capture of the traffic between a
/// script and a development node (e.g., Anvil).
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct AppArgs {
    /// Input file containing all communication between script and node.
    pub infile: PathBuf,
    /// Output file containing all transactions.
    pub outfile: PathBuf,
    /// How much of each request to keep.
    #[clap(short, long, value_enum, default_value_t = ModeFlag::Request)]
    pub mode: ModeFlag,
}

#[derive(ValueEnum, Clone, Debug, PartialEq)]
pub enum ModeFlag {
    /// Whole JSON-RPC request, one per line
    Request,
    /// Only the 0x-prefixed raw transaction, one per line
    RawTransaction,
}

impl From<AppArgs> for ExtractConfig {
    fn from(args: AppArgs) -> Self {
        ExtractConfig {
            infile: args.infile,
            outfile: args.outfile,
            mode: match args.mode {
                ModeFlag::Request => CleanMode::Framing,
                ModeFlag::RawTransaction => CleanMode::Envelope,
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_mode_keeps_requests() {
        let args = AppArgs::parse_from(["txcap_extractor", "anvil.log", "out.txt"]);
        let config = ExtractConfig::from(args);
        assert_eq!(config.mode, CleanMode::Framing);
        assert_eq!(config.infile, PathBuf::from("anvil.log"));
    }

    #[test]
    fn test_raw_transaction_mode() {
        let args =
            AppArgs::parse_from(["txcap_extractor", "anvil.log", "out.txt", "-m", "raw-transaction"]);
        assert_eq!(ExtractConfig::from(args).mode, CleanMode::Envelope);
    }
}
