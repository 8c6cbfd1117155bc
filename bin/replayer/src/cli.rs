//! For Command Line Interface for txcap_replayer

use std::{path::PathBuf, time::Duration};

use clap::Parser;
use txcap_replay::{MalformedLine, ReplayConfig};
use url::Url;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct AppArgs {
    /// Input log file.
    pub infile: PathBuf,
    /// URL including port. E.g., http://127.0.0.1:8545
    pub url: Url,
    /// Seconds to wait for each response. 0 waits forever.
    #[clap(short, long, default_value_t = 30)]
    pub timeout_secs: u64,
    /// Log and skip lines that are not valid JSON instead of stopping.
    #[clap(short, long)]
    pub skip_malformed: bool,
}

impl AppArgs {
    pub fn replay_config(&self) -> ReplayConfig {
        ReplayConfig {
            url: self.url.clone(),
            timeout: match self.timeout_secs {
                0 => None,
                secs => Some(Duration::from_secs(secs)),
            },
            on_malformed: match self.skip_malformed {
                true => MalformedLine::Skip,
                false => MalformedLine::Abort,
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = AppArgs::parse_from(["txcap_replayer", "anvil.log", "http://127.0.0.1:8545"]);
        let config = args.replay_config();
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.on_malformed, MalformedLine::Abort);
        assert_eq!(config.url.port(), Some(8545));
    }

    #[test]
    fn test_no_timeout_and_skip() {
        let args = AppArgs::parse_from([
            "txcap_replayer",
            "anvil.log",
            "http://localhost:8545",
            "--timeout-secs",
            "0",
            "--skip-malformed",
        ]);
        let config = args.replay_config();
        assert_eq!(config.timeout, None);
        assert_eq!(config.on_malformed, MalformedLine::Skip);
    }

    #[test]
    fn test_rejects_bad_url() {
        assert!(AppArgs::try_parse_from(["txcap_replayer", "anvil.log", "not a url"]).is_err());
    }
}
