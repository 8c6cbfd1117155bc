//! For Command Line Interface for txcap_embedder

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use txcap_embed::{EmbedConfig, InspectCommand, Preset, DEFAULT_OUTFILE, SEAPORT_ARTIFACT};

/// Generate ImmutableSeaportCreation.sol. Run from the root of the contracts repository.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct AppArgs {
    /// Layout of the generated contract.
    #[clap(short, long, value_enum, default_value_t = PresetFlag::Public)]
    pub preset: PresetFlag,
    /// File to create (overwritten if present).
    #[clap(short, long, default_value_t = String::from(DEFAULT_OUTFILE))]
    pub outfile: String,
    /// Forge executable.
    #[clap(short, long, default_value_t = String::from("forge"))]
    pub forge: String,
}

#[derive(ValueEnum, Clone, Debug, PartialEq)]
pub enum PresetFlag {
    /// bytes public constant WALLET_DEPLOY_CODE
    Public,
    /// bytes internal constant SEAPORT_CREATION_CODE
    Internal,
}

impl AppArgs {
    pub fn embed_config(&self) -> EmbedConfig {
        EmbedConfig {
            command: InspectCommand::forge(&self.forge, SEAPORT_ARTIFACT),
            preset: match self.preset {
                PresetFlag::Public => Preset::Public,
                PresetFlag::Internal => Preset::Internal,
            },
            outfile: PathBuf::from(&self.outfile),
        }
    }
}
