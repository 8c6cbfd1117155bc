//! Embeds compiled contract bytecode in a generated Solidity file.
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::info;
use thiserror::Error;

pub mod bytecode;
pub mod inspect;
pub mod template;

pub use bytecode::{normalize, Bytecode, BytecodeError};
pub use inspect::{InspectCommand, InspectError, SEAPORT_ARTIFACT};
pub use template::{Preset, Template, Visibility, DEFAULT_OUTFILE};

#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("Inspect error {0}")]
    InspectError(#[from] InspectError),
    #[error("Bytecode error {0}")]
    BytecodeError(#[from] BytecodeError),
    #[error("File {filename} could not be written {source}")]
    FileWriter {
        source: io::Error,
        filename: PathBuf,
    },
}

#[derive(Clone, Debug)]
pub struct EmbedConfig {
    pub command: InspectCommand,
    pub preset: Preset,
    pub outfile: PathBuf,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        EmbedConfig {
            command: InspectCommand::default(),
            preset: Preset::default(),
            outfile: PathBuf::from(DEFAULT_OUTFILE),
        }
    }
}

/// Gets the bytecode from the tool and writes the generated file.
///
/// Nothing is written unless the tool succeeds and its output is valid bytecode.
pub fn embed(config: &EmbedConfig) -> Result<Bytecode, EmbedError> {
    let raw = config.command.capture()?;
    let bytecode = normalize(&raw)?;
    let source = config.preset.template().render(&bytecode);
    write_source(&config.outfile, &source)?;
    info!(
        "Wrote {} bytes of code to {}",
        bytecode.len(),
        config.outfile.display()
    );
    Ok(bytecode)
}

/// Creates the parent directory if needed, then writes the file.
fn write_source(outfile: &Path, source: &str) -> Result<(), EmbedError> {
    let to_error = |source| EmbedError::FileWriter {
        source,
        filename: outfile.to_path_buf(),
    };
    if let Some(dir) = outfile.parent() {
        fs::create_dir_all(dir).map_err(to_error)?;
    }
    fs::write(outfile, source).map_err(to_error)
}
