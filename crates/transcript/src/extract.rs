//! Used for pulling eth_sendRawTransaction requests out of a captured transcript.
use std::{fs, io, path::PathBuf};

use log::{debug, info};
use thiserror::Error;

use crate::{
    clean::CleanMode,
    line::{matching_lines, split_lines},
};

#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("File {filename} could not be opened {source}")]
    FileOpener {
        source: io::Error,
        filename: PathBuf,
    },
    #[error("File {filename} could not be written {source}")]
    FileWriter {
        source: io::Error,
        filename: PathBuf,
    },
}

/// Where to read the transcript, where to write results and how much to remove.
#[derive(Clone, Debug)]
pub struct ExtractConfig {
    pub infile: PathBuf,
    pub outfile: PathBuf,
    pub mode: CleanMode,
}

/// Counts for a completed extraction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    pub lines_read: usize,
    pub lines_written: usize,
}

/// Keeps the lines that contain the marker, cleans them and joins them in input order.
pub fn extract(transcript: &[u8], mode: CleanMode) -> (Vec<u8>, ExtractSummary) {
    let lines = split_lines(transcript);
    let mut summary = ExtractSummary {
        lines_read: lines.len(),
        ..Default::default()
    };
    let mut result = vec![];
    for (line_number, line) in matching_lines(&lines) {
        debug!("Line {line_number} contains marker");
        result.extend(mode.clean(line));
        summary.lines_written += 1;
    }
    (result, summary)
}

/// Reads the whole transcript, then writes all cleaned lines in one write.
///
/// The output file is created or truncated. It is not touched if the input cannot be read.
pub fn extract_file(config: &ExtractConfig) -> Result<ExtractSummary, TranscriptError> {
    let transcript = fs::read(&config.infile).map_err(|source| TranscriptError::FileOpener {
        source,
        filename: config.infile.clone(),
    })?;
    let (result, summary) = extract(&transcript, config.mode);
    fs::write(&config.outfile, result).map_err(|source| TranscriptError::FileWriter {
        source,
        filename: config.outfile.clone(),
    })?;
    info!(
        "Extracted {} of {} lines to {}",
        summary.lines_written,
        summary.lines_read,
        config.outfile.display()
    );
    Ok(summary)
}
