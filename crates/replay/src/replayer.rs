//! Re-sends captured requests to a node, one at a time and in capture order.
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    time::Duration,
};

use log::{debug, info, warn};
use reqwest::Client;
use thiserror::Error;
use txcap_transcript::{matching_lines, split_lines};
use url::Url;

use crate::payload::{MalformedLine, Payload};

/// Applied when no timeout is configured explicitly.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("File {filename} could not be opened {source}")]
    FileOpener {
        source: io::Error,
        filename: PathBuf,
    },
    #[error("Line {line} is not valid JSON {source}")]
    MalformedPayload {
        line: usize,
        source: serde_json::Error,
    },
    #[error("Reqwest error {0}")]
    ReqwestError(#[from] reqwest::Error),
    #[error("IO error {0}")]
    IoError(#[from] io::Error),
}

#[derive(Clone, Debug)]
pub struct ReplayConfig {
    /// Node to send requests to, including port.
    pub url: Url,
    /// Per request. None waits indefinitely.
    pub timeout: Option<Duration>,
    pub on_malformed: MalformedLine,
}

impl ReplayConfig {
    pub fn new(url: Url) -> Self {
        ReplayConfig {
            url,
            timeout: Some(DEFAULT_TIMEOUT),
            on_malformed: MalformedLine::default(),
        }
    }
}

/// Counts for a completed replay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub sent: usize,
    pub skipped: usize,
}

pub struct Replayer {
    client: Client,
    config: ReplayConfig,
}

impl Replayer {
    pub fn new(config: ReplayConfig) -> Result<Self, ReplayError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Replayer {
            client: builder.build()?,
            config,
        })
    }

    /// Sends every matching line of the transcript and writes each request and response.
    ///
    /// Each request is awaited before the next line is decoded. The response body is
    /// written whatever the HTTP status.
    pub async fn replay<W: Write>(
        &self,
        transcript: &[u8],
        out: &mut W,
    ) -> Result<ReplaySummary, ReplayError> {
        let mut summary = ReplaySummary::default();
        let lines = split_lines(transcript);
        for (line_number, line) in matching_lines(&lines) {
            let payload = match Payload::from_line(line_number, line) {
                Ok(payload) => payload,
                Err(source) => match self.config.on_malformed {
                    MalformedLine::Abort => {
                        return Err(ReplayError::MalformedPayload {
                            line: line_number,
                            source,
                        })
                    }
                    MalformedLine::Skip => {
                        warn!("Skipping line {line_number}, not valid JSON: {source}");
                        summary.skipped += 1;
                        continue;
                    }
                },
            };
            let response = self.send(&payload).await?;
            writeln!(out, "Request:  {}", payload.text)?;
            writeln!(out, "Response:  {}", response)?;
            summary.sent += 1;
        }
        info!(
            "Sent {} requests to {} ({} skipped)",
            summary.sent, self.config.url, summary.skipped
        );
        Ok(summary)
    }

    /// POSTs one payload and returns the raw response body.
    async fn send(&self, payload: &Payload) -> Result<String, ReplayError> {
        let response = self
            .client
            .post(self.config.url.clone())
            .json(&payload.json)
            .send()
            .await?;
        debug!(
            "Line {} answered with status {}",
            payload.line_number,
            response.status()
        );
        Ok(response.text().await?)
    }
}

/// Reads a transcript file and replays it.
pub async fn replay_file<W: Write>(
    infile: &Path,
    config: ReplayConfig,
    out: &mut W,
) -> Result<ReplaySummary, ReplayError> {
    let transcript = fs::read(infile).map_err(|source| ReplayError::FileOpener {
        source,
        filename: infile.to_path_buf(),
    })?;
    Replayer::new(config)?.replay(&transcript, out).await
}
