//! Removes protocol framing and, optionally, the JSON-RPC envelope from a line.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::bytes::Regex;

use crate::{line::TranscriptLine, rpc::JsonRpcRequest};

/// HTTP request line that trails a request body in a capture.
pub const FRAMING: &str = "POST / HTTP/1.1";

/// Start of an eth_sendRawTransaction request body, up to the raw transaction.
pub const ENVELOPE_PREFIX: &str = r#"{"method":"eth_sendRawTransaction","params":[""#;

static FRAMING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&regex::escape(FRAMING)).expect("framing pattern is valid"));

static ENVELOPE_PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&regex::escape(ENVELOPE_PREFIX)).expect("envelope prefix pattern is valid")
});

static ENVELOPE_SUFFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""\],"id":[0-9]+,"jsonrpc":"2\.0"\}POST / HTTP/1\.1"#)
        .expect("envelope suffix pattern is valid")
});

/// How much of a matching line to remove.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CleanMode {
    /// Remove the HTTP request line only, leaving the JSON-RPC request.
    #[default]
    Framing,
    /// Also remove the JSON-RPC envelope, leaving the raw transaction.
    Envelope,
}

impl CleanMode {
    /// Cleans the line content and re-attaches the original terminator.
    pub fn clean(&self, line: &TranscriptLine) -> Vec<u8> {
        let mut cleaned = match self {
            CleanMode::Framing => strip_framing(line.content),
            CleanMode::Envelope => strip_envelope(line.content),
        };
        cleaned.extend_from_slice(line.terminator);
        cleaned
    }
}

/// Removes every occurrence of the framing request line.
///
/// Removal repeats until nothing matches, so fragments joined by a removal cannot
/// leave a new occurrence behind.
pub fn strip_framing(content: &[u8]) -> Vec<u8> {
    remove_until_stable(content, &[&*FRAMING_RE])
}

/// Applies each pattern in turn, as many rounds as it takes for a round to change nothing.
///
/// Each removal shortens the content, so this terminates.
fn remove_until_stable(content: &[u8], patterns: &[&Regex]) -> Vec<u8> {
    let mut current = content.to_vec();
    loop {
        let mut changed = false;
        for pattern in patterns {
            let removed = match pattern.replace_all(&current, &b""[..]) {
                Cow::Owned(removed) => Some(removed),
                Cow::Borrowed(_) => None,
            };
            if let Some(removed) = removed {
                current = removed;
                changed = true;
            }
        }
        if !changed {
            return current;
        }
    }
}

/// Reduces an eth_sendRawTransaction request to its raw transaction.
///
/// Content that does not parse as such a request has the literal envelope patterns
/// removed instead. Patterns that do not match leave the content unchanged.
pub fn strip_envelope(content: &[u8]) -> Vec<u8> {
    match raw_transaction(content) {
        // JSON escapes can decode into the literal patterns.
        Some(raw) => strip_envelope_literal(raw.as_bytes()),
        None => {
            log::debug!("Envelope not parsed, removing literal patterns");
            strip_envelope_literal(content)
        }
    }
}

/// Parses the line as one JSON-RPC request (framing removed) and returns its raw transaction.
fn raw_transaction(content: &[u8]) -> Option<String> {
    let json = strip_framing(content);
    let request: JsonRpcRequest = serde_json::from_slice(&json).ok()?;
    request.raw_transaction().map(str::to_owned)
}

fn strip_envelope_literal(content: &[u8]) -> Vec<u8> {
    remove_until_stable(
        content,
        &[&*ENVELOPE_PREFIX_RE, &*ENVELOPE_SUFFIX_RE, &*FRAMING_RE],
    )
}
