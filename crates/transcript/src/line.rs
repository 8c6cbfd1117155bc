//! For single lines of a captured transcript.
//!
//! A capture is the raw traffic between a script and a development node. HTTP request
//! bodies carry no trailing newline, so a JSON-RPC body usually shares its line with the
//! request line of the next request:
//! ```text
//! {"method":"eth_sendRawTransaction","params":["0x02f8..."],"id":7,"jsonrpc":"2.0"}POST / HTTP/1.1
//! ```

use once_cell::sync::Lazy;
use regex::bytes::Regex;

/// Text that identifies a line of interest.
pub const MARKER: &str = "eth_sendRawTransaction";

static MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&regex::escape(MARKER)).expect("marker pattern is valid"));

/// One line of a transcript, as raw bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranscriptLine<'a> {
    /// Line contents without the terminator.
    pub content: &'a [u8],
    /// "\n", "\r\n" or empty (final line without newline).
    pub terminator: &'a [u8],
}

impl<'a> TranscriptLine<'a> {
    /// Splits a raw segment (as produced by splitting on '\n') into content and terminator.
    fn from_segment(segment: &'a [u8]) -> Self {
        let split_at = if segment.ends_with(b"\r\n") {
            segment.len() - 2
        } else if segment.ends_with(b"\n") {
            segment.len() - 1
        } else {
            segment.len()
        };
        let (content, terminator) = segment.split_at(split_at);
        TranscriptLine {
            content,
            terminator,
        }
    }

    /// Raw substring check, no JSON awareness. A marker inside any field counts.
    pub fn contains_marker(&self) -> bool {
        MARKER_RE.is_match(self.content)
    }
}

/// Splits bytes into lines, keeping each line's terminator.
pub fn split_lines(bytes: &[u8]) -> Vec<TranscriptLine<'_>> {
    bytes
        .split_inclusive(|b| *b == b'\n')
        .map(TranscriptLine::from_segment)
        .collect()
}

/// Lines that contain the marker, in input order, with their 1-based line numbers.
pub fn matching_lines<'a, 'b>(
    lines: &'b [TranscriptLine<'a>],
) -> impl Iterator<Item = (usize, &'b TranscriptLine<'a>)> + 'b {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.contains_marker())
        .map(|(index, line)| (index + 1, line))
}
