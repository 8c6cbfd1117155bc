//! Filtering and cleaning of captured JSON-RPC traffic.
pub mod clean;
pub mod extract;
pub mod line;
pub mod rpc;

pub use clean::{strip_envelope, strip_framing, CleanMode};
pub use extract::{extract, extract_file, ExtractConfig, ExtractSummary, TranscriptError};
pub use line::{matching_lines, split_lines, TranscriptLine, MARKER};
