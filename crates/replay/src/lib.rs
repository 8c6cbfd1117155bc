pub mod payload;
pub mod replayer;

pub use payload::{decode_payload, MalformedLine, Payload};
pub use replayer::{replay_file, ReplayConfig, ReplayError, ReplaySummary, Replayer, DEFAULT_TIMEOUT};
