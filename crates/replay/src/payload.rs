//! For turning a captured transcript line back into a JSON-RPC request body.

use serde_json::Value;
use txcap_transcript::{strip_framing, TranscriptLine};

/// A JSON-RPC request recovered from a transcript line.
#[derive(Clone, Debug, PartialEq)]
pub struct Payload {
    /// 1-based position of the line in the transcript.
    pub line_number: usize,
    /// Line contents with framing removed, as sent.
    pub text: String,
    pub json: Value,
}

/// What to do with a matching line that does not hold valid JSON.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MalformedLine {
    /// Stop the whole run before anything further is sent.
    #[default]
    Abort,
    /// Log a warning and continue with the next line.
    Skip,
}

/// Removes framing and parses what remains as a single JSON document.
///
/// Returns the text that was parsed (whitespace trimmed) and its JSON value.
pub fn decode_payload(line: &TranscriptLine) -> Result<(String, Value), serde_json::Error> {
    let stripped = strip_framing(line.content);
    let json = serde_json::from_slice(&stripped)?;
    let text = String::from_utf8_lossy(&stripped).trim().to_string();
    Ok((text, json))
}

impl Payload {
    pub fn from_line(line_number: usize, line: &TranscriptLine) -> Result<Self, serde_json::Error> {
        let (text, json) = decode_payload(line)?;
        Ok(Payload {
            line_number,
            text,
            json,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;
    use txcap_transcript::split_lines;

    #[test]
    fn test_decode_framed_request() {
        let lines = split_lines(
            b"{\"method\":\"eth_sendRawTransaction\",\"params\":[\"0xdeadbeef\"],\"id\":1,\"jsonrpc\":\"2.0\"}POST / HTTP/1.1\n",
        );
        let (text, value) = decode_payload(&lines[0]).unwrap();
        assert!(!text.contains("POST / HTTP/1.1"));
        assert_eq!(
            value,
            json!({"method": "eth_sendRawTransaction", "params": ["0xdeadbeef"], "id": 1, "jsonrpc": "2.0"})
        );
    }

    #[test]
    fn test_decode_rejects_trailing_text() {
        let lines = split_lines(b"{\"method\":\"eth_sendRawTransaction\"} Host: localhost");
        assert!(decode_payload(&lines[0]).is_err());
    }

    #[test]
    fn test_payload_text_has_no_framing() {
        let lines = split_lines(b"POST / HTTP/1.1{\"method\":\"eth_sendRawTransaction\",\"params\":[]}\r\n");
        let payload = Payload::from_line(4, &lines[0]).unwrap();
        assert_eq!(payload.line_number, 4);
        assert_eq!(
            payload.text,
            r#"{"method":"eth_sendRawTransaction","params":[]}"#
        );
    }
}
