use serde::Deserialize;
use serde_json::Value;

/// JSON-RPC method whose requests carry signed raw transactions.
pub const SEND_RAW_TRANSACTION: &str = "eth_sendRawTransaction";

/// A JSON-RPC request as it appears in a captured transcript.
///
/// Field order in a capture is arbitrary, only presence matters.
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(default)]
    pub jsonrpc: Option<String>,
    pub method: String,
    #[serde(default)]
    pub params: Vec<Value>,
    #[serde(default)]
    pub id: Option<Value>,
}

impl JsonRpcRequest {
    /// The 0x-prefixed signed transaction, if this is an eth_sendRawTransaction request.
    pub fn raw_transaction(&self) -> Option<&str> {
        if self.method != SEND_RAW_TRANSACTION {
            return None;
        }
        self.params.first()?.as_str()
    }
}
