use std::fmt::Display;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BytecodeError {
    #[error("Tool output contains no bytecode")]
    Empty,
    #[error("Tool output is not hex bytecode {0}")]
    NotHex(#[from] hex::FromHexError),
}

/// Contract bytecode as a hex string, without 0x-prefix or line breaks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bytecode(String);

impl Bytecode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Size of the code in bytes.
    pub fn len(&self) -> usize {
        self.0.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for Bytecode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Removes line breaks and the 0x marker from captured tool output.
///
/// Every "0x" is removed, not only a leading one. As 'x' is not a hex digit the two
/// only differ for output that fails validation anyway.
pub fn normalize(raw: &str) -> Result<Bytecode, BytecodeError> {
    let bytecode = raw.replace(['\n', '\r'], "").replace("0x", "");
    if bytecode.is_empty() {
        return Err(BytecodeError::Empty);
    }
    hex::decode(&bytecode)?;
    Ok(Bytecode(bytecode))
}
