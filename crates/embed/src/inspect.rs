//! For running the external compiler tool that reports contract bytecode.
use std::{io, process::Command};

use log::debug;
use thiserror::Error;

/// Contract whose creation code is embedded.
pub const SEAPORT_ARTIFACT: &str =
    "src/im-contracts/trading/seaport/ImmutableSeaport.sol:ImmutableSeaport";

#[derive(Debug, Error)]
pub enum InspectError {
    #[error("Could not start {program} {source}")]
    ToolSpawn { program: String, source: io::Error },
    #[error("Command failed with return code {}", display_code(.code))]
    ToolFailed { code: Option<i32> },
    #[error("Tool output is not UTF-8 {0}")]
    NonUtf8Output(#[from] std::string::FromUtf8Error),
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "none (terminated by signal)".to_string(),
    }
}

/// A program and its arguments. Stdout of a successful run is the bytecode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InspectCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl InspectCommand {
    /// `forge inspect <artifact> bytecode`, with the optimizer on and zero runs.
    pub fn forge(program: &str, artifact: &str) -> Self {
        InspectCommand {
            program: program.to_string(),
            args: [
                "inspect",
                artifact,
                "bytecode",
                "--optimize",
                "--optimizer-runs",
                "0",
            ]
            .iter()
            .map(|arg| arg.to_string())
            .collect(),
        }
    }

    /// Runs the program to completion and returns its stdout.
    ///
    /// Stderr is passed through to the terminal.
    pub fn capture(&self) -> Result<String, InspectError> {
        debug!("Running {} {}", self.program, self.args.join(" "));
        let output = Command::new(&self.program)
            .args(&self.args)
            .stderr(std::process::Stdio::inherit())
            .output()
            .map_err(|source| InspectError::ToolSpawn {
                program: self.program.clone(),
                source,
            })?;
        if !output.status.success() {
            return Err(InspectError::ToolFailed {
                code: output.status.code(),
            });
        }
        Ok(String::from_utf8(output.stdout)?)
    }
}

impl Default for InspectCommand {
    fn default() -> Self {
        InspectCommand::forge("forge", SEAPORT_ARTIFACT)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_invocation() {
        let command = InspectCommand::default();
        assert_eq!(command.program, "forge");
        assert_eq!(
            command.args,
            vec![
                "inspect",
                SEAPORT_ARTIFACT,
                "bytecode",
                "--optimize",
                "--optimizer-runs",
                "0"
            ]
        );
    }

    #[test]
    fn test_capture_stdout() {
        let command = InspectCommand {
            program: "printf".to_string(),
            args: vec!["0x1234abcd\n".to_string()],
        };
        assert_eq!(command.capture().unwrap(), "0x1234abcd\n");
    }

    #[test]
    fn test_nonzero_exit() {
        let command = InspectCommand {
            program: "false".to_string(),
            args: vec![],
        };
        let err = command.capture().unwrap_err();
        assert!(matches!(err, InspectError::ToolFailed { code: Some(1) }));
        assert_eq!(err.to_string(), "Command failed with return code 1");
    }

    #[test]
    fn test_missing_program() {
        let command = InspectCommand::forge("txcap-no-such-forge", SEAPORT_ARTIFACT);
        assert!(matches!(
            command.capture(),
            Err(InspectError::ToolSpawn { .. })
        ));
    }
}
