use anyhow::Result;
use clap::Parser;
use txcap_embed::{embed, EmbedError, InspectError};

use crate::cli::AppArgs;

mod cli;

/// Exit code when forge itself fails.
const TOOL_FAILED_EXIT_CODE: i32 = -2;

/// Writes the creation code of ImmutableSeaport into a Solidity constant.
///
/// ```command
/// cargo run -p txcap_embedder -- --preset internal
/// ```
fn main() -> Result<()> {
    env_logger::init();

    let args = AppArgs::parse();
    println!("Welcome to ImmutableSeaportCreation");

    match embed(&args.embed_config()) {
        Ok(bytecode) => log::debug!("Embedded {} bytes", bytecode.len()),
        Err(error) => match exit_code(&error) {
            Some(code) => {
                println!("{error}");
                std::process::exit(code);
            }
            None => return Err(error.into()),
        },
    }

    println!("Done");
    Ok(())
}

/// Failures of forge itself get their own exit code. Anything else is reported by anyhow.
fn exit_code(error: &EmbedError) -> Option<i32> {
    match error {
        EmbedError::InspectError(InspectError::ToolFailed { .. }) => Some(TOOL_FAILED_EXIT_CODE),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use txcap_embed::BytecodeError;

    #[test]
    fn test_tool_failure_exit_code() {
        let error = EmbedError::InspectError(InspectError::ToolFailed { code: Some(1) });
        assert_eq!(exit_code(&error), Some(-2));
        let signalled = EmbedError::InspectError(InspectError::ToolFailed { code: None });
        assert_eq!(exit_code(&signalled), Some(-2));
    }

    #[test]
    fn test_other_failures_use_default_exit_code() {
        let error = EmbedError::BytecodeError(BytecodeError::Empty);
        assert_eq!(exit_code(&error), None);
    }
}
