use std::process::Command;

/// Runs the embedder binary with a stand-in for forge.
fn run_embedder(forge: &str, outfile: &std::path::Path) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_txcap_embedder"))
        .args(["--forge", forge, "--outfile"])
        .arg(outfile)
        .output()
        .expect("embedder binary runs")
}

#[test]
#[cfg(unix)]
fn test_failing_forge_exits_254() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let outfile = dir.path().join("temp").join("ImmutableSeaportCreation.sol");

    let output = run_embedder("false", &outfile);
    // exit(-2) is seen as 254 by the parent process.
    assert_eq!(output.status.code(), Some(254));
    assert!(String::from_utf8(output.stdout)?.contains("Command failed with return code 1"));
    assert!(!outfile.exists());
    Ok(())
}

#[test]
fn test_missing_forge_is_a_plain_failure() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let outfile = dir.path().join("ImmutableSeaportCreation.sol");

    let output = run_embedder("txcap-no-such-forge", &outfile);
    assert_eq!(output.status.code(), Some(1));
    assert!(!outfile.exists());
    Ok(())
}
