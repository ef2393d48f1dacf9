use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn powexpr() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_powexpr"));
    command.arg("-qq").env_remove("POWEXPR_MAX_EXPONENT");
    command
}

fn write_expr(dir: &Path, name: &str, src: &str) -> eyre::Result<std::path::PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, src)?;
    Ok(path)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_files_are_reported_in_order() -> eyre::Result<()> {
    let dir = TempDir::new()?;
    let first = write_expr(dir.path(), "first.expr", "pow(1+3, 2*5) + 9\n")?;
    let second = write_expr(dir.path(), "second.expr", "2*3+4*5")?;

    let output = powexpr().arg(&first).arg(&second).output()?;
    assert!(output.status.success());
    let printed = stdout(&output);
    let first_at = printed.find("first.expr").expect("first file reported");
    let second_at = printed.find("second.expr").expect("second file reported");
    assert!(first_at < second_at);
    assert!(printed.contains("\n1048585\n"));
    assert!(printed.ends_with("\n26\n"));
    Ok(())
}

#[test]
fn test_diagnostics_fail_the_run() -> eyre::Result<()> {
    let dir = TempDir::new()?;
    let good = write_expr(dir.path(), "good.expr", "7")?;
    let bad = write_expr(dir.path(), "bad.expr", "pow(2 3)")?;

    let output = powexpr().arg(&good).arg(&bad).output()?;
    assert!(!output.status.success());
    assert!(stdout(&output).contains(
        "[syntax] line 1, column 7: expected ',' between the arguments of 'pow', found INT\n    at \"3\"\n"
    ));
    Ok(())
}

#[test]
fn test_long_and_deep_sources() -> eyre::Result<()> {
    let dir = TempDir::new()?;
    let long = write_expr(dir.path(), "long.expr", &vec!["1"; 200_000].join("+"))?;
    let deep = write_expr(dir.path(), "deep.expr", &"pow(".repeat(100_000))?;

    let output = powexpr().arg(&long).output()?;
    assert!(output.status.success());
    assert!(stdout(&output).ends_with("\n200000\n"));

    let output = powexpr().arg(&deep).output()?;
    assert!(!output.status.success());
    assert!(stdout(&output).contains("'pow' calls nested more than 128 levels deep"));
    Ok(())
}

#[test]
fn test_reads_stdin() -> eyre::Result<()> {
    let mut child = powexpr()
        .arg("--ast")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()?;
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(b"pow(2, 3) * 4")?;
    let output = child.wait_with_output()?;
    assert!(output.status.success());
    let printed = stdout(&output);
    assert!(printed.starts_with("==> <stdin>\n"));
    assert!(printed.contains("MULT (*)\n  POW\n"));
    assert!(printed.ends_with("\n32\n"));
    Ok(())
}

#[test]
fn test_blank_input_is_rejected() -> eyre::Result<()> {
    let dir = TempDir::new()?;
    let blank = write_expr(dir.path(), "blank.expr", "  \n\t\n")?;

    let output = powexpr().arg(&blank).output()?;
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    Ok(())
}

#[test]
fn test_missing_file() -> eyre::Result<()> {
    let dir = TempDir::new()?;
    let output = powexpr().arg(dir.path().join("missing.expr")).output()?;
    assert!(!output.status.success());
    Ok(())
}

#[test]
fn test_max_exponent() -> eyre::Result<()> {
    let dir = TempDir::new()?;
    let file = write_expr(dir.path(), "big.expr", "pow(2, 2000)")?;

    assert!(!powexpr().arg(&file).output()?.status.success());
    assert!(powexpr()
        .arg("--max-exponent")
        .arg("2000")
        .arg(&file)
        .output()?
        .status
        .success());
    assert!(powexpr()
        .env("POWEXPR_MAX_EXPONENT", "2000")
        .arg(&file)
        .output()?
        .status
        .success());
    Ok(())
}

#[test]
fn test_self_test() -> eyre::Result<()> {
    let output = powexpr().arg("--self-test").output()?;
    assert!(output.status.success());
    assert!(stdout(&output).ends_with("7 passed, 0 failed\n"));

    let output = powexpr()
        .args(["--self-test", "--max-exponent", "2"])
        .output()?;
    assert!(!output.status.success());
    assert!(stdout(&output).ends_with("4 passed, 3 failed\n"));
    Ok(())
}
