use assert_cmd::Command;
use std::io::Write;
use tempfile::NamedTempFile;

const SCENARIO: &str = "@addPages myPage UofA csDept localTheater
@addLinks myPage UofA
@isConnected myPage localTheater
@addLinks UofA localTheater
@isConnected myPage localTheater
";

fn pagelink() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pagelink"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn script_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write script");
    file
}

fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_cli_exits_with_success_on_help() {
    pagelink().arg("--help").assert().success();
}

#[test]
fn test_cli_reads_stdin() {
    pagelink()
        .write_stdin(SCENARIO)
        .assert()
        .success()
        .stdout("0\n1\n");
}

#[test]
fn test_cli_reads_file() {
    let file = script_file(SCENARIO);
    pagelink()
        .arg(file.path())
        .assert()
        .success()
        .stdout("0\n1\n");
}

#[test]
fn test_cli_unknown_page_sets_exit_code() {
    let assert = pagelink()
        .write_stdin("@addPages myPage\n@isConnected ghost myPage\n@isConnected myPage myPage\n")
        .assert()
        .code(1)
        .stdout("1\n");
    let stderr = stderr_of(assert.get_output());
    assert!(stderr.contains("ghost"), "stderr: {stderr}");
}

#[test]
fn test_cli_malformed_command_continues() {
    let assert = pagelink()
        .write_stdin("@addPages a b\n@frobnicate a\n@isConnected a\n@addLinks a b\n@isConnected a b\n")
        .assert()
        .code(1)
        .stdout("1\n");
    let stderr = stderr_of(assert.get_output());
    assert_eq!(stderr.lines().count(), 2, "stderr: {stderr}");
}

#[test]
fn test_cli_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");
    let assert = pagelink().arg(&missing).assert().code(1).stdout("");
    assert!(stderr_of(assert.get_output()).contains("couldn't open"));
}

#[test]
fn test_cli_too_many_arguments() {
    let file = script_file(SCENARIO);
    let other = script_file("@isConnected x y\n");
    let assert = pagelink()
        .arg(file.path())
        .arg(other.path())
        .assert()
        .code(1)
        .stdout("0\n1\n");
    assert!(stderr_of(assert.get_output()).contains("too many arguments"));
}

#[test]
fn test_cli_too_many_arguments_reported_first() {
    let file = script_file("@addPages a\n@isConnected a ghost\n");
    let other = script_file("");
    let assert = pagelink()
        .arg(file.path())
        .arg(other.path())
        .assert()
        .code(1)
        .stdout("");
    let stderr = stderr_of(assert.get_output());
    let lines: Vec<&str> = stderr.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("too many arguments"));
    assert!(lines[1].contains("ghost"));
}

#[test]
fn test_cli_stop_on_error_config() {
    let config = script_file("stop_on_error = true\n");
    pagelink()
        .arg("--config")
        .arg(config.path())
        .write_stdin("@addPages a\n@isConnected a ghost\n@isConnected a a\n")
        .assert()
        .code(1)
        .stdout("");
}

#[test]
fn test_cli_invalid_config_is_fatal() {
    let config = script_file("stop_on_error = \"sometimes\"\n");
    let assert = pagelink()
        .arg("--config")
        .arg(config.path())
        .write_stdin(SCENARIO)
        .assert()
        .code(1)
        .stdout("");
    assert!(stderr_of(assert.get_output()).contains("Error"));
}

#[test]
fn test_cli_stats_summary() {
    let assert = pagelink()
        .arg("--stats")
        .write_stdin(SCENARIO)
        .assert()
        .success();
    let stderr = stderr_of(assert.get_output());
    let summary: serde_json::Value = serde_json::from_str(stderr.trim()).expect("json summary");
    assert_eq!(summary["errors"], 0);
    assert_eq!(summary["commands"], 5);
    assert_eq!(summary["graph"]["page_count"], 4);
    assert_eq!(summary["graph"]["link_count"], 2);
}
