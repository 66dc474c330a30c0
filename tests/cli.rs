//! Tests of the lsearch binary.

use std::fs;
use std::io::{BufReader, Read, Write};
use std::path::Path;
use std::process::{ChildStdout, Command, Output, Stdio};
use tempfile::TempDir;

fn lsearch() -> Command {
    Command::new(env!("CARGO_BIN_EXE_lsearch"))
}

fn create_fixture() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(dir.path().join("a.txt"), "hello world\nfoo bar baz\n").unwrap();
    fs::write(dir.path().join("b.txt"), "foo examples\nnothing here\n").unwrap();
    dir
}

fn search(dir: &Path, args: &[&str]) -> Output {
    lsearch()
        .arg("search")
        .args(args)
        .arg("--path")
        .arg(dir)
        .arg("--no-color")
        .output()
        .expect("Failed to run lsearch")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_search_prints_grouped_matches() {
    let dir = create_fixture();
    let output = search(dir.path(), &["foo"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("Found matches in 2 files:"));
    assert!(text.contains("  2: foo bar baz"));
    assert!(text.contains("  1: foo examples"));
}

#[test]
fn test_search_summary_goes_to_stderr() {
    let dir = create_fixture();
    let output = search(dir.path(), &["foo"]);
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("Indexed 2 files in"));
    assert!(!stdout(&output).contains("Indexed"));
}

#[test]
fn test_search_no_results() {
    let dir = create_fixture();
    let output = search(dir.path(), &["zzz"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("No results found."));
}

#[test]
fn test_search_json() {
    let dir = create_fixture();
    let output = search(dir.path(), &["foo", "bar", "--json"]);
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["line_number"], 2);
    assert_eq!(rows[0]["line_text"], "foo bar baz");
    assert_eq!(rows[0]["total_in_document"], 1);
}

#[test]
fn test_cap_flag() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("n.txt"), "x\nx\nx\nx\n").unwrap();
    let output = search(dir.path(), &["x", "--cap", "1"]);
    let text = stdout(&output);
    assert!(text.contains("  1: x"));
    assert!(!text.contains("  2: x"));
    assert!(text.contains("... and 3 more lines."));
}

#[test]
fn test_missing_root_fails() {
    let dir = create_fixture();
    let output = search(&dir.path().join("missing"), &["foo"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("does not exist"));
}

#[test]
fn test_stats() {
    let dir = create_fixture();
    let output = lsearch()
        .arg("stats")
        .arg(dir.path())
        .arg("--quiet")
        .output()
        .unwrap();
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Files indexed:    2"));
    assert!(text.contains(".txt"));
}

#[test]
fn test_interactive_session() {
    let dir = create_fixture();
    let mut child = lsearch()
        .arg("--path")
        .arg(dir.path())
        .arg("--quiet")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"foo bar\nnope\nexit\nfoo\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("2: foo bar baz"));
    assert!(text.contains("No results found."));
    // Nothing after `exit` runs
    assert!(!text.contains("foo examples"));
}

#[test]
fn test_config_file_extensions() {
    let dir = create_fixture();
    fs::write(dir.path().join("c.log"), "foo in a log\n").unwrap();
    let config = dir.path().join("config.json");
    fs::write(&config, r#"{"index": {"extensions": [".log"]}}"#).unwrap();

    let output = search(dir.path(), &["foo", "--json", "--config", config.to_str().unwrap()]);
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 1);
    assert_eq!(rows[0]["line_text"], "foo in a log");
}

#[test]
fn test_stats_json() {
    let dir = create_fixture();
    let output = lsearch()
        .arg("stats")
        .arg(dir.path())
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["files_indexed"], 2);
    assert_eq!(value["lines"], 4);
}

const PROMPT: &str = "Search (or 'exit'): ";

/// Read stdout until the next search prompt, returning what was printed
fn until_prompt(reader: &mut BufReader<ChildStdout>) -> String {
    let mut text = Vec::new();
    let mut byte = [0u8; 1];
    while !text.ends_with(PROMPT.as_bytes()) {
        let n = reader.read(&mut byte).unwrap();
        assert!(n > 0, "stdout closed before prompt");
        text.push(byte[0]);
    }
    String::from_utf8_lossy(&text).into_owned()
}

#[test]
fn test_reload_picks_up_new_files() {
    let dir = create_fixture();
    let mut child = lsearch()
        .arg("--path")
        .arg(dir.path())
        .arg("--quiet")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();
    let mut stdin = child.stdin.take().unwrap();
    let mut out = BufReader::new(child.stdout.take().unwrap());

    until_prompt(&mut out);
    stdin.write_all(b"fresh\n").unwrap();
    assert!(until_prompt(&mut out).contains("No results found."));

    fs::write(dir.path().join("c.txt"), "fresh content\n").unwrap();
    stdin.write_all(b":reload\n").unwrap();
    assert!(until_prompt(&mut out).contains("Indexed 3 files in"));

    stdin.write_all(b"fresh\n").unwrap();
    assert!(until_prompt(&mut out).contains("1: fresh content"));

    stdin.write_all(b"exit\n").unwrap();
    drop(stdin);
    assert!(child.wait().unwrap().success());
}

#[test]
fn test_empty_answer_scans_parent_directory() {
    let dir = create_fixture();
    let cwd = dir.path().join("work");
    fs::create_dir(&cwd).unwrap();

    let mut child = lsearch()
        .arg("--quiet")
        .current_dir(&cwd)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"\nfoo bar\nexit\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("Directory to scan ["));
    assert!(text.contains("2: foo bar baz"));
}
