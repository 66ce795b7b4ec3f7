//! End-to-end tests against the `dusk` binary

use crate::fixtures::{create_reference_fixture, file_path};
use std::process::{Command, Output};
use tempfile::TempDir;

fn dusk(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dusk"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run dusk")
}

#[test]
fn test_help_and_version() {
    let help = dusk(&["--help"]);
    assert!(help.status.success());
    assert!(String::from_utf8_lossy(&help.stdout).contains("USAGE:"));

    let version = dusk(&["-V"]);
    assert!(version.status.success());
    assert_eq!(
        String::from_utf8_lossy(&version.stdout).trim(),
        format!("dusk {}", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn test_usage_errors_exit_with_two() {
    let missing = dusk(&[]);
    assert_eq!(missing.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&missing.stderr).contains("Missing required argument: PATH"));

    let unknown = dusk(&[".", "--bogus"]);
    assert_eq!(unknown.status.code(), Some(2));

    let nonexistent = dusk(&["/definitely/does/not/exist/xyz123"]);
    assert_eq!(nonexistent.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&nonexistent.stderr).contains("does not exist"));
    assert!(nonexistent.stdout.is_empty());
}

#[test]
fn test_flat_listing() {
    let temp_dir = TempDir::new().unwrap();
    let root = create_reference_fixture(temp_dir.path()).unwrap();
    let root_arg = root.to_string_lossy().into_owned();

    let output = dusk(&[root_arg.as_str(), "--top", "2"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let expected = format!(
        "{:<12} {}\n{:<12} {}\n",
        100,
        file_path(&root, "a.txt"),
        50,
        file_path(&root, "sub/b.txt")
    );
    assert_eq!(stdout, expected);
    assert!(output.stderr.is_empty());
}

#[test]
fn test_verbose_diagnostics_go_to_stderr() {
    let temp_dir = TempDir::new().unwrap();
    let root = create_reference_fixture(temp_dir.path()).unwrap();
    let root_arg = root.to_string_lossy().into_owned();

    let output = dusk(&[root_arg.as_str(), "-v", "--threads", "2"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 2);
    assert!(!stdout.contains("##"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("## File Count 2"));
    assert!(stderr.contains("## Files 2, Directories 2, Skipped 0"));
    assert!(stderr.contains("## Total Times"));
}

#[test]
fn test_tree_json() {
    let temp_dir = TempDir::new().unwrap();
    let root = create_reference_fixture(temp_dir.path()).unwrap();
    let root_arg = root.to_string_lossy().into_owned();

    let output = dusk(&[root_arg.as_str(), "--tree", "--json", "--all"]);
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(doc["size"], 160);
    assert_eq!(doc["children"][0]["name"], "a.txt");
    assert_eq!(doc["children"][1]["name"], "sub");
    assert_eq!(doc["children"][1]["size"], 60);
}
