//! Integration tests for the AutoGuard CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn autoguard() -> Command {
    Command::cargo_bin("autoguard").unwrap()
}

/// Test CLI binary exists and responds to --help
#[test]
fn test_cli_help() {
    autoguard()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pre-deployment secret scanning"));
}

/// Test CLI responds to --version
#[test]
fn test_cli_version() {
    autoguard()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("autoguard"));
}

/// Test invalid subcommand shows error
#[test]
fn test_invalid_subcommand() {
    autoguard()
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

/// An empty tree is clean and exits 0
#[test]
fn test_empty_tree_exits_zero() {
    let temp_dir = TempDir::new().unwrap();

    autoguard()
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No secrets found. Safe to deploy."));
}

/// A tree with no matching content is clean and exits 0
#[test]
fn test_clean_tree_exits_zero() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("app.py"), "print('hello')\n").unwrap();
    fs::write(temp_dir.path().join("index.js"), "console.log('hi');\n").unwrap();

    autoguard()
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No secrets found. Safe to deploy."));
}

/// Findings print the header plus one line per match and exit 1
#[test]
fn test_findings_exit_code_one() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("config.env"), "AKIAABCDEFGHIJ123456\n").unwrap();

    autoguard()
        .current_dir(temp_dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "AutoGuard detected potential secrets:",
        ))
        .stdout(predicate::str::contains("config.env → AKIA[0-9A-Z]{16}"));
}

/// Content in an unlisted extension never produces findings
#[test]
fn test_unlisted_extension_is_ignored() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("notes.md"), "AKIAABCDEFGHIJ123456\n").unwrap();

    autoguard()
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No secrets found. Safe to deploy."));
}

/// A file hitting both rules is reported once per rule
#[test]
fn test_both_patterns_reported() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("deploy.yml"),
        "key: AKIAABCDEFGHIJ123456\npassword = \"hunter2\"\n",
    )
    .unwrap();

    autoguard()
        .current_dir(temp_dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("deploy.yml → AKIA[0-9A-Z]{16}"))
        .stdout(predicate::str::contains(
            r#"deploy.yml → (?i)password\s*=\s*['"].+['"]"#,
        ));
}

/// Files in nested directories are scanned
#[test]
fn test_nested_directories_are_scanned() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("src").join("settings");
    fs::create_dir_all(&nested).unwrap();
    fs::write(nested.join("prod.py"), "Password='x'\n").unwrap();

    autoguard()
        .current_dir(temp_dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("prod.py →"));
}

/// The explicit scan subcommand behaves exactly like a bare invocation
#[test]
fn test_explicit_scan_subcommand() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("creds.txt"), "AKIAABCDEFGHIJ123456\n").unwrap();

    autoguard()
        .current_dir(temp_dir.path())
        .arg("scan")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("creds.txt → AKIA[0-9A-Z]{16}"));
}

/// An unreadable candidate file aborts the scan without a findings report
#[test]
fn test_unreadable_file_aborts_scan() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("blob.txt"), [0xFF, 0xFE, 0x00]).unwrap();

    autoguard()
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("AutoGuard detected").not())
        .stderr(predicate::str::contains("blob.txt"));
}
