// tests/integration_test.rs
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use git2::Repository;
use serial_test::serial;

fn semver(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_semver"))
        .args(args)
        .current_dir(dir)
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to execute command")
}

fn semver_with_input(dir: &Path, args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_semver"))
        .args(args)
        .current_dir(dir)
        .env("RUST_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute command");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

/// Repository with an identity and one commit, but no remotes
fn init_committed_repo(dir: &Path) -> Repository {
    let repo = Repository::init(dir).unwrap();
    {
        let mut config = repo.config().unwrap();
        config.set_str("user.name", "Release Bot").unwrap();
        config.set_str("user.email", "release@example.com").unwrap();
    }
    {
        let sig = repo.signature().unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        repo.commit(Some("HEAD"), &sig, &sig, "initial commit", &tree, &[])
            .unwrap();
    }
    repo
}

#[test]
fn test_semver_help_flag() {
    let output = semver(Path::new("."), &["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("semver"));
    assert!(stdout.contains("release candidate"));
}

#[test]
fn test_semver_version_flag() {
    let output = semver(Path::new("."), &["--version"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
#[serial]
fn test_invalid_option_exits_with_status_1() {
    let dir = tempfile::tempdir().unwrap();
    Repository::init(dir.path()).unwrap();

    let output = semver(dir.path(), &["x"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Invalid option 'x'"));
}

#[test]
#[serial]
fn test_quit_option_exits_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    Repository::init(dir.path()).unwrap();

    let output = semver(dir.path(), &["q"]);
    assert!(output.status.success());
}

#[test]
#[serial]
fn test_help_option_prints_usage() {
    let dir = tempfile::tempdir().unwrap();
    Repository::init(dir.path()).unwrap();

    let output = semver(dir.path(), &["h"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("rc to increment release candidate"));
}

#[test]
#[serial]
fn test_push_failure_exits_1_and_keeps_local_tag() {
    let dir = tempfile::tempdir().unwrap();
    init_committed_repo(dir.path());

    let output = semver_with_input(dir.path(), &["p"], "y\n");
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("No remote named 'origin' found"));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("git push origin"));

    let repo = Repository::open(dir.path()).unwrap();
    assert!(repo.find_reference("refs/tags/v0.0.1").is_ok());
}

#[test]
#[serial]
fn test_missing_config_file_reports_context() {
    let dir = tempfile::tempdir().unwrap();
    Repository::init(dir.path()).unwrap();

    let output = semver(dir.path(), &["--config", "missing.toml", "q"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Cannot load configuration: Configuration error: Cannot read missing.toml"));
}
