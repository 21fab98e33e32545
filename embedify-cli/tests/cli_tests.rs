use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

#[test]
fn test_help_command() {
    let mut cmd = Command::cargo_bin("embedify").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Vendor remote and local assets into generated embed sources",
        ));
}

#[test]
fn test_version_command() {
    let mut cmd = Command::cargo_bin("embedify").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("embedify"));
}

#[test]
fn test_version_subcommand() {
    let mut cmd = Command::cargo_bin("embedify").unwrap();
    cmd.arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("embedify 0.1.0"));
}

#[test]
fn test_version_subcommand_json() {
    let mut cmd = Command::cargo_bin("embedify").unwrap();
    cmd.args(["version", "--output", "json"])
        .assert()
        .success()
        .stdout(
            predicate::str::is_match(r#"\{"name":"embedify","version":"0\.1\.0"\}"#).unwrap(),
        );
}

#[test]
fn test_generate_without_manifest_fails() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("embedify").unwrap();
    cmd.args(["-C", temp_dir.path().to_str().unwrap(), "generate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("embed.toml not found"));
}

#[test]
fn test_generate_local_files() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("hello.txt").write_str("hello world").unwrap();
    temp_dir
        .child("embed.toml")
        .write_str("files = [\"hello.txt\"]\noutput = \"assets\"\n")
        .unwrap();

    let mut cmd = Command::cargo_bin("embedify").unwrap();
    cmd.args(["-C", temp_dir.path().to_str().unwrap(), "generate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hello.txt -> assets/hello.txt as Hello"));

    temp_dir
        .child("assets/hello.txt")
        .assert(predicate::str::contains("hello world"));
    temp_dir.child("embedded.rs").assert(predicate::str::contains(
        "pub static Hello: &str = include_str!(\"assets/hello.txt\");",
    ));
}

#[test]
fn test_generate_dry_run_touches_nothing() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("hello.txt").write_str("hello world").unwrap();
    temp_dir
        .child("embed.toml")
        .write_str("files = [\"hello.txt\"]\noutput = \"assets\"\n")
        .unwrap();

    let mut cmd = Command::cargo_bin("embedify").unwrap();
    cmd.args([
        "-C",
        temp_dir.path().to_str().unwrap(),
        "generate",
        "--dry-run",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("dry run"));

    temp_dir.child("embedded.rs").assert(predicate::path::missing());
    temp_dir.child("assets").assert(predicate::path::missing());
}

#[test]
fn test_generate_json_output() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("my-file.txt").write_str("x").unwrap();
    temp_dir
        .child("embed.toml")
        .write_str("files = [\"my-file.txt\"]\n")
        .unwrap();

    let mut cmd = Command::cargo_bin("embedify").unwrap();
    let assert = cmd
        .args([
            "-C",
            temp_dir.path().to_str().unwrap(),
            "generate",
            "--output",
            "json",
        ])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(parsed["success"], true);
    assert_eq!(parsed["entries"][0]["variable"], "MyFile");
}

#[test]
fn test_generate_naming_flag() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("my-file.txt").write_str("x").unwrap();
    temp_dir
        .child("embed.toml")
        .write_str("files = [\"my-file.txt\"]\n")
        .unwrap();

    let mut cmd = Command::cargo_bin("embedify").unwrap();
    cmd.args([
        "-C",
        temp_dir.path().to_str().unwrap(),
        "generate",
        "--naming",
        "snake",
        "--dry-run",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("My_file"));
}

#[test]
fn test_generate_quiet_suppresses_output() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("hello.txt").write_str("x").unwrap();
    temp_dir
        .child("embed.toml")
        .write_str("files = [\"hello.txt\"]\n")
        .unwrap();

    let mut cmd = Command::cargo_bin("embedify").unwrap();
    cmd.args([
        "-C",
        temp_dir.path().to_str().unwrap(),
        "generate",
        "--quiet",
    ])
    .assert()
    .success()
    .stdout(predicate::str::is_empty());
}

#[test]
fn test_generate_missing_local_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir
        .child("embed.toml")
        .write_str("files = [\"missing.txt\"]\n")
        .unwrap();

    let mut cmd = Command::cargo_bin("embedify").unwrap();
    cmd.args(["-C", temp_dir.path().to_str().unwrap(), "generate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.txt"));
}
