use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn render() -> Command {
    Command::cargo_bin("prudent-render").unwrap()
}

#[test]
fn writes_index_into_out_dir() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("public");

    render().arg("--out-dir").arg(&out).assert().success();

    let html = fs::read_to_string(out.join("index.html")).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Our Core Values"));
}

#[test]
fn stdout_mode_prints_document() {
    render()
        .arg("--stdout")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"));
}

#[test]
fn warns_about_dangling_anchors() {
    render()
        .args(["--stdout", "--log-level", "warn"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("#admissions"))
        .stderr(predicate::str::contains("#academics"));
}

#[test]
fn content_override_is_applied() {
    let dir = tempfile::tempdir().unwrap();
    let content = dir.path().join("content.toml");
    fs::write(&content, "[contact]\nheading = \"Talk to Us\"\n").unwrap();

    render()
        .arg("--stdout")
        .arg("--content")
        .arg(&content)
        .assert()
        .success()
        .stdout(predicate::str::contains("Talk to Us"))
        .stdout(predicate::str::contains("Get in Touch").not());
}

#[test]
fn dump_content_prints_toml() {
    render()
        .arg("--dump-content")
        .assert()
        .success()
        .stdout(predicate::str::contains("[hero]"))
        .stdout(predicate::str::contains("Elimu "));
}

#[test]
fn invalid_content_fails() {
    let dir = tempfile::tempdir().unwrap();
    let content = dir.path().join("broken.toml");
    fs::write(&content, "[hero\n").unwrap();

    render()
        .arg("--content")
        .arg(&content)
        .arg("--out-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse content file"));

    assert!(!dir.path().join("index.html").exists());
}

#[test]
fn missing_content_file_fails() {
    render()
        .args(["--content", "/nonexistent/content.toml", "--stdout"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read content file"));
}
