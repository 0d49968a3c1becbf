use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("audiopub").unwrap();
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("audiopub"));
}

#[test]
fn test_parse_help() {
    let mut cmd = Command::cargo_bin("audiopub").unwrap();
    cmd.args(["parse", "--help"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("publication manifest"));
}

#[test]
fn test_parse_missing_directory_fails() {
    let mut cmd = Command::cargo_bin("audiopub").unwrap();
    cmd.args(["parse", "/nonexistent/bundle"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn test_parse_non_audiobook_directory_reports_not_applicable() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("chapter.mp3"), b"x").unwrap();
    std::fs::write(temp.path().join("notes.pdf"), b"x").unwrap();

    let mut cmd = Command::cargo_bin("audiopub").unwrap();
    cmd.arg("parse").arg(temp.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Not an audiobook bundle"));
}

#[test]
fn test_parse_json_emits_reading_order() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("02 track.mp3"), b"x").unwrap();
    std::fs::write(temp.path().join("01 track.mp3"), b"x").unwrap();
    std::fs::write(temp.path().join("cover.txt"), b"x").unwrap();

    let mut cmd = Command::cargo_bin("audiopub").unwrap();
    cmd.arg("parse").arg(temp.path()).arg("--json");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("readingOrder"))
        .stdout(predicate::str::contains("01 track.mp3"))
        .stdout(predicate::str::contains("cover.txt").not());
}

#[test]
fn test_tracks_lists_reading_order() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("b.mp3"), b"x").unwrap();
    std::fs::write(temp.path().join("a.mp3"), b"x").unwrap();

    let mut cmd = Command::cargo_bin("audiopub").unwrap();
    cmd.arg("tracks").arg(temp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("a.mp3"))
        .stdout(predicate::str::contains("b.mp3"));
}

#[test]
fn test_cover_without_cover_fails() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("a.mp3"), b"x").unwrap();
    let output = temp.path().join("cover.jpg");

    let mut cmd = Command::cargo_bin("audiopub").unwrap();
    cmd.arg("cover")
        .arg(temp.path())
        .arg("--output")
        .arg(&output);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No cover image"));
}

#[test]
fn test_ignore_ext_flag_rescues_bundle() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("a.mp3"), b"x").unwrap();
    std::fs::write(temp.path().join("info.nfo"), b"x").unwrap();

    let mut cmd = Command::cargo_bin("audiopub").unwrap();
    cmd.arg("parse").arg(temp.path());
    cmd.assert().failure();

    let mut cmd = Command::cargo_bin("audiopub").unwrap();
    cmd.args(["--ignore-ext", "nfo", "parse"]).arg(temp.path());
    cmd.assert().success();
}
