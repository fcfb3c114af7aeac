use assert_cmd::Command;
use kbase::model::{Article, Section};
use kbase::store::ContentStore;
use predicates::prelude::*;
use std::path::PathBuf;

fn write_kb(dir: &tempfile::TempDir) -> PathBuf {
    let mut support = Section::new("support", "Support");
    support.articles.push(Article::new(
        "sup001".into(),
        "How to Handle a High Priority Ticket".into(),
        "Triage, escalate, resolve".into(),
    ));
    let store = ContentStore::new(vec![support]);

    let path = dir.path().join("kb.json");
    std::fs::write(&path, serde_json::to_string_pretty(&store).unwrap()).unwrap();
    path
}

fn kb() -> Command {
    Command::cargo_bin("kb").unwrap()
}

#[test]
fn view_prints_a_fragment() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_kb(&dir);

    kb().args(["--file", path.to_str().unwrap(), "view", "support/sup001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("High Priority Ticket"))
        .stdout(predicate::str::contains("kb-detail"));
}

#[test]
fn search_highlights_matches() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_kb(&dir);

    kb().args(["--file", path.to_str().unwrap(), "search", "priority"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<mark>Priority</mark>"));
}

#[test]
fn missing_content_file_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    kb().args(["--file", path.to_str().unwrap(), "sections"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unavailable"));
}

#[test]
fn add_article_persists_to_the_content_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_kb(&dir);

    kb().args([
        "--file",
        path.to_str().unwrap(),
        "add",
        "article",
        "support",
        "--title",
        "Printer Troubleshooting",
        "--summary",
        "Paper jams and drivers",
    ])
    .assert()
    .success();

    let saved = std::fs::read_to_string(&path).unwrap();
    assert!(saved.contains("Paper jams and drivers"));
}

#[test]
fn blank_summary_is_rejected_and_not_saved() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_kb(&dir);
    let before = std::fs::read_to_string(&path).unwrap();

    kb().args([
        "--file",
        path.to_str().unwrap(),
        "add",
        "article",
        "support",
        "--title",
        "New",
        "--summary",
        "  ",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Summary"));

    let after = std::fs::read_to_string(&path).unwrap();
    assert_eq!(before, after);
}

#[test]
fn init_creates_a_starter_knowledge_base() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fresh.json");

    kb().args(["--file", path.to_str().unwrap(), "init"])
        .assert()
        .success();
    assert!(path.exists());

    kb().args(["--file", path.to_str().unwrap(), "sections"])
        .assert()
        .success()
        .stdout(predicate::str::contains("General"));
}
