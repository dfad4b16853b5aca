//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn quiz_hub() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("quiz-hub").unwrap();
    cmd.env_remove("QUIZ_HUB_CATALOG")
        .env_remove("QUIZ_HUB_EMAIL")
        .env_remove("QUIZ_HUB_PASSWORD");
    cmd
}

const DRAFT: &str = r#"{
    "title": "Rust Ownership",
    "description": "Moves, borrows and lifetimes.",
    "questions": [
        {
            "text": "What happens to a String after it is moved?",
            "options": ["It is copied", "The old binding can no longer be used"],
            "correctOptionIndex": 1
        }
    ]
}"#;

#[test]
fn list_shows_sample_quizzes() {
    quiz_hub()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Web Development Basics"))
        .stdout(predicate::str::contains("Science Quiz: Astronomy"))
        .stdout(predicate::str::contains("History: Ancient Civilizations"))
        .stdout(predicate::str::contains("Mathematics Challenge"));
}

#[test]
fn list_search_is_case_insensitive() {
    quiz_hub()
        .args(["list", "--search", "WEB"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Web Development Basics"))
        .stdout(predicate::str::contains("Astronomy").not());
}

#[test]
fn list_search_without_matches() {
    quiz_hub()
        .args(["list", "--search", "zzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No quizzes found"));
}

#[test]
fn list_json_output() {
    quiz_hub()
        .args(["list", "--json", "--search", "math"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"questionCount\": 3"))
        .stdout(predicate::str::contains("\"estimatedMinutes\": 5.0"));
}

#[test]
fn missing_catalog_file_fails() {
    quiz_hub()
        .args(["--catalog", "/no/such/catalog.json", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn create_then_list() {
    let dir = TempDir::new().unwrap();
    let catalog = dir.path().join("catalog.json");
    let draft = dir.path().join("draft.json");
    std::fs::write(&draft, DRAFT).unwrap();

    quiz_hub()
        .arg("--catalog")
        .arg(&catalog)
        .arg("create")
        .arg("--draft")
        .arg(&draft)
        .args(["--email", "ferris@rust-lang.org", "--password", "crab123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created quiz Rust Ownership"));

    quiz_hub()
        .arg("--catalog")
        .arg(&catalog)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rust Ownership"))
        .stdout(predicate::str::contains("by ferris"));
}

#[test]
fn create_rejects_blank_title() {
    let dir = TempDir::new().unwrap();
    let catalog = dir.path().join("catalog.json");
    let draft = dir.path().join("draft.json");
    std::fs::write(&draft, DRAFT.replace("Rust Ownership", " ")).unwrap();

    quiz_hub()
        .arg("--catalog")
        .arg(&catalog)
        .arg("create")
        .arg("--draft")
        .arg(&draft)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Quiz title is required"));

    assert!(!catalog.exists());
}
