//! Integration tests for the Bookfind CLI

use assert_cmd::Command;
use predicates::prelude::*;

/// Nothing listens on port 1
const UNREACHABLE: &str = "http://127.0.0.1:1/books";

fn bookfind() -> Command {
    let mut cmd = Command::cargo_bin("bookfind-cli").unwrap();
    cmd.env_remove("BOOKFIND_BASE_URL")
        .env_remove("BOOKFIND_DEBOUNCE_MS")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help() {
    bookfind()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("browse"))
        .stdout(predicate::str::contains("filters"));
}

#[test]
fn test_version() {
    bookfind()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bookfind"));
}

#[test]
fn test_search_help() {
    bookfind()
        .args(["search", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--language"))
        .stdout(predicate::str::contains("--copyright"))
        .stdout(predicate::str::contains("--category"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn test_filters_lists_vocabularies() {
    bookfind()
        .arg("filters")
        .assert()
        .success()
        .stdout(predicate::str::contains("English"))
        .stdout(predicate::str::contains("Science Fiction"))
        .stdout(predicate::str::contains("Popular(default)"));
}

#[test]
fn test_dry_run_default_request() {
    bookfind()
        .args(["search", "--dry-run"])
        .assert()
        .success()
        .stdout("https://gutendex.com/books?page=1\n");
}

#[test]
fn test_dry_run_with_filters() {
    bookfind()
        .args(["search", "dracula", "-l", "en", "--dry-run"])
        .assert()
        .success()
        .stdout("https://gutendex.com/books?search=dracula&languages=en&page=1\n");
}

#[test]
fn test_dry_run_full_selection() {
    bookfind()
        .args([
            "search",
            "war and peace",
            "--language",
            "French",
            "--language",
            "en",
            "--copyright",
            "no",
            "--category",
            "science fiction",
            "--category",
            "horror",
            "--sort",
            "descending",
            "--page",
            "3",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(
            "https://gutendex.com/books?search=war%20and%20peace&copyright=false\
             &languages=en,fr&topic=science%20fiction%2Chorror&sort=descending&page=3\n",
        );
}

#[test]
fn test_base_url_from_environment() {
    bookfind()
        .env("BOOKFIND_BASE_URL", "http://localhost:8000/books")
        .args(["search", "--dry-run"])
        .assert()
        .success()
        .stdout("http://localhost:8000/books?page=1\n");
}

#[test]
fn test_base_url_flag_overrides_environment() {
    bookfind()
        .env("BOOKFIND_BASE_URL", "http://localhost:8000/books")
        .args(["--base-url", "http://mirror.test/books", "search", "--dry-run"])
        .assert()
        .success()
        .stdout("http://mirror.test/books?page=1\n");
}

#[test]
fn test_invalid_base_url() {
    bookfind()
        .args(["--base-url", "ftp://example.org", "search", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Base URL must start with"));
}

#[test]
fn test_invalid_debounce_environment() {
    bookfind()
        .env("BOOKFIND_DEBOUNCE_MS", "soon")
        .arg("filters")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Debounce must be a whole number"));
}

#[test]
fn test_unknown_language_rejected() {
    bookfind()
        .args(["search", "--language", "klingon", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown language value: klingon"));
}

#[test]
fn test_page_zero_rejected() {
    bookfind()
        .args(["search", "--page", "0", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid page number: 0"));
}

#[test]
fn test_unreachable_catalog_fails() {
    bookfind()
        .args(["--base-url", UNREACHABLE, "search", "dracula"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to fetch books."));
}

#[test]
fn test_browse_commands() {
    bookfind()
        .args(["--base-url", UNREACHABLE, "browse"])
        .write_stdin(":filters\n:lang klingon\n:quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(":clear-all"))
        .stdout(predicate::str::contains("Languages"))
        .stderr(predicate::str::contains("Unknown language value: klingon"));
}

#[test]
fn test_browse_sends_search_typed_before_end_of_input() {
    bookfind()
        .args(["--base-url", UNREACHABLE, "browse"])
        .write_stdin("dracula\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Active: dracula [x] | [Remove All]\nFailed to fetch books.\nPage 1 | Next >",
        ));
}

#[test]
fn test_browse_ends_at_end_of_input() {
    bookfind()
        .args(["--base-url", UNREACHABLE, "browse"])
        .write_stdin("")
        .assert()
        .success();
}
