use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::path::PathBuf;
use tempfile::TempDir;

fn book_json() -> Value {
    json!({
        "id": 1342,
        "title": "Pride and Prejudice",
        "authors": [{"name": "Austen, Jane", "birth_year": 1775, "death_year": 1817}],
        "summaries": ["Elizabeth Bennet navigates manners and marriage in Regency England."],
        "subjects": ["Courtship -- Fiction", "England -- Fiction"],
        "bookshelves": ["Best Books Ever Listings"],
        "languages": ["en"],
        "copyright": false,
        "media_type": "Text",
        "formats": {"text/html": "https://www.gutenberg.org/ebooks/1342.html.images"},
        "download_count": 60000
    })
}

/// Write a config pointing the binary at the mock server
fn config_for(server: &MockServer, dir: &TempDir, extra: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        format!(
            "[catalog]\nbase_url = \"{}\"\n{}",
            server.url("/books"),
            extra
        ),
    )
    .unwrap();
    path
}

#[test]
fn test_search_prints_books_and_cursors() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/books")
            .query_param("search", "austen")
            .query_param("languages", "en,fr");
        then.status(200).json_body(json!({
            "count": 1,
            "next": "https://gutendex.com/books/?page=2&search=austen",
            "previous": null,
            "results": [book_json()]
        }));
    });

    let temp = TempDir::new().unwrap();
    let config = config_for(&server, &temp, "");

    let mut cmd = Command::cargo_bin("gutenctl").unwrap();
    cmd.args(["search", "austen", "-l", "en", "-l", "fr", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Pride and Prejudice"))
        .stdout(predicate::str::contains("Austen, Jane"))
        .stdout(predicate::str::contains("page=2&search=austen"));

    mock.assert();
}

#[test]
fn test_search_json_output() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/books");
        then.status(200).json_body(json!({
            "count": 1,
            "next": null,
            "previous": null,
            "results": [book_json()]
        }));
    });

    let temp = TempDir::new().unwrap();
    let config = config_for(&server, &temp, "");

    let output = Command::cargo_bin("gutenctl")
        .unwrap()
        .args(["search", "--json", "--config"])
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["books"][0], book_json());
    assert_eq!(parsed["nextPage"], Value::Null);
    assert_eq!(parsed["previousPage"], Value::Null);
}

#[test]
fn test_search_nested_encoding_from_config() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/books")
            .query_param("search", "topic=children&page=2");
        then.status(200).json_body(json!({
            "count": 0, "next": null, "previous": null, "results": []
        }));
    });

    let temp = TempDir::new().unwrap();
    let config = config_for(&server, &temp, "query_encoding = \"nested\"\n");

    let mut cmd = Command::cargo_bin("gutenctl").unwrap();
    cmd.args(["search", "--topic", "children", "--page", "2", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("No books found"));

    mock.assert();
}

#[test]
fn test_search_server_error_fails_once() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/books");
        then.status(500);
    });

    let temp = TempDir::new().unwrap();
    let config = config_for(&server, &temp, "");

    let mut cmd = Command::cargo_bin("gutenctl").unwrap();
    cmd.args(["search", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("status 500"));

    mock.assert_hits(1);
}

#[test]
fn test_show_book() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/books/1342");
        then.status(200).json_body(book_json());
    });

    let temp = TempDir::new().unwrap();
    let config = config_for(&server, &temp, "");

    let mut cmd = Command::cargo_bin("gutenctl").unwrap();
    cmd.args(["show", "1342", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Pride and Prejudice"))
        .stdout(predicate::str::contains("Austen, Jane (1775-1817)"));

    mock.assert();
}

#[test]
fn test_show_single_field() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/books/1342");
        then.status(200).json_body(book_json());
    });

    let temp = TempDir::new().unwrap();
    let config = config_for(&server, &temp, "");

    let mut cmd = Command::cargo_bin("gutenctl").unwrap();
    cmd.args(["show", "1342", "--field", "download_count", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout("60000\n");

    let mut cmd = Command::cargo_bin("gutenctl").unwrap();
    cmd.args(["show", "1342", "--field", "isbn", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown field: isbn"));
}

#[test]
fn test_show_missing_book() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/books/999999");
        then.status(404).json_body(json!({"detail": "Not found."}));
    });

    let temp = TempDir::new().unwrap();
    let config = config_for(&server, &temp, "");

    let mut cmd = Command::cargo_bin("gutenctl").unwrap();
    cmd.args(["show", "999999", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to fetch book 999999"));
}
