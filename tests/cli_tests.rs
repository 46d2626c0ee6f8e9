//! Integration tests for the kwic CLI

mod common;

use common::{kwic, write_file, THESAURUS};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Help, version and banner
// ============================================================================

#[test]
fn test_help_flag() {
    let dir = tempdir().unwrap();
    kwic(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: kwic"))
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("tokenize"));
}

#[test]
fn test_version_flag() {
    let dir = tempdir().unwrap();
    kwic(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("kwic"));
}

#[test]
fn test_no_command_prints_banner() {
    let dir = tempdir().unwrap();
    kwic(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("kwic --help"));
}

// ============================================================================
// build
// ============================================================================

#[test]
fn test_build_human() {
    let dir = tempdir().unwrap();
    let input = write_file(dir.path(), "thesaurus.json", THESAURUS);

    let output = kwic(dir.path()).arg("build").arg(&input).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "          Big Cats");
    assert_eq!(lines[1], "      Big Cats");
    assert_eq!(lines[2], "          Felines  USE Big Cats");
    assert_eq!(lines[4], "Flowering Plants");
}

#[test]
fn test_build_json_in_scheme() {
    let dir = tempdir().unwrap();
    let input = write_file(dir.path(), "thesaurus.json", THESAURUS);

    let output = kwic(dir.path())
        .args(["--format", "json", "build"])
        .arg(&input)
        .args(["--scheme", "http://example.org/animals"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let index: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(index["language"], "en");
    assert_eq!(index["scheme"], "http://example.org/animals");

    let entries = index["entries"].as_array().unwrap();
    let keys: Vec<&str> = entries.iter().map(|e| e["key"].as_str().unwrap()).collect();
    assert_eq!(keys, vec!["Big", "Cats", "Felines"]);
    assert_eq!(entries[2]["crossRef"]["text"], "Big Cats");
    assert_eq!(entries[2]["crossRef"]["caption"], "USE");
    assert!(entries[0].get("crossRef").is_none());
}

#[test]
fn test_build_records_french() {
    let dir = tempdir().unwrap();
    let input = write_file(dir.path(), "thesaurus.json", THESAURUS);

    kwic(dir.path())
        .args(["--format", "records", "build"])
        .arg(&input)
        .args(["--lang", "fr", "--scheme", "http://example.org/animals"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H kwic=1 lang=fr entries=2 scheme=http://example.org/animals\n",
        ))
        .stdout(predicate::str::contains(
            "E key=\"félins\" before=\"grands \" after=\"\"",
        ))
        .stdout(predicate::str::contains(
            "E key=\"grands\" before=\"\" after=\" félins\"",
        ));
}

#[test]
fn test_build_rows_from_stdin() {
    let dir = tempdir().unwrap();
    let rows = concat!(
        r#"{"concept": "c1", "label": "Big Cats"}"#,
        "\n",
        r#"{"concept": "c1", "label": "Felines", "prefLabel": "Big Cats"}"#,
        "\n",
    );

    kwic(dir.path())
        .args(["--format", "records", "build", "-", "--input-format", "rows"])
        .write_stdin(rows)
        .assert()
        .success()
        .stdout(predicate::str::contains("entries=3"))
        .stdout(predicate::str::contains("kind=alt"))
        .stdout(predicate::str::contains("see=\"Big Cats\""));
}

#[test]
fn test_build_empty_index() {
    let dir = tempdir().unwrap();
    let input = write_file(dir.path(), "rows.jsonl", "\n");

    kwic(dir.path())
        .arg("build")
        .arg(&input)
        .args(["--input-format", "rows"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries"));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_file_raises_min_token_chars() {
    let dir = tempdir().unwrap();
    let config = write_file(dir.path(), "kwic.toml", "[context]\nmin_token_chars = 4\n");
    let input = write_file(
        dir.path(),
        "rows.jsonl",
        "{\"concept\": \"c1\", \"label\": \"Big Cats\"}\n",
    );

    kwic(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["--format", "records", "build"])
        .arg(&input)
        .args(["--input-format", "rows"])
        .assert()
        .success()
        .stdout(predicate::str::contains("entries=1"))
        .stdout(predicate::str::contains("E key=\"Cats\""));
}

#[test]
fn test_global_config_is_read() {
    let dir = tempdir().unwrap();
    let config_dir = dir.path().join("config");
    std::fs::create_dir_all(&config_dir).unwrap();
    write_file(&config_dir, "config.toml", "default_language = \"fr\"\n");
    let input = write_file(dir.path(), "thesaurus.json", THESAURUS);

    kwic(dir.path())
        .args(["--format", "records", "build"])
        .arg(&input)
        .args(["--scheme", "http://example.org/animals"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lang=fr"));
}

#[test]
fn test_invalid_config_exit_code_3() {
    let dir = tempdir().unwrap();
    let config = write_file(
        dir.path(),
        "kwic.toml",
        "[context]\nmax_chars = 10\nkeep_chars = 20\n",
    );

    kwic(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["tokenize", "Big Cats"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("context.keep_chars"));
}

// ============================================================================
// Exit codes and error envelopes
// ============================================================================

#[test]
fn test_unknown_format_exit_code_2() {
    let dir = tempdir().unwrap();
    kwic(dir.path())
        .args(["--format", "xml", "tokenize", "Big Cats"])
        .assert()
        .code(2);
}

#[test]
fn test_missing_input_exit_code_3() {
    let dir = tempdir().unwrap();
    kwic(dir.path())
        .arg("build")
        .arg(dir.path().join("missing.json"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_malformed_row_exit_code_3() {
    let dir = tempdir().unwrap();
    let input = write_file(
        dir.path(),
        "rows.jsonl",
        "{\"concept\": \"c1\", \"label\": \"Big Cats\"}\nnot json\n",
    );

    kwic(dir.path())
        .arg("build")
        .arg(&input)
        .args(["--input-format", "rows"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid row at line 2"));
}

#[test]
fn test_json_error_envelope() {
    let dir = tempdir().unwrap();
    let output = kwic(dir.path())
        .args(["--format", "json", "build"])
        .arg(dir.path().join("missing.json"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["code"], 3);
}

#[test]
fn test_quiet_suppresses_error_message() {
    let dir = tempdir().unwrap();
    kwic(dir.path())
        .args(["--quiet", "build"])
        .arg(dir.path().join("missing.json"))
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

// ============================================================================
// tokenize
// ============================================================================

#[test]
fn test_tokenize_json() {
    let dir = tempdir().unwrap();
    let output = kwic(dir.path())
        .args(["--format", "json", "tokenize", "Vitamin C deficiency"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let tokens: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let tokens = tokens.as_array().unwrap();
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1]["text"], "C");
    assert_eq!(tokens[1]["offset"], 8);
    assert_eq!(tokens[1]["indexed"], false);
    assert_eq!(tokens[2]["text"], "deficiency");
}

#[test]
fn test_tokenize_human_marks_skipped() {
    let dir = tempdir().unwrap();
    kwic(dir.path())
        .args(["tokenize", "Vitamin C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("   0  Vitamin"))
        .stdout(predicate::str::contains("   8  C  (skipped)"));
}

#[test]
fn test_scheme_with_rows_is_usage_error() {
    let dir = tempdir().unwrap();
    let input = write_file(
        dir.path(),
        "rows.jsonl",
        "{\"concept\": \"c1\", \"label\": \"Big Cats\"}\n",
    );

    kwic(dir.path())
        .arg("build")
        .arg(&input)
        .args(["--input-format", "rows", "--scheme", "http://example.org/animals"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--scheme"));
}
