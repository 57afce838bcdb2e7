//! Integration tests for the onoma CLI

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper placing a word list inside the temp dir
fn write_words(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("words.txt");
    fs::write(&path, contents).unwrap();
    path
}

/// Helper running the binary and asserting it succeeds
fn run_analysis(input: &Path, output: &Path, extra_args: &[&str]) {
    let mut cmd = Command::cargo_bin("onoma").unwrap();
    cmd.arg(input).arg("-o").arg(output);
    for arg in extra_args {
        cmd.arg(arg);
    }
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Analysis complete."));
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_letter_analysis_shape() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_words(&temp_dir, "banana\napple\n");
    let output = temp_dir.path().join("stats.json");

    run_analysis(&input, &output, &[]);
    let value = read_json(&output);

    assert_eq!(value.pointer("/stats/total_words").unwrap(), 2);
    assert_eq!(value.pointer("/stats/total_characters").unwrap(), 11);
    assert_eq!(value.pointer("/letter_analysis/unigrams/a").unwrap(), 4);
    assert_eq!(value.pointer("/letter_analysis/bigrams/an").unwrap(), 2);
    assert_eq!(value.pointer("/letter_analysis/bigrams/na").unwrap(), 2);
    assert_eq!(
        value.pointer("/letter_analysis/positional_bigrams/start/ba").unwrap(),
        1
    );
    assert_eq!(value.pointer("/config/markov_order").unwrap(), 2);
}

#[test]
fn test_sections_follow_the_flags() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_words(&temp_dir, "banana\napple\n");

    let bare = temp_dir.path().join("bare.json");
    run_analysis(&input, &bare, &[]);
    let value = read_json(&bare);
    assert!(value.get("syllable_analysis").is_none());
    assert!(value.get("component_analysis").is_none());
    assert_eq!(value.pointer("/config/syllables_enabled").unwrap(), false);

    let full = temp_dir.path().join("full.json");
    run_analysis(&input, &full, &["--enable-syllables", "--enable-components"]);
    let value = read_json(&full);
    assert!(value.get("syllable_analysis").is_some());
    assert!(value.get("component_analysis").is_some());
    assert_eq!(value.pointer("/config/components_enabled").unwrap(), true);
}

#[test]
fn test_syllable_tables_for_banana() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_words(&temp_dir, "banana\n");
    let output = temp_dir.path().join("stats.json");

    run_analysis(&input, &output, &["--enable-syllables"]);
    let value = read_json(&output);

    assert_eq!(
        value.pointer("/syllable_analysis/all_syllables").unwrap(),
        &serde_json::json!(["ba", "na"])
    );
    assert_eq!(
        value.pointer("/syllable_analysis/syllable_frequencies/na").unwrap(),
        2
    );
    assert_eq!(value.pointer("/stats/total_syllables").unwrap(), 3);
    assert_eq!(
        value.pointer("/syllable_analysis/syllable_markov/order_1/ba/na").unwrap(),
        1
    );
}

#[test]
fn test_component_tables_count_empty_parts() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_words(&temp_dir, "apple\n");
    let output = temp_dir.path().join("stats.json");

    run_analysis(&input, &output, &["--enable-components"]);
    let value = read_json(&output);

    assert_eq!(
        value.pointer("/component_analysis/frequencies/onsets/").unwrap(),
        1
    );
    assert_eq!(
        value.pointer("/component_analysis/frequencies/codas/p").unwrap(),
        1
    );
    assert_eq!(
        value.pointer("/component_analysis/positional_onsets/end/pl").unwrap(),
        1
    );
}

#[test]
fn test_single_letter_word_chain() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_words(&temp_dir, "a\n");
    let output = temp_dir.path().join("stats.json");

    run_analysis(&input, &output, &["--min-length", "1", "--markov-order", "1"]);
    let value = read_json(&output);

    assert_eq!(
        value.pointer("/letter_analysis/markov_chains/order_1").unwrap(),
        &serde_json::json!({"^": {"a": 1}, "a": {"$": 1}})
    );
}

#[test]
fn test_min_length_filters_short_words() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_words(&temp_dir, "ab\nbanana\n");
    let output = temp_dir.path().join("stats.json");

    run_analysis(&input, &output, &["--min-length", "3"]);
    let value = read_json(&output);

    assert_eq!(value.pointer("/stats/total_words").unwrap(), 1);
    assert_eq!(value.pointer("/config/min_word_length").unwrap(), 3);
}

#[test]
fn test_reruns_are_byte_identical() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_words(&temp_dir, "banana\napple\nstrand\nqueen\nnaïve\n");
    let first = temp_dir.path().join("first.json");
    let second = temp_dir.path().join("second.json");

    let args = &["--enable-syllables", "--enable-components"];
    run_analysis(&input, &first, args);
    run_analysis(&input, &second, args);

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_missing_input_fails() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("stats.json");

    let mut cmd = Command::cargo_bin("onoma").unwrap();
    cmd.arg(temp_dir.path().join("absent.txt")).arg("-o").arg(&output);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to read word list"));
}

#[test]
fn test_comment_only_input_fails() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_words(&temp_dir, "# nothing but comments\n\n");
    let output = temp_dir.path().join("stats.json");

    let mut cmd = Command::cargo_bin("onoma").unwrap();
    cmd.arg(&input).arg("-o").arg(&output);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no valid words found"));
}

#[test]
fn test_markov_order_is_bounded() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_words(&temp_dir, "banana\n");
    let output = temp_dir.path().join("stats.json");

    let mut cmd = Command::cargo_bin("onoma").unwrap();
    cmd.arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--markov-order")
        .arg("4");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--markov-order"));
}

#[test]
fn test_help_lists_the_analysis_flags() {
    let mut cmd = Command::cargo_bin("onoma").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--markov-order"))
        .stdout(predicate::str::contains("--enable-syllables"))
        .stdout(predicate::str::contains("--enable-components"))
        .stdout(predicate::str::contains("--min-length"));
}
