//! End-to-end tests of the dotplot binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn dotplot() -> Command {
    let mut cmd = Command::cargo_bin("dotplot").expect("dotplot binary");
    cmd.arg("--quiet");
    cmd
}

#[test]
fn self_plot_of_repeated_kmer() {
    dotplot()
        .args(["self", "--seq", "AAAA", "-k", "2"])
        .assert()
        .success()
        .stdout("x\ty\n0\t0\n0\t1\n1\t0\n1\t1\n");
}

#[test]
fn pairwise_plot_as_json() {
    dotplot()
        .args(["pairwise", "--seq-a", "ATCGA", "--seq-b", "GCATT", "-k", "2", "--format", "json"])
        .assert()
        .success()
        .stdout("{\"x\":[0],\"y\":[2]}\n");
}

#[test]
fn inclusive_boundary_keeps_last_window() {
    dotplot()
        .args([
            "pairwise", "--seq-a", "ATCG", "--seq-b", "GCAT", "-k", "2", "--boundary", "inclusive",
        ])
        .assert()
        .success()
        .stdout("x\ty\n0\t2\n");
}

#[test]
fn disjoint_sequences_give_header_only() {
    dotplot()
        .args(["pairwise", "--seq-a", "AAAAAA", "--seq-b", "CCCCCC", "-k", "3"])
        .assert()
        .success()
        .stdout("x\ty\n");
}

#[test]
fn missing_sequence_reports_suggestions() {
    dotplot()
        .args(["self", "-k", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing sequence"))
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn zero_max_occurrences_is_rejected() {
    dotplot()
        .args(["self", "--seq", "ATCGATCG", "--max-occurrences", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_occurrences must be at least 1"));
}

#[test]
fn seeded_random_runs_are_reproducible() {
    let run = || {
        dotplot()
            .args(["self", "--random", "200", "-k", "3", "--seed", "42"])
            .output()
            .expect("run dotplot")
            .stdout
    };
    let first = run();
    assert!(first.starts_with(b"x\ty\n"));
    assert_eq!(first, run());
}

#[test]
fn writes_coordinates_and_alphabet_files() {
    let dir = tempdir().expect("temp dir");
    let out = dir.path().join("self.json");
    let alphabet = dir.path().join("alphabet.json");

    dotplot()
        .args(["self", "--seq", "ATATAT", "-k", "2", "--format", "json"])
        .arg("--out")
        .arg(&out)
        .arg("--alphabet-out")
        .arg(&alphabet)
        .assert()
        .success()
        .stdout("");

    // AT TA AT TA -> codes 0 1 0 1
    let coords: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(coords["x"], serde_json::json!([0, 0, 1, 1, 2, 2, 3, 3]));
    assert_eq!(coords["y"], serde_json::json!([0, 2, 1, 3, 0, 2, 1, 3]));

    let kmers: Vec<String> =
        serde_json::from_str(&std::fs::read_to_string(&alphabet).unwrap()).unwrap();
    assert_eq!(kmers, vec!["AT", "TA"]);
}

#[test]
fn demo_writes_all_outputs() {
    let dir = tempdir().expect("temp dir");

    dotplot()
        .args(["demo", "--seed", "7", "-k", "4"])
        .arg("--out-dir")
        .arg(dir.path())
        .assert()
        .success();

    let self_tsv = std::fs::read_to_string(dir.path().join("self.tsv")).unwrap();
    // header plus at least the 996 diagonal points of a 1000-symbol sequence
    assert!(self_tsv.lines().count() > 996);
    assert!(dir.path().join("pairwise.tsv").exists());
    assert!(dir.path().join("alphabet.json").exists());
}

#[test]
fn demo_rejects_missing_directory() {
    dotplot()
        .args(["demo", "--out-dir", "/nonexistent-dotplot-dir"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("output directory does not exist"));
}

#[test]
fn config_file_sets_k() {
    let dir = tempdir().expect("temp dir");
    let config = dir.path().join("dotplot.toml");
    std::fs::write(&config, "[encode]\nk = 3\n").unwrap();

    // k=3 over AAAA -> one window AAA
    dotplot()
        .arg("--config")
        .arg(&config)
        .args(["self", "--seq", "AAAA"])
        .assert()
        .success()
        .stdout("x\ty\n0\t0\n");
}

#[test]
fn config_command_prints_example() {
    dotplot()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[encode]"))
        .stdout(predicate::str::contains("k = 4"));
}

#[test]
fn config_output_file_loads_back() {
    let dir = tempdir().expect("temp dir");
    let config = dir.path().join("written.toml");

    dotplot()
        .args(["config", "--output"])
        .arg(&config)
        .assert()
        .success()
        .stdout("");

    let content = std::fs::read_to_string(&config).unwrap();
    let table: toml::Table = toml::from_str(&content).expect("valid TOML");
    assert_eq!(table["encode"]["k"].as_integer(), Some(4));
    assert_eq!(table["encode"]["boundary"].as_str(), Some("drop-last"));
    assert_eq!(table["random"]["symbols"].as_str(), Some("ATCG"));

    // default k=4 over AAAAA -> one window AAAA
    dotplot()
        .arg("--config")
        .arg(&config)
        .args(["self", "--seq", "AAAAA"])
        .assert()
        .success()
        .stdout("x\ty\n0\t0\n");
}

#[test]
fn non_ascii_sequence_is_rejected() {
    let dir = tempdir().expect("temp dir");
    let alphabet = dir.path().join("alphabet.json");

    dotplot()
        .args(["self", "--seq", "ÅÅ", "-k", "1", "--alphabet-out"])
        .arg(&alphabet)
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-ASCII character 'Å'"));
    assert!(!alphabet.exists());
}

#[test]
fn non_ascii_random_symbols_are_rejected() {
    let dir = tempdir().expect("temp dir");
    let config = dir.path().join("dotplot.toml");
    std::fs::write(&config, "[random]\nsymbols = \"ACGÜ\"\n").unwrap();

    dotplot()
        .arg("--config")
        .arg(&config)
        .args(["demo", "--out-dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("[random] symbols contains non-ASCII"));
}

fn dotplot_logged() -> Command {
    let mut cmd = Command::cargo_bin("dotplot").expect("dotplot binary");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn verbosity_controls_log_level() {
    dotplot_logged()
        .args(["self", "--seq", "ATCGATCG", "-k", "3"])
        .assert()
        .success()
        .stderr(predicate::str::contains("INFO"))
        .stderr(predicate::str::contains("DEBUG").not());

    dotplot_logged()
        .args(["-v", "self", "--seq", "ATCGATCG", "-k", "3"])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"))
        // ATC TCG CGA GAT ATC: 5 diagonal points plus 2 for the repeated ATC
        .stderr(predicate::str::contains("Found 7 self matches"));

    dotplot_logged()
        .args(["--quiet", "self", "--seq", "ATCGATCG", "-k", "3"])
        .assert()
        .success()
        .stderr("");
}
