use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn write_config(dir: &Path, raise_rate: &str) -> std::path::PathBuf {
    let yaml = format!(
        r#"
run_id: "cli"
matches: 2
seed: 9
raise_rate: {raise_rate}
outputs:
  jsonl: "{jsonl}"
  summary_md: "{summary}"
"#,
        jsonl = dir.join("{run_id}").join("matches.jsonl").display(),
        summary = dir.join("{run_id}").join("summary.md").display(),
    );
    let path = dir.join("sim.yaml");
    fs::write(&path, yaml).expect("config written");
    path
}

#[test]
fn validate_only_skips_the_simulation() {
    let dir = tempdir().expect("temp dir");
    let config = write_config(dir.path(), "0.1");

    Command::cargo_bin("truco-bench")
        .expect("binary built")
        .arg("--config")
        .arg(&config)
        .arg("--validate-only")
        .assert()
        .success()
        .stdout(predicate::str::contains("Validation-only mode"));

    assert!(!dir.path().join("cli").join("matches.jsonl").exists());
}

#[test]
fn run_id_override_names_the_outputs() {
    let dir = tempdir().expect("temp dir");
    let config = write_config(dir.path(), "0.1");

    Command::cargo_bin("truco-bench")
        .expect("binary built")
        .arg("--config")
        .arg(&config)
        .args(["--run-id", "override", "--matches", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Simulation complete for 'override'"));

    let jsonl = fs::read_to_string(dir.path().join("override").join("matches.jsonl"))
        .expect("rows written under the overridden run id");
    assert_eq!(jsonl.lines().count(), 1);
    assert!(dir.path().join("override").join("summary.md").exists());
}

#[test]
fn out_of_range_raise_rate_fails() {
    let dir = tempdir().expect("temp dir");
    let config = write_config(dir.path(), "2.0");

    Command::cargo_bin("truco-bench")
        .expect("binary built")
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("raise_rate"));
}
