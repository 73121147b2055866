use std::fs;

use tempfile::tempdir;
use truco_bench::config::SimulationConfig;
use truco_bench::runner::SimulationRunner;

fn load_config(output_dir: &std::path::Path, raise_rate: f64) -> SimulationConfig {
    let yaml = format!(
        r#"
run_id: "test_smoke"
matches: 4
seed: 4242
raise_rate: {raise_rate}
outputs:
  jsonl: "{jsonl}"
  summary_md: "{summary}"
logging:
  enable_structured: false
"#,
        jsonl = output_dir.join("matches.jsonl").display(),
        summary = output_dir.join("summary.md").display(),
    );

    let mut cfg: SimulationConfig = serde_yaml::from_str(&yaml).expect("valid yaml");
    cfg.validate().expect("config validates");
    cfg
}

fn run_once(raise_rate: f64) -> (String, String) {
    let dir = tempdir().expect("temp dir");
    let config = load_config(dir.path(), raise_rate);
    let outputs = config.resolved_outputs();

    let summary = SimulationRunner::new(config, outputs)
        .run()
        .expect("simulation completes");
    assert_eq!(summary.matches_played, 4);
    assert_eq!(summary.rows_written, 4);

    let jsonl = fs::read_to_string(&summary.jsonl_path).expect("jsonl readable");
    let markdown = fs::read_to_string(&summary.summary_path).expect("summary readable");
    (jsonl, markdown)
}

#[test]
fn simulation_writes_one_row_per_match() {
    let (jsonl, _) = run_once(0.3);
    let rows: Vec<serde_json::Value> = jsonl
        .lines()
        .map(|line| serde_json::from_str(line).expect("row decodes to JSON"))
        .collect();
    assert_eq!(rows.len(), 4);

    for (index, row) in rows.iter().enumerate() {
        assert_eq!(row["run_id"], "test_smoke");
        assert_eq!(row["match_index"], index);
        let winner = row["winner"].as_str().expect("winner label");
        assert!(winner == "NorthSouth" || winner == "EastWest");
        let scores: Vec<u64> = row["scores"]
            .as_array()
            .expect("scores")
            .iter()
            .filter_map(|value| value.as_u64())
            .collect();
        let winner_index = if winner == "NorthSouth" { 0 } else { 1 };
        assert!(scores[winner_index] >= 12);
        assert!(scores[1 - winner_index] < 12);
        assert!(row["rounds"].as_u64().expect("rounds") >= 1);
    }
}

#[test]
fn simulation_is_deterministic_for_a_fixed_seed() {
    let first = run_once(0.5);
    let second = run_once(0.5);
    assert_eq!(first, second);
}

#[test]
fn summary_lists_both_teams() {
    let (_, markdown) = run_once(0.0);
    assert!(markdown.starts_with("# Simulation Summary"));
    assert!(markdown.contains("| North/South |"));
    assert!(markdown.contains("| East/West |"));
    assert!(markdown.contains("Raises: 0 requested"));
}
