use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use rand::{Rng, RngCore, SeedableRng, rngs::StdRng};
use serde::Serialize;
use thiserror::Error;
use tracing::{Level, event};
use truco_bot::HeuristicPolicy;
use truco_core::error::EngineError;
use truco_core::game::engine::{BetOutcome, EngineConfig, MatchEngine};
use truco_core::game::events::TracingObserver;
use truco_core::game::scheduler::InstantClock;
use truco_core::model::seat::Team;

use crate::config::{ResolvedOutputs, SimulationConfig};

/// Plays batches of fully automated matches and records their outcomes.
pub struct SimulationRunner {
    config: SimulationConfig,
    outputs: ResolvedOutputs,
}

/// Summary details returned after a run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub matches_played: usize,
    pub rows_written: usize,
    pub wins: [usize; 2],
    pub jsonl_path: PathBuf,
    pub summary_path: PathBuf,
}

/// One JSONL row per simulated match.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MatchRow {
    pub run_id: String,
    pub match_index: usize,
    pub seed: u64,
    pub winner: Team,
    pub scores: [u32; 2],
    pub rounds: u32,
    pub raises_requested: u32,
    pub raises_accepted: u32,
    pub raises_declined: u32,
}

#[derive(Debug, Default, Clone, Copy)]
struct RaiseTally {
    requested: u32,
    accepted: u32,
    declined: u32,
}

impl SimulationRunner {
    /// Build a runner from a validated configuration.
    pub fn new(config: SimulationConfig, outputs: ResolvedOutputs) -> Self {
        Self { config, outputs }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Play every configured match, streaming rows to the JSONL output.
    pub fn run(&self) -> Result<RunSummary, RunnerError> {
        ensure_parent(self.outputs.jsonl.parent())?;
        ensure_parent(self.outputs.summary_md.parent())?;

        let mut writer = BufWriter::new(File::create(&self.outputs.jsonl)?);
        let mut master = StdRng::seed_from_u64(self.config.seed.unwrap_or(0));
        let mut rows = Vec::with_capacity(self.config.matches);

        for match_index in 0..self.config.matches {
            let seed = master.next_u64();
            let raise_seed = master.next_u64();
            let row = self.play_match(match_index, seed, raise_seed)?;
            serde_json::to_writer(&mut writer, &row)?;
            writer.write_all(b"\n")?;
            rows.push(row);
        }
        writer.flush()?;

        let mut wins = [0usize; 2];
        for row in &rows {
            wins[row.winner.index()] += 1;
        }
        write_markdown(&self.outputs.summary_md, &self.config, &rows)?;

        Ok(RunSummary {
            matches_played: rows.len(),
            rows_written: rows.len(),
            wins,
            jsonl_path: self.outputs.jsonl.clone(),
            summary_path: self.outputs.summary_md.clone(),
        })
    }

    fn play_match(
        &self,
        match_index: usize,
        seed: u64,
        raise_seed: u64,
    ) -> Result<MatchRow, RunnerError> {
        let policy = HeuristicPolicy::new(self.config.bot);
        let mut engine = MatchEngine::with_seed(EngineConfig::headless(), policy, seed);
        engine.subscribe(Box::new(TracingObserver));
        engine.start_new_match();

        let mut raise_rng = StdRng::seed_from_u64(raise_seed);
        let mut tally = RaiseTally::default();
        let mut last_considered = None;
        let mut clock = InstantClock;

        while !engine.is_over() {
            let hand_key = (engine.state().round_number(), engine.round().hands_played());
            let opening_hand = engine.round().current_trick().is_empty();
            if opening_hand && last_considered != Some(hand_key) {
                last_considered = Some(hand_key);
                if raise_rng.gen_bool(self.config.raise_rate) {
                    match engine.request_bet_escalation_by(Team::NorthSouth) {
                        Ok(BetOutcome::Accepted { .. }) => {
                            tally.requested += 1;
                            tally.accepted += 1;
                        }
                        Ok(BetOutcome::Declined { .. }) => {
                            tally.requested += 1;
                            tally.declined += 1;
                        }
                        Err(EngineError::BetAtCap) => {}
                        Err(source) => return Err(RunnerError::Engine { match_index, source }),
                    }
                    continue;
                }
            }

            if engine.run_next(&mut clock).is_none() {
                return Err(RunnerError::Stalled { match_index });
            }
        }

        let winner = engine
            .state()
            .winner()
            .ok_or(RunnerError::Stalled { match_index })?;
        let row = MatchRow {
            run_id: self.config.run_id.clone(),
            match_index,
            seed,
            winner,
            scores: *engine.scores().standings(),
            rounds: engine.state().round_number(),
            raises_requested: tally.requested,
            raises_accepted: tally.accepted,
            raises_declined: tally.declined,
        };

        event!(
            target: "truco_bench::runner",
            Level::INFO,
            match_index,
            seed,
            winner = %row.winner,
            scores = ?row.scores,
            rounds = row.rounds,
            raises = row.raises_requested,
        );
        Ok(row)
    }
}

fn ensure_parent(path: Option<&Path>) -> Result<(), RunnerError> {
    if let Some(dir) = path.filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

fn write_markdown(
    path: &Path,
    config: &SimulationConfig,
    rows: &[MatchRow],
) -> Result<(), RunnerError> {
    let matches = rows.len().max(1) as f64;
    let mut out = String::new();
    out.push_str("# Simulation Summary\n\n");
    let _ = writeln!(
        out,
        "Run `{}`: {} matches, seed {}, raise rate {:.2}\n",
        config.run_id,
        rows.len(),
        config.seed.unwrap_or(0),
        config.raise_rate
    );
    out.push_str("| Team | Wins | Win % | Avg points |\n");
    out.push_str("|------|------|-------|------------|\n");
    for team in Team::BOTH {
        let wins = rows.iter().filter(|row| row.winner == team).count();
        let points: u32 = rows.iter().map(|row| row.scores[team.index()]).sum();
        let _ = writeln!(
            out,
            "| {team} | {wins} | {:.1}% | {:.2} |",
            wins as f64 / matches * 100.0,
            f64::from(points) / matches
        );
    }

    let rounds: u32 = rows.iter().map(|row| row.rounds).sum();
    let requested: u32 = rows.iter().map(|row| row.raises_requested).sum();
    let accepted: u32 = rows.iter().map(|row| row.raises_accepted).sum();
    let declined: u32 = rows.iter().map(|row| row.raises_declined).sum();
    let _ = writeln!(
        out,
        "\nRounds played: {rounds}. Raises: {requested} requested, {accepted} accepted, {declined} declined."
    );

    fs::write(path, out)?;
    Ok(())
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("failed to serialize match row: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },
    #[error("match {match_index} rejected an engine call: {source}")]
    Engine {
        match_index: usize,
        #[source]
        source: EngineError,
    },
    #[error("match {match_index} stopped before a team reached the winning score")]
    Stalled { match_index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LoggingConfig, OutputsConfig};
    use truco_bot::BotParams;

    fn config(dir: &Path, matches: usize, raise_rate: f64) -> SimulationConfig {
        SimulationConfig {
            run_id: "unit".to_string(),
            matches,
            seed: Some(77),
            raise_rate,
            outputs: OutputsConfig {
                jsonl: dir.join("m.jsonl").display().to_string(),
                summary_md: dir.join("s.md").display().to_string(),
            },
            logging: LoggingConfig::default(),
            bot: BotParams::default(),
        }
    }

    fn rows(path: &Path) -> Vec<serde_json::Value> {
        fs::read_to_string(path)
            .expect("jsonl readable")
            .lines()
            .map(|line| serde_json::from_str(line).expect("row is json"))
            .collect()
    }

    #[test]
    fn zero_raise_rate_never_calls_truco() {
        let dir = tempfile::tempdir().expect("temp dir");
        let cfg = config(dir.path(), 3, 0.0);
        let outputs = cfg.resolved_outputs();
        let summary = SimulationRunner::new(cfg, outputs).run().expect("run");

        assert_eq!(summary.matches_played, 3);
        assert_eq!(summary.wins[0] + summary.wins[1], 3);
        for row in rows(&summary.jsonl_path) {
            assert_eq!(row["raises_requested"], 0);
            let scores = row["scores"].as_array().expect("scores array");
            let top = scores.iter().filter_map(|s| s.as_u64()).max().unwrap_or(0);
            assert_eq!(top, 12, "unit stakes end exactly on twelve");
        }
    }

    #[test]
    fn full_raise_rate_calls_every_hand() {
        let dir = tempfile::tempdir().expect("temp dir");
        let cfg = config(dir.path(), 2, 1.0);
        let outputs = cfg.resolved_outputs();
        let summary = SimulationRunner::new(cfg, outputs).run().expect("run");

        for row in rows(&summary.jsonl_path) {
            let requested = row["raises_requested"].as_u64().expect("count");
            let accepted = row["raises_accepted"].as_u64().expect("count");
            let declined = row["raises_declined"].as_u64().expect("count");
            assert!(requested > 0);
            assert_eq!(requested, accepted + declined);
        }
    }
}
