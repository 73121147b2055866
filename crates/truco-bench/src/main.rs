use std::path::PathBuf;

use clap::Parser;

use truco_bench::config::{ResolvedOutputs, SimulationConfig};
use truco_bench::logging::init_logging;
use truco_bench::runner::SimulationRunner;

/// Batch simulator for heuristic Truco matches.
#[derive(Debug, Parser)]
#[command(
    name = "truco-bench",
    author,
    version,
    about = "Deterministic Truco match simulator"
)]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "bench/sim.yaml")]
    config: PathBuf,

    /// Override the run identifier (substitutes {run_id} templates).
    #[arg(long, value_name = "RUN_ID")]
    run_id: Option<String>,

    /// Override the number of matches to play.
    #[arg(long, value_name = "MATCHES")]
    matches: Option<usize>,

    /// Override the master RNG seed.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Override the chance North/South calls truco before each hand.
    #[arg(long, value_name = "RATE")]
    raise_rate: Option<f64>,

    /// Exit after validating the configuration (no matches are played).
    #[arg(long)]
    validate_only: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = SimulationConfig::from_path(&cli.config)?;

    if let Some(run_id) = cli.run_id {
        config.run_id = run_id;
    }

    if let Some(matches) = cli.matches {
        config.matches = matches;
    }

    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }

    if let Some(raise_rate) = cli.raise_rate {
        config.raise_rate = raise_rate;
    }

    config.validate()?;

    let outputs: ResolvedOutputs = config.resolved_outputs();
    let run_id = config.run_id.clone();
    let matches = config.matches;

    println!(
        "Loaded configuration '{run_id}' ({matches} match{}, raise rate {:.2})",
        if matches == 1 { "" } else { "es" },
        config.raise_rate
    );

    if cli.validate_only {
        println!("Validation-only mode: simulation skipped.");
        return Ok(());
    }

    let logging_guard = init_logging(&config.logging, &outputs)?;
    let runner = SimulationRunner::new(config, outputs);
    let summary = runner.run()?;

    println!(
        "Simulation complete for '{run_id}': {} matches → {} rows at {}",
        summary.matches_played,
        summary.rows_written,
        summary.jsonl_path.display()
    );
    println!(
        "Wins: North/South {}, East/West {}",
        summary.wins[0], summary.wins[1]
    );
    println!("Summary table: {}", summary.summary_path.display());
    if let Some(guard) = logging_guard.as_ref() {
        println!("Trace log: {}", guard.trace_path.display());
    }

    Ok(())
}
