use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::Level;
use truco_bot::BotParams;

const DEFAULT_MATCHES: usize = 100;
const RUN_ID_ALLOWED: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789._-";

/// Root simulation configuration loaded from YAML.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SimulationConfig {
    pub run_id: String,
    #[serde(default = "default_matches")]
    pub matches: usize,
    #[serde(default)]
    pub seed: Option<u64>,
    /// Chance that North/South calls truco before each hand's first card.
    #[serde(default)]
    pub raise_rate: f64,
    pub outputs: OutputsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub bot: BotParams,
}

impl SimulationConfig {
    /// Load configuration from a YAML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_buf = path.to_path_buf();
        let file = File::open(path).map_err(|source| ConfigError::Read {
            source,
            path: path_buf.clone(),
        })?;
        let reader = BufReader::new(file);
        let mut cfg: SimulationConfig =
            serde_yaml::from_reader(reader).map_err(|source| ConfigError::Parse {
                source,
                path: path_buf.clone(),
            })?;
        cfg.validate().map_err(|source| ConfigError::Invalid {
            path: path_buf,
            source,
        })?;
        Ok(cfg)
    }

    /// Validate the configuration without performing I/O.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        validate_run_id(&self.run_id)?;

        if self.matches == 0 {
            return Err(invalid("matches", "number of matches must be greater than zero"));
        }

        if !(0.0..=1.0).contains(&self.raise_rate) {
            return Err(invalid("raise_rate", "raise rate must lie within [0, 1]"));
        }

        self.outputs.validate(&self.run_id)?;
        validate_bot(&self.bot)?;
        self.logging.normalize();
        Ok(())
    }

    /// Resolve `{run_id}` placeholders in the output templates.
    pub fn resolved_outputs(&self) -> ResolvedOutputs {
        ResolvedOutputs {
            jsonl: resolve_template(&self.run_id, &self.outputs.jsonl),
            summary_md: resolve_template(&self.run_id, &self.outputs.summary_md),
        }
    }
}

fn default_matches() -> usize {
    DEFAULT_MATCHES
}

/// Output artifact configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OutputsConfig {
    pub jsonl: String,
    pub summary_md: String,
}

impl OutputsConfig {
    fn validate(&self, run_id: &str) -> Result<(), ValidationError> {
        for (label, value) in [
            ("outputs.jsonl", &self.jsonl),
            ("outputs.summary_md", &self.summary_md),
        ] {
            if value.trim().is_empty() {
                return Err(invalid(label, "path must not be empty"));
            }

            let resolved = resolve_template(run_id, value);
            if resolved.components().count() == 0 {
                return Err(invalid(label, "resolved path is invalid"));
            }
        }
        Ok(())
    }
}

/// Logging configuration defaults to disabled structured logs.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enable_structured: bool,
    #[serde(default = "default_tracing_level")]
    pub tracing_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_structured: false,
            tracing_level: default_tracing_level(),
        }
    }
}

impl LoggingConfig {
    fn normalize(&mut self) {
        if self.tracing_level.trim().is_empty() {
            self.tracing_level = default_tracing_level();
        }
    }

    pub fn level(&self) -> Option<Level> {
        match self.tracing_level.to_ascii_lowercase().as_str() {
            "trace" => Some(Level::TRACE),
            "debug" => Some(Level::DEBUG),
            "info" => Some(Level::INFO),
            "warn" | "warning" => Some(Level::WARN),
            "error" => Some(Level::ERROR),
            _ => None,
        }
    }
}

fn default_tracing_level() -> String {
    "info".to_string()
}

fn validate_run_id(run_id: &str) -> Result<(), ValidationError> {
    if run_id.trim().is_empty() {
        return Err(invalid("run_id", "run_id must not be empty"));
    }

    if !run_id.chars().all(|c| RUN_ID_ALLOWED.contains(c)) {
        return Err(invalid(
            "run_id",
            "run_id may only contain alphanumeric characters, '.', '_' or '-'",
        ));
    }

    Ok(())
}

fn validate_bot(bot: &BotParams) -> Result<(), ValidationError> {
    let bounds = [bot.min_acceptance, bot.max_acceptance];
    if bounds.iter().any(|value| !(0.0..=1.0).contains(value)) {
        return Err(invalid("bot", "acceptance bounds must lie within [0, 1]"));
    }
    if bot.min_acceptance > bot.max_acceptance {
        return Err(invalid(
            "bot.min_acceptance",
            "minimum acceptance exceeds the maximum",
        ));
    }
    Ok(())
}

fn invalid(field: &str, message: &str) -> ValidationError {
    ValidationError::InvalidField {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn resolve_template(run_id: &str, template: &str) -> PathBuf {
    let replaced = template.replace("{run_id}", run_id);
    PathBuf::from(replaced)
}

/// Fully resolved output paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOutputs {
    pub jsonl: PathBuf,
    pub summary_md: PathBuf,
}

/// Errors surfaced when loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        #[source]
        source: serde_yaml::Error,
        path: PathBuf,
    },
    #[error("invalid configuration in {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        source: ValidationError,
    },
}

impl ConfigError {
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Invalid { path, .. } => path.as_path(),
        }
    }
}

/// Validation failures captured with contextual metadata.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASIC_YAML: &str = r#"
run_id: "nightly"
matches: 40
seed: 123
raise_rate: 0.25
outputs:
  jsonl: "bench/out/{run_id}/matches.jsonl"
  summary_md: "bench/out/{run_id}/summary.md"
logging:
  enable_structured: true
  tracing_level: "debug"
bot:
  kill_margin: 3
"#;

    fn field_of(err: ValidationError) -> String {
        let ValidationError::InvalidField { field, .. } = err;
        field
    }

    #[test]
    fn loads_and_validates_basic_config() {
        let mut cfg: SimulationConfig = serde_yaml::from_str(BASIC_YAML).expect("parse yaml");
        cfg.validate().expect("validate");

        assert_eq!(cfg.matches, 40);
        assert_eq!(cfg.seed, Some(123));
        assert!(cfg.logging.enable_structured);
        assert_eq!(cfg.logging.level(), Some(Level::DEBUG));
        assert_eq!(cfg.bot.kill_margin, 3);
        assert_eq!(cfg.bot.trump_weight, BotParams::default().trump_weight);

        let outputs = cfg.resolved_outputs();
        assert_eq!(outputs.jsonl, PathBuf::from("bench/out/nightly/matches.jsonl"));
        assert_eq!(outputs.summary_md, PathBuf::from("bench/out/nightly/summary.md"));
    }

    #[test]
    fn optional_blocks_take_defaults() {
        let yaml = r#"
run_id: "bare"
outputs:
  jsonl: "out.jsonl"
  summary_md: "out.md"
"#;
        let mut cfg: SimulationConfig = serde_yaml::from_str(yaml).expect("parse");
        cfg.validate().expect("valid");
        assert_eq!(cfg.matches, DEFAULT_MATCHES);
        assert_eq!(cfg.raise_rate, 0.0);
        assert_eq!(cfg.logging, LoggingConfig::default());
        assert_eq!(cfg.bot, BotParams::default());
    }

    #[test]
    fn rejects_zero_matches() {
        let yaml = BASIC_YAML.replace("matches: 40", "matches: 0");
        let mut cfg: SimulationConfig = serde_yaml::from_str(&yaml).expect("parse");
        assert_eq!(field_of(cfg.validate().expect_err("zero matches")), "matches");
    }

    #[test]
    fn rejects_raise_rate_outside_unit_interval() {
        let yaml = BASIC_YAML.replace("raise_rate: 0.25", "raise_rate: 1.5");
        let mut cfg: SimulationConfig = serde_yaml::from_str(&yaml).expect("parse");
        assert_eq!(field_of(cfg.validate().expect_err("rate too high")), "raise_rate");
    }

    #[test]
    fn rejects_invalid_run_id() {
        let yaml = BASIC_YAML.replace("\"nightly\"", "\"night ly\"");
        let mut cfg: SimulationConfig = serde_yaml::from_str(&yaml).expect("parse");
        assert_eq!(field_of(cfg.validate().expect_err("invalid run id")), "run_id");
    }

    #[test]
    fn rejects_empty_output_path() {
        let yaml = BASIC_YAML.replace("\"bench/out/{run_id}/summary.md\"", "\"  \"");
        let mut cfg: SimulationConfig = serde_yaml::from_str(&yaml).expect("parse");
        assert_eq!(
            field_of(cfg.validate().expect_err("empty path")),
            "outputs.summary_md"
        );
    }

    #[test]
    fn rejects_inverted_acceptance_bounds() {
        let yaml = BASIC_YAML.replace(
            "  kill_margin: 3\n",
            "  min_acceptance: 0.9\n  max_acceptance: 0.5\n",
        );
        let mut cfg: SimulationConfig = serde_yaml::from_str(&yaml).expect("parse");
        assert_eq!(
            field_of(cfg.validate().expect_err("inverted bounds")),
            "bot.min_acceptance"
        );
    }

    #[test]
    fn blank_tracing_level_falls_back_to_info() {
        let yaml = BASIC_YAML.replace("tracing_level: \"debug\"", "tracing_level: \"\"");
        let mut cfg: SimulationConfig = serde_yaml::from_str(&yaml).expect("parse");
        cfg.validate().expect("valid");
        assert_eq!(cfg.logging.level(), Some(Level::INFO));
    }
}
