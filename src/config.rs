// Configuration loading and parsing (config/shuffleline.toml).
//
// The config file is optional: a missing file yields the defaults, a present
// but invalid file is a startup error. Only the animation timing is
// configurable; the slot count and char cap are data-model invariants.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Total length of a shuffle run before the order locks.
pub const DEFAULT_SHUFFLE_DURATION_MS: u64 = 2500;

/// Interval between display-order republishes during a run.
pub const DEFAULT_SHUFFLE_STEP_MS: u64 = 140;

// ---------------------------------------------------------------------------
// shuffleline.toml structs
// ---------------------------------------------------------------------------

/// Raw deserialization target for the config file.
#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    timing: TimingSection,
}

#[derive(Debug, Clone, Deserialize)]
struct TimingSection {
    #[serde(default = "default_shuffle_duration_ms")]
    shuffle_duration_ms: u64,
    #[serde(default = "default_shuffle_step_ms")]
    shuffle_step_ms: u64,
}

impl Default for TimingSection {
    fn default() -> Self {
        TimingSection {
            shuffle_duration_ms: DEFAULT_SHUFFLE_DURATION_MS,
            shuffle_step_ms: DEFAULT_SHUFFLE_STEP_MS,
        }
    }
}

fn default_shuffle_duration_ms() -> u64 {
    DEFAULT_SHUFFLE_DURATION_MS
}

fn default_shuffle_step_ms() -> u64 {
    DEFAULT_SHUFFLE_STEP_MS
}

// ---------------------------------------------------------------------------
// Assembled Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Config {
    pub shuffle_duration: Duration,
    pub shuffle_step: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            shuffle_duration: Duration::from_millis(DEFAULT_SHUFFLE_DURATION_MS),
            shuffle_step: Duration::from_millis(DEFAULT_SHUFFLE_STEP_MS),
        }
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load configuration from `config/shuffleline.toml` relative to the current
/// working directory, falling back to defaults when the file is absent.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(Path::new("."))
}

/// Load configuration relative to the given `base_dir`.
pub(crate) fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join("shuffleline.toml");
    if !path.exists() {
        return Ok(Config::default());
    }

    let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
        path: path.clone(),
        source: e,
    })?;
    let file: ConfigFile = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: e,
    })?;

    let config = Config {
        shuffle_duration: Duration::from_millis(file.timing.shuffle_duration_ms),
        shuffle_step: Duration::from_millis(file.timing.shuffle_step_ms),
    };

    validate(&config)?;

    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.shuffle_step.is_zero() {
        return Err(ConfigError::ValidationError {
            field: "shuffle_step_ms".into(),
            message: "must be greater than zero".into(),
        });
    }
    if config.shuffle_duration <= config.shuffle_step {
        return Err(ConfigError::ValidationError {
            field: "shuffle_duration_ms".into(),
            message: "must be greater than shuffle_step_ms".into(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
