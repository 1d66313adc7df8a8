//! Calculator configuration loaded from TOML.
//!
//! # TOML Example
//!
//! ```toml
//! angle_mode = "DEG"
//! tape_capacity = 50
//! checkpoint = "session.json"
//! log_level = "debug"
//! ```
//!
//! Every field is optional. Validation accumulates all violations with
//! Stillwater's `Validation` instead of stopping at the first one.

pub mod error;

pub use error::{ConfigError, ConfigViolation};

use crate::checkpoint::CheckpointFormat;
use crate::core::{AngleMode, DEFAULT_TAPE_CAPACITY};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Upper bound on the configured tape capacity.
pub const MAX_TAPE_CAPACITY: usize = 10_000;

/// Logging verbosity.
///
/// Uses lowercase serde values for TOML compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_filter(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Settings for a calculator session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Angle mode the calculator starts in.
    pub angle_mode: AngleMode,

    /// Number of calculations kept on the tape.
    pub tape_capacity: usize,

    /// Where the session is saved and resumed from, if anywhere.
    pub checkpoint: Option<PathBuf>,

    pub log_level: LogLevel,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            angle_mode: AngleMode::Rad,
            tape_capacity: DEFAULT_TAPE_CAPACITY,
            checkpoint: None,
            log_level: LogLevel::Info,
        }
    }
}

impl CalculatorConfig {
    /// Load and validate configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound(path.to_path_buf())
            } else {
                ConfigError::Io(e.to_string())
            }
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every rule, accumulating ALL violations.
    pub fn check(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        checks.push(
            if (1..=MAX_TAPE_CAPACITY).contains(&self.tape_capacity) {
                Validation::success(())
            } else {
                Validation::fail(ConfigViolation::TapeCapacityOutOfRange {
                    value: self.tape_capacity,
                    max: MAX_TAPE_CAPACITY,
                })
            },
        );

        if let Some(path) = &self.checkpoint {
            checks.push(if CheckpointFormat::from_path(path).is_some() {
                Validation::success(())
            } else {
                Validation::fail(ConfigViolation::UnsupportedCheckpointFormat {
                    path: path.clone(),
                })
            });
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// [`check`](Self::check) folded into a `Result`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.check() {
            Validation::Success(_) => Ok(()),
            Validation::Failure(violations) => Err(ConfigError::Invalid {
                violations: violations.iter().cloned().collect(),
            }),
        }
    }
}
