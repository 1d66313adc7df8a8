//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// A single rule a configuration broke.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigViolation {
    #[error("tape_capacity must be between 1 and {max} (got {value})")]
    TapeCapacityOutOfRange { value: usize, max: usize },

    #[error("checkpoint path '{}' must end in .json or .bin", .path.display())]
    UnsupportedCheckpointFormat { path: PathBuf },
}

/// Errors that can occur while loading configuration.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// Configuration file not found at the given path
    #[error("Configuration file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Reading the file failed for another reason
    #[error("Failed to read configuration: {0}")]
    Io(String),

    /// TOML parsing failed
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// Every validation rule the configuration broke
    #[error("Configuration validation failed: {}", join(.violations))]
    Invalid { violations: Vec<ConfigViolation> },
}

fn join(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
