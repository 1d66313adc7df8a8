//! Build errors for the calculator builder.

use crate::checkpoint::CheckpointError;
use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur when building a calculator.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Cannot resume from checkpoint: {0}")]
    Checkpoint(#[from] CheckpointError),
}
