//! Builder API for assembling a calculator session.
//!
//! The builder gathers an engine, a configuration and optionally a
//! checkpoint to resume from, then validates everything in
//! [`CalculatorBuilder::build`].
//!
//! # Example
//!
//! ```
//! use scicalc::builder::CalculatorBuilder;
//! use scicalc::core::AngleMode;
//!
//! let mut calc = CalculatorBuilder::new()
//!     .angle_mode(AngleMode::Deg)
//!     .tape_capacity(10)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(calc.press_keys("30 sin").unwrap().primary_text, "0.5");
//! ```

pub mod error;

pub use error::BuildError;

use crate::calculator::Calculator;
use crate::checkpoint::Checkpoint;
use crate::config::CalculatorConfig;
use crate::core::{AngleMode, CalculatorState, Tape};
use crate::engine::{ArithmeticEngine, StandardEngine};

/// Builder for [`Calculator`] with a fluent API.
pub struct CalculatorBuilder<E: ArithmeticEngine = StandardEngine> {
    engine: E,
    config: CalculatorConfig,
    angle_mode: Option<AngleMode>,
    checkpoint: Option<Checkpoint>,
}

impl CalculatorBuilder<StandardEngine> {
    /// Create a new builder with the standard engine and default settings.
    pub fn new() -> Self {
        Self {
            engine: StandardEngine,
            config: CalculatorConfig::default(),
            angle_mode: None,
            checkpoint: None,
        }
    }
}

impl Default for CalculatorBuilder<StandardEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ArithmeticEngine> CalculatorBuilder<E> {
    /// Swap in a different arithmetic engine.
    pub fn engine<F: ArithmeticEngine>(self, engine: F) -> CalculatorBuilder<F> {
        CalculatorBuilder {
            engine,
            config: self.config,
            angle_mode: self.angle_mode,
            checkpoint: self.checkpoint,
        }
    }

    /// Use loaded configuration. Later setters override its fields.
    pub fn config(mut self, config: CalculatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Start in `mode`, overriding both the configuration and a resumed
    /// checkpoint.
    pub fn angle_mode(mut self, mode: AngleMode) -> Self {
        self.angle_mode = Some(mode);
        self
    }

    pub fn tape_capacity(mut self, capacity: usize) -> Self {
        self.config.tape_capacity = capacity;
        self
    }

    /// Continue a saved session instead of starting fresh.
    pub fn resume(mut self, checkpoint: Checkpoint) -> Self {
        self.checkpoint = Some(checkpoint);
        self
    }

    /// Build the calculator.
    /// Returns an error if the configuration or checkpoint is invalid.
    pub fn build(self) -> Result<Calculator<E>, BuildError> {
        self.config.validate()?;
        let capacity = self.config.tape_capacity;

        let (mut state, tape) = match self.checkpoint {
            Some(checkpoint) => {
                checkpoint.validate()?;
                (checkpoint.state, checkpoint.tape.resized(capacity))
            }
            None => (
                CalculatorState::with_angle_mode(self.config.angle_mode),
                Tape::with_capacity(capacity),
            ),
        };

        if let Some(mode) = self.angle_mode {
            state.angle_mode = mode;
        }

        Ok(Calculator::from_parts(state, self.engine, tape))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkpoint::{CheckpointError, CHECKPOINT_VERSION};
    use crate::config::ConfigError;

    #[test]
    fn defaults_build_a_fresh_calculator() {
        let calc = CalculatorBuilder::new().build().unwrap();
        assert_eq!(calc.snapshot().primary_text, "0");
        assert_eq!(calc.state().angle_mode(), AngleMode::Rad);
        assert_eq!(calc.tape().capacity(), crate::core::DEFAULT_TAPE_CAPACITY);
    }

    #[test]
    fn config_sets_angle_mode_and_tape_capacity() {
        let config = CalculatorConfig {
            angle_mode: AngleMode::Deg,
            tape_capacity: 2,
            ..CalculatorConfig::default()
        };
        let mut calc = CalculatorBuilder::new().config(config).build().unwrap();
        assert_eq!(calc.snapshot().angle_mode, AngleMode::Deg);

        calc.press_keys("1 + 1 = + 1 = + 1 =").unwrap();
        assert_eq!(calc.tape().len(), 2);
        assert_eq!(calc.tape().last().unwrap().value, 4.0);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let result = CalculatorBuilder::new().tape_capacity(0).build();
        assert!(matches!(
            result,
            Err(BuildError::Config(ConfigError::Invalid { .. }))
        ));
    }

    #[test]
    fn resume_restores_state_and_tape() {
        let mut original = CalculatorBuilder::new().build().unwrap();
        original.press_keys("6 * 7 = ms c 2 ^").unwrap();

        let mut resumed = CalculatorBuilder::new()
            .resume(original.checkpoint())
            .build()
            .unwrap();
        assert_eq!(resumed.snapshot().expression_text, "2 ^ ");
        assert!(resumed.snapshot().memory_flag);
        assert_eq!(resumed.tape().len(), 1);

        assert_eq!(resumed.press_keys("3 =").unwrap().primary_text, "8");
    }

    #[test]
    fn resume_shrinks_tape_to_configured_capacity() {
        let mut original = CalculatorBuilder::new().build().unwrap();
        original.press_keys("1 + 1 = + 1 = + 1 =").unwrap();

        let resumed = CalculatorBuilder::new()
            .tape_capacity(1)
            .resume(original.checkpoint())
            .build()
            .unwrap();
        assert_eq!(resumed.tape().len(), 1);
        assert_eq!(resumed.tape().last().unwrap().expression, "3 + 1");
    }

    #[test]
    fn explicit_angle_mode_overrides_checkpoint() {
        let original = CalculatorBuilder::new()
            .angle_mode(AngleMode::Deg)
            .build()
            .unwrap();

        let resumed = CalculatorBuilder::new()
            .resume(original.checkpoint())
            .build()
            .unwrap();
        assert_eq!(resumed.state().angle_mode(), AngleMode::Deg);

        let overridden = CalculatorBuilder::new()
            .resume(original.checkpoint())
            .angle_mode(AngleMode::Rad)
            .build()
            .unwrap();
        assert_eq!(overridden.state().angle_mode(), AngleMode::Rad);
    }

    #[test]
    fn stale_checkpoint_is_rejected() {
        let mut checkpoint = CalculatorBuilder::new().build().unwrap().checkpoint();
        checkpoint.version = CHECKPOINT_VERSION + 1;

        let result = CalculatorBuilder::new().resume(checkpoint).build();
        assert!(matches!(
            result,
            Err(BuildError::Checkpoint(CheckpointError::UnsupportedVersion { .. }))
        ));
    }

    #[test]
    fn engine_can_be_swapped() {
        let calc = CalculatorBuilder::new()
            .engine(&StandardEngine)
            .build()
            .unwrap();
        assert_eq!(calc.snapshot().primary_text, "0");
    }
}
