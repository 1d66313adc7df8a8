//! Scicalc: a pure functional keypad calculator core
//!
//! Scicalc follows the "pure core, imperative shell" philosophy. Every key
//! press is a pure transition from one [`CalculatorState`] to the next; the
//! arithmetic behind it sits behind the [`ArithmeticEngine`] trait, and the
//! [`Calculator`] shell owns the state, records completed calculations on a
//! tape and emits tracing events.
//!
//! # Core Concepts
//!
//! - **State**: entry line, pending operation, last result, memory, angle mode
//! - **Inputs**: typed keys, with a [`keymap`] for textual tokens
//! - **Evaluation**: strictly left to right, no operator precedence
//! - **Errors**: a failed calculation shows `Error` and never panics
//!
//! # Example
//!
//! ```rust
//! use scicalc::Calculator;
//!
//! let mut calc = Calculator::new();
//! let display = calc.press_keys("5 + 3 * 2 =").unwrap();
//! assert_eq!(display.primary_text, "16");
//!
//! let display = calc.press_keys("c 1 / 0 =").unwrap();
//! assert_eq!(display.primary_text, "Error");
//!
//! let display = calc.press_key("7").unwrap();
//! assert_eq!(display.primary_text, "7");
//! ```

pub mod builder;
pub mod calculator;
pub mod checkpoint;
pub mod config;
pub mod core;
pub mod engine;
pub mod keymap;
pub mod logging;

// Re-export commonly used types
pub use builder::{BuildError, CalculatorBuilder};
pub use calculator::Calculator;
pub use checkpoint::{Checkpoint, CheckpointError};
pub use config::{CalculatorConfig, ConfigError, LogLevel};
pub use core::{AngleMode, CalculatorState, DisplaySnapshot, Input, Outcome};
pub use engine::{ArithmeticEngine, EngineError, StandardEngine};
pub use keymap::KeyError;
