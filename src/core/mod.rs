//! Core calculator types and logic.
//!
//! This module contains the pure functional core of the calculator:
//! - The calculator state and its entry rules
//! - Typed keypad inputs
//! - The transition function and result formatting
//! - Immutable calculation tape
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod format;
mod input;
mod snapshot;
mod state;
mod tape;
mod transition;

pub use format::{format_result, SCIENTIFIC_THRESHOLD, ZERO_THRESHOLD};
pub use input::{BinaryOp, Constant, Digit, Input, MemoryAction, Parenthesis, UnaryFunction};
pub use snapshot::DisplaySnapshot;
pub use state::{AngleMode, CalculatorState, Entry, PendingOperation, Phase, ERROR_TEXT};
pub use tape::{Tape, TapeEntry, DEFAULT_TAPE_CAPACITY};
pub use transition::{apply, transition, Outcome};
