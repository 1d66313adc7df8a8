//! Calculator state and its entry rules.
//!
//! The state is a plain value. Transitions in [`super::transition`] borrow a
//! state and return a new one; nothing here reaches for globals.

use super::format::format_result;
use super::input::{BinaryOp, Digit};
use super::snapshot::DisplaySnapshot;
use crate::engine::{ensure_finite, EngineResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Text shown while the calculator is in the error state.
pub const ERROR_TEXT: &str = "Error";

/// Unit used by trigonometric functions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AngleMode {
    #[default]
    #[serde(rename = "RAD", alias = "rad", alias = "Rad")]
    Rad,
    #[serde(rename = "DEG", alias = "deg", alias = "Deg")]
    Deg,
}

impl AngleMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Rad => "RAD",
            Self::Deg => "DEG",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Rad => Self::Deg,
            Self::Deg => Self::Rad,
        }
    }
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The number being typed.
///
/// `Empty` means nothing was typed since the last transition. `Error` is the
/// display state left behind by a failed calculation; the next digit replaces
/// it the same way it replaces a lone `"0"`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Entry {
    #[default]
    Empty,
    Text(String),
    Error,
}

impl Entry {
    /// Raw entry text; empty when nothing is typed.
    pub fn text(&self) -> &str {
        match self {
            Self::Empty => "",
            Self::Text(text) => text,
            Self::Error => ERROR_TEXT,
        }
    }

    pub fn is_typed(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Numeric value of typed text.
    ///
    /// Partial text without digits (`"."`, `"-"`) reads as zero, and a
    /// dangling exponent (`"1.5e+"`) is ignored.
    pub fn typed_value(&self) -> Option<f64> {
        match self {
            Self::Text(text) => Some(parse_number(text).unwrap_or(0.0)),
            Self::Empty | Self::Error => None,
        }
    }

    /// Whether typed text is something the keypad could have produced:
    /// non-empty, at most one decimal point, and a number or a prefix of one.
    pub fn is_well_formed(&self) -> bool {
        match self {
            Self::Text(text) => {
                !text.is_empty() && text.matches('.').count() <= 1 && parse_number(text).is_some()
            }
            Self::Empty | Self::Error => true,
        }
    }

    pub(crate) fn push_digit(&mut self, digit: Digit) {
        match self {
            Self::Text(text) if text != "0" => text.push(digit.as_char()),
            _ => *self = Self::Text(digit.as_char().to_string()),
        }
    }

    /// Append a decimal point. Returns `false` when the text already has one.
    pub(crate) fn push_decimal(&mut self) -> bool {
        match self {
            Self::Text(text) if text.contains('.') => false,
            Self::Text(text) => {
                text.push('.');
                true
            }
            Self::Empty => {
                *self = Self::Text(".".to_string());
                true
            }
            Self::Error => {
                *self = Self::Text("0.".to_string());
                true
            }
        }
    }

    /// Remove the last typed character. Returns `false` when there was
    /// nothing to remove.
    pub(crate) fn backspace(&mut self) -> bool {
        match self {
            Self::Empty => false,
            Self::Error => {
                *self = Self::Empty;
                true
            }
            Self::Text(text) => {
                text.pop();
                if text.is_empty() {
                    *self = Self::Empty;
                }
                true
            }
        }
    }
}

fn parse_number(text: &str) -> Option<f64> {
    if !text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e'))
    {
        return None;
    }
    if let Ok(value) = text.parse() {
        return Some(value);
    }
    let trimmed = text.trim_end_matches(['e', '+', '-', '.']);
    if trimmed.is_empty() {
        (!text.contains(['e', '+'])).then_some(0.0)
    } else {
        trimmed.parse().ok()
    }
}

/// A binary operation waiting for its second operand.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PendingOperation {
    pub operand: f64,
    pub operator: BinaryOp,
}

impl PendingOperation {
    /// Expression trace for the pending operation, e.g. `"5 + "`.
    pub fn trace(&self) -> String {
        format!("{} {} ", format_result(self.operand), self.operator.symbol())
    }
}

/// Coarse position of the state machine, for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Nothing typed and nothing pending.
    Ready,
    /// A number is on the entry line.
    Entering,
    /// An operator is pending and its second operand has not been typed.
    AwaitingOperand,
    /// The last calculation failed.
    Error,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ready => "Ready",
            Self::Entering => "Entering",
            Self::AwaitingOperand => "AwaitingOperand",
            Self::Error => "Error",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

/// Everything the calculator remembers between keystrokes.
///
/// Invariants:
/// - `last_result` and `memory` are always finite.
/// - `expression` is non-empty only while `pending` is set.
/// - typed entry text contains at most one decimal point.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    pub(crate) entry: Entry,
    pub(crate) expression: String,
    pub(crate) last_result: f64,
    pub(crate) angle_mode: AngleMode,
    pub(crate) memory: f64,
    pub(crate) pending: Option<PendingOperation>,
}

impl CalculatorState {
    /// Fresh state in radian mode.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_angle_mode(angle_mode: AngleMode) -> Self {
        Self {
            angle_mode,
            ..Self::default()
        }
    }

    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn last_result(&self) -> f64 {
        self.last_result
    }

    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    pub fn memory(&self) -> f64 {
        self.memory
    }

    pub fn pending(&self) -> Option<&PendingOperation> {
        self.pending.as_ref()
    }

    /// First operand of the pending operation.
    pub fn operand(&self) -> Option<f64> {
        self.pending.map(|p| p.operand)
    }

    pub fn pending_operator(&self) -> Option<BinaryOp> {
        self.pending.map(|p| p.operator)
    }

    /// The typed number, rejected when it is too large to be finite.
    pub fn typed_operand(&self) -> Option<EngineResult> {
        self.entry
            .typed_value()
            .map(|value| ensure_finite("entry", value))
    }

    /// Value a unary function or memory action operates on: the typed number
    /// if there is one, otherwise the last result.
    pub fn effective_value(&self) -> EngineResult {
        self.typed_operand().unwrap_or(Ok(self.last_result))
    }

    pub fn phase(&self) -> Phase {
        match (&self.entry, &self.pending) {
            (Entry::Error, _) => Phase::Error,
            (Entry::Text(_), _) => Phase::Entering,
            (Entry::Empty, Some(_)) => Phase::AwaitingOperand,
            (Entry::Empty, None) => Phase::Ready,
        }
    }

    /// Whether the registers hold finite values, as every state produced by
    /// a transition does. Used to vet states restored from outside.
    pub fn registers_are_finite(&self) -> bool {
        self.last_result.is_finite()
            && self.memory.is_finite()
            && self.pending.is_none_or(|p| p.operand.is_finite())
    }

    /// Whether the expression trace agrees with the pending operation.
    pub fn expression_matches_pending(&self) -> bool {
        match &self.pending {
            Some(pending) => self.expression == pending.trace(),
            None => self.expression.is_empty(),
        }
    }

    /// Read-only projection for rendering.
    pub fn snapshot(&self) -> DisplaySnapshot {
        let primary_text = match &self.entry {
            Entry::Empty => "0".to_string(),
            entry => entry.text().to_string(),
        };
        DisplaySnapshot {
            primary_text,
            expression_text: self.expression.clone(),
            memory_flag: self.memory != 0.0,
            angle_mode: self.angle_mode,
        }
    }

    pub(crate) fn set_result(&mut self, value: f64) {
        self.last_result = value;
        self.entry = Entry::Text(format_result(value));
        self.discard_pending();
    }

    pub(crate) fn set_error(&mut self) {
        self.entry = Entry::Error;
        self.discard_pending();
    }

    pub(crate) fn discard_pending(&mut self) {
        self.expression.clear();
        self.pending = None;
    }

    pub(crate) fn set_pending(&mut self, pending: PendingOperation) {
        self.expression = pending.trace();
        self.pending = Some(pending);
    }
}
