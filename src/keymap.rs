//! Translation of textual key tokens into typed inputs.
//!
//! Presentation layers (a keypad UI, a terminal, a script) describe keys as
//! short tokens: `"7"`, `"+"`, `"sin"`, `"m+"`, `"Enter"`. This module maps
//! them onto [`Input`] values before they reach the state machine, so an
//! unknown key is rejected here and never becomes a transition.

use crate::core::{
    AngleMode, BinaryOp, Constant, Digit, Input, MemoryAction, Parenthesis, UnaryFunction,
};
use thiserror::Error;

/// Errors raised while translating key tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("Empty key token")]
    Empty,

    #[error("Unknown key '{0}'")]
    Unknown(String),
}

/// Translate a single key token.
///
/// Tokens are matched case-insensitively. Single digits and `.` map to entry
/// keys; longer numbers are handled by [`parse_keys`].
///
/// # Example
///
/// ```rust
/// use scicalc::core::{Input, UnaryFunction};
/// use scicalc::keymap::parse_key;
///
/// assert_eq!(parse_key("sqrt"), Ok(Input::Function(UnaryFunction::Sqrt)));
/// assert_eq!(parse_key("Enter"), Ok(Input::Equals));
/// assert!(parse_key("frobnicate").is_err());
/// ```
pub fn parse_key(token: &str) -> Result<Input, KeyError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(KeyError::Empty);
    }

    let mut chars = token.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Some(digit) = Digit::from_char(c) {
            return Ok(Input::Digit(digit));
        }
    }

    let lower = token.to_ascii_lowercase();
    let input = match lower.as_str() {
        "." | "," => Input::Decimal,

        "+" => Input::Operator(BinaryOp::Add),
        "-" => Input::Operator(BinaryOp::Subtract),
        "*" | "x" | "×" => Input::Operator(BinaryOp::Multiply),
        "/" | "÷" => Input::Operator(BinaryOp::Divide),
        "%" | "mod" => Input::Operator(BinaryOp::Modulo),
        "^" | "pow" => Input::Operator(BinaryOp::Power),
        "root" | "yroot" => Input::Operator(BinaryOp::Root),

        "=" | "equals" | "enter" => Input::Equals,
        "c" | "clear" | "esc" | "escape" => Input::Clear,
        "backspace" | "bksp" | "del" => Input::Backspace,

        "deg" => Input::SetAngleMode(AngleMode::Deg),
        "rad" => Input::SetAngleMode(AngleMode::Rad),
        "drg" | "mode" => Input::ToggleAngleMode,

        "mc" => Input::Memory(MemoryAction::Clear),
        "mr" => Input::Memory(MemoryAction::Recall),
        "m+" => Input::Memory(MemoryAction::Add),
        "m-" => Input::Memory(MemoryAction::Subtract),
        "ms" => Input::Memory(MemoryAction::Store),

        "pi" | "π" => Input::Constant(Constant::Pi),
        "e" => Input::Constant(Constant::E),
        "phi" | "φ" => Input::Constant(Constant::Phi),

        "(" => Input::Parenthesis(Parenthesis::Open),
        ")" => Input::Parenthesis(Parenthesis::Close),

        "!" | "n!" | "fact" => Input::Function(UnaryFunction::Factorial),
        "+/-" | "±" | "neg" => Input::Function(UnaryFunction::Negate),
        "x²" | "sq" => Input::Function(UnaryFunction::Square),
        "log10" => Input::Function(UnaryFunction::Log10),

        name => match UnaryFunction::ALL.iter().find(|f| f.name() == name) {
            Some(function) => Input::Function(*function),
            None => return Err(KeyError::Unknown(token.to_string())),
        },
    };
    Ok(input)
}

/// Translate a whitespace-separated key sequence.
///
/// Numeric tokens such as `12.5` expand into one input per character, so
/// `"12.5 + 3 ="` is five digit/decimal presses followed by an operator, a
/// digit and equals.
///
/// # Example
///
/// ```rust
/// use scicalc::keymap::parse_keys;
///
/// let inputs = parse_keys("12.5 * 2 =").unwrap();
/// assert_eq!(inputs.len(), 7);
/// ```
pub fn parse_keys(sequence: &str) -> Result<Vec<Input>, KeyError> {
    let mut inputs = Vec::new();
    for token in sequence.split_whitespace() {
        if is_number(token) {
            inputs.extend(token.chars().map(|c| match Digit::from_char(c) {
                Some(digit) => Input::Digit(digit),
                None => Input::Decimal,
            }));
        } else {
            inputs.push(parse_key(token)?);
        }
    }
    Ok(inputs)
}

fn is_number(token: &str) -> bool {
    token.len() > 1
        && token.chars().any(|c| c.is_ascii_digit())
        && token.chars().all(|c| c.is_ascii_digit() || c == '.')
}
