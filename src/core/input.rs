//! Typed inputs accepted by the calculator state machine.

use super::state::AngleMode;
use serde::{Deserialize, Serialize};

/// A single decimal digit, `0..=9`.
///
/// Digits can only be built through the checked constructors, so a malformed
/// partial number can never be typed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Create a digit from its numeric value.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    /// Create a digit from an ASCII character.
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

/// Binary operators, applied left to right without precedence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
    /// `x root n` is the n-th root of x.
    Root,
}

impl BinaryOp {
    /// Symbol shown in the expression trace.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
            Self::Power => "^",
            Self::Root => "root",
        }
    }

    /// Operation name used in errors and logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Modulo => "modulo",
            Self::Power => "power",
            Self::Root => "root",
        }
    }
}

/// Unary functions applied to the current value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryFunction {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Ln,
    Log10,
    Log2,
    Sqrt,
    Cbrt,
    Square,
    Exp,
    Factorial,
    Abs,
    Floor,
    Ceil,
    Round,
    Negate,
    Ans,
}

impl UnaryFunction {
    pub const ALL: [UnaryFunction; 23] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Asin,
        Self::Acos,
        Self::Atan,
        Self::Sinh,
        Self::Cosh,
        Self::Tanh,
        Self::Ln,
        Self::Log10,
        Self::Log2,
        Self::Sqrt,
        Self::Cbrt,
        Self::Square,
        Self::Exp,
        Self::Factorial,
        Self::Abs,
        Self::Floor,
        Self::Ceil,
        Self::Round,
        Self::Negate,
        Self::Ans,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Ln => "ln",
            Self::Log10 => "log",
            Self::Log2 => "log2",
            Self::Sqrt => "sqrt",
            Self::Cbrt => "cbrt",
            Self::Square => "square",
            Self::Exp => "exp",
            Self::Factorial => "factorial",
            Self::Abs => "abs",
            Self::Floor => "floor",
            Self::Ceil => "ceil",
            Self::Round => "round",
            Self::Negate => "negate",
            Self::Ans => "ans",
        }
    }

    /// Forward trigonometric functions take their operand in the angle mode.
    pub fn is_forward_trig(self) -> bool {
        matches!(self, Self::Sin | Self::Cos | Self::Tan)
    }

    /// Inverse trigonometric functions report their result in the angle mode.
    pub fn is_inverse_trig(self) -> bool {
        matches!(self, Self::Asin | Self::Acos | Self::Atan)
    }
}

/// Memory register actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MemoryAction {
    Clear,
    Recall,
    Add,
    Subtract,
    Store,
}

/// Named constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Constant {
    Pi,
    E,
    Phi,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Parenthesis {
    Open,
    Close,
}

/// One keystroke, already translated from the raw event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Input {
    Digit(Digit),
    Decimal,
    Operator(BinaryOp),
    Equals,
    Function(UnaryFunction),
    Memory(MemoryAction),
    Constant(Constant),
    Clear,
    Backspace,
    SetAngleMode(AngleMode),
    ToggleAngleMode,
    /// Accepted for keypad compatibility; has no effect.
    Parenthesis(Parenthesis),
}

impl From<Digit> for Input {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

impl From<BinaryOp> for Input {
    fn from(op: BinaryOp) -> Self {
        Self::Operator(op)
    }
}

impl From<UnaryFunction> for Input {
    fn from(function: UnaryFunction) -> Self {
        Self::Function(function)
    }
}

impl From<MemoryAction> for Input {
    fn from(action: MemoryAction) -> Self {
        Self::Memory(action)
    }
}

impl From<Constant> for Input {
    fn from(constant: Constant) -> Self {
        Self::Constant(constant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_rejects_values_above_nine() {
        assert_eq!(Digit::new(9).map(Digit::value), Some(9));
        assert!(Digit::new(10).is_none());
    }

    #[test]
    fn digit_from_char() {
        assert_eq!(Digit::from_char('7').map(Digit::as_char), Some('7'));
        assert!(Digit::from_char('a').is_none());
        assert!(Digit::from_char('.').is_none());
    }

    #[test]
    fn trig_classification() {
        let forward: Vec<_> = UnaryFunction::ALL
            .iter()
            .filter(|f| f.is_forward_trig())
            .collect();
        let inverse: Vec<_> = UnaryFunction::ALL
            .iter()
            .filter(|f| f.is_inverse_trig())
            .collect();
        assert_eq!(forward.len(), 3);
        assert_eq!(inverse.len(), 3);
        assert!(!UnaryFunction::Sinh.is_forward_trig());
    }

    #[test]
    fn operator_symbols() {
        assert_eq!(BinaryOp::Add.symbol(), "+");
        assert_eq!(BinaryOp::Power.symbol(), "^");
        assert_eq!(BinaryOp::Modulo.name(), "modulo");
    }
}
