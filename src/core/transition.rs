//! Pure state transitions.
//!
//! [`transition`] takes the current state, one input and an engine, and
//! returns the next state together with an [`Outcome`] describing what
//! happened. It never mutates its argument and never fails: engine errors
//! become the `Error` display state.

use super::format::format_result;
use super::input::{BinaryOp, Constant, Input, MemoryAction, UnaryFunction};
use super::snapshot::DisplaySnapshot;
use super::state::{AngleMode, CalculatorState, Entry, PendingOperation};
use crate::engine::{ensure_finite, ArithmeticEngine, EngineError, EngineResult};

/// What a single transition did.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// The input had nothing to act on; the state is unchanged.
    Ignored,

    /// The state changed without producing a result.
    Updated,

    /// A calculation completed and its result is displayed.
    Computed { expression: String, value: f64 },

    /// A calculation failed and the display shows `Error`.
    Failed {
        expression: String,
        error: EngineError,
    },
}

impl Outcome {
    pub fn is_computed(&self) -> bool {
        matches!(self, Self::Computed { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Apply one input to a state.
///
/// # Example
///
/// ```rust
/// use scicalc::core::{transition, BinaryOp, CalculatorState, Digit, Input, Outcome};
/// use scicalc::engine::StandardEngine;
///
/// let engine = StandardEngine;
/// let mut state = CalculatorState::new();
/// for input in [
///     Input::Digit(Digit::new(6).unwrap()),
///     Input::Operator(BinaryOp::Multiply),
///     Input::Digit(Digit::new(7).unwrap()),
/// ] {
///     state = transition(&state, input, &engine).0;
/// }
///
/// let (state, outcome) = transition(&state, Input::Equals, &engine);
/// assert_eq!(outcome, Outcome::Computed { expression: "6 * 7".into(), value: 42.0 });
/// assert_eq!(state.snapshot().primary_text, "42");
/// ```
pub fn transition<E>(state: &CalculatorState, input: Input, engine: &E) -> (CalculatorState, Outcome)
where
    E: ArithmeticEngine + ?Sized,
{
    let mut next = state.clone();
    let outcome = match input {
        Input::Digit(digit) => {
            next.entry.push_digit(digit);
            Outcome::Updated
        }
        Input::Decimal => changed(next.entry.push_decimal()),
        Input::Operator(op) => select_operator(&mut next, op, engine),
        Input::Equals => evaluate(&mut next, engine),
        Input::Function(function) => apply_function(&mut next, function, engine),
        Input::Memory(action) => apply_memory(&mut next, action, engine),
        Input::Constant(constant) => insert_constant(&mut next, constant, engine),
        Input::Clear => {
            next.entry = Entry::Empty;
            next.discard_pending();
            Outcome::Updated
        }
        Input::Backspace => changed(next.entry.backspace()),
        Input::SetAngleMode(mode) => {
            let differs = next.angle_mode != mode;
            next.angle_mode = mode;
            changed(differs)
        }
        Input::ToggleAngleMode => {
            next.angle_mode = next.angle_mode.toggled();
            Outcome::Updated
        }
        Input::Parenthesis(_) => Outcome::Ignored,
    };
    (next, outcome)
}

/// Apply one input and project the resulting display.
pub fn apply<E>(state: &CalculatorState, input: Input, engine: &E) -> (CalculatorState, DisplaySnapshot)
where
    E: ArithmeticEngine + ?Sized,
{
    let (next, _) = transition(state, input, engine);
    let snapshot = next.snapshot();
    (next, snapshot)
}

fn changed(did_change: bool) -> Outcome {
    if did_change {
        Outcome::Updated
    } else {
        Outcome::Ignored
    }
}

fn select_operator<E>(state: &mut CalculatorState, operator: BinaryOp, engine: &E) -> Outcome
where
    E: ArithmeticEngine + ?Sized,
{
    match (state.pending, state.typed_operand()) {
        (None, None) => Outcome::Ignored,
        (None, Some(Ok(operand))) => {
            state.entry = Entry::Empty;
            state.set_pending(PendingOperation { operand, operator });
            Outcome::Updated
        }
        // Digits appended to a scientific result can overflow the parse.
        (None, Some(Err(error))) => {
            let expression = state.entry.text().to_string();
            finish(state, expression, Err(error))
        }
        // A second operand was typed: collapse the pending operation first.
        (Some(_), Some(_)) => {
            let outcome = evaluate(state, engine);
            if outcome.is_computed() {
                state.entry = Entry::Empty;
                state.set_pending(PendingOperation {
                    operand: state.last_result,
                    operator,
                });
            }
            outcome
        }
        // Operator pressed twice in a row: the newer one wins.
        (Some(pending), None) => {
            state.set_pending(PendingOperation {
                operator,
                ..pending
            });
            Outcome::Updated
        }
    }
}

fn evaluate<E>(state: &mut CalculatorState, engine: &E) -> Outcome
where
    E: ArithmeticEngine + ?Sized,
{
    let Some(pending) = state.pending else {
        return Outcome::Ignored;
    };
    let operand = match state.typed_operand() {
        Some(Ok(operand)) => operand,
        Some(Err(error)) => {
            let expression = format!("{}{}", pending.trace(), state.entry.text());
            return finish(state, expression, Err(error));
        }
        None => pending.operand,
    };
    let expression = format!("{}{}", pending.trace(), format_result(operand));
    let result = binary(engine, pending.operator, pending.operand, operand)
        .and_then(|value| ensure_finite(pending.operator.name(), value));
    finish(state, expression, result)
}

fn binary<E>(engine: &E, operator: BinaryOp, a: f64, b: f64) -> EngineResult
where
    E: ArithmeticEngine + ?Sized,
{
    match operator {
        BinaryOp::Add => engine.add(a, b),
        BinaryOp::Subtract => engine.subtract(a, b),
        BinaryOp::Multiply => engine.multiply(a, b),
        BinaryOp::Divide => engine.divide(a, b),
        BinaryOp::Modulo => engine.modulo(a, b),
        BinaryOp::Power => engine.power(a, b),
        BinaryOp::Root => engine.nth_root(a, b),
    }
}

fn apply_function<E>(state: &mut CalculatorState, function: UnaryFunction, engine: &E) -> Outcome
where
    E: ArithmeticEngine + ?Sized,
{
    // `ans` works on the last result whatever is typed.
    let operand = match function {
        UnaryFunction::Ans => Ok(state.last_result),
        _ => state.effective_value(),
    };
    let operand = match operand {
        Ok(operand) => operand,
        Err(error) => {
            let expression = format!("{}({})", function.name(), state.entry.text());
            return finish(state, expression, Err(error));
        }
    };
    let expression = match function {
        UnaryFunction::Ans => function.name().to_string(),
        _ => format!("{}({})", function.name(), format_result(operand)),
    };
    let result = unary(engine, function, operand, state.angle_mode)
        .and_then(|value| ensure_finite(function.name(), value));
    finish(state, expression, result)
}

/// Forward trig converts its operand into radians first; inverse trig
/// converts the engine's answer back out of radians.
fn unary<E>(engine: &E, function: UnaryFunction, x: f64, mode: AngleMode) -> EngineResult
where
    E: ArithmeticEngine + ?Sized,
{
    let x = if function.is_forward_trig() {
        to_radians(engine, mode, x)?
    } else {
        x
    };

    let value = match function {
        UnaryFunction::Sin => engine.sine(x),
        UnaryFunction::Cos => engine.cosine(x),
        UnaryFunction::Tan => engine.tangent(x),
        UnaryFunction::Asin => engine.arcsine(x),
        UnaryFunction::Acos => engine.arccosine(x),
        UnaryFunction::Atan => engine.arctangent(x),
        UnaryFunction::Sinh => engine.sinh(x),
        UnaryFunction::Cosh => engine.cosh(x),
        UnaryFunction::Tanh => engine.tanh(x),
        UnaryFunction::Ln => engine.natural_log(x),
        UnaryFunction::Log10 => engine.log10(x),
        UnaryFunction::Log2 => engine.log2(x),
        UnaryFunction::Sqrt => engine.square_root(x),
        UnaryFunction::Cbrt => engine.cube_root(x),
        UnaryFunction::Square => engine.power(x, 2.0),
        UnaryFunction::Exp => engine.exponential(x),
        UnaryFunction::Factorial => engine.factorial(x.floor()),
        UnaryFunction::Abs => engine.absolute(x),
        UnaryFunction::Floor => engine.floor(x),
        UnaryFunction::Ceil => engine.ceiling(x),
        UnaryFunction::Round => engine.round(x),
        UnaryFunction::Negate => Ok(-x),
        UnaryFunction::Ans => Ok(x),
    }?;

    if function.is_inverse_trig() {
        from_radians(engine, mode, value)
    } else {
        Ok(value)
    }
}

fn to_radians<E>(engine: &E, mode: AngleMode, x: f64) -> EngineResult
where
    E: ArithmeticEngine + ?Sized,
{
    match mode {
        AngleMode::Rad => Ok(x),
        AngleMode::Deg => engine.degrees_to_radians(x),
    }
}

fn from_radians<E>(engine: &E, mode: AngleMode, radians: f64) -> EngineResult
where
    E: ArithmeticEngine + ?Sized,
{
    match mode {
        AngleMode::Rad => Ok(radians),
        AngleMode::Deg => engine.radians_to_degrees(radians),
    }
}

fn apply_memory<E>(state: &mut CalculatorState, action: MemoryAction, engine: &E) -> Outcome
where
    E: ArithmeticEngine + ?Sized,
{
    let value = state.effective_value();
    let (label, result) = match action {
        MemoryAction::Clear => ("mc", Ok(engine.memory_clear())),
        MemoryAction::Recall => ("mr", Ok(engine.memory_recall(state.memory))),
        MemoryAction::Add => (
            "m+",
            value.clone().and_then(|v| engine.memory_add(state.memory, v)),
        ),
        MemoryAction::Subtract => (
            "m-",
            value.clone().and_then(|v| engine.memory_subtract(state.memory, v)),
        ),
        MemoryAction::Store => ("ms", value.clone()),
    };

    match result.and_then(|v| ensure_finite("memory", v)) {
        Ok(recalled) if action == MemoryAction::Recall => {
            state.entry = Entry::Text(format_result(recalled));
            Outcome::Updated
        }
        Ok(register) => {
            state.memory = register;
            Outcome::Updated
        }
        Err(error) => {
            let operand = match value {
                Ok(value) => format_result(value),
                Err(_) => state.entry.text().to_string(),
            };
            state.set_error();
            Outcome::Failed {
                expression: format!("{label}({operand})"),
                error,
            }
        }
    }
}

fn insert_constant<E>(state: &mut CalculatorState, constant: Constant, engine: &E) -> Outcome
where
    E: ArithmeticEngine + ?Sized,
{
    let (name, value) = match constant {
        Constant::Pi => ("pi", engine.pi()),
        Constant::E => ("e", engine.e()),
        Constant::Phi => ("phi", engine.golden_ratio()),
    };
    match ensure_finite(name, value) {
        Ok(value) => {
            state.entry = Entry::Text(format_result(value));
            Outcome::Updated
        }
        Err(error) => {
            state.set_error();
            Outcome::Failed {
                expression: name.to_string(),
                error,
            }
        }
    }
}

fn finish(state: &mut CalculatorState, expression: String, result: EngineResult) -> Outcome {
    match result {
        Ok(value) => {
            state.set_result(value);
            Outcome::Computed { expression, value }
        }
        Err(error) => {
            state.set_error();
            Outcome::Failed { expression, error }
        }
    }
}
