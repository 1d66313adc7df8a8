//! The imperative shell around the pure transition function.
//!
//! [`Calculator`] owns the current state, an arithmetic engine and the
//! calculation tape. Each key press runs one pure transition, swaps in the
//! new state, records completed calculations and emits tracing events.

use crate::checkpoint::Checkpoint;
use crate::core::{transition, CalculatorState, DisplaySnapshot, Input, Outcome, Tape, TapeEntry};
use crate::engine::{ArithmeticEngine, StandardEngine};
use crate::keymap::{parse_key, parse_keys, KeyError};
use chrono::Utc;
use tracing::{debug, info, trace, warn};

/// A running calculator session.
#[derive(Clone, Debug)]
pub struct Calculator<E: ArithmeticEngine = StandardEngine> {
    state: CalculatorState,
    engine: E,
    tape: Tape,
}

impl Calculator<StandardEngine> {
    /// Fresh calculator with the standard engine.
    pub fn new() -> Self {
        Self::with_engine(StandardEngine)
    }
}

impl Default for Calculator<StandardEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ArithmeticEngine> Calculator<E> {
    /// Fresh calculator backed by `engine`.
    pub fn with_engine(engine: E) -> Self {
        Self::from_parts(CalculatorState::new(), engine, Tape::new())
    }

    pub(crate) fn from_parts(state: CalculatorState, engine: E, tape: Tape) -> Self {
        Self {
            state,
            engine,
            tape,
        }
    }

    /// Apply one input and return the new display.
    pub fn press(&mut self, input: Input) -> DisplaySnapshot {
        let (next, outcome) = transition(&self.state, input, &self.engine);
        debug!(?input, from = self.state.phase().name(), to = next.phase().name(), "key press");

        match &outcome {
            Outcome::Computed { expression, value } => {
                info!(%expression, value, "computed");
                self.tape = self.tape.record(TapeEntry {
                    expression: expression.clone(),
                    value: *value,
                    timestamp: Utc::now(),
                });
            }
            Outcome::Failed { expression, error } => {
                warn!(%expression, %error, domain = error.is_domain(), "calculation failed");
            }
            Outcome::Ignored => trace!(?input, "input ignored"),
            Outcome::Updated => {}
        }

        self.state = next;
        self.state.snapshot()
    }

    /// Translate a key token and apply it.
    pub fn press_key(&mut self, token: &str) -> Result<DisplaySnapshot, KeyError> {
        let input = parse_key(token)?;
        Ok(self.press(input))
    }

    /// Apply a whitespace-separated key sequence.
    ///
    /// The whole sequence is translated before any key is applied, so an
    /// unknown token leaves the calculator untouched.
    pub fn press_keys(&mut self, sequence: &str) -> Result<DisplaySnapshot, KeyError> {
        let inputs = parse_keys(sequence)?;
        Ok(inputs
            .into_iter()
            .fold(self.snapshot(), |_, input| self.press(input)))
    }

    pub fn snapshot(&self) -> DisplaySnapshot {
        self.state.snapshot()
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Capture the session for saving.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint::capture(&self.state, &self.tape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AngleMode, BinaryOp, Digit, UnaryFunction};
    use crate::engine::{EngineError, EngineResult};

    #[test]
    fn new_calculator_shows_zero() {
        let calc = Calculator::new();
        let snapshot = calc.snapshot();
        assert_eq!(snapshot.primary_text, "0");
        assert_eq!(snapshot.expression_text, "");
        assert_eq!(snapshot.angle_mode, AngleMode::Rad);
        assert!(calc.tape().is_empty());
    }

    #[test]
    fn press_returns_new_display() {
        let mut calc = Calculator::new();
        calc.press(Input::Digit(Digit::new(5).unwrap()));
        let snapshot = calc.press(Input::Operator(BinaryOp::Add));
        assert_eq!(snapshot.expression_text, "5 + ");
        assert_eq!(snapshot.primary_text, "0");
    }

    #[test]
    fn completed_calculations_are_taped() {
        let mut calc = Calculator::new();
        calc.press_keys("5 + 3 * 2 =").unwrap();

        let expressions: Vec<_> = calc
            .tape()
            .entries()
            .iter()
            .map(|e| e.to_string())
            .collect();
        assert_eq!(expressions, vec!["5 + 3 = 8", "8 * 2 = 16"]);
    }

    #[test]
    fn failures_and_edits_are_not_taped() {
        let mut calc = Calculator::new();
        let snapshot = calc.press_keys("1 / 0 =").unwrap();
        assert!(snapshot.is_error());
        calc.press_keys("4 backspace deg").unwrap();
        assert!(calc.tape().is_empty());
    }

    #[test]
    fn function_results_are_taped() {
        let mut calc = Calculator::new();
        calc.press_keys("16").unwrap();
        let snapshot = calc.press(Input::Function(UnaryFunction::Sqrt));
        assert_eq!(snapshot.primary_text, "4");
        assert_eq!(calc.tape().last().unwrap().expression, "sqrt(16)");
    }

    #[test]
    fn unknown_key_leaves_state_untouched() {
        let mut calc = Calculator::new();
        calc.press_keys("7 +").unwrap();
        let before = calc.state().clone();

        assert_eq!(
            calc.press_keys("2 bogus ="),
            Err(KeyError::Unknown("bogus".to_string()))
        );
        assert_eq!(calc.state(), &before);
        assert!(calc.press_key("").is_err());
    }

    #[test]
    fn empty_sequence_returns_current_display() {
        let mut calc = Calculator::new();
        calc.press_key("9").unwrap();
        assert_eq!(calc.press_keys("").unwrap().primary_text, "9");
    }

    #[test]
    fn checkpoint_captures_session() {
        let mut calc = Calculator::new();
        calc.press_keys("2 + 2 = m+").unwrap();
        let checkpoint = calc.checkpoint();
        assert_eq!(checkpoint.state.memory(), 4.0);
        assert_eq!(checkpoint.tape.len(), 1);
    }

    /// Engine whose addition always fails.
    #[derive(Debug, Default)]
    struct BrokenAdder;

    impl ArithmeticEngine for BrokenAdder {
        fn add(&self, _a: f64, _b: f64) -> EngineResult {
            Err(EngineError::Overflow { operation: "add" })
        }

        fn subtract(&self, a: f64, b: f64) -> EngineResult {
            StandardEngine.subtract(a, b)
        }
        fn multiply(&self, a: f64, b: f64) -> EngineResult {
            StandardEngine.multiply(a, b)
        }
        fn divide(&self, a: f64, b: f64) -> EngineResult {
            StandardEngine.divide(a, b)
        }
        fn modulo(&self, a: f64, b: f64) -> EngineResult {
            StandardEngine.modulo(a, b)
        }
        fn power(&self, a: f64, b: f64) -> EngineResult {
            StandardEngine.power(a, b)
        }
        fn nth_root(&self, x: f64, n: f64) -> EngineResult {
            StandardEngine.nth_root(x, n)
        }
        fn sine(&self, x: f64) -> EngineResult {
            StandardEngine.sine(x)
        }
        fn cosine(&self, x: f64) -> EngineResult {
            StandardEngine.cosine(x)
        }
        fn tangent(&self, x: f64) -> EngineResult {
            StandardEngine.tangent(x)
        }
        fn arcsine(&self, x: f64) -> EngineResult {
            StandardEngine.arcsine(x)
        }
        fn arccosine(&self, x: f64) -> EngineResult {
            StandardEngine.arccosine(x)
        }
        fn arctangent(&self, x: f64) -> EngineResult {
            StandardEngine.arctangent(x)
        }
        fn sinh(&self, x: f64) -> EngineResult {
            StandardEngine.sinh(x)
        }
        fn cosh(&self, x: f64) -> EngineResult {
            StandardEngine.cosh(x)
        }
        fn tanh(&self, x: f64) -> EngineResult {
            StandardEngine.tanh(x)
        }
        fn natural_log(&self, x: f64) -> EngineResult {
            StandardEngine.natural_log(x)
        }
        fn log10(&self, x: f64) -> EngineResult {
            StandardEngine.log10(x)
        }
        fn log2(&self, x: f64) -> EngineResult {
            StandardEngine.log2(x)
        }
        fn square_root(&self, x: f64) -> EngineResult {
            StandardEngine.square_root(x)
        }
        fn cube_root(&self, x: f64) -> EngineResult {
            StandardEngine.cube_root(x)
        }
        fn exponential(&self, x: f64) -> EngineResult {
            StandardEngine.exponential(x)
        }
        fn factorial(&self, n: f64) -> EngineResult {
            StandardEngine.factorial(n)
        }
        fn absolute(&self, x: f64) -> EngineResult {
            StandardEngine.absolute(x)
        }
        fn floor(&self, x: f64) -> EngineResult {
            StandardEngine.floor(x)
        }
        fn ceiling(&self, x: f64) -> EngineResult {
            StandardEngine.ceiling(x)
        }
        fn round(&self, x: f64) -> EngineResult {
            StandardEngine.round(x)
        }
        fn degrees_to_radians(&self, x: f64) -> EngineResult {
            StandardEngine.degrees_to_radians(x)
        }
        fn radians_to_degrees(&self, x: f64) -> EngineResult {
            StandardEngine.radians_to_degrees(x)
        }
        fn pi(&self) -> f64 {
            StandardEngine.pi()
        }
        fn e(&self) -> f64 {
            StandardEngine.e()
        }
        fn golden_ratio(&self) -> f64 {
            StandardEngine.golden_ratio()
        }
    }

    #[test]
    fn custom_engine_errors_surface_as_error_display() {
        let mut calc = Calculator::with_engine(BrokenAdder);
        assert!(calc.press_keys("2 + 2 =").unwrap().is_error());
        assert_eq!(calc.press_keys("c 3 * 3 =").unwrap().primary_text, "9");
        assert_eq!(calc.tape().len(), 1);
    }
}
