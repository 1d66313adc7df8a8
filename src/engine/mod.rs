//! Arithmetic capability set consumed by the calculator core.
//!
//! The core never does math itself (apart from negation). Every binary
//! operation, scientific function, conversion, constant and memory primitive
//! goes through an [`ArithmeticEngine`], and every fallible call returns an
//! explicit [`EngineResult`] so the transition layer can fold failures into
//! the `Error` display state.

mod standard;

pub use standard::StandardEngine;

use thiserror::Error;

/// Result of a single engine call.
pub type EngineResult = Result<f64, EngineError>;

/// Errors an engine call can signal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("{operation} is undefined for {value}")]
    Domain { operation: &'static str, value: f64 },

    #[error("{operation} overflowed")]
    Overflow { operation: &'static str },

    #[error("{operation} did not produce a number")]
    NotANumber { operation: &'static str },
}

impl EngineError {
    /// Whether the error is a domain error as opposed to an overflow.
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::DivisionByZero | Self::Domain { .. })
    }
}

/// Reject values that are not finite real numbers.
///
/// Applied at the transition boundary to every engine result, so an engine
/// that returns `NaN` or an infinity instead of an error is still caught.
pub fn ensure_finite(operation: &'static str, value: f64) -> EngineResult {
    if value.is_nan() {
        Err(EngineError::NotANumber { operation })
    } else if value.is_infinite() {
        Err(EngineError::Overflow { operation })
    } else {
        Ok(value)
    }
}

/// Arithmetic primitives the calculator core calls into.
///
/// Trigonometric functions work in radians; angle-mode conversion is the
/// caller's job. Memory primitives are pure: they take the current register
/// value and return the new one, leaving ownership of the register with the
/// calculator state.
pub trait ArithmeticEngine {
    fn add(&self, a: f64, b: f64) -> EngineResult;
    fn subtract(&self, a: f64, b: f64) -> EngineResult;
    fn multiply(&self, a: f64, b: f64) -> EngineResult;
    fn divide(&self, a: f64, b: f64) -> EngineResult;
    fn modulo(&self, a: f64, b: f64) -> EngineResult;
    fn power(&self, base: f64, exponent: f64) -> EngineResult;
    /// The `n`-th root of `x`.
    fn nth_root(&self, x: f64, n: f64) -> EngineResult;

    fn sine(&self, x: f64) -> EngineResult;
    fn cosine(&self, x: f64) -> EngineResult;
    fn tangent(&self, x: f64) -> EngineResult;
    fn arcsine(&self, x: f64) -> EngineResult;
    fn arccosine(&self, x: f64) -> EngineResult;
    fn arctangent(&self, x: f64) -> EngineResult;

    fn sinh(&self, x: f64) -> EngineResult;
    fn cosh(&self, x: f64) -> EngineResult;
    fn tanh(&self, x: f64) -> EngineResult;

    fn natural_log(&self, x: f64) -> EngineResult;
    fn log10(&self, x: f64) -> EngineResult;
    fn log2(&self, x: f64) -> EngineResult;

    fn square_root(&self, x: f64) -> EngineResult;
    fn cube_root(&self, x: f64) -> EngineResult;
    fn exponential(&self, x: f64) -> EngineResult;

    /// Factorial of a non-negative integer.
    fn factorial(&self, n: f64) -> EngineResult;
    fn absolute(&self, x: f64) -> EngineResult;
    fn floor(&self, x: f64) -> EngineResult;
    fn ceiling(&self, x: f64) -> EngineResult;
    fn round(&self, x: f64) -> EngineResult;

    fn degrees_to_radians(&self, degrees: f64) -> EngineResult;
    fn radians_to_degrees(&self, radians: f64) -> EngineResult;

    fn pi(&self) -> f64;
    fn e(&self) -> f64;
    fn golden_ratio(&self) -> f64;

    fn memory_clear(&self) -> f64 {
        0.0
    }

    fn memory_recall(&self, register: f64) -> f64 {
        register
    }

    fn memory_add(&self, register: f64, value: f64) -> EngineResult {
        ensure_finite("memory add", register + value)
    }

    fn memory_subtract(&self, register: f64, value: f64) -> EngineResult {
        ensure_finite("memory subtract", register - value)
    }
}

impl<T: ArithmeticEngine + ?Sized> ArithmeticEngine for &T {
    fn add(&self, a: f64, b: f64) -> EngineResult {
        (**self).add(a, b)
    }
    fn subtract(&self, a: f64, b: f64) -> EngineResult {
        (**self).subtract(a, b)
    }
    fn multiply(&self, a: f64, b: f64) -> EngineResult {
        (**self).multiply(a, b)
    }
    fn divide(&self, a: f64, b: f64) -> EngineResult {
        (**self).divide(a, b)
    }
    fn modulo(&self, a: f64, b: f64) -> EngineResult {
        (**self).modulo(a, b)
    }
    fn power(&self, base: f64, exponent: f64) -> EngineResult {
        (**self).power(base, exponent)
    }
    fn nth_root(&self, x: f64, n: f64) -> EngineResult {
        (**self).nth_root(x, n)
    }
    fn sine(&self, x: f64) -> EngineResult {
        (**self).sine(x)
    }
    fn cosine(&self, x: f64) -> EngineResult {
        (**self).cosine(x)
    }
    fn tangent(&self, x: f64) -> EngineResult {
        (**self).tangent(x)
    }
    fn arcsine(&self, x: f64) -> EngineResult {
        (**self).arcsine(x)
    }
    fn arccosine(&self, x: f64) -> EngineResult {
        (**self).arccosine(x)
    }
    fn arctangent(&self, x: f64) -> EngineResult {
        (**self).arctangent(x)
    }
    fn sinh(&self, x: f64) -> EngineResult {
        (**self).sinh(x)
    }
    fn cosh(&self, x: f64) -> EngineResult {
        (**self).cosh(x)
    }
    fn tanh(&self, x: f64) -> EngineResult {
        (**self).tanh(x)
    }
    fn natural_log(&self, x: f64) -> EngineResult {
        (**self).natural_log(x)
    }
    fn log10(&self, x: f64) -> EngineResult {
        (**self).log10(x)
    }
    fn log2(&self, x: f64) -> EngineResult {
        (**self).log2(x)
    }
    fn square_root(&self, x: f64) -> EngineResult {
        (**self).square_root(x)
    }
    fn cube_root(&self, x: f64) -> EngineResult {
        (**self).cube_root(x)
    }
    fn exponential(&self, x: f64) -> EngineResult {
        (**self).exponential(x)
    }
    fn factorial(&self, n: f64) -> EngineResult {
        (**self).factorial(n)
    }
    fn absolute(&self, x: f64) -> EngineResult {
        (**self).absolute(x)
    }
    fn floor(&self, x: f64) -> EngineResult {
        (**self).floor(x)
    }
    fn ceiling(&self, x: f64) -> EngineResult {
        (**self).ceiling(x)
    }
    fn round(&self, x: f64) -> EngineResult {
        (**self).round(x)
    }
    fn degrees_to_radians(&self, degrees: f64) -> EngineResult {
        (**self).degrees_to_radians(degrees)
    }
    fn radians_to_degrees(&self, radians: f64) -> EngineResult {
        (**self).radians_to_degrees(radians)
    }
    fn pi(&self) -> f64 {
        (**self).pi()
    }
    fn e(&self) -> f64 {
        (**self).e()
    }
    fn golden_ratio(&self) -> f64 {
        (**self).golden_ratio()
    }
    fn memory_clear(&self) -> f64 {
        (**self).memory_clear()
    }
    fn memory_recall(&self, register: f64) -> f64 {
        (**self).memory_recall(register)
    }
    fn memory_add(&self, register: f64, value: f64) -> EngineResult {
        (**self).memory_add(register, value)
    }
    fn memory_subtract(&self, register: f64, value: f64) -> EngineResult {
        (**self).memory_subtract(register, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_passes_real_numbers() {
        assert_eq!(ensure_finite("add", 2.5), Ok(2.5));
        assert_eq!(ensure_finite("add", -0.0), Ok(-0.0));
    }

    #[test]
    fn ensure_finite_rejects_nan_and_infinity() {
        assert_eq!(
            ensure_finite("divide", f64::NAN),
            Err(EngineError::NotANumber {
                operation: "divide"
            })
        );
        assert_eq!(
            ensure_finite("power", f64::INFINITY),
            Err(EngineError::Overflow { operation: "power" })
        );
        assert_eq!(
            ensure_finite("power", f64::NEG_INFINITY),
            Err(EngineError::Overflow { operation: "power" })
        );
    }

    #[test]
    fn error_kinds_are_classified() {
        assert!(EngineError::DivisionByZero.is_domain());
        assert!(EngineError::Domain {
            operation: "ln",
            value: -1.0
        }
        .is_domain());
        assert!(!EngineError::Overflow { operation: "exp" }.is_domain());
    }

    #[test]
    fn engine_is_usable_through_a_reference() {
        let engine = StandardEngine;
        let by_ref = &engine;
        assert_eq!(by_ref.add(2.0, 3.0), Ok(5.0));
        assert_eq!(by_ref.memory_recall(4.0), 4.0);
    }
}
