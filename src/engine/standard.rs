//! Default `f64` arithmetic engine.

use super::{ensure_finite, ArithmeticEngine, EngineError, EngineResult};
use std::f64::consts;

/// Largest `n` whose factorial fits in an `f64`.
const MAX_FACTORIAL: f64 = 170.0;

/// Arithmetic engine backed by the standard library's `f64` math.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardEngine;

fn domain(operation: &'static str, value: f64) -> EngineError {
    EngineError::Domain { operation, value }
}

impl ArithmeticEngine for StandardEngine {
    fn add(&self, a: f64, b: f64) -> EngineResult {
        Ok(a + b)
    }

    fn subtract(&self, a: f64, b: f64) -> EngineResult {
        Ok(a - b)
    }

    fn multiply(&self, a: f64, b: f64) -> EngineResult {
        Ok(a * b)
    }

    fn divide(&self, a: f64, b: f64) -> EngineResult {
        if b == 0.0 {
            return Err(EngineError::DivisionByZero);
        }
        Ok(a / b)
    }

    fn modulo(&self, a: f64, b: f64) -> EngineResult {
        if b == 0.0 {
            return Err(EngineError::DivisionByZero);
        }
        Ok(a % b)
    }

    fn power(&self, base: f64, exponent: f64) -> EngineResult {
        Ok(base.powf(exponent))
    }

    fn nth_root(&self, x: f64, n: f64) -> EngineResult {
        if n == 0.0 {
            return Err(domain("root", n));
        }
        Ok(x.powf(n.recip()))
    }

    fn sine(&self, x: f64) -> EngineResult {
        Ok(x.sin())
    }

    fn cosine(&self, x: f64) -> EngineResult {
        Ok(x.cos())
    }

    fn tangent(&self, x: f64) -> EngineResult {
        Ok(x.tan())
    }

    fn arcsine(&self, x: f64) -> EngineResult {
        if !(-1.0..=1.0).contains(&x) {
            return Err(domain("asin", x));
        }
        Ok(x.asin())
    }

    fn arccosine(&self, x: f64) -> EngineResult {
        if !(-1.0..=1.0).contains(&x) {
            return Err(domain("acos", x));
        }
        Ok(x.acos())
    }

    fn arctangent(&self, x: f64) -> EngineResult {
        Ok(x.atan())
    }

    fn sinh(&self, x: f64) -> EngineResult {
        Ok(x.sinh())
    }

    fn cosh(&self, x: f64) -> EngineResult {
        Ok(x.cosh())
    }

    fn tanh(&self, x: f64) -> EngineResult {
        Ok(x.tanh())
    }

    fn natural_log(&self, x: f64) -> EngineResult {
        if x <= 0.0 {
            return Err(domain("ln", x));
        }
        Ok(x.ln())
    }

    fn log10(&self, x: f64) -> EngineResult {
        if x <= 0.0 {
            return Err(domain("log", x));
        }
        Ok(x.log10())
    }

    fn log2(&self, x: f64) -> EngineResult {
        if x <= 0.0 {
            return Err(domain("log2", x));
        }
        Ok(x.log2())
    }

    fn square_root(&self, x: f64) -> EngineResult {
        if x < 0.0 {
            return Err(domain("sqrt", x));
        }
        Ok(x.sqrt())
    }

    fn cube_root(&self, x: f64) -> EngineResult {
        Ok(x.cbrt())
    }

    fn exponential(&self, x: f64) -> EngineResult {
        ensure_finite("exp", x.exp())
    }

    fn factorial(&self, n: f64) -> EngineResult {
        if n < 0.0 || n.fract() != 0.0 {
            return Err(domain("factorial", n));
        }
        if n > MAX_FACTORIAL {
            return Err(EngineError::Overflow {
                operation: "factorial",
            });
        }
        // n is a small non-negative integer here
        let n = n as u32;
        Ok((2..=n).fold(1.0, |acc, i| acc * f64::from(i)))
    }

    fn absolute(&self, x: f64) -> EngineResult {
        Ok(x.abs())
    }

    fn floor(&self, x: f64) -> EngineResult {
        Ok(x.floor())
    }

    fn ceiling(&self, x: f64) -> EngineResult {
        Ok(x.ceil())
    }

    fn round(&self, x: f64) -> EngineResult {
        Ok(x.round())
    }

    fn degrees_to_radians(&self, degrees: f64) -> EngineResult {
        Ok(degrees * consts::PI / 180.0)
    }

    fn radians_to_degrees(&self, radians: f64) -> EngineResult {
        Ok(radians * 180.0 / consts::PI)
    }

    fn pi(&self) -> f64 {
        consts::PI
    }

    fn e(&self) -> f64 {
        consts::E
    }

    fn golden_ratio(&self) -> f64 {
        (1.0 + 5.0_f64.sqrt()) / 2.0
    }
}
