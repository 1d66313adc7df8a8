//! Canonical display formatting for numeric results.

/// Magnitudes at or below this render as `"0"`.
pub const ZERO_THRESHOLD: f64 = 1e-10;

/// Magnitudes above this render in scientific notation.
pub const SCIENTIFIC_THRESHOLD: f64 = 1e10;

/// Decimal places kept in fixed notation.
const FIXED_DECIMALS: usize = 10;

/// Fractional digits of the mantissa in scientific notation.
const SCIENTIFIC_DIGITS: usize = 8;

/// Format a finite result for display.
///
/// Rules, in order:
/// 1. `|x| <= 1e-10` is floating-point noise and shows as `"0"`.
/// 2. `|x| > 1e10` shows in scientific notation with 8 fractional digits and
///    a signed exponent.
/// 3. Anything else is rounded to 10 decimal places with trailing zeros and
///    a dangling decimal point removed.
///
/// # Example
///
/// ```rust
/// use scicalc::core::format_result;
///
/// assert_eq!(format_result(2.5), "2.5");
/// assert_eq!(format_result(0.0000000001), "0");
/// assert_eq!(format_result(12345678901.0), "1.23456789e+10");
/// ```
pub fn format_result(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude <= ZERO_THRESHOLD {
        return "0".to_string();
    }
    if magnitude > SCIENTIFIC_THRESHOLD {
        return scientific(value);
    }

    let fixed = format!("{:.*}", FIXED_DECIMALS, value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}

fn scientific(value: f64) -> String {
    let formatted = format!("{:.*e}", SCIENTIFIC_DIGITS, value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noise_near_zero_is_suppressed() {
        assert_eq!(format_result(0.0), "0");
        assert_eq!(format_result(-0.0), "0");
        assert_eq!(format_result(1e-10), "0");
        assert_eq!(format_result(-3e-11), "0");
    }

    #[test]
    fn large_values_use_scientific_notation() {
        assert_eq!(format_result(12345678901.0), "1.23456789e+10");
        assert_eq!(format_result(-2.5e15), "-2.50000000e+15");
        assert_eq!(format_result(1e300), "1.00000000e+300");
    }

    #[test]
    fn threshold_itself_stays_fixed() {
        assert_eq!(format_result(1e10), "10000000000");
    }

    #[test]
    fn fixed_notation_strips_trailing_zeros() {
        assert_eq!(format_result(2.5), "2.5");
        assert_eq!(format_result(8.0), "8");
        assert_eq!(format_result(-42.0), "-42");
        assert_eq!(format_result(0.1 + 0.2), "0.3");
        assert_eq!(format_result(1.0 / 3.0), "0.3333333333");
    }

    #[test]
    fn small_values_keep_ten_decimals() {
        assert_eq!(format_result(2e-10), "0.0000000002");
        assert_eq!(format_result(0.000123), "0.000123");
    }

    #[test]
    fn formatting_is_deterministic() {
        let value = 7.0 / 9.0;
        assert_eq!(format_result(value), format_result(value));
    }
}
