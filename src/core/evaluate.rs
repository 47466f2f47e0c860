//! Number parsing, rounding and rendering for the engine.
//!
//! Operands travel through the engine as strings and are only parsed when an
//! operator is applied. Results are rounded to a fixed number of decimal places
//! before rendering so that binary floating-point artifacts never reach the
//! display (`0.1 + 0.2` renders as `0.3`).

use super::operation::Operation;

/// Decimal places results are rounded to.
pub const DEFAULT_PRECISION: u32 = 10;

/// Largest precision accepted by configuration; beyond this `f64` has no
/// meaningful digits left to round.
pub const MAX_PRECISION: u32 = 15;

/// Parse an operand string into a number.
///
/// Returns `None` for anything that is not a number, including `NaN`.
/// Infinite values are accepted so that a chained `Infinity` result keeps
/// propagating.
pub fn parse_operand(input: &str) -> Option<f64> {
    input.parse::<f64>().ok().filter(|value| !value.is_nan())
}

/// Round to `precision` decimal places, then re-read the rounded value.
pub fn round_to(value: f64, precision: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", precision as usize, value)
        .parse()
        .unwrap_or(value)
}

/// Render a number the way the calculator shows it.
///
/// Uses the shortest representation that reads back to the same value.
/// Magnitudes of `1e21` and above, or below `1e-6`, use exponent form with an
/// explicit sign (`1e+21`, `1.5e-7`). Negative zero renders as `0`.
pub fn render_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let rendered = format!("{value:e}");
        return match rendered.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => rendered,
        };
    }

    value.to_string()
}

/// Evaluate `lhs op rhs` with the given rounding precision.
///
/// Returns `None` when either operand fails to parse. Never panics; division by
/// zero produces `Infinity`, `-Infinity` or `NaN`.
pub fn evaluate_with_precision(
    lhs: &str,
    operation: Operation,
    rhs: &str,
    precision: u32,
) -> Option<String> {
    let lhs = parse_operand(lhs)?;
    let rhs = parse_operand(rhs)?;
    let result = round_to(operation.apply(lhs, rhs), precision);
    Some(render_number(result))
}

/// Evaluate `lhs op rhs` at the default precision.
///
/// # Example
///
/// ```rust
/// use deskcalc::core::{evaluate, Operation};
///
/// assert_eq!(evaluate("0.1", Operation::Add, "0.2").as_deref(), Some("0.3"));
/// assert_eq!(evaluate("1", Operation::Divide, "0").as_deref(), Some("Infinity"));
/// assert_eq!(evaluate("abc", Operation::Add, "1"), None);
/// ```
pub fn evaluate(lhs: &str, operation: Operation, rhs: &str) -> Option<String> {
    evaluate_with_precision(lhs, operation, rhs, DEFAULT_PRECISION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floating_point_artifacts_are_rounded_away() {
        assert_eq!(evaluate("0.1", Operation::Add, "0.2").as_deref(), Some("0.3"));
        assert_eq!(evaluate("1.1", Operation::Multiply, "3").as_deref(), Some("3.3"));
        assert_eq!(evaluate("0.3", Operation::Subtract, "0.1").as_deref(), Some("0.2"));
    }

    #[test]
    fn integer_results_have_no_fraction() {
        assert_eq!(evaluate("12", Operation::Add, "5").as_deref(), Some("17"));
        assert_eq!(evaluate("10", Operation::Divide, "4").as_deref(), Some("2.5"));
        assert_eq!(evaluate("2.5", Operation::Multiply, "2").as_deref(), Some("5"));
    }

    #[test]
    fn division_by_zero_is_non_finite() {
        assert_eq!(evaluate("7", Operation::Divide, "0").as_deref(), Some("Infinity"));
        assert_eq!(evaluate("-7", Operation::Divide, "0").as_deref(), Some("-Infinity"));
        assert_eq!(evaluate("0", Operation::Divide, "0").as_deref(), Some("NaN"));
    }

    #[test]
    fn unparseable_operands_yield_none() {
        assert_eq!(evaluate("", Operation::Add, "1"), None);
        assert_eq!(evaluate("1", Operation::Add, "NaN"), None);
        assert_eq!(evaluate("1..2", Operation::Add, "1"), None);
    }

    #[test]
    fn infinite_operands_keep_propagating() {
        assert_eq!(
            evaluate("Infinity", Operation::Add, "1").as_deref(),
            Some("Infinity")
        );
    }

    #[test]
    fn trailing_decimal_point_parses() {
        assert_eq!(parse_operand("0."), Some(0.0));
        assert_eq!(parse_operand("12."), Some(12.0));
    }

    #[test]
    fn tiny_results_round_to_zero() {
        assert_eq!(
            evaluate("0.00000000001", Operation::Multiply, "1").as_deref(),
            Some("0")
        );
    }

    #[test]
    fn render_uses_exponent_form_at_the_extremes() {
        assert_eq!(render_number(1e21), "1e+21");
        assert_eq!(render_number(-2.5e22), "-2.5e+22");
        assert_eq!(render_number(1.5e-7), "1.5e-7");
        assert_eq!(render_number(1e20), "100000000000000000000");
        assert_eq!(render_number(0.000001), "0.000001");
    }

    #[test]
    fn render_normalizes_negative_zero() {
        assert_eq!(render_number(-0.0), "0");
    }

    #[test]
    fn round_to_respects_precision() {
        assert_eq!(round_to(1.23456, 2), 1.23);
        assert_eq!(round_to(2.0 / 3.0, 10), 0.6666666667);
        assert!(round_to(f64::INFINITY, 10).is_infinite());
    }
}
