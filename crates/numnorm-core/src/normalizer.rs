//! Number normalizer - converts locale-ambiguous numerals to one integer
//!
//! # Pipeline
//!
//! `raw text → sanitize → recognize (ordered rules) → reconstruct → i64`
//!
//! # Guarantees
//!
//! - **Pure**: no I/O, no shared mutable state, safe to call from any thread
//! - **Idempotent**: if `normalize(s) == Some(n)` then `normalize(&n.to_string()) == Some(n)`
//! - **Total**: every input yields a value or `None`; nothing panics
//! - **Non-negative**: signs are decoration and are stripped by sanitization

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

use crate::input::RawInput;
use crate::rules::{recognize, FormatRule, Recognition, Strategy};
use crate::sanitize::sanitize;
use crate::Result;

// ── Public API ─────────────────────────────────────────────

/// Normalize a numeral in any supported regional format to an integer
///
/// Fractions are rounded half away from zero: `1000031.39 → 1000031`,
/// `1000031.69 → 1000032`, `9,999.50 → 10000`.
///
/// Returns `None` when the sanitized text matches no format rule (empty,
/// separators only, one or three fractional digits) or when the magnitude
/// does not fit in an `i64`.
///
/// # Example
/// ```
/// use numnorm_core::normalizer::normalize;
///
/// assert_eq!(normalize("1.000.000,12"), Some(1_000_000));
/// assert_eq!(normalize("1,000,000.12"), Some(1_000_000));
/// assert_eq!(normalize("1.234"), None);
/// ```
pub fn normalize(input: &str) -> Option<i64> {
    let sanitized = sanitize(input);
    let recognition = recognize(&sanitized)?;
    trace!(rule = %recognition.rule, sanitized = %sanitized, "format recognized");
    evaluate(&recognition)
}

/// Normalize any value with a canonical string form
pub fn normalize_value(input: &RawInput<'_>) -> Option<i64> {
    normalize(input.as_str())
}

/// Normalize a JSON value, rejecting values with no numeric string form
///
/// # Errors
/// Returns `InvalidInput` for `null`, booleans, arrays and objects.
pub fn normalize_json(value: &Value) -> Result<Option<i64>> {
    let raw = RawInput::try_from(value)?;
    Ok(normalize_value(&raw))
}

/// Record of a single normalization, for diagnostics and reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Normalization {
    pub input: String,
    pub sanitized: String,
    pub rule: Option<FormatRule>,
    pub value: Option<i64>,
}

/// Normalize and report which rule (if any) was applied
pub fn explain(input: &str) -> Normalization {
    let sanitized = sanitize(input);
    let recognition = recognize(&sanitized);
    let value = recognition.as_ref().and_then(evaluate);
    Normalization {
        input: input.to_string(),
        rule: recognition.map(|r| r.rule),
        sanitized: sanitized.into_inner(),
        value,
    }
}

// ── Evaluation ─────────────────────────────────────────────

fn evaluate(recognition: &Recognition<'_>) -> Option<i64> {
    let value = match recognition.rule.strategy() {
        Strategy::Literal => round_literal(recognition.integral, recognition.fraction),
        Strategy::Reconstruct => reconstruct(recognition.integral, recognition.fraction),
    };
    if value.is_none() {
        debug!(
            rule = %recognition.rule,
            integral = recognition.integral,
            "magnitude does not fit in i64"
        );
    }
    value
}

/// Round a literal numeral whose integral digits carry no grouping
///
/// `PlainInteger` has an empty fraction and comes back unchanged.
fn round_literal(integral: &str, fraction: &str) -> Option<i64> {
    let whole: i64 = integral.parse().ok()?;
    whole.checked_add(round_fraction(fraction))
}

/// Rebuild an integer from a grouped integral part and its fraction
///
/// Grouping separators and stray whitespace are stripped from the integral
/// part; an integral part with no digits counts as zero. The rounded
/// fraction (0 or 1) is then added.
pub fn reconstruct(integral: &str, fraction: &str) -> Option<i64> {
    let whole = digits_value(integral)?;
    whole.checked_add(round_fraction(fraction))
}

/// Round `0.<fraction>` half away from zero, yielding 0 or 1
///
/// `F / 10^len(F) >= 0.5` holds exactly when the leading digit is 5 or
/// more, so no floating point is involved and long fractions cannot
/// overflow.
pub fn round_fraction(fraction: &str) -> i64 {
    match fraction.bytes().find(u8::is_ascii_digit) {
        Some(lead) if lead >= b'5' => 1,
        _ => 0,
    }
}

fn digits_value(text: &str) -> Option<i64> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Some(0);
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ── Reference values ───────────────────────────────

    #[test]
    fn test_two_decimal_zero_fraction() {
        assert_eq!(normalize("127.00"), Some(127));
    }

    #[test]
    fn test_plain_integer() {
        assert_eq!(normalize("1000031"), Some(1000031));
    }

    #[test]
    fn test_fraction_rounds_down() {
        assert_eq!(normalize("1000031.39"), Some(1000031));
    }

    #[test]
    fn test_fraction_rounds_up() {
        assert_eq!(normalize("1000031.69"), Some(1000032));
    }

    #[test]
    fn test_period_grouped_comma_decimal() {
        assert_eq!(normalize("1.000.000,12"), Some(1000000));
    }

    #[test]
    fn test_comma_grouped_period_decimal() {
        assert_eq!(normalize("1,000,000.12"), Some(1000000));
    }

    // ── Absent results ─────────────────────────────────

    #[test]
    fn test_empty_and_whitespace_absent() {
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("   "), None);
    }

    #[test]
    fn test_no_digits_absent() {
        assert_eq!(normalize("abc"), None);
        assert_eq!(normalize(".,."), None);
    }

    #[test]
    fn test_ambiguous_fraction_lengths_absent() {
        assert_eq!(normalize("10.5"), None);
        assert_eq!(normalize("1,5"), None);
        assert_eq!(normalize("1.234"), None);
        assert_eq!(normalize("1,234"), None);
        assert_eq!(normalize("1.000.000,125"), None);
    }

    #[test]
    fn test_absent_is_distinct_from_zero() {
        assert_eq!(normalize("0"), Some(0));
        assert_eq!(normalize("0,00"), Some(0));
        assert_ne!(normalize("x"), Some(0));
    }

    #[test]
    fn test_exposed_trailing_space_absent() {
        // Trimming runs before decoration is removed
        assert_eq!(normalize("12 €"), None);
        assert_eq!(normalize("€ 12"), None);
        assert_eq!(normalize("€12"), Some(12));
    }

    #[test]
    fn test_overflow_absent() {
        assert_eq!(normalize("9223372036854775807"), Some(i64::MAX));
        assert_eq!(normalize("9223372036854775808"), None);
        assert_eq!(normalize("9223372036854775807.50"), None);
        assert_eq!(normalize("9,223,372,036,854,775,807.49"), Some(i64::MAX));
    }

    // ── Rounding ───────────────────────────────────────

    #[test]
    fn test_half_rounds_up() {
        assert_eq!(normalize("10.50"), Some(11));
        assert_eq!(normalize("9,999.50"), Some(10000));
        assert_eq!(normalize("9.999,50"), Some(10000));
        assert_eq!(normalize("0,50"), Some(1));
    }

    #[test]
    fn test_just_below_half_rounds_down() {
        assert_eq!(normalize("10.49"), Some(10));
        assert_eq!(normalize("12,4999"), Some(12));
    }

    #[test]
    fn test_long_fractions() {
        assert_eq!(normalize("1.5000"), Some(2));
        assert_eq!(normalize("1.2345"), Some(1));
        assert_eq!(normalize("3.14159265358979323846264338327950288"), Some(3));
    }

    #[test]
    fn test_round_fraction() {
        assert_eq!(round_fraction("00"), 0);
        assert_eq!(round_fraction("49"), 0);
        assert_eq!(round_fraction("50"), 1);
        assert_eq!(round_fraction("99"), 1);
        assert_eq!(round_fraction(""), 0);
    }

    // ── Grouping ───────────────────────────────────────

    #[test]
    fn test_space_grouping() {
        assert_eq!(normalize("1 000 000,12"), Some(1000000));
        assert_eq!(normalize("1 000 000.99"), Some(1000001));
    }

    #[test]
    fn test_decoration_stripped() {
        assert_eq!(normalize("$1,000,000.12"), Some(1000000));
        assert_eq!(normalize("SEK 1.000.000,12"), Some(1000000));
        assert_eq!(normalize("-45"), Some(45));
    }

    #[test]
    fn test_reconstruct_without_integral_digits() {
        assert_eq!(reconstruct("..", "50"), Some(1));
        assert_eq!(normalize(".,50"), Some(1));
    }

    #[test]
    fn test_reconstruct_strips_grouping() {
        assert_eq!(reconstruct("1 234.567", "49"), Some(1234567));
        assert_eq!(reconstruct("1,234,567", "51"), Some(1234568));
    }

    // ── Other entry points ─────────────────────────────

    #[test]
    fn test_normalize_value() {
        assert_eq!(normalize_value(&RawInput::from(1000031.69_f64)), Some(1000032));
        assert_eq!(normalize_value(&RawInput::from(127_u8)), Some(127));
        assert_eq!(normalize_value(&RawInput::from("1 000,50")), Some(1001));
    }

    #[test]
    fn test_normalize_json() {
        assert_eq!(normalize_json(&json!("1.000.000,12")).unwrap(), Some(1000000));
        assert_eq!(normalize_json(&json!(42)).unwrap(), Some(42));
        assert_eq!(normalize_json(&json!("n/a")).unwrap(), None);
        assert!(normalize_json(&json!({"price": 1})).is_err());
        assert!(normalize_json(&json!(null)).is_err());
    }

    #[test]
    fn test_explain_recognized() {
        let report = explain(" $1,000,000.12 ");
        assert_eq!(report.input, " $1,000,000.12 ");
        assert_eq!(report.sanitized, "1,000,000.12");
        assert_eq!(report.rule, Some(FormatRule::PeriodDecimal));
        assert_eq!(report.value, Some(1000000));
    }

    #[test]
    fn test_explain_unrecognized_serializes_nulls() {
        let report = explain("1.234");
        assert_eq!(report.rule, None);
        assert_eq!(report.value, None);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["rule"], Value::Null);
        assert_eq!(json["value"], Value::Null);
        assert_eq!(json["sanitized"], "1.234");
    }

    #[test]
    fn test_explain_agrees_with_normalize() {
        for input in ["127.00", "1.000.000,12", "abc", "9,999.50", "1,5"] {
            assert_eq!(explain(input).value, normalize(input), "input {:?}", input);
        }
    }

    // ── Idempotence and determinism ────────────────────

    #[test]
    fn test_idempotence() {
        for input in ["127.00", "1000031.69", "1.000.000,12", "1,000,000.12", "0,50"] {
            let once = normalize(input).unwrap();
            let twice = normalize(&once.to_string());
            assert_eq!(twice, Some(once), "idempotence failure on {:?}", input);
        }
    }

    #[test]
    fn test_determinism_100_iterations() {
        let first = normalize("1.000.000,12");
        for i in 0..100 {
            assert_eq!(normalize("1.000.000,12"), first, "Determinism failure at iteration {}", i);
        }
    }
}
