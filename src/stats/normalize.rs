//! Percentage coercion.
//!
//! Every input maps to a number; nothing here can fail. Bad text degrades to `0`
//! so a chart can always be drawn.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::RawRate;

static NON_NUMERIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9.]").expect("static pattern"));

/// Coerce a raw rate to a number. Absent input and NaN are `0`; other numbers pass
/// through unchanged.
pub fn normalize(raw: Option<&RawRate>) -> f64 {
    match raw {
        None => 0.0,
        Some(RawRate::Number(value)) if value.is_nan() => 0.0,
        Some(RawRate::Number(value)) => *value,
        Some(RawRate::Text(text)) => normalize_str(text),
    }
}

/// Strip everything except digits and `.`, then read the leading number.
pub fn normalize_str(text: &str) -> f64 {
    if text.is_empty() { return 0.0 }
    let stripped = NON_NUMERIC.replace_all(text, "");
    leading_float(&stripped).unwrap_or(0.0)
}

/// `s` holds only digits and dots here; the number ends at the second dot.
fn leading_float(s: &str) -> Option<f64> {
    let end = s.match_indices('.').nth(1).map_or(s.len(), |(i, _)| i);
    let prefix = &s[..end];
    if !prefix.bytes().any(|b| b.is_ascii_digit()) { return None }
    prefix.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> RawRate { RawRate::Text(s.to_string()) }

    #[test]
    fn decorated_text() {
        assert_eq!(normalize(Some(&text("43%"))), 43.0);
        assert_eq!(normalize(Some(&text(" 7.25 % "))), 7.25);
        assert_eq!(normalize(Some(&text("rate: 12"))), 12.0);
    }

    #[test]
    fn empty_and_missing_are_zero() {
        assert_eq!(normalize(None), 0.0);
        assert_eq!(normalize(Some(&text(""))), 0.0);
        assert_eq!(normalize(Some(&text("%"))), 0.0);
        assert_eq!(normalize(Some(&text("."))), 0.0);
        assert_eq!(normalize(Some(&text("n/a"))), 0.0);
    }

    #[test]
    fn numbers_pass_through() {
        assert_eq!(normalize(Some(&RawRate::Number(12.5))), 12.5);
        assert_eq!(normalize(Some(&RawRate::Number(0.0))), 0.0);
        assert_eq!(normalize(Some(&RawRate::Number(140.0))), 140.0);
        assert_eq!(normalize(Some(&RawRate::Number(-3.0))), -3.0);
    }

    #[test]
    fn nan_is_zero() {
        assert_eq!(normalize(Some(&RawRate::Number(f64::NAN))), 0.0);
        assert_eq!(normalize(Some(&RawRate::Number(-f64::NAN))), 0.0);
    }

    #[test]
    fn idempotent_on_numbers() {
        for value in [0.0, 1.5, 43.0, 99.99, 250.0] {
            let once = normalize(Some(&RawRate::Number(value)));
            let twice = normalize(Some(&RawRate::Number(once)));
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn reads_leading_number_only() {
        assert_eq!(normalize_str("1.2.3"), 1.2);
        assert_eq!(normalize_str(".5%"), 0.5);
        assert_eq!(normalize_str("5.%"), 5.0);
        // sign is stripped with the other decorations
        assert_eq!(normalize_str("-5%"), 5.0);
    }
}
