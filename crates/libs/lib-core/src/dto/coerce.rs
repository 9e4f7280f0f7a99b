//! # Field Coercion
//!
//! Pure conversions applied while building argument bundles. Number parsing is
//! lenient, as existing API clients expect:
//!
//! - [`parse_int`]: numbers are truncated; strings yield their leading integer
//!   (`"12abc"` → `12`, `" 0x1A"` → `26`); anything else is "not a number".
//! - [`parse_float`]: numbers pass through; strings yield their leading decimal
//!   (`"10.5 USD"` → `10.5`, `"1e3"` → `1000.0`).
//!
//! "Not a number" is `None` and reaches the database as JSON `null`, so the
//! procedure can reject it. Infinite values are also `None` because JSON has no
//! representation for them.
//!
//! Integers are `i64`. A string whose digits overflow `i64` (for example
//! `"99999999999999999999"`) is "not a number" here, where a JavaScript
//! `parseInt` would give an imprecise `1e20`; either way no row matches it.

use serde_json::Value;

/// Integer coercion of an arbitrary JSON value.
pub fn parse_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(truncate)),
        Value::String(s) => parse_int_str(s),
        _ => None,
    }
}

/// Integer coercion of raw text (path segments, string fields).
pub fn parse_int_str(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, unsigned) = split_sign(s);

    let (radix, digits) = match unsigned.get(..2) {
        Some("0x") | Some("0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_digit(radix))
        .map_or(digits.len(), |(i, _)| i);
    if end == 0 {
        return None;
    }

    let magnitude = i64::from_str_radix(&digits[..end], radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Float coercion of an arbitrary JSON value.
pub fn parse_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => parse_float_str(s),
        _ => None,
    }
}

/// Float coercion of raw text.
pub fn parse_float_str(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok().filter(|f| f.is_finite())
}

/// Truthiness of a JSON value, used for `field || default` style defaults.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn split_sign(s: &str) -> (bool, &str) {
    match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn truncate(f: f64) -> Option<i64> {
    if !f.is_finite() {
        return None;
    }
    let t = f.trunc();
    if t < i64::MIN as f64 || t > i64::MAX as f64 {
        return None;
    }
    Some(t as i64)
}

// region:    --- Tests
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn int_from_strings() {
        assert_eq!(parse_int_str("42"), Some(42));
        assert_eq!(parse_int_str("  -7"), Some(-7));
        assert_eq!(parse_int_str("+3"), Some(3));
        assert_eq!(parse_int_str("12abc"), Some(12));
        assert_eq!(parse_int_str("3.9"), Some(3));
        assert_eq!(parse_int_str("0x1A"), Some(26));
        assert_eq!(parse_int_str("abc"), None);
        assert_eq!(parse_int_str(""), None);
        assert_eq!(parse_int_str("-"), None);
        assert_eq!(parse_int_str("0x"), None);
    }

    #[test]
    fn int_overflow_is_not_a_number() {
        assert_eq!(parse_int_str("9223372036854775807"), Some(i64::MAX));
        assert_eq!(parse_int_str("99999999999999999999"), None);
        assert_eq!(parse_int(&json!("99999999999999999999")), None);
    }

    #[test]
    fn int_from_json_values() {
        assert_eq!(parse_int(&json!(7)), Some(7));
        assert_eq!(parse_int(&json!(7.9)), Some(7));
        assert_eq!(parse_int(&json!(-7.9)), Some(-7));
        assert_eq!(parse_int(&json!("99")), Some(99));
        assert_eq!(parse_int(&json!(null)), None);
        assert_eq!(parse_int(&json!(true)), None);
        assert_eq!(parse_int(&json!({ "id": 1 })), None);
    }

    #[test]
    fn float_from_strings() {
        assert_eq!(parse_float_str("10.5"), Some(10.5));
        assert_eq!(parse_float_str("10.5 USD"), Some(10.5));
        assert_eq!(parse_float_str(".5"), Some(0.5));
        assert_eq!(parse_float_str("5."), Some(5.0));
        assert_eq!(parse_float_str("-2.25"), Some(-2.25));
        assert_eq!(parse_float_str("1e3"), Some(1000.0));
        assert_eq!(parse_float_str("1e"), Some(1.0));
        assert_eq!(parse_float_str("1e+"), Some(1.0));
        assert_eq!(parse_float_str("."), None);
        assert_eq!(parse_float_str("abc"), None);
        assert_eq!(parse_float_str("Infinity"), None);
    }

    #[test]
    fn float_from_json_values() {
        assert_eq!(parse_float(&json!(100)), Some(100.0));
        assert_eq!(parse_float(&json!("12.75")), Some(12.75));
        assert_eq!(parse_float(&json!(null)), None);
        assert_eq!(parse_float(&json!([1])), None);
    }

    #[test]
    fn truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!(false)));
        assert!(is_truthy(&json!("savings")));
        assert!(is_truthy(&json!(5)));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn coercion_is_deterministic() {
        let inputs = [json!("12abc"), json!(3.5), json!("x"), json!(null)];
        for input in &inputs {
            assert_eq!(parse_int(input), parse_int(input));
            assert_eq!(parse_float(input), parse_float(input));
        }
    }
}
// endregion: --- Tests
