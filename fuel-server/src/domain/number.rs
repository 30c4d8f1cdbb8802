//! Lenient numeric parsing for upstream fields and query strings.
//!
//! The fuel-price dataset publishes numbers as strings with a decimal
//! comma (`"40,416"`), while other feeds use plain JSON numbers. Both are
//! accepted here. Absence is the only failure signal.

use serde_json::Value;

/// Parse a JSON value as a finite `f64`.
///
/// - `null` → `None`
/// - numbers → their value, if finite
/// - strings → see [`parse_flexible_str`]
/// - booleans, arrays and objects → `None`
pub fn parse_flexible_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => parse_flexible_str(s),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Parse a string as a finite `f64`, tolerating a decimal comma.
///
/// Surrounding whitespace is trimmed and the first `,` becomes `.`.
/// Empty strings and non-finite results (`"NaN"`, `"inf"`) are `None`.
///
/// # Examples
///
/// ```
/// use fuel_server::domain::parse_flexible_str;
///
/// assert_eq!(parse_flexible_str("40,416"), Some(40.416));
/// assert_eq!(parse_flexible_str(" -3.70 "), Some(-3.7));
/// assert_eq!(parse_flexible_str(""), None);
/// ```
pub fn parse_flexible_str(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = trimmed.replacen(',', ".", 1);
    normalized.parse::<f64>().ok().filter(|f| f.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decimal_comma() {
        assert_eq!(parse_flexible_number(&json!("40,416")), Some(40.416));
        assert_eq!(parse_flexible_number(&json!("-3,703889")), Some(-3.703889));
    }

    #[test]
    fn decimal_point_and_whitespace() {
        assert_eq!(parse_flexible_number(&json!("  1.5\t")), Some(1.5));
    }

    #[test]
    fn json_numbers() {
        assert_eq!(parse_flexible_number(&json!(42)), Some(42.0));
        assert_eq!(parse_flexible_number(&json!(-0.25)), Some(-0.25));
    }

    #[test]
    fn only_first_comma_is_replaced() {
        // becomes "1.234,5"
        assert_eq!(parse_flexible_str("1,234,5"), None);
    }

    #[test]
    fn absent_values() {
        assert_eq!(parse_flexible_number(&Value::Null), None);
        assert_eq!(parse_flexible_number(&json!("")), None);
        assert_eq!(parse_flexible_number(&json!("   ")), None);
        assert_eq!(parse_flexible_number(&json!(true)), None);
        assert_eq!(parse_flexible_number(&json!([1])), None);
        assert_eq!(parse_flexible_number(&json!({"v": 1})), None);
    }

    #[test]
    fn garbage_and_non_finite() {
        assert_eq!(parse_flexible_str("abc"), None);
        assert_eq!(parse_flexible_str("12km"), None);
        assert_eq!(parse_flexible_str("NaN"), None);
        assert_eq!(parse_flexible_str("inf"), None);
        assert_eq!(parse_flexible_str("-Infinity"), None);
        assert_eq!(parse_flexible_str("1e400"), None);
    }

    #[test]
    fn exponent_and_sign() {
        assert_eq!(parse_flexible_str("+2,5"), Some(2.5));
        assert_eq!(parse_flexible_str("1e3"), Some(1000.0));
    }
}
