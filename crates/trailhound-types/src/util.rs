use serde_json::Value;

/// Coerce a JSON value into a finite f64.
///
/// Backend rows mix numeric and numeric-string entries for the same column
/// (hand-typed data entry). Numbers pass through, strings are parsed, and
/// anything else — or a NaN/infinite result — is `None` so the caller can
/// exclude the row from aggregates instead of polluting them with zeros.
pub fn lenient_f64(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_number_passes_through() {
        assert_eq!(lenient_f64(&json!(21.5)), Some(21.5));
        assert_eq!(lenient_f64(&json!(-3)), Some(-3.0));
    }

    #[test]
    fn test_numeric_string_is_parsed() {
        assert_eq!(lenient_f64(&json!("18.2")), Some(18.2));
        assert_eq!(lenient_f64(&json!("-0.5")), Some(-0.5));
    }

    #[test]
    fn test_garbage_is_absent() {
        assert_eq!(lenient_f64(&json!("not-a-number")), None);
        assert_eq!(lenient_f64(&json!("")), None);
        assert_eq!(lenient_f64(&json!(null)), None);
        assert_eq!(lenient_f64(&json!(true)), None);
        assert_eq!(lenient_f64(&json!({"nested": 1})), None);
    }

    #[test]
    fn test_non_finite_is_absent() {
        assert_eq!(lenient_f64(&json!("NaN")), None);
        assert_eq!(lenient_f64(&json!("inf")), None);
    }
}
