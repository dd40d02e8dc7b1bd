use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::condition::ConditionKey;
use crate::util::lenient_f64;

/// Scent label used when a session's type map carries none.
pub const UNKNOWN_SCENT: &str = "unknown";

/// One training session row as fetched from the backend.
///
/// The `conditions` and `type` columns are free-form JSON maps filled in by
/// hand, so they stay untyped here; the accessor methods are the validated
/// boundary everything downstream goes through. Rows are immutable once
/// fetched — the aggregation pipeline only ever borrows them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingSession {
    pub id: Uuid,
    pub dog_id: Uuid,
    /// Free-text outcome; case-insensitive "success" marks a hit.
    #[serde(default)]
    pub result: String,
    pub started_at: DateTime<Utc>,
    /// Duration in seconds, numeric or numeric-string.
    #[serde(default)]
    pub duration_s: Value,
    #[serde(default)]
    pub conditions: BTreeMap<String, Value>,
    /// Session type map; the "scent" entry labels the training substance.
    #[serde(rename = "type", default)]
    pub kind: BTreeMap<String, Value>,
}

impl TrainingSession {
    /// Classify this session's outcome. Total over any result text:
    /// anything that is not (case-insensitively) "success" is a failure.
    /// No trimming — "success " with trailing whitespace does not match.
    pub fn is_success(&self) -> bool {
        self.result.eq_ignore_ascii_case("success")
    }

    /// Finite numeric value of one environmental condition, if present
    /// and parseable. Absent means excluded from aggregates, never zero.
    pub fn condition_value(&self, key: ConditionKey) -> Option<f64> {
        self.conditions.get(key.as_str()).and_then(lenient_f64)
    }

    /// Session duration in seconds, with the same lenient coercion as
    /// condition values.
    pub fn duration_secs(&self) -> Option<f64> {
        lenient_f64(&self.duration_s)
    }

    /// Scent category label, defaulting to [`UNKNOWN_SCENT`] when the type
    /// map has no usable "scent" entry.
    pub fn scent(&self) -> String {
        match self.kind.get("scent") {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            _ => UNKNOWN_SCENT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn session(result: &str, conditions: serde_json::Value) -> TrainingSession {
        serde_json::from_value(json!({
            "id": "2f5e9a1c-6d3b-4f7a-8e0c-1a2b3c4d5e6f",
            "dog_id": "7b9f1f3e-8a64-4a0e-9a5f-0c1d2e3f4a5b",
            "result": result,
            "started_at": "2024-03-05T09:30:00Z",
            "duration_s": 42,
            "conditions": conditions,
            "type": {"scent": "tobacco"}
        }))
        .unwrap()
    }

    #[test]
    fn test_classifier_is_case_insensitive() {
        assert!(session("success", json!({})).is_success());
        assert!(session("SUCCESS", json!({})).is_success());
        assert!(session("Success", json!({})).is_success());
    }

    #[test]
    fn test_classifier_does_not_trim() {
        assert!(!session("success ", json!({})).is_success());
        assert!(!session(" success", json!({})).is_success());
    }

    #[test]
    fn test_classifier_rejects_everything_else() {
        assert!(!session("fail", json!({})).is_success());
        assert!(!session("", json!({})).is_success());
        assert!(!session("successful", json!({})).is_success());
    }

    #[test]
    fn test_condition_value_coercion() {
        let s = session("success", json!({"temp": "21.5", "wind": 3, "hum": "soggy"}));
        assert_eq!(s.condition_value(ConditionKey::Temp), Some(21.5));
        assert_eq!(s.condition_value(ConditionKey::Wind), Some(3.0));
        assert_eq!(s.condition_value(ConditionKey::Hum), None);
        assert_eq!(s.condition_value(ConditionKey::Press), None);
    }

    #[test]
    fn test_scent_defaults_to_unknown() {
        let mut s = session("success", json!({}));
        assert_eq!(s.scent(), "tobacco");
        s.kind.clear();
        assert_eq!(s.scent(), UNKNOWN_SCENT);
        s.kind.insert("scent".into(), json!(17));
        assert_eq!(s.scent(), UNKNOWN_SCENT);
    }

    #[test]
    fn test_row_tolerates_missing_optional_columns() {
        let row = json!({
            "id": "2f5e9a1c-6d3b-4f7a-8e0c-1a2b3c4d5e6f",
            "dog_id": "7b9f1f3e-8a64-4a0e-9a5f-0c1d2e3f4a5b",
            "started_at": "2024-03-05T09:30:00Z"
        });
        let s: TrainingSession = serde_json::from_value(row).unwrap();
        assert!(!s.is_success());
        assert_eq!(s.duration_secs(), None);
        assert_eq!(s.scent(), UNKNOWN_SCENT);
    }
}
