use chrono::{DateTime, Duration, Utc};
use serde_json::Value;
use std::collections::BTreeMap;
use uuid::Uuid;

use trailhound_types::TrainingSession;

/// Deterministic dog id for test data. `dog_id(1)` is always the same dog.
pub fn dog_id(n: u32) -> Uuid {
    Uuid::from_u128(n as u128)
}

fn base_time() -> DateTime<Utc> {
    "2024-03-01T08:00:00Z".parse().expect("valid fixture time")
}

/// Start building a session for `dog` with the given result text.
pub fn session(dog: Uuid, result: &str) -> SessionBuilder {
    SessionBuilder {
        dog_id: dog,
        result: result.to_string(),
        offset_minutes: 0,
        duration_s: Value::from(60),
        conditions: BTreeMap::new(),
        kind: BTreeMap::new(),
    }
}

/// Builder for [`TrainingSession`] fixtures.
pub struct SessionBuilder {
    dog_id: Uuid,
    result: String,
    offset_minutes: i64,
    duration_s: Value,
    conditions: BTreeMap<String, Value>,
    kind: BTreeMap<String, Value>,
}

impl SessionBuilder {
    /// Shift the start time to keep multiple fixtures in a known order.
    pub fn minutes_after_base(mut self, minutes: i64) -> Self {
        self.offset_minutes = minutes;
        self
    }

    pub fn duration(mut self, value: impl Into<Value>) -> Self {
        self.duration_s = value.into();
        self
    }

    /// Set one conditions-map entry; accepts numbers, strings, anything
    /// JSON, to mirror the backend's untyped column.
    pub fn condition(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.conditions.insert(key.to_string(), value.into());
        self
    }

    pub fn scent(mut self, label: &str) -> Self {
        self.kind.insert("scent".to_string(), Value::from(label));
        self
    }

    pub fn build(self) -> TrainingSession {
        TrainingSession {
            id: Uuid::new_v4(),
            dog_id: self.dog_id,
            result: self.result,
            started_at: base_time() + Duration::minutes(self.offset_minutes),
            duration_s: self.duration_s,
            conditions: self.conditions,
            kind: self.kind,
        }
    }
}
