use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Dog record as stored by the backend.
///
/// Read-only on the client side; creation goes through [`NewDog`] and the
/// backend assigns `id` and `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dog {
    pub id: Uuid,
    /// Short human-assigned handle (e.g. "RX-07"), unique per kennel.
    pub dog_code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

/// Creation payload for the dogs table. Admin-only; the backend enforces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDog {
    pub dog_code: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dog_tolerates_sparse_row() {
        let row = serde_json::json!({
            "id": "7b9f1f3e-8a64-4a0e-9a5f-0c1d2e3f4a5b",
            "dog_code": "RX-07",
            "name": "Nero",
            "created_at": "2024-03-01T08:00:00Z"
        });
        let dog: Dog = serde_json::from_value(row).unwrap();
        assert_eq!(dog.dog_code, "RX-07");
        assert!(dog.active);
        assert!(dog.breed.is_none());
    }

    #[test]
    fn test_new_dog_omits_empty_optionals() {
        let dog = NewDog {
            dog_code: "RX-08".into(),
            name: "Arya".into(),
            breed: None,
            sex: None,
            birthdate: None,
            notes: None,
            active: true,
        };
        let json = serde_json::to_value(&dog).unwrap();
        assert!(json.get("breed").is_none());
        assert_eq!(json["active"], serde_json::json!(true));
    }
}
