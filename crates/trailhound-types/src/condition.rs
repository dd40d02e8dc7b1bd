use serde::{Deserialize, Serialize};

/// Environmental measurement recorded with a training session.
///
/// Exactly these four keys are aggregated; any other entry in a session's
/// conditions map is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionKey {
    Temp,
    Wind,
    Press,
    Hum,
}

impl ConditionKey {
    pub const ALL: [ConditionKey; 4] = [
        ConditionKey::Temp,
        ConditionKey::Wind,
        ConditionKey::Press,
        ConditionKey::Hum,
    ];

    /// Column name as it appears in the backend's conditions map.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionKey::Temp => "temp",
            ConditionKey::Wind => "wind",
            ConditionKey::Press => "press",
            ConditionKey::Hum => "hum",
        }
    }

    /// Human-readable label with unit, for chart headings.
    pub fn label(&self) -> &'static str {
        match self {
            ConditionKey::Temp => "Temperature (°C)",
            ConditionKey::Wind => "Wind (m/s)",
            ConditionKey::Press => "Pressure (hPa)",
            ConditionKey::Hum => "Humidity (%)",
        }
    }
}

impl std::fmt::Display for ConditionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
