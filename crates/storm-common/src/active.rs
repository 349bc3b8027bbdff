//! Active storm list as published in NHC's `CurrentStorms.json`.

use serde::{Deserialize, Deserializer, Serialize};

/// Top-level `CurrentStorms.json` document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ActiveStorms {
    #[serde(default)]
    pub active_storms: Vec<ActiveStorm>,
}

impl ActiveStorms {
    /// Parse the upstream JSON and fill in derived classification labels.
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let mut storms: ActiveStorms = serde_json::from_slice(bytes)?;
        for storm in &mut storms.active_storms {
            storm.classification_label = storm
                .classification
                .as_deref()
                .map(|code| classification_label(code).to_string());
        }
        Ok(storms)
    }
}

/// One active storm entry.
///
/// NHC is inconsistent about quoting numeric fields, so intensity and pressure
/// accept either strings or numbers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ActiveStorm {
    pub id: String,

    #[serde(default)]
    pub bin_number: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub classification: Option<String>,

    #[serde(default, skip_deserializing)]
    pub classification_label: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub intensity: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub pressure: Option<String>,

    #[serde(default)]
    pub latitude: Option<String>,

    #[serde(default)]
    pub longitude: Option<String>,

    #[serde(default)]
    pub latitude_numeric: Option<f64>,

    #[serde(default)]
    pub longitude_numeric: Option<f64>,

    #[serde(default)]
    pub movement_dir: Option<i64>,

    #[serde(default)]
    pub movement_speed: Option<i64>,

    #[serde(default)]
    pub last_update: Option<String>,
}

/// Human-readable label for an NHC classification code.
pub fn classification_label(code: &str) -> &str {
    match code.trim().to_ascii_uppercase().as_str() {
        "HU" => "Hurricane",
        "TS" => "Tropical Storm",
        "TD" => "Tropical Depression",
        "STS" | "SS" => "Subtropical Storm",
        "SD" => "Subtropical Depression",
        "PTC" => "Post-Tropical Cyclone",
        "PC" => "Potential Tropical Cyclone",
        _ => code,
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "activeStorms": [
            {
                "id": "al092025",
                "binNumber": "AT4",
                "name": "Imelda",
                "classification": "HU",
                "intensity": "75",
                "pressure": 974,
                "latitude": "29.9N",
                "longitude": "74.9W",
                "latitudeNumeric": 29.9,
                "longitudeNumeric": -74.9,
                "movementDir": 60,
                "movementSpeed": 7,
                "lastUpdate": "2025-10-01T03:00:00.000Z",
                "publicAdvisory": { "advNum": "12" }
            }
        ]
    }"#;

    #[test]
    fn test_parse_current_storms() {
        let storms = ActiveStorms::from_json(SAMPLE.as_bytes()).unwrap();
        assert_eq!(storms.active_storms.len(), 1);

        let storm = &storms.active_storms[0];
        assert_eq!(storm.id, "al092025");
        assert_eq!(storm.intensity.as_deref(), Some("75"));
        assert_eq!(storm.pressure.as_deref(), Some("974"));
        assert_eq!(storm.classification_label.as_deref(), Some("Hurricane"));
        assert_eq!(storm.longitude_numeric, Some(-74.9));
    }

    #[test]
    fn test_empty_document() {
        let storms = ActiveStorms::from_json(b"{}").unwrap();
        assert!(storms.active_storms.is_empty());
    }

    #[test]
    fn test_classification_label_passthrough() {
        assert_eq!(classification_label("ts"), "Tropical Storm");
        assert_eq!(classification_label("XX"), "XX");
    }
}
