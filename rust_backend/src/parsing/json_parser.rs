use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::core::{DataLoadError, LaunchRecord, OutcomeClass};

/// Custom deserializer that accepts a number, a numeric string or a boolean
/// for the outcome class flag
fn deserialize_outcome_class<'de, D>(deserializer: D) -> Result<OutcomeClass, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum FlagRepr {
        Bool(bool),
        Number(f64),
        String(String),
    }

    let value = match FlagRepr::deserialize(deserializer)? {
        FlagRepr::Bool(b) => return Ok(if b { OutcomeClass::Success } else { OutcomeClass::Failure }),
        FlagRepr::Number(n) => n,
        FlagRepr::String(s) => s.trim().parse::<f64>().map_err(D::Error::custom)?,
    };

    OutcomeClass::from_value(value)
        .ok_or_else(|| D::Error::custom(format!("expected 0 or 1, got {}", value)))
}

/// Custom deserializer that accepts either a number or a numeric string for
/// the payload mass
fn deserialize_payload<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s.trim().parse::<f64>().map_err(D::Error::custom),
    }
}

/// Raw JSON structure for one launch record
#[derive(Debug, Deserialize)]
struct JsonLaunch {
    #[serde(alias = "Launch Site")]
    site: String,
    #[serde(alias = "Payload Mass (kg)", deserialize_with = "deserialize_payload")]
    payload_mass_kg: f64,
    #[serde(
        rename = "class",
        alias = "outcome_class",
        deserialize_with = "deserialize_outcome_class"
    )]
    outcome_class: OutcomeClass,
    #[serde(alias = "Booster Version", default)]
    booster_version: String,
}

impl From<JsonLaunch> for LaunchRecord {
    fn from(raw: JsonLaunch) -> Self {
        LaunchRecord::new(
            raw.site.trim(),
            raw.payload_mass_kg,
            raw.outcome_class,
            raw.booster_version.trim(),
        )
    }
}

/// Parse launch records from a JSON file
pub fn parse_launch_json(json_path: &Path) -> Result<Vec<LaunchRecord>, DataLoadError> {
    let content = fs::read_to_string(json_path).map_err(|source| DataLoadError::Io {
        path: json_path.to_path_buf(),
        source,
    })?;
    parse_launch_json_str(&content)
}

/// Parse launch records from a JSON string.
///
/// Accepts a bare array of records or an object with a `launches` array.
/// Errors carry the JSON path of the offending field, e.g. `[3].class`.
pub fn parse_launch_json_str(json_str: &str) -> Result<Vec<LaunchRecord>, DataLoadError> {
    let value: Value = serde_json::from_str(json_str).map_err(|e| DataLoadError::Json {
        path: ".".to_string(),
        message: e.to_string(),
    })?;

    let (prefix, records) = match value {
        Value::Object(mut map) => match map.remove("launches") {
            Some(launches) => ("launches", launches),
            None => {
                return Err(DataLoadError::Json {
                    path: ".".to_string(),
                    message: "expected an array of launches or an object with a 'launches' key"
                        .to_string(),
                })
            }
        },
        other => ("", other),
    };

    let raw: Vec<JsonLaunch> = serde_path_to_error::deserialize(records).map_err(|e| {
        let inner = e.path().to_string();
        DataLoadError::Json {
            path: if prefix.is_empty() {
                inner
            } else {
                format!("{}{}", prefix, inner)
            },
            message: e.into_inner().to_string(),
        }
    })?;

    Ok(raw.into_iter().map(LaunchRecord::from).collect())
}
