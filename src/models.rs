//! Frontend Models
//!
//! Data structures matching the records API.

use serde::{Deserialize, Deserializer, Serialize};

/// Record fields in table column order. Also the ids of the form inputs.
pub const RECORD_FIELDS: [&str; 7] = [
    "plate",
    "color",
    "oil_date",
    "odometer",
    "oil_mileage",
    "make",
    "model",
];

/// One maintenance record as returned by `GET /api/records`
///
/// Every field is optional; falsy values (`null`, `""`, `0`, `false`) are
/// read as `None`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Record {
    #[serde(default, deserialize_with = "loose_text")]
    pub plate: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub oil_date: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub odometer: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub oil_mileage: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub make: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub model: Option<String>,
    /// Creation timestamp set by the backend (not shown in the table)
    #[serde(default, deserialize_with = "loose_text")]
    pub created_at: Option<String>,
}

impl Record {
    /// Cell texts in `RECORD_FIELDS` order, empty string for missing fields
    pub fn cells(&self) -> [String; 7] {
        [
            &self.plate,
            &self.color,
            &self.oil_date,
            &self.odometer,
            &self.oil_mileage,
            &self.make,
            &self.model,
        ]
        .map(|field| field.clone().unwrap_or_default())
    }
}

/// Body of `GET /api/records`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RowsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub rows: Option<Vec<Record>>,
}

/// Body of `POST /api/records`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewRecord {
    pub plate: String,
    pub color: String,
    pub oil_date: String,
    pub odometer: String,
    pub oil_mileage: String,
    pub make: String,
    pub model: String,
}

impl NewRecord {
    /// Build from a lookup keyed by `RECORD_FIELDS` names
    pub fn from_fn(mut value_of: impl FnMut(&str) -> String) -> Self {
        Self {
            plate: value_of("plate"),
            color: value_of("color"),
            oil_date: value_of("oil_date"),
            odometer: value_of("odometer"),
            oil_mileage: value_of("oil_mileage"),
            make: value_of("make"),
            model: value_of("model"),
        }
    }
}

/// Reply to `POST /api/records`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WriteResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseValue {
    Text(String),
    Number(f64),
    Flag(bool),
    Other(serde::de::IgnoredAny),
}

/// Accept whatever JSON scalar the backend stored and keep its text form.
fn loose_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LooseValue>::deserialize(deserializer)?;
    Ok(match value {
        Some(LooseValue::Text(text)) if !text.is_empty() => Some(text),
        Some(LooseValue::Number(n)) if n != 0.0 && !n.is_nan() => Some(n.to_string()),
        Some(LooseValue::Flag(true)) => Some("true".to_string()),
        _ => None,
    })
}
