// Zone domain models
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Zone {
    pub zone_id: String,
    pub name: String,
}

impl Zone {
    pub fn new(zone_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            zone_id: zone_id.into(),
            name: name.into(),
        }
    }
}

/// Current state of a zone as reported by the backend.
///
/// Temperatures the server omits, nulls out, or sends as anything other than
/// a JSON number decode as `None` and render as a placeholder.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ZoneStatus {
    pub name: String,
    #[serde(default, deserialize_with = "lenient_temperature")]
    pub current_temp: Option<f64>,
    #[serde(default, deserialize_with = "lenient_temperature")]
    pub recommended_temp: Option<f64>,
}

impl ZoneStatus {
    pub fn new(name: impl Into<String>, current_temp: Option<f64>, recommended_temp: Option<f64>) -> Self {
        Self {
            name: name.into(),
            current_temp,
            recommended_temp,
        }
    }
}

pub const TEMPERATURE_PLACEHOLDER: &str = "...";

/// Format a temperature with one decimal, or the placeholder when unknown
pub fn format_temperature(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.1}", v),
        _ => TEMPERATURE_PLACEHOLDER.to_string(),
    }
}

fn lenient_temperature<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_f64()))
}
