//! System metadata copied verbatim from the hub configuration.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Hub configuration fields carried into the report.
///
/// Every field is optional — a hub that omits one simply renders as
/// "Unknown" downstream. `unit_system` is kept as raw JSON since hubs
/// report it either as a string or as a structured object.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemInfo {
    pub version: Option<String>,
    pub location_name: Option<String>,
    #[serde(alias = "time_zone")]
    pub timezone: Option<String>,
    pub unit_system: Value,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl SystemInfo {
    /// `unit_system` as display text: plain strings are unwrapped, other
    /// JSON shapes are rendered compactly, and absent values yield `None`.
    #[must_use]
    pub fn unit_system_text(&self) -> Option<String> {
        match &self.unit_system {
            Value::Null => None,
            Value::String(text) => Some(text.clone()),
            other => Some(other.to_string()),
        }
    }
}
