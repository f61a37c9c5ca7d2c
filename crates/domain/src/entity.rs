//! Entity — a single observable or controllable point exposed by the hub.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entity state as returned by the hub's state list.
///
/// The attribute map is carried verbatim; only the optional human-readable
/// name and device classification are interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Identifier of the form `<domain>.<object>`.
    pub entity_id: String,
    /// Current state value, kept as the raw string the hub reported.
    pub state: String,
    /// Heterogeneous attribute map (string keys, arbitrary JSON values).
    #[serde(default)]
    pub attributes: Map<String, Value>,
    /// Raw `last_changed` timestamp string, verbatim from the hub.
    #[serde(default)]
    pub last_changed: String,
}

impl Entity {
    /// Domain prefix of the identifier (`light` for `light.kitchen`).
    ///
    /// Returns `None` for malformed identifiers: no `.` separator, or an
    /// empty domain segment.
    #[must_use]
    pub fn domain(&self) -> Option<&str> {
        match self.entity_id.split_once('.') {
            Some((domain, _)) if !domain.is_empty() => Some(domain),
            _ => None,
        }
    }

    /// Human-readable name attribute, when the hub provides one.
    #[must_use]
    pub fn friendly_name(&self) -> Option<&str> {
        self.attributes.get("friendly_name").and_then(Value::as_str)
    }

    /// Device classification attribute (`temperature`, `motion`, …).
    #[must_use]
    pub fn device_class(&self) -> Option<&str> {
        self.attributes.get("device_class").and_then(Value::as_str)
    }

    /// Friendly name, falling back to the identifier.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.friendly_name().unwrap_or(&self.entity_id)
    }
}
