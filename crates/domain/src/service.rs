//! Services exposed by the hub, grouped per domain.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One domain's set of callable services, as returned by the hub.
///
/// Service names are unique within a domain; the map keeps them sorted by
/// name, which is also the order renderers enumerate them in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDomain {
    pub domain: String,
    #[serde(default)]
    pub services: BTreeMap<String, Service>,
}

impl ServiceDomain {
    /// Number of services in this domain.
    #[must_use]
    pub fn service_count(&self) -> usize {
        self.services.len()
    }
}

/// A single callable service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_deserialize_wire_shape_with_empty_service_bodies() {
        let json = r#"{"domain":"light","services":{"turn_on":{},"turn_off":{"description":"Turn the light off"}}}"#;
        let group: ServiceDomain = serde_json::from_str(json).unwrap();

        assert_eq!(group.domain, "light");
        assert_eq!(group.service_count(), 2);
        assert_eq!(group.services["turn_on"].description, None);
        assert_eq!(
            group.services["turn_off"].description.as_deref(),
            Some("Turn the light off")
        );
    }

    #[test]
    fn should_count_zero_services_for_empty_domain() {
        let group: ServiceDomain =
            serde_json::from_str(r#"{"domain":"sensor","services":{}}"#).unwrap();
        assert_eq!(group.service_count(), 0);
    }

    #[test]
    fn should_iterate_services_sorted_by_name() {
        let json = r#"{"domain":"light","services":{"turn_on":{},"toggle":{},"turn_off":{}}}"#;
        let group: ServiceDomain = serde_json::from_str(json).unwrap();
        let names: Vec<&String> = group.services.keys().collect();
        assert_eq!(names, ["toggle", "turn_off", "turn_on"]);
    }
}
