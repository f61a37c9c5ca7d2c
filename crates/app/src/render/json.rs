//! Structured-data renderer — lossless JSON export of the snapshot.

use hubscope_domain::error::HubScopeError;
use hubscope_domain::snapshot::Snapshot;

/// Serialize the full snapshot as pretty-printed JSON.
///
/// Nothing is reduced or reordered beyond the snapshot's own field layout,
/// so the output parses back into an equivalent snapshot.
///
/// # Errors
///
/// Returns [`HubScopeError::Serialize`] if serialization fails.
pub fn render(snapshot: &Snapshot) -> Result<String, HubScopeError> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use hubscope_domain::entity::Entity;
    use hubscope_domain::system_info::SystemInfo;
    use hubscope_domain::time::now;

    fn sample() -> Snapshot {
        let mut detailed: BTreeMap<String, Vec<Entity>> = BTreeMap::new();
        detailed.insert(
            "light".to_string(),
            serde_json::from_str(
                r#"[{"entity_id":"light.kitchen","state":"on","attributes":{"friendly_name":"Kitchen"},"last_changed":"t0"}]"#,
            )
            .unwrap(),
        );
        Snapshot::assemble(
            now(),
            SystemInfo::default(),
            vec!["api".to_string()],
            detailed,
            vec![],
            vec![],
        )
    }

    #[test]
    fn should_roundtrip_to_an_equivalent_snapshot() {
        let snapshot = sample();
        let json = render(&snapshot).unwrap();
        let parsed: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn should_render_deterministically() {
        let snapshot = sample();
        assert_eq!(render(&snapshot).unwrap(), render(&snapshot).unwrap());
    }

    #[test]
    fn should_expose_every_top_level_field() {
        let json = render(&sample()).unwrap();
        for field in [
            "generated_at",
            "system_info",
            "statistics",
            "components",
            "entities_by_domain",
            "detailed_entities",
            "services",
            "events",
        ] {
            assert!(json.contains(field), "missing field {field}");
        }
    }
}
