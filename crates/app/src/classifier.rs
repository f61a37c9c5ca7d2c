//! Entity classifier — partitions the flat state list by domain prefix.

use std::collections::BTreeMap;

use hubscope_domain::entity::Entity;

/// Group entities by the domain prefix of their identifier.
///
/// Input order is preserved within each bucket (hub response order).
/// Entities with a malformed identifier — no `.` separator, or an empty
/// domain segment — are skipped with a warning rather than aborting the
/// report; they do not appear in any bucket and therefore never count
/// toward the snapshot statistics.
#[must_use]
pub fn classify(entities: Vec<Entity>) -> BTreeMap<String, Vec<Entity>> {
    let mut by_domain: BTreeMap<String, Vec<Entity>> = BTreeMap::new();

    for entity in entities {
        match entity.domain() {
            Some(domain) => {
                let domain = domain.to_string();
                by_domain.entry(domain).or_default().push(entity);
            }
            None => {
                tracing::warn!(
                    entity_id = %entity.entity_id,
                    "skipping entity with malformed identifier"
                );
            }
        }
    }

    by_domain
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(entity_id: &str) -> Entity {
        Entity {
            entity_id: entity_id.to_string(),
            state: "on".to_string(),
            attributes: serde_json::Map::new(),
            last_changed: String::new(),
        }
    }

    #[test]
    fn should_group_entities_by_domain_prefix() {
        let buckets = classify(vec![entity("light.kitchen"), entity("sensor.temp")]);

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets["light"].len(), 1);
        assert_eq!(buckets["sensor"].len(), 1);
    }

    #[test]
    fn should_preserve_input_order_within_a_bucket() {
        let buckets = classify(vec![
            entity("light.z"),
            entity("sensor.temp"),
            entity("light.a"),
            entity("light.m"),
        ]);

        let ids: Vec<&str> = buckets["light"]
            .iter()
            .map(|ent| ent.entity_id.as_str())
            .collect();
        assert_eq!(ids, ["light.z", "light.a", "light.m"]);
    }

    #[test]
    fn should_skip_malformed_identifiers_without_aborting() {
        let buckets = classify(vec![
            entity("light.kitchen"),
            entity("malformed"),
            entity(".orphan"),
            entity("sensor.temp"),
        ]);

        assert_eq!(buckets.len(), 2);
        let total: usize = buckets.values().map(Vec::len).sum();
        assert_eq!(total, 2);
    }

    #[test]
    fn should_not_deduplicate_repeated_identifiers() {
        let buckets = classify(vec![entity("light.kitchen"), entity("light.kitchen")]);
        assert_eq!(buckets["light"].len(), 2);
    }

    #[test]
    fn should_return_empty_map_for_empty_input() {
        assert!(classify(vec![]).is_empty());
    }

    #[test]
    fn should_be_idempotent_over_already_classified_entities() {
        let first = classify(vec![
            entity("light.b"),
            entity("light.a"),
            entity("switch.plug"),
        ]);

        let flattened: Vec<Entity> = first.values().flatten().cloned().collect();
        let second = classify(flattened);

        assert_eq!(second, first);
    }
}
