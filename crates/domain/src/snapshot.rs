//! The report snapshot — the immutable aggregate of one report call.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::event::Event;
use crate::service::ServiceDomain;
use crate::system_info::SystemInfo;
use crate::time::Timestamp;

/// Aggregate counts derived at assembly time.
///
/// Renderers read these fields and never recompute them — that is the
/// cross-format consistency guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_components: usize,
    pub total_entities: usize,
    pub total_services: usize,
    pub total_domains: usize,
    pub total_events: usize,
}

/// The complete report for one generation call.
///
/// Constructed once via [`Snapshot::assemble`] and never mutated; every
/// derived field (per-domain counts, statistics) is computed there so the
/// following always holds:
///
/// - `statistics.total_entities` equals the summed lengths of
///   `detailed_entities` values
/// - `statistics.total_domains` equals the number of keys in both
///   `entities_by_domain` and `detailed_entities`
/// - `entities_by_domain[d]` equals `detailed_entities[d].len()` for every
///   domain `d`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// When this snapshot was assembled. Embedded here so repeated renders
    /// of the same snapshot are byte-identical.
    pub generated_at: Timestamp,
    pub system_info: SystemInfo,
    pub statistics: Statistics,
    /// Installed integration names, sorted.
    pub components: Vec<String>,
    /// Domain → entity count, derived from `detailed_entities`.
    pub entities_by_domain: BTreeMap<String, usize>,
    /// Domain → entities, in hub response order within each domain.
    pub detailed_entities: BTreeMap<String, Vec<Entity>>,
    /// Per-domain service groups, verbatim from the hub.
    pub services: Vec<ServiceDomain>,
    /// Event names, verbatim from the hub.
    pub events: Vec<Event>,
}

impl Snapshot {
    /// Assemble the snapshot from raw fetch results and classified entity
    /// buckets.
    ///
    /// Components are sorted here; `entities_by_domain` and every statistic
    /// are derived from the inputs in this one place.
    #[must_use]
    pub fn assemble(
        generated_at: Timestamp,
        system_info: SystemInfo,
        mut components: Vec<String>,
        detailed_entities: BTreeMap<String, Vec<Entity>>,
        services: Vec<ServiceDomain>,
        events: Vec<Event>,
    ) -> Self {
        components.sort_unstable();

        let entities_by_domain: BTreeMap<String, usize> = detailed_entities
            .iter()
            .map(|(domain, entities)| (domain.clone(), entities.len()))
            .collect();

        let statistics = Statistics {
            total_components: components.len(),
            total_entities: entities_by_domain.values().sum(),
            total_services: services.iter().map(ServiceDomain::service_count).sum(),
            total_domains: detailed_entities.len(),
            total_events: events.len(),
        };

        Self {
            generated_at,
            system_info,
            statistics,
            components,
            entities_by_domain,
            detailed_entities,
            services,
            events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::now;

    fn entity(entity_id: &str) -> Entity {
        Entity {
            entity_id: entity_id.to_string(),
            state: "on".to_string(),
            attributes: serde_json::Map::new(),
            last_changed: "t0".to_string(),
        }
    }

    fn buckets(pairs: &[(&str, &[&str])]) -> BTreeMap<String, Vec<Entity>> {
        pairs
            .iter()
            .map(|(domain, ids)| {
                (
                    (*domain).to_string(),
                    ids.iter().map(|id| entity(id)).collect(),
                )
            })
            .collect()
    }

    fn snapshot(detailed: BTreeMap<String, Vec<Entity>>) -> Snapshot {
        Snapshot::assemble(
            now(),
            SystemInfo::default(),
            vec![],
            detailed,
            vec![],
            vec![],
        )
    }

    #[test]
    fn should_derive_domain_counts_from_buckets() {
        let snap = snapshot(buckets(&[
            ("light", &["light.kitchen"]),
            ("sensor", &["sensor.temp"]),
        ]));

        assert_eq!(snap.entities_by_domain["light"], 1);
        assert_eq!(snap.entities_by_domain["sensor"], 1);
        assert_eq!(snap.statistics.total_entities, 2);
        assert_eq!(snap.statistics.total_domains, 2);
    }

    #[test]
    fn should_keep_counts_consistent_with_detail_lists() {
        let snap = snapshot(buckets(&[
            ("light", &["light.a", "light.b", "light.c"]),
            ("switch", &["switch.a"]),
        ]));

        let summed: usize = snap.detailed_entities.values().map(Vec::len).sum();
        assert_eq!(snap.statistics.total_entities, summed);
        assert_eq!(snap.statistics.total_domains, snap.entities_by_domain.len());
        assert_eq!(snap.statistics.total_domains, snap.detailed_entities.len());
        for (domain, count) in &snap.entities_by_domain {
            assert_eq!(*count, snap.detailed_entities[domain].len());
        }
    }

    #[test]
    fn should_sum_services_across_domains() {
        let services: Vec<ServiceDomain> = serde_json::from_str(
            r#"[{"domain":"light","services":{"turn_on":{},"turn_off":{}}},
                {"domain":"sensor","services":{}}]"#,
        )
        .unwrap();

        let snap = Snapshot::assemble(
            now(),
            SystemInfo::default(),
            vec![],
            BTreeMap::new(),
            services,
            vec![],
        );

        assert_eq!(snap.statistics.total_services, 2);
    }

    #[test]
    fn should_sort_components() {
        let snap = Snapshot::assemble(
            now(),
            SystemInfo::default(),
            vec!["zha".to_string(), "api".to_string(), "mqtt".to_string()],
            BTreeMap::new(),
            vec![],
            vec![],
        );

        assert_eq!(snap.components, ["api", "mqtt", "zha"]);
        assert_eq!(snap.statistics.total_components, 3);
    }

    #[test]
    fn should_count_events() {
        let events = vec![
            Event {
                event: "state_changed".to_string(),
            },
            Event {
                event: "service_registered".to_string(),
            },
        ];

        let snap = Snapshot::assemble(
            now(),
            SystemInfo::default(),
            vec![],
            BTreeMap::new(),
            vec![],
            events,
        );

        assert_eq!(snap.statistics.total_events, 2);
    }

    #[test]
    fn should_preserve_bucket_order_in_detail_lists() {
        let snap = snapshot(buckets(&[(
            "light",
            &["light.z", "light.a", "light.m"],
        )]));

        let ids: Vec<&str> = snap.detailed_entities["light"]
            .iter()
            .map(|ent| ent.entity_id.as_str())
            .collect();
        assert_eq!(ids, ["light.z", "light.a", "light.m"]);
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let snap = snapshot(buckets(&[("light", &["light.kitchen"])]));
        let json = serde_json::to_string(&snap).unwrap();
        let parsed: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snap);
    }
}
