//! Assistant-markdown renderer — exhaustive export for pasting into an
//! external assistant.
//!
//! Layout: intro header, system info, statistics, domain table (descending
//! count), full per-domain entity detail, installed components chunked five
//! per line, services grouped by domain and sorted by name, and a closing
//! usage-hints block.

use std::fmt::Write as _;

use hubscope_domain::snapshot::Snapshot;

use super::domains_by_count_desc;

/// Number of component names per markdown line.
const COMPONENTS_PER_LINE: usize = 5;

/// Render the assistant-markdown export.
#[must_use]
pub fn render(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    let info = &snapshot.system_info;
    let stats = &snapshot.statistics;
    let unknown = || "Unknown".to_string();

    out.push_str("# Hub Configuration Report\n\n");
    out.push_str(
        "This export contains the relevant information about my home-automation hub.\n\
         Use this data to help with questions, automations, and troubleshooting.\n\n",
    );

    out.push_str("## System Information\n\n");
    let _ = writeln!(out, "- **Version:** {}", info.version.clone().unwrap_or_else(unknown));
    let _ = writeln!(
        out,
        "- **Location:** {}",
        info.location_name.clone().unwrap_or_else(unknown)
    );
    let _ = writeln!(out, "- **Timezone:** {}", info.timezone.clone().unwrap_or_else(unknown));
    let _ = writeln!(out, "- **Units:** {}", info.unit_system_text().unwrap_or_else(unknown));
    out.push('\n');

    out.push_str("## Statistics\n\n");
    let _ = writeln!(out, "- **Components/integrations:** {}", stats.total_components);
    let _ = writeln!(out, "- **Total entities:** {}", stats.total_entities);
    let _ = writeln!(out, "- **Services:** {}", stats.total_services);
    let _ = writeln!(out, "- **Domains:** {}", stats.total_domains);
    let _ = writeln!(out, "- **Events:** {}", stats.total_events);
    out.push('\n');

    if !snapshot.entities_by_domain.is_empty() {
        out.push_str("## Entities by Domain\n\n");
        out.push_str("| Domain | Count |\n|--------|-------|\n");
        for (domain, count) in domains_by_count_desc(snapshot) {
            let _ = writeln!(out, "| {domain} | {count} |");
        }
        out.push('\n');
    }

    if !snapshot.detailed_entities.is_empty() {
        out.push_str("## All Entities (Details)\n\n");
        for (domain, entities) in &snapshot.detailed_entities {
            let _ = writeln!(out, "### {} ({} entities)", domain.to_uppercase(), entities.len());
            out.push('\n');
            for entity in entities {
                let device_info = entity
                    .device_class()
                    .map(|class| format!(" ({class})"))
                    .unwrap_or_default();
                let _ = writeln!(
                    out,
                    "- `{}`: **{}**{} = `{}`",
                    entity.entity_id,
                    entity.display_name(),
                    device_info,
                    entity.state,
                );
            }
            out.push('\n');
        }
    }

    if !snapshot.components.is_empty() {
        out.push_str("## Installed Components/Integrations\n\n");
        for chunk in snapshot.components.chunks(COMPONENTS_PER_LINE) {
            let line: Vec<String> = chunk.iter().map(|name| format!("`{name}`")).collect();
            let _ = writeln!(out, "- {}", line.join(", "));
        }
        out.push('\n');
    }

    if !snapshot.services.is_empty() {
        out.push_str("## Available Services\n\n");
        let mut groups: Vec<_> = snapshot.services.iter().collect();
        groups.sort_by(|a, b| a.domain.cmp(&b.domain));
        for group in groups {
            let _ = writeln!(out, "### {}", group.domain);
            for name in group.services.keys() {
                let _ = writeln!(out, "- `{}.{}`", group.domain, name);
            }
            out.push('\n');
        }
    }

    out.push_str("---\n\n## Usage Hints\n\n");
    out.push_str("With this data you can help me with:\n");
    out.push_str("- Creating automations (YAML for automations.yaml)\n");
    out.push_str("- Writing scripts\n");
    out.push_str("- Dashboard/Lovelace configurations\n");
    out.push_str("- Troubleshooting\n");
    out.push_str("- Finding entity ids for scenes and scripts\n");
    out.push_str("- Composing service calls\n\n");
    let _ = writeln!(
        out,
        "*Exported: {}*",
        snapshot.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use hubscope_domain::entity::Entity;
    use hubscope_domain::service::ServiceDomain;
    use hubscope_domain::system_info::SystemInfo;
    use hubscope_domain::time::now;

    fn snapshot(
        detailed_json: &str,
        components: Vec<String>,
        services_json: &str,
    ) -> Snapshot {
        let detailed: BTreeMap<String, Vec<Entity>> = serde_json::from_str(detailed_json).unwrap();
        let services: Vec<ServiceDomain> = serde_json::from_str(services_json).unwrap();
        Snapshot::assemble(now(), SystemInfo::default(), components, detailed, services, vec![])
    }

    fn bucket(domain: &str, count: usize) -> String {
        let entities: Vec<String> = (0..count)
            .map(|idx| format!(r#"{{"entity_id":"{domain}.e{idx}","state":"on"}}"#))
            .collect();
        format!(r#""{domain}":[{}]"#, entities.join(","))
    }

    #[test]
    fn should_sort_domain_table_by_descending_count() {
        let detailed = format!("{{{},{}}}", bucket("light", 5), bucket("switch", 12));
        let markdown = render(&snapshot(&detailed, vec![], "[]"));

        let switch_row = markdown.find("| switch | 12 |").unwrap();
        let light_row = markdown.find("| light | 5 |").unwrap();
        assert!(switch_row < light_row);
    }

    #[test]
    fn should_chunk_components_five_per_line() {
        let components = ["a", "b", "c", "d", "e", "f"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let markdown = render(&snapshot("{}", components, "[]"));

        assert!(markdown.contains("- `a`, `b`, `c`, `d`, `e`\n- `f`\n"));
    }

    #[test]
    fn should_detail_entities_with_name_class_and_state() {
        let detailed = r#"{"sensor":[{"entity_id":"sensor.temp","state":"21.5",
            "attributes":{"friendly_name":"Temperature","device_class":"temperature"}}]}"#;
        let markdown = render(&snapshot(detailed, vec![], "[]"));

        assert!(markdown.contains("### SENSOR (1 entities)"));
        assert!(markdown.contains("- `sensor.temp`: **Temperature** (temperature) = `21.5`"));
    }

    #[test]
    fn should_group_services_by_domain_sorted_by_name() {
        let services = r#"[{"domain":"switch","services":{"toggle":{}}},
                           {"domain":"light","services":{"turn_on":{},"toggle":{}}}]"#;
        let markdown = render(&snapshot("{}", vec![], services));

        let light_heading = markdown.find("### light").unwrap();
        let switch_heading = markdown.find("### switch").unwrap();
        assert!(light_heading < switch_heading);

        let toggle = markdown.find("- `light.toggle`").unwrap();
        let turn_on = markdown.find("- `light.turn_on`").unwrap();
        assert!(toggle < turn_on);
    }

    #[test]
    fn should_close_with_usage_hints_and_export_timestamp() {
        let markdown = render(&snapshot("{}", vec![], "[]"));
        assert!(markdown.contains("## Usage Hints"));
        assert!(markdown.contains("*Exported: "));
    }

    #[test]
    fn should_render_deterministically() {
        let detailed = format!("{{{}}}", bucket("light", 2));
        let snap = snapshot(&detailed, vec!["api".to_string()], "[]");
        assert_eq!(render(&snap), render(&snap));
    }
}
