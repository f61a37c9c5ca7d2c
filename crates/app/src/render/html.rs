//! Styled-document renderer — a self-contained HTML report.
//!
//! Full visual rendering: header, statistic cards, component tags, a
//! per-domain summary table, and per-entity cards. All hub-supplied text
//! is escaped before being embedded in markup.

use std::fmt::Write as _;

use hubscope_domain::snapshot::Snapshot;

use super::domains_by_count_desc;

const STYLE: &str = r"
body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
       max-width: 1200px; margin: 0 auto; padding: 20px; background: #f5f5f5; }
h1, h2, h3 { color: #03a9f4; }
.header { background: linear-gradient(135deg, #03a9f4 0%, #0288d1 100%);
          color: white; padding: 30px; border-radius: 10px; margin-bottom: 20px; }
.header h1 { color: white; }
.stats-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
              gap: 15px; margin-bottom: 20px; }
.stat-card { background: white; padding: 20px; border-radius: 8px;
             box-shadow: 0 2px 4px rgba(0,0,0,0.1); text-align: center; }
.stat-card h3 { margin: 0 0 10px 0; font-size: 14px; color: #666; }
.stat-card .number { font-size: 32px; font-weight: bold; color: #03a9f4; }
.section { background: white; padding: 20px; border-radius: 8px;
           box-shadow: 0 2px 4px rgba(0,0,0,0.1); margin-bottom: 20px; }
.entity-list { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
               gap: 10px; }
.entity-card { border: 1px solid #e0e0e0; padding: 15px; border-radius: 5px;
               background: #fafafa; }
.entity-card .id { font-weight: bold; color: #0288d1; margin-bottom: 5px; }
.entity-card .state { color: #4caf50; font-weight: bold; }
table { width: 100%; border-collapse: collapse; }
th, td { padding: 10px; text-align: left; border-bottom: 1px solid #e0e0e0; }
th { background: #03a9f4; color: white; }
.component-tag { display: inline-block; background: #e3f2fd; color: #0288d1;
                 padding: 5px 10px; margin: 5px; border-radius: 15px; font-size: 12px; }
";

/// Escape text for embedding into HTML element content or attributes.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn stat_card(out: &mut String, label: &str, value: usize) {
    let _ = write!(
        out,
        "<div class=\"stat-card\"><h3>{label}</h3><div class=\"number\">{value}</div></div>"
    );
}

/// Render the full styled HTML document.
#[must_use]
pub fn render(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    let info = &snapshot.system_info;
    let stats = &snapshot.statistics;
    let unknown = || "Unknown".to_string();

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"UTF-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    out.push_str("<title>Hub Overview</title>\n");
    let _ = writeln!(out, "<style>{STYLE}</style>");
    out.push_str("</head>\n<body>\n");

    // Header
    out.push_str("<div class=\"header\">\n<h1>Hub Overview</h1>\n");
    let _ = writeln!(
        out,
        "<p>Generated: {}</p>",
        snapshot.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    let _ = writeln!(
        out,
        "<p>Version: {} | Location: {}</p>",
        escape(&info.version.clone().unwrap_or_else(unknown)),
        escape(&info.location_name.clone().unwrap_or_else(unknown)),
    );
    out.push_str("</div>\n");

    // Statistics
    out.push_str("<div class=\"stats-grid\">\n");
    stat_card(&mut out, "Components", stats.total_components);
    stat_card(&mut out, "Entities", stats.total_entities);
    stat_card(&mut out, "Services", stats.total_services);
    stat_card(&mut out, "Domains", stats.total_domains);
    stat_card(&mut out, "Events", stats.total_events);
    out.push_str("\n</div>\n");

    // Components
    out.push_str("<div class=\"section\">\n<h2>Installed Components</h2>\n");
    for component in &snapshot.components {
        let _ = writeln!(
            out,
            "<span class=\"component-tag\">{}</span>",
            escape(component)
        );
    }
    out.push_str("</div>\n");

    // Entities by domain
    out.push_str("<div class=\"section\">\n<h2>Entities by Domain</h2>\n");
    out.push_str("<table>\n<thead><tr><th>Domain</th><th>Count</th></tr></thead>\n<tbody>\n");
    for (domain, count) in domains_by_count_desc(snapshot) {
        let _ = writeln!(
            out,
            "<tr><td><strong>{}</strong></td><td>{count}</td></tr>",
            escape(domain)
        );
    }
    out.push_str("</tbody>\n</table>\n</div>\n");

    // Detailed entities
    out.push_str("<div class=\"section\">\n<h2>All Entities</h2>\n");
    for (domain, entities) in &snapshot.detailed_entities {
        let _ = writeln!(
            out,
            "<h3>{} ({} entities)</h3>",
            escape(&domain.to_uppercase()),
            entities.len()
        );
        out.push_str("<div class=\"entity-list\">\n");
        for entity in entities {
            let _ = writeln!(
                out,
                "<div class=\"entity-card\"><div class=\"id\">{}</div><div>{}</div><div class=\"state\">State: {}</div></div>",
                escape(&entity.entity_id),
                escape(entity.display_name()),
                escape(&entity.state),
            );
        }
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n</body>\n</html>\n");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use hubscope_domain::entity::Entity;
    use hubscope_domain::system_info::SystemInfo;
    use hubscope_domain::time::now;

    fn snapshot_from(states: &str) -> Snapshot {
        let detailed: BTreeMap<String, Vec<Entity>> = serde_json::from_str(states).unwrap();
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
    fn should_emit_a_complete_document() {
        let html = render(&snapshot_from(
            r#"{"light":[{"entity_id":"light.kitchen","state":"on"}]}"#,
        ));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</html>\n"));
        assert!(html.contains("light.kitchen"));
    }

    #[test]
    fn should_escape_hub_supplied_markup() {
        let html = render(&snapshot_from(
            r#"{"light":[{"entity_id":"light.evil","state":"on",
                "attributes":{"friendly_name":"<script>alert(1)</script>"}}]}"#,
        ));
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn should_order_domain_table_by_descending_count() {
        let html = render(&snapshot_from(
            r#"{"light":[{"entity_id":"light.a","state":"on"}],
                "switch":[{"entity_id":"switch.a","state":"off"},
                          {"entity_id":"switch.b","state":"off"}]}"#,
        ));
        let switch_row = html.find("<strong>switch</strong>").unwrap();
        let light_row = html.find("<strong>light</strong>").unwrap();
        assert!(switch_row < light_row);
    }

    #[test]
    fn should_render_deterministically() {
        let snapshot = snapshot_from(r#"{"light":[{"entity_id":"light.a","state":"on"}]}"#);
        assert_eq!(render(&snapshot), render(&snapshot));
    }
}
