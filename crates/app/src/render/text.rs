//! Plain-text renderer — condensed human summary.
//!
//! Intentionally lossy: system info header and top-line statistics only,
//! no per-entity detail.

use std::fmt::Write as _;

use hubscope_domain::snapshot::Snapshot;

const RULE: &str =
    "================================================================================";
const THIN: &str =
    "--------------------------------------------------------------------------------";

/// Render the condensed plain-text summary.
#[must_use]
pub fn render(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    let unknown = || "Unknown".to_string();

    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "HUB OVERVIEW REPORT");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(
        out,
        "Generated: {}",
        snapshot.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out);

    let info = &snapshot.system_info;
    let _ = writeln!(out, "SYSTEM");
    let _ = writeln!(out, "{THIN}");
    let _ = writeln!(out, "Version:      {}", info.version.clone().unwrap_or_else(unknown));
    let _ = writeln!(out, "Location:     {}", info.location_name.clone().unwrap_or_else(unknown));
    let _ = writeln!(out, "Timezone:     {}", info.timezone.clone().unwrap_or_else(unknown));
    let _ = writeln!(out, "Unit system:  {}", info.unit_system_text().unwrap_or_else(unknown));
    let _ = writeln!(out);

    let stats = &snapshot.statistics;
    let _ = writeln!(out, "STATISTICS");
    let _ = writeln!(out, "{THIN}");
    let _ = writeln!(out, "Components:   {}", stats.total_components);
    let _ = writeln!(out, "Entities:     {}", stats.total_entities);
    let _ = writeln!(out, "Services:     {}", stats.total_services);
    let _ = writeln!(out, "Domains:      {}", stats.total_domains);
    let _ = writeln!(out, "Events:       {}", stats.total_events);

    out
}
