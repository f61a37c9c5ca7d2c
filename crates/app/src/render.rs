//! Renderers — pure functions turning a snapshot into a textual artifact.
//!
//! Every renderer reads the snapshot's precomputed fields and never
//! recomputes a statistic, so all four formats report identical totals.
//! Rendering is deterministic: the same snapshot renders byte-identically
//! (the generation timestamp lives in the snapshot, not in the renderer).

pub mod html;
pub mod json;
pub mod markdown;
pub mod text;

use std::str::FromStr;

use hubscope_domain::error::HubScopeError;
use hubscope_domain::snapshot::Snapshot;

/// The closed set of report output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Lossless structured export of the full snapshot.
    Json,
    /// Condensed human summary (header plus top-line statistics).
    Text,
    /// Styled HTML document with per-domain tables and entity cards.
    Html,
    /// Exhaustive markdown export tuned for pasting into an assistant.
    Markdown,
}

/// The requested format name did not match any known format.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown report format: {0}")]
pub struct UnknownFormat(pub String);

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            "txt" | "text" => Ok(Self::Text),
            "html" => Ok(Self::Html),
            // "claude" is the format key the original web UI submitted
            "md" | "markdown" | "claude" => Ok(Self::Markdown),
            other => Err(UnknownFormat(other.to_string())),
        }
    }
}

impl Format {
    /// Render `snapshot` in this format.
    ///
    /// # Errors
    ///
    /// Returns [`HubScopeError::Serialize`] if the structured export fails
    /// to serialize; the textual formats are infallible.
    pub fn render(self, snapshot: &Snapshot) -> Result<String, HubScopeError> {
        match self {
            Self::Json => json::render(snapshot),
            Self::Text => Ok(text::render(snapshot)),
            Self::Html => Ok(html::render(snapshot)),
            Self::Markdown => Ok(markdown::render(snapshot)),
        }
    }

    /// MIME type for serving this format over HTTP.
    #[must_use]
    pub fn content_type(self) -> &'static str {
        match self {
            Self::Json => "application/json; charset=utf-8",
            Self::Text => "text/plain; charset=utf-8",
            Self::Html => "text/html; charset=utf-8",
            Self::Markdown => "text/markdown; charset=utf-8",
        }
    }

    /// File extension for download filenames.
    #[must_use]
    pub fn file_extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "txt",
            Self::Html => "html",
            Self::Markdown => "md",
        }
    }
}

/// Domains paired with their entity counts, ordered by descending count.
///
/// Ties keep the map's natural key order (stable sort over a sorted map),
/// which is well-defined since domain names are distinct.
#[must_use]
pub(crate) fn domains_by_count_desc(snapshot: &Snapshot) -> Vec<(&str, usize)> {
    let mut rows: Vec<(&str, usize)> = snapshot
        .entities_by_domain
        .iter()
        .map(|(domain, count)| (domain.as_str(), *count))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows
}
