//! Error taxonomy for report generation.
//!
//! A report-generation call either produces a complete [`Snapshot`] or one
//! of these errors — never a partially populated snapshot.
//!
//! [`Snapshot`]: crate::snapshot::Snapshot

use std::fmt;

/// The hub resource being fetched when a failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Config,
    Components,
    States,
    Services,
    Events,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config => f.write_str("config"),
            Self::Components => f.write_str("components"),
            Self::States => f.write_str("states"),
            Self::Services => f.write_str("services"),
            Self::Events => f.write_str("events"),
        }
    }
}

/// The hub did not answer the connectivity probe.
///
/// Covers bad addresses, rejected credentials, unreachable networks, and
/// probe timeouts — the probe itself only reports success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("hub did not answer the connectivity probe")]
pub struct ConnectivityError;

/// A data fetch failed after a successful probe.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to fetch {resource}: {message}")]
pub struct FetchError {
    /// Which of the five resources was being fetched.
    pub resource: Resource,
    /// Transport- or status-level detail, for the caller's error message.
    pub message: String,
}

impl FetchError {
    /// Build a fetch error for `resource` from any displayable cause.
    pub fn new(resource: Resource, cause: impl fmt::Display) -> Self {
        Self {
            resource,
            message: cause.to_string(),
        }
    }
}

/// Credential persistence failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("credential store failure: {message}")]
pub struct StoreError {
    pub message: String,
}

impl StoreError {
    /// Build a store error from any displayable cause.
    pub fn new(cause: impl fmt::Display) -> Self {
        Self {
            message: cause.to_string(),
        }
    }
}

/// Top-level error surfaced by the report pipeline.
#[derive(Debug, thiserror::Error)]
pub enum HubScopeError {
    /// Probe failed; no fetches were attempted.
    #[error(transparent)]
    Connectivity(#[from] ConnectivityError),
    /// One of the five data fetches failed; assembly was aborted.
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// Snapshot serialization failed (structured renderer only).
    #[error("failed to serialize snapshot")]
    Serialize(#[from] serde_json::Error),
    /// Saved-credential load/save failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_name_failed_resource_in_message() {
        let err = FetchError::new(Resource::States, "status 500");
        assert_eq!(err.to_string(), "failed to fetch states: status 500");
    }

    #[test]
    fn should_convert_fetch_error_into_top_level_error() {
        let err: HubScopeError = FetchError::new(Resource::Events, "timed out").into();
        assert!(matches!(err, HubScopeError::Fetch(_)));
    }

    #[test]
    fn should_convert_connectivity_error_into_top_level_error() {
        let err: HubScopeError = ConnectivityError.into();
        assert!(matches!(err, HubScopeError::Connectivity(_)));
    }
}
