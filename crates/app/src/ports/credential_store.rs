//! Credential store port — persistence for the saved hub URL/token.

use std::future::Future;

use hubscope_domain::credentials::HubCredentials;
use hubscope_domain::error::HubScopeError;

/// Load/save for the single saved URL/token pair.
///
/// The binary crate provides a file-backed implementation; tests use an
/// in-memory stub. Absence of saved credentials is not an error.
pub trait CredentialStore: Send + Sync {
    /// Return the saved credentials, if any exist.
    fn load(&self) -> impl Future<Output = Result<Option<HubCredentials>, HubScopeError>> + Send;

    /// Persist the given credentials, replacing any previous pair.
    fn save(
        &self,
        credentials: &HubCredentials,
    ) -> impl Future<Output = Result<(), HubScopeError>> + Send;
}
