//! Hub client port — read access to the hub's REST resources.
//!
//! The report assembler only ever talks to the hub through this trait;
//! the HTTP transport lives in an adapter crate, and tests substitute a
//! stub. Each fetch is a single request: no retries, no pagination, no
//! partial results. A non-success response fails the fetch, which aborts
//! report generation entirely.

use std::future::Future;

use hubscope_domain::entity::Entity;
use hubscope_domain::error::HubScopeError;
use hubscope_domain::event::Event;
use hubscope_domain::service::ServiceDomain;
use hubscope_domain::system_info::SystemInfo;

/// Read-only access to one hub, authenticated with a bearer token.
pub trait HubClient {
    /// Issue a lightweight authenticated request against the API root.
    ///
    /// Returns `true` only for a success status within the client's
    /// timeout; any non-success status or transport failure (including
    /// timeout) yields `false` and never an error.
    fn probe(&self) -> impl Future<Output = bool> + Send;

    /// Fetch the hub configuration.
    fn fetch_config(&self) -> impl Future<Output = Result<SystemInfo, HubScopeError>> + Send;

    /// Fetch the installed integration names.
    fn fetch_components(&self) -> impl Future<Output = Result<Vec<String>, HubScopeError>> + Send;

    /// Fetch all entity states.
    fn fetch_states(&self) -> impl Future<Output = Result<Vec<Entity>, HubScopeError>> + Send;

    /// Fetch the per-domain service groups.
    fn fetch_services(
        &self,
    ) -> impl Future<Output = Result<Vec<ServiceDomain>, HubScopeError>> + Send;

    /// Fetch the available event types.
    fn fetch_events(&self) -> impl Future<Output = Result<Vec<Event>, HubScopeError>> + Send;
}

/// Builds a [`HubClient`] for a user-submitted address/token pair.
///
/// The web front end receives fresh credentials on every request, so it
/// cannot hold a single client instance; it holds a factory instead.
pub trait HubClientFactory: Send + Sync {
    /// Concrete client type produced by this factory.
    type Client: HubClient + Send + Sync;

    /// Create a client session for the given base URL and bearer token.
    fn create(&self, base_url: &str, token: &str) -> Self::Client;
}
