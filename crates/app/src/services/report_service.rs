//! Report service — assembles one immutable snapshot per call.

use hubscope_domain::error::{ConnectivityError, HubScopeError};
use hubscope_domain::snapshot::Snapshot;
use hubscope_domain::time::now;

use crate::classifier::classify;
use crate::ports::HubClient;

/// Assembles report snapshots from a [`HubClient`].
///
/// One instance per hub session; every call to [`generate`](Self::generate)
/// builds a fresh snapshot from scratch. Nothing is cached between calls.
pub struct ReportService<C> {
    client: C,
}

impl<C: HubClient + Sync> ReportService<C> {
    /// Create a service backed by the given hub client.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Probe the hub, fetch all five resources, classify the entity states,
    /// and assemble the snapshot.
    ///
    /// Fail-fast: a failed probe aborts before any fetch, and the first
    /// failed fetch aborts assembly. No partial snapshot is ever returned.
    ///
    /// # Errors
    ///
    /// Returns [`HubScopeError::Connectivity`] when the probe fails and
    /// [`HubScopeError::Fetch`] when any resource fetch fails.
    pub async fn generate(&self) -> Result<Snapshot, HubScopeError> {
        if !self.client.probe().await {
            return Err(ConnectivityError.into());
        }
        tracing::debug!("probe succeeded, fetching hub resources");

        let system_info = self.client.fetch_config().await?;
        let components = self.client.fetch_components().await?;
        let states = self.client.fetch_states().await?;
        let services = self.client.fetch_services().await?;
        let events = self.client.fetch_events().await?;

        let detailed_entities = classify(states);
        let snapshot = Snapshot::assemble(
            now(),
            system_info,
            components,
            detailed_entities,
            services,
            events,
        );

        tracing::info!(
            entities = snapshot.statistics.total_entities,
            domains = snapshot.statistics.total_domains,
            services = snapshot.statistics.total_services,
            "report snapshot assembled"
        );
        Ok(snapshot)
    }
}
