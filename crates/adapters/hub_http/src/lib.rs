//! HTTP implementation of the hub client port.
//!
//! Talks to the hub's REST API with a bearer token. One client instance is
//! one address/token session; the underlying connection pool is shared
//! across sessions through the factory.

use std::time::Duration;

use reqwest::header;
use serde::de::DeserializeOwned;

use hubscope_app::ports::{HubClient, HubClientFactory};
use hubscope_domain::entity::Entity;
use hubscope_domain::error::{FetchError, HubScopeError, Resource};
use hubscope_domain::event::Event;
use hubscope_domain::service::ServiceDomain;
use hubscope_domain::system_info::SystemInfo;

/// Per-request deadline, covering connect, send and body read.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// The components list rides inside the extended config payload.
#[derive(Debug, serde::Deserialize)]
struct ComponentsPayload {
    #[serde(default)]
    components: Vec<String>,
}

/// Bearer-authenticated REST session against one hub.
#[derive(Debug, Clone)]
pub struct HttpHubClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl HttpHubClient {
    fn new(client: reqwest::Client, base_url: &str, token: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    async fn get(&self, path: &str) -> Result<reqwest::Response, reqwest::Error> {
        self.client
            .get(format!("{}{path}", self.base_url))
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        resource: Resource,
    ) -> Result<T, HubScopeError> {
        let response = self
            .get(path)
            .await
            .map_err(|err| FetchError::new(resource, err))?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(resource, format!("status {status}")).into());
        }
        let payload = response
            .json()
            .await
            .map_err(|err| FetchError::new(resource, err))?;
        Ok(payload)
    }
}

impl HubClient for HttpHubClient {
    async fn probe(&self) -> bool {
        match self.get("/api/").await {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                tracing::debug!(error = %err, "hub probe failed");
                false
            }
        }
    }

    async fn fetch_config(&self) -> Result<SystemInfo, HubScopeError> {
        self.get_json("/api/config", Resource::Config).await
    }

    async fn fetch_components(&self) -> Result<Vec<String>, HubScopeError> {
        let payload: ComponentsPayload = self
            .get_json("/api/config/core", Resource::Components)
            .await?;
        Ok(payload.components)
    }

    async fn fetch_states(&self) -> Result<Vec<Entity>, HubScopeError> {
        self.get_json("/api/states", Resource::States).await
    }

    async fn fetch_services(&self) -> Result<Vec<ServiceDomain>, HubScopeError> {
        self.get_json("/api/services", Resource::Services).await
    }

    async fn fetch_events(&self) -> Result<Vec<Event>, HubScopeError> {
        self.get_json("/api/events", Resource::Events).await
    }
}

/// Produces [`HttpHubClient`] sessions over one shared connection pool.
#[derive(Debug, Clone, Default)]
pub struct HttpHubClientFactory {
    client: reqwest::Client,
}

impl HttpHubClientFactory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl HubClientFactory for HttpHubClientFactory {
    type Client = HttpHubClient;

    fn create(&self, base_url: &str, token: &str) -> Self::Client {
        HttpHubClient::new(self.client.clone(), base_url, token)
    }
}
