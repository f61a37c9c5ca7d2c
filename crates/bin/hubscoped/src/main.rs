//! # hubscoped — hub overview web server
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (TOML file, env var overrides)
//! - Initialize tracing
//! - Construct the HTTP hub client factory and the file credential store
//! - Build the axum router, injecting the ports
//! - Bind to a TCP port and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;
mod credentials;

use tracing_subscriber::EnvFilter;

use hubscope_adapter_http_axum::state::AppState;
use hubscope_adapter_hub_http::HttpHubClientFactory;

use crate::config::Config;
use crate::credentials::FileCredentialStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let factory = HttpHubClientFactory::new();
    let store = FileCredentialStore::new(&config.storage.credentials_path);
    let state = AppState::new(factory, store);
    let app = hubscope_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, "hubscoped listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
