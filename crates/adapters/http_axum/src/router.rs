//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use hubscope_app::ports::{CredentialStore, HubClientFactory};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the landing page at `/` and the form's JSON API under `/api`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<F, S>(state: AppState<F, S>) -> Router
where
    F: HubClientFactory + 'static,
    S: CredentialStore + 'static,
{
    Router::new()
        .route("/", get(crate::pages::index::<F, S>))
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
