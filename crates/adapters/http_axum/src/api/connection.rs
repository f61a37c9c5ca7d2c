//! Connectivity-check endpoint.

use axum::Json;
use axum::extract::State;

use hubscope_app::ports::{CredentialStore, HubClient, HubClientFactory};

use super::{CredentialsForm, MISSING_CREDENTIALS, Reply, persist};
use crate::state::AppState;

/// `POST /api/test-connection`
///
/// Probes the hub with the submitted credentials. On success, optionally
/// persists them for the next visit.
pub async fn test<F, S>(
    State(state): State<AppState<F, S>>,
    Json(form): Json<CredentialsForm>,
) -> Json<Reply>
where
    F: HubClientFactory + 'static,
    S: CredentialStore + 'static,
{
    let Some((url, token)) = form.credentials() else {
        return Json(Reply::failure(MISSING_CREDENTIALS));
    };

    let client = state.factory.create(url, token);
    if client.probe().await {
        if form.save_config {
            persist(state.store.as_ref(), url, token).await;
        }
        Json(Reply::ok_message("Connection successful"))
    } else {
        Json(Reply::failure("Connection failed"))
    }
}
