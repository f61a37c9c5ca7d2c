//! JSON API handlers backing the landing page's form.

pub mod connection;
pub mod report;

use axum::Router;
use axum::routing::post;
use serde::{Deserialize, Serialize};

use hubscope_app::ports::{CredentialStore, HubClientFactory};
use hubscope_domain::credentials::HubCredentials;
use hubscope_domain::snapshot::Snapshot;

use crate::state::AppState;

/// Uniform outcome envelope for all API endpoints.
///
/// The page's form handler inspects `success` rather than the HTTP status,
/// so failures are still answered with HTTP 200.
#[derive(Debug, Serialize)]
pub struct Reply {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<Snapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Reply {
    fn ok_message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            report: None,
            error: None,
        }
    }

    fn ok_report(report: Snapshot) -> Self {
        Self {
            success: true,
            message: None,
            report: Some(report),
            error: None,
        }
    }

    fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            report: None,
            error: Some(error.into()),
        }
    }
}

/// Credential fields shared by every form submission.
#[derive(Debug, Deserialize)]
pub struct CredentialsForm {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub save_config: bool,
}

impl CredentialsForm {
    /// The trimmed URL/token pair, or `None` when either field is blank.
    fn credentials(&self) -> Option<(&str, &str)> {
        let url = self.url.trim();
        let token = self.token.trim();
        if url.is_empty() || token.is_empty() {
            None
        } else {
            Some((url, token))
        }
    }
}

const MISSING_CREDENTIALS: &str = "URL and token are required";

/// Save the submitted credentials, logging instead of failing the request.
async fn persist<S: CredentialStore>(store: &S, url: &str, token: &str) {
    let credentials = HubCredentials {
        url: url.to_string(),
        token: token.to_string(),
    };
    if let Err(err) = store.save(&credentials).await {
        tracing::warn!(error = %err, "failed to persist credentials");
    }
}

/// Build the `/api` sub-router.
pub fn routes<F, S>() -> Router<AppState<F, S>>
where
    F: HubClientFactory + 'static,
    S: CredentialStore + 'static,
{
    Router::new()
        .route("/test-connection", post(connection::test::<F, S>))
        .route("/generate-report", post(report::generate::<F, S>))
        .route("/download-report", post(report::download::<F, S>))
}
