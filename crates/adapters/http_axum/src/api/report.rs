//! Report generation and download endpoints.

use std::str::FromStr;

use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use hubscope_app::ports::{CredentialStore, HubClientFactory};
use hubscope_app::render::Format;
use hubscope_app::services::report_service::ReportService;
use hubscope_domain::snapshot::Snapshot;

use super::{CredentialsForm, MISSING_CREDENTIALS, Reply, persist};
use crate::state::AppState;

/// Request body for the download endpoint.
#[derive(Debug, Deserialize)]
pub struct DownloadRequest {
    #[serde(flatten)]
    pub form: CredentialsForm,
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "json".to_string()
}

async fn generate_snapshot<F, S>(
    state: &AppState<F, S>,
    form: &CredentialsForm,
    url: &str,
    token: &str,
) -> Result<Snapshot, Reply>
where
    F: HubClientFactory + 'static,
    S: CredentialStore + 'static,
{
    let client = state.factory.create(url, token);
    let service = ReportService::new(client);
    match service.generate().await {
        Ok(snapshot) => {
            if form.save_config {
                persist(state.store.as_ref(), url, token).await;
            }
            Ok(snapshot)
        }
        Err(err) => Err(Reply::failure(err.to_string())),
    }
}

/// `POST /api/generate-report`
///
/// Runs the full report pipeline and returns the snapshot in the envelope
/// for in-page display.
pub async fn generate<F, S>(
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

    match generate_snapshot(&state, &form, url, token).await {
        Ok(snapshot) => Json(Reply::ok_report(snapshot)),
        Err(reply) => Json(reply),
    }
}

/// `POST /api/download-report`
///
/// Runs the pipeline and streams the rendered artifact back as a file
/// attachment in the requested format.
pub async fn download<F, S>(
    State(state): State<AppState<F, S>>,
    Json(request): Json<DownloadRequest>,
) -> Response
where
    F: HubClientFactory + 'static,
    S: CredentialStore + 'static,
{
    let Some((url, token)) = request.form.credentials() else {
        return Json(Reply::failure(MISSING_CREDENTIALS)).into_response();
    };

    let format = match Format::from_str(&request.format) {
        Ok(format) => format,
        Err(err) => return Json(Reply::failure(err.to_string())).into_response(),
    };

    let snapshot = match generate_snapshot(&state, &request.form, url, token).await {
        Ok(snapshot) => snapshot,
        Err(reply) => return Json(reply).into_response(),
    };

    let rendered = match format.render(&snapshot) {
        Ok(rendered) => rendered,
        Err(err) => return Json(Reply::failure(err.to_string())).into_response(),
    };

    let filename = format!(
        "hub_report_{}.{}",
        snapshot.generated_at.format("%Y%m%d_%H%M%S"),
        format.file_extension()
    );
    (
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        rendered,
    )
        .into_response()
}
