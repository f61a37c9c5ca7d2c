//! File-backed implementation of the credential store port.
//!
//! One JSON file holding the single saved URL/token pair. A missing file
//! means no credentials are saved; a malformed file is an error.

use std::path::PathBuf;

use hubscope_app::ports::CredentialStore;
use hubscope_domain::credentials::HubCredentials;
use hubscope_domain::error::{HubScopeError, StoreError};

/// Stores the saved credentials as a JSON file on disk.
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CredentialStore for FileCredentialStore {
    async fn load(&self) -> Result<Option<HubCredentials>, HubScopeError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => {
                let credentials =
                    serde_json::from_str(&content).map_err(StoreError::new)?;
                Ok(Some(credentials))
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::new(err).into()),
        }
    }

    async fn save(&self, credentials: &HubCredentials) -> Result<(), HubScopeError> {
        let json = serde_json::to_string_pretty(credentials).map_err(StoreError::new)?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(StoreError::new)?;
        Ok(())
    }
}
