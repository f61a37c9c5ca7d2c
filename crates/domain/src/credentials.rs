//! Saved hub address and access token.

use serde::{Deserialize, Serialize};

/// A hub base URL paired with the bearer token used to query it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HubCredentials {
    pub url: String,
    pub token: String,
}
