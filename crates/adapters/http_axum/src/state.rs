//! Shared application state for axum handlers.

use std::sync::Arc;

use hubscope_app::ports::{CredentialStore, HubClientFactory};

/// Application state shared across all axum handlers.
///
/// Generic over the client factory and credential store to avoid dynamic
/// dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone` — only the `Arc` wrappers are
/// cloned.
pub struct AppState<F, S> {
    /// Builds a hub client session per submitted credential pair.
    pub factory: Arc<F>,
    /// Persistence for the saved URL/token pair.
    pub store: Arc<S>,
}

impl<F, S> Clone for AppState<F, S> {
    fn clone(&self) -> Self {
        Self {
            factory: Arc::clone(&self.factory),
            store: Arc::clone(&self.store),
        }
    }
}

impl<F, S> AppState<F, S>
where
    F: HubClientFactory + 'static,
    S: CredentialStore + 'static,
{
    /// Create a new application state from the two port implementations.
    pub fn new(factory: F, store: S) -> Self {
        Self {
            factory: Arc::new(factory),
            store: Arc::new(store),
        }
    }
}
