//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside
//! world. They are defined here (in `app`) so that both the use-case layer
//! and the adapter layer can depend on them without creating circular
//! dependencies.

pub mod credential_store;
pub mod hub_client;

pub use credential_store::CredentialStore;
pub use hub_client::{HubClient, HubClientFactory};
