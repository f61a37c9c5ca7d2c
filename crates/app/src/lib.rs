//! # hubscope-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `HubClient` — the connectivity probe and the five resource fetches
//!   - `HubClientFactory` — builds a client for a submitted URL/token pair
//!   - `CredentialStore` — persistence for the saved URL/token
//! - Classify the flat entity-state list into per-domain buckets
//! - Assemble the immutable report snapshot (`ReportService`)
//! - Render a snapshot into one of the four output formats (`render`)
//! - Locate a TV's control entities and emit a dashboard card (`tv_card`)
//!
//! ## Dependency rule
//! Depends on `hubscope-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod classifier;
pub mod ports;
pub mod render;
pub mod services;
pub mod tv_card;
