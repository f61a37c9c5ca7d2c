//! # hubscope-adapter-http-axum
//!
//! Web front end built on [axum](https://docs.rs/axum).
//!
//! Serves a server-side-rendered landing page at `/` and a small JSON API
//! under `/api` that the page's form posts to. Handlers receive fresh hub
//! credentials with every request and build a client session through the
//! [`HubClientFactory`] port; API outcomes are reported through a uniform
//! `{"success": …}` envelope with HTTP 200.
//!
//! Depends on `hubscope-app` for port traits and the report service, and
//! on `hubscope-domain` for the snapshot types. Never leaks axum types
//! into the domain.
//!
//! [`HubClientFactory`]: hubscope_app::ports::HubClientFactory

pub mod api;
pub mod pages;
pub mod router;
pub mod state;
