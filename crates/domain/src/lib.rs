//! # hubscope-domain
//!
//! Pure domain model for the hubscope report generator.
//!
//! ## Responsibilities
//! - Define the **wire types** returned by the hub's REST API: entity
//!   states, per-domain service groups, events, and system configuration
//! - Define the **report snapshot** — the immutable aggregate produced by
//!   one report-generation call, including its derived statistics
//! - Define the error taxonomy shared across the workspace
//! - Contain all invariant enforcement (derived counts are computed in one
//!   place, at snapshot assembly)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO
//! crates. All IO boundaries are expressed as traits in the `app` crate
//! (ports).

pub mod error;
pub mod time;

pub mod credentials;
pub mod entity;
pub mod event;
pub mod service;
pub mod snapshot;
pub mod system_info;
