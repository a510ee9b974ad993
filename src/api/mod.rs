//! REST access to Mastodon-family instances.
//!
//! `ApiClient` is a thin JSON-over-GET wrapper around reqwest; `instance`
//! holds the three documented instance endpoints.

pub mod client;
pub mod instance;

pub use client::{ApiClient, ApiError};
pub use instance::InstanceClient;
