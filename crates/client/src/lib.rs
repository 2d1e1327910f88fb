//! Snapstreak API client
//!
//! Wraps outbound HTTP calls with bearer-token authentication and recovers
//! transparently from token expiry: the first 401 a request sees triggers a
//! single shared refresh against `POST /auth/refresh`, after which the
//! request is replayed once with the new token. Every other failure class is
//! classified into a fixed, user-facing error taxonomy and surfaced as-is.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod moderation;
mod refresh;
pub mod snaps;
pub mod types;

pub use client::{ApiClient, ApiClientBuilder};
pub use config::ClientConfig;
pub use error::ApiError;
