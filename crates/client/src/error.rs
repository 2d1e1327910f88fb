//! Client error taxonomy
//!
//! Every failed request is rewritten into one of a fixed set of classes with
//! a human-readable message before it reaches the caller. Classification is
//! a pure function of the response status, whether a response was received
//! at all, and the server's error payload.

use serde_json::Value;
use snapstreak_core::StoreError;
use thiserror::Error;

/// Classified, user-facing client error
///
/// Variants carry owned strings rather than transport errors so the value is
/// `Clone` and a single refresh failure can be fanned out to every request
/// parked behind it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No response was received (offline, unreachable host, timeout)
    #[error("No internet connection. Please check your network and try again.")]
    Offline,

    /// Server-side failure (5xx)
    #[error("Server error. Please try again later.")]
    Server { status: u16 },

    /// 401, surfaced only after refresh-and-replay has also failed
    #[error("Your session has expired. Please sign in again.")]
    SessionExpired,

    /// 403
    #[error("You do not have permission to perform this action.")]
    Forbidden,

    /// 404
    #[error("The requested resource was not found.")]
    NotFound,

    /// 400, with the message taken from the server payload when present
    #[error("{0}")]
    Validation(String),

    /// 429
    #[error("Too many requests. Please wait a moment and try again.")]
    RateLimited,

    /// Any other status; the server payload message is preferred
    #[error("{message}")]
    Unexpected { status: u16, message: String },

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Credential store failure
    #[error("Credential store error: {0}")]
    Store(String),
}

impl ApiError {
    /// Classify an error response by status code and optional JSON payload
    pub fn from_status(status: u16, payload: Option<&Value>) -> Self {
        match status {
            s if s >= 500 => Self::Server { status: s },
            401 => Self::SessionExpired,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            400 => Self::Validation(
                server_message(payload)
                    .unwrap_or_else(|| "Invalid request. Please check your input.".to_string()),
            ),
            429 => Self::RateLimited,
            s => Self::Unexpected {
                status: s,
                message: server_message(payload).unwrap_or_else(|| {
                    "An unexpected error occurred. Please try again.".to_string()
                }),
            },
        }
    }
}

/// Extract the server-provided message from an error payload, preferring the
/// `message` field over `error`
fn server_message(payload: Option<&Value>) -> Option<String> {
    let object = payload?.as_object()?;
    for key in ["message", "error"] {
        if let Some(text) = object.get(key).and_then(Value::as_str) {
            if !text.is_empty() {
                return Some(text.to_string());
            }
        }
    }
    None
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Unexpected {
                status: err.status().map_or(0, |s| s.as_u16()),
                message: "An unexpected error occurred. Please try again.".to_string(),
            }
        } else {
            // Connect failures, timeouts and aborted transports all mean no
            // usable response was received.
            Self::Offline
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::Store(err.to_string())
    }
}
