//! Request and response types for the Snapstreak API

use serde::{Deserialize, Serialize};
use snapstreak_core::UserProfile;

/// Credentials for `POST /auth/register` and `POST /auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

/// Token pair and profile returned by the auth endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserProfile,
}

/// Body of `POST /auth/refresh`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Rotated token pair returned by `POST /auth/refresh`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
    pub refresh_token: String,
}

/// Password confirmation for account deletion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteAccountRequest {
    pub password: String,
}

/// Image payload for a snap upload
///
/// Bytes are held in memory so a 401'd upload can be rebuilt and replayed
/// after a token refresh.
#[derive(Debug, Clone)]
pub struct SnapImage {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// A snap to upload via `POST /snaps`
#[derive(Debug, Clone)]
pub struct NewSnap {
    pub image: SnapImage,
    pub caption: String,
    pub filter: String,
}

/// Body of `POST /blocks`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockRequest {
    pub blocked_id: String,
}

/// Body of `POST /reports`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    pub content_type: String,
    pub content_id: String,
    pub category: String,
    pub reason: String,
}

/// Generic `{"message": ...}` acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}
