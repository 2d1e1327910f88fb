use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single daily photo post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snap {
    pub id: String,
    pub user_id: String,
    pub image_url: String,
    pub caption: String,
    pub filter: String,
    pub snap_date: DateTime<Utc>,
    pub like_count: i64,
    pub created_at: DateTime<Utc>,
}

/// The user's streak counters as reported by `GET /snaps/streak`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakSummary {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_snaps: u64,
    pub last_snap_date: Option<DateTime<Utc>>,
    pub has_snapped_today: bool,
    pub freezes_available: u32,
    pub freezes_used: u32,
}

/// Result of banking a streak freeze (`POST /snaps/freeze`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreezeStatus {
    pub message: String,
    pub freezes_available: u32,
    pub freezes_used: u32,
    pub current_streak: u32,
}

/// One page of the snap history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapsPage {
    pub snaps: Vec<Snap>,
    pub total: i64,
    pub page: u32,
    pub limit: u32,
}

/// The authenticated user's account profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
