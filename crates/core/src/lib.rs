//! Snapstreak core types and utilities

pub mod error;
pub mod streak;
pub mod tokens;
pub mod types;

pub use error::{StoreError, StoreResult};
pub use tokens::{MemoryTokenStore, TokenPair, TokenStore};
pub use types::{FreezeStatus, Snap, SnapsPage, StreakSummary, UserProfile};
