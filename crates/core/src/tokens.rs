//! Credential storage for the access/refresh token pair
//!
//! The gateway treats both tokens as opaque strings: it reads them to build
//! headers and refresh bodies, and writes them back when the server rotates
//! the pair. Persistence is the store's concern.

use crate::error::StoreResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// An access/refresh token pair as issued by the auth endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

impl TokenPair {
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }
}

/// External credential store the gateway collaborates with
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Current access token, if any
    async fn access_token(&self) -> StoreResult<Option<String>>;

    /// Current refresh token, if any
    async fn refresh_token(&self) -> StoreResult<Option<String>>;

    /// Persist a new token pair, replacing any previous one
    async fn set_tokens(&self, access: &str, refresh: &str) -> StoreResult<()>;

    /// Remove both tokens, leaving the session logged out
    async fn clear_tokens(&self) -> StoreResult<()>;
}

/// In-memory token store, used for tests and short-lived sessions
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: RwLock<Option<TokenPair>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn access_token(&self) -> StoreResult<Option<String>> {
        Ok(self
            .tokens
            .read()
            .await
            .as_ref()
            .map(|pair| pair.access_token.clone()))
    }

    async fn refresh_token(&self) -> StoreResult<Option<String>> {
        Ok(self
            .tokens
            .read()
            .await
            .as_ref()
            .map(|pair| pair.refresh_token.clone()))
    }

    async fn set_tokens(&self, access: &str, refresh: &str) -> StoreResult<()> {
        *self.tokens.write().await = Some(TokenPair::new(access, refresh));
        Ok(())
    }

    async fn clear_tokens(&self) -> StoreResult<()> {
        *self.tokens.write().await = None;
        Ok(())
    }
}
