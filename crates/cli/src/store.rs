//! File-backed token store
//!
//! Persists the token pair as JSON under the CLI's data directory so a
//! session survives between invocations.

use async_trait::async_trait;
use snapstreak_core::{StoreResult, TokenPair, TokenStore};
use std::path::PathBuf;
use tokio::sync::Mutex;

pub struct FileTokenStore {
    path: PathBuf,
    // Serializes read-modify-write cycles against the file.
    lock: Mutex<()>,
}

impl FileTokenStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    async fn read_pair(&self) -> StoreResult<Option<TokenPair>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn access_token(&self) -> StoreResult<Option<String>> {
        let _guard = self.lock.lock().await;
        Ok(self.read_pair().await?.map(|pair| pair.access_token))
    }

    async fn refresh_token(&self) -> StoreResult<Option<String>> {
        let _guard = self.lock.lock().await;
        Ok(self.read_pair().await?.map(|pair| pair.refresh_token))
    }

    async fn set_tokens(&self, access: &str, refresh: &str) -> StoreResult<()> {
        let _guard = self.lock.lock().await;
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let bytes = serde_json::to_vec_pretty(&TokenPair::new(access, refresh))?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }

    async fn clear_tokens(&self) -> StoreResult<()> {
        let _guard = self.lock.lock().await;
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
