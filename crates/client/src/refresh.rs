//! Single-flight token refresh
//!
//! Any number of requests can hit a 401 while one refresh is outstanding;
//! all of them await the same shared refresh future and see the same
//! outcome. The in-flight slot plays the role of the refresh-in-progress
//! flag, and the `Shared` future stands in for the queue of parked
//! continuations: a caller cancelled mid-wait simply drops its handle.

use crate::error::ApiError;
use crate::types::{RefreshRequest, RefreshResponse};
use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use reqwest::Client;
use snapstreak_core::TokenStore;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

type SharedRefresh = Shared<BoxFuture<'static, Result<String, ApiError>>>;

/// Coalesces concurrent refresh attempts into one `POST /auth/refresh`
#[derive(Default)]
pub(crate) struct RefreshGate {
    in_flight: Mutex<Option<SharedRefresh>>,
}

impl RefreshGate {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Await the in-flight refresh, starting one if none is running
    ///
    /// Returns the new access token. On success both tokens have already
    /// been persisted to the store; on failure the store has been cleared.
    pub(crate) async fn refresh(
        &self,
        http: Client,
        base_url: String,
        store: Arc<dyn TokenStore>,
    ) -> Result<String, ApiError> {
        let fut = {
            let mut slot = self.in_flight.lock().await;
            match slot.as_ref() {
                Some(fut) => {
                    debug!("refresh already in flight; waiting for its outcome");
                    fut.clone()
                }
                None => {
                    let fut = run_refresh(http, base_url, store).boxed().shared();
                    *slot = Some(fut.clone());
                    fut
                }
            }
        };

        let outcome = fut.clone().await;

        // Clear the slot only if it still holds this refresh, so a newer
        // in-flight refresh is never clobbered.
        let mut slot = self.in_flight.lock().await;
        if slot.as_ref().is_some_and(|current| current.ptr_eq(&fut)) {
            *slot = None;
        }
        drop(slot);

        outcome
    }
}

/// One full refresh cycle: rotate the pair, persist it, or clear the store
async fn run_refresh(
    http: Client,
    base_url: String,
    store: Arc<dyn TokenStore>,
) -> Result<String, ApiError> {
    match request_rotation(&http, &base_url, store.as_ref()).await {
        Ok(tokens) => {
            // Persist before any parked request is released, so no request
            // is replayed against a stale token.
            store
                .set_tokens(&tokens.access_token, &tokens.refresh_token)
                .await?;
            debug!("access token refreshed");
            Ok(tokens.access_token)
        }
        Err(err) => {
            warn!(error = %err, "token refresh failed; clearing stored tokens");
            if let Err(store_err) = store.clear_tokens().await {
                warn!(error = %store_err, "failed to clear tokens after refresh failure");
            }
            Err(err)
        }
    }
}

/// Call the refresh endpoint with the stored refresh token
async fn request_rotation(
    http: &Client,
    base_url: &str,
    store: &dyn TokenStore,
) -> Result<RefreshResponse, ApiError> {
    let refresh_token = store
        .refresh_token()
        .await?
        .ok_or(ApiError::SessionExpired)?;

    let response = http
        .post(format!("{base_url}/auth/refresh"))
        .json(&RefreshRequest { refresh_token })
        .send()
        .await?;

    let status = response.status();
    if status.is_success() {
        Ok(response.json().await?)
    } else {
        let payload = response.json::<serde_json::Value>().await.ok();
        Err(ApiError::from_status(status.as_u16(), payload.as_ref()))
    }
}
