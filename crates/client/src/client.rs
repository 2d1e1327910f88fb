//! The authenticated request gateway

use crate::config::DEFAULT_TIMEOUT;
use crate::error::ApiError;
use crate::refresh::RefreshGate;
use reqwest::{Client, ClientBuilder, StatusCode, header};
use serde::de::DeserializeOwned;
use snapstreak_core::{MemoryTokenStore, TokenStore};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Snapstreak API client
///
/// Cheap to clone; clones share the underlying connection pool, credential
/// store and refresh coordination.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    store: Arc<dyn TokenStore>,
    refresh: Arc<RefreshGate>,
}

impl ApiClient {
    /// Create a new client with default configuration and an in-memory store
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The credential store this client reads tokens from and persists
    /// rotated tokens into
    pub fn store(&self) -> &Arc<dyn TokenStore> {
        &self.store
    }

    /// Create a request builder against the API base URL
    ///
    /// No authorization header is attached here; [`Self::execute`] attaches
    /// the current access token per attempt so a replay after refresh picks
    /// up the rotated token. The content type is left to the body: `.json()`
    /// sets it, and a multipart body lets the transport compute the
    /// boundary.
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.http.request(method, url)
    }

    /// Execute a request with bearer authentication and 401 recovery
    ///
    /// `build` is invoked once per attempt so the request, including a
    /// multipart body, can be rebuilt for the replay. A request is replayed
    /// at most once: the first 401 routes through the shared refresh, and a
    /// 401 on the replay is surfaced as the session-expired error.
    pub async fn execute<T, F>(&self, build: F) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        F: Fn() -> reqwest::RequestBuilder,
    {
        let token = self.store.access_token().await?;
        let response = dispatch(build(), token.as_deref()).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return read_json(response).await;
        }

        debug!("request rejected with 401; refreshing access token");
        let token = self
            .refresh
            .refresh(
                self.http.clone(),
                self.base_url.clone(),
                Arc::clone(&self.store),
            )
            .await?;
        let response = dispatch(build(), Some(&token)).await?;
        read_json(response).await
    }
}

/// Attach the bearer token (if any) and send
async fn dispatch(
    request: reqwest::RequestBuilder,
    token: Option<&str>,
) -> Result<reqwest::Response, ApiError> {
    let request = match token {
        Some(token) => request.header(header::AUTHORIZATION, format!("Bearer {token}")),
        None => request,
    };
    Ok(request.send().await?)
}

/// Deserialize a success body or classify the error response
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response.json().await?)
    } else {
        let payload = response.json::<serde_json::Value>().await.ok();
        Err(ApiError::from_status(status.as_u16(), payload.as_ref()))
    }
}

/// Builder for [`ApiClient`]
#[derive(Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    store: Option<Arc<dyn TokenStore>>,
}

impl ApiClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout (defaults to the upload-tolerant 30 s)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Set the credential store (defaults to an in-memory store)
    pub fn store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ApiError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let http = ClientBuilder::new()
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .user_agent(
                self.user_agent
                    .unwrap_or_else(|| "snapstreak-client/0.1.0".to_string()),
            )
            .build()
            .map_err(|e| ApiError::Configuration(e.to_string()))?;

        Ok(ApiClient {
            http,
            base_url,
            store: self
                .store
                .unwrap_or_else(|| Arc::new(MemoryTokenStore::new())),
            refresh: Arc::new(RefreshGate::new()),
        })
    }
}
