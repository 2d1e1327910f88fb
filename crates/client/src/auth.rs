//! Account and session endpoints

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{ApiMessage, AuthResponse, CredentialsRequest, DeleteAccountRequest};
use reqwest::Method;
use snapstreak_core::UserProfile;

impl ApiClient {
    /// Create an account and persist the issued token pair
    pub async fn register(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        self.authenticate("/auth/register", email, password).await
    }

    /// Sign in and persist the issued token pair
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        self.authenticate("/auth/login", email, password).await
    }

    async fn authenticate(
        &self,
        path: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        let body = CredentialsRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: AuthResponse = self
            .execute(|| self.request(Method::POST, path).json(&body))
            .await?;
        self.store()
            .set_tokens(&response.access_token, &response.refresh_token)
            .await?;
        Ok(response)
    }

    /// Get the authenticated user's profile
    pub async fn profile(&self) -> Result<UserProfile, ApiError> {
        self.execute(|| self.request(Method::GET, "/auth/profile"))
            .await
    }

    /// Delete the account (password confirmation required) and clear tokens
    pub async fn delete_account(&self, password: &str) -> Result<ApiMessage, ApiError> {
        let body = DeleteAccountRequest {
            password: password.to_string(),
        };
        let message: ApiMessage = self
            .execute(|| self.request(Method::DELETE, "/auth/profile").json(&body))
            .await?;
        self.store().clear_tokens().await?;
        Ok(message)
    }

    /// Forget the stored token pair, leaving the session logged out
    ///
    /// Purely client-side; the server keeps no session state beyond the
    /// tokens themselves.
    pub async fn logout(&self) -> Result<(), ApiError> {
        Ok(self.store().clear_tokens().await?)
    }
}
