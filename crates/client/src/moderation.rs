//! Blocking and reporting endpoints

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{ApiMessage, BlockRequest, ReportRequest};
use reqwest::Method;

impl ApiClient {
    /// Block another user
    pub async fn block_user(&self, user_id: &str) -> Result<ApiMessage, ApiError> {
        let body = BlockRequest {
            blocked_id: user_id.to_string(),
        };
        self.execute(|| self.request(Method::POST, "/blocks").json(&body))
            .await
    }

    /// Remove a block
    pub async fn unblock_user(&self, user_id: &str) -> Result<ApiMessage, ApiError> {
        let path = format!("/blocks/{user_id}");
        self.execute(|| self.request(Method::DELETE, &path)).await
    }

    /// Report content for moderation review
    pub async fn report(&self, report: &ReportRequest) -> Result<ApiMessage, ApiError> {
        self.execute(|| self.request(Method::POST, "/reports").json(report))
            .await
    }
}
