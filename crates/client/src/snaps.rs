//! Snap and streak endpoints

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{ApiMessage, NewSnap};
use reqwest::Method;
use reqwest::multipart::{Form, Part};
use snapstreak_core::{FreezeStatus, Snap, SnapsPage, StreakSummary};

impl ApiClient {
    /// Upload today's snap as a multipart form
    ///
    /// The form is rebuilt from the owned image bytes on each attempt, so an
    /// upload interrupted by token expiry replays cleanly after the refresh.
    pub async fn create_snap(&self, snap: &NewSnap) -> Result<Snap, ApiError> {
        self.execute(|| self.request(Method::POST, "/snaps").multipart(snap_form(snap)))
            .await
    }

    /// Fetch a page of the user's snap history
    pub async fn list_snaps(&self, page: u32, limit: u32) -> Result<SnapsPage, ApiError> {
        let path = format!("/snaps?page={page}&limit={limit}");
        self.execute(|| self.request(Method::GET, &path)).await
    }

    /// Fetch the current streak counters
    pub async fn streak(&self) -> Result<StreakSummary, ApiError> {
        self.execute(|| self.request(Method::GET, "/snaps/streak"))
            .await
    }

    /// Bank a streak freeze (the server caps banked freezes at three)
    pub async fn add_freeze(&self) -> Result<FreezeStatus, ApiError> {
        self.execute(|| self.request(Method::POST, "/snaps/freeze"))
            .await
    }

    /// Like a snap
    pub async fn like_snap(&self, snap_id: &str) -> Result<ApiMessage, ApiError> {
        let path = format!("/snaps/{snap_id}/like");
        self.execute(|| self.request(Method::POST, &path)).await
    }

    /// Delete one of the user's own snaps
    pub async fn delete_snap(&self, snap_id: &str) -> Result<ApiMessage, ApiError> {
        let path = format!("/snaps/{snap_id}");
        self.execute(|| self.request(Method::DELETE, &path)).await
    }
}

fn snap_form(snap: &NewSnap) -> Form {
    let image = match Part::bytes(snap.image.bytes.clone())
        .file_name(snap.image.file_name.clone())
        .mime_str(&snap.image.mime_type)
    {
        Ok(part) => part,
        // Unparseable mime type: send the part untyped and let the server
        // sniff the content.
        Err(_) => Part::bytes(snap.image.bytes.clone()).file_name(snap.image.file_name.clone()),
    };
    Form::new()
        .part("image", image)
        .text("caption", snap.caption.clone())
        .text("filter", snap.filter.clone())
}
