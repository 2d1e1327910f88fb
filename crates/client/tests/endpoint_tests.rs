//! Integration tests for the typed API surface

use serde_json::json;
use snapstreak_client::ApiClient;
use snapstreak_client::error::ApiError;
use snapstreak_client::types::ReportRequest;
use snapstreak_core::{MemoryTokenStore, TokenStore};
use std::sync::Arc;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn user_body() -> serde_json::Value {
    json!({
        "id": "u1",
        "email": "user@example.com",
        "created_at": "2026-08-01T00:00:00Z"
    })
}

async fn authed_client(server: &MockServer) -> (ApiClient, Arc<MemoryTokenStore>) {
    let store = Arc::new(MemoryTokenStore::new());
    store.set_tokens("t1", "r1").await.unwrap();
    let client = ApiClient::builder()
        .base_url(server.uri())
        .store(store.clone())
        .build()
        .unwrap();
    (client, store)
}

#[tokio::test]
async fn test_login_persists_issued_tokens() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(
            json!({"email": "user@example.com", "password": "hunter22"}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "t1",
            "refresh_token": "r1",
            "user": user_body()
        })))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let client = ApiClient::builder()
        .base_url(server.uri())
        .store(store.clone())
        .build()
        .unwrap();

    let auth = client.login("user@example.com", "hunter22").await.unwrap();
    assert_eq!(auth.user.email, "user@example.com");
    assert_eq!(store.access_token().await.unwrap(), Some("t1".into()));
    assert_eq!(store.refresh_token().await.unwrap(), Some("r1".into()));
}

#[tokio::test]
async fn test_register_validation_error_uses_server_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"message": "Email taken"})),
        )
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).unwrap();

    let result = client.register("user@example.com", "hunter22").await;
    assert_eq!(
        result.map(|a| a.access_token).unwrap_err(),
        ApiError::Validation("Email taken".to_string())
    );
}

#[tokio::test]
async fn test_profile_requires_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/profile"))
        .and(header("authorization", "Bearer t1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_body()))
        .mount(&server)
        .await;

    let (client, _store) = authed_client(&server).await;

    let profile = client.profile().await.unwrap();
    assert_eq!(profile.id, "u1");
}

#[tokio::test]
async fn test_delete_account_clears_stored_tokens() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/auth/profile"))
        .and(body_json(json!({"password": "hunter22"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Account deleted"})),
        )
        .mount(&server)
        .await;

    let (client, store) = authed_client(&server).await;

    let message = client.delete_account("hunter22").await.unwrap();
    assert_eq!(message.message, "Account deleted");
    assert_eq!(store.access_token().await.unwrap(), None);
}

#[tokio::test]
async fn test_logout_is_client_side_only() {
    let server = MockServer::start().await;
    let (client, store) = authed_client(&server).await;

    client.logout().await.unwrap();
    assert_eq!(store.access_token().await.unwrap(), None);
    assert_eq!(store.refresh_token().await.unwrap(), None);
    // No received requests expected.
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_snaps_passes_paging_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/snaps"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "snaps": [],
            "total": 45,
            "page": 2,
            "limit": 20
        })))
        .mount(&server)
        .await;

    let (client, _store) = authed_client(&server).await;

    let page = client.list_snaps(2, 20).await.unwrap();
    assert_eq!(page.total, 45);
    assert!(page.snaps.is_empty());
}

#[tokio::test]
async fn test_create_snap_sends_multipart_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/snaps"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "snap-1",
            "user_id": "u1",
            "image_url": "https://cdn.example.com/snap-1.jpg",
            "caption": "golden hour",
            "filter": "vivid",
            "snap_date": "2026-08-21T08:00:00Z",
            "like_count": 0,
            "created_at": "2026-08-21T08:00:01Z"
        })))
        .mount(&server)
        .await;

    let (client, _store) = authed_client(&server).await;

    let snap = snapstreak_client::types::NewSnap {
        image: snapstreak_client::types::SnapImage {
            file_name: "snap_1.jpg".to_string(),
            mime_type: "image/jpeg".to_string(),
            bytes: vec![0xff, 0xd8, 0xff, 0xe0],
        },
        caption: "golden hour".to_string(),
        filter: "vivid".to_string(),
    };

    let created = client.create_snap(&snap).await.unwrap();
    assert_eq!(created.id, "snap-1");

    // The transport owns the content type so it can set the boundary.
    let requests = server.received_requests().await.unwrap();
    let upload = &requests[0];
    let content_type = upload
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("multipart/form-data; boundary="));
    let body = String::from_utf8_lossy(&upload.body);
    assert!(body.contains("golden hour"));
    assert!(body.contains("vivid"));
    assert!(body.contains("snap_1.jpg"));
}

#[tokio::test]
async fn test_streak_and_freeze_endpoints() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/snaps/streak"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "current_streak": 7,
            "longest_streak": 12,
            "total_snaps": 80,
            "last_snap_date": "2026-08-22T09:30:00Z",
            "has_snapped_today": false,
            "freezes_available": 2,
            "freezes_used": 1
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/snaps/freeze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Freeze added",
            "freezes_available": 3,
            "freezes_used": 1,
            "current_streak": 7
        })))
        .mount(&server)
        .await;

    let (client, _store) = authed_client(&server).await;

    let streak = client.streak().await.unwrap();
    assert_eq!(streak.current_streak, 7);
    assert!(!streak.has_snapped_today);

    let freeze = client.add_freeze().await.unwrap();
    assert_eq!(freeze.freezes_available, 3);
}

#[tokio::test]
async fn test_like_and_delete_snap() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/snaps/snap-1/like"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Snap liked"})))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/snaps/snap-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Snap deleted"})),
        )
        .mount(&server)
        .await;

    let (client, _store) = authed_client(&server).await;

    assert_eq!(client.like_snap("snap-1").await.unwrap().message, "Snap liked");
    assert_eq!(
        client.delete_snap("snap-1").await.unwrap().message,
        "Snap deleted"
    );
}

#[tokio::test]
async fn test_block_unblock_and_report() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/blocks"))
        .and(body_json(json!({"blocked_id": "u2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "User blocked"})))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/blocks/u2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "User unblocked"})),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/reports"))
        .and(body_json(json!({
            "content_type": "snap",
            "content_id": "snap-1",
            "category": "spam",
            "reason": "repeated content"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Report submitted"})),
        )
        .mount(&server)
        .await;

    let (client, _store) = authed_client(&server).await;

    assert_eq!(client.block_user("u2").await.unwrap().message, "User blocked");
    assert_eq!(
        client.unblock_user("u2").await.unwrap().message,
        "User unblocked"
    );

    let report = ReportRequest {
        content_type: "snap".to_string(),
        content_id: "snap-1".to_string(),
        category: "spam".to_string(),
        reason: "repeated content".to_string(),
    };
    assert_eq!(client.report(&report).await.unwrap().message, "Report submitted");
}
