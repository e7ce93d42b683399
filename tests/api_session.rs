//! API session tests
//!
//! The API client and the onboarding flow share one session store; these
//! tests check the token lifecycle across both.

use rove::api_client::{ApiClient, ApiClientConfig, ApiError, Credentials};
use serde_json::json;
use std::sync::Arc;
use storage::{AccountKind, ExperienceMode, MemoryStore, ModeStore};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_unauthorized_response_evicts_stored_token() {
    let mock_server = MockServer::start().await;
    let store = Arc::new(ModeStore::new(Arc::new(MemoryStore::new())));
    store.set_auth_token("stale-token").await.unwrap();

    Mock::given(method("GET"))
        .and(path("/api/users/profile"))
        .and(header("Authorization", "Bearer stale-token"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(
        ApiClientConfig::new(format!("{}/api", mock_server.uri())),
        store.clone(),
    )
    .unwrap();

    let err = client.get_profile().await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized(_)));
    assert_eq!(store.auth_token().await.unwrap(), None);
}

#[tokio::test]
async fn test_token_eviction_keeps_onboarding_state() {
    let mock_server = MockServer::start().await;
    let store = Arc::new(ModeStore::new(Arc::new(MemoryStore::new())));
    store.set_experience_mode(ExperienceMode::Thread).await.unwrap();
    store.set_account_kind(AccountKind::Individual).await.unwrap();
    store.mark_onboarding_complete().await.unwrap();

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "t1"})))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/feed"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(
        ApiClientConfig::new(format!("{}/api", mock_server.uri())),
        store.clone(),
    )
    .unwrap();

    client.login(&Credentials::new("sam@example.com", "pw")).await.unwrap();
    assert_eq!(store.auth_token().await.unwrap().as_deref(), Some("t1"));

    assert!(client.get_feed(None, None).await.is_err());
    assert_eq!(store.auth_token().await.unwrap(), None);

    // Signing out of the backend does not send the user back through onboarding
    let session = store.restore_session().await.unwrap();
    assert_eq!(session.mode, ExperienceMode::Thread);
}
