use crate::common::{ORGANISATION_ID, TOKEN, mock_token, test_client, test_config, token_mock};
use futures::future::join_all;
use mockito::Server;
use pingen_client::prelude::*;
use serde_json::json;

fn manager_for(server: &mockito::ServerGuard) -> Arc<CredentialManager> {
    let config = test_config(server, Some(ORGANISATION_ID));
    Arc::new(
        CredentialManager::new(&config.identity_uri, &config.client_id, &config.client_secret)
            .unwrap(),
    )
}

#[tokio::test]
async fn test_acquires_credential_from_identity_provider() {
    let mut server = Server::new_async().await;
    let token_mock = mock_token(&mut server, 3600).await;
    let manager = manager_for(&server);

    let credential = manager.ensure_valid(&CancellationToken::new()).await.unwrap();

    assert_eq!(credential.token, TOKEN);
    assert_eq!(credential.authorization_header(), format!("Bearer {TOKEN}"));
    assert!(credential.is_valid());
    token_mock.assert_async().await;
}

#[tokio::test]
async fn test_fresh_credential_is_reused() {
    let mut server = Server::new_async().await;
    let token_mock = token_mock(&mut server, 3600).expect(1).create_async().await;
    let manager = manager_for(&server);
    let cancel = CancellationToken::new();

    let first = manager.ensure_valid(&cancel).await.unwrap();
    let second = manager.ensure_valid(&cancel).await.unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    token_mock.assert_async().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_callers_share_one_refresh() {
    let mut server = Server::new_async().await;
    let token_mock = server
        .mock("POST", "/auth/access-tokens")
        .with_status(200)
        .with_body(json!({"access_token": TOKEN, "token_type": "Bearer", "expires_in": 3600}).to_string())
        .expect(1)
        .create_async()
        .await;
    let manager = manager_for(&server);

    let callers = (0..16).map(|_| {
        let manager = manager.clone();
        tokio::spawn(async move { manager.ensure_valid(&CancellationToken::new()).await })
    });

    for result in join_all(callers).await {
        let credential = result.unwrap().unwrap();
        assert_eq!(credential.token, TOKEN);
    }
    token_mock.assert_async().await;
}

#[tokio::test]
async fn test_stale_credential_is_refreshed() {
    let mut server = Server::new_async().await;
    // Expires inside the safety margin, so every call refreshes
    let token_mock = token_mock(&mut server, 30).expect(2).create_async().await;
    let manager = manager_for(&server);
    let cancel = CancellationToken::new();

    let first = manager.ensure_valid(&cancel).await.unwrap();
    assert!(!first.is_valid());
    let second = manager.ensure_valid(&cancel).await.unwrap();

    assert!(!Arc::ptr_eq(&first, &second));
    token_mock.assert_async().await;
}

#[tokio::test]
async fn test_rejected_credentials_fail_and_clear_the_slot() {
    let mut server = Server::new_async().await;
    let stale_mock = mock_token(&mut server, 30).await;
    let manager = manager_for(&server);
    let cancel = CancellationToken::new();

    manager.ensure_valid(&cancel).await.unwrap();
    assert!(manager.current().await.is_some());
    stale_mock.remove_async().await;

    let rejected_mock = server
        .mock("POST", "/auth/access-tokens")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(json!({"message": "invalid client"}).to_string())
        .create_async()
        .await;

    let result = manager.ensure_valid(&cancel).await;
    match result {
        Err(AppError::AuthenticationFailed(message)) => assert_eq!(message, "invalid client"),
        other => panic!("expected authentication failure, got {other:?}"),
    }
    assert!(manager.current().await.is_none());
    rejected_mock.assert_async().await;
}

#[tokio::test]
async fn test_rejection_without_message_reports_status() {
    let mut server = Server::new_async().await;
    let _rejected_mock = server
        .mock("POST", "/auth/access-tokens")
        .with_status(401)
        .with_body("unauthorized")
        .create_async()
        .await;
    let manager = manager_for(&server);

    let result = manager.ensure_valid(&CancellationToken::new()).await;
    match result {
        Err(AppError::AuthenticationFailed(message)) => assert!(message.contains("401")),
        other => panic!("expected authentication failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_token_body_fails_authentication() {
    let mut server = Server::new_async().await;
    let _token_mock = server
        .mock("POST", "/auth/access-tokens")
        .with_status(200)
        .with_body(json!({"token_type": "Bearer"}).to_string())
        .create_async()
        .await;
    let manager = manager_for(&server);

    let result = manager.ensure_valid(&CancellationToken::new()).await;
    assert!(matches!(result, Err(AppError::AuthenticationFailed(_))));
    assert!(manager.current().await.is_none());
}

#[tokio::test]
async fn test_out_of_range_expiry_fails_authentication() {
    let mut server = Server::new_async().await;
    let token_mock = token_mock(&mut server, i64::MAX).create_async().await;
    let manager = manager_for(&server);

    let result = manager.ensure_valid(&CancellationToken::new()).await;

    match result {
        Err(AppError::AuthenticationFailed(message)) => assert!(message.contains("expires_in")),
        other => panic!("expected authentication failure, got {other:?}"),
    }
    assert!(manager.current().await.is_none());
    token_mock.assert_async().await;
}

#[tokio::test]
async fn test_api_calls_reuse_credential_across_requests() {
    let mut server = Server::new_async().await;
    let token_mock = token_mock(&mut server, 3600).expect(1).create_async().await;
    let user_mock = server
        .mock("GET", "/user")
        .with_status(200)
        .with_body(json!({"data": {"id": "u1", "type": "users", "attributes": {}}}).to_string())
        .expect(3)
        .create_async()
        .await;

    let client = test_client(&server, None);
    let cancel = CancellationToken::new();
    for _ in 0..3 {
        assert!(client.users().get(&cancel).await.unwrap().is_success);
    }

    token_mock.assert_async().await;
    user_mock.assert_async().await;
}

#[test]
fn test_shared_manager_is_keyed_by_client() {
    let first = Config::new(
        "https://api.example.com",
        "https://identity.example.com",
        "shared-client",
        "secret",
        None,
    )
    .unwrap();
    let other = Config::new(
        "https://api.example.com",
        "https://identity.example.com",
        "other-client",
        "secret",
        None,
    )
    .unwrap();

    let a = CredentialManager::shared(&first).unwrap();
    let b = CredentialManager::shared(&first).unwrap();
    let c = CredentialManager::shared(&other).unwrap();

    assert!(Arc::ptr_eq(&a, &b));
    assert!(!Arc::ptr_eq(&a, &c));
}

#[test]
fn test_shared_manager_changes_with_secret() {
    let original = Config::new(
        "https://api.example.com",
        "https://identity.example.com",
        "secret-rotation-client",
        "first-secret",
        None,
    )
    .unwrap();
    let rotated = Config::new(
        "https://api.example.com",
        "https://identity.example.com",
        "secret-rotation-client",
        "second-secret",
        None,
    )
    .unwrap();

    let before = CredentialManager::shared(&original).unwrap();
    let after = CredentialManager::shared(&rotated).unwrap();

    assert!(!Arc::ptr_eq(&before, &after));
    assert!(Arc::ptr_eq(&after, &CredentialManager::shared(&rotated).unwrap()));
}
