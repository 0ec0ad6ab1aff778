// Common utilities for tests running against a mock Pingen server

use mockito::{Matcher, Mock, ServerGuard};
use pingen_client::prelude::*;
use serde_json::{Value, json};

pub const ORGANISATION_ID: &str = "org-1";
pub const TOKEN: &str = "token-abc";

/// Configuration pointing both the API and the identity provider at `server`
pub fn test_config(server: &ServerGuard, organisation_id: Option<&str>) -> Config {
    Config::new(
        &server.url(),
        &server.url(),
        "test-client",
        "test-secret",
        organisation_id,
    )
    .unwrap()
}

/// Client with its own credential manager, isolated from other tests
pub fn test_client(server: &ServerGuard, organisation_id: Option<&str>) -> Client {
    let config = test_config(server, organisation_id);
    let credentials = Arc::new(
        CredentialManager::new(&config.identity_uri, &config.client_id, &config.client_secret)
            .unwrap(),
    );
    Client::with_credential_manager(config, credentials).unwrap()
}

/// Matches `path` with or without a query string
pub fn path(path: &str) -> Matcher {
    Matcher::Regex(format!(r"^{}(\?.*)?$", regex::escape(path)))
}

/// Builds, without registering, a successful access token response
pub fn token_mock(server: &mut ServerGuard, expires_in: i64) -> Mock {
    server
        .mock("POST", "/auth/access-tokens")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("grant_type".into(), "client_credentials".into()),
            Matcher::UrlEncoded("client_id".into(), "test-client".into()),
            Matcher::UrlEncoded("client_secret".into(), "test-secret".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"access_token": TOKEN, "token_type": "Bearer", "expires_in": expires_in})
                .to_string(),
        )
}

/// Mocks a successful access token response, expected once
pub async fn mock_token(server: &mut ServerGuard, expires_in: i64) -> Mock {
    token_mock(server, expires_in).create_async().await
}

/// One page of a letters collection
pub fn letters_page(current_page: u32, last_page: u32) -> Value {
    json!({
        "data": [{
            "id": format!("letter-{current_page}"),
            "type": "letters",
            "attributes": {"status": "valid", "file_original_name": "invoice.pdf"}
        }],
        "links": {"self": format!("/letters?page[number]={current_page}")},
        "meta": {"current_page": current_page, "last_page": last_page, "per_page": 1, "total": last_page}
    })
}
