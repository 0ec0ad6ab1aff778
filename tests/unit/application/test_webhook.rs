use crate::common::{ORGANISATION_ID, test_config};
use mockito::Server;
use pingen_client::constants::headers;
use pingen_client::prelude::*;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::json;

const WEBHOOK_ID: &str = "wh-1";
const SIGNING_KEY: &str = "whsec_integration";

fn delivery() -> Vec<u8> {
    serde_json::to_vec(&json!({
        "data": {
            "id": "evt-42",
            "type": "webhook_sent",
            "attributes": {"reason": null, "url": "https://hooks.example.com/pingen"},
            "links": {"self": "https://api.example.com/webhooks/evt-42"}
        },
        "included": [
            {"id": "let-7", "type": "letters", "attributes": {"status": "sent", "tracking_number": "RR123"}}
        ]
    }))
    .unwrap()
}

async fn client_with_key() -> (mockito::ServerGuard, Client) {
    let server = Server::new_async().await;
    let config = test_config(&server, Some(ORGANISATION_ID))
        .with_webhook_signing_key(WEBHOOK_ID, SIGNING_KEY);
    let client = Client::with_credential_manager(
        config.clone(),
        Arc::new(
            CredentialManager::new(&config.identity_uri, &config.client_id, &config.client_secret)
                .unwrap(),
        ),
    )
    .unwrap();
    (server, client)
}

#[tokio::test]
async fn test_client_validates_signed_delivery() {
    let (_server, client) = client_with_key().await;
    let payload = delivery();
    let signature = compute_signature(SIGNING_KEY, &payload).unwrap();

    let envelope = client
        .validate_webhook(WEBHOOK_ID, &signature, &payload)
        .unwrap();

    assert_eq!(envelope.event.id, "evt-42");
    assert_eq!(envelope.event.data_type, DataType::WebhookSent);
    assert_eq!(envelope.payload, payload);
    assert_eq!(envelope.signature, signature);
    let letter = envelope.letter.unwrap();
    assert_eq!(letter.attributes.tracking_number.as_deref(), Some("RR123"));
    assert!(envelope.organisation.is_none());
    assert!(envelope.letter_event.is_none());
}

#[tokio::test]
async fn test_client_rejects_signature_from_other_key() {
    let (_server, client) = client_with_key().await;
    let payload = delivery();
    let signature = compute_signature("some-other-key", &payload).unwrap();

    match client.validate_webhook(WEBHOOK_ID, &signature, &payload) {
        Err(AppError::WebhookValidation(event)) => assert_eq!(event.id, "evt-42"),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_client_requires_known_webhook() {
    let (_server, client) = client_with_key().await;
    let payload = delivery();
    let signature = compute_signature(SIGNING_KEY, &payload).unwrap();

    let result = client.validate_webhook("unknown", &signature, &payload);
    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}

#[tokio::test]
async fn test_client_reads_signature_header() {
    let (_server, client) = client_with_key().await;
    let payload = delivery();
    let signature = compute_signature(SIGNING_KEY, &payload).unwrap();
    let mut request_headers = HeaderMap::new();
    request_headers.insert(headers::SIGNATURE, HeaderValue::from_str(&signature).unwrap());
    request_headers.insert("content-type", HeaderValue::from_static("application/json"));

    let envelope = client
        .validate_webhook_request(WEBHOOK_ID, &request_headers, &payload)
        .unwrap();

    assert_eq!(envelope.event.id, "evt-42");
    assert_eq!(envelope.signature, signature);
}

#[tokio::test]
async fn test_client_rejects_delivery_without_signature_header() {
    let (_server, client) = client_with_key().await;
    let payload = delivery();

    match client.validate_webhook_request(WEBHOOK_ID, &HeaderMap::new(), &payload) {
        Err(AppError::WebhookValidation(event)) => assert_eq!(event.id, "evt-42"),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_signature_header_value_is_lowercase_hex() {
    let signature = compute_signature(SIGNING_KEY, &delivery()).unwrap();
    assert_eq!(signature.len(), 64);
    assert!(
        signature
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    );
    assert!(!validate(SIGNING_KEY, &signature.to_uppercase(), &delivery()));
}
