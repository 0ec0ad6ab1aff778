use crate::common::{ORGANISATION_ID, TOKEN, letters_page, mock_token, path, test_client};
use mockito::{Matcher, Server};
use pingen_client::prelude::*;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_collection_request_is_scoped_and_authorized() {
    let mut server = Server::new_async().await;
    let token_mock = mock_token(&mut server, 3600).await;
    let letters_mock = server
        .mock("GET", path("/organisations/org-1/letters"))
        .match_header("authorization", format!("Bearer {TOKEN}").as_str())
        .match_header("accept", JSON_API_MEDIA_TYPE)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("sort".into(), "-createdAt".into()),
            Matcher::UrlEncoded("page[limit]".into(), "10".into()),
        ]))
        .with_status(200)
        .with_header("content-type", JSON_API_MEDIA_TYPE)
        .with_header("x-request-id", "req-42")
        .with_header("x-ratelimit-limit", "100")
        .with_header("x-ratelimit-remaining", "99")
        .with_body(letters_page(1, 1).to_string())
        .create_async()
        .await;

    let client = test_client(&server, Some(ORGANISATION_ID));
    let cancel = CancellationToken::new();
    let paging = PagingRequest::new()
        .sort_by("createdAt", SortDirection::Desc)
        .with_page_limit(10);

    let result = client
        .letters()
        .get_page(Some(paging), &cancel)
        .await
        .unwrap();

    assert!(result.is_success);
    assert_eq!(result.request_id, "req-42");
    assert_eq!(result.rate_limit_limit, 100);
    assert_eq!(result.rate_limit_remaining, 99);
    let page = result.data.unwrap();
    assert_eq!(page.data[0].id, "letter-1");

    token_mock.assert_async().await;
    letters_mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_organisation_fails_before_any_network_call() {
    let mut server = Server::new_async().await;
    let token_mock = server
        .mock("POST", "/auth/access-tokens")
        .expect(0)
        .create_async()
        .await;
    let letters_mock = server
        .mock("GET", path("/letters"))
        .expect(0)
        .create_async()
        .await;

    let client = test_client(&server, None);
    let result = client
        .letters()
        .get("letter-1", &CancellationToken::new())
        .await;

    assert!(matches!(result, Err(AppError::OrganisationNotSet)));
    token_mock.assert_async().await;
    letters_mock.assert_async().await;
}

#[tokio::test]
async fn test_unscoped_paths_work_without_organisation() {
    let mut server = Server::new_async().await;
    let _token_mock = mock_token(&mut server, 3600).await;
    let user_mock = server
        .mock("GET", "/user")
        .with_status(200)
        .with_body(
            json!({"data": {"id": "u1", "type": "users", "attributes": {"email": "jane@example.com"}}})
                .to_string(),
        )
        .create_async()
        .await;

    let client = test_client(&server, None);
    let result = client.users().get(&CancellationToken::new()).await.unwrap();

    assert!(result.is_success);
    assert_eq!(result.data.unwrap().data.id, "u1");
    user_mock.assert_async().await;
}

#[tokio::test]
async fn test_selected_organisation_is_used_for_scoping() {
    let mut server = Server::new_async().await;
    let _token_mock = mock_token(&mut server, 3600).await;
    let letter_mock = server
        .mock("GET", "/organisations/org-2/letters/l1")
        .with_status(200)
        .with_body(json!({"data": {"id": "l1", "type": "letters", "attributes": {}}}).to_string())
        .create_async()
        .await;

    let client = test_client(&server, Some(ORGANISATION_ID));
    client.set_organisation_id("org-2");
    assert_eq!(client.organisation_id().as_deref(), Some("org-2"));

    let result = client
        .letters()
        .get("l1", &CancellationToken::new())
        .await
        .unwrap();
    assert!(result.is_success);
    letter_mock.assert_async().await;
}

#[tokio::test]
async fn test_write_sends_envelope_and_idempotency_key() {
    let mut server = Server::new_async().await;
    let _token_mock = mock_token(&mut server, 3600).await;
    let create_mock = server
        .mock("POST", "/organisations/org-1/letters")
        .match_header("idempotency-key", "key-1")
        .match_header("content-type", JSON_API_MEDIA_TYPE)
        .match_body(Matcher::PartialJson(json!({
            "data": {
                "type": "letters",
                "attributes": {
                    "file_original_name": "invoice.pdf",
                    "file_url": "https://storage.example.com/upload/abc",
                    "file_url_signature": "sig",
                    "address_position": "left",
                    "auto_send": false
                }
            }
        })))
        .with_status(201)
        .with_header("idempotent-replayed", "true")
        .with_body(
            json!({"data": {"id": "l9", "type": "letters", "attributes": {"status": "validating"}}})
                .to_string(),
        )
        .create_async()
        .await;

    let client = test_client(&server, Some(ORGANISATION_ID));
    let letter = LetterCreate {
        file_original_name: "invoice.pdf".to_string(),
        file_url: "https://storage.example.com/upload/abc".to_string(),
        file_url_signature: "sig".to_string(),
        ..Default::default()
    };

    let result = client
        .letters()
        .create(letter, Some("key-1".to_string()), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(result.status, StatusCode::CREATED);
    assert!(result.idempotent_replayed);
    assert_eq!(result.data.unwrap().data.id, "l9");
    create_mock.assert_async().await;
}

#[tokio::test]
async fn test_write_without_key_sends_no_idempotency_header() {
    let mut server = Server::new_async().await;
    let _token_mock = mock_token(&mut server, 3600).await;
    let cancel_mock = server
        .mock("PATCH", "/organisations/org-1/letters/l1/cancel")
        .match_header("idempotency-key", Matcher::Missing)
        .match_header("content-type", Matcher::Missing)
        .with_status(202)
        .create_async()
        .await;

    let client = test_client(&server, Some(ORGANISATION_ID));
    let result = client
        .letters()
        .cancel("l1", None, &CancellationToken::new())
        .await
        .unwrap();

    assert!(result.is_success);
    assert!(result.data.is_none());
    cancel_mock.assert_async().await;
}

#[tokio::test]
async fn test_file_location_redirect_is_success_without_data() {
    let mut server = Server::new_async().await;
    let _token_mock = mock_token(&mut server, 3600).await;
    let file_mock = server
        .mock("GET", "/organisations/org-1/letters/l1/file")
        .with_status(302)
        .with_header("location", "https://storage.example.com/files/l1.pdf?sig=abc")
        .create_async()
        .await;

    let client = test_client(&server, Some(ORGANISATION_ID));
    let result = client
        .letters()
        .get_file_location("l1", &CancellationToken::new())
        .await
        .unwrap();

    assert!(result.is_success);
    assert_eq!(result.status, StatusCode::FOUND);
    assert_eq!(
        result.location.unwrap().as_str(),
        "https://storage.example.com/files/l1.pdf?sig=abc"
    );
    file_mock.assert_async().await;
}

#[tokio::test]
async fn test_api_error_is_returned_in_result() {
    let mut server = Server::new_async().await;
    let _token_mock = mock_token(&mut server, 3600).await;
    let _letter_mock = server
        .mock("GET", "/organisations/org-1/letters/missing")
        .with_status(404)
        .with_header("x-request-id", "req-404")
        .with_body(
            json!({"errors": [{"code": "not_found", "title": "Not Found", "detail": "No such letter"}]})
                .to_string(),
        )
        .create_async()
        .await;

    let client = test_client(&server, Some(ORGANISATION_ID));
    let result = client
        .letters()
        .get("missing", &CancellationToken::new())
        .await
        .unwrap();

    assert!(!result.is_success);
    assert_eq!(result.status, StatusCode::NOT_FOUND);
    assert!(result.data.is_none());
    assert_eq!(
        result.error.as_ref().and_then(|e| e.code.as_deref()),
        Some("not_found")
    );

    let error = result.into_data().unwrap_err();
    let api_result = error.api_result().unwrap();
    assert_eq!(api_result.request_id, "req-404");
}

#[tokio::test]
async fn test_throttled_response_carries_retry_after() {
    let mut server = Server::new_async().await;
    let _token_mock = mock_token(&mut server, 3600).await;
    let _letters_mock = server
        .mock("GET", path("/organisations/org-1/letters"))
        .with_status(429)
        .with_header("retry-after", "30")
        .with_header("x-ratelimit-remaining", "0")
        .with_header("x-ratelimit-reset", "1700000000")
        .with_body("Too Many Requests")
        .create_async()
        .await;

    let client = test_client(&server, Some(ORGANISATION_ID));
    let result = client
        .letters()
        .get_page(None, &CancellationToken::new())
        .await
        .unwrap();

    assert!(!result.is_success);
    assert_eq!(result.retry_after, Some(30));
    assert_eq!(result.rate_limit_remaining, 0);
    assert_eq!(result.rate_limit_reset.unwrap().timestamp(), 1_700_000_000);
    assert!(result.error.is_none());
}

#[tokio::test]
async fn test_cancelled_request_is_not_sent() {
    let mut server = Server::new_async().await;
    let _token_mock = mock_token(&mut server, 3600).await;
    let letters_mock = server
        .mock("GET", path("/organisations/org-1/letters"))
        .expect(0)
        .create_async()
        .await;

    let client = test_client(&server, Some(ORGANISATION_ID));
    let cancel = CancellationToken::new();
    cancel.cancel();

    let result = client.letters().get_page(None, &cancel).await;
    assert!(matches!(result, Err(AppError::Cancelled)));
    letters_mock.assert_async().await;
}
