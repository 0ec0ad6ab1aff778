use crate::common::{ORGANISATION_ID, letters_page, mock_token, path};
use futures::{StreamExt, TryStreamExt, pin_mut};
use mockito::{Matcher, Mock, Server, ServerGuard};
use pingen_client::prelude::*;
use serde_json::json;

async fn mock_letters_page(server: &mut ServerGuard, page: u32, last_page: u32, hits: usize) -> Mock {
    server
        .mock("GET", path("/organisations/org-1/letters"))
        .match_query(Matcher::UrlEncoded("page[number]".into(), page.to_string()))
        .with_status(200)
        .with_header("content-type", JSON_API_MEDIA_TYPE)
        .with_body(letters_page(page, last_page).to_string())
        .expect(hits)
        .create_async()
        .await
}

fn client_for(server: &ServerGuard) -> Client {
    crate::common::test_client(server, Some(ORGANISATION_ID))
}

#[tokio::test]
async fn test_pages_through_all_letters() {
    let mut server = Server::new_async().await;
    let _token_mock = mock_token(&mut server, 3600).await;
    let mut pages = Vec::new();
    for page in 1..=3 {
        pages.push(mock_letters_page(&mut server, page, 3, 1).await);
    }

    let client = client_for(&server);
    let letters: Vec<Vec<LetterData>> = client
        .letters()
        .get_page_results(None, &CancellationToken::new())
        .try_collect()
        .await
        .unwrap();

    let ids: Vec<&str> = letters.iter().flatten().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["letter-1", "letter-2", "letter-3"]);
    for page in pages {
        page.assert_async().await;
    }
}

#[tokio::test]
async fn test_paging_keeps_caller_parameters() {
    let mut server = Server::new_async().await;
    let _token_mock = mock_token(&mut server, 3600).await;
    let mut pages = Vec::new();
    for page in 2..=3 {
        pages.push(
            server
                .mock("GET", path("/organisations/org-1/letters"))
                .match_query(Matcher::AllOf(vec![
                    Matcher::UrlEncoded("page[number]".into(), page.to_string()),
                    Matcher::UrlEncoded("page[limit]".into(), "1".into()),
                    Matcher::UrlEncoded("q".into(), "invoice".into()),
                ]))
                .with_status(200)
                .with_body(letters_page(page, 3).to_string())
                .create_async()
                .await,
        );
    }

    let client = client_for(&server);
    let paging = PagingRequest::new()
        .with_search("invoice")
        .with_page_number(2)
        .with_page_limit(1);
    let letters: Vec<Vec<LetterData>> = client
        .letters()
        .get_page_results(Some(paging), &CancellationToken::new())
        .try_collect()
        .await
        .unwrap();

    assert_eq!(letters.len(), 2);
    for page in pages {
        page.assert_async().await;
    }
}

#[tokio::test]
async fn test_stops_after_unpaged_response() {
    let mut server = Server::new_async().await;
    let _token_mock = mock_token(&mut server, 3600).await;
    let products_mock = server
        .mock("GET", path("/organisations/org-1/distribution/delivery-products"))
        .with_status(200)
        .with_body(
            json!({"data": [
                {"id": "cheap", "type": "delivery_products", "attributes": {"name": "Cheap"}},
                {"id": "fast", "type": "delivery_products", "attributes": {"name": "Fast"}}
            ]})
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let pages: Vec<Vec<DeliveryProductData>> = client
        .distribution()
        .get_delivery_products_results(None, &CancellationToken::new())
        .try_collect()
        .await
        .unwrap();

    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].len(), 2);
    products_mock.assert_async().await;
}

#[tokio::test]
async fn test_failed_page_raises_api_error() {
    let mut server = Server::new_async().await;
    let _token_mock = mock_token(&mut server, 3600).await;
    let _first = mock_letters_page(&mut server, 1, 3, 1).await;
    let _second = server
        .mock("GET", path("/organisations/org-1/letters"))
        .match_query(Matcher::UrlEncoded("page[number]".into(), "2".into()))
        .with_status(500)
        .with_header("x-request-id", "req-500")
        .with_body(json!({"errors": [{"code": "server_error"}]}).to_string())
        .create_async()
        .await;
    let third = mock_letters_page(&mut server, 3, 3, 0).await;

    let client = client_for(&server);
    let stream = client
        .letters()
        .get_page_results(None, &CancellationToken::new());
    pin_mut!(stream);

    assert_eq!(stream.next().await.unwrap().unwrap().len(), 1);
    match stream.next().await {
        Some(Err(AppError::Api(result))) => {
            assert_eq!(result.status.as_u16(), 500);
            assert_eq!(result.request_id, "req-500");
        }
        other => panic!("expected api error, got {other:?}"),
    }
    assert!(stream.next().await.is_none());
    third.assert_async().await;
}

#[tokio::test]
async fn test_cancellation_stops_paging() {
    let mut server = Server::new_async().await;
    let _token_mock = mock_token(&mut server, 3600).await;
    let first = mock_letters_page(&mut server, 1, 3, 1).await;
    let second = mock_letters_page(&mut server, 2, 3, 0).await;

    let client = client_for(&server);
    let cancel = CancellationToken::new();
    let stream = client.letters().get_page_results(None, &cancel);
    pin_mut!(stream);

    assert!(stream.next().await.unwrap().is_ok());
    cancel.cancel();
    assert!(stream.next().await.is_none());

    first.assert_async().await;
    second.assert_async().await;
}
