/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Lazy page sequence over collection endpoints

use crate::error::AppError;
use crate::model::requests::PagingRequest;
use crate::model::responses::{ApiResult, CollectionResult};
use crate::presentation::data::Data;
use futures::Stream;
use futures::stream;
use std::future::Future;
use tokio_util::sync::CancellationToken;
use tracing::debug;

enum Cursor {
    Next(PagingRequest),
    Done,
}

/// Pages through a collection endpoint, one fetch per item pulled
///
/// Starts at the seed's page number (1 when unset) and keeps every other
/// paging field of the seed. After a page is yielded only the page number
/// advances. The stream ends after a page without metadata, after the last
/// page, or when `cancel` fires. A failed page is yielded as
/// [`AppError::Api`] and ends the stream.
///
/// # Arguments
/// * `seed` - Paging request of the first page
/// * `cancel` - Stops the sequence before the next fetch
/// * `fetch` - Fetches one page
pub fn auto_page<A, F, Fut>(
    seed: PagingRequest,
    cancel: CancellationToken,
    fetch: F,
) -> impl Stream<Item = Result<Vec<Data<A>>, AppError>>
where
    F: FnMut(PagingRequest) -> Fut,
    Fut: Future<Output = Result<ApiResult<CollectionResult<A>>, AppError>>,
{
    let first_page = seed.page_number.unwrap_or(1);
    let cursor = Cursor::Next(seed.with_page_number(first_page));

    stream::unfold((cursor, fetch, cancel), |(cursor, mut fetch, cancel)| async move {
        let Cursor::Next(paging) = cursor else {
            return None;
        };
        if cancel.is_cancelled() {
            debug!("Paging cancelled before page {:?}", paging.page_number);
            return None;
        }

        let page_number = paging.page_number.unwrap_or(1);
        let collection = match fetch(paging.clone()).await.and_then(ApiResult::into_data) {
            Ok(Some(collection)) => collection,
            Ok(None) => return None,
            Err(AppError::Cancelled) => {
                debug!("Paging cancelled while fetching page {}", page_number);
                return None;
            }
            Err(e) => return Some((Err(e), (Cursor::Done, fetch, cancel))),
        };

        let next = match &collection.meta {
            Some(meta) if !meta.is_last_page() => match page_number.checked_add(1) {
                Some(next_page) => Cursor::Next(paging.with_page_number(next_page)),
                None => Cursor::Done,
            },
            _ => Cursor::Done,
        };
        debug!(
            "Fetched page {} ({} items)",
            page_number,
            collection.data.len()
        );

        Some((Ok(collection.data), (next, fetch, cancel)))
    })
}
