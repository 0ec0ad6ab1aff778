/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::interfaces::PageStream;
use crate::application::interfaces::batch::BatchService;
use crate::application::pager::auto_page;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{ApiRequest, PagingRequest};
use crate::model::responses::{ApiResult, CollectionResult, SingleResult};
use crate::presentation::batch::{Batch, BatchCreate, BatchData};
use crate::presentation::data::{DataPost, DataType};
use async_trait::async_trait;
use futures::StreamExt;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

const BATCHES: &str = "batches";

/// Implementation of the batch service
pub struct BatchServiceImpl {
    http_client: Arc<HttpClient>,
}

impl BatchServiceImpl {
    /// Creates a new instance of the batch service
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl BatchService for BatchServiceImpl {
    async fn get_page(
        &self,
        paging: Option<PagingRequest>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<CollectionResult<Batch>>, AppError> {
        debug!("Getting batches page");
        self.http_client
            .send(ApiRequest::get(BATCHES).with_optional_paging(paging), cancel)
            .await
    }

    fn get_page_results(
        &self,
        paging: Option<PagingRequest>,
        cancel: &CancellationToken,
    ) -> PageStream<'_, BatchData> {
        let token = cancel.clone();
        auto_page(paging.unwrap_or_default(), cancel.clone(), move |paging| {
            let token = token.clone();
            async move { self.get_page(Some(paging), &token).await }
        })
        .boxed()
    }

    async fn create(
        &self,
        batch: BatchCreate,
        idempotency_key: Option<String>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<SingleResult<Batch>>, AppError> {
        info!("Creating batch '{}' from {}", batch.name, batch.file_original_name);
        let request = ApiRequest::post(BATCHES)
            .with_body(DataPost::new(DataType::Batches, batch))
            .with_optional_idempotency_key(idempotency_key);
        self.http_client.send(request, cancel).await
    }

    async fn get(
        &self,
        batch_id: &str,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<SingleResult<Batch>>, AppError> {
        debug!("Getting batch {}", batch_id);
        self.http_client
            .send(ApiRequest::get(format!("{BATCHES}/{batch_id}")), cancel)
            .await
    }
}
