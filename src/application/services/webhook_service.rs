/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::interfaces::PageStream;
use crate::application::interfaces::webhook::WebhookService;
use crate::application::pager::auto_page;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{ApiRequest, PagingRequest};
use crate::model::responses::{ApiResult, CollectionResult, SingleResult};
use crate::presentation::data::{DataPost, DataType};
use crate::presentation::webhook::{Webhook, WebhookCreate, WebhookData};
use async_trait::async_trait;
use futures::StreamExt;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

const WEBHOOKS: &str = "webhooks";

/// Implementation of the webhook service
pub struct WebhookServiceImpl {
    http_client: Arc<HttpClient>,
}

impl WebhookServiceImpl {
    /// Creates a new instance of the webhook service
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl WebhookService for WebhookServiceImpl {
    async fn get_page(
        &self,
        paging: Option<PagingRequest>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<CollectionResult<Webhook>>, AppError> {
        debug!("Getting webhooks page");
        self.http_client
            .send(ApiRequest::get(WEBHOOKS).with_optional_paging(paging), cancel)
            .await
    }

    fn get_page_results(
        &self,
        paging: Option<PagingRequest>,
        cancel: &CancellationToken,
    ) -> PageStream<'_, WebhookData> {
        let token = cancel.clone();
        auto_page(paging.unwrap_or_default(), cancel.clone(), move |paging| {
            let token = token.clone();
            async move { self.get_page(Some(paging), &token).await }
        })
        .boxed()
    }

    async fn create(
        &self,
        webhook: WebhookCreate,
        idempotency_key: Option<String>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<SingleResult<Webhook>>, AppError> {
        info!("Registering webhook for {}", webhook.url);
        let request = ApiRequest::post(WEBHOOKS)
            .with_body(DataPost::new(DataType::Webhooks, webhook))
            .with_optional_idempotency_key(idempotency_key);
        self.http_client.send(request, cancel).await
    }

    async fn get(
        &self,
        webhook_id: &str,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<SingleResult<Webhook>>, AppError> {
        debug!("Getting webhook {}", webhook_id);
        self.http_client
            .send(ApiRequest::get(format!("{WEBHOOKS}/{webhook_id}")), cancel)
            .await
    }

    async fn delete(
        &self,
        webhook_id: &str,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<()>, AppError> {
        info!("Deleting webhook {}", webhook_id);
        self.http_client
            .send_without_data(ApiRequest::delete(format!("{WEBHOOKS}/{webhook_id}")), cancel)
            .await
    }
}
