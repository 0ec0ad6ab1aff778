use crate::application::interfaces::PageStream;
use crate::error::AppError;
use crate::model::requests::PagingRequest;
use crate::model::responses::{ApiResult, CollectionResult, SingleResult};
use crate::presentation::webhook::{Webhook, WebhookCreate, WebhookData};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Interface for the webhook service
#[async_trait]
pub trait WebhookService: Send + Sync {
    /// Gets one page of webhooks
    async fn get_page(
        &self,
        paging: Option<PagingRequest>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<CollectionResult<Webhook>>, AppError>;

    /// Pages through all webhooks
    fn get_page_results(
        &self,
        paging: Option<PagingRequest>,
        cancel: &CancellationToken,
    ) -> PageStream<'_, WebhookData>;

    /// Registers a webhook
    async fn create(
        &self,
        webhook: WebhookCreate,
        idempotency_key: Option<String>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<SingleResult<Webhook>>, AppError>;

    /// Gets a single webhook
    async fn get(
        &self,
        webhook_id: &str,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<SingleResult<Webhook>>, AppError>;

    /// Deletes a webhook
    async fn delete(
        &self,
        webhook_id: &str,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<()>, AppError>;
}
