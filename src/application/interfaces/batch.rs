use crate::application::interfaces::PageStream;
use crate::error::AppError;
use crate::model::requests::PagingRequest;
use crate::model::responses::{ApiResult, CollectionResult, SingleResult};
use crate::presentation::batch::{Batch, BatchCreate, BatchData};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Interface for the batch service
#[async_trait]
pub trait BatchService: Send + Sync {
    /// Gets one page of batches
    async fn get_page(
        &self,
        paging: Option<PagingRequest>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<CollectionResult<Batch>>, AppError>;

    /// Pages through all batches
    fn get_page_results(
        &self,
        paging: Option<PagingRequest>,
        cancel: &CancellationToken,
    ) -> PageStream<'_, BatchData>;

    /// Creates a batch from an uploaded file
    async fn create(
        &self,
        batch: BatchCreate,
        idempotency_key: Option<String>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<SingleResult<Batch>>, AppError>;

    /// Gets a single batch
    async fn get(
        &self,
        batch_id: &str,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<SingleResult<Batch>>, AppError>;
}
