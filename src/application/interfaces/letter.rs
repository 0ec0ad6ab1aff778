use crate::application::interfaces::PageStream;
use crate::error::AppError;
use crate::model::requests::PagingRequest;
use crate::model::responses::{ApiResult, CollectionResult, SingleResult};
use crate::presentation::letter::{
    Letter, LetterCreate, LetterData, LetterEvent, LetterPrice, LetterPriceConfiguration,
    LetterSend, LetterUpdate,
};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use url::Url;

/// Interface for the letter service
#[async_trait]
pub trait LetterService: Send + Sync {
    /// Gets one page of letters
    async fn get_page(
        &self,
        paging: Option<PagingRequest>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<CollectionResult<Letter>>, AppError>;

    /// Pages through all letters, starting at the page of `paging`
    fn get_page_results(
        &self,
        paging: Option<PagingRequest>,
        cancel: &CancellationToken,
    ) -> PageStream<'_, LetterData>;

    /// Gets a single letter
    async fn get(
        &self,
        letter_id: &str,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<SingleResult<Letter>>, AppError>;

    /// Creates a letter from a previously uploaded file
    ///
    /// # Arguments
    /// * `letter` - Attributes of the new letter
    /// * `idempotency_key` - Sent as `Idempotency-Key` when present
    /// * `cancel` - Cancellation signal
    async fn create(
        &self,
        letter: LetterCreate,
        idempotency_key: Option<String>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<SingleResult<Letter>>, AppError>;

    /// Sends a validated letter
    async fn send(
        &self,
        letter_id: &str,
        options: LetterSend,
        idempotency_key: Option<String>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<SingleResult<Letter>>, AppError>;

    /// Cancels a letter that has not been handed over yet
    async fn cancel(
        &self,
        letter_id: &str,
        idempotency_key: Option<String>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<()>, AppError>;

    /// Changes the paper types of a letter
    async fn update(
        &self,
        letter_id: &str,
        update: LetterUpdate,
        idempotency_key: Option<String>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<()>, AppError>;

    /// Deletes a letter
    async fn delete(
        &self,
        letter_id: &str,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<()>, AppError>;

    /// Gets the location of the letter's PDF
    ///
    /// The API answers with 302 Found; the file URL is in `location`.
    async fn get_file_location(
        &self,
        letter_id: &str,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<()>, AppError>;

    /// Downloads a file from a location returned by [`LetterService::get_file_location`]
    ///
    /// # Returns
    /// * `Err(AppError::FileTransfer)` - If the storage endpoint rejects the download
    async fn download_file(
        &self,
        location: &Url,
        cancel: &CancellationToken,
    ) -> Result<Vec<u8>, AppError>;

    /// Calculates the price of a letter configuration
    async fn calculate_price(
        &self,
        configuration: LetterPriceConfiguration,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<SingleResult<LetterPrice>>, AppError>;

    /// Gets one page of events of a letter
    async fn get_events_page(
        &self,
        letter_id: &str,
        language: &str,
        paging: Option<PagingRequest>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<CollectionResult<LetterEvent>>, AppError>;

    /// Gets one page of issue events across all letters
    async fn get_issues_page(
        &self,
        language: &str,
        paging: Option<PagingRequest>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<CollectionResult<LetterEvent>>, AppError>;
}
