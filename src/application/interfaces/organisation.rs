use crate::application::interfaces::PageStream;
use crate::error::AppError;
use crate::model::requests::PagingRequest;
use crate::model::responses::{ApiResult, CollectionResult, SingleResult};
use crate::presentation::organisation::{Organisation, OrganisationData};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Interface for the organisation service
#[async_trait]
pub trait OrganisationService: Send + Sync {
    /// Gets one page of organisations the user belongs to
    async fn get_page(
        &self,
        paging: Option<PagingRequest>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<CollectionResult<Organisation>>, AppError>;

    /// Pages through all organisations
    fn get_page_results(
        &self,
        paging: Option<PagingRequest>,
        cancel: &CancellationToken,
    ) -> PageStream<'_, OrganisationData>;

    /// Gets a single organisation
    async fn get(
        &self,
        organisation_id: &str,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<SingleResult<Organisation>>, AppError>;
}
