use crate::application::interfaces::PageStream;
use crate::error::AppError;
use crate::model::requests::PagingRequest;
use crate::model::responses::{ApiResult, CollectionResult, SingleResult};
use crate::presentation::user::{User, UserAssociation, UserAssociationData};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Interface for the user service
#[async_trait]
pub trait UserService: Send + Sync {
    /// Gets the authenticated user
    async fn get(&self, cancel: &CancellationToken)
    -> Result<ApiResult<SingleResult<User>>, AppError>;

    /// Gets one page of the user's organisation associations
    async fn get_associations_page(
        &self,
        paging: Option<PagingRequest>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<CollectionResult<UserAssociation>>, AppError>;

    /// Pages through all organisation associations
    fn get_associations_results(
        &self,
        paging: Option<PagingRequest>,
        cancel: &CancellationToken,
    ) -> PageStream<'_, UserAssociationData>;
}
