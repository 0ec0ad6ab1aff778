use crate::application::interfaces::PageStream;
use crate::error::AppError;
use crate::model::requests::PagingRequest;
use crate::model::responses::{ApiResult, CollectionResult};
use crate::presentation::distribution::{DeliveryProduct, DeliveryProductData};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Interface for the distribution service
#[async_trait]
pub trait DistributionService: Send + Sync {
    /// Gets one page of delivery products
    async fn get_delivery_products_page(
        &self,
        paging: Option<PagingRequest>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<CollectionResult<DeliveryProduct>>, AppError>;

    /// Pages through all delivery products
    fn get_delivery_products_results(
        &self,
        paging: Option<PagingRequest>,
        cancel: &CancellationToken,
    ) -> PageStream<'_, DeliveryProductData>;
}
