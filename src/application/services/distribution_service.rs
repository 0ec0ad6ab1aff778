/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::interfaces::PageStream;
use crate::application::interfaces::distribution::DistributionService;
use crate::application::pager::auto_page;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{ApiRequest, PagingRequest};
use crate::model::responses::{ApiResult, CollectionResult};
use crate::presentation::distribution::{DeliveryProduct, DeliveryProductData};
use async_trait::async_trait;
use futures::StreamExt;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

const DELIVERY_PRODUCTS: &str = "distribution/delivery-products";

/// Implementation of the distribution service
pub struct DistributionServiceImpl {
    http_client: Arc<HttpClient>,
}

impl DistributionServiceImpl {
    /// Creates a new instance of the distribution service
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl DistributionService for DistributionServiceImpl {
    async fn get_delivery_products_page(
        &self,
        paging: Option<PagingRequest>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<CollectionResult<DeliveryProduct>>, AppError> {
        debug!("Getting delivery products page");
        self.http_client
            .send(
                ApiRequest::get(DELIVERY_PRODUCTS).with_optional_paging(paging),
                cancel,
            )
            .await
    }

    fn get_delivery_products_results(
        &self,
        paging: Option<PagingRequest>,
        cancel: &CancellationToken,
    ) -> PageStream<'_, DeliveryProductData> {
        let token = cancel.clone();
        auto_page(paging.unwrap_or_default(), cancel.clone(), move |paging| {
            let token = token.clone();
            async move { self.get_delivery_products_page(Some(paging), &token).await }
        })
        .boxed()
    }
}
