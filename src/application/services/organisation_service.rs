/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::interfaces::PageStream;
use crate::application::interfaces::organisation::OrganisationService;
use crate::application::pager::auto_page;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{ApiRequest, PagingRequest};
use crate::model::responses::{ApiResult, CollectionResult, SingleResult};
use crate::presentation::organisation::{Organisation, OrganisationData};
use async_trait::async_trait;
use futures::StreamExt;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

const ORGANISATIONS: &str = "organisations";

/// Implementation of the organisation service
pub struct OrganisationServiceImpl {
    http_client: Arc<HttpClient>,
}

impl OrganisationServiceImpl {
    /// Creates a new instance of the organisation service
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl OrganisationService for OrganisationServiceImpl {
    async fn get_page(
        &self,
        paging: Option<PagingRequest>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<CollectionResult<Organisation>>, AppError> {
        debug!("Getting organisations page");
        self.http_client
            .send(
                ApiRequest::get(ORGANISATIONS).with_optional_paging(paging),
                cancel,
            )
            .await
    }

    fn get_page_results(
        &self,
        paging: Option<PagingRequest>,
        cancel: &CancellationToken,
    ) -> PageStream<'_, OrganisationData> {
        let token = cancel.clone();
        auto_page(paging.unwrap_or_default(), cancel.clone(), move |paging| {
            let token = token.clone();
            async move { self.get_page(Some(paging), &token).await }
        })
        .boxed()
    }

    async fn get(
        &self,
        organisation_id: &str,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<SingleResult<Organisation>>, AppError> {
        debug!("Getting organisation {}", organisation_id);
        self.http_client
            .send(
                ApiRequest::get(format!("{ORGANISATIONS}/{organisation_id}")),
                cancel,
            )
            .await
    }
}
