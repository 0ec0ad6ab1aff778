/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::interfaces::PageStream;
use crate::application::interfaces::user::UserService;
use crate::application::pager::auto_page;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{ApiRequest, PagingRequest};
use crate::model::responses::{ApiResult, CollectionResult, SingleResult};
use crate::presentation::user::{User, UserAssociation, UserAssociationData};
use async_trait::async_trait;
use futures::StreamExt;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

const USER: &str = "user";
const ASSOCIATIONS: &str = "user/associations";

/// Implementation of the user service
pub struct UserServiceImpl {
    http_client: Arc<HttpClient>,
}

impl UserServiceImpl {
    /// Creates a new instance of the user service
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn get(
        &self,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<SingleResult<User>>, AppError> {
        debug!("Getting user");
        self.http_client.send(ApiRequest::get(USER), cancel).await
    }

    async fn get_associations_page(
        &self,
        paging: Option<PagingRequest>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<CollectionResult<UserAssociation>>, AppError> {
        debug!("Getting user associations page");
        self.http_client
            .send(
                ApiRequest::get(ASSOCIATIONS).with_optional_paging(paging),
                cancel,
            )
            .await
    }

    fn get_associations_results(
        &self,
        paging: Option<PagingRequest>,
        cancel: &CancellationToken,
    ) -> PageStream<'_, UserAssociationData> {
        let token = cancel.clone();
        auto_page(paging.unwrap_or_default(), cancel.clone(), move |paging| {
            let token = token.clone();
            async move { self.get_associations_page(Some(paging), &token).await }
        })
        .boxed()
    }
}
