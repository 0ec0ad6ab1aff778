/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::interfaces::PageStream;
use crate::application::interfaces::letter::LetterService;
use crate::application::pager::auto_page;
use crate::application::services::file_service::transfer;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{ApiRequest, PagingRequest};
use crate::model::responses::{ApiResult, CollectionResult, SingleResult};
use crate::presentation::data::{DataPatch, DataPost, DataType};
use crate::presentation::letter::{
    Letter, LetterCreate, LetterData, LetterEvent, LetterPrice, LetterPriceConfiguration,
    LetterSend, LetterUpdate,
};
use async_trait::async_trait;
use futures::StreamExt;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use url::{Url, form_urlencoded};

const LETTERS: &str = "letters";
const PRICE_CALCULATOR: &str = "letters/price-calculator";

fn single(letter_id: &str) -> String {
    format!("{LETTERS}/{letter_id}")
}

fn with_language(path: String, language: &str) -> String {
    let language: String = form_urlencoded::byte_serialize(language.as_bytes()).collect();
    format!("{path}?language={language}")
}

/// Implementation of the letter service
pub struct LetterServiceImpl {
    http_client: Arc<HttpClient>,
}

impl LetterServiceImpl {
    /// Creates a new instance of the letter service
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl LetterService for LetterServiceImpl {
    async fn get_page(
        &self,
        paging: Option<PagingRequest>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<CollectionResult<Letter>>, AppError> {
        debug!("Getting letters page");
        self.http_client
            .send(ApiRequest::get(LETTERS).with_optional_paging(paging), cancel)
            .await
    }

    fn get_page_results(
        &self,
        paging: Option<PagingRequest>,
        cancel: &CancellationToken,
    ) -> PageStream<'_, LetterData> {
        let token = cancel.clone();
        auto_page(paging.unwrap_or_default(), cancel.clone(), move |paging| {
            let token = token.clone();
            async move { self.get_page(Some(paging), &token).await }
        })
        .boxed()
    }

    async fn get(
        &self,
        letter_id: &str,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<SingleResult<Letter>>, AppError> {
        debug!("Getting letter {}", letter_id);
        self.http_client
            .send(ApiRequest::get(single(letter_id)), cancel)
            .await
    }

    async fn create(
        &self,
        letter: LetterCreate,
        idempotency_key: Option<String>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<SingleResult<Letter>>, AppError> {
        info!("Creating letter from '{}'", letter.file_original_name);
        let request = ApiRequest::post(LETTERS)
            .with_body(DataPost::new(DataType::Letters, letter))
            .with_optional_idempotency_key(idempotency_key);
        let result: ApiResult<SingleResult<Letter>> = self.http_client.send(request, cancel).await?;
        if let Some(created) = &result.data {
            info!("✓ Letter created: {}", created.data.id);
        }
        Ok(result)
    }

    async fn send(
        &self,
        letter_id: &str,
        options: LetterSend,
        idempotency_key: Option<String>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<SingleResult<Letter>>, AppError> {
        info!("Sending letter {}", letter_id);
        let request = ApiRequest::patch(format!("{}/send", single(letter_id)))
            .with_body(DataPatch::new(letter_id, DataType::Letters, options))
            .with_optional_idempotency_key(idempotency_key);
        self.http_client.send(request, cancel).await
    }

    async fn cancel(
        &self,
        letter_id: &str,
        idempotency_key: Option<String>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<()>, AppError> {
        info!("Cancelling letter {}", letter_id);
        let request = ApiRequest::patch(format!("{}/cancel", single(letter_id)))
            .with_optional_idempotency_key(idempotency_key);
        self.http_client.send_without_data(request, cancel).await
    }

    async fn update(
        &self,
        letter_id: &str,
        update: LetterUpdate,
        idempotency_key: Option<String>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<()>, AppError> {
        info!("Updating letter {}", letter_id);
        let request = ApiRequest::patch(single(letter_id))
            .with_body(DataPatch::new(letter_id, DataType::Letters, update))
            .with_optional_idempotency_key(idempotency_key);
        self.http_client.send_without_data(request, cancel).await
    }

    async fn delete(
        &self,
        letter_id: &str,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<()>, AppError> {
        info!("Deleting letter {}", letter_id);
        self.http_client
            .send_without_data(ApiRequest::delete(single(letter_id)), cancel)
            .await
    }

    async fn get_file_location(
        &self,
        letter_id: &str,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<()>, AppError> {
        debug!("Getting file location of letter {}", letter_id);
        self.http_client
            .send_without_data(ApiRequest::get(format!("{}/file", single(letter_id))), cancel)
            .await
    }

    async fn download_file(
        &self,
        location: &Url,
        cancel: &CancellationToken,
    ) -> Result<Vec<u8>, AppError> {
        debug!("Downloading file from {}", location.host_str().unwrap_or_default());
        let request = self.http_client.external_client().get(location.clone());
        let content = transfer(request, cancel).await?;
        info!("✓ File downloaded ({} bytes)", content.len());
        Ok(content)
    }

    async fn calculate_price(
        &self,
        configuration: LetterPriceConfiguration,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<SingleResult<LetterPrice>>, AppError> {
        debug!("Calculating letter price for {}", configuration.country);
        let request = ApiRequest::post(PRICE_CALCULATOR).with_body(DataPost::new(
            DataType::LetterPriceCalculator,
            configuration,
        ));
        self.http_client.send(request, cancel).await
    }

    async fn get_events_page(
        &self,
        letter_id: &str,
        language: &str,
        paging: Option<PagingRequest>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<CollectionResult<LetterEvent>>, AppError> {
        debug!("Getting events of letter {}", letter_id);
        let path = with_language(format!("{}/events", single(letter_id)), language);
        self.http_client
            .send(ApiRequest::get(path).with_optional_paging(paging), cancel)
            .await
    }

    async fn get_issues_page(
        &self,
        language: &str,
        paging: Option<PagingRequest>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<CollectionResult<LetterEvent>>, AppError> {
        debug!("Getting letter issues");
        let path = with_language(format!("{LETTERS}/issues"), language);
        self.http_client
            .send(ApiRequest::get(path).with_optional_paging(paging), cancel)
            .await
    }
}
