/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::interfaces::file::FileService;
use crate::error::AppError;
use crate::model::http::{HttpClient, TransportResponse, cancellable};
use crate::model::requests::ApiRequest;
use crate::model::responses::{ApiError, ApiResult, SingleResult};
use crate::presentation::file::FileUpload;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

const FILE_UPLOAD: &str = "file-upload";

static STORAGE_ERROR_CODE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"<Code>\s*(.*?)\s*</Code>").ok());

/// Reads the error code of a storage endpoint response
///
/// Object storage answers with an XML `<Error><Code>...</Code></Error>`
/// document; a JSON:API error body is accepted as well.
pub fn storage_error_code(body: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(body);
    let from_xml = STORAGE_ERROR_CODE
        .as_ref()
        .and_then(|pattern| pattern.captures(&text))
        .and_then(|captures| captures.get(1))
        .map(|code| code.as_str().to_string())
        .filter(|code| !code.is_empty());

    from_xml.or_else(|| ApiError::parse(body).and_then(|error| error.code))
}

/// Executes a raw transfer against a storage URL
///
/// # Returns
/// * `Ok(Vec<u8>)` - Response body of a 2xx answer
/// * `Err(AppError::FileTransfer)` - For any other status
pub(crate) async fn transfer(
    request: reqwest::RequestBuilder,
    cancel: &CancellationToken,
) -> Result<Vec<u8>, AppError> {
    let response = cancellable(cancel, async {
        let response = request.send().await?;
        TransportResponse::read(response).await
    })
    .await?;

    if response.status.is_success() {
        return Ok(response.body);
    }

    let code = storage_error_code(&response.body);
    error!(
        "File transfer failed with status {}: {}",
        response.status,
        code.as_deref().unwrap_or("no error code")
    );
    Err(AppError::FileTransfer {
        status: response.status,
        code,
    })
}

/// Implementation of the file upload service
pub struct FileServiceImpl {
    http_client: Arc<HttpClient>,
}

impl FileServiceImpl {
    /// Creates a new instance of the file upload service
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl FileService for FileServiceImpl {
    async fn get_upload_path(
        &self,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<SingleResult<FileUpload>>, AppError> {
        debug!("Requesting file upload path");
        self.http_client
            .send(ApiRequest::get(FILE_UPLOAD), cancel)
            .await
    }

    async fn upload_file(
        &self,
        upload: &FileUpload,
        content: Vec<u8>,
        cancel: &CancellationToken,
    ) -> Result<(), AppError> {
        info!("Uploading file ({} bytes)", content.len());
        let request = self
            .http_client
            .external_client()
            .put(&upload.url)
            .body(content);
        transfer(request, cancel).await?;
        info!("✓ File uploaded");
        Ok(())
    }
}
