use crate::error::AppError;
use crate::model::responses::{ApiResult, SingleResult};
use crate::presentation::file::FileUpload;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Interface for the file upload service
#[async_trait]
pub trait FileService: Send + Sync {
    /// Requests a signed URL to upload a file to
    async fn get_upload_path(
        &self,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<SingleResult<FileUpload>>, AppError>;

    /// Uploads the file content to the signed URL
    ///
    /// # Returns
    /// * `Err(AppError::FileTransfer)` - If the storage endpoint rejects the upload,
    ///   with its error code when one could be read
    async fn upload_file(
        &self,
        upload: &FileUpload,
        content: Vec<u8>,
        cancel: &CancellationToken,
    ) -> Result<(), AppError>;
}
