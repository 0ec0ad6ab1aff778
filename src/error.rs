/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Error types for the Pingen client
//!
//! Two lanes are kept apart:
//! - fatal errors (authentication, cancellation, configuration, transport) are
//!   returned as `Err(AppError)` from every operation;
//! - business failures reported by the API are carried inside
//!   [`ApiResult`](crate::model::responses::ApiResult) and only become
//!   [`AppError::Api`] when a convenience path asks for it.

use crate::model::responses::ApiResult;
use crate::presentation::webhook::WebhookEventData;
use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// The identity endpoint rejected the client credentials
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The credential refresh gate could not be acquired in time
    #[error("authentication timeout")]
    AuthenticationTimeout,

    /// The operation observed a cancellation request
    #[error("operation cancelled")]
    Cancelled,

    /// The request path needs organisation scoping but no organisation is selected
    #[error("organisation not set")]
    OrganisationNotSet,

    /// The API answered with a non-success status
    #[error("api error: status {}", .0.status)]
    Api(Box<ApiResult<()>>),

    /// Webhook signature did not match; carries what could be parsed from the payload
    #[error("webhook validation failed for event '{}'", .0.id)]
    WebhookValidation(Box<WebhookEventData>),

    /// Raw file upload or download was rejected by the storage endpoint
    #[error("file transfer failed with status {status}{}", code_suffix(.code))]
    FileTransfer {
        /// Status returned by the storage endpoint
        status: StatusCode,
        /// Error code reported by the storage endpoint, when it could be parsed
        code: Option<String>,
    },

    /// Configuration values are missing or malformed
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Caller supplied an invalid argument
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Transport level error
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON (de)serialization error
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// URL parsing error
    #[error("url error: {0}")]
    Url(#[from] url::ParseError),
}

impl AppError {
    /// Returns the API result carried by an [`AppError::Api`], if any
    #[must_use]
    pub fn api_result(&self) -> Option<&ApiResult<()>> {
        match self {
            AppError::Api(result) => Some(result),
            _ => None,
        }
    }

    /// Returns `true` for errors that are never worth repeating without caller action
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        !matches!(self, AppError::Api(_) | AppError::FileTransfer { .. })
    }
}

fn code_suffix(code: &Option<String>) -> String {
    code.as_deref().map(|c| format!(": {c}")).unwrap_or_default()
}

/// Convenience result alias used across the crate
pub type PingenResult<T> = Result<T, AppError>;
