/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Result envelope and response payloads

use crate::error::AppError;
use crate::presentation::data::{Data, DataIdentity, DataType};
use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

/// Location of the offending input of an API error
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct ApiErrorSource {
    /// JSON pointer into the request body
    #[serde(default)]
    pub pointer: Option<String>,
    /// Offending query parameter
    #[serde(default)]
    pub parameter: Option<String>,
}

/// Structured error returned by the API for non-success responses
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct ApiError {
    /// Application specific error code
    #[serde(default)]
    pub code: Option<String>,
    /// Short summary
    #[serde(default)]
    pub title: Option<String>,
    /// Detailed explanation
    #[serde(default)]
    pub detail: Option<String>,
    /// Offending input
    #[serde(default)]
    pub source: Option<ApiErrorSource>,
}

#[derive(Deserialize)]
struct ApiErrorDocument {
    errors: Vec<ApiError>,
}

impl ApiError {
    /// Parses an error body, either a JSON:API `{"errors": [...]}` document
    /// (first entry wins) or a bare error object.
    ///
    /// Returns `None` when the body is neither.
    pub fn parse(body: &[u8]) -> Option<Self> {
        if let Ok(document) = serde_json::from_slice::<ApiErrorDocument>(body) {
            return document.errors.into_iter().next();
        }
        serde_json::from_slice::<ApiError>(body)
            .ok()
            .filter(|error| *error != ApiError::default())
    }
}

/// Uniform outcome of every API call.
///
/// `data` is only ever set when `is_success` is true, `error` only when it is
/// false. Use `ApiResult<()>` for calls that carry no payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResult<T> {
    /// Whether the call succeeded (any 2xx, or 302 Found)
    pub is_success: bool,
    /// Raw HTTP status
    pub status: StatusCode,
    /// Correlation id assigned by the API, empty when absent
    pub request_id: String,
    /// Requests allowed in the current window
    pub rate_limit_limit: i64,
    /// Requests left in the current window
    pub rate_limit_remaining: i64,
    /// When the current window resets
    pub rate_limit_reset: Option<DateTime<Utc>>,
    /// Seconds to wait before repeating a throttled request
    pub retry_after: Option<u64>,
    /// Whether the response replays an earlier idempotent request
    pub idempotent_replayed: bool,
    /// Error details for failed calls
    pub error: Option<ApiError>,
    /// Redirect target, e.g. a file location
    pub location: Option<Url>,
    /// Payload of successful calls
    pub data: Option<T>,
}

impl<T> ApiResult<T> {
    /// Returns the envelope without its payload
    pub fn without_data(self) -> ApiResult<()> {
        ApiResult {
            is_success: self.is_success,
            status: self.status,
            request_id: self.request_id,
            rate_limit_limit: self.rate_limit_limit,
            rate_limit_remaining: self.rate_limit_remaining,
            rate_limit_reset: self.rate_limit_reset,
            retry_after: self.retry_after,
            idempotent_replayed: self.idempotent_replayed,
            error: self.error,
            location: self.location,
            data: None,
        }
    }

    /// Turns a failed result into [`AppError::Api`]
    pub fn ensure_success(self) -> Result<Self, AppError> {
        if self.is_success {
            Ok(self)
        } else {
            Err(AppError::Api(Box::new(self.without_data())))
        }
    }

    /// Returns the payload of a successful result, or raises the API error
    pub fn into_data(self) -> Result<Option<T>, AppError> {
        Ok(self.ensure_success()?.data)
    }
}

/// Links of a collection page
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct CollectionLinks {
    /// First page
    #[serde(default)]
    pub first: Option<String>,
    /// Last page
    #[serde(default)]
    pub last: Option<String>,
    /// Previous page
    #[serde(default)]
    pub prev: Option<String>,
    /// Next page
    #[serde(default)]
    pub next: Option<String>,
    /// This page
    #[serde(rename = "self", default)]
    pub self_link: Option<String>,
}

/// Page metadata of a collection page
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct CollectionMeta {
    /// Number of this page
    pub current_page: u32,
    /// Number of the last page
    pub last_page: u32,
    /// Page size
    #[serde(default)]
    pub per_page: Option<u32>,
    /// Index of the first item on this page
    #[serde(default)]
    pub from: Option<u64>,
    /// Index of the last item on this page
    #[serde(default)]
    pub to: Option<u64>,
    /// Total number of items
    #[serde(default)]
    pub total: Option<u64>,
}

impl CollectionMeta {
    /// Whether this is the last page
    #[must_use]
    pub fn is_last_page(&self) -> bool {
        self.current_page >= self.last_page
    }
}

/// One page of a collection endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollectionResult<A> {
    /// Items on this page
    #[serde(default = "Vec::new")]
    pub data: Vec<Data<A>>,
    /// Page links
    #[serde(default)]
    pub links: Option<CollectionLinks>,
    /// Page metadata; absent on endpoints that are not paged
    #[serde(default)]
    pub meta: Option<CollectionMeta>,
    /// Included related resources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub included: Option<Vec<Value>>,
}

/// Payload of a single resource endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SingleResult<A> {
    /// The resource
    pub data: Data<A>,
    /// Included related resources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub included: Option<Vec<Value>>,
}

/// Finds the first included resource of the given type and parses it
pub fn find_included<A: DeserializeOwned>(
    included: Option<&[Value]>,
    data_type: DataType,
) -> Option<Data<A>> {
    included?
        .iter()
        .find(|item| {
            serde_json::from_value::<DataIdentity>((*item).clone())
                .is_ok_and(|identity| identity.data_type == data_type)
        })
        .and_then(|item| serde_json::from_value(item.clone()).ok())
}
