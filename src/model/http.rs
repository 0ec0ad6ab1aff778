/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Request building, response interpretation and the connection handler

use crate::application::auth::CredentialManager;
use crate::application::config::Config;
use crate::constants::{JSON_API_MEDIA_TYPE, UNSCOPED_PATH_ROOTS, USER_AGENT, headers};
use crate::error::AppError;
use crate::model::requests::ApiRequest;
use crate::model::responses::{ApiError, ApiResult};
use chrono::{DateTime, Utc};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, Response, StatusCode, redirect};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::sync::{Arc, PoisonError, RwLock};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use url::Url;

/// Fully addressed request, ready to hand to the transport
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL, organisation scoped where required, with query
    pub url: Url,
    /// Request headers
    pub headers: HeaderMap,
    /// Encoded `{"data": ...}` body
    pub body: Option<Vec<u8>>,
}

impl TransportRequest {
    /// Attaches the bearer authorization header
    pub fn with_authorization(mut self, value: &str) -> Result<Self, AppError> {
        let mut value = HeaderValue::from_str(value)
            .map_err(|_| AppError::InvalidInput("invalid authorization header".to_string()))?;
        value.set_sensitive(true);
        self.headers.insert(AUTHORIZATION, value);
        Ok(self)
    }
}

#[derive(Serialize)]
struct DataEnvelope<'a, B> {
    data: &'a B,
}

/// Turns logical requests into transport requests
///
/// Pure: no I/O, no credential handling. Paths whose first segment is one of
/// `user`, `organisations` or `file-upload` are addressed as given; every
/// other path is prefixed with `organisations/{id}/`.
#[derive(Debug, Clone, Copy)]
pub struct RequestBuilder<'a> {
    base_uri: &'a Url,
    organisation_id: Option<&'a str>,
}

impl<'a> RequestBuilder<'a> {
    /// Creates a builder over a normalized base URI
    pub fn new(base_uri: &'a Url, organisation_id: Option<&'a str>) -> Self {
        Self {
            base_uri,
            organisation_id,
        }
    }

    /// Resolves a request path to an absolute URL, applying organisation scoping
    ///
    /// # Returns
    /// * `Err(AppError::OrganisationNotSet)` - If the path needs scoping and no organisation is selected
    pub fn resolve(&self, path: &str) -> Result<Url, AppError> {
        let path = path.trim_start_matches('/');
        let root = path
            .split(['/', '?'])
            .next()
            .unwrap_or_default();

        let scoped = if UNSCOPED_PATH_ROOTS.contains(&root) {
            path.to_string()
        } else {
            let organisation_id = self
                .organisation_id
                .filter(|id| !id.trim().is_empty())
                .ok_or(AppError::OrganisationNotSet)?;
            format!("organisations/{organisation_id}/{path}")
        };

        Ok(self.base_uri.join(&scoped)?)
    }

    /// Builds the transport request for a logical request
    pub fn build<B: Serialize>(&self, request: &ApiRequest<B>) -> Result<TransportRequest, AppError> {
        let mut url = self.resolve(&request.path)?;

        if let Some(paging) = &request.paging {
            let pairs = paging.query_pairs()?;
            if !pairs.is_empty() {
                let mut query = url.query_pairs_mut();
                for (key, value) in &pairs {
                    query.append_pair(key, value);
                }
            }
        }

        let mut request_headers = HeaderMap::new();
        request_headers.insert(ACCEPT, HeaderValue::from_static(JSON_API_MEDIA_TYPE));

        if let Some(key) = request.idempotency_key.as_deref().filter(|k| !k.is_empty()) {
            let value = HeaderValue::from_str(key).map_err(|_| {
                AppError::InvalidInput(format!("invalid idempotency key: {key}"))
            })?;
            request_headers.insert(headers::IDEMPOTENCY_KEY, value);
        }

        let body = match &request.body {
            Some(payload) => {
                request_headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_API_MEDIA_TYPE));
                Some(serde_json::to_vec(&DataEnvelope { data: payload })?)
            }
            None => None,
        };

        Ok(TransportRequest {
            method: request.method.clone(),
            url,
            headers: request_headers,
            body,
        })
    }
}

/// Raw transport response: status, headers and body bytes
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Body bytes, possibly empty
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Creates a response from its parts
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Reads a reqwest response to the end
    pub async fn read(response: Response) -> Result<Self, AppError> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();
        Ok(Self {
            status,
            headers,
            body,
        })
    }

    /// Any 2xx status, or 302 Found
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success() || self.status == StatusCode::FOUND
    }

    /// Interprets the response into a result envelope with payload
    ///
    /// The body is only deserialized for a literal 2xx status, so a 302 is
    /// successful but carries its answer in `location` only.
    ///
    /// # Returns
    /// * `Err(AppError::Json)` - If a non-empty 2xx body does not match `T`
    pub fn interpret<T: DeserializeOwned>(self) -> Result<ApiResult<T>, AppError> {
        let carries_data = self.status.is_success() && has_content(&self.body);
        let data = if carries_data {
            Some(serde_json::from_slice::<T>(&self.body)?)
        } else {
            None
        };

        let envelope = self.interpret_without_data();
        Ok(ApiResult {
            is_success: envelope.is_success,
            status: envelope.status,
            request_id: envelope.request_id,
            rate_limit_limit: envelope.rate_limit_limit,
            rate_limit_remaining: envelope.rate_limit_remaining,
            rate_limit_reset: envelope.rate_limit_reset,
            retry_after: envelope.retry_after,
            idempotent_replayed: envelope.idempotent_replayed,
            error: envelope.error,
            location: envelope.location,
            data,
        })
    }

    /// Interprets the response into a result envelope without payload
    pub fn interpret_without_data(self) -> ApiResult<()> {
        let is_success = self.is_success();
        let error = if is_success {
            None
        } else {
            ApiError::parse(&self.body)
        };

        ApiResult {
            is_success,
            status: self.status,
            request_id: self
                .header(headers::REQUEST_ID)
                .map(str::to_string)
                .unwrap_or_default(),
            rate_limit_limit: self.header_parsed(headers::RATE_LIMIT_LIMIT).unwrap_or(0),
            rate_limit_remaining: self
                .header_parsed(headers::RATE_LIMIT_REMAINING)
                .unwrap_or(0),
            rate_limit_reset: self.header(headers::RATE_LIMIT_RESET).and_then(parse_reset),
            retry_after: self.header_parsed(headers::RETRY_AFTER),
            idempotent_replayed: self
                .header(headers::IDEMPOTENT_REPLAYED)
                .is_some_and(|v| v.eq_ignore_ascii_case("true")),
            error,
            location: self
                .header(headers::LOCATION)
                .and_then(|v| Url::parse(v).ok()),
            data: None,
        }
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }

    fn header_parsed<T: std::str::FromStr>(&self, name: &str) -> Option<T> {
        self.header(name).and_then(|v| v.parse().ok())
    }
}

fn has_content(body: &[u8]) -> bool {
    body.iter().any(|b| !b.is_ascii_whitespace())
}

fn parse_reset(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(seconds) = value.parse::<i64>() {
        return DateTime::from_timestamp(seconds, 0);
    }
    DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_rfc2822(value))
        .ok()
        .map(|date| date.with_timezone(&Utc))
}

/// Runs `future` unless `cancel` fires first
pub async fn cancellable<F, T>(cancel: &CancellationToken, future: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(AppError::Cancelled),
        result = future => result,
    }
}

/// Connection handler for the Pingen API
///
/// Owns the normalized configuration, the shared credential manager and the
/// currently selected organisation. Every call goes through the same steps:
/// build, authenticate, send, interpret.
pub struct HttpClient {
    config: Arc<Config>,
    credentials: Arc<CredentialManager>,
    organisation_id: RwLock<Option<String>>,
    api_client: Client,
    external_client: Client,
}

impl HttpClient {
    /// Creates a client that uses the process-wide credential for `config`
    pub fn new(config: Config) -> Result<Self, AppError> {
        let credentials = CredentialManager::shared(&config)?;
        Self::with_credential_manager(config, credentials)
    }

    /// Creates a client with an explicitly injected credential manager
    pub fn with_credential_manager(
        config: Config,
        credentials: Arc<CredentialManager>,
    ) -> Result<Self, AppError> {
        let api_client = Client::builder()
            .user_agent(USER_AGENT)
            .redirect(redirect::Policy::none())
            .build()?;
        let external_client = Client::builder().user_agent(USER_AGENT).build()?;
        let organisation_id = RwLock::new(config.default_organisation_id.clone());

        Ok(Self {
            config: Arc::new(config),
            credentials,
            organisation_id,
            api_client,
            external_client,
        })
    }

    /// Normalized configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Credential manager used by this client
    pub fn credentials(&self) -> &Arc<CredentialManager> {
        &self.credentials
    }

    /// Client for raw transfers outside the API (signed storage URLs)
    pub fn external_client(&self) -> &Client {
        &self.external_client
    }

    /// Selects the organisation used to scope subsequent requests
    pub fn set_organisation_id(&self, organisation_id: &str) {
        let organisation_id = organisation_id.trim();
        let selected = (!organisation_id.is_empty()).then(|| organisation_id.to_string());
        *self
            .organisation_id
            .write()
            .unwrap_or_else(PoisonError::into_inner) = selected;
        info!("Organisation set to '{}'", organisation_id);
    }

    /// Currently selected organisation
    pub fn organisation_id(&self) -> Option<String> {
        self.organisation_id
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Builds the transport request for `request` against the selected organisation
    pub fn build_request<B: Serialize>(
        &self,
        request: &ApiRequest<B>,
    ) -> Result<TransportRequest, AppError> {
        let organisation_id = self.organisation_id();
        RequestBuilder::new(&self.config.base_uri, organisation_id.as_deref()).build(request)
    }

    /// Sends a request and interprets the response with payload `T`
    pub async fn send<B: Serialize, T: DeserializeOwned>(
        &self,
        request: ApiRequest<B>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<T>, AppError> {
        self.execute(&request, cancel).await?.interpret()
    }

    /// Sends a request and interprets the response without payload
    pub async fn send_without_data<B: Serialize>(
        &self,
        request: ApiRequest<B>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<()>, AppError> {
        Ok(self.execute(&request, cancel).await?.interpret_without_data())
    }

    async fn execute<B: Serialize>(
        &self,
        request: &ApiRequest<B>,
        cancel: &CancellationToken,
    ) -> Result<TransportResponse, AppError> {
        let transport = self.build_request(request)?;
        let credential = self.credentials.ensure_valid(cancel).await?;
        let transport = transport.with_authorization(&credential.authorization_header())?;

        debug!("{} {}", transport.method, transport.url);

        let mut builder = self
            .api_client
            .request(transport.method, transport.url)
            .headers(transport.headers);
        if let Some(body) = transport.body {
            builder = builder.body(body);
        }

        let response = cancellable(cancel, async {
            let response = builder.send().await?;
            TransportResponse::read(response).await
        })
        .await?;

        debug!("Response status: {}", response.status);
        Ok(response)
    }
}
