/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::auth::CredentialManager;
use crate::application::config::Config;
use crate::application::services::{
    BatchServiceImpl, DistributionServiceImpl, FileServiceImpl, LetterServiceImpl, OrganisationServiceImpl,
    UserServiceImpl, WebhookServiceImpl,
};
use crate::application::webhook;
use crate::constants::headers;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::presentation::webhook::WebhookEventEnvelope;
use reqwest::header::HeaderMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Pingen API client
///
/// All services share one [`HttpClient`], so the selected organisation and
/// the credential are common to every call made through this client.
pub struct Client {
    http_client: Arc<HttpClient>,
    letters: LetterServiceImpl,
    batches: BatchServiceImpl,
    organisations: OrganisationServiceImpl,
    users: UserServiceImpl,
    webhooks: WebhookServiceImpl,
    files: FileServiceImpl,
    distribution: DistributionServiceImpl,
}

impl Client {
    /// Creates a client that shares the process-wide credential for `config`
    pub fn new(config: Config) -> Result<Self, AppError> {
        Ok(Self::from_http_client(Arc::new(HttpClient::new(config)?)))
    }

    /// Creates a client from the environment, see [`Config::from_env`]
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(Config::from_env()?)
    }

    /// Creates a client with an explicitly injected credential manager
    pub fn with_credential_manager(
        config: Config,
        credentials: Arc<CredentialManager>,
    ) -> Result<Self, AppError> {
        let http_client = HttpClient::with_credential_manager(config, credentials)?;
        Ok(Self::from_http_client(Arc::new(http_client)))
    }

    /// Creates a client over an existing connection handler
    pub fn from_http_client(http_client: Arc<HttpClient>) -> Self {
        debug!("Creating Pingen client for {}", http_client.config().base_uri);
        Self {
            letters: LetterServiceImpl::new(http_client.clone()),
            batches: BatchServiceImpl::new(http_client.clone()),
            organisations: OrganisationServiceImpl::new(http_client.clone()),
            users: UserServiceImpl::new(http_client.clone()),
            webhooks: WebhookServiceImpl::new(http_client.clone()),
            files: FileServiceImpl::new(http_client.clone()),
            distribution: DistributionServiceImpl::new(http_client.clone()),
            http_client,
        }
    }

    /// Connection handler used by every service
    pub fn http_client(&self) -> &Arc<HttpClient> {
        &self.http_client
    }

    /// Selects the organisation used to scope subsequent requests
    pub fn set_organisation_id(&self, organisation_id: &str) {
        self.http_client.set_organisation_id(organisation_id);
    }

    /// Currently selected organisation
    pub fn organisation_id(&self) -> Option<String> {
        self.http_client.organisation_id()
    }

    /// Letter operations
    pub fn letters(&self) -> &LetterServiceImpl {
        &self.letters
    }

    /// Batch operations
    pub fn batches(&self) -> &BatchServiceImpl {
        &self.batches
    }

    /// Organisation operations
    pub fn organisations(&self) -> &OrganisationServiceImpl {
        &self.organisations
    }

    /// User operations
    pub fn users(&self) -> &UserServiceImpl {
        &self.users
    }

    /// Webhook operations
    pub fn webhooks(&self) -> &WebhookServiceImpl {
        &self.webhooks
    }

    /// File upload operations
    pub fn files(&self) -> &FileServiceImpl {
        &self.files
    }

    /// Distribution operations
    pub fn distribution(&self) -> &DistributionServiceImpl {
        &self.distribution
    }

    /// Validates a webhook delivery with the signing key configured for `webhook_id`
    ///
    /// # Arguments
    /// * `webhook_id` - Id of the webhook the delivery was sent for
    /// * `signature` - Value of the [`headers::SIGNATURE`] header
    /// * `payload` - Raw request body
    ///
    /// # Returns
    /// * `Err(AppError::InvalidInput)` - If no signing key is configured for `webhook_id`
    /// * `Err(AppError::WebhookValidation)` - If the signature does not match
    pub fn validate_webhook(
        &self,
        webhook_id: &str,
        signature: &str,
        payload: &[u8],
    ) -> Result<WebhookEventEnvelope, AppError> {
        let Some(signing_key) = self.http_client.config().webhook_signing_key(webhook_id) else {
            warn!("No signing key configured for webhook {}", webhook_id);
            return Err(AppError::InvalidInput(format!(
                "no signing key configured for webhook '{webhook_id}'"
            )));
        };
        webhook::validate_and_parse(signing_key, signature, payload)
    }

    /// Validates a webhook delivery, reading the signature from its headers
    ///
    /// A missing or non-ASCII [`headers::SIGNATURE`] header is treated as an
    /// empty signature and fails validation.
    pub fn validate_webhook_request(
        &self,
        webhook_id: &str,
        request_headers: &HeaderMap,
        payload: &[u8],
    ) -> Result<WebhookEventEnvelope, AppError> {
        let signature = request_headers
            .get(headers::SIGNATURE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        if signature.is_empty() {
            warn!("Webhook delivery for {} carries no signature", webhook_id);
        }
        self.validate_webhook(webhook_id, signature, payload)
    }
}
