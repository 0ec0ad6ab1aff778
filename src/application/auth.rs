/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Credential management for the Pingen API
//!
//! This module keeps the bearer credential used by every outbound request:
//! - client-credentials acquisition against the identity provider
//! - freshness checks with a 60 second safety margin
//! - at most one refresh in flight, guarded by a gate with a 10 second wait
//! - one shared manager per `(identity uri, client id, secret)` in the process

use crate::application::config::Config;
use crate::constants::{
    ACCESS_TOKEN_PATH, TOKEN_GATE_TIMEOUT_SECONDS, TOKEN_SAFETY_MARGIN_SECONDS, USER_AGENT,
};
use crate::error::AppError;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use once_cell::sync::Lazy;
use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex as StdMutex, PoisonError};
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};
use url::Url;

/// Managers shared by every client built from the same credentials
static SHARED_MANAGERS: Lazy<StdMutex<HashMap<ManagerKey, Arc<CredentialManager>>>> =
    Lazy::new(|| StdMutex::new(HashMap::new()));

/// Identity uri, client id and SHA-256 digest of the client secret
type ManagerKey = (String, String, String);

fn manager_key(config: &Config) -> ManagerKey {
    let secret_digest = hex::encode(Sha256::digest(config.client_secret.as_bytes()));
    (
        config.identity_uri.to_string(),
        config.client_id.clone(),
        secret_digest,
    )
}

/// Bearer credential issued by the identity provider
#[derive(Clone, PartialEq)]
pub struct Credential {
    /// Access token
    pub token: String,
    /// Token type, normally `Bearer`
    pub token_type: String,
    /// Absolute expiry computed at acquisition time
    pub expires_at: DateTime<Utc>,
}

impl Credential {
    /// Creates a credential that expires `expires_in` seconds from now
    ///
    /// # Returns
    /// * `Err(AppError::AuthenticationFailed)` - If the expiry is not a representable instant
    pub fn new(
        token: impl Into<String>,
        token_type: impl Into<String>,
        expires_in: i64,
    ) -> Result<Self, AppError> {
        let expires_at = ChronoDuration::try_seconds(expires_in)
            .and_then(|lifetime| Utc::now().checked_add_signed(lifetime))
            .ok_or_else(|| {
                AppError::AuthenticationFailed(format!("invalid expires_in received: {expires_in}"))
            })?;

        Ok(Self {
            token: token.into(),
            token_type: token_type.into(),
            expires_at,
        })
    }

    /// Checks whether the credential is still usable
    ///
    /// # Returns
    /// * `true` if `expires_at - 60s` is still in the future
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }

    /// Checks whether the credential is usable at the given instant
    #[must_use]
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at - ChronoDuration::seconds(TOKEN_SAFETY_MARGIN_SECONDS) > now
    }

    /// Value of the `Authorization` header
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct AccessTokenResponse {
    access_token: String,
    #[serde(default = "default_token_type")]
    token_type: String,
    expires_in: i64,
}

fn default_token_type() -> String {
    String::from("Bearer")
}

#[derive(Debug, Deserialize)]
struct AuthenticationErrorBody {
    message: Option<String>,
}

/// Acquires and caches the bearer credential
///
/// Reads never touch the network while the credential is fresh. When it is
/// stale, callers queue on a gate; the first one in refreshes, the others
/// find the new credential on their second check and return.
pub struct CredentialManager {
    token_uri: Url,
    client_id: String,
    client_secret: String,
    http_client: Client,
    credential: RwLock<Option<Arc<Credential>>>,
    gate: Mutex<()>,
    gate_timeout: Duration,
}

impl CredentialManager {
    /// Creates a standalone manager
    ///
    /// # Arguments
    /// * `identity_uri` - Base URI of the identity provider, ending with `/`
    /// * `client_id` - OAuth client id
    /// * `client_secret` - OAuth client secret
    pub fn new(
        identity_uri: &Url,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self, AppError> {
        let http_client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            token_uri: identity_uri.join(ACCESS_TOKEN_PATH)?,
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            http_client,
            credential: RwLock::new(None),
            gate: Mutex::new(()),
            gate_timeout: Duration::from_secs(TOKEN_GATE_TIMEOUT_SECONDS),
        })
    }

    /// Returns the process-wide manager for the credentials in `config`
    ///
    /// Every call with the same identity uri, client id and client secret
    /// returns the same instance, so one credential and one refresh gate serve
    /// all clients. A rotated secret gets a manager of its own.
    pub fn shared(config: &Config) -> Result<Arc<Self>, AppError> {
        let key = manager_key(config);
        let mut managers = SHARED_MANAGERS
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(manager) = managers.get(&key) {
            return Ok(manager.clone());
        }

        let manager = Arc::new(Self::new(
            &config.identity_uri,
            config.client_id.clone(),
            config.client_secret.clone(),
        )?);
        managers.insert(key, manager.clone());
        debug!("Registered credential manager for client {}", config.client_id);
        Ok(manager)
    }

    /// Returns the installed credential, fresh or not
    pub async fn current(&self) -> Option<Arc<Credential>> {
        self.credential.read().await.clone()
    }

    /// Drops the installed credential so the next call re-authenticates
    pub async fn invalidate(&self) {
        *self.credential.write().await = None;
        debug!("Credential invalidated");
    }

    /// Returns a fresh credential, refreshing it if needed
    ///
    /// # Returns
    /// * `Ok(Arc<Credential>)` - A credential valid for at least the safety margin
    /// * `Err(AppError::AuthenticationTimeout)` - If the refresh gate was not acquired in time
    /// * `Err(AppError::AuthenticationFailed)` - If the identity provider rejected the credentials
    /// * `Err(AppError::Cancelled)` - If `cancel` fired while waiting
    pub async fn ensure_valid(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Arc<Credential>, AppError> {
        if let Some(credential) = self.fresh_credential().await {
            return Ok(credential);
        }

        let _gate = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(AppError::Cancelled),
            acquired = tokio::time::timeout(self.gate_timeout, self.gate.lock()) => {
                acquired.map_err(|_| {
                    error!("Timed out waiting for the credential refresh gate");
                    AppError::AuthenticationTimeout
                })?
            }
        };

        if let Some(credential) = self.fresh_credential().await {
            debug!("Credential refreshed by a concurrent caller");
            return Ok(credential);
        }

        let acquired = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(AppError::Cancelled),
            acquired = self.request_credential() => acquired,
        };

        match acquired {
            Ok(credential) => {
                let credential = Arc::new(credential);
                *self.credential.write().await = Some(credential.clone());
                info!("✓ Credential acquired, expires at {}", credential.expires_at);
                Ok(credential)
            }
            Err(AppError::Cancelled) => Err(AppError::Cancelled),
            Err(e) => {
                *self.credential.write().await = None;
                error!("Failed to acquire credential: {}", e);
                Err(e)
            }
        }
    }

    async fn fresh_credential(&self) -> Option<Arc<Credential>> {
        self.credential
            .read()
            .await
            .as_ref()
            .filter(|credential| credential.is_valid())
            .cloned()
    }

    async fn request_credential(&self) -> Result<Credential, AppError> {
        debug!("Sending access token request to: {}", self.token_uri);

        let response = self
            .http_client
            .post(self.token_uri.clone())
            .header(ACCEPT, "application/json")
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        debug!("Access token response status: {}", status);

        if !status.is_success() {
            let message = serde_json::from_slice::<AuthenticationErrorBody>(&body)
                .ok()
                .and_then(|error| error.message)
                .unwrap_or_else(|| {
                    warn!("Invalid authentication error received");
                    format!("identity provider returned status {status}")
                });
            return Err(AppError::AuthenticationFailed(message));
        }

        let token: AccessTokenResponse = serde_json::from_slice(&body).map_err(|e| {
            AppError::AuthenticationFailed(format!("invalid access token received: {e}"))
        })?;

        Credential::new(token.access_token, token.token_type, token.expires_in)
    }
}

impl fmt::Debug for CredentialManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialManager")
            .field("token_uri", &self.token_uri.as_str())
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}
