/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::constants::{DEFAULT_BASE_URI, DEFAULT_IDENTITY_URI};
use crate::error::AppError;
use crate::utils::config::{get_env_or_default, get_env_or_none, parse_key_value_list};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, error};
use url::Url;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
#[serde(try_from = "RawConfig")]
/// Main configuration for the Pingen API client
///
/// Built through [`Config::new`], [`Config::from_env`] or deserialization,
/// all of which normalize the endpoint URIs once; the value is not meant to
/// be changed afterwards.
pub struct Config {
    /// Base URI of the REST API, always ending with `/`
    pub base_uri: Url,
    /// Base URI of the identity provider, always ending with `/`
    pub identity_uri: Url,
    /// OAuth client id
    pub client_id: String,
    /// OAuth client secret
    #[serde(skip_serializing, default)]
    pub client_secret: String,
    /// Organisation used to scope requests when none is selected explicitly
    pub default_organisation_id: Option<String>,
    /// Signing keys of registered webhooks, by webhook id
    #[serde(skip_serializing, default)]
    pub webhook_signing_keys: HashMap<String, String>,
}

/// Unvalidated shape of a deserialized [`Config`]
#[derive(Deserialize)]
struct RawConfig {
    base_uri: String,
    identity_uri: String,
    client_id: String,
    #[serde(default)]
    client_secret: String,
    #[serde(default)]
    default_organisation_id: Option<String>,
    #[serde(default)]
    webhook_signing_keys: HashMap<String, String>,
}

impl TryFrom<RawConfig> for Config {
    type Error = AppError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let mut config = Self::new(
            &raw.base_uri,
            &raw.identity_uri,
            &raw.client_id,
            &raw.client_secret,
            raw.default_organisation_id.as_deref(),
        )?;
        config.webhook_signing_keys = raw.webhook_signing_keys;
        Ok(config)
    }
}

impl Config {
    /// Creates a normalized configuration
    ///
    /// # Arguments
    /// * `base_uri` - REST API base, e.g. `https://api.pingen.com`
    /// * `identity_uri` - Identity provider base, e.g. `https://identity.pingen.com`
    /// * `client_id` - OAuth client id
    /// * `client_secret` - OAuth client secret
    /// * `default_organisation_id` - Organisation to scope requests to; blank means none
    ///
    /// # Returns
    /// * `Ok(Config)` - With trailing slashes enforced on both URIs
    /// * `Err(AppError::InvalidConfig)` - If a URI is not an absolute http(s) URL or a credential is blank
    pub fn new(
        base_uri: &str,
        identity_uri: &str,
        client_id: &str,
        client_secret: &str,
        default_organisation_id: Option<&str>,
    ) -> Result<Self, AppError> {
        let client_id = client_id.trim();
        if client_id.is_empty() {
            return Err(AppError::InvalidConfig("client id is empty".to_string()));
        }
        if client_secret.trim().is_empty() {
            return Err(AppError::InvalidConfig("client secret is empty".to_string()));
        }

        Ok(Self {
            base_uri: normalize_uri("base uri", base_uri)?,
            identity_uri: normalize_uri("identity uri", identity_uri)?,
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            default_organisation_id: normalize_organisation_id(default_organisation_id),
            webhook_signing_keys: HashMap::new(),
        })
    }

    /// Registers the signing key of a webhook
    pub fn with_webhook_signing_key(
        mut self,
        webhook_id: impl Into<String>,
        signing_key: impl Into<String>,
    ) -> Self {
        self.webhook_signing_keys
            .insert(webhook_id.into(), signing_key.into());
        self
    }

    /// Returns the signing key registered for a webhook
    #[must_use]
    pub fn webhook_signing_key(&self, webhook_id: &str) -> Option<&str> {
        self.webhook_signing_keys.get(webhook_id).map(String::as_str)
    }

    /// Creates a configuration from environment variables
    ///
    /// Reads `.env` first, then `PINGEN_BASE_URI`, `PINGEN_IDENTITY_URI`,
    /// `PINGEN_CLIENT_ID`, `PINGEN_CLIENT_SECRET`, `PINGEN_ORGANISATION_ID` and
    /// `PINGEN_WEBHOOK_SIGNING_KEYS` (`id=key,id=key`).
    pub fn from_env() -> Result<Self, AppError> {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let base_uri = get_env_or_default("PINGEN_BASE_URI", String::from(DEFAULT_BASE_URI));
        let identity_uri =
            get_env_or_default("PINGEN_IDENTITY_URI", String::from(DEFAULT_IDENTITY_URI));
        let client_id = get_env_or_default("PINGEN_CLIENT_ID", String::new());
        let client_secret = get_env_or_default("PINGEN_CLIENT_SECRET", String::new());
        let organisation_id: Option<String> = get_env_or_none("PINGEN_ORGANISATION_ID");

        if client_id.is_empty() {
            error!("PINGEN_CLIENT_ID not found in environment variables or .env file");
        }
        if client_secret.is_empty() {
            error!("PINGEN_CLIENT_SECRET not found in environment variables or .env file");
        }

        let mut config = Self::new(
            &base_uri,
            &identity_uri,
            &client_id,
            &client_secret,
            organisation_id.as_deref(),
        )?;

        if let Some(raw) = get_env_or_none::<String>("PINGEN_WEBHOOK_SIGNING_KEYS") {
            config.webhook_signing_keys = parse_key_value_list(&raw).into_iter().collect();
        }

        Ok(config)
    }
}

fn normalize_uri(name: &str, raw: &str) -> Result<Url, AppError> {
    let mut uri = Url::parse(raw.trim())
        .map_err(|e| AppError::InvalidConfig(format!("{name} '{raw}' is not a valid URL: {e}")))?;

    if !matches!(uri.scheme(), "http" | "https") || uri.cannot_be_a_base() {
        return Err(AppError::InvalidConfig(format!(
            "{name} '{raw}' must be an absolute http(s) URL"
        )));
    }

    if !uri.path().ends_with('/') {
        let path = format!("{}/", uri.path());
        uri.set_path(&path);
    }
    uri.set_query(None);
    uri.set_fragment(None);
    Ok(uri)
}

fn normalize_organisation_id(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}
