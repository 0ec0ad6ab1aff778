use pingen_client::prelude::*;
use std::env;
use std::sync::{Mutex, PoisonError};

const VARS: [&str; 6] = [
    "PINGEN_BASE_URI",
    "PINGEN_IDENTITY_URI",
    "PINGEN_CLIENT_ID",
    "PINGEN_CLIENT_SECRET",
    "PINGEN_ORGANISATION_ID",
    "PINGEN_WEBHOOK_SIGNING_KEYS",
];

// The environment is process-wide and tests run in parallel
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with exactly the given `PINGEN_*` variables set
fn with_env<T>(vars: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
    let _guard = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    unsafe {
        for name in VARS {
            env::remove_var(name);
        }
        for (name, value) in vars {
            env::set_var(name, value);
        }
    }
    let result = f();
    unsafe {
        for name in VARS {
            env::remove_var(name);
        }
    }
    result
}

#[test]
fn test_from_env_uses_pingen_defaults() {
    let config = with_env(
        &[("PINGEN_CLIENT_ID", "env-client"), ("PINGEN_CLIENT_SECRET", "env-secret")],
        Config::from_env,
    )
    .unwrap();

    assert_eq!(config.base_uri.as_str(), DEFAULT_BASE_URI);
    assert_eq!(config.identity_uri.as_str(), DEFAULT_IDENTITY_URI);
    assert_eq!(config.client_id, "env-client");
    assert_eq!(config.client_secret, "env-secret");
    assert!(config.default_organisation_id.is_none());
    assert!(config.webhook_signing_keys.is_empty());
}

#[test]
fn test_from_env_normalizes_uris_and_organisation() {
    let config = with_env(
        &[
            ("PINGEN_BASE_URI", "https://api-staging.pingen.com/v2?debug=1"),
            ("PINGEN_IDENTITY_URI", " https://identity-staging.pingen.com "),
            ("PINGEN_CLIENT_ID", "env-client"),
            ("PINGEN_CLIENT_SECRET", "env-secret"),
            ("PINGEN_ORGANISATION_ID", " org-9 "),
        ],
        Config::from_env,
    )
    .unwrap();

    assert_eq!(config.base_uri.as_str(), "https://api-staging.pingen.com/v2/");
    assert_eq!(config.identity_uri.as_str(), "https://identity-staging.pingen.com/");
    assert_eq!(config.default_organisation_id.as_deref(), Some("org-9"));
}

#[test]
fn test_from_env_blank_organisation_is_none() {
    let config = with_env(
        &[
            ("PINGEN_CLIENT_ID", "env-client"),
            ("PINGEN_CLIENT_SECRET", "env-secret"),
            ("PINGEN_ORGANISATION_ID", "   "),
        ],
        Config::from_env,
    )
    .unwrap();

    assert!(config.default_organisation_id.is_none());
}

#[test]
fn test_from_env_reads_webhook_signing_keys() {
    let config = with_env(
        &[
            ("PINGEN_CLIENT_ID", "env-client"),
            ("PINGEN_CLIENT_SECRET", "env-secret"),
            ("PINGEN_WEBHOOK_SIGNING_KEYS", "wh-1=key-1, wh-2 = key-2,broken,=orphan"),
        ],
        Config::from_env,
    )
    .unwrap();

    assert_eq!(config.webhook_signing_keys.len(), 2);
    assert_eq!(config.webhook_signing_key("wh-1"), Some("key-1"));
    assert_eq!(config.webhook_signing_key("wh-2"), Some("key-2"));
    assert_eq!(config.webhook_signing_key("broken"), None);
}

#[test]
fn test_from_env_requires_credentials() {
    let missing_secret = with_env(&[("PINGEN_CLIENT_ID", "env-client")], Config::from_env);
    assert!(matches!(missing_secret, Err(AppError::InvalidConfig(_))));

    let missing_id = with_env(&[("PINGEN_CLIENT_SECRET", "env-secret")], Config::from_env);
    assert!(matches!(missing_id, Err(AppError::InvalidConfig(_))));
}

#[test]
fn test_from_env_rejects_invalid_base_uri() {
    let result = with_env(
        &[
            ("PINGEN_BASE_URI", "ftp://api.pingen.com"),
            ("PINGEN_CLIENT_ID", "env-client"),
            ("PINGEN_CLIENT_SECRET", "env-secret"),
        ],
        Config::from_env,
    );

    assert!(matches!(result, Err(AppError::InvalidConfig(_))));
}

#[test]
fn test_client_from_env_selects_configured_organisation() {
    let client = with_env(
        &[
            ("PINGEN_CLIENT_ID", "env-client-org"),
            ("PINGEN_CLIENT_SECRET", "env-secret"),
            ("PINGEN_ORGANISATION_ID", "org-env"),
        ],
        Client::from_env,
    )
    .unwrap();

    assert_eq!(client.organisation_id().as_deref(), Some("org-env"));
}
