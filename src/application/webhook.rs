/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Signature validation of inbound webhook deliveries
//!
//! Pingen signs each delivery with HMAC-SHA256 over the raw body, keyed with
//! the webhook's signing key, and sends the digest as lowercase hex.

use crate::error::AppError;
use crate::model::responses::find_included;
use crate::presentation::data::DataType;
use crate::presentation::webhook::{WebhookEventData, WebhookEventEnvelope};
use constant_time_eq::constant_time_eq;
use hmac::{Hmac, Mac};
use serde::Deserialize;
use serde_json::Value;
use sha2::Sha256;
use tracing::{debug, warn};

type HmacSha256 = Hmac<Sha256>;

#[derive(Deserialize)]
struct WebhookDocument {
    data: WebhookEventData,
    #[serde(default)]
    included: Option<Vec<Value>>,
}

/// Computes the signature Pingen sends for `payload`
///
/// # Returns
/// * Lowercase hex HMAC-SHA256 digest, two characters per byte, no separators
pub fn compute_signature(signing_key: &str, payload: &[u8]) -> Result<String, AppError> {
    let mut mac = HmacSha256::new_from_slice(signing_key.as_bytes())
        .map_err(|e| AppError::InvalidInput(format!("invalid signing key: {e}")))?;
    mac.update(payload);
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Checks a provided signature against the raw payload
///
/// The comparison is exact: an uppercase or prefixed signature does not match.
pub fn validate(signing_key: &str, signature: &str, payload: &[u8]) -> bool {
    match compute_signature(signing_key, payload) {
        Ok(expected) => constant_time_eq(expected.as_bytes(), signature.as_bytes()),
        Err(_) => false,
    }
}

/// Validates a delivery and parses the event with its embedded resources
///
/// # Returns
/// * `Ok(WebhookEventEnvelope)` - Signature matched and the body parsed
/// * `Err(AppError::WebhookValidation)` - Signature mismatch; carries whatever
///   could be parsed from the body, or a placeholder event
/// * `Err(AppError::Json)` - Signature matched but the body is not a webhook event
pub fn validate_and_parse(
    signing_key: &str,
    signature: &str,
    payload: &[u8],
) -> Result<WebhookEventEnvelope, AppError> {
    if !validate(signing_key, signature, payload) {
        let event = parse_best_effort(payload);
        warn!("Webhook signature mismatch for event '{}'", event.id);
        return Err(AppError::WebhookValidation(Box::new(event)));
    }

    let document: WebhookDocument = serde_json::from_slice(payload)?;
    let included = document.included.as_deref();
    debug!("Webhook event '{}' validated", document.data.id);

    Ok(WebhookEventEnvelope {
        payload: payload.to_vec(),
        signature: signature.to_string(),
        organisation: find_included(included, DataType::Organisations),
        letter: find_included(included, DataType::Letters),
        letter_event: find_included(included, DataType::LettersEvents),
        event: document.data,
    })
}

fn parse_best_effort(payload: &[u8]) -> WebhookEventData {
    if let Ok(document) = serde_json::from_slice::<WebhookDocument>(payload) {
        return document.data;
    }
    serde_json::from_slice::<WebhookEventData>(payload).unwrap_or_default()
}
