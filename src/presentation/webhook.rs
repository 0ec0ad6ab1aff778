/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::presentation::data::{Data, DataLinks, DataType};
use crate::presentation::letter::{LetterData, LetterEventData};
use crate::presentation::organisation::OrganisationData;
use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Category of events a webhook subscribes to
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WebhookEventCategory {
    /// Letters that could not be processed
    #[default]
    Issues,
    /// Letters handed over to the carrier
    Sent,
    /// Letters returned as undeliverable
    Undeliverable,
}

/// Attributes of a webhook subscription
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct Webhook {
    /// Subscribed event category
    #[serde(default)]
    pub event_category: Option<WebhookEventCategory>,
    /// Target URL
    #[serde(default)]
    pub url: Option<String>,
    /// Key used to sign deliveries
    #[serde(default)]
    pub signing_key: Option<String>,
}

/// A webhook resource
pub type WebhookData = Data<Webhook>;

/// Attributes used to create a webhook
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct WebhookCreate {
    /// Event category to subscribe to
    pub event_category: WebhookEventCategory,
    /// Target URL
    pub url: String,
    /// Key used to sign deliveries
    pub signing_key: String,
}

/// Attributes of a delivered webhook event
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct WebhookEvent {
    /// Reason of the event, e.g. the issue description
    #[serde(default)]
    pub reason: Option<String>,
    /// URL the event was delivered to
    #[serde(default)]
    pub url: Option<String>,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// The primary resource of a webhook delivery.
///
/// Every member is optional so that a payload which fails validation can
/// still be inspected; [`WebhookEventData::default`] is the placeholder used
/// when nothing could be parsed at all.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct WebhookEventData {
    /// Event id, empty for the placeholder
    #[serde(default)]
    pub id: String,
    /// Event type, `letters` for the placeholder
    #[serde(rename = "type", default)]
    pub data_type: DataType,
    /// Event attributes
    #[serde(default)]
    pub attributes: Option<WebhookEvent>,
    /// Relationships to organisation, letter and letter event
    #[serde(default)]
    pub relationships: Option<Value>,
    /// Event links
    #[serde(default)]
    pub links: Option<DataLinks>,
}

/// A validated webhook delivery with the resources it embeds
#[derive(Debug, Clone, PartialEq)]
pub struct WebhookEventEnvelope {
    /// Raw request body exactly as received
    pub payload: Vec<u8>,
    /// Signature provided with the delivery
    pub signature: String,
    /// The event itself
    pub event: WebhookEventData,
    /// Embedded organisation, if included
    pub organisation: Option<OrganisationData>,
    /// Embedded letter, if included
    pub letter: Option<LetterData>,
    /// Embedded letter event, if included
    pub letter_event: Option<LetterEventData>,
}
