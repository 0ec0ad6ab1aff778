/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! JSON:API resource wrappers shared by every Pingen resource

use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Resource type discriminator used in the `type` member of JSON:API objects
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    /// Letters
    #[default]
    Letters,
    /// Organisations
    Organisations,
    /// Letter price calculations
    LetterPriceCalculator,
    /// Letter events
    LettersEvents,
    /// Users
    Users,
    /// User to organisation associations
    Associations,
    /// Webhooks
    Webhooks,
    /// File upload slots
    FileUploads,
    /// Webhook event for letter issues
    WebhookIssues,
    /// Webhook event for sent letters
    WebhookSent,
    /// Webhook event for undeliverable letters
    WebhookUndeliverable,
    /// Delivery products
    DeliveryProducts,
    /// Letter batches
    Batches,
}

/// Links attached to a single resource
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct DataLinks {
    /// Canonical URL of the resource
    #[serde(rename = "self", default)]
    pub self_link: Option<String>,
}

/// A JSON:API resource object with typed attributes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Data<A> {
    /// Resource id
    pub id: String,
    /// Resource type
    #[serde(rename = "type")]
    pub data_type: DataType,
    /// Resource attributes
    pub attributes: A,
    /// Relationships to other resources, kept untyped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<Value>,
    /// Resource links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<DataLinks>,
    /// Resource meta, e.g. abilities
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

/// Resource object sent when creating a resource
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataPost<A> {
    /// Resource type
    #[serde(rename = "type")]
    pub data_type: DataType,
    /// Attributes of the new resource
    pub attributes: A,
    /// Relationships of the new resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<Value>,
}

impl<A> DataPost<A> {
    /// Creates a post object without relationships
    pub fn new(data_type: DataType, attributes: A) -> Self {
        Self {
            data_type,
            attributes,
            relationships: None,
        }
    }

    /// Sets the relationships
    pub fn with_relationships(mut self, relationships: Value) -> Self {
        self.relationships = Some(relationships);
        self
    }
}

/// Resource object sent when updating a resource
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataPatch<A> {
    /// Id of the resource being updated
    pub id: String,
    /// Resource type
    #[serde(rename = "type")]
    pub data_type: DataType,
    /// Attributes to change
    pub attributes: A,
}

impl<A> DataPatch<A> {
    /// Creates a patch object
    pub fn new(id: impl Into<String>, data_type: DataType, attributes: A) -> Self {
        Self {
            id: id.into(),
            data_type,
            attributes,
        }
    }
}

/// Minimal view of a resource used to find included resources by type
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DataIdentity {
    #[serde(rename = "type")]
    pub data_type: DataType,
}
