/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::presentation::data::Data;
use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Attributes of an organisation
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct Organisation {
    /// Organisation name
    #[serde(default)]
    pub name: Option<String>,
    /// Status, e.g. `active`
    #[serde(default)]
    pub status: Option<String>,
    /// Subscription plan
    #[serde(default)]
    pub plan: Option<String>,
    /// Billing mode
    #[serde(default)]
    pub billing_mode: Option<String>,
    /// Billing currency
    #[serde(default)]
    pub billing_currency: Option<String>,
    /// Current balance
    #[serde(default)]
    pub billing_balance: Option<f64>,
    /// Default country for letters
    #[serde(default)]
    pub default_country: Option<String>,
    /// Default address position for letters
    #[serde(default)]
    pub default_address_position: Option<String>,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// An organisation resource
pub type OrganisationData = Data<Organisation>;
