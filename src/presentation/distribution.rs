/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::presentation::data::Data;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Attributes of a delivery product
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct DeliveryProduct {
    /// Countries the product is available for
    #[serde(default)]
    pub countries: Option<Vec<String>>,
    /// Product name
    #[serde(default)]
    pub name: Option<String>,
    /// Full product name
    #[serde(default)]
    pub full_name: Option<String>,
    /// Expected delivery time in days
    #[serde(default)]
    pub delivery_time_days: Option<Vec<u32>>,
    /// Features, e.g. `tracking`
    #[serde(default)]
    pub features: Option<Vec<String>>,
    /// Price currency
    #[serde(default)]
    pub price_currency: Option<String>,
    /// Starting price
    #[serde(default)]
    pub price_starting_from: Option<f64>,
}

/// A delivery product resource
pub type DeliveryProductData = Data<DeliveryProduct>;
