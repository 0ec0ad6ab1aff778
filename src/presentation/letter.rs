/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::presentation::data::Data;
use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Position of the address window on the first page
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AddressPosition {
    /// Address on the left side
    #[default]
    Left,
    /// Address on the right side
    Right,
}

/// Print mode
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PrintMode {
    /// One sided
    #[default]
    Simplex,
    /// Two sided
    Duplex,
}

/// Print colour spectrum
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PrintSpectrum {
    /// Black and white
    #[default]
    Grayscale,
    /// Colour
    Color,
}

/// Attributes of a letter
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct Letter {
    /// Processing status, e.g. `valid`, `submitted`, `sent`
    #[serde(default)]
    pub status: Option<String>,
    /// Name of the uploaded file
    #[serde(default)]
    pub file_original_name: Option<String>,
    /// Number of pages
    #[serde(default)]
    pub file_pages: Option<u32>,
    /// Recipient address as detected on the document
    #[serde(default)]
    pub address: Option<String>,
    /// Address position
    #[serde(default)]
    pub address_position: Option<AddressPosition>,
    /// Recipient country (ISO 3166-1 alpha-2)
    #[serde(default)]
    pub country: Option<String>,
    /// Delivery product
    #[serde(default)]
    pub delivery_product: Option<String>,
    /// Print mode
    #[serde(default)]
    pub print_mode: Option<PrintMode>,
    /// Print spectrum
    #[serde(default)]
    pub print_spectrum: Option<PrintSpectrum>,
    /// Price currency
    #[serde(default)]
    pub price_currency: Option<String>,
    /// Price value
    #[serde(default)]
    pub price_value: Option<f64>,
    /// Paper types per page
    #[serde(default)]
    pub paper_types: Option<Vec<String>>,
    /// Source of the letter, e.g. `api`
    #[serde(default)]
    pub source: Option<String>,
    /// Tracking number once sent
    #[serde(default)]
    pub tracking_number: Option<String>,
    /// Submission time
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A letter resource
pub type LetterData = Data<Letter>;

/// Attributes used to create a letter from an uploaded file
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct LetterCreate {
    /// Original file name
    pub file_original_name: String,
    /// Signed URL returned by the file upload endpoint
    pub file_url: String,
    /// Signature of the upload URL
    pub file_url_signature: String,
    /// Address position
    pub address_position: AddressPosition,
    /// Send immediately once validated
    pub auto_send: bool,
    /// Delivery product, required with `auto_send`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_product: Option<String>,
    /// Print mode, required with `auto_send`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_mode: Option<PrintMode>,
    /// Print spectrum, required with `auto_send`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_spectrum: Option<PrintSpectrum>,
}

/// Attributes used to send a validated letter
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct LetterSend {
    /// Delivery product
    pub delivery_product: String,
    /// Print mode
    pub print_mode: PrintMode,
    /// Print spectrum
    pub print_spectrum: PrintSpectrum,
}

/// Attributes that can be changed on an existing letter
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct LetterUpdate {
    /// Paper types per page
    pub paper_types: Vec<String>,
}

/// Input of the letter price calculator
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct LetterPriceConfiguration {
    /// Recipient country
    pub country: String,
    /// Paper types per page
    pub paper_types: Vec<String>,
    /// Print mode
    pub print_mode: PrintMode,
    /// Print spectrum
    pub print_spectrum: PrintSpectrum,
    /// Delivery product
    pub delivery_product: String,
}

/// Result of the letter price calculator
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct LetterPrice {
    /// Currency
    #[serde(default)]
    pub currency: Option<String>,
    /// Price
    #[serde(default)]
    pub price: Option<f64>,
}

/// A letter price resource
pub type LetterPriceData = Data<LetterPrice>;

/// Attributes of a letter event
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct LetterEvent {
    /// Event code, e.g. `sent`
    #[serde(default)]
    pub code: Option<String>,
    /// Human readable event name
    #[serde(default)]
    pub name: Option<String>,
    /// Producer of the event
    #[serde(default)]
    pub producer: Option<String>,
    /// Location reported with the event
    #[serde(default)]
    pub location: Option<String>,
    /// Whether the event includes a file
    #[serde(default)]
    pub has_image: Option<bool>,
    /// Additional event data
    #[serde(default)]
    pub data: Option<Vec<String>>,
    /// Time the event was emitted
    #[serde(default)]
    pub emitted_at: Option<DateTime<Utc>>,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A letter event resource
pub type LetterEventData = Data<LetterEvent>;
