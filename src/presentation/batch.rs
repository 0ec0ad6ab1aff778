/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::presentation::data::Data;
use crate::presentation::letter::{AddressPosition, PrintMode, PrintSpectrum};
use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Icon shown for a batch in the Pingen web app
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BatchIcon {
    #[default]
    Campaign,
    Megaphone,
    WaveHand,
    Flash,
    Rocket,
    Bell,
    PercentTag,
    PercentBadge,
    Present,
    Receipt,
    Document,
    Information,
    Calendar,
    Newspaper,
    Crown,
    Virus,
}

/// How the letters of a batch are delivered in the source file
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BatchGroupingType {
    /// A zip archive with one PDF per letter
    #[default]
    Zip,
    /// One PDF that is split into letters
    Merge,
}

/// Rule used to split a merged PDF into letters
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BatchSplitType {
    /// One letter per file
    #[default]
    File,
    /// A fixed number of pages per letter
    Page,
    /// A separator text marks the letter boundary
    Custom,
    /// Split on Swiss QR invoices
    QrInvoice,
}

/// Page on which the split separator is searched
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BatchSplitPosition {
    #[default]
    FirstPage,
    LastPage,
}

/// Attributes of a batch
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct Batch {
    /// Batch name
    #[serde(default)]
    pub name: Option<String>,
    /// Icon
    #[serde(default)]
    pub icon: Option<BatchIcon>,
    /// Processing status
    #[serde(default)]
    pub status: Option<String>,
    /// Name of the uploaded file
    #[serde(default)]
    pub file_original_name: Option<String>,
    /// Number of letters found in the file
    #[serde(default)]
    pub letter_count: Option<u32>,
    /// Address position
    #[serde(default)]
    pub address_position: Option<AddressPosition>,
    /// Print mode
    #[serde(default)]
    pub print_mode: Option<PrintMode>,
    /// Print spectrum
    #[serde(default)]
    pub print_spectrum: Option<PrintSpectrum>,
    /// Price currency
    #[serde(default)]
    pub price_currency: Option<String>,
    /// Price of all letters
    #[serde(default)]
    pub price_value: Option<f64>,
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

/// A batch resource
pub type BatchData = Data<Batch>;

/// Attributes used to create a batch from an uploaded file
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct BatchCreate {
    /// Batch name
    pub name: String,
    /// Icon
    pub icon: BatchIcon,
    /// Original file name
    pub file_original_name: String,
    /// Signed URL returned by the file upload endpoint
    pub file_url: String,
    /// Signature of the upload URL
    pub file_url_signature: String,
    /// Address position
    pub address_position: AddressPosition,
    /// Grouping of letters in the file
    pub grouping_type: BatchGroupingType,
    /// Split rule for merged files
    #[serde(rename = "grouping_options_split_type")]
    pub split_type: BatchSplitType,
    /// Pages per letter, with [`BatchSplitType::Page`]
    #[serde(
        rename = "grouping_options_split_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub split_size: Option<u32>,
    /// Separator text, with [`BatchSplitType::Custom`]
    #[serde(
        rename = "grouping_options_split_separator",
        skip_serializing_if = "Option::is_none"
    )]
    pub split_separator: Option<String>,
    /// Page searched for the separator
    #[serde(
        rename = "grouping_options_split_position",
        skip_serializing_if = "Option::is_none"
    )]
    pub split_position: Option<BatchSplitPosition>,
}
