/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::presentation::data::Data;
use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Signed upload slot returned by the file upload endpoint
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct FileUpload {
    /// Pre-signed URL accepting a raw `PUT` of the file
    pub url: String,
    /// Signature to pass back when creating a letter from the file
    pub url_signature: String,
    /// Time after which the URL stops accepting uploads
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

/// A file upload resource
pub type FileUploadData = Data<FileUpload>;
