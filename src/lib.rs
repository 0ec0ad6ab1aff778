/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # Pingen Client
//!
//! Asynchronous client for the Pingen document-mailing API.
//!
//! The crate keeps the connection concerns in one place:
//! - a bearer credential shared by every client in the process, refreshed at
//!   most once at a time
//! - organisation scoped request building with JSON:API bodies
//! - a uniform [`ApiResult`](model::responses::ApiResult) envelope carrying
//!   rate-limit telemetry for every call
//! - lazy, cancellable paging over collection endpoints
//! - HMAC-SHA256 validation of inbound webhook deliveries
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pingen_client::prelude::*;
//! use futures::StreamExt;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let client = Client::from_env()?;
//!     let cancel = CancellationToken::new();
//!
//!     let mut pages = client.letters().get_page_results(None, &cancel);
//!     while let Some(page) = pages.next().await {
//!         for letter in page? {
//!             info!("{} {:?}", letter.id, letter.attributes.status);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

/// Credentials, services, paging and webhook validation
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Requests, responses and the connection handler
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Resource data models
pub mod presentation;
/// Environment, id and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
