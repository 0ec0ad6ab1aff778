/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # Pingen Client Prelude
//!
//! This module provides a convenient way to import the most commonly used types and traits
//! from the Pingen client library.
//!
//! ## Usage
//!
//! ```rust
//! use pingen_client::prelude::*;
//!
//! let paging = PagingRequest::new()
//!     .sort_by("createdAt", SortDirection::Desc)
//!     .with_page_limit(50);
//! assert!(paging.validate().is_ok());
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Pingen API client
pub use crate::application::config::Config;

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, PingenResult};

// ============================================================================
// CLIENT, CONNECTION AND CREDENTIALS
// ============================================================================

/// Top-level client
pub use crate::application::client::Client;

/// Credential handling
pub use crate::application::auth::{Credential, CredentialManager};

/// Connection handler, request builder and response interpreter
pub use crate::model::http::{HttpClient, RequestBuilder, TransportRequest, TransportResponse};

// ============================================================================
// SERVICES (TRAITS)
// ============================================================================

/// Service traits
pub use crate::application::interfaces::{
    PageStream, batch::BatchService, distribution::DistributionService, file::FileService, letter::LetterService,
    organisation::OrganisationService, user::UserService, webhook::WebhookService,
};

// ============================================================================
// SERVICE IMPLEMENTATIONS
// ============================================================================

/// Service implementations
pub use crate::application::services::{
    BatchServiceImpl, DistributionServiceImpl, FileServiceImpl, LetterServiceImpl, OrganisationServiceImpl,
    UserServiceImpl, WebhookServiceImpl,
};

// ============================================================================
// PAGING AND WEBHOOKS
// ============================================================================

/// Auto-pager
pub use crate::application::pager::auto_page;

/// Webhook signature validation
pub use crate::application::webhook::{compute_signature, validate, validate_and_parse};

// ============================================================================
// REQUEST AND RESPONSE MODELS
// ============================================================================

/// Logical requests and paging
pub use crate::model::requests::{ApiRequest, FilterExpression, PagingRequest, SortDirection};

/// Result envelope and payloads
pub use crate::model::responses::{
    ApiError, ApiErrorSource, ApiResult, CollectionLinks, CollectionMeta, CollectionResult,
    SingleResult,
};

// ============================================================================
// PRESENTATION LAYER
// ============================================================================

/// JSON:API resource wrappers
pub use crate::presentation::{Data, DataLinks, DataPatch, DataPost, DataType};

/// Resource models
pub use crate::presentation::batch::{
    Batch, BatchCreate, BatchData, BatchGroupingType, BatchIcon, BatchSplitPosition,
    BatchSplitType,
};
pub use crate::presentation::distribution::{DeliveryProduct, DeliveryProductData};
pub use crate::presentation::file::{FileUpload, FileUploadData};
pub use crate::presentation::letter::{
    AddressPosition, Letter, LetterCreate, LetterData, LetterEvent, LetterEventData, LetterPrice,
    LetterPriceConfiguration, LetterPriceData, LetterSend, LetterUpdate, PrintMode, PrintSpectrum,
};
pub use crate::presentation::organisation::{Organisation, OrganisationData};
pub use crate::presentation::user::{User, UserAssociation, UserAssociationData, UserData};
pub use crate::presentation::webhook::{
    Webhook, WebhookCreate, WebhookData, WebhookEvent, WebhookEventCategory, WebhookEventData,
    WebhookEventEnvelope,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Idempotency keys
pub use crate::utils::id::new_idempotency_key;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tokio_util::sync::CancellationToken;
pub use tracing::{debug, error, info, warn};
