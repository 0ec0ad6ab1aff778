/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

/// User agent string used in HTTP requests to identify this client to the Pingen API
pub const USER_AGENT: &str = "pingen-client/0.1.0";
/// Default base URI of the Pingen REST API
pub const DEFAULT_BASE_URI: &str = "https://api.pingen.com/";
/// Default base URI of the Pingen identity provider
pub const DEFAULT_IDENTITY_URI: &str = "https://identity.pingen.com/";
/// Path (relative to the identity URI) of the client-credentials token endpoint
pub const ACCESS_TOKEN_PATH: &str = "auth/access-tokens";
/// Seconds before the declared expiry at which a credential is considered stale
pub const TOKEN_SAFETY_MARGIN_SECONDS: i64 = 60;
/// Maximum time in seconds to wait for the credential refresh gate
pub const TOKEN_GATE_TIMEOUT_SECONDS: u64 = 10;
/// Media type of JSON:API request bodies
pub const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";
/// Largest page size accepted by the API
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Path roots that are addressed without the `organisations/{id}/` prefix
pub const UNSCOPED_PATH_ROOTS: [&str; 3] = ["user", "organisations", "file-upload"];

/// Header names sent to or received from the Pingen API, in lower case
pub mod headers {
    /// Caller-supplied idempotency key for write operations
    pub const IDEMPOTENCY_KEY: &str = "idempotency-key";
    /// Correlation id assigned by the API to each request
    pub const REQUEST_ID: &str = "x-request-id";
    /// Number of requests allowed in the current window
    pub const RATE_LIMIT_LIMIT: &str = "x-ratelimit-limit";
    /// Number of requests left in the current window
    pub const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";
    /// Epoch seconds at which the current window resets
    pub const RATE_LIMIT_RESET: &str = "x-ratelimit-reset";
    /// Seconds to wait before repeating a throttled request
    pub const RETRY_AFTER: &str = "retry-after";
    /// Set when the response is a replay of an earlier idempotent request
    pub const IDEMPOTENT_REPLAYED: &str = "idempotent-replayed";
    /// Redirect target, used for file locations
    pub const LOCATION: &str = "location";
    /// Webhook signature header sent by Pingen with each delivery
    pub const SIGNATURE: &str = "signature";
}

/// Query parameter names understood by collection endpoints
pub mod query {
    /// Comma separated sort fields, `-` prefix for descending
    pub const SORTING: &str = "sort";
    /// JSON encoded filter expression
    pub const FILTERING: &str = "filter";
    /// Free text search
    pub const SEARCHING: &str = "q";
    /// One-based page number
    pub const PAGE_NUMBER: &str = "page[number]";
    /// Page size
    pub const PAGE_LIMIT: &str = "page[limit]";
}
