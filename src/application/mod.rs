/// Credential acquisition and caching
pub mod auth;
/// Top-level client aggregating the resource services
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces
pub mod interfaces;
/// Lazy paging over collection endpoints
pub mod pager;
/// Resource service implementations
pub mod services;
/// Webhook signature validation
pub mod webhook;
