use crate::error::AppError;
use futures::stream::BoxStream;

/// Batch service interface
pub mod batch;
/// Distribution service interface
pub mod distribution;
/// File upload service interface
pub mod file;
/// Letter service interface
pub mod letter;
/// Organisation service interface
pub mod organisation;
/// User service interface
pub mod user;
/// Webhook service interface
pub mod webhook;

/// Lazy sequence of collection pages, one fetch per item pulled
pub type PageStream<'a, T> = BoxStream<'a, Result<Vec<T>, AppError>>;
