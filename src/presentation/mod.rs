/// Batch models
pub mod batch;
/// JSON:API resource wrappers
pub mod data;
/// Delivery product models
pub mod distribution;
/// File upload models
pub mod file;
/// Letter, letter event and price models
pub mod letter;
/// Organisation models
pub mod organisation;
/// User and association models
pub mod user;
/// Webhook and webhook event models
pub mod webhook;

pub use data::{Data, DataLinks, DataPatch, DataPost, DataType};
