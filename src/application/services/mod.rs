/// Module containing the batch service for grouped letter submissions
pub mod batch_service;
/// Module containing the distribution service for delivery products
pub mod distribution_service;
/// Module containing the file service for signed uploads
pub mod file_service;
/// Module containing the letter service for creating and managing letters
pub mod letter_service;
/// Module containing the organisation service
pub mod organisation_service;
/// Module containing the user service
pub mod user_service;
/// Module containing the webhook service for managing subscriptions
pub mod webhook_service;

pub use batch_service::*;
pub use distribution_service::*;
pub use file_service::*;
pub use letter_service::*;
pub use organisation_service::*;
pub use user_service::*;
pub use webhook_service::*;
