pub mod email_service;
pub mod templates;
pub mod user_store;

pub use email_service::*;
pub use user_store::*;
