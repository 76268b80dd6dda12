//! Request parameter types for the Wikia REST API.
//!
//! Responses are passed through as `serde_json::Value`, so only the request
//! side is typed here.

pub mod activity;
pub mod article;
pub mod one_or_many;
pub mod request;

// Re-export all types for convenience
pub use activity::*;
pub use article::*;
pub use one_or_many::*;
pub use request::*;
