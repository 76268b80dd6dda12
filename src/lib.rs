//! # Wikia API Rust SDK
//!
//! A Rust client for the public HTTP API (v1) of Wikia communities.
//!
//! ## Modules
//!
//! - [`api`]: REST API client, parameter types and errors
//! - [`network`]: host and path constants
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use wikia_api::api::{ActivityParams, WikiaApiClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = WikiaApiClient::new("dev")?;
//!     assert_eq!(api.url(), "http://dev.wikia.com/api/v1/");
//!
//!     let recent = api.get_recently_changed_articles(ActivityParams::new()).await?;
//!     println!("{:#}", recent);
//!
//!     let article = api.get_article_as_simple_json(2871).await?;
//!     println!("{:#}", article["sections"]);
//!
//!     Ok(())
//! }
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// REST API client module: client, request parameter types and errors.
/// The client itself requires the `api` feature (enabled by default).
pub mod api;

/// Network constants (default host, scheme and API path).
pub mod network;

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use wikia_api::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "api")]
    pub use crate::api::{WikiaApiClient, WikiaApiClientBuilder};

    pub use crate::api::{
        parse_article_id, parse_limit, ActivityParams, ApiError, ApiResult,
        ArticlesDetailsParams, Endpoint, OneOrMany, WikiaRequest, NO_IDS,
    };

    pub use crate::network::{API_PATH, DEFAULT_HOST};
}
