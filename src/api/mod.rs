//! REST API client module for Wikia.
//!
//! This module provides a typed HTTP client for the public v1 API of a Wikia
//! community: activity feeds and article lookups.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use wikia_api::api::{ActivityParams, ArticlesDetailsParams, WikiaApiClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = WikiaApiClient::new("dev")?;
//!
//!     // Latest edits in the main and category namespaces
//!     let params = ActivityParams::new().with_limit(5).with_namespaces([0, 14]);
//!     let activity = client.get_latest_activity(params).await?;
//!     println!("{}", activity["items"]);
//!
//!     // Article details by id
//!     let details = client
//!         .get_articles_details(ArticlesDetailsParams::by_ids(2871i64))
//!         .await?;
//!     println!("{}", details["items"]);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Client Configuration
//!
//! Use the builder pattern for custom configuration:
//!
//! ```rust,ignore
//! use wikia_api::api::WikiaApiClient;
//! use std::time::Duration;
//!
//! let client = WikiaApiClient::builder("starwars")
//!     .timeout(Duration::from_secs(60))
//!     .header("User-Agent", "my-bot/1.0")
//!     .build()?;
//! ```
//!
//! # Error Handling
//!
//! All methods return `ApiResult<T>` which is an alias for `Result<T, ApiError>`.
//! Argument errors are returned before any request is sent:
//!
//! ```rust,ignore
//! use wikia_api::api::{ApiError, ArticlesDetailsParams};
//!
//! match client.get_articles_details(ArticlesDetailsParams::new()).await {
//!     Ok(details) => println!("{}", details),
//!     Err(ApiError::InvalidArgument(msg)) => println!("Bad call: {}", msg),
//!     Err(ApiError::CommunityNotFound(name)) => println!("No such wiki: {}", name),
//!     Err(e) => println!("Network error: {}", e),
//! }
//! ```

#[cfg(feature = "api")]
pub mod client;
pub mod error;
pub mod types;

// Re-export main types for convenience
#[cfg(feature = "api")]
pub use client::{WikiaApiClient, WikiaApiClientBuilder};
pub use error::{ApiError, ApiResult};
pub use types::*;
