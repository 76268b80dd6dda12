//! Network constants for the Wikia API.

/// Shared host every community lives under as `{subdomain}.{host}`.
pub const DEFAULT_HOST: &str = "wikia.com";

/// Default URL scheme.
pub const DEFAULT_SCHEME: &str = "http";

/// Path of the v1 API relative to a community's base path.
pub const API_PATH: &str = "/api/v1/";
