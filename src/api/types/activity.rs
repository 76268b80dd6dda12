//! Activity feed parameters (`Activity/*` endpoints).

use crate::api::error::{ApiError, ApiResult};
use crate::api::types::OneOrMany;

/// Default number of items requested.
pub const DEFAULT_ACTIVITY_LIMIT: u32 = 10;

/// Default namespace (main article namespace).
pub const DEFAULT_NAMESPACE: i32 = 0;

/// Query parameters for `Activity/LatestActivity` and
/// `Activity/RecentlyChangedArticles`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityParams {
    /// Max number of items returned
    pub limit: u32,
    /// Namespace id or list of ids to include
    pub namespaces: OneOrMany<i32>,
    /// Whether the same article may appear more than once
    pub allow_duplicates: bool,
}

impl Default for ActivityParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_ACTIVITY_LIMIT,
            namespaces: OneOrMany::One(DEFAULT_NAMESPACE),
            allow_duplicates: true,
        }
    }
}

impl ActivityParams {
    /// Create params with the platform defaults (10 items, namespace 0, duplicates allowed).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set result limit.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Set namespace filter; accepts a single id or a list.
    pub fn with_namespaces(mut self, namespaces: impl Into<OneOrMany<i32>>) -> Self {
        self.namespaces = namespaces.into();
        self
    }

    /// Set whether duplicate articles are allowed.
    pub fn with_allow_duplicates(mut self, allow: bool) -> Self {
        self.allow_duplicates = allow;
        self
    }

    /// Build params from untyped input, e.g. command-line or form values.
    ///
    /// `limit` must be an unsigned integer and `namespaces` an integer or a
    /// comma-separated list of integers.
    pub fn parse(limit: &str, namespaces: &str) -> ApiResult<Self> {
        Ok(Self::new()
            .with_limit(parse_limit(limit)?)
            .with_namespaces(namespaces.parse::<OneOrMany<i32>>()?))
    }
}

/// Parse a `limit` argument.
pub fn parse_limit(value: &str) -> ApiResult<u32> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| ApiError::InvalidArgument(format!("limit must be a number, got '{}'", value)))
}
