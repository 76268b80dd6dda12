//! Article parameters (`Articles/*` endpoints).

use crate::api::error::{ApiError, ApiResult};
use crate::api::types::OneOrMany;

/// Sentinel meaning "no article ids given".
pub const NO_IDS: i64 = -1;

/// Default abstract length in characters.
pub const DEFAULT_ABSTRACT_LENGTH: u32 = 100;

/// Default thumbnail width in pixels.
pub const DEFAULT_THUMBNAIL_WIDTH: u32 = 200;

/// Default thumbnail height in pixels.
pub const DEFAULT_THUMBNAIL_HEIGHT: u32 = 200;

/// Query parameters for `Articles/Details`.
///
/// At least one of `ids` or `titles` must be set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticlesDetailsParams {
    /// Article id or list of ids ([`NO_IDS`] when unset)
    pub ids: OneOrMany<i64>,
    /// Article title or list of titles (empty when unset)
    pub titles: OneOrMany<String>,
    /// Length of the returned abstract
    pub abstract_length: u32,
    /// Thumbnail width
    pub width: u32,
    /// Thumbnail height
    pub height: u32,
}

impl Default for ArticlesDetailsParams {
    fn default() -> Self {
        Self {
            ids: OneOrMany::One(NO_IDS),
            titles: OneOrMany::One(String::new()),
            abstract_length: DEFAULT_ABSTRACT_LENGTH,
            width: DEFAULT_THUMBNAIL_WIDTH,
            height: DEFAULT_THUMBNAIL_HEIGHT,
        }
    }
}

impl ArticlesDetailsParams {
    /// Create params with nothing selected. Set ids or titles before sending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Params selecting articles by id.
    pub fn by_ids(ids: impl Into<OneOrMany<i64>>) -> Self {
        Self::new().with_ids(ids)
    }

    /// Params selecting articles by title.
    pub fn by_titles(titles: impl Into<OneOrMany<String>>) -> Self {
        Self::new().with_titles(titles)
    }

    /// Set article ids.
    pub fn with_ids(mut self, ids: impl Into<OneOrMany<i64>>) -> Self {
        self.ids = ids.into();
        self
    }

    /// Set article titles.
    pub fn with_titles(mut self, titles: impl Into<OneOrMany<String>>) -> Self {
        self.titles = titles.into();
        self
    }

    /// Set abstract length.
    pub fn with_abstract_length(mut self, length: u32) -> Self {
        self.abstract_length = length;
        self
    }

    /// Set thumbnail dimensions.
    pub fn with_thumbnail_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Whether any article id is selected.
    pub fn has_ids(&self) -> bool {
        !self.ids.is_empty() && self.ids != OneOrMany::One(NO_IDS)
    }

    /// Whether any article title is selected.
    pub fn has_titles(&self) -> bool {
        self.titles.iter().any(|title| !title.is_empty())
    }

    /// Comma-joined ids, or the sentinel when unset.
    pub fn ids_param(&self) -> String {
        if self.has_ids() {
            self.ids.join()
        } else {
            NO_IDS.to_string()
        }
    }

    /// Comma-joined titles, or empty when unset. Blank entries are dropped.
    pub fn titles_param(&self) -> String {
        self.titles
            .iter()
            .filter(|title| !title.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Parse an article id argument.
pub fn parse_article_id(value: &str) -> ApiResult<u64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::InvalidArgument("id is required".to_string()));
    }
    trimmed
        .parse::<u64>()
        .map_err(|_| ApiError::InvalidArgument(format!("id must be a number, got '{}'", value)))
}
