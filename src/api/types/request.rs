//! Endpoints and fully-built requests.

use std::fmt;

/// The fixed set of remote operations exposed by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `Activity/LatestActivity`
    LatestActivity,
    /// `Activity/RecentlyChangedArticles`
    RecentlyChangedArticles,
    /// `Articles/AsSimpleJson`
    ArticleAsSimpleJson,
    /// `Articles/Details`
    ArticlesDetails,
}

impl Endpoint {
    /// Path relative to the API base URL.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LatestActivity => "Activity/LatestActivity",
            Self::RecentlyChangedArticles => "Activity/RecentlyChangedArticles",
            Self::ArticleAsSimpleJson => "Articles/AsSimpleJson",
            Self::ArticlesDetails => "Articles/Details",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A GET request described as plain data.
///
/// Produced by the client's `build_*` methods after argument validation.
/// Nothing has touched the network yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiaRequest {
    /// API base, always ending in `/`
    pub base_url: String,
    /// Relative endpoint path
    pub endpoint: String,
    /// Query parameters in wire order (values not yet encoded)
    pub query: Vec<(String, String)>,
}

impl WikiaRequest {
    /// Create a request with no query parameters.
    pub fn new(base_url: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            endpoint: endpoint.into(),
            query: Vec::new(),
        }
    }

    /// Append a query parameter.
    pub fn param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// Look up a query value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// `key=value` pairs joined with `&`, keys and values percent-encoded.
    pub fn query_string(&self) -> String {
        self.query
            .iter()
            .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Full request URL: `{base_url}{endpoint}?{query}`.
    pub fn to_url(&self) -> String {
        let mut url = format!("{}{}", self.base_url, self.endpoint);
        if !self.query.is_empty() {
            url.push('?');
            url.push_str(&self.query_string());
        }
        url
    }
}

impl fmt::Display for WikiaRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GET {}", self.to_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(Endpoint::LatestActivity.as_str(), "Activity/LatestActivity");
        assert_eq!(
            Endpoint::RecentlyChangedArticles.to_string(),
            "Activity/RecentlyChangedArticles"
        );
        assert_eq!(Endpoint::ArticleAsSimpleJson.as_str(), "Articles/AsSimpleJson");
        assert_eq!(Endpoint::ArticlesDetails.as_str(), "Articles/Details");
    }

    #[test]
    fn test_query_values_are_percent_encoded() {
        let request = WikiaRequest::new("http://dev.wikia.com/api/v1/", "Articles/Details")
            .param("ids", "1,2")
            .param("titles", "Main Page&more");
        assert_eq!(request.query_string(), "ids=1%2C2&titles=Main%20Page%26more");
    }

    #[test]
    fn test_query_keys_are_percent_encoded() {
        let request = WikiaRequest::new("http://dev.wikia.com/api/v1/", "Echo/Query")
            .param("a&injected", "1")
            .param("k=v", "2");
        assert_eq!(request.query_string(), "a%26injected=1&k%3Dv=2");
    }

    #[test]
    fn test_to_url_without_query() {
        let request = WikiaRequest::new("http://dev.wikia.com/api/v1/", "Articles/Details");
        assert_eq!(request.to_url(), "http://dev.wikia.com/api/v1/Articles/Details");
    }

    #[test]
    fn test_get_param() {
        let request = WikiaRequest::new("http://x/", "y").param("limit", 10);
        assert_eq!(request.get("limit"), Some("10"));
        assert_eq!(request.get("missing"), None);
    }
}
