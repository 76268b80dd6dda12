//! Wikia REST API client implementation.
//!
//! The [`WikiaApiClient`] provides a typed interface over the public v1 API of
//! a single community (`http://{subdomain}.wikia.com/api/v1/`).
//!
//! # Example
//!
//! ```rust,ignore
//! use wikia_api::api::{ActivityParams, WikiaApiClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = WikiaApiClient::new("dev")?;
//!
//!     let activity = client.get_latest_activity(ActivityParams::new()).await?;
//!     println!("{} items", activity["items"].as_array().map_or(0, Vec::len));
//!
//!     Ok(())
//! }
//! ```

use std::net::SocketAddr;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::api::error::{ApiError, ApiResult};
use crate::api::types::*;
use crate::network::{API_PATH, DEFAULT_HOST, DEFAULT_SCHEME};

/// Builder for configuring [`WikiaApiClient`].
#[derive(Debug, Clone)]
pub struct WikiaApiClientBuilder {
    subdomain: String,
    host: String,
    scheme: String,
    timeout: Option<Duration>,
    default_headers: Vec<(String, String)>,
    resolve_overrides: Vec<(String, SocketAddr)>,
}

impl WikiaApiClientBuilder {
    /// Create a new builder for the given community subdomain.
    pub fn new(subdomain: impl Into<String>) -> Self {
        Self {
            subdomain: subdomain.into(),
            host: DEFAULT_HOST.to_string(),
            scheme: DEFAULT_SCHEME.to_string(),
            timeout: None,
            default_headers: Vec::new(),
            resolve_overrides: Vec::new(),
        }
    }

    /// Override the shared host (`wikia.com`). May carry a port, e.g. `wikia.test:8080`.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Override the URL scheme (`http`).
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    /// Set a request timeout. Requests have no timeout unless one is set.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Some(Duration::from_secs(secs));
        self
    }

    /// Add a default header to all requests.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Pin a domain to a fixed address, bypassing DNS.
    ///
    /// The port of `addr` is ignored; put the port in [`host`](Self::host).
    pub fn resolve(mut self, domain: impl Into<String>, addr: SocketAddr) -> Self {
        self.resolve_overrides.push((domain.into(), addr));
        self
    }

    /// Build the client.
    pub fn build(self) -> ApiResult<WikiaApiClient> {
        validate_subdomain(&self.subdomain)?;
        validate_host(&self.host)?;
        if self.scheme != "http" && self.scheme != "https" {
            return Err(ApiError::InvalidArgument(format!(
                "scheme must be 'http' or 'https', got '{}'",
                self.scheme
            )));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        for (name, value) in self.default_headers {
            let header_name = reqwest::header::HeaderName::try_from(name.as_str()).map_err(|e| {
                ApiError::InvalidArgument(format!("Invalid header name '{}': {}", name, e))
            })?;
            let header_value = reqwest::header::HeaderValue::from_str(&value).map_err(|e| {
                ApiError::InvalidArgument(format!("Invalid header value for '{}': {}", name, e))
            })?;
            headers.insert(header_name, header_value);
        }

        builder = builder.default_headers(headers);

        for (domain, addr) in &self.resolve_overrides {
            builder = builder.resolve(domain, *addr);
        }

        let http_client = builder.build()?;

        let basepath = format!("{}://{}.{}", self.scheme, self.subdomain, self.host);
        let url = format!("{}{}", basepath, API_PATH);

        Ok(WikiaApiClient {
            http_client,
            subdomain: self.subdomain,
            basepath,
            url,
        })
    }
}

/// Wikia REST API client bound to one community.
///
/// Cheap to clone; clones share the underlying connection pool. All calls are
/// independent of each other.
#[derive(Debug, Clone)]
pub struct WikiaApiClient {
    http_client: Client,
    subdomain: String,
    basepath: String,
    url: String,
}

impl WikiaApiClient {
    /// Create a new client for the given community subdomain.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidArgument`] if the subdomain is empty or
    /// contains characters that cannot appear in a host name.
    pub fn new(subdomain: impl Into<String>) -> ApiResult<Self> {
        WikiaApiClientBuilder::new(subdomain).build()
    }

    /// Create a new client builder for custom configuration.
    pub fn builder(subdomain: impl Into<String>) -> WikiaApiClientBuilder {
        WikiaApiClientBuilder::new(subdomain)
    }

    /// The community subdomain this client targets.
    pub fn subdomain(&self) -> &str {
        &self.subdomain
    }

    /// API base URL, e.g. `http://dev.wikia.com/api/v1/`.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Community base path, e.g. `http://dev.wikia.com`.
    pub fn basepath(&self) -> &str {
        &self.basepath
    }

    // =========================================================================
    // Request building
    // =========================================================================

    /// Build a request for an arbitrary endpoint below [`url`](Self::url).
    pub fn build_request(&self, endpoint: impl Into<String>) -> WikiaRequest {
        WikiaRequest::new(self.url.clone(), endpoint)
    }

    /// Build a request for a caller-supplied endpoint and query pairs.
    ///
    /// The endpoint must be a plain path: `?` and `#` are rejected so the query
    /// is always the one built from `query`.
    pub fn build_endpoint(&self, endpoint: &str, query: &[(&str, &str)]) -> ApiResult<WikiaRequest> {
        let endpoint = endpoint.trim_start_matches('/');
        if endpoint.trim().is_empty() {
            return Err(ApiError::InvalidArgument("endpoint cannot be empty".to_string()));
        }
        if endpoint.contains(['?', '#']) {
            return Err(ApiError::InvalidArgument(format!(
                "endpoint '{}' must not contain '?' or '#'",
                endpoint
            )));
        }
        if query.iter().any(|(name, _)| name.is_empty()) {
            return Err(ApiError::InvalidArgument("query parameter names cannot be empty".to_string()));
        }

        Ok(query.iter().fold(
            self.build_request(endpoint),
            |request, (name, value)| request.param(*name, value),
        ))
    }

    /// Build the `Activity/LatestActivity` request.
    pub fn build_latest_activity(&self, params: &ActivityParams) -> ApiResult<WikiaRequest> {
        self.build_activity(Endpoint::LatestActivity, params)
    }

    /// Build the `Activity/RecentlyChangedArticles` request.
    pub fn build_recently_changed_articles(
        &self,
        params: &ActivityParams,
    ) -> ApiResult<WikiaRequest> {
        self.build_activity(Endpoint::RecentlyChangedArticles, params)
    }

    /// Build the `Articles/AsSimpleJson` request.
    pub fn build_article_as_simple_json(&self, id: u64) -> WikiaRequest {
        self.build_request(Endpoint::ArticleAsSimpleJson.as_str())
            .param("id", id)
    }

    /// Build the `Articles/Details` request.
    ///
    /// Fails if neither ids nor titles are selected.
    pub fn build_articles_details(&self, params: &ArticlesDetailsParams) -> ApiResult<WikiaRequest> {
        if !params.has_ids() && !params.has_titles() {
            return Err(ApiError::InvalidArgument(
                "either ids or titles must be provided".to_string(),
            ));
        }

        Ok(self
            .build_request(Endpoint::ArticlesDetails.as_str())
            .param("ids", params.ids_param())
            .param("titles", params.titles_param())
            .param("abstract", params.abstract_length)
            .param("width", params.width)
            .param("height", params.height))
    }

    fn build_activity(&self, endpoint: Endpoint, params: &ActivityParams) -> ApiResult<WikiaRequest> {
        if params.namespaces.is_empty() {
            return Err(ApiError::InvalidArgument(
                "namespaces must contain at least one namespace id".to_string(),
            ));
        }

        Ok(self
            .build_request(endpoint.as_str())
            .param("limit", params.limit)
            .param("namespaces", params.namespaces.join())
            .param("allowDuplicates", params.allow_duplicates))
    }

    // =========================================================================
    // Response handling
    // =========================================================================

    /// Parse a response body as JSON.
    ///
    /// A body that is not JSON means the platform served an error page, which
    /// it does for communities that do not exist.
    pub fn parse_response(&self, body: &str) -> ApiResult<Value> {
        serde_json::from_str(body).map_err(|e| {
            tracing::warn!(
                subdomain = %self.subdomain,
                error = %e,
                "Response body is not JSON"
            );
            ApiError::CommunityNotFound(self.subdomain.clone())
        })
    }

    /// Send a built request and parse its body.
    ///
    /// Status codes are not interpreted: any JSON body is returned as-is.
    pub async fn execute(&self, request: &WikiaRequest) -> ApiResult<Value> {
        let url = request.to_url();
        tracing::debug!(endpoint = %request.endpoint, url = %url, "Sending request");

        let response = self.http_client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(
            endpoint = %request.endpoint,
            status = %status,
            bytes = body.len(),
            "Received response"
        );

        self.parse_response(&body)
    }

    // =========================================================================
    // Endpoints
    // =========================================================================

    /// Get the latest activity on the community.
    pub async fn get_latest_activity(&self, params: ActivityParams) -> ApiResult<Value> {
        let request = self.build_latest_activity(&params)?;
        self.execute(&request).await
    }

    /// Get recently changed articles.
    pub async fn get_recently_changed_articles(&self, params: ActivityParams) -> ApiResult<Value> {
        let request = self.build_recently_changed_articles(&params)?;
        self.execute(&request).await
    }

    /// Get an article's content as simplified JSON.
    pub async fn get_article_as_simple_json(&self, id: u64) -> ApiResult<Value> {
        let request = self.build_article_as_simple_json(id);
        self.execute(&request).await
    }

    /// Get details (abstract, thumbnail, revision) for articles by id or title.
    pub async fn get_articles_details(&self, params: ArticlesDetailsParams) -> ApiResult<Value> {
        let request = self.build_articles_details(&params)?;
        self.execute(&request).await
    }

    /// GET any endpoint below [`url`](Self::url) with the given query pairs.
    pub async fn get_endpoint(&self, endpoint: &str, query: &[(&str, &str)]) -> ApiResult<Value> {
        let request = self.build_endpoint(endpoint, query)?;
        self.execute(&request).await
    }
}

// =============================================================================
// Validation helpers
// =============================================================================

/// Characters that would change the meaning of the derived URL.
fn is_forbidden_host_char(c: char) -> bool {
    c.is_whitespace() || matches!(c, '/' | '?' | '#' | '@' | '\\')
}

fn validate_subdomain(subdomain: &str) -> ApiResult<()> {
    if subdomain.trim().is_empty() {
        return Err(ApiError::InvalidArgument("subdomain cannot be empty".to_string()));
    }
    if subdomain.contains(':') || subdomain.chars().any(is_forbidden_host_char) {
        return Err(ApiError::InvalidArgument(format!(
            "subdomain '{}' is not a valid host label",
            subdomain
        )));
    }
    Ok(())
}

fn validate_host(host: &str) -> ApiResult<()> {
    if host.is_empty() || host.chars().any(is_forbidden_host_char) {
        return Err(ApiError::InvalidArgument(format!("host '{}' is not valid", host)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> WikiaApiClient {
        WikiaApiClient::new("dev").unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = client();
        assert_eq!(client.subdomain(), "dev");
        assert_eq!(client.url(), "http://dev.wikia.com/api/v1/");
        assert_eq!(client.basepath(), "http://dev.wikia.com");
    }

    #[test]
    fn test_empty_subdomain_rejected() {
        for subdomain in ["", "   "] {
            let err = WikiaApiClient::new(subdomain).unwrap_err();
            assert!(err.is_invalid_argument());
        }
    }

    #[test]
    fn test_malformed_subdomain_rejected() {
        for subdomain in ["dev/evil", "dev:80", "de v", "a@b", "x?y"] {
            let err = WikiaApiClient::new(subdomain).unwrap_err();
            assert!(err.is_invalid_argument(), "{:?} should be rejected", subdomain);
        }
    }

    #[test]
    fn test_client_builder() {
        let client = WikiaApiClient::builder("starwars")
            .host("wikia.test:8080")
            .scheme("https")
            .timeout_secs(5)
            .header("X-Custom", "test")
            .build()
            .unwrap();

        assert_eq!(client.basepath(), "https://starwars.wikia.test:8080");
        assert_eq!(client.url(), "https://starwars.wikia.test:8080/api/v1/");
    }

    #[test]
    fn test_builder_rejects_bad_header() {
        let err = WikiaApiClient::builder("dev")
            .header("bad header", "x")
            .build()
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_builder_rejects_bad_scheme_and_host() {
        assert!(WikiaApiClient::builder("dev")
            .scheme("ftp")
            .build()
            .unwrap_err()
            .is_invalid_argument());
        assert!(WikiaApiClient::builder("dev")
            .host("")
            .build()
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn test_build_latest_activity_defaults() {
        let request = client()
            .build_latest_activity(&ActivityParams::default())
            .unwrap();
        assert_eq!(
            request.to_url(),
            "http://dev.wikia.com/api/v1/Activity/LatestActivity?limit=10&namespaces=0&allowDuplicates=true"
        );
    }

    #[test]
    fn test_build_recently_changed_articles_with_namespace_list() {
        let params = ActivityParams::new()
            .with_limit(3)
            .with_namespaces(vec![0, 14])
            .with_allow_duplicates(false);
        let request = client().build_recently_changed_articles(&params).unwrap();

        assert_eq!(request.endpoint, "Activity/RecentlyChangedArticles");
        assert_eq!(request.get("namespaces"), Some("0,14"));
        assert_eq!(
            request.query_string(),
            "limit=3&namespaces=0%2C14&allowDuplicates=false"
        );
    }

    #[test]
    fn test_build_activity_rejects_empty_namespaces() {
        let params = ActivityParams::new().with_namespaces(Vec::<i32>::new());
        assert!(client()
            .build_latest_activity(&params)
            .unwrap_err()
            .is_invalid_argument());
        assert!(client()
            .build_recently_changed_articles(&params)
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn test_build_article_as_simple_json() {
        let request = client().build_article_as_simple_json(2871);
        assert_eq!(
            request.to_url(),
            "http://dev.wikia.com/api/v1/Articles/AsSimpleJson?id=2871"
        );
    }

    #[test]
    fn test_build_articles_details_requires_ids_or_titles() {
        let err = client()
            .build_articles_details(&ArticlesDetailsParams::default())
            .unwrap_err();
        assert!(err.is_invalid_argument());

        let explicit = ArticlesDetailsParams::new().with_ids(-1i64).with_titles("");
        assert!(client().build_articles_details(&explicit).is_err());
    }

    #[test]
    fn test_build_articles_details_by_id() {
        let request = client()
            .build_articles_details(&ArticlesDetailsParams::by_ids(123i64))
            .unwrap();
        assert_eq!(
            request.query_string(),
            "ids=123&titles=&abstract=100&width=200&height=200"
        );
    }

    #[test]
    fn test_build_articles_details_by_titles() {
        let params = ArticlesDetailsParams::by_titles(vec!["Main Page", "Help"]).with_abstract_length(0);
        let request = client().build_articles_details(&params).unwrap();
        assert_eq!(request.get("ids"), Some("-1"));
        assert_eq!(request.get("titles"), Some("Main Page,Help"));
        assert!(request.to_url().contains("titles=Main%20Page%2CHelp"));
        assert_eq!(request.get("abstract"), Some("0"));
    }

    #[test]
    fn test_build_endpoint_encodes_keys() {
        let request = client()
            .build_endpoint("/Echo/Query", &[("a&injected", "1")])
            .unwrap();
        assert_eq!(request.endpoint, "Echo/Query");
        assert_eq!(
            request.to_url(),
            "http://dev.wikia.com/api/v1/Echo/Query?a%26injected=1"
        );
    }

    #[test]
    fn test_build_endpoint_rejects_query_or_fragment() {
        for endpoint in ["", "/", "Echo/Query?x=1", "Echo/Query#top", "?limit=5"] {
            let err = client().build_endpoint(endpoint, &[]).unwrap_err();
            assert!(err.is_invalid_argument(), "{:?} should be rejected", endpoint);
        }
        assert!(client()
            .build_endpoint("Echo/Query", &[("", "1")])
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn test_parse_response_passes_json_through() {
        let value = client()
            .parse_response(r#"{"items":[{"article_id":1}],"basepath":"http://dev.wikia.com"}"#)
            .unwrap();
        assert_eq!(value["items"][0]["article_id"], 1);
        assert_eq!(value["basepath"], "http://dev.wikia.com");
    }

    #[test]
    fn test_parse_response_non_json_is_community_not_found() {
        for body in ["<html><body>Not a valid community</body></html>", ""] {
            let err = client().parse_response(body).unwrap_err();
            assert!(err.is_community_not_found());
            assert_eq!(err.to_string(), "Community not found: dev");
        }
    }
}
