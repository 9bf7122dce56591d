//! HTTP transport for the hosting API.
//!
//! Sends read-only GET requests with the API's media type, an optional
//! bearer token, and maps non-success statuses into [`HostingError`]s.
//! There is no retry and no pagination: one request, one page.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::api::{CommitQuery, HostingApi, RequestTarget, PER_PAGE};
use crate::config::ClientConfig;
use crate::error::{Error, HostingError};
use crate::types::{RawCommit, SearchIssuesPage};

/// Media type requested on every call.
pub const ACCEPT_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

/// HTTP transport bound to one base URL and one (optional) credential.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
    token: Option<String>,
    client: Client,
}

impl HttpTransport {
    /// Create a new HTTP transport.
    ///
    /// # Arguments
    ///
    /// * `config` - Base URL, timeout and user agent
    /// * `token` - Optional access token, sent as `Authorization: Bearer`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: &ClientConfig, token: Option<&str>) -> Result<Self, Error> {
        let client = build_client(&config.user_agent, config.timeout)?;
        Ok(Self::with_client(client, &config.base_url, token))
    }

    /// Create a transport that shares an existing reqwest client.
    #[must_use]
    pub fn with_client(client: Client, base_url: &str, token: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.map(str::to_string),
            client,
        }
    }

    /// Get the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether requests carry a credential.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// GET `path` and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
        target: &RequestTarget,
    ) -> Result<T, Error> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, ?params, authenticated = self.is_authenticated(), "GET");

        let mut request = self.client.get(&url).query(params);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::parse_error_response(response, target).await);
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Http(format!("Failed to read response: {e}")))?;
        serde_json::from_slice(&bytes).map_err(Error::from)
    }

    /// Parse an error response into a typed error.
    async fn parse_error_response(response: Response, target: &RequestTarget) -> Error {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Error::Hosting(classify_status(status, &body, target))
    }
}

#[async_trait]
impl HostingApi for HttpTransport {
    async fn list_commits(&self, query: &CommitQuery) -> Result<Vec<RawCommit>, Error> {
        self.get_json(&query.path(), &query.params(), &query.target())
            .await
    }

    async fn search_issues(
        &self,
        query: &str,
        target: &RequestTarget,
    ) -> Result<SearchIssuesPage, Error> {
        let params = [("q", query.to_string()), ("per_page", PER_PAGE.to_string())];
        self.get_json("/search/issues", &params, target).await
    }
}

/// Build the reqwest client shared by every transport.
///
/// # Errors
///
/// Returns an error if the user agent is not a valid header value or the
/// TLS backend fails to initialize.
pub fn build_client(user_agent: &str, timeout: Duration) -> Result<Client, Error> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_MEDIA_TYPE));
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(user_agent)
            .map_err(|e| Error::Configuration(format!("Invalid user agent: {e}")))?,
    );

    Client::builder()
        .default_headers(headers)
        .timeout(timeout)
        .build()
        .map_err(|e| Error::Http(e.to_string()))
}

/// Map a non-success status and its body to a [`HostingError`].
///
/// 403 and 429 both mean throttling on this API; 404 names `target`.
#[must_use]
pub fn classify_status(status: StatusCode, body: &str, target: &RequestTarget) -> HostingError {
    let code = status.as_u16();
    match status {
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => HostingError::RateLimited {
            status: code,
            message: format!(
                "GitHub API rate limit exceeded (HTTP {code}). \
                 Provide a personal access token to raise the limit."
            ),
        },
        StatusCode::NOT_FOUND => HostingError::NotFound {
            entity: target.to_string(),
            message: format!(
                "Not found: {target}. Check that it exists and is accessible with the supplied token."
            ),
        },
        _ => {
            let mut message = format!("GitHub API error: {status}");
            if let Some(detail) = body_message(body) {
                message.push_str(": ");
                message.push_str(&detail);
            }
            HostingError::Api {
                status: code,
                message,
            }
        }
    }
}

/// The `message` field of a JSON error body, if any.
fn body_message(body: &str) -> Option<String> {
    let data: Value = serde_json::from_str(body).ok()?;
    data.get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(String::from)
}
