//! Caller-supplied configuration.
//!
//! [`SearchConfig`] describes one lookup; [`ClientConfig`] describes how the
//! HTTP client talks to the hosting API. Neither reads the process
//! environment: the binary resolves env vars and passes plain values in.

use std::time::Duration;

use chrono::NaiveDate;

use crate::error::Error;

/// Default base URL for the hosting API.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Parameters of a single contribution lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Author whose contributions are collected
    pub username: String,
    /// Inclusive lower bound on contribution date
    pub since: NaiveDate,
    /// Branches to scan for commits; empty means the default branch
    pub branches: Vec<String>,
    /// Optional access token sent as a bearer credential
    pub token: Option<String>,
}

impl SearchConfig {
    /// Start building a config from the required fields.
    pub fn builder(
        owner: impl Into<String>,
        repo: impl Into<String>,
        username: impl Into<String>,
        since: NaiveDate,
    ) -> SearchConfigBuilder {
        SearchConfigBuilder {
            config: Self {
                owner: owner.into(),
                repo: repo.into(),
                username: username.into(),
                since,
                branches: Vec::new(),
                token: None,
            },
        }
    }

    /// Check required fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] naming the first blank field.
    pub fn validate(&self) -> Result<(), Error> {
        for (field, value) in [
            ("owner", &self.owner),
            ("repo", &self.repo),
            ("username", &self.username),
        ] {
            if value.trim().is_empty() {
                return Err(Error::Configuration(format!("{field} is required")));
            }
        }
        Ok(())
    }

    /// Branch names to query, trimmed, blanks dropped, in the order given.
    pub fn branches(&self) -> impl Iterator<Item = &str> {
        self.branches
            .iter()
            .map(|b| b.trim())
            .filter(|b| !b.is_empty())
    }

    /// `owner/repo`
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner.trim(), self.repo.trim())
    }

    /// Token, if one was supplied and is not blank.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }
}

/// Builder for [`SearchConfig`].
#[derive(Debug, Clone)]
pub struct SearchConfigBuilder {
    config: SearchConfig,
}

impl SearchConfigBuilder {
    /// Add one branch to scan.
    #[must_use]
    pub fn branch(mut self, branch: impl Into<String>) -> Self {
        self.config.branches.push(branch.into());
        self
    }

    /// Add several branches to scan.
    #[must_use]
    pub fn branches<I, S>(mut self, branches: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config
            .branches
            .extend(branches.into_iter().map(Into::into));
        self
    }

    /// Set the access token.
    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.config.token = Some(token.into());
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> SearchConfig {
        self.config
    }
}

/// HTTP client settings.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for API requests
    pub base_url: String,
    /// Upper bound for each request
    pub timeout: Duration,
    /// `User-Agent` header value; the hosting API rejects requests without one
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: concat!("repo-contributions/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
