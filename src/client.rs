//! Main client.
//!
//! Provides the primary interface for collecting contributions from the
//! hosting API.

use std::sync::Arc;

use reqwest::Client;

use crate::aggregator::Aggregator;
use crate::config::{ClientConfig, SearchConfig};
use crate::error::Error;
use crate::transport::{build_client, HttpTransport};
use crate::types::ContributionItem;

/// Main client for collecting a user's contributions to one repository.
///
/// Holds one connection pool; each lookup gets its own transport so the
/// token travels with the [`SearchConfig`] that carries it.
///
/// # Example
///
/// ```rust,ignore
/// use chrono::NaiveDate;
/// use repo_contributions::{ContributionsClient, SearchConfig};
///
/// let client = ContributionsClient::new(None)?;
/// let config = SearchConfig::builder("octo", "demo", "alice", NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
///     .branches(["main", "dev"])
///     .build();
///
/// for item in client.collect(&config).await? {
///     println!("{}", item.url);
/// }
/// ```
pub struct ContributionsClient {
    config: ClientConfig,
    http: Client,
}

impl ContributionsClient {
    /// Create a new client.
    ///
    /// # Arguments
    ///
    /// * `config` - HTTP settings (default: public API, 30 second timeout)
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: Option<ClientConfig>) -> Result<Self, Error> {
        let config = config.unwrap_or_default();
        let http = build_client(&config.user_agent, config.timeout)?;
        Ok(Self { config, http })
    }

    /// Get the HTTP settings.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build a transport carrying `config`'s token.
    #[must_use]
    pub fn transport(&self, config: &SearchConfig) -> HttpTransport {
        HttpTransport::with_client(self.http.clone(), &self.config.base_url, config.token())
    }

    /// Build an aggregator for `config`.
    #[must_use]
    pub fn aggregator(&self, config: &SearchConfig) -> Aggregator {
        Aggregator::new(Arc::new(self.transport(config)))
    }

    /// Collect every contribution for `config`, most recent first.
    ///
    /// # Errors
    ///
    /// Returns a configuration error before any request is made, or the
    /// first hosting API error encountered.
    pub async fn collect(&self, config: &SearchConfig) -> Result<Vec<ContributionItem>, Error> {
        self.aggregator(config).collect(config).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::time::Duration;

    fn search() -> SearchConfig {
        SearchConfig::builder(
            "octo",
            "demo",
            "alice",
            NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
        )
        .token("secret")
        .build()
    }

    #[test]
    fn test_client_creation() {
        let client = ContributionsClient::new(None).expect("Client creation should succeed");
        assert_eq!(client.config().base_url, "https://api.github.com");
    }

    #[test]
    fn test_transport_carries_token_and_base_url() {
        let client = ContributionsClient::new(Some(ClientConfig {
            base_url: "https://ghe.example.com/api/v3".to_string(),
            timeout: Duration::from_secs(5),
            ..ClientConfig::default()
        }))
        .expect("Client creation should succeed");

        let transport = client.transport(&search());
        assert_eq!(transport.base_url(), "https://ghe.example.com/api/v3");
        assert!(transport.is_authenticated());

        let anonymous = SearchConfig {
            token: None,
            ..search()
        };
        assert!(!client.transport(&anonymous).is_authenticated());
    }

    /// Validation happens once, in the aggregator; the unreachable base URL
    /// would surface as an HTTP error if a request went out.
    #[tokio::test]
    async fn test_collect_rejects_invalid_config() {
        let client = ContributionsClient::new(Some(ClientConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            ..ClientConfig::default()
        }))
        .expect("Client creation should succeed");
        let config = SearchConfig {
            username: " ".to_string(),
            ..search()
        };

        let result = client.collect(&config).await;
        assert!(matches!(result, Err(Error::Configuration(_))));
    }
}
