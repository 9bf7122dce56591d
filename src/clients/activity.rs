//! Issues and pull requests resource client.

use std::sync::Arc;

use tracing::debug;

use crate::api::{issue_search_query, HostingApi, RequestTarget};
use crate::config::SearchConfig;
use crate::error::Error;
use crate::types::ContributionItem;

/// Client for issue and pull request lookups.
pub struct ActivityClient {
    api: Arc<dyn HostingApi>,
}

impl ActivityClient {
    /// Create a new activity client.
    pub fn new(api: Arc<dyn HostingApi>) -> Self {
        Self { api }
    }

    /// Fetch issues and PRs opened by `config.username` on or after
    /// `config.since`, with one search request.
    ///
    /// # Returns
    ///
    /// `ISSUE` and `PR` items in search order.
    ///
    /// # Errors
    ///
    /// Returns an error if the search fails.
    pub async fn fetch(&self, config: &SearchConfig) -> Result<Vec<ContributionItem>, Error> {
        config.validate()?;

        let query = issue_search_query(
            config.owner.trim(),
            config.repo.trim(),
            config.username.trim(),
            config.since,
        );
        let target = RequestTarget {
            repository: config.full_name(),
            branch: None,
        };

        debug!(%query, "searching issues");
        let page = self.api.search_issues(&query, &target).await?;
        if page.incomplete_results {
            debug!(total = page.total_count, "search results are incomplete");
        }

        Ok(page.items.into_iter().map(ContributionItem::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::error::HostingError;
    use crate::testing::fixtures::{raw_issue, raw_pull_request};
    use crate::testing::{MockHostingApi, MockResponse};
    use crate::types::{ContributionKind, SearchIssuesPage};

    fn config() -> SearchConfig {
        SearchConfig::builder(
            "octo",
            "demo",
            "alice",
            NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
        )
        .branch("dev")
        .build()
    }

    #[tokio::test]
    async fn test_fetch_classifies_hits() {
        let mock = Arc::new(MockHostingApi::new());
        mock.configure_search(MockResponse::with_data(SearchIssuesPage {
            total_count: 2,
            incomplete_results: false,
            items: vec![
                raw_pull_request(7, "2024-02-10T08:00:00Z", "Add dark mode"),
                raw_issue(6, "2024-02-09T08:00:00Z", "Crash on startup"),
            ],
        }));

        let items = ActivityClient::new(mock.clone()).fetch(&config()).await.unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].kind, ContributionKind::PullRequest);
        assert_eq!(items[0].description, "Add dark mode");
        assert_eq!(items[0].url, "https://github.com/octo/demo/pull/7");
        assert_eq!(items[1].kind, ContributionKind::Issue);
    }

    #[tokio::test]
    async fn test_single_query_ignores_branches() {
        let mock = Arc::new(MockHostingApi::new());
        ActivityClient::new(mock.clone()).fetch(&config()).await.unwrap();

        let calls = mock.get_calls(Some("search_issues"));
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].args[0], "repo:octo/demo author:alice created:>=2024-01-01");
        assert_eq!(calls[0].args[1], "repository octo/demo");
    }

    #[tokio::test]
    async fn test_rate_limit_propagates() {
        let mock = Arc::new(MockHostingApi::new());
        mock.configure_search(MockResponse::with_error(HostingError::RateLimited {
            status: 403,
            message: "rate limited".to_string(),
        }));

        let result = ActivityClient::new(mock).fetch(&config()).await;
        assert!(matches!(result, Err(Error::Hosting(HostingError::RateLimited { .. }))));
    }
}
