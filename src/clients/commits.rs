//! Commits resource client.

use std::collections::HashSet;
use std::sync::Arc;

use futures::future::try_join_all;
use tracing::debug;

use crate::api::{CommitQuery, HostingApi};
use crate::config::SearchConfig;
use crate::error::Error;
use crate::types::{ContributionItem, RawCommit};

/// Client for commit history lookups.
pub struct CommitsClient {
    api: Arc<dyn HostingApi>,
}

impl CommitsClient {
    /// Create a new commits client.
    pub fn new(api: Arc<dyn HostingApi>) -> Self {
        Self { api }
    }

    /// Fetch commits authored by `config.username` since `config.since`.
    ///
    /// With no branches configured the default branch is listed once.
    /// Otherwise every branch is listed concurrently and the results are
    /// merged in the order the branches were given, keeping the first copy
    /// of each SHA.
    ///
    /// # Returns
    ///
    /// One `COMMIT` item per unique SHA.
    ///
    /// # Errors
    ///
    /// Returns the first error of any branch query; no partial result is
    /// produced.
    pub async fn fetch(&self, config: &SearchConfig) -> Result<Vec<ContributionItem>, Error> {
        config.validate()?;

        let queries = commit_queries(config);
        let pages = try_join_all(queries.iter().map(|query| {
            debug!(branch = query.branch.as_deref().unwrap_or("<default>"), "listing commits");
            self.api.list_commits(query)
        }))
        .await?;

        Ok(dedup_commits(pages)
            .into_iter()
            .map(ContributionItem::from)
            .collect())
    }
}

/// One query per configured branch, or a single default-branch query.
#[must_use]
pub fn commit_queries(config: &SearchConfig) -> Vec<CommitQuery> {
    let base = CommitQuery {
        owner: config.owner.trim().to_string(),
        repo: config.repo.trim().to_string(),
        author: config.username.trim().to_string(),
        since: config.since,
        branch: None,
    };

    let branched: Vec<CommitQuery> = config
        .branches()
        .map(|branch| CommitQuery {
            branch: Some(branch.to_string()),
            ..base.clone()
        })
        .collect();

    if branched.is_empty() {
        vec![base]
    } else {
        branched
    }
}

/// Flatten per-branch pages, keeping the first record seen for each SHA.
#[must_use]
pub fn dedup_commits<I>(pages: I) -> Vec<RawCommit>
where
    I: IntoIterator<Item = Vec<RawCommit>>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut unique = Vec::new();

    for commit in pages.into_iter().flatten() {
        if seen.insert(commit.sha.clone()) {
            unique.push(commit);
        } else {
            debug!(sha = %commit.sha, "dropping duplicate commit");
        }
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::error::HostingError;
    use crate::testing::fixtures::raw_commit;
    use crate::testing::{MockHostingApi, MockResponse};
    use crate::types::ContributionKind;

    fn config() -> SearchConfig {
        SearchConfig::builder(
            "octo",
            "demo",
            "alice",
            NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
        )
        .build()
    }

    #[test]
    fn test_default_branch_single_query() {
        let queries = commit_queries(&config());
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].branch, None);
    }

    #[test]
    fn test_one_query_per_branch_in_order() {
        let config = SearchConfig {
            branches: vec!["main".to_string(), "dev".to_string(), "main".to_string()],
            ..config()
        };
        let branches: Vec<Option<String>> =
            commit_queries(&config).into_iter().map(|q| q.branch).collect();

        assert_eq!(
            branches,
            vec![
                Some("main".to_string()),
                Some("dev".to_string()),
                Some("main".to_string())
            ]
        );
    }

    #[test]
    fn test_dedup_keeps_first_copy() {
        let mut on_dev = raw_commit("b2", "2024-02-02T00:00:00Z", "from dev");
        on_dev.html_url = "https://github.com/octo/demo/commit/b2?dev".to_string();

        let unique = dedup_commits(vec![
            vec![
                raw_commit("a1", "2024-02-01T00:00:00Z", "x"),
                raw_commit("b2", "2024-02-02T00:00:00Z", "from main"),
            ],
            vec![on_dev, raw_commit("c3", "2024-02-03T00:00:00Z", "z")],
        ]);

        let shas: Vec<&str> = unique.iter().map(|c| c.sha.as_str()).collect();
        assert_eq!(shas, vec!["a1", "b2", "c3"]);
        assert_eq!(unique[1].commit.message, "from main");
    }

    #[tokio::test]
    async fn test_fetch_maps_to_commit_items() {
        let mock = Arc::new(MockHostingApi::new());
        mock.configure_commits(
            None,
            MockResponse::with_data(vec![raw_commit("a1", "2024-02-01T00:00:00Z", "Subject\n\nBody")]),
        );

        let items = CommitsClient::new(mock.clone()).fetch(&config()).await.unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].kind, ContributionKind::Commit);
        assert_eq!(items[0].description, "Subject\n\nBody");
        assert_eq!(mock.call_count("list_commits"), 1);
    }

    #[tokio::test]
    async fn test_any_branch_failure_aborts() {
        let mock = Arc::new(MockHostingApi::new());
        mock.configure_commits(
            Some("main"),
            MockResponse::with_data(vec![raw_commit("a1", "2024-02-01T00:00:00Z", "x")]),
        );
        mock.configure_commits(
            Some("gone"),
            MockResponse::with_error(HostingError::NotFound {
                entity: "repository octo/demo (branch gone)".to_string(),
                message: "Not found".to_string(),
            }),
        );

        let config = SearchConfig {
            branches: vec!["main".to_string(), "gone".to_string()],
            ..config()
        };
        let result = CommitsClient::new(mock).fetch(&config).await;

        assert!(matches!(
            result,
            Err(Error::Hosting(HostingError::NotFound { ref entity, .. })) if entity.contains("gone")
        ));
    }

    #[tokio::test]
    async fn test_invalid_config_makes_no_request() {
        let mock = Arc::new(MockHostingApi::new());
        let config = SearchConfig {
            owner: String::new(),
            ..config()
        };

        let result = CommitsClient::new(mock.clone()).fetch(&config).await;
        assert!(matches!(result, Err(Error::Configuration(_))));
        assert!(!mock.was_called("list_commits"));
    }
}
