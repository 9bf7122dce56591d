//! Mock hosting API for testing.
//!
//! Provides a `MockHostingApi` that implements [`HostingApi`] from canned
//! responses, without making network calls.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::api::{CommitQuery, HostingApi, RequestTarget};
use crate::error::{Error, HostingError};
use crate::types::{RawCommit, SearchIssuesPage};

/// Record of a method call.
#[derive(Debug, Clone)]
pub struct MockCall {
    /// Method name ("list_commits" or "search_issues")
    pub method: String,
    /// Arguments passed to the method
    pub args: Vec<String>,
    /// Timestamp of the call
    pub timestamp: DateTime<Utc>,
}

impl MockCall {
    /// Create a new mock call record.
    pub fn new(method: &str, args: Vec<String>) -> Self {
        Self {
            method: method.to_string(),
            args,
            timestamp: Utc::now(),
        }
    }
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub struct MockResponse<T: Clone> {
    /// The data to return
    pub data: Option<T>,
    /// Error to return instead of data
    pub error: Option<HostingError>,
    /// How long to wait before answering
    pub delay: Option<Duration>,
}

impl<T: Clone> Default for MockResponse<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            delay: None,
        }
    }
}

impl<T: Clone> MockResponse<T> {
    /// Create a new mock response with data.
    pub fn with_data(data: T) -> Self {
        Self {
            data: Some(data),
            ..Self::default()
        }
    }

    /// Create a new mock response with an error.
    pub fn with_error(error: HostingError) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }

    /// Answer only after `delay`.
    #[must_use]
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Get the result, returning either the configured data or error.
    fn into_result(self, default: T) -> Result<T, Error> {
        if let Some(error) = self.error {
            return Err(Error::Hosting(error));
        }
        Ok(self.data.unwrap_or(default))
    }
}

#[derive(Default)]
struct MockState {
    /// Keyed by branch; `None` is the default branch
    commits: HashMap<Option<String>, MockResponse<Vec<RawCommit>>>,
    search: MockResponse<SearchIssuesPage>,
    calls: Vec<MockCall>,
}

/// Mock hosting API.
///
/// Unconfigured branches and an unconfigured search answer with no results.
#[derive(Default)]
pub struct MockHostingApi {
    state: Mutex<MockState>,
}

impl MockHostingApi {
    /// Create a mock with no configured responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the commit listing for `branch` (`None` = default branch).
    pub fn configure_commits(&self, branch: Option<&str>, response: MockResponse<Vec<RawCommit>>) {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .commits
            .insert(branch.map(String::from), response);
    }

    /// Configure the issue search response.
    pub fn configure_search(&self, response: MockResponse<SearchIssuesPage>) {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).search = response;
    }

    /// Check if a method was called.
    #[must_use]
    pub fn was_called(&self, method: &str) -> bool {
        self.call_count(method) > 0
    }

    /// Get the number of times a method was called.
    #[must_use]
    pub fn call_count(&self, method: &str) -> usize {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .iter()
            .filter(|call| call.method == method)
            .count()
    }

    /// Get recorded calls, optionally filtered by method.
    #[must_use]
    pub fn get_calls(&self, method: Option<&str>) -> Vec<MockCall> {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        match method {
            Some(m) => state.calls.iter().filter(|call| call.method == m).cloned().collect(),
            None => state.calls.clone(),
        }
    }

    /// Reset all recorded calls.
    pub fn reset(&self) {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).calls.clear();
    }
}

#[async_trait]
impl HostingApi for MockHostingApi {
    async fn list_commits(&self, query: &CommitQuery) -> Result<Vec<RawCommit>, Error> {
        let response = {
            let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            state.calls.push(MockCall::new(
                "list_commits",
                vec![
                    format!("{}/{}", query.owner, query.repo),
                    query.author.clone(),
                    query.since.to_string(),
                    query.branch.clone().unwrap_or_default(),
                ],
            ));
            state.commits.get(&query.branch).cloned().unwrap_or_default()
        };

        if let Some(delay) = response.delay {
            tokio::time::sleep(delay).await;
        }
        response.into_result(Vec::new())
    }

    async fn search_issues(
        &self,
        query: &str,
        target: &RequestTarget,
    ) -> Result<SearchIssuesPage, Error> {
        let response = {
            let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            state.calls.push(MockCall::new(
                "search_issues",
                vec![query.to_string(), target.to_string()],
            ));
            state.search.clone()
        };

        if let Some(delay) = response.delay {
            tokio::time::sleep(delay).await;
        }
        response.into_result(SearchIssuesPage::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures::raw_commit;
    use chrono::NaiveDate;

    fn query(branch: Option<&str>) -> CommitQuery {
        CommitQuery {
            owner: "octo".to_string(),
            repo: "demo".to_string(),
            author: "alice".to_string(),
            since: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
            branch: branch.map(String::from),
        }
    }

    #[tokio::test]
    async fn test_unconfigured_branch_is_empty() {
        let mock = MockHostingApi::new();
        let commits = mock.list_commits(&query(Some("dev"))).await.unwrap();

        assert!(commits.is_empty());
        assert!(mock.was_called("list_commits"));
    }

    #[tokio::test]
    async fn test_configured_branch_response() {
        let mock = MockHostingApi::new();
        mock.configure_commits(
            Some("dev"),
            MockResponse::with_data(vec![raw_commit("a1", "2024-02-01T00:00:00Z", "msg")]),
        );

        let dev = mock.list_commits(&query(Some("dev"))).await.unwrap();
        let default = mock.list_commits(&query(None)).await.unwrap();

        assert_eq!(dev.len(), 1);
        assert!(default.is_empty());
        assert_eq!(mock.call_count("list_commits"), 2);
    }

    #[tokio::test]
    async fn test_configured_error() {
        let mock = MockHostingApi::new();
        mock.configure_search(MockResponse::with_error(HostingError::Api {
            status: 500,
            message: "boom".to_string(),
        }));

        let target = query(None).target();
        let result = mock.search_issues("q", &target).await;
        assert!(matches!(result, Err(Error::Hosting(HostingError::Api { status: 500, .. }))));
    }

    #[tokio::test]
    async fn test_get_calls_and_reset() {
        let mock = MockHostingApi::new();
        let target = query(None).target();

        mock.list_commits(&query(None)).await.unwrap();
        mock.search_issues("q", &target).await.unwrap();

        assert_eq!(mock.get_calls(None).len(), 2);
        let search_calls = mock.get_calls(Some("search_issues"));
        assert_eq!(search_calls[0].args, vec!["q".to_string(), "repository octo/demo".to_string()]);

        mock.reset();
        assert!(!mock.was_called("search_issues"));
    }
}
