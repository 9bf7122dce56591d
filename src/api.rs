//! The seam between the fetchers and the remote hosting API.
//!
//! [`HttpTransport`](crate::transport::HttpTransport) is the production
//! implementation; [`MockHostingApi`](crate::testing::MockHostingApi) serves
//! canned responses in tests.

use std::fmt;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::Error;
use crate::types::{RawCommit, SearchIssuesPage};

/// Maximum page size the hosting API accepts. Only one page is requested.
pub const PER_PAGE: u32 = 100;

/// One commit listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitQuery {
    pub owner: String,
    pub repo: String,
    pub author: String,
    pub since: NaiveDate,
    /// `None` lists the default branch
    pub branch: Option<String>,
}

impl CommitQuery {
    /// Query parameters for `GET /repos/{owner}/{repo}/commits`.
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("author", self.author.clone()),
            ("since", format!("{}T00:00:00Z", self.since.format("%Y-%m-%d"))),
            ("per_page", PER_PAGE.to_string()),
        ];
        if let Some(branch) = &self.branch {
            params.push(("sha", branch.clone()));
        }
        params
    }

    /// Request path, relative to the API base URL.
    #[must_use]
    pub fn path(&self) -> String {
        format!("/repos/{}/{}/commits", self.owner, self.repo)
    }

    /// What a 404 on this request refers to.
    #[must_use]
    pub fn target(&self) -> RequestTarget {
        RequestTarget {
            repository: format!("{}/{}", self.owner, self.repo),
            branch: self.branch.clone(),
        }
    }
}

/// Build the search string for issues and PRs by `author` in `owner/repo`
/// created on or after `since`.
#[must_use]
pub fn issue_search_query(owner: &str, repo: &str, author: &str, since: NaiveDate) -> String {
    format!(
        "repo:{owner}/{repo} author:{author} created:>={}",
        since.format("%Y-%m-%d")
    )
}

/// The entity a request was looking up, used to word not-found errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTarget {
    pub repository: String,
    pub branch: Option<String>,
}

impl fmt::Display for RequestTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "repository {}", self.repository)?;
        if let Some(branch) = &self.branch {
            write!(f, " (branch {branch})")?;
        }
        Ok(())
    }
}

/// Read-only access to the hosting API.
#[async_trait]
pub trait HostingApi: Send + Sync {
    /// List commits matching `query`, first page only.
    async fn list_commits(&self, query: &CommitQuery) -> Result<Vec<RawCommit>, Error>;

    /// Run an issue search for `query` within `target`, first page only.
    async fn search_issues(
        &self,
        query: &str,
        target: &RequestTarget,
    ) -> Result<SearchIssuesPage, Error>;
}
