//! Search results as returned by `GET /search/issues`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ContributionKind;

/// A page of search results. Only the first page is ever requested.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchIssuesPage {
    /// Total number of matches on the server, possibly more than `items`
    #[serde(default)]
    pub total_count: u64,
    /// Whether the search timed out server-side
    #[serde(default)]
    pub incomplete_results: bool,
    /// Matches on this page
    #[serde(default)]
    pub items: Vec<RawIssueOrPr>,
}

/// An issue or pull request search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawIssueOrPr {
    /// Issue/PR number within the repository
    pub number: u64,
    /// Title
    pub title: String,
    /// Canonical web link
    pub html_url: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// "open" or "closed"
    #[serde(default)]
    pub state: String,
    /// Present only on pull requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<Value>,
}

impl RawIssueOrPr {
    /// Classify the hit. A `pull_request` object marks a PR.
    #[must_use]
    pub fn kind(&self) -> ContributionKind {
        if self.pull_request.is_some() {
            ContributionKind::PullRequest
        } else {
            ContributionKind::Issue
        }
    }
}
