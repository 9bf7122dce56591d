//! Normalized contribution values.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{RawCommit, RawIssueOrPr};

/// What kind of contribution an item is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContributionKind {
    Commit,
    Issue,
    #[serde(rename = "PR")]
    PullRequest,
}

impl ContributionKind {
    /// Short uppercase label: `COMMIT`, `ISSUE` or `PR`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Commit => "COMMIT",
            Self::Issue => "ISSUE",
            Self::PullRequest => "PR",
        }
    }
}

impl fmt::Display for ContributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A commit, issue or pull request attributed to the requested author.
///
/// Built once from a raw API record and never mutated. Its display identity
/// is `url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionItem {
    /// Commit, issue or pull request
    #[serde(rename = "type")]
    pub kind: ContributionKind,
    /// Canonical web link
    pub url: String,
    /// Author date for commits, creation date for issues and PRs
    pub date: DateTime<Utc>,
    /// Full commit message, or issue/PR title
    pub description: String,
}

impl ContributionItem {
    /// First line of the description.
    #[must_use]
    pub fn headline(&self) -> &str {
        self.description.lines().next().unwrap_or_default()
    }
}

impl From<RawCommit> for ContributionItem {
    fn from(raw: RawCommit) -> Self {
        Self {
            kind: ContributionKind::Commit,
            url: raw.html_url,
            date: raw.commit.author.date,
            description: raw.commit.message,
        }
    }
}

impl From<RawIssueOrPr> for ContributionItem {
    fn from(raw: RawIssueOrPr) -> Self {
        Self {
            kind: raw.kind(),
            url: raw.html_url,
            date: raw.created_at,
            description: raw.title,
        }
    }
}
