//! Commit records as returned by `GET /repos/{owner}/{repo}/commits`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of the commit listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCommit {
    /// Content-addressed commit identifier
    pub sha: String,
    /// Git-level commit data
    pub commit: RawCommitDetail,
    /// Canonical web link
    pub html_url: String,
}

/// The `commit` object nested inside a listing entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCommitDetail {
    /// Full commit message
    pub message: String,
    /// Git author
    pub author: RawCommitAuthor,
}

/// Git author signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCommitAuthor {
    /// Author name as recorded in the commit
    #[serde(default)]
    pub name: String,
    /// Author timestamp, normalized to UTC
    pub date: DateTime<Utc>,
}
