//! Builders for raw API records.
//!
//! Dates are RFC 3339 strings; these helpers panic on malformed input and
//! are meant for tests only.

use chrono::{DateTime, Utc};

use crate::types::{RawCommit, RawCommitAuthor, RawCommitDetail, RawIssueOrPr};

fn parse_date(date: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(date)
        .unwrap_or_else(|e| panic!("invalid fixture date {date:?}: {e}"))
        .with_timezone(&Utc)
}

/// A commit on `octo/demo` with the given SHA, author date and message.
#[must_use]
pub fn raw_commit(sha: &str, date: &str, message: &str) -> RawCommit {
    RawCommit {
        sha: sha.to_string(),
        commit: RawCommitDetail {
            message: message.to_string(),
            author: RawCommitAuthor {
                name: "Alice".to_string(),
                date: parse_date(date),
            },
        },
        html_url: format!("https://github.com/octo/demo/commit/{sha}"),
    }
}

/// An issue on `octo/demo`.
#[must_use]
pub fn raw_issue(number: u64, date: &str, title: &str) -> RawIssueOrPr {
    RawIssueOrPr {
        number,
        title: title.to_string(),
        html_url: format!("https://github.com/octo/demo/issues/{number}"),
        created_at: parse_date(date),
        state: "open".to_string(),
        pull_request: None,
    }
}

/// A pull request on `octo/demo`, i.e. a hit carrying the `pull_request` marker.
#[must_use]
pub fn raw_pull_request(number: u64, date: &str, title: &str) -> RawIssueOrPr {
    RawIssueOrPr {
        number,
        title: title.to_string(),
        html_url: format!("https://github.com/octo/demo/pull/{number}"),
        created_at: parse_date(date),
        state: "closed".to_string(),
        pull_request: Some(serde_json::json!({
            "url": format!("https://api.github.com/repos/octo/demo/pulls/{number}")
        })),
    }
}
