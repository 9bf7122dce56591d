//! Data model types.
//!
//! `commits` and `issues` mirror the hosting API's JSON; `contribution`
//! holds the normalized value every fetcher produces.

pub mod commits;
pub mod contribution;
pub mod issues;

// Re-exports
pub use commits::{RawCommit, RawCommitAuthor, RawCommitDetail};
pub use contribution::{ContributionItem, ContributionKind};
pub use issues::{RawIssueOrPr, SearchIssuesPage};
