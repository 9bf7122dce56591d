//! Repository contribution collector.
//!
//! Gathers one user's commits, issues and pull requests in a single
//! repository from the GitHub REST API, removes duplicate commits seen on
//! several branches, and returns one list ordered newest first.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use chrono::NaiveDate;
//! use repo_contributions::testing::{fixtures, MockHostingApi, MockResponse};
//! use repo_contributions::{Aggregator, ContributionKind, SearchConfig};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let api = Arc::new(MockHostingApi::new());
//! api.configure_commits(
//!     None,
//!     MockResponse::with_data(vec![fixtures::raw_commit("a1", "2024-02-01T00:00:00Z", "Fix")]),
//! );
//!
//! let since = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let config = SearchConfig::builder("octo", "demo", "alice", since).build();
//! let items = Aggregator::new(api).collect(&config).await.unwrap();
//!
//! assert_eq!(items.len(), 1);
//! assert_eq!(items[0].kind, ContributionKind::Commit);
//! # });
//! ```

pub mod aggregator;
pub mod api;
pub mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod render;
pub mod summary;
pub mod testing;
pub mod transport;
pub mod types;

// Re-exports
pub use aggregator::{merge_sorted, Aggregator};
pub use api::{CommitQuery, HostingApi, RequestTarget};
pub use client::ContributionsClient;
pub use clients::{ActivityClient, CommitsClient};
pub use config::{ClientConfig, SearchConfig, SearchConfigBuilder};
pub use error::{Error, HostingError};
pub use render::{render_links, render_report, NO_MATCHES_MESSAGE};
pub use summary::{ChatSummarizer, Summarizer, SUMMARY_FALLBACK};
pub use transport::HttpTransport;
pub use types::{ContributionItem, ContributionKind, RawCommit, RawIssueOrPr, SearchIssuesPage};
