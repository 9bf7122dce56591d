//! Merges commits, issues and pull requests into one timeline.

use std::sync::Arc;

use tracing::info;

use crate::api::HostingApi;
use crate::clients::{ActivityClient, CommitsClient};
use crate::config::SearchConfig;
use crate::error::Error;
use crate::types::ContributionItem;

/// Runs the commit and activity lookups concurrently and merges them.
pub struct Aggregator {
    commits: CommitsClient,
    activity: ActivityClient,
}

impl Aggregator {
    /// Create an aggregator whose fetchers share `api`.
    pub fn new(api: Arc<dyn HostingApi>) -> Self {
        Self {
            commits: CommitsClient::new(Arc::clone(&api)),
            activity: ActivityClient::new(api),
        }
    }

    /// Get the commits client.
    #[must_use]
    pub fn commits(&self) -> &CommitsClient {
        &self.commits
    }

    /// Get the activity client.
    #[must_use]
    pub fn activity(&self) -> &ActivityClient {
        &self.activity
    }

    /// Collect every contribution for `config`, most recent first.
    ///
    /// An empty vector means both lookups succeeded and found nothing.
    ///
    /// # Errors
    ///
    /// Returns the error of whichever lookup failed first; the other
    /// lookup's result is dropped.
    pub async fn collect(&self, config: &SearchConfig) -> Result<Vec<ContributionItem>, Error> {
        config.validate()?;

        let (commits, activity) =
            tokio::try_join!(self.commits.fetch(config), self.activity.fetch(config))?;

        let items = merge_sorted(commits, activity);
        info!(
            repository = %config.full_name(),
            username = %config.username,
            count = items.len(),
            "collected contributions"
        );
        Ok(items)
    }
}

/// Concatenate `commits` then `activity` and sort by date, newest first.
///
/// The sort is stable, so items with equal timestamps keep concatenation
/// order.
#[must_use]
pub fn merge_sorted(
    commits: Vec<ContributionItem>,
    activity: Vec<ContributionItem>,
) -> Vec<ContributionItem> {
    let mut items = commits;
    items.extend(activity);
    items.sort_by(|a, b| b.date.cmp(&a.date));
    items
}
