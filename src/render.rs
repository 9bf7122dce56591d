//! Plain-text output for submission forms.

use crate::types::ContributionItem;

/// Printed for a successful lookup that found nothing.
pub const NO_MATCHES_MESSAGE: &str = "No matching contributions found.";

/// One canonical link per line, in the given order.
#[must_use]
pub fn render_links(items: &[ContributionItem]) -> String {
    items
        .iter()
        .map(|item| item.url.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per item: kind, date, link and description headline.
#[must_use]
pub fn render_report(items: &[ContributionItem]) -> String {
    items
        .iter()
        .map(|item| {
            let line = format!(
                "[{}] {} {}",
                item.kind,
                item.date.format("%Y-%m-%d"),
                item.url
            );
            match item.headline() {
                "" => line,
                headline => format!("{line} - {headline}"),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
