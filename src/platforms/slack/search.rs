use chrono::NaiveDate;
use tracing::debug;

use crate::error::{Error, Result};

use super::client::SlackClient;
use super::types::{SearchResponse, SlackMessage};

/// Largest `count` Slack accepts for one `search.messages` page
pub const MAX_SEARCH_COUNT: usize = 100;

/// Append Slack search modifiers to a free-text query
///
/// `in:<destination>` restricts to one channel, `after:<YYYY-MM-DD>` to
/// messages after a calendar date. Slack's date modifiers take no time
/// component.
pub fn compose_query(query: &str, destination: Option<&str>, since: Option<NaiveDate>) -> String {
    let mut composed = query.to_string();
    if let Some(destination) = destination.filter(|d| !d.is_empty()) {
        composed.push_str(&format!(" in:{destination}"));
    }
    if let Some(since) = since {
        composed.push_str(&format!(" after:{}", since.format("%Y-%m-%d")));
    }
    composed
}

/// The `count` to request for a caller-side `limit`
pub fn search_count(limit: usize) -> usize {
    limit.min(MAX_SEARCH_COUNT)
}

impl SlackClient {
    /// Search messages across the workspace
    ///
    /// # Arguments
    /// * `query` - Fully composed query, modifiers included
    /// * `count` - Number of matches to request
    ///
    /// # API Method
    /// `GET search.messages?query=<query>&count=<count>`
    pub async fn search_messages(&self, query: &str, count: usize) -> Result<Vec<SlackMessage>> {
        let count = count.to_string();
        let response = self
            .get("search.messages", &[("query", query), ("count", count.as_str())])
            .await?;
        let body: SearchResponse = self.handle_response(response).await?;

        if !body.ok {
            return Err(Error::api(body.error));
        }

        debug!(
            total = body.messages.total,
            returned = body.messages.matches.len(),
            "search.messages matched"
        );
        Ok(body.messages.matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_plain_query() {
        assert_eq!(compose_query("test query", None, None), "test query");
    }

    #[test]
    fn test_compose_with_destination() {
        assert_eq!(
            compose_query("test query", Some("#specific"), None),
            "test query in:#specific"
        );
    }

    #[test]
    fn test_compose_with_since() {
        let since = NaiveDate::from_ymd_opt(2026, 2, 14).unwrap();
        assert_eq!(
            compose_query("test query", None, Some(since)),
            "test query after:2026-02-14"
        );
    }

    #[test]
    fn test_compose_with_both() {
        let since = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(
            compose_query("deploy", Some("#ops"), Some(since)),
            "deploy in:#ops after:2026-01-05"
        );
    }

    #[test]
    fn test_search_count_is_capped() {
        assert_eq!(search_count(10), 10);
        assert_eq!(search_count(50), 50);
        assert_eq!(search_count(100), 100);
        assert_eq!(search_count(500), 100);
        assert_eq!(search_count(0), 0);
    }
}
