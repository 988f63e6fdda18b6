//! Per-call options for notifier operations
//!
//! Every field is optional. An unset field is never sent to the platform,
//! which matters for presentation overrides: Slack resets the display name
//! and icon when they are sent empty.

use chrono::{DateTime, NaiveDate, TimeZone};

/// Default number of search results returned to the caller
pub const DEFAULT_SEARCH_LIMIT: usize = 50;

/// Keep `Some` only for non-empty strings
fn non_empty(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Options for posting a new top-level message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostOptions {
    /// Target destination; the backend's default when unset
    pub destination: Option<String>,
    /// Display name override for this post
    pub display_name: Option<String>,
    /// Icon override for this post (e.g., ":hammer:")
    pub icon: Option<String>,
}

impl PostOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send to a specific destination
    pub fn to(mut self, destination: impl Into<String>) -> Self {
        self.destination = non_empty(destination);
        self
    }

    /// Override the display name
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = non_empty(display_name);
        self
    }

    /// Override the icon
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = non_empty(icon);
        self
    }
}

/// Options for replying in a thread
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThreadOptions {
    /// Destination containing the thread; the backend's default when unset
    pub destination: Option<String>,
}

impl ThreadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply in a thread living in a specific destination
    pub fn to(mut self, destination: impl Into<String>) -> Self {
        self.destination = non_empty(destination);
        self
    }
}

/// Options for searching message history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Restrict matches to one destination. No default is applied.
    pub destination: Option<String>,
    /// Only messages after this calendar date
    pub since: Option<NaiveDate>,
    /// Maximum number of results returned to the caller
    pub limit: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            destination: None,
            since: None,
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the search to one destination
    pub fn in_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = non_empty(destination);
        self
    }

    /// Only match messages after `date`
    pub fn since(mut self, date: NaiveDate) -> Self {
        self.since = Some(date);
        self
    }

    /// Only match messages after the calendar date of `instant`, in its own time zone
    pub fn since_datetime<Tz: TimeZone>(self, instant: &DateTime<Tz>) -> Self {
        self.since(instant.date_naive())
    }

    /// Limit the number of results
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_post_options_omit_unset() {
        let opts = PostOptions::new();
        assert!(opts.destination.is_none());
        assert!(opts.display_name.is_none());
        assert!(opts.icon.is_none());
    }

    #[test]
    fn test_post_options_builder() {
        let opts = PostOptions::new()
            .to("#test")
            .with_display_name("TestBot")
            .with_icon(":robot:");
        assert_eq!(opts.destination.as_deref(), Some("#test"));
        assert_eq!(opts.display_name.as_deref(), Some("TestBot"));
        assert_eq!(opts.icon.as_deref(), Some(":robot:"));
    }

    #[test]
    fn test_empty_strings_are_unset() {
        let opts = PostOptions::new().to("").with_display_name("").with_icon("");
        assert_eq!(opts, PostOptions::default());

        assert!(ThreadOptions::new().to("").destination.is_none());
        assert!(SearchOptions::new().in_destination("").destination.is_none());
    }

    #[test]
    fn test_search_defaults() {
        let opts = SearchOptions::new();
        assert_eq!(opts.limit, DEFAULT_SEARCH_LIMIT);
        assert!(opts.destination.is_none());
        assert!(opts.since.is_none());
    }

    #[test]
    fn test_since_datetime_uses_local_date() {
        let offset = FixedOffset::east_opt(9 * 3600).unwrap();
        let instant = offset.with_ymd_and_hms(2026, 2, 14, 1, 30, 0).unwrap();
        let opts = SearchOptions::new().since_datetime(&instant);
        assert_eq!(opts.since, NaiveDate::from_ymd_opt(2026, 2, 14));

        let utc = Utc.with_ymd_and_hms(2026, 2, 13, 23, 0, 0).unwrap();
        let opts = SearchOptions::new().since_datetime(&utc);
        assert_eq!(opts.since, NaiveDate::from_ymd_opt(2026, 2, 13));
    }
}
