//! libnotifier: a notification-delivery contract and a Slack backend for it
//!
//! Callers hold a [`Notifier`] and use its four operations: `post`,
//! `post_thread`, `get_thread_replies` and `search`. Writes report failures
//! through [`Result`]. Reads are best-effort and return an empty list on
//! any failure.
//!
//! ```no_run
//! use notifier::{Notifier, NotifyConfig, PostOptions, SlackNotifier};
//!
//! # async fn run() -> notifier::Result<()> {
//! let notifier = SlackNotifier::new(NotifyConfig::new("xoxb-...").with_default_destination("#ops"))?;
//! let posted = notifier.post("deploy finished", PostOptions::new().with_icon(":rocket:")).await?;
//! let replies = notifier.get_thread_replies(&posted.destination, &posted.message_id).await;
//! # let _ = replies;
//! # Ok(())
//! # }
//! ```

// Core modules
pub mod blocking;
pub mod config;
pub mod error;
pub mod platforms;
pub mod types;

// Re-exports for convenience
pub use blocking::BlockingNotifier;
pub use config::NotifyConfig;
pub use error::{Error, ErrorCode, Result};
pub use platforms::slack::SlackNotifier;
pub use platforms::Notifier;
pub use types::{PostOptions, PostResult, SearchOptions, ThreadMessage, ThreadOptions};

// Library version information
pub const VERSION_STRING: &str = concat!(env!("CARGO_PKG_VERSION"), " (libnotifier)");
