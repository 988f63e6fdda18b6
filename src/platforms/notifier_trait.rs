//! Notifier trait defining the interface all notification backends must implement

use crate::error::Result;
use crate::types::{PostOptions, PostResult, SearchOptions, ThreadMessage, ThreadOptions};
use async_trait::async_trait;

/// Trait that all notification backends must implement
///
/// Write operations return a `Result` because a silent failure would imply
/// a message was delivered when it was not. Read operations are best-effort
/// and return a plain `Vec`: any failure is reported as an empty result,
/// which callers cannot tell apart from "no data".
///
/// Each call performs exactly one remote round trip, with no retry and no
/// timeout of its own. Wrap calls in `tokio::time::timeout` if a deadline is
/// needed.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Post a new top-level message
    ///
    /// # Arguments
    /// * `message` - The message text
    /// * `options` - Destination and presentation overrides; unset fields
    ///   are not sent
    ///
    /// # Returns
    /// The platform's identifiers for the created message
    async fn post(&self, message: &str, options: PostOptions) -> Result<PostResult>;

    /// Reply in the thread started by `thread_id`
    ///
    /// # Arguments
    /// * `thread_id` - Platform identifier of the parent message
    /// * `message` - The reply text
    /// * `options` - Destination containing the thread
    async fn post_thread(
        &self,
        thread_id: &str,
        message: &str,
        options: ThreadOptions,
    ) -> Result<PostResult>;

    /// Get every reply in a thread, excluding the parent message, in order
    ///
    /// Returns an empty list on any failure, including "thread not found".
    async fn get_thread_replies(&self, destination: &str, thread_id: &str) -> Vec<ThreadMessage>;

    /// Search message history, most recent first, at most `options.limit` results
    ///
    /// Returns an empty list on any failure.
    async fn search(&self, query: &str, options: SearchOptions) -> Vec<ThreadMessage>;
}
