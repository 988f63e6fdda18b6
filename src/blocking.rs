//! Blocking facade over an async notifier
//!
//! `BlockingNotifier` owns a single-threaded Tokio runtime and drives each
//! call to completion on the calling thread, so synchronous code can use any
//! `Notifier` without an async context of its own.

use std::future::Future;

use tokio::runtime::{Builder, Runtime};

use crate::config::NotifyConfig;
use crate::error::{Error, ErrorCode, Result};
use crate::platforms::slack::SlackNotifier;
use crate::platforms::Notifier;
use crate::types::{PostOptions, PostResult, SearchOptions, ThreadMessage, ThreadOptions};

/// Synchronous wrapper around a `Notifier`
///
/// Must not be called from inside an async context: `block_on` panics when
/// nested in another runtime.
pub struct BlockingNotifier<N: Notifier> {
    inner: N,
    runtime: Runtime,
}

impl BlockingNotifier<SlackNotifier> {
    /// Create a blocking Slack notifier
    pub fn slack(config: NotifyConfig) -> Result<Self> {
        Self::new(SlackNotifier::new(config)?)
    }
}

impl<N: Notifier> BlockingNotifier<N> {
    /// Wrap an async notifier
    pub fn new(inner: N) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| Error::new(ErrorCode::Unknown, format!("Failed to create Tokio runtime: {e}")))?;
        Ok(Self { inner, runtime })
    }

    /// Get the wrapped notifier
    pub fn inner(&self) -> &N {
        &self.inner
    }

    fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// Blocking form of `Notifier::post`
    pub fn post(&self, message: &str, options: PostOptions) -> Result<PostResult> {
        self.block_on(self.inner.post(message, options))
    }

    /// Blocking form of `Notifier::post_thread`
    pub fn post_thread(
        &self,
        thread_id: &str,
        message: &str,
        options: ThreadOptions,
    ) -> Result<PostResult> {
        self.block_on(self.inner.post_thread(thread_id, message, options))
    }

    /// Blocking form of `Notifier::get_thread_replies`
    pub fn get_thread_replies(&self, destination: &str, thread_id: &str) -> Vec<ThreadMessage> {
        self.block_on(self.inner.get_thread_replies(destination, thread_id))
    }

    /// Blocking form of `Notifier::search`
    pub fn search(&self, query: &str, options: SearchOptions) -> Vec<ThreadMessage> {
        self.block_on(self.inner.search(query, options))
    }
}
