use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::NotifyConfig;
use crate::error::Result;
use crate::platforms::notifier_trait::Notifier;
use crate::types::{PostOptions, PostResult, SearchOptions, ThreadMessage, ThreadOptions};

use super::client::SlackClient;
use super::convert::{replies_without_parent, search_matches};
use super::search::{compose_query, search_count};
use super::types::PostMessageRequest;

/// Slack backend for the `Notifier` contract
pub struct SlackNotifier {
    client: SlackClient,
    config: NotifyConfig,
}

impl SlackNotifier {
    /// Create a new Slack notifier
    pub fn new(config: NotifyConfig) -> Result<Self> {
        let client = SlackClient::new(&config)?;
        Ok(Self { client, config })
    }

    /// Create a Slack notifier configured from the environment
    pub fn from_env() -> Result<Self> {
        Self::new(NotifyConfig::from_env()?)
    }

    /// Get the underlying client (for Slack-specific calls)
    pub fn client(&self) -> &SlackClient {
        &self.client
    }

    pub fn config(&self) -> &NotifyConfig {
        &self.config
    }

    async fn send(&self, request: PostMessageRequest) -> Result<PostResult> {
        match self.client.post_message(&request).await {
            Ok(result) => {
                debug!(
                    channel = %result.destination,
                    ts = %result.timestamp,
                    threaded = request.thread_ts.is_some(),
                    "Message posted"
                );
                Ok(result)
            }
            Err(e) => {
                warn!(channel = %request.channel, error = %e, "Failed to post message");
                Err(e)
            }
        }
    }
}

#[async_trait]
impl Notifier for SlackNotifier {
    async fn post(&self, message: &str, options: PostOptions) -> Result<PostResult> {
        let channel = self
            .config
            .resolve_destination(options.destination.as_deref())
            .to_string();

        let request = PostMessageRequest::new(channel, message.to_string())
            .with_username(options.display_name.filter(|name| !name.is_empty()))
            .with_icon_emoji(options.icon.filter(|icon| !icon.is_empty()));

        self.send(request).await
    }

    async fn post_thread(
        &self,
        thread_id: &str,
        message: &str,
        options: ThreadOptions,
    ) -> Result<PostResult> {
        let channel = self
            .config
            .resolve_destination(options.destination.as_deref())
            .to_string();

        let request = PostMessageRequest::new(channel, message.to_string())
            .in_thread(thread_id.to_string());

        self.send(request).await
    }

    async fn get_thread_replies(&self, destination: &str, thread_id: &str) -> Vec<ThreadMessage> {
        match self.client.get_replies(destination, thread_id).await {
            Ok(messages) => replies_without_parent(messages),
            Err(e) => {
                warn!(channel = destination, thread_ts = thread_id, error = %e, "Thread lookup failed, returning no replies");
                Vec::new()
            }
        }
    }

    async fn search(&self, query: &str, options: SearchOptions) -> Vec<ThreadMessage> {
        let composed = compose_query(query, options.destination.as_deref(), options.since);

        match self
            .client
            .search_messages(&composed, search_count(options.limit))
            .await
        {
            Ok(matches) => search_matches(matches, options.limit),
            Err(e) => {
                warn!(error = %e, "Search failed, returning no matches");
                Vec::new()
            }
        }
    }
}
