use crate::error::{Error, Result};

use super::client::SlackClient;
use super::types::{RepliesResponse, SlackMessage};

impl SlackClient {
    /// Get every message of a thread, parent first
    ///
    /// # Arguments
    /// * `channel` - Channel containing the thread
    /// * `thread_ts` - Timestamp of the parent message
    ///
    /// # API Method
    /// `GET conversations.replies?channel=<channel>&ts=<thread_ts>`
    pub async fn get_replies(&self, channel: &str, thread_ts: &str) -> Result<Vec<SlackMessage>> {
        let response = self
            .get("conversations.replies", &[("channel", channel), ("ts", thread_ts)])
            .await?;
        let body: RepliesResponse = self.handle_response(response).await?;

        if !body.ok {
            return Err(Error::api(body.error));
        }

        Ok(body.messages)
    }
}
