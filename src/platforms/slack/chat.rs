use crate::error::{Error, ErrorCode, Result};
use crate::types::PostResult;

use super::client::SlackClient;
use super::types::{PostMessageRequest, PostMessageResponse};

impl SlackClient {
    /// Send a message, or a thread reply when `request.thread_ts` is set
    ///
    /// # API Method
    /// `POST chat.postMessage`
    ///
    /// # Errors
    /// * `NetworkError` when the request fails or returns a non-2xx status
    /// * `ApiError` when Slack answers `ok: false`
    pub async fn post_message(&self, request: &PostMessageRequest) -> Result<PostResult> {
        let response = self.post("chat.postMessage", request).await?;
        let body: PostMessageResponse = self.handle_response(response).await?;

        if !body.ok {
            return Err(Error::api(body.error));
        }

        let ts = body.ts.ok_or_else(|| {
            Error::new(ErrorCode::Unknown, "Malformed chat.postMessage response: missing ts")
        })?;
        let channel = body.channel.ok_or_else(|| {
            Error::new(ErrorCode::Unknown, "Malformed chat.postMessage response: missing channel")
        })?;

        Ok(PostResult::new(ts.clone(), channel, ts))
    }
}
