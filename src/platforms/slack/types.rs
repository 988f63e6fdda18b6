use serde::{Deserialize, Serialize};

// ============================================================================
// chat.postMessage
// ============================================================================

/// Request body for `chat.postMessage`
///
/// Optional fields are left out of the JSON entirely when unset. Slack
/// treats an explicit empty `username`/`icon_emoji` as "reset to the app
/// default", which is not what an omitted override means.
#[derive(Debug, Clone, Serialize)]
pub struct PostMessageRequest {
    pub channel: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_emoji: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_ts: Option<String>,
}

impl PostMessageRequest {
    /// Create a plain message request
    pub fn new(channel: String, text: String) -> Self {
        Self {
            channel,
            text,
            username: None,
            icon_emoji: None,
            thread_ts: None,
        }
    }

    /// Post under a different display name
    pub fn with_username(mut self, username: Option<String>) -> Self {
        self.username = username;
        self
    }

    /// Post with a different emoji icon
    pub fn with_icon_emoji(mut self, icon_emoji: Option<String>) -> Self {
        self.icon_emoji = icon_emoji;
        self
    }

    /// Make this a reply to the message with timestamp `thread_ts`
    pub fn in_thread(mut self, thread_ts: String) -> Self {
        self.thread_ts = Some(thread_ts);
        self
    }
}

/// Response from `chat.postMessage`
#[derive(Debug, Clone, Deserialize)]
pub struct PostMessageResponse {
    #[serde(default)]
    pub ok: bool,
    pub ts: Option<String>,
    pub channel: Option<String>,
    pub error: Option<String>,
}

// ============================================================================
// conversations.replies / search.messages
// ============================================================================

/// A message as returned by the history endpoints
///
/// Every field is optional: bot and system messages routinely omit `user`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlackMessage {
    pub user: Option<String>,
    pub username: Option<String>,
    pub text: Option<String>,
    pub ts: Option<String>,
}

/// Response from `conversations.replies`
///
/// The first message is always the thread parent.
#[derive(Debug, Clone, Deserialize)]
pub struct RepliesResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub messages: Vec<SlackMessage>,
    pub error: Option<String>,
}

/// The `messages` object of a `search.messages` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchMatches {
    #[serde(default)]
    pub matches: Vec<SlackMessage>,
    #[serde(default)]
    pub total: u64,
}

/// Response from `search.messages`
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub messages: SearchMatches,
    pub error: Option<String>,
}
