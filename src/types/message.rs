//! Message types returned by notifier operations

use serde::{Deserialize, Serialize};

/// Sender recorded when the platform omits an identifiable author
pub const UNKNOWN_AUTHOR: &str = "unknown";

/// Outcome of a successful `post` or `post_thread`
///
/// `message_id` and `timestamp` are independent platform identifiers. On
/// Slack both come from the same `ts` field, but callers must not rely on
/// them being equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResult {
    /// Platform identifier of the created message
    pub message_id: String,
    /// Destination as reported back by the platform (may be normalized)
    pub destination: String,
    /// Platform timestamp of the created message
    pub timestamp: String,
}

impl PostResult {
    /// Create a new post result
    pub fn new(
        message_id: impl Into<String>,
        destination: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        PostResult {
            message_id: message_id.into(),
            destination: destination.into(),
            timestamp: timestamp.into(),
        }
    }
}

/// One historical message from a thread or a search result set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadMessage {
    /// Sender identifier, `"unknown"` when the platform did not provide one
    pub author: String,
    /// Message text
    pub text: String,
    /// Platform timestamp of the message
    pub timestamp: String,
}

impl ThreadMessage {
    /// Create a new thread message
    pub fn new(
        author: impl Into<String>,
        text: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        ThreadMessage {
            author: author.into(),
            text: text.into(),
            timestamp: timestamp.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_result_creation() {
        let result = PostResult::new("1234567890.123456", "C123456", "1234567890.123456");
        assert_eq!(result.message_id, "1234567890.123456");
        assert_eq!(result.destination, "C123456");
        assert_eq!(result.timestamp, "1234567890.123456");
    }

    #[test]
    fn test_thread_message_serializes() {
        let msg = ThreadMessage::new("U123", "hello", "1.0");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"author": "U123", "text": "hello", "timestamp": "1.0"})
        );
    }
}
