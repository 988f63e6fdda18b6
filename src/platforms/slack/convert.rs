use crate::types::{ThreadMessage, UNKNOWN_AUTHOR};

use super::types::SlackMessage;

impl SlackMessage {
    /// Convert a thread reply; the author is the `user` field only
    pub fn into_reply(self) -> ThreadMessage {
        ThreadMessage {
            author: self.user.unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
            text: self.text.unwrap_or_default(),
            timestamp: self.ts.unwrap_or_default(),
        }
    }

    /// Convert a search match; bot posts carry `username` instead of `user`
    pub fn into_search_match(self) -> ThreadMessage {
        ThreadMessage {
            author: self
                .user
                .or(self.username)
                .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
            text: self.text.unwrap_or_default(),
            timestamp: self.ts.unwrap_or_default(),
        }
    }
}

/// Drop the thread parent and convert the remaining replies in order
pub fn replies_without_parent(messages: Vec<SlackMessage>) -> Vec<ThreadMessage> {
    messages
        .into_iter()
        .skip(1)
        .map(SlackMessage::into_reply)
        .collect()
}

/// Convert search matches, keeping at most `limit` in their original order
pub fn search_matches(matches: Vec<SlackMessage>, limit: usize) -> Vec<ThreadMessage> {
    matches
        .into_iter()
        .take(limit)
        .map(SlackMessage::into_search_match)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(user: Option<&str>, username: Option<&str>, text: &str, ts: &str) -> SlackMessage {
        SlackMessage {
            user: user.map(str::to_string),
            username: username.map(str::to_string),
            text: Some(text.to_string()),
            ts: Some(ts.to_string()),
        }
    }

    #[test]
    fn test_reply_defaults() {
        let reply = SlackMessage::default().into_reply();
        assert_eq!(reply, ThreadMessage::new("unknown", "", ""));
    }

    #[test]
    fn test_reply_ignores_username() {
        let reply = msg(None, Some("bot"), "hi", "1.0").into_reply();
        assert_eq!(reply.author, "unknown");
    }

    #[test]
    fn test_search_match_author_fallback() {
        assert_eq!(msg(Some("U1"), Some("bot"), "a", "1").into_search_match().author, "U1");
        assert_eq!(msg(None, Some("bot"), "a", "1").into_search_match().author, "bot");
        assert_eq!(msg(None, None, "a", "1").into_search_match().author, "unknown");
    }

    #[test]
    fn test_replies_without_parent() {
        let messages = vec![
            msg(Some("U123"), None, "Parent message", "1.1"),
            msg(Some("U456"), None, "First reply", "1.2"),
            msg(Some("U789"), None, "Second reply", "1.3"),
        ];
        let replies = replies_without_parent(messages);
        assert_eq!(replies.len(), 2);
        assert_eq!(replies[0], ThreadMessage::new("U456", "First reply", "1.2"));
        assert_eq!(replies[1], ThreadMessage::new("U789", "Second reply", "1.3"));
    }

    #[test]
    fn test_replies_parent_only_or_empty() {
        assert!(replies_without_parent(vec![msg(Some("U1"), None, "p", "1")]).is_empty());
        assert!(replies_without_parent(Vec::new()).is_empty());
    }

    #[test]
    fn test_search_matches_truncates_in_order() {
        let matches: Vec<SlackMessage> = (0..100)
            .map(|i| msg(Some(&format!("U{i}")), None, &format!("Message {i}"), "1"))
            .collect();
        let results = search_matches(matches, 10);
        assert_eq!(results.len(), 10);
        assert_eq!(results[0].author, "U0");
        assert_eq!(results[9].text, "Message 9");
    }
}
