//! Slack platform backend
//!
//! Implements the `Notifier` contract on top of three Slack Web API methods:
//! `chat.postMessage`, `conversations.replies` and `search.messages`.

mod chat;
mod client;
mod conversations;
mod convert;
mod platform_impl;
mod search;
mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::SlackClient;
pub use platform_impl::SlackNotifier;
pub use search::{compose_query, search_count, MAX_SEARCH_COUNT};
pub use types::*;
