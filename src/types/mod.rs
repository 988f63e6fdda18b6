//! Core types for libnotifier
//!
//! This module contains platform-agnostic types shared by every notifier backend.

pub mod message;
pub mod options;

// Re-export for convenience
pub use message::{PostResult, ThreadMessage, UNKNOWN_AUTHOR};
pub use options::{PostOptions, SearchOptions, ThreadOptions, DEFAULT_SEARCH_LIMIT};
