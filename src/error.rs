//! Error handling for libnotifier
//!
//! Write operations (`post`, `post_thread`) surface failures through this
//! type. Read operations never return it; they degrade to an empty result.

use std::fmt;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Classification of a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Generic/unknown error
    Unknown,
    /// Invalid argument or configuration provided
    InvalidArgument,
    /// Transport-level failure: connection, protocol or non-2xx status
    NetworkError,
    /// The platform completed the call but reported a logical failure
    ApiError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Unknown => "Unknown error",
            ErrorCode::InvalidArgument => "Invalid argument",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::ApiError => "API error",
        }
    }
}

/// Library error type
#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    /// Platform-specific error code (e.g., Slack's "invalid_auth")
    pub(crate) platform_error: Option<String>,
    /// HTTP status code if this error came from an HTTP response
    pub(crate) http_status: Option<u16>,
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Error {
            code,
            message: message.into(),
            platform_error: None,
            http_status: None,
        }
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::new(ErrorCode::InvalidArgument, msg)
    }

    /// A transport failure that produced no HTTP response
    pub fn request_failed(detail: impl fmt::Display) -> Self {
        Error::new(ErrorCode::NetworkError, format!("Request failed: {detail}"))
    }

    /// A transport failure with a non-2xx HTTP response
    pub fn http(status: u16, reason: Option<&str>) -> Self {
        let message = match reason {
            Some(reason) => format!("HTTP error: {status} {reason}"),
            None => format!("HTTP error: {status}"),
        };
        Error::new(ErrorCode::NetworkError, message).with_http_status(status)
    }

    /// The platform rejected the call (`ok: false`)
    pub fn api(platform_error: Option<String>) -> Self {
        let platform_error = platform_error.unwrap_or_else(|| "unknown error".to_string());
        Error::new(
            ErrorCode::ApiError,
            format!("Slack API error: {platform_error}"),
        )
        .with_platform_error(platform_error)
    }

    /// Add the platform error code (builder pattern)
    pub fn with_platform_error(mut self, error: String) -> Self {
        self.platform_error = Some(error);
        self
    }

    /// Add HTTP status code (builder pattern)
    pub fn with_http_status(mut self, status: u16) -> Self {
        self.http_status = Some(status);
        self
    }

    /// Get the platform error code if available
    pub fn platform_error(&self) -> Option<&str> {
        self.platform_error.as_deref()
    }

    /// Get the HTTP status code if available
    pub fn http_status(&self) -> Option<u16> {
        self.http_status
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for Error {}
