//! Backend configuration: credential, default destination and API location

use std::fmt;

use url::Url;

use crate::error::{Error, Result};

/// Destination used when neither the caller nor the configuration names one
pub const DEFAULT_DESTINATION: &str = "#herd-feed";

/// Base URL of the Slack Web API
pub const DEFAULT_API_BASE: &str = "https://slack.com/api";

/// Environment variable holding the bot token
pub const ENV_TOKEN: &str = "SLACK_BOT_TOKEN";
/// Environment variable holding the default destination
pub const ENV_DEFAULT_DESTINATION: &str = "SLACK_DEFAULT_CHANNEL";
/// Environment variable overriding the API base URL
pub const ENV_API_BASE: &str = "SLACK_API_BASE";

/// Configuration for a notifier backend
///
/// Immutable once handed to a backend. The token is redacted from `Debug`
/// output so the configuration can be logged safely.
#[derive(Clone)]
pub struct NotifyConfig {
    token: String,
    default_destination: String,
    api_base: String,
}

impl NotifyConfig {
    /// Create a configuration with the default destination and API base
    pub fn new(token: impl Into<String>) -> Self {
        NotifyConfig {
            token: token.into(),
            default_destination: DEFAULT_DESTINATION.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Set the destination used when a call does not name one
    pub fn with_default_destination(mut self, destination: impl Into<String>) -> Self {
        self.default_destination = destination.into();
        self
    }

    /// Point the backend at a different API base (e.g., a proxy or a test server)
    pub fn with_api_base(mut self, api_base: &str) -> Result<Self> {
        let url = Url::parse(api_base)
            .map_err(|e| Error::invalid_argument(format!("Invalid URL: {e}")))?;
        if url.cannot_be_a_base() {
            return Err(Error::invalid_argument(format!("Invalid URL: {api_base}")));
        }
        self.api_base = url.to_string();
        Ok(self)
    }

    /// Build a configuration from `SLACK_BOT_TOKEN`, `SLACK_DEFAULT_CHANNEL`
    /// and `SLACK_API_BASE`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(ENV_TOKEN)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::invalid_argument(format!("{ENV_TOKEN} is not set")))?;

        let mut config = NotifyConfig::new(token);
        if let Some(destination) = lookup(ENV_DEFAULT_DESTINATION).filter(|d| !d.is_empty()) {
            config = config.with_default_destination(destination);
        }
        if let Some(api_base) = lookup(ENV_API_BASE).filter(|b| !b.is_empty()) {
            config = config.with_api_base(&api_base)?;
        }
        Ok(config)
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn default_destination(&self) -> &str {
        &self.default_destination
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Resolve `explicit ?? default`. An empty explicit destination counts as unset.
    pub fn resolve_destination<'a>(&'a self, explicit: Option<&'a str>) -> &'a str {
        match explicit {
            Some(destination) if !destination.is_empty() => destination,
            _ => &self.default_destination,
        }
    }
}

impl fmt::Debug for NotifyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotifyConfig")
            .field("token", &"<redacted>")
            .field("default_destination", &self.default_destination)
            .field("api_base", &self.api_base)
            .finish()
    }
}
