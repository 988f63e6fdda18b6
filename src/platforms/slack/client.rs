use reqwest::Client;
use tracing::debug;

use crate::config::NotifyConfig;
use crate::error::{Error, ErrorCode, Result};

/// Slack Web API client
///
/// Holds only read-only state after construction, so a single client can be
/// shared freely between tasks.
pub struct SlackClient {
    /// HTTP client for REST API calls
    pub(crate) http_client: Client,
    /// Base URL for the Web API (e.g., "https://slack.com/api")
    api_base: String,
    /// Bot token sent as a bearer credential
    token: String,
}

impl SlackClient {
    /// Create a new Slack client from a configuration
    ///
    /// No request timeout is configured: each call is one unbounded round
    /// trip, and callers impose deadlines themselves. Idle connections are
    /// not kept, so every call opens its own connection.
    pub fn new(config: &NotifyConfig) -> Result<Self> {
        let http_client = Client::builder()
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| Error::new(ErrorCode::NetworkError, format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            api_base: config.api_base().to_string(),
            token: config.token().to_string(),
        })
    }

    /// Build the full URL for a Web API method
    ///
    /// # Arguments
    /// * `method` - The API method name (e.g., "chat.postMessage")
    pub fn api_url(&self, method: &str) -> String {
        let method = method.trim_start_matches('/');
        let base = self.api_base.trim_end_matches('/');
        format!("{base}/{method}")
    }

    /// Make an authenticated GET request with URL-encoded query parameters
    pub async fn get(&self, method: &str, query: &[(&str, &str)]) -> Result<reqwest::Response> {
        debug!(method, "GET Slack API");
        self.http_client
            .get(self.api_url(method))
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await
            .map_err(Error::request_failed)
    }

    /// Make an authenticated POST request with a JSON body
    pub async fn post<T: serde::Serialize>(&self, method: &str, body: &T) -> Result<reqwest::Response> {
        debug!(method, "POST Slack API");
        self.http_client
            .post(self.api_url(method))
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await
            .map_err(Error::request_failed)
    }

    /// Check the HTTP status and decode the JSON body
    ///
    /// A non-2xx status becomes an `HTTP error` carrying the status code and
    /// reason phrase. The `ok` flag inside the body is left to the caller.
    pub async fn handle_response<T: serde::de::DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            return Err(Error::http(status.as_u16(), status.canonical_reason()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| Error::request_failed(format!("invalid response body: {e}")))
    }
}
