//! A fake Slack Web API for exercising the real HTTP path in tests

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::{ConnectInfo, State};
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Router;

use crate::config::NotifyConfig;

/// One request as seen by the fake server
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Client address of the connection that carried the request
    pub peer: SocketAddr,
    pub method: Method,
    pub path: String,
    /// Query string exactly as sent on the wire
    pub raw_query: String,
    /// Decoded query parameters
    pub query: Vec<(String, String)>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Option<serde_json::Value>,
}

impl RecordedRequest {
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

struct FakeState {
    status: StatusCode,
    body: String,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Serves one canned response for every request and records what it received
pub struct FakeSlack {
    api_base: String,
    state: Arc<FakeState>,
}

impl FakeSlack {
    /// Start a server answering `200 OK` with `body`
    pub async fn respond_with(body: serde_json::Value) -> Self {
        Self::start(StatusCode::OK, body.to_string()).await
    }

    /// Start a server answering with an arbitrary status and raw body
    pub async fn start(status: StatusCode, body: String) -> Self {
        let state = Arc::new(FakeState {
            status,
            body,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new().fallback(record).with_state(state.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
                .await
                .unwrap();
        });

        FakeSlack {
            api_base: format!("http://{addr}/api"),
            state,
        }
    }

    /// Configuration pointing at this server
    pub fn config(&self) -> NotifyConfig {
        NotifyConfig::new("xoxb-test")
            .with_default_destination("#default")
            .with_api_base(&self.api_base)
            .unwrap()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests().pop().expect("no request reached the fake server")
    }
}

/// An API base on which nothing is listening
pub async fn unreachable_api_base() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api")
}

async fn record(
    State(state): State<Arc<FakeState>>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    let raw_query = uri.query().unwrap_or_default().to_string();

    state.requests.lock().unwrap().push(RecordedRequest {
        peer,
        method,
        path: uri.path().to_string(),
        query: url::form_urlencoded::parse(raw_query.as_bytes())
            .into_owned()
            .collect(),
        raw_query,
        authorization: header_value(header::AUTHORIZATION),
        content_type: header_value(header::CONTENT_TYPE),
        body: serde_json::from_slice(&body).ok(),
    });

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
}
