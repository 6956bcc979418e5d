#![allow(dead_code)]

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri};
use axum::Router;
use serde_json::Value;

use harvest_api::Config;

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
    pub body: Option<Value>,
    pub raw_body: Vec<u8>,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }
}

#[derive(Clone)]
pub struct Canned {
    pub status: StatusCode,
    pub headers: Vec<(&'static str, String)>,
    pub body: String,
}

impl Canned {
    pub fn json(status: StatusCode, body: Value) -> Self {
        Self { status, headers: vec![], body: body.to_string() }
    }

    pub fn raw(status: StatusCode, body: &str) -> Self {
        Self { status, headers: vec![], body: body.to_string() }
    }

    pub fn with_header(mut self, name: &'static str, value: &str) -> Self {
        self.headers.push((name, value.to_string()));
        self
    }
}

#[derive(Clone, Default)]
struct MockState {
    requests: Arc<Mutex<Vec<Recorded>>>,
    responses: Arc<Mutex<VecDeque<Canned>>>,
}

/// Records every request and answers with queued responses (`200 {}` once the queue is empty).
pub struct MockHarvest {
    pub base: String,
    state: MockState,
}

async fn record(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    Query(query): Query<Vec<(String, String)>>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, HeaderMap, String) {
    let parsed = serde_json::from_slice::<Value>(&body).ok();
    state.requests.lock().unwrap().push(Recorded {
        method,
        path: uri.path().to_string(),
        query,
        headers,
        body: parsed,
        raw_body: body.to_vec(),
    });
    let canned = state
        .responses
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| Canned::raw(StatusCode::OK, "{}"));
    let mut out = HeaderMap::new();
    out.insert(axum::http::header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    for (name, value) in canned.headers {
        out.insert(HeaderName::from_static(name), HeaderValue::from_str(&value).unwrap());
    }
    (canned.status, out, canned.body)
}

impl MockHarvest {
    pub async fn start() -> Self {
        let state = MockState::default();
        let app = Router::new().fallback(record).with_state(state.clone());
        let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
        Self { base: format!("http://{}", addr), state }
    }

    pub fn respond(&self, canned: Canned) {
        self.state.responses.lock().unwrap().push_back(canned);
    }

    pub fn respond_json(&self, status: StatusCode, body: Value) {
        self.respond(Canned::json(status, body));
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> Recorded {
        self.requests().pop().expect("no request recorded")
    }

    /// v2 config pointing at this server.
    pub fn config(&self) -> Config {
        Config {
            api_url: format!("{}/v2", self.base),
            access_token: Some("test-token".into()),
            account_id: Some("12345".into()),
            legacy_url: Some(self.base.clone()),
            legacy_email: Some("me@example.com".into()),
            legacy_password: Some("s3cret".into()),
            http_timeout_ms: 5_000,
            http_retry_backoff_ms: 1,
            ..Config::default()
        }
    }
}
