use std::time::Duration;

use reqwest::header::{HeaderMap, LOCATION, RETRY_AFTER};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use tracing::Level;

use crate::config::Config;
use crate::error::{HarvestError, Result};

const MAX_RETRY_AFTER_SECS: u64 = 60;
const MAX_BACKOFF_MS: u64 = 30_000;

#[derive(Clone, Debug)]
pub(crate) struct RetryPolicy {
    pub max_retries: u32,
    pub backoff_ms: u64,
}

/// Shared dispatch for the v1 and v2 clients: auth lives in the default headers.
#[derive(Clone)]
pub(crate) struct Transport {
    http: Client,
    base_url: String,
    retry: RetryPolicy,
}

impl Transport {
    pub fn new(base_url: String, headers: HeaderMap, cfg: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_millis(cfg.http_timeout_ms))
            .connect_timeout(Duration::from_millis(cfg.http_timeout_ms.min(10_000)))
            .user_agent(cfg.user_agent.as_str())
            .default_headers(headers)
            .build()?;
        Ok(Self {
            http,
            base_url,
            retry: RetryPolicy { max_retries: cfg.http_max_retries, backoff_ms: cfg.http_retry_backoff_ms },
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    fn should_log_full() -> bool {
        std::env::var("HARVEST_LOG_FULL").map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
    }

    fn truncate_body(body: &str) -> (String, bool) {
        if Self::should_log_full() {
            return (body.to_string(), false);
        }
        const LIMIT: usize = 1_000;
        if body.chars().count() > LIMIT {
            let head: String = body.chars().take(LIMIT).collect();
            (format!("{}…<truncated>", head), true)
        } else {
            (body.to_string(), false)
        }
    }

    /// Harvest answers errors as `{error, error_description}` (auth) or `{message}` (validation).
    pub(crate) fn parse_error_body(body: &str) -> Vec<String> {
        let mut messages = Vec::new();
        if let Ok(json) = serde_json::from_str::<Value>(body) {
            for key in ["error_description", "message", "error"] {
                if let Some(m) = json.get(key).and_then(|m| m.as_str()) {
                    messages.push(m.to_string());
                }
            }
            if let Some(errors) = json.get("errors").and_then(|e| e.as_array()) {
                messages.extend(errors.iter().filter_map(|e| e.as_str().map(str::to_string)));
            }
        }
        messages
    }

    fn retryable(status: StatusCode) -> bool {
        status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
    }

    fn delay(&self, attempt: u32, retry_after: Option<u64>) -> Duration {
        match retry_after {
            Some(secs) => Duration::from_secs(secs.min(MAX_RETRY_AFTER_SECS)),
            None => {
                let ms = self.retry.backoff_ms.saturating_mul(1u64 << attempt.min(16));
                Duration::from_millis(ms.min(MAX_BACKOFF_MS))
            }
        }
    }

    /// Runs the request, retrying per policy, and returns the first 2xx response.
    async fn execute<F>(&self, method: Method, path: &str, build: F) -> Result<Response>
    where
        F: Fn(RequestBuilder) -> Result<RequestBuilder>,
    {
        let url = self.url(path);
        let req_id = nanoid::nanoid!(8);
        let mut attempt: u32 = 0;
        loop {
            let builder = build(self.http.request(method.clone(), &url))?;
            tracing::event!(
                Level::DEBUG,
                target = "harvest.http",
                req.id = %req_id,
                http.method = %method,
                http.url = %url,
                attempt = attempt + 1,
                "sending request"
            );
            let response = match builder.send().await {
                Ok(r) => r,
                Err(e) => {
                    if (e.is_connect() || e.is_timeout()) && attempt < self.retry.max_retries {
                        let wait = self.delay(attempt, None);
                        tracing::warn!(target = "harvest.http", req.id = %req_id, error = %e, attempt = attempt + 1, backoff_ms = wait.as_millis() as u64, "request error; retrying");
                        tokio::time::sleep(wait).await;
                        attempt += 1;
                        continue;
                    }
                    return Err(e.into());
                }
            };

            let status = response.status();
            if status.is_success() {
                tracing::debug!(target = "harvest.http", req.id = %req_id, http.status = %status, "request ok");
                return Ok(response);
            }

            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<u64>().ok());
            let body = response.text().await.unwrap_or_default();

            if Self::retryable(status) && attempt < self.retry.max_retries {
                let wait = self.delay(attempt, retry_after);
                tracing::warn!(target = "harvest.http", req.id = %req_id, http.status = %status, attempt = attempt + 1, backoff_ms = wait.as_millis() as u64, "transient response; retrying");
                tokio::time::sleep(wait).await;
                attempt += 1;
                continue;
            }

            let messages = Self::parse_error_body(&body);
            let (preview, truncated) = Self::truncate_body(&body);
            tracing::event!(
                Level::ERROR,
                target = "harvest.http",
                req.id = %req_id,
                http.method = %method,
                http.url = %url,
                http.status = %status,
                error.messages = ?messages,
                body.truncated = truncated,
                body.preview = preview,
                "harvest request failed"
            );
            return Err(HarvestError::Status {
                status: status.as_u16(),
                message: if messages.is_empty() { None } else { Some(messages.join("; ")) },
            });
        }
    }

    /// JSON in, JSON out. Empty 2xx bodies decode to `Null`, or to the `Location` of a created resource.
    pub async fn send(&self, method: Method, path: &str, query: &[(String, String)], body: Option<&Value>) -> Result<Value> {
        let response = self
            .execute(method, path, |mut rb| {
                if !query.is_empty() {
                    rb = rb.query(query);
                }
                if let Some(b) = body {
                    rb = rb.json(b);
                }
                Ok(rb)
            })
            .await?;
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(location.map(|l| serde_json::json!({ "location": l })).unwrap_or(Value::Null));
        }
        match serde_json::from_str::<Value>(&text) {
            Ok(json) => Ok(json),
            Err(e) => {
                let (preview, _) = Self::truncate_body(&text);
                tracing::error!(target = "harvest.http", error = %e, body.preview = preview, "invalid JSON from harvest");
                Err(e.into())
            }
        }
    }

    pub async fn send_bytes(&self, method: Method, path: &str, query: &[(String, String)]) -> Result<Vec<u8>> {
        let response = self
            .execute(method, path, |rb| Ok(if query.is_empty() { rb } else { rb.query(query) }))
            .await?;
        Ok(response.bytes().await?.to_vec())
    }

    pub async fn send_multipart(&self, method: Method, path: &str, field: &str, file_name: &str, data: &[u8]) -> Result<Value> {
        let response = self
            .execute(method, path, |rb| {
                let part = reqwest::multipart::Part::bytes(data.to_vec()).file_name(file_name.to_string());
                Ok(rb.multipart(reqwest::multipart::Form::new().part(field.to_string(), part)))
            })
            .await?;
        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_cover_auth_and_validation_shapes() {
        let auth = r#"{"error":"invalid_token","error_description":"The access token provided is expired"}"#;
        assert_eq!(
            Transport::parse_error_body(auth),
            vec!["The access token provided is expired".to_string(), "invalid_token".to_string()]
        );
        let validation = r#"{"message":"Name has already been taken"}"#;
        assert_eq!(Transport::parse_error_body(validation), vec!["Name has already been taken".to_string()]);
        assert!(Transport::parse_error_body("<html>oops</html>").is_empty());
    }

    #[test]
    fn url_join_tolerates_slashes() {
        let cfg = Config::default();
        let t = Transport::new("http://localhost:1/v2/".into(), HeaderMap::new(), &cfg).unwrap();
        assert_eq!(t.url("/clients"), "http://localhost:1/v2/clients");
        assert_eq!(t.url("clients/5"), "http://localhost:1/v2/clients/5");
    }

    #[test]
    fn backoff_grows_and_honors_retry_after() {
        let cfg = Config { http_retry_backoff_ms: 100, ..Config::default() };
        let t = Transport::new("http://localhost:1".into(), HeaderMap::new(), &cfg).unwrap();
        assert_eq!(t.delay(0, None), Duration::from_millis(100));
        assert_eq!(t.delay(2, None), Duration::from_millis(400));
        assert_eq!(t.delay(0, Some(3)), Duration::from_secs(3));
        assert_eq!(t.delay(0, Some(3600)), Duration::from_secs(MAX_RETRY_AFTER_SECS));
    }
}
