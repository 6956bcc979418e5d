use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::config::Config;
use crate::error::{HarvestError, Result};
use crate::http::Transport;
use crate::params;

#[derive(Clone)]
pub struct LegacyClient {
    transport: Transport,
}

impl LegacyClient {
    pub fn new(account: &str, email: &str, password: &str) -> Result<Self> {
        let cfg = Config {
            legacy_account: Some(account.to_string()),
            legacy_email: Some(email.to_string()),
            legacy_password: Some(password.to_string()),
            ..Config::default()
        };
        Self::from_config(&cfg)
    }

    pub fn from_config(cfg: &Config) -> Result<Self> {
        let base_url = cfg
            .legacy_base_url()
            .ok_or_else(|| HarvestError::Configuration("HARVEST_LEGACY_ACCOUNT not set".into()))?;
        let email = cfg
            .legacy_email
            .as_deref()
            .ok_or_else(|| HarvestError::Configuration("HARVEST_EMAIL not set".into()))?;
        let password = cfg
            .legacy_password
            .as_deref()
            .ok_or_else(|| HarvestError::Configuration("HARVEST_PASSWORD not set".into()))?;

        let secret = STANDARD.encode(format!("{}:{}", email, password));
        let mut auth = HeaderValue::from_str(&format!("Basic {}", secret))
            .map_err(|_| HarvestError::Configuration("credentials are not a valid header value".into()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let transport = Transport::new(base_url, headers, cfg)?;
        Ok(Self { transport })
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    pub(crate) async fn fetch<Q: Serialize + ?Sized>(&self, path: &str, filter: &Q) -> Result<Value> {
        let query = params::query(filter)?;
        self.transport.send(Method::GET, path, &query, None).await
    }

    pub(crate) async fn fetch_bytes(&self, path: &str) -> Result<Vec<u8>> {
        self.transport.send_bytes(Method::GET, path, &[]).await
    }

    /// POST/PUT a `{root: params}` body after checking required fields.
    pub(crate) async fn write<B: Serialize + ?Sized>(&self, method: Method, path: &str, root: &str, params: &B, required: &[&str]) -> Result<Value> {
        let body = params::wrapped(root, params)?;
        params::require(&body[root], required)?;
        if body[root].as_object().map(|o| o.is_empty()).unwrap_or(true) {
            return Err(HarvestError::InvalidInput(format!("no {} fields given for {}", root, path)));
        }
        self.transport.send(method, path, &[], Some(&body)).await
    }

    /// Flat body variant used by the timesheet endpoints.
    pub(crate) async fn write_flat<B: Serialize + ?Sized>(&self, path: &str, params: &B, required: &[&str], query: &[(String, String)]) -> Result<Value> {
        let body = params::body(params)?;
        params::require(&body, required)?;
        if body.as_object().map(|o| o.is_empty()).unwrap_or(true) {
            return Err(HarvestError::InvalidInput(format!("no fields given for {}", path)));
        }
        self.transport.send(Method::POST, path, query, Some(&body)).await
    }

    /// Body-less action such as `toggle` or `activate`.
    pub(crate) async fn act(&self, method: Method, path: &str, query: &[(String, String)]) -> Result<Value> {
        self.transport.send(method, path, query, None).await
    }

    pub(crate) async fn upload(&self, path: &str, field: &str, file_name: &str, data: &[u8]) -> Result<Value> {
        self.transport.send_multipart(Method::POST, path, field, file_name, data).await
    }
}

/// `?updated_since=` filter shared by the legacy list endpoints.
#[derive(Debug, Clone, Default, Serialize)]
pub(crate) struct UpdatedSince {
    #[serde(serialize_with = "params::legacy_timestamp")]
    pub updated_since: Option<DateTime<Utc>>,
}

/// `?of_user=` lets admins act on another user's timesheet.
pub(crate) fn of_user_query(of_user: Option<u64>) -> Vec<(String, String)> {
    of_user.map(|id| vec![("of_user".to_string(), id.to_string())]).unwrap_or_default()
}
