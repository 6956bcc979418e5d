use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::config::Config;
use crate::error::{HarvestError, Result};
use crate::http::Transport;
use crate::params;

const ACCOUNT_HEADER: &str = "harvest-account-id";

#[derive(Clone)]
pub struct HarvestClient {
    transport: Transport,
}

impl HarvestClient {
    pub fn new(access_token: &str, account_id: &str) -> Result<Self> {
        let cfg = Config {
            access_token: Some(access_token.to_string()),
            account_id: Some(account_id.to_string()),
            ..Config::default()
        };
        Self::from_config(&cfg)
    }

    pub fn from_config(cfg: &Config) -> Result<Self> {
        let token = cfg
            .access_token
            .as_deref()
            .ok_or_else(|| HarvestError::Configuration("HARVEST_ACCESS_TOKEN not set".into()))?;
        let account_id = cfg
            .account_id
            .as_deref()
            .ok_or_else(|| HarvestError::Configuration("HARVEST_ACCOUNT_ID not set".into()))?;

        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| HarvestError::Configuration("access token is not a valid header value".into()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            HeaderName::from_static(ACCOUNT_HEADER),
            HeaderValue::from_str(account_id)
                .map_err(|_| HarvestError::Configuration("account id is not a valid header value".into()))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let transport = Transport::new(cfg.api_url.clone(), headers, cfg)?;
        Ok(Self { transport })
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    pub(crate) async fn fetch(&self, path: &str) -> Result<Value> {
        self.transport.send(Method::GET, path, &[], None).await
    }

    pub(crate) async fn fetch_with<Q: Serialize + ?Sized>(&self, path: &str, filter: &Q) -> Result<Value> {
        let query = params::query(filter)?;
        self.transport.send(Method::GET, path, &query, None).await
    }

    pub(crate) async fn create<B: Serialize + ?Sized>(&self, path: &str, params: &B, required: &[&str]) -> Result<Value> {
        let body = params::body(params)?;
        params::require(&body, required)?;
        self.transport.send(Method::POST, path, &[], Some(&body)).await
    }

    pub(crate) async fn update<B: Serialize + ?Sized>(&self, path: &str, params: &B) -> Result<Value> {
        let body = params::body(params)?;
        if body.as_object().map(|o| o.is_empty()).unwrap_or(true) {
            return Err(HarvestError::InvalidInput(format!("nothing to update for {}", path)));
        }
        self.transport.send(Method::PATCH, path, &[], Some(&body)).await
    }

    pub(crate) async fn patch_empty(&self, path: &str) -> Result<Value> {
        self.transport.send(Method::PATCH, path, &[], None).await
    }

    pub(crate) async fn remove(&self, path: &str) -> Result<Value> {
        self.transport.send(Method::DELETE, path, &[], None).await
    }

    /// Walks `next_page` from the first page and concatenates each page's
    /// `collection` array (e.g. `"time_entries"`). Any `page` in `filter` is ignored.
    pub async fn fetch_all_pages<Q: Serialize + ?Sized>(&self, path: &str, collection: &str, filter: &Q) -> Result<Vec<Value>> {
        let base_query: Vec<(String, String)> = params::query(filter)?.into_iter().filter(|(k, _)| k != "page").collect();
        let mut items = Vec::new();
        let mut page: u64 = 1;
        loop {
            let mut query = base_query.clone();
            query.push(("page".to_string(), page.to_string()));
            let body = self.transport.send(Method::GET, path, &query, None).await?;
            let batch = body.get(collection).and_then(|v| v.as_array()).ok_or_else(|| {
                HarvestError::UnexpectedResponse(format!("page {} of {} has no `{}` array", page, path, collection))
            })?;
            items.extend(batch.iter().cloned());
            match body.get("next_page").and_then(|v| v.as_u64()) {
                Some(next) if next > page => page = next,
                _ => break,
            }
        }
        tracing::debug!(target = "harvest.v2", path, collection, pages = page, records = items.len(), "fetched all pages");
        Ok(items)
    }
}
