use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::params::ListOptions;
use crate::v2::HarvestClient;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ClientFilter {
    pub is_active: Option<bool>,
    pub updated_since: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub paging: ListOptions,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ClientParams {
    pub name: Option<String>,
    pub is_active: Option<bool>,
    pub address: Option<String>,
    /// ISO 4217 code, e.g. `EUR`.
    pub currency: Option<String>,
}

impl HarvestClient {
    pub async fn list_clients(&self, filter: &ClientFilter) -> Result<Value> {
        self.fetch_with("/clients", filter).await
    }

    pub async fn all_clients(&self, filter: &ClientFilter) -> Result<Vec<Value>> {
        self.fetch_all_pages("/clients", "clients", filter).await
    }

    pub async fn get_client(&self, client_id: u64) -> Result<Value> {
        self.fetch(&format!("/clients/{}", client_id)).await
    }

    pub async fn create_client(&self, params: &ClientParams) -> Result<Value> {
        self.create("/clients", params, &["name"]).await
    }

    pub async fn update_client(&self, client_id: u64, params: &ClientParams) -> Result<Value> {
        self.update(&format!("/clients/{}", client_id), params).await
    }

    pub async fn delete_client(&self, client_id: u64) -> Result<Value> {
        self.remove(&format!("/clients/{}", client_id)).await
    }
}
