use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::params::ListOptions;
use crate::v2::HarvestClient;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ContactFilter {
    pub client_id: Option<u64>,
    pub updated_since: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub paging: ListOptions,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ContactParams {
    pub client_id: Option<u64>,
    pub title: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_office: Option<String>,
    pub phone_mobile: Option<String>,
    pub fax: Option<String>,
}

impl HarvestClient {
    pub async fn list_contacts(&self, filter: &ContactFilter) -> Result<Value> {
        self.fetch_with("/contacts", filter).await
    }

    pub async fn all_contacts(&self, filter: &ContactFilter) -> Result<Vec<Value>> {
        self.fetch_all_pages("/contacts", "contacts", filter).await
    }

    pub async fn get_contact(&self, contact_id: u64) -> Result<Value> {
        self.fetch(&format!("/contacts/{}", contact_id)).await
    }

    pub async fn create_contact(&self, params: &ContactParams) -> Result<Value> {
        self.create("/contacts", params, &["client_id", "first_name"]).await
    }

    pub async fn update_contact(&self, contact_id: u64, params: &ContactParams) -> Result<Value> {
        self.update(&format!("/contacts/{}", contact_id), params).await
    }

    pub async fn delete_contact(&self, contact_id: u64) -> Result<Value> {
        self.remove(&format!("/contacts/{}", contact_id)).await
    }
}
