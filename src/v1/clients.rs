use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::v1::client::UpdatedSince;
use crate::v1::LegacyClient;

#[derive(Debug, Clone, Default, Serialize)]
pub struct LegacyClientParams {
    pub name: Option<String>,
    pub currency: Option<String>,
    pub currency_symbol: Option<String>,
    pub active: Option<bool>,
    pub details: Option<String>,
    pub highrise_id: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LegacyContactParams {
    pub client_id: Option<u64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone_office: Option<String>,
    pub phone_mobile: Option<String>,
    pub fax: Option<String>,
}

impl LegacyClient {
    pub async fn list_clients(&self, updated_since: Option<DateTime<Utc>>) -> Result<Value> {
        self.fetch("/clients", &UpdatedSince { updated_since }).await
    }

    pub async fn get_client(&self, client_id: u64) -> Result<Value> {
        self.fetch(&format!("/clients/{}", client_id), &()).await
    }

    pub async fn create_client(&self, params: &LegacyClientParams) -> Result<Value> {
        self.write(Method::POST, "/clients", "client", params, &["name"]).await
    }

    pub async fn update_client(&self, client_id: u64, params: &LegacyClientParams) -> Result<Value> {
        self.write(Method::PUT, &format!("/clients/{}", client_id), "client", params, &[]).await
    }

    /// Flips the client between active and archived.
    pub async fn toggle_client(&self, client_id: u64) -> Result<Value> {
        self.act(Method::POST, &format!("/clients/{}/toggle", client_id), &[]).await
    }

    pub async fn delete_client(&self, client_id: u64) -> Result<Value> {
        self.act(Method::DELETE, &format!("/clients/{}", client_id), &[]).await
    }

    pub async fn list_contacts(&self, updated_since: Option<DateTime<Utc>>) -> Result<Value> {
        self.fetch("/contacts", &UpdatedSince { updated_since }).await
    }

    pub async fn list_client_contacts(&self, client_id: u64, updated_since: Option<DateTime<Utc>>) -> Result<Value> {
        self.fetch(&format!("/clients/{}/contacts", client_id), &UpdatedSince { updated_since }).await
    }

    pub async fn get_contact(&self, contact_id: u64) -> Result<Value> {
        self.fetch(&format!("/contacts/{}", contact_id), &()).await
    }

    pub async fn create_contact(&self, params: &LegacyContactParams) -> Result<Value> {
        self.write(Method::POST, "/contacts", "contact", params, &["client_id", "first_name", "last_name"]).await
    }

    pub async fn update_contact(&self, contact_id: u64, params: &LegacyContactParams) -> Result<Value> {
        self.write(Method::PUT, &format!("/contacts/{}", contact_id), "contact", params, &[]).await
    }

    pub async fn delete_contact(&self, contact_id: u64) -> Result<Value> {
        self.act(Method::DELETE, &format!("/contacts/{}", contact_id), &[]).await
    }
}
