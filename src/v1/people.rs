use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::v1::LegacyClient;

#[derive(Debug, Clone, Default, Serialize)]
pub struct LegacyUserParams {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub is_admin: Option<bool>,
    pub timezone: Option<String>,
    pub is_contractor: Option<bool>,
    pub telephone: Option<String>,
    pub is_active: Option<bool>,
    pub has_access_to_all_future_projects: Option<bool>,
    pub default_hourly_rate: Option<f64>,
    pub department: Option<String>,
    pub cost_rate: Option<f64>,
}

impl LegacyClient {
    pub async fn list_users(&self) -> Result<Value> {
        self.fetch("/people", &()).await
    }

    pub async fn get_user(&self, user_id: u64) -> Result<Value> {
        self.fetch(&format!("/people/{}", user_id), &()).await
    }

    pub async fn create_user(&self, params: &LegacyUserParams) -> Result<Value> {
        self.write(Method::POST, "/people", "user", params, &["email", "first_name", "last_name"]).await
    }

    pub async fn update_user(&self, user_id: u64, params: &LegacyUserParams) -> Result<Value> {
        self.write(Method::PUT, &format!("/people/{}", user_id), "user", params, &[]).await
    }

    pub async fn delete_user(&self, user_id: u64) -> Result<Value> {
        self.act(Method::DELETE, &format!("/people/{}", user_id), &[]).await
    }

    /// Activates or deactivates the user.
    pub async fn toggle_user(&self, user_id: u64) -> Result<Value> {
        self.act(Method::POST, &format!("/people/{}/toggle", user_id), &[]).await
    }
}
