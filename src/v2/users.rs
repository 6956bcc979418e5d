use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::params::ListOptions;
use crate::v2::HarvestClient;

#[derive(Debug, Clone, Default, Serialize)]
pub struct UserFilter {
    pub is_active: Option<bool>,
    pub updated_since: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub paging: ListOptions,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UserParams {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub telephone: Option<String>,
    pub timezone: Option<String>,
    pub has_access_to_all_future_projects: Option<bool>,
    pub is_contractor: Option<bool>,
    pub is_active: Option<bool>,
    /// Seconds per week.
    pub weekly_capacity: Option<u32>,
    pub default_hourly_rate: Option<f64>,
    pub cost_rate: Option<f64>,
    /// Role names, replacing the current set.
    pub roles: Option<Vec<String>>,
    /// `administrator`, `manager` or `member`.
    pub access_roles: Option<Vec<String>>,
}

impl HarvestClient {
    /// The user owning the access token.
    pub async fn me(&self) -> Result<Value> {
        self.fetch("/users/me").await
    }

    pub async fn list_users(&self, filter: &UserFilter) -> Result<Value> {
        self.fetch_with("/users", filter).await
    }

    pub async fn all_users(&self, filter: &UserFilter) -> Result<Vec<Value>> {
        self.fetch_all_pages("/users", "users", filter).await
    }

    pub async fn get_user(&self, user_id: u64) -> Result<Value> {
        self.fetch(&format!("/users/{}", user_id)).await
    }

    pub async fn create_user(&self, params: &UserParams) -> Result<Value> {
        self.create("/users", params, &["first_name", "last_name", "email"]).await
    }

    pub async fn update_user(&self, user_id: u64, params: &UserParams) -> Result<Value> {
        self.update(&format!("/users/{}", user_id), params).await
    }

    pub async fn delete_user(&self, user_id: u64) -> Result<Value> {
        self.remove(&format!("/users/{}", user_id)).await
    }

    pub async fn user_project_assignments(&self, user_id: u64, paging: &ListOptions) -> Result<Value> {
        self.fetch_with(&format!("/users/{}/project_assignments", user_id), paging).await
    }

    pub async fn my_project_assignments(&self, paging: &ListOptions) -> Result<Value> {
        self.fetch_with("/users/me/project_assignments", paging).await
    }
}
