use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::params::ListOptions;
use crate::v2::HarvestClient;

#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskFilter {
    pub is_active: Option<bool>,
    pub updated_since: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub paging: ListOptions,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskParams {
    pub name: Option<String>,
    pub billable_by_default: Option<bool>,
    pub default_hourly_rate: Option<f64>,
    /// Added to new projects automatically.
    pub is_default: Option<bool>,
    pub is_active: Option<bool>,
}

impl HarvestClient {
    pub async fn list_tasks(&self, filter: &TaskFilter) -> Result<Value> {
        self.fetch_with("/tasks", filter).await
    }

    pub async fn all_tasks(&self, filter: &TaskFilter) -> Result<Vec<Value>> {
        self.fetch_all_pages("/tasks", "tasks", filter).await
    }

    pub async fn get_task(&self, task_id: u64) -> Result<Value> {
        self.fetch(&format!("/tasks/{}", task_id)).await
    }

    pub async fn create_task(&self, params: &TaskParams) -> Result<Value> {
        self.create("/tasks", params, &["name"]).await
    }

    pub async fn update_task(&self, task_id: u64, params: &TaskParams) -> Result<Value> {
        self.update(&format!("/tasks/{}", task_id), params).await
    }

    pub async fn delete_task(&self, task_id: u64) -> Result<Value> {
        self.remove(&format!("/tasks/{}", task_id)).await
    }
}
