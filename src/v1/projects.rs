//! Legacy projects and tasks.

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::params;
use crate::v1::client::UpdatedSince;
use crate::v1::LegacyClient;

#[derive(Debug, Clone, Default, Serialize)]
struct ProjectListQuery {
    client: Option<u64>,
    #[serde(serialize_with = "params::legacy_timestamp")]
    updated_since: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LegacyProjectParams {
    pub name: Option<String>,
    pub client_id: Option<u64>,
    pub active: Option<bool>,
    pub code: Option<String>,
    pub notes: Option<String>,
    pub billable: Option<bool>,
    /// `Project`, `Tasks`, `People` or `none`.
    pub bill_by: Option<String>,
    pub hourly_rate: Option<f64>,
    pub budget: Option<f64>,
    pub budget_by: Option<String>,
    pub estimate: Option<f64>,
    pub estimate_by: Option<String>,
    pub notify_when_over_budget: Option<bool>,
    pub over_budget_notification_percentage: Option<f64>,
    pub show_budget_to_all: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LegacyTaskParams {
    pub name: Option<String>,
    pub billable_by_default: Option<bool>,
    pub default_hourly_rate: Option<f64>,
    pub is_default: Option<bool>,
}

impl LegacyClient {
    pub async fn list_projects(&self, client_id: Option<u64>, updated_since: Option<DateTime<Utc>>) -> Result<Value> {
        self.fetch("/projects", &ProjectListQuery { client: client_id, updated_since }).await
    }

    pub async fn get_project(&self, project_id: u64) -> Result<Value> {
        self.fetch(&format!("/projects/{}", project_id), &()).await
    }

    pub async fn create_project(&self, params: &LegacyProjectParams) -> Result<Value> {
        self.write(Method::POST, "/projects", "project", params, &["name", "client_id"]).await
    }

    pub async fn update_project(&self, project_id: u64, params: &LegacyProjectParams) -> Result<Value> {
        self.write(Method::PUT, &format!("/projects/{}", project_id), "project", params, &[]).await
    }

    pub async fn toggle_project(&self, project_id: u64) -> Result<Value> {
        self.act(Method::PUT, &format!("/projects/{}/toggle", project_id), &[]).await
    }

    pub async fn delete_project(&self, project_id: u64) -> Result<Value> {
        self.act(Method::DELETE, &format!("/projects/{}", project_id), &[]).await
    }

    pub async fn list_tasks(&self, updated_since: Option<DateTime<Utc>>) -> Result<Value> {
        self.fetch("/tasks", &UpdatedSince { updated_since }).await
    }

    pub async fn get_task(&self, task_id: u64) -> Result<Value> {
        self.fetch(&format!("/tasks/{}", task_id), &()).await
    }

    pub async fn create_task(&self, params: &LegacyTaskParams) -> Result<Value> {
        self.write(Method::POST, "/tasks", "task", params, &["name"]).await
    }

    pub async fn update_task(&self, task_id: u64, params: &LegacyTaskParams) -> Result<Value> {
        self.write(Method::PUT, &format!("/tasks/{}", task_id), "task", params, &[]).await
    }

    /// Harvest archives tasks that have tracked time instead of deleting them.
    pub async fn archive_delete_task(&self, task_id: u64) -> Result<Value> {
        self.act(Method::DELETE, &format!("/tasks/{}", task_id), &[]).await
    }

    pub async fn reactivate_task(&self, task_id: u64) -> Result<Value> {
        self.act(Method::POST, &format!("/tasks/{}/activate", task_id), &[]).await
    }
}
