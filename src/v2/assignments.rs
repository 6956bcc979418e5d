//! Project user assignments and project task assignments.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::params::ListOptions;
use crate::v2::HarvestClient;

#[derive(Debug, Clone, Default, Serialize)]
pub struct AssignmentFilter {
    pub is_active: Option<bool>,
    pub updated_since: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub paging: ListOptions,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UserAssignmentParams {
    pub user_id: Option<u64>,
    pub is_active: Option<bool>,
    pub is_project_manager: Option<bool>,
    pub use_default_rates: Option<bool>,
    pub hourly_rate: Option<f64>,
    pub budget: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskAssignmentParams {
    pub task_id: Option<u64>,
    pub is_active: Option<bool>,
    pub billable: Option<bool>,
    pub hourly_rate: Option<f64>,
    pub budget: Option<f64>,
}

impl HarvestClient {
    /// User assignments across every project.
    pub async fn list_user_assignments(&self, filter: &AssignmentFilter) -> Result<Value> {
        self.fetch_with("/user_assignments", filter).await
    }

    pub async fn list_project_user_assignments(&self, project_id: u64, filter: &AssignmentFilter) -> Result<Value> {
        self.fetch_with(&format!("/projects/{}/user_assignments", project_id), filter).await
    }

    pub async fn get_user_assignment(&self, project_id: u64, assignment_id: u64) -> Result<Value> {
        self.fetch(&format!("/projects/{}/user_assignments/{}", project_id, assignment_id)).await
    }

    pub async fn create_user_assignment(&self, project_id: u64, params: &UserAssignmentParams) -> Result<Value> {
        self.create(&format!("/projects/{}/user_assignments", project_id), params, &["user_id"]).await
    }

    pub async fn update_user_assignment(&self, project_id: u64, assignment_id: u64, params: &UserAssignmentParams) -> Result<Value> {
        self.update(&format!("/projects/{}/user_assignments/{}", project_id, assignment_id), params).await
    }

    pub async fn delete_user_assignment(&self, project_id: u64, assignment_id: u64) -> Result<Value> {
        self.remove(&format!("/projects/{}/user_assignments/{}", project_id, assignment_id)).await
    }

    /// Task assignments across every project.
    pub async fn list_task_assignments(&self, filter: &AssignmentFilter) -> Result<Value> {
        self.fetch_with("/task_assignments", filter).await
    }

    pub async fn list_project_task_assignments(&self, project_id: u64, filter: &AssignmentFilter) -> Result<Value> {
        self.fetch_with(&format!("/projects/{}/task_assignments", project_id), filter).await
    }

    pub async fn get_task_assignment(&self, project_id: u64, assignment_id: u64) -> Result<Value> {
        self.fetch(&format!("/projects/{}/task_assignments/{}", project_id, assignment_id)).await
    }

    pub async fn create_task_assignment(&self, project_id: u64, params: &TaskAssignmentParams) -> Result<Value> {
        self.create(&format!("/projects/{}/task_assignments", project_id), params, &["task_id"]).await
    }

    pub async fn update_task_assignment(&self, project_id: u64, assignment_id: u64, params: &TaskAssignmentParams) -> Result<Value> {
        self.update(&format!("/projects/{}/task_assignments/{}", project_id, assignment_id), params).await
    }

    pub async fn delete_task_assignment(&self, project_id: u64, assignment_id: u64) -> Result<Value> {
        self.remove(&format!("/projects/{}/task_assignments/{}", project_id, assignment_id)).await
    }
}
