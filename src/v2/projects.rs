use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::params::ListOptions;
use crate::v2::HarvestClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BillBy {
    Project,
    Tasks,
    People,
    #[serde(rename = "none")]
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetBy {
    Project,
    ProjectCost,
    Task,
    TaskFees,
    Person,
    None,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectFilter {
    pub is_active: Option<bool>,
    pub client_id: Option<u64>,
    pub updated_since: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub paging: ListOptions,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectParams {
    pub client_id: Option<u64>,
    pub name: Option<String>,
    pub code: Option<String>,
    pub is_active: Option<bool>,
    pub is_billable: Option<bool>,
    pub is_fixed_fee: Option<bool>,
    pub bill_by: Option<BillBy>,
    pub hourly_rate: Option<f64>,
    pub budget_by: Option<BudgetBy>,
    pub budget: Option<f64>,
    pub budget_is_monthly: Option<bool>,
    pub notify_when_over_budget: Option<bool>,
    pub over_budget_notification_percentage: Option<f64>,
    pub show_budget_to_all: Option<bool>,
    pub cost_budget: Option<f64>,
    pub cost_budget_include_expenses: Option<bool>,
    pub fee: Option<f64>,
    pub notes: Option<String>,
    pub starts_on: Option<NaiveDate>,
    pub ends_on: Option<NaiveDate>,
}

impl HarvestClient {
    pub async fn list_projects(&self, filter: &ProjectFilter) -> Result<Value> {
        self.fetch_with("/projects", filter).await
    }

    pub async fn all_projects(&self, filter: &ProjectFilter) -> Result<Vec<Value>> {
        self.fetch_all_pages("/projects", "projects", filter).await
    }

    pub async fn get_project(&self, project_id: u64) -> Result<Value> {
        self.fetch(&format!("/projects/{}", project_id)).await
    }

    pub async fn create_project(&self, params: &ProjectParams) -> Result<Value> {
        self.create("/projects", params, &["client_id", "name", "is_billable", "bill_by", "budget_by"]).await
    }

    pub async fn update_project(&self, project_id: u64, params: &ProjectParams) -> Result<Value> {
        self.update(&format!("/projects/{}", project_id), params).await
    }

    pub async fn delete_project(&self, project_id: u64) -> Result<Value> {
        self.remove(&format!("/projects/{}", project_id)).await
    }
}
