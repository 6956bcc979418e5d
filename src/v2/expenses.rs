use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::params::ListOptions;
use crate::v2::HarvestClient;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ExpenseFilter {
    pub user_id: Option<u64>,
    pub client_id: Option<u64>,
    pub project_id: Option<u64>,
    pub is_billed: Option<bool>,
    pub updated_since: Option<DateTime<Utc>>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    #[serde(flatten)]
    pub paging: ListOptions,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ExpenseParams {
    pub user_id: Option<u64>,
    pub project_id: Option<u64>,
    pub expense_category_id: Option<u64>,
    pub spent_date: Option<NaiveDate>,
    /// For unit-priced categories; otherwise use `total_cost`.
    pub units: Option<f64>,
    pub total_cost: Option<f64>,
    pub notes: Option<String>,
    pub billable: Option<bool>,
}

impl HarvestClient {
    pub async fn list_expenses(&self, filter: &ExpenseFilter) -> Result<Value> {
        self.fetch_with("/expenses", filter).await
    }

    pub async fn all_expenses(&self, filter: &ExpenseFilter) -> Result<Vec<Value>> {
        self.fetch_all_pages("/expenses", "expenses", filter).await
    }

    pub async fn get_expense(&self, expense_id: u64) -> Result<Value> {
        self.fetch(&format!("/expenses/{}", expense_id)).await
    }

    pub async fn create_expense(&self, params: &ExpenseParams) -> Result<Value> {
        self.create("/expenses", params, &["project_id", "expense_category_id", "spent_date"]).await
    }

    pub async fn update_expense(&self, expense_id: u64, params: &ExpenseParams) -> Result<Value> {
        self.update(&format!("/expenses/{}", expense_id), params).await
    }

    pub async fn delete_expense(&self, expense_id: u64) -> Result<Value> {
        self.remove(&format!("/expenses/{}", expense_id)).await
    }

    pub async fn list_expense_categories(&self, paging: &ListOptions) -> Result<Value> {
        self.fetch_with("/expense_categories", paging).await
    }
}
