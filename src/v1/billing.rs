//! Legacy invoices and expenses.

use chrono::{DateTime, NaiveDate, Utc};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::params;
use crate::v1::client::of_user_query;
use crate::v1::LegacyClient;

#[derive(Debug, Clone, Default, Serialize)]
pub struct LegacyInvoiceFilter {
    pub page: Option<u32>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    /// `open`, `partial`, `draft`, `paid`, `unpaid`, `pastdue`.
    pub status: Option<String>,
    pub client: Option<u64>,
    #[serde(serialize_with = "params::legacy_timestamp")]
    pub updated_since: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LegacyInvoiceParams {
    pub due_at_human_format: Option<String>,
    pub client_id: Option<u64>,
    pub currency: Option<String>,
    pub discount: Option<f64>,
    pub issued_at: Option<NaiveDate>,
    pub subject: Option<String>,
    pub notes: Option<String>,
    pub number: Option<String>,
    /// `free_form`, `project`, `task`, `people` or `detailed`.
    pub kind: Option<String>,
    /// Comma separated project ids.
    pub projects_to_invoice: Option<String>,
    pub import_hours: Option<String>,
    pub import_expense: Option<String>,
    pub expense_summary_type: Option<String>,
    pub period_start: Option<NaiveDate>,
    pub period_end: Option<NaiveDate>,
    pub expense_period_start: Option<NaiveDate>,
    pub expense_period_end: Option<NaiveDate>,
    pub csv_line_items: Option<String>,
    pub tax: Option<f64>,
    pub tax2: Option<f64>,
    pub purchase_order: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LegacyExpenseParams {
    pub notes: Option<String>,
    pub total_cost: Option<f64>,
    pub project_id: Option<u64>,
    pub expense_category_id: Option<u64>,
    pub billable: Option<bool>,
    pub spent_at: Option<NaiveDate>,
    pub units: Option<f64>,
}

impl LegacyClient {
    pub async fn list_invoices(&self, filter: &LegacyInvoiceFilter) -> Result<Value> {
        self.fetch("/invoices", filter).await
    }

    pub async fn get_invoice(&self, invoice_id: u64) -> Result<Value> {
        self.fetch(&format!("/invoices/{}", invoice_id), &()).await
    }

    pub async fn create_invoice(&self, params: &LegacyInvoiceParams) -> Result<Value> {
        self.write(Method::POST, "/invoices", "invoice", params, &["client_id"]).await
    }

    pub async fn delete_invoice(&self, invoice_id: u64) -> Result<Value> {
        self.act(Method::DELETE, &format!("/invoices/{}", invoice_id), &[]).await
    }

    pub async fn get_expense(&self, expense_id: u64, of_user: Option<u64>) -> Result<Value> {
        let query = of_user_query(of_user);
        self.act(Method::GET, &format!("/expenses/{}", expense_id), &query).await
    }

    pub async fn create_expense(&self, params: &LegacyExpenseParams) -> Result<Value> {
        self.write(Method::POST, "/expenses", "expense", params, &["project_id", "expense_category_id", "spent_at"]).await
    }

    pub async fn update_expense(&self, expense_id: u64, params: &LegacyExpenseParams) -> Result<Value> {
        self.write(Method::PUT, &format!("/expenses/{}", expense_id), "expense", params, &[]).await
    }

    pub async fn delete_expense(&self, expense_id: u64) -> Result<Value> {
        self.act(Method::DELETE, &format!("/expenses/{}", expense_id), &[]).await
    }

    /// Raw receipt image bytes.
    pub async fn receipt(&self, expense_id: u64) -> Result<Vec<u8>> {
        self.fetch_bytes(&format!("/expenses/{}/receipt", expense_id)).await
    }

    pub async fn attach_receipt(&self, expense_id: u64, file_name: &str, data: &[u8]) -> Result<Value> {
        self.upload(&format!("/expenses/{}/receipt", expense_id), "expense[receipt]", file_name, data).await
    }
}
