use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::params::ListOptions;
use crate::v2::HarvestClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceState {
    Draft,
    Open,
    Paid,
    Closed,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct InvoiceFilter {
    pub client_id: Option<u64>,
    pub project_id: Option<u64>,
    pub updated_since: Option<DateTime<Utc>>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub state: Option<InvoiceState>,
    #[serde(flatten)]
    pub paging: ListOptions,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct InvoiceLineItem {
    /// Set when updating an existing line item.
    pub id: Option<u64>,
    pub project_id: Option<u64>,
    pub kind: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<f64>,
    pub unit_price: Option<f64>,
    pub taxed: Option<bool>,
    pub taxed2: Option<bool>,
}

/// `project`, `task`, `people` or `detailed` for time; `project`, `category`, `people` or `detailed` for expenses.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportedTime {
    pub summary_type: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportedExpenses {
    pub summary_type: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub attach_receipt: Option<bool>,
}

/// Builds line items from uninvoiced tracked time and expenses.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LineItemsImport {
    pub project_ids: Option<Vec<u64>>,
    pub time: Option<ImportedTime>,
    pub expenses: Option<ImportedExpenses>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct InvoiceParams {
    pub client_id: Option<u64>,
    pub retainer_id: Option<u64>,
    pub estimate_id: Option<u64>,
    pub number: Option<String>,
    pub purchase_order: Option<String>,
    pub tax: Option<f64>,
    pub tax2: Option<f64>,
    pub discount: Option<f64>,
    pub subject: Option<String>,
    pub notes: Option<String>,
    pub currency: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    /// `upon receipt`, `net 15`, `net 30`, ... or `custom` with `due_date`.
    pub payment_term: Option<String>,
    pub line_items: Option<Vec<InvoiceLineItem>>,
    pub line_items_import: Option<LineItemsImport>,
}

impl HarvestClient {
    pub async fn list_invoices(&self, filter: &InvoiceFilter) -> Result<Value> {
        self.fetch_with("/invoices", filter).await
    }

    pub async fn all_invoices(&self, filter: &InvoiceFilter) -> Result<Vec<Value>> {
        self.fetch_all_pages("/invoices", "invoices", filter).await
    }

    pub async fn get_invoice(&self, invoice_id: u64) -> Result<Value> {
        self.fetch(&format!("/invoices/{}", invoice_id)).await
    }

    pub async fn create_invoice(&self, params: &InvoiceParams) -> Result<Value> {
        self.create("/invoices", params, &["client_id"]).await
    }

    pub async fn update_invoice(&self, invoice_id: u64, params: &InvoiceParams) -> Result<Value> {
        self.update(&format!("/invoices/{}", invoice_id), params).await
    }

    pub async fn delete_invoice(&self, invoice_id: u64) -> Result<Value> {
        self.remove(&format!("/invoices/{}", invoice_id)).await
    }
}
