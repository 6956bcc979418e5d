use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::params::ListOptions;
use crate::v2::HarvestClient;

#[derive(Debug, Clone, Default, Serialize)]
pub struct TimeEntryFilter {
    pub user_id: Option<u64>,
    pub client_id: Option<u64>,
    pub project_id: Option<u64>,
    pub task_id: Option<u64>,
    pub external_reference_id: Option<String>,
    pub is_billed: Option<bool>,
    pub is_running: Option<bool>,
    pub updated_since: Option<DateTime<Utc>>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    #[serde(flatten)]
    pub paging: ListOptions,
}

/// Link to an item in an external tool (e.g. an issue tracker).
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExternalReference {
    pub id: Option<String>,
    pub group_id: Option<String>,
    pub account_id: Option<String>,
    pub permalink: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TimeEntryParams {
    /// Defaults to the authenticated user on create.
    pub user_id: Option<u64>,
    pub project_id: Option<u64>,
    pub task_id: Option<u64>,
    pub spent_date: Option<NaiveDate>,
    /// `8:00am` style, only for accounts tracking start/end times.
    pub started_time: Option<String>,
    pub ended_time: Option<String>,
    /// Omitting hours on create starts a running timer.
    pub hours: Option<f64>,
    pub notes: Option<String>,
    pub external_reference: Option<ExternalReference>,
}

impl HarvestClient {
    pub async fn list_time_entries(&self, filter: &TimeEntryFilter) -> Result<Value> {
        self.fetch_with("/time_entries", filter).await
    }

    pub async fn all_time_entries(&self, filter: &TimeEntryFilter) -> Result<Vec<Value>> {
        self.fetch_all_pages("/time_entries", "time_entries", filter).await
    }

    pub async fn get_time_entry(&self, entry_id: u64) -> Result<Value> {
        self.fetch(&format!("/time_entries/{}", entry_id)).await
    }

    pub async fn create_time_entry(&self, params: &TimeEntryParams) -> Result<Value> {
        self.create("/time_entries", params, &["project_id", "task_id", "spent_date"]).await
    }

    pub async fn update_time_entry(&self, entry_id: u64, params: &TimeEntryParams) -> Result<Value> {
        self.update(&format!("/time_entries/{}", entry_id), params).await
    }

    pub async fn delete_time_entry(&self, entry_id: u64) -> Result<Value> {
        self.remove(&format!("/time_entries/{}", entry_id)).await
    }

    pub async fn restart_time_entry(&self, entry_id: u64) -> Result<Value> {
        self.patch_empty(&format!("/time_entries/{}/restart", entry_id)).await
    }

    pub async fn stop_time_entry(&self, entry_id: u64) -> Result<Value> {
        self.patch_empty(&format!("/time_entries/{}/stop", entry_id)).await
    }

    pub async fn delete_time_entry_external_reference(&self, entry_id: u64) -> Result<Value> {
        self.remove(&format!("/time_entries/{}/external_reference", entry_id)).await
    }
}
