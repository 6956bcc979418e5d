//! Daily timesheet endpoints and time reports.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::error::{HarvestError, Result};
use crate::params;
use crate::v1::client::of_user_query;
use crate::v1::LegacyClient;

#[derive(Debug, Clone, Default, Serialize)]
pub struct LegacyEntryParams {
    pub project_id: Option<u64>,
    pub task_id: Option<u64>,
    pub hours: Option<f64>,
    pub notes: Option<String>,
    pub spent_at: Option<NaiveDate>,
    /// Only for accounts tracking start/end times, e.g. `8:00am`.
    pub started_at: Option<String>,
    pub ended_at: Option<String>,
}

/// Extra filters on report queries. Flags serialize as `yes` / `no`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LegacyReportFilter {
    #[serde(serialize_with = "params::yes_no")]
    pub billable: Option<bool>,
    #[serde(serialize_with = "params::yes_no")]
    pub only_billed: Option<bool>,
    #[serde(serialize_with = "params::yes_no")]
    pub only_unbilled: Option<bool>,
    #[serde(serialize_with = "params::yes_no")]
    pub is_closed: Option<bool>,
    #[serde(serialize_with = "params::legacy_timestamp")]
    pub updated_since: Option<DateTime<Utc>>,
    /// Narrows project reports to one person.
    pub user_id: Option<u64>,
    /// Narrows person reports to one project.
    pub project_id: Option<u64>,
}

fn report_query(from: NaiveDate, to: NaiveDate, filter: &LegacyReportFilter) -> Result<Vec<(String, String)>> {
    if to < from {
        return Err(HarvestError::InvalidInput(format!("report range ends ({}) before it starts ({})", to, from)));
    }
    let mut query = vec![
        ("from".to_string(), from.format("%Y%m%d").to_string()),
        ("to".to_string(), to.format("%Y%m%d").to_string()),
    ];
    query.extend(params::query(filter)?);
    Ok(query)
}

impl LegacyClient {
    /// Entries for `day` (today when `None`) plus the projects/tasks the user can track against.
    pub async fn daily(&self, day: Option<NaiveDate>, of_user: Option<u64>) -> Result<Value> {
        let path = match day {
            Some(d) => format!("/daily/{}/{}", d.ordinal(), d.year()),
            None => "/daily".to_string(),
        };
        self.act(Method::GET, &path, &of_user_query(of_user)).await
    }

    pub async fn get_entry(&self, entry_id: u64, of_user: Option<u64>) -> Result<Value> {
        self.act(Method::GET, &format!("/daily/show/{}", entry_id), &of_user_query(of_user)).await
    }

    /// Without `hours` Harvest starts a timer on the new entry.
    pub async fn add_entry(&self, params: &LegacyEntryParams, of_user: Option<u64>) -> Result<Value> {
        self.write_flat("/daily/add", params, &["project_id", "task_id", "spent_at"], &of_user_query(of_user)).await
    }

    pub async fn toggle_timer(&self, entry_id: u64, of_user: Option<u64>) -> Result<Value> {
        self.act(Method::GET, &format!("/daily/timer/{}", entry_id), &of_user_query(of_user)).await
    }

    pub async fn delete_entry(&self, entry_id: u64, of_user: Option<u64>) -> Result<Value> {
        self.act(Method::DELETE, &format!("/daily/delete/{}", entry_id), &of_user_query(of_user)).await
    }

    pub async fn update_entry(&self, entry_id: u64, params: &LegacyEntryParams, of_user: Option<u64>) -> Result<Value> {
        self.write_flat(&format!("/daily/update/{}", entry_id), params, &[], &of_user_query(of_user)).await
    }

    pub async fn project_entries(&self, project_id: u64, from: NaiveDate, to: NaiveDate, filter: &LegacyReportFilter) -> Result<Value> {
        let query = report_query(from, to, filter)?;
        self.act(Method::GET, &format!("/projects/{}/entries", project_id), &query).await
    }

    pub async fn user_entries(&self, user_id: u64, from: NaiveDate, to: NaiveDate, filter: &LegacyReportFilter) -> Result<Value> {
        let query = report_query(from, to, filter)?;
        self.act(Method::GET, &format!("/people/{}/entries", user_id), &query).await
    }
}
