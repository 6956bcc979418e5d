use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde_json::Value;

use harvest_api::v2::{ClientFilter, InvoiceFilter, ProjectFilter, TaskFilter, TimeEntryFilter, TimeEntryParams, UserFilter};
use harvest_api::{Config, HarvestClient, LegacyClient, ListOptions};

#[derive(Parser)]
#[command(name = "harvest")]
#[command(about = "Query the Harvest time-tracking API from the command line", version)]
pub struct Cli {
    /// Emit logs as JSON on stderr
    #[arg(
        long,
        global = true,
        env = "HARVEST_LOG_JSON",
        action = clap::ArgAction::SetTrue,
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub log_json: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the company of the configured account
    Company,
    /// Show the user owning the access token
    Me,
    Clients {
        #[command(subcommand)]
        action: ListOrGet,
    },
    Projects {
        #[command(subcommand)]
        action: ListOrGet,
    },
    Tasks {
        #[command(subcommand)]
        action: ListOrGet,
    },
    Users {
        #[command(subcommand)]
        action: ListOrGet,
    },
    TimeEntries {
        #[command(subcommand)]
        action: TimeEntryCommand,
    },
    Invoices {
        #[command(subcommand)]
        action: InvoiceCommand,
    },
    /// List roles
    Roles,
    /// Legacy v1 API (Basic auth)
    Legacy {
        #[command(subcommand)]
        action: LegacyCommand,
    },
}

#[derive(Subcommand)]
pub enum ListOrGet {
    List {
        /// Only active records; `--active=false` lists archived ones
        #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
        active: Option<bool>,
        /// Follow pagination and print every record
        #[arg(long)]
        all: bool,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        per_page: Option<u32>,
    },
    Get { id: u64 },
}

#[derive(Subcommand)]
pub enum TimeEntryCommand {
    List {
        /// First day, YYYY-MM-DD
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Last day, YYYY-MM-DD
        #[arg(long)]
        to: Option<NaiveDate>,
        #[arg(long)]
        user_id: Option<u64>,
        #[arg(long)]
        project_id: Option<u64>,
        #[arg(long)]
        running: Option<bool>,
        #[arg(long)]
        all: bool,
        #[arg(long)]
        page: Option<u32>,
    },
    Get { id: u64 },
    /// Track time; without --hours a timer is started
    Create {
        #[arg(long)]
        project_id: u64,
        #[arg(long)]
        task_id: u64,
        #[arg(long)]
        spent_date: NaiveDate,
        #[arg(long)]
        hours: Option<f64>,
        #[arg(long)]
        notes: Option<String>,
    },
    Stop { id: u64 },
    Restart { id: u64 },
    Delete { id: u64 },
}

#[derive(Subcommand)]
pub enum InvoiceCommand {
    List {
        #[arg(long)]
        client_id: Option<u64>,
        #[arg(long)]
        all: bool,
    },
    Get { id: u64 },
}

#[derive(Subcommand)]
pub enum LegacyCommand {
    WhoAmI,
    RateLimit,
}

fn collect(items: Vec<Value>) -> Value {
    Value::Array(items)
}

pub async fn run(command: Command, cfg: &Config) -> Result<Value> {
    match command {
        Command::Legacy { action } => run_legacy(action, &LegacyClient::from_config(cfg)?).await,
        other => run_v2(other, &HarvestClient::from_config(cfg)?).await,
    }
}

async fn run_legacy(action: LegacyCommand, legacy: &LegacyClient) -> Result<Value> {
    let out = match action {
        LegacyCommand::WhoAmI => legacy.who_am_i().await?,
        LegacyCommand::RateLimit => legacy.rate_limit_status().await?,
    };
    Ok(out)
}

async fn run_v2(command: Command, client: &HarvestClient) -> Result<Value> {
    let out = match command {
        Command::Company => client.company().await?,
        Command::Me => client.me().await?,
        Command::Clients { action } => match action {
            ListOrGet::List { active, all, page, per_page } => {
                let filter = ClientFilter { is_active: active, paging: ListOptions { page, per_page }, ..Default::default() };
                if all { collect(client.all_clients(&filter).await?) } else { client.list_clients(&filter).await? }
            }
            ListOrGet::Get { id } => client.get_client(id).await?,
        },
        Command::Projects { action } => match action {
            ListOrGet::List { active, all, page, per_page } => {
                let filter = ProjectFilter { is_active: active, paging: ListOptions { page, per_page }, ..Default::default() };
                if all { collect(client.all_projects(&filter).await?) } else { client.list_projects(&filter).await? }
            }
            ListOrGet::Get { id } => client.get_project(id).await?,
        },
        Command::Tasks { action } => match action {
            ListOrGet::List { active, all, page, per_page } => {
                let filter = TaskFilter { is_active: active, paging: ListOptions { page, per_page }, ..Default::default() };
                if all { collect(client.all_tasks(&filter).await?) } else { client.list_tasks(&filter).await? }
            }
            ListOrGet::Get { id } => client.get_task(id).await?,
        },
        Command::Users { action } => match action {
            ListOrGet::List { active, all, page, per_page } => {
                let filter = UserFilter { is_active: active, paging: ListOptions { page, per_page }, ..Default::default() };
                if all { collect(client.all_users(&filter).await?) } else { client.list_users(&filter).await? }
            }
            ListOrGet::Get { id } => client.get_user(id).await?,
        },
        Command::TimeEntries { action } => match action {
            TimeEntryCommand::List { from, to, user_id, project_id, running, all, page } => {
                let filter = TimeEntryFilter {
                    from,
                    to,
                    user_id,
                    project_id,
                    is_running: running,
                    paging: ListOptions { page, per_page: None },
                    ..Default::default()
                };
                if all { collect(client.all_time_entries(&filter).await?) } else { client.list_time_entries(&filter).await? }
            }
            TimeEntryCommand::Get { id } => client.get_time_entry(id).await?,
            TimeEntryCommand::Create { project_id, task_id, spent_date, hours, notes } => {
                let params = TimeEntryParams {
                    project_id: Some(project_id),
                    task_id: Some(task_id),
                    spent_date: Some(spent_date),
                    hours,
                    notes,
                    ..Default::default()
                };
                client.create_time_entry(&params).await?
            }
            TimeEntryCommand::Stop { id } => client.stop_time_entry(id).await?,
            TimeEntryCommand::Restart { id } => client.restart_time_entry(id).await?,
            TimeEntryCommand::Delete { id } => client.delete_time_entry(id).await?,
        },
        Command::Invoices { action } => match action {
            InvoiceCommand::List { client_id, all } => {
                let filter = InvoiceFilter { client_id, ..Default::default() };
                if all { collect(client.all_invoices(&filter).await?) } else { client.list_invoices(&filter).await? }
            }
            InvoiceCommand::Get { id } => client.get_invoice(id).await?,
        },
        Command::Roles => client.list_roles(&ListOptions::default()).await?,
        Command::Legacy { .. } => anyhow::bail!("legacy commands need legacy credentials"),
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    // Parsing reads HARVEST_LOG_JSON, so tests touching it run one at a time.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn log_json_accepts_numeric_env_value() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::set_var("HARVEST_LOG_JSON", "1");
        let on = Cli::try_parse_from(["harvest", "me"]);
        std::env::set_var("HARVEST_LOG_JSON", "0");
        let off = Cli::try_parse_from(["harvest", "me"]);
        std::env::remove_var("HARVEST_LOG_JSON");
        assert!(on.unwrap().log_json);
        assert!(!off.unwrap().log_json);

        let flag = Cli::try_parse_from(["harvest", "me", "--log-json"]).unwrap();
        assert!(flag.log_json);
    }

    #[test]
    fn active_works_as_bare_flag_or_with_value() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let active_of = |args: &[&str]| match Cli::try_parse_from(args.iter().copied()).unwrap().command {
            Command::Clients { action: ListOrGet::List { active, .. } } => active,
            _ => panic!("wrong command parsed"),
        };
        assert_eq!(active_of(&["harvest", "clients", "list", "--active"]), Some(true));
        assert_eq!(active_of(&["harvest", "clients", "list", "--active=false"]), Some(false));
        assert_eq!(active_of(&["harvest", "clients", "list", "--all"]), None);
        assert_eq!(active_of(&["harvest", "clients", "list", "--active", "--all"]), Some(true));
    }

    #[test]
    fn parses_time_entry_create() {
        let cli = Cli::try_parse_from([
            "harvest", "time-entries", "create", "--project-id", "5", "--task-id", "7", "--spent-date", "2024-03-01", "--hours", "1.5",
        ])
        .unwrap();
        match cli.command {
            Command::TimeEntries { action: TimeEntryCommand::Create { project_id, task_id, spent_date, hours, notes } } => {
                assert_eq!(project_id, 5);
                assert_eq!(task_id, 7);
                assert_eq!(spent_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
                assert_eq!(hours, Some(1.5));
                assert!(notes.is_none());
            }
            _ => panic!("wrong command parsed"),
        }
    }

    #[test]
    fn parses_legacy_who_am_i() {
        let cli = Cli::try_parse_from(["harvest", "legacy", "who-am-i"]).unwrap();
        assert!(matches!(cli.command, Command::Legacy { action: LegacyCommand::WhoAmI }));
    }
}
