use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;

use harvest_api::Config;

use crate::cli::Cli;

fn init_logging(json: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    // stdout carries the JSON documents, logs go to stderr
    if json {
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .init();
    } else {
        fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Cli::parse();
    init_logging(args.log_json);

    let cfg = Config::from_env();
    tracing::debug!(
        api_url = %cfg.api_url,
        legacy_url = ?cfg.legacy_base_url(),
        max_retries = cfg.http_max_retries,
        "loaded config"
    );

    let output = cli::run(args.command, &cfg).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
