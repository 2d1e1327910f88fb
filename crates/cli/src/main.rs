//! Snapstreak CLI - daily photo-streak client

mod commands;
mod logging;
mod store;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use commands::Commands;
use snapstreak_client::{ApiClient, ClientConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{Level, error};

#[derive(Parser)]
#[command(name = "snapstreak")]
#[command(about = "Command-line client for the Snapstreak photo-streak service")]
#[command(version)]
struct Cli {
    /// Set logging level
    #[arg(short = 'l', long, global = true, default_value = "info")]
    log_level: LogLevel,

    /// API base URL
    #[arg(long, global = true, env = "SNAPSTREAK_API_URL")]
    api_url: Option<String>,

    /// Data directory for session tokens and logs
    #[arg(short = 'd', long, global = true, env = "SNAPSTREAK_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Disable file logging (only log to stderr)
    #[arg(long, global = true)]
    no_file_log: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let data_dir = resolve_data_dir(cli.data_dir.clone());
    logging::init_logging(cli.log_level.into(), &data_dir, cli.no_file_log)?;

    let mut config = ClientConfig::from_env();
    if let Some(api_url) = cli.api_url {
        config.base_url = api_url;
    }

    let store = Arc::new(store::FileTokenStore::new(data_dir.join("tokens.json")));
    let client = ApiClient::builder()
        .base_url(config.base_url)
        .timeout(config.timeout)
        .store(store)
        .build()?;

    if let Err(e) = cli.command.execute(&client).await {
        error!("Command failed: {e}");
        eprintln!("{e}");
        std::process::exit(1);
    }

    Ok(())
}

fn resolve_data_dir(data_dir: Option<PathBuf>) -> PathBuf {
    data_dir.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("snapstreak")
    })
}

#[derive(Clone, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(log_level: LogLevel) -> Self {
        match log_level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}
