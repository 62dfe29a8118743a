use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use baseera_application::bootstrap;
use baseera_core::config::LatencyConfig;
use baseera_infrastructure::{ConfigService, init_logging};

mod commands;
mod helper;
mod render;
mod repl;

use repl::Repl;

#[derive(Parser)]
#[command(name = "baseera")]
#[command(about = "Baseera - document risk analysis demo", long_about = None)]
struct Cli {
    /// Configuration file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "baseera_core=trace"; RUST_LOG wins when set
    #[arg(long)]
    log_level: Option<String>,

    /// Skip every simulated delay
    #[arg(long)]
    instant: bool,

    /// Path to open first
    #[arg(long, default_value = "/")]
    start: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_service = match &cli.config {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new(),
    };
    let mut config = config_service.get_config()?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if cli.instant {
        config.latency = LatencyConfig::instant();
    }

    let _logging = init_logging(&config.logging)?;
    if let Ok(path) = config_service.config_path() {
        tracing::debug!("[Main] Config from {}", path.display());
    }

    let mut repl = Repl::new(bootstrap(config), &cli.start).await;
    repl.run().await
}
