mod config;
mod cors;
mod logging;
mod middleware;
mod server;
mod signals;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;

use crate::config::AppConfig;

/// Calculator API Server - arithmetic, chains and history over REST
#[derive(Parser)]
#[command(name = "calculator-server")]
#[command(about = "Calculator API Server - arithmetic, chains and history over REST")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1) defaults -> 2) YAML (if provided) -> 3) env (APP__*) -> 4) CLI overrides
    let mut config = AppConfig::load_layered(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.port, cli.verbose);

    logging::init_logging(&config.logging)?;

    if cli.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(&config),
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    // building the router validates module and CORS sections
    server::build_router(config)?;
    println!("{}", config.to_json()?);
    Ok(())
}

async fn run_server(config: AppConfig) -> Result<()> {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_addr = %config.server.bind_addr,
        "Calculator server starting"
    );

    let cancel = CancellationToken::new();
    let signals = tokio::spawn(signals::cancel_on_shutdown(cancel.clone()));

    let result = server::serve(&config, cancel.clone()).await;

    // serve may have failed before any signal arrived
    cancel.cancel();
    if let Ok(Err(e)) = signals.await {
        tracing::warn!(error = %e, "signal handling failed");
    }

    result?;
    tracing::info!("Calculator server stopped");
    Ok(())
}
