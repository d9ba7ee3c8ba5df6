// Standard library
use std::process::ExitCode;
use std::sync::Arc;

// 3rd party crates
use tokio::signal::ctrl_c;
use tokio::sync::broadcast;
use tracing::{error, info};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

// Project modules
mod functions;
mod metrics;
mod poller;
mod provisioner;
mod settings;
mod utility;

// Project imports
use crate::settings::types::ConfigManager;

/// Main entry point for the API status probe.
/// This application provisions API keys bound to the current egress IP and then
/// polls a fixed list of resources through a single-lane throttler, reporting
/// the observed latency of every request.
///
/// Features:
/// - Key provisioning with revocation of keys left by earlier runs
/// - Round-robin rotation over the provisioned keys
/// - Strict FIFO throttling with a minimum interval between requests
/// - Optional latency reporting to a status page metric
/// - Graceful shutdown
#[tokio::main]
async fn main() -> ExitCode {
    // loads the .env file from the current directory or parents.
    dotenvy::dotenv_override().ok();

    let config: Arc<ConfigManager> = match ConfigManager::new().await {
        Ok(config) => Arc::new(config),
        Err(e) => {
            eprintln!("Failed to initialize configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // setup logging.
    let log_level: String = config.get_log_level().await;

    let filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(LevelFilter::ERROR.into())
        .parse_lossy(log_level)
        .add_directive("hyper_util=error".parse().unwrap())
        .add_directive("reqwest=error".parse().unwrap())
        .add_directive("rustls=error".parse().unwrap())
        .add_directive("hyper=error".parse().unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_level(true)
        .init();

    info!("⚙️ Settings have been loaded.");

    // Create a broadcast channel for shutdown signal
    let (shutdown_tx, _) = broadcast::channel(1);
    let shutdown_tx_clone = shutdown_tx.clone();

    // Handle Ctrl+C
    tokio::spawn(async move {
        if let Err(e) = ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        info!("Received shutdown signal, initiating graceful shutdown...");
        let _ = shutdown_tx_clone.send(());
    });

    // Run the main application logic with shutdown signal
    if let Err(e) = functions::run(config, shutdown_tx.subscribe()).await {
        error!("Application error: {}", e);
        return ExitCode::FAILURE;
    }

    info!("Shutdown complete.");
    ExitCode::SUCCESS
}
