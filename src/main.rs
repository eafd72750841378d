//! Pulseboard CLI entrypoint for the sentiment dashboard.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use pulseboard::{FeedError, OperationMode, PulseboardConfig};

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), FeedError> {
    let config = load_config()?;

    match config.operation_mode() {
        OperationMode::Dashboard => cli::dashboard::run(&config).await,
        OperationMode::Snapshot => cli::snapshot_view::run(&config).await,
        OperationMode::ExportAnomalies => cli::export_anomalies::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`FeedError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<PulseboardConfig, FeedError> {
    PulseboardConfig::load().map_err(|error| FeedError::Configuration {
        message: error.to_string(),
    })
}
