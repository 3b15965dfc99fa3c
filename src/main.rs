//! Serverboard CLI entrypoint.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use serverboard::telemetry::init_file_logging;
use serverboard::{ApiError, HttpCommunityGateway, OperationMode, ServerboardConfig};

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

async fn run() -> Result<(), ApiError> {
    let config = load_config()?;

    if let Some(path) = config.log_file() {
        init_file_logging(&path)?;
    }

    let base_url = config.resolve_api_url()?;
    tracing::info!(base_url = %base_url.as_str(), "starting serverboard");
    let gateway = HttpCommunityGateway::for_base_url(base_url)?;

    match config.operation_mode() {
        OperationMode::Summary => cli::summary::run(&gateway).await,
        OperationMode::Interactive => cli::review_tui::run(gateway).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ApiError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<ServerboardConfig, ApiError> {
    ServerboardConfig::load().map_err(|error| ApiError::Configuration {
        message: error.to_string(),
    })
}
