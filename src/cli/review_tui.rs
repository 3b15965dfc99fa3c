//! TUI mode for browsing reviews and signing in.
//!
//! This module provides the entry point for the interactive terminal user
//! interface.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;

use serverboard::tui::{CommunityApp, set_gateway};
use serverboard::{ApiError, HttpCommunityGateway};

/// Runs the TUI against the given gateway.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialise or exits abnormally.
/// API failures are shown inside the UI instead.
pub async fn run(gateway: HttpCommunityGateway) -> Result<(), ApiError> {
    // Store the gateway for Model::init() to retrieve. If already set, the
    // existing gateway remains.
    if !set_gateway(Arc::new(gateway)) {
        tracing::debug!("gateway already configured; keeping the existing one");
    }

    run_tui().await.map_err(|error| ApiError::Io {
        message: format!("TUI error: {error}"),
    })
}

/// Runs the bubbletea-rs program with the `CommunityApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    let program = Program::<CommunityApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    // Ensure stdout is flushed
    io::stdout().flush().ok();

    Ok(())
}
