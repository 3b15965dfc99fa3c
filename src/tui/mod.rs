//! Terminal User Interface for browsing reviews and signing in.
//!
//! This module provides an interactive TUI over the community API using the
//! bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::CommunityApp`]
//! - **View**: Rendering logic in each component's `view()` method
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`cancel`]: Cancellation tokens for in-flight submissions
//! - [`components`]: Review list and auth modal renderers
//! - [`input`]: Key-to-message mapping for input handling
//! - [`messages`]: Message types for the update loop
//! - [`state`]: Cursor and auth form state
//!
//! # Gateway Storage
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, the API gateway is handed over through module-level storage.
//! Call [`set_gateway`] before starting the program and
//! `CommunityApp::init()` will pick it up.

use std::sync::{Arc, OnceLock};

use crate::api::CommunityGateway;

pub mod app;
pub mod cancel;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;

pub use app::CommunityApp;

/// Global storage for the API gateway used by `CommunityApp::init()`.
static GATEWAY: OnceLock<Arc<dyn CommunityGateway>> = OnceLock::new();

/// Sets the gateway the TUI application talks to.
///
/// This must be called before starting the bubbletea-rs program.
///
/// # Returns
///
/// `true` if the gateway was set, `false` if it was already set.
pub fn set_gateway(gateway: Arc<dyn CommunityGateway>) -> bool {
    GATEWAY.set(gateway).is_ok()
}

/// Returns the stored gateway, if one was set.
pub(crate) fn get_gateway() -> Option<Arc<dyn CommunityGateway>> {
    GATEWAY.get().cloned()
}
