//! CLI operation mode handlers.
//!
//! This module contains the implementations for the operation modes:
//! - [`review_tui`]: Interactive TUI for reading reviews and signing in
//! - [`summary`]: Print entity counts for every list endpoint
//!
//! Output formatting utilities are in [`output`].

pub mod output;
pub mod review_tui;
pub mod summary;
