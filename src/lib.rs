//! Serverboard library crate: a client for a game-server community site.
//!
//! The library wraps reqwest to talk to the community REST API (servers,
//! reviews, gallery, community posts and authentication), loads layered
//! configuration, and provides a bubbletea-rs terminal front-end with a
//! review list and a login/signup modal.

pub mod api;
pub mod config;
pub mod telemetry;
pub mod tui;

pub use api::{
    ApiBaseUrl, ApiError, CommunityGateway, Describe, HttpCommunityGateway, ReviewFeed,
    ReviewFeedIntake, SiteSummary,
};
pub use config::{OperationMode, ServerboardConfig};
