//! Feed and session loading handlers for the community TUI.
//!
//! A refresh loads the review feed and resolves the current session in one
//! command. Results replace the list wholesale; the cursor is clamped so it
//! never points past the last review.

use std::any::Any;
use std::sync::Arc;

use bubbletea_rs::Cmd;

use super::CommunityApp;
use crate::api::{ApiError, CommunityGateway, ReviewFeed, ReviewFeedIntake, UserId};
use crate::tui::messages::AppMsg;

/// Shown when the app was started without an API connection.
pub(super) const NOT_CONNECTED_MESSAGE: &str = "API connection is not configured";

impl CommunityApp {
    /// Dispatches data loading messages to their handlers.
    pub(super) fn handle_data_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Initialized | AppMsg::RefreshRequested => self.handle_refresh_requested(),
            AppMsg::Refreshed { feed, session } => self.handle_refreshed(feed, session),
            AppMsg::SessionResolved(session) => self.handle_session_resolved(session),
            _ => {
                // Unreachable: caller filters to data messages.
                None
            }
        }
    }

    /// Starts loading the feed and session unless a load is already running.
    pub(super) fn handle_refresh_requested(&mut self) -> Option<Cmd> {
        if self.loading {
            return None;
        }
        let Some(gateway) = self.gateway() else {
            self.error = Some(NOT_CONNECTED_MESSAGE.to_owned());
            return None;
        };

        self.loading = true;
        self.error = None;
        Some(refresh_cmd(gateway))
    }

    fn handle_refreshed(
        &mut self,
        feed: &Result<ReviewFeed, ApiError>,
        session: &Result<Option<UserId>, ApiError>,
    ) -> Option<Cmd> {
        self.loading = false;

        match feed {
            Ok(loaded) => {
                self.users.clone_from(&loaded.users);
                self.reviews.clone_from(&loaded.reviews);
                self.cursor.clamp(self.reviews.len());
                self.cursor.ensure_visible(self.review_list.visible_height());
                self.error = None;
                tracing::debug!(
                    reviews = self.reviews.len(),
                    users = self.users.len(),
                    "review feed loaded"
                );
            }
            Err(error) => {
                tracing::warn!(%error, "review feed failed to load");
                self.error = Some(error.to_string());
            }
        }

        self.apply_session(session);
        None
    }

    fn handle_session_resolved(&mut self, session: &Result<Option<UserId>, ApiError>) -> Option<Cmd> {
        self.apply_session(session);
        None
    }

    fn apply_session(&mut self, session: &Result<Option<UserId>, ApiError>) {
        match session {
            Ok(id) => self.session = *id,
            Err(error) => {
                tracing::warn!(%error, "current session could not be resolved");
                self.session = None;
                if self.error.is_none() {
                    self.error = Some(error.to_string());
                }
            }
        }
    }

    /// Creates a command that refetches the current user id.
    pub(super) fn session_cmd(&self) -> Option<Cmd> {
        let gateway = self.gateway()?;
        Some(Box::pin(async move {
            let session = gateway.fetch_id().await;
            Some(Box::new(AppMsg::SessionResolved(session)) as Box<dyn Any + Send>)
        }))
    }

    /// Creates a command that emits `Initialized` immediately.
    ///
    /// This synthetic startup event triggers the first load without waiting
    /// for user input.
    pub(super) fn immediate_init_cmd() -> Cmd {
        Box::pin(async { Some(Box::new(AppMsg::Initialized) as Box<dyn Any + Send>) })
    }
}

fn refresh_cmd(gateway: Arc<dyn CommunityGateway>) -> Cmd {
    Box::pin(async move {
        let intake = ReviewFeedIntake::new(gateway.as_ref());
        let (feed, session) = tokio::join!(intake.load(), gateway.fetch_id());
        Some(Box::new(AppMsg::Refreshed { feed, session }) as Box<dyn Any + Send>)
    })
}
