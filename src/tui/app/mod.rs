//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the core application state and update logic for the
//! community TUI. It hosts the review list and the auth modal, and runs every
//! API call as a bubbletea command whose result comes back as an [`AppMsg`].
//!
//! # Module Structure
//!
//! - `auth_handlers`: Auth modal input, submission and logout
//! - `data_handlers`: Feed and session loading
//! - `model_impl`: `bubbletea_rs::Model` implementation
//! - `navigation`: Cursor movement over the review list
//! - `rendering`: View rendering methods for terminal output

use std::sync::Arc;

use bubbletea_rs::Cmd;

use crate::api::{CommunityGateway, Review, User, UserId};

use super::components::ReviewListComponent;
use super::messages::AppMsg;
use super::state::{AuthModalState, ListCursor};

mod auth_handlers;
mod data_handlers;
mod model_impl;
mod navigation;
mod rendering;

/// Rows used by the header and status bar.
const CHROME_HEIGHT: usize = 3;

/// Rows used by one rendered review.
const ROWS_PER_REVIEW: usize = 2;

/// Main application model for the community TUI.
pub struct CommunityApp {
    gateway: Option<Arc<dyn CommunityGateway>>,
    /// User roster used to name review authors.
    pub(crate) users: Vec<User>,
    /// Reviews in the order the API returned them.
    pub(crate) reviews: Vec<Review>,
    /// Cursor and scroll state for the review list.
    pub(crate) cursor: ListCursor,
    /// Signed-in user id, if any.
    pub(crate) session: Option<UserId>,
    /// Whether the feed is loading.
    pub(crate) loading: bool,
    /// Current error message, if any.
    pub(crate) error: Option<String>,
    /// Auth modal state.
    pub(crate) auth: AuthModalState,
    width: u16,
    height: u16,
    review_list: ReviewListComponent,
}

impl std::fmt::Debug for CommunityApp {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("CommunityApp")
            .field("has_gateway", &self.gateway.is_some())
            .field("users", &self.users.len())
            .field("reviews", &self.reviews.len())
            .field("cursor", &self.cursor)
            .field("session", &self.session)
            .field("loading", &self.loading)
            .field("error", &self.error)
            .field("auth", &self.auth)
            .finish_non_exhaustive()
    }
}

impl CommunityApp {
    /// Creates an application that talks to the API through `gateway`.
    #[must_use]
    pub fn new(gateway: Arc<dyn CommunityGateway>) -> Self {
        Self::with_gateway(Some(gateway))
    }

    /// Creates an application without an API connection.
    ///
    /// Every load fails with a configuration message.
    #[must_use]
    pub fn disconnected() -> Self {
        Self::with_gateway(None)
    }

    fn with_gateway(gateway: Option<Arc<dyn CommunityGateway>>) -> Self {
        let mut review_list = ReviewListComponent::new();
        let height: u16 = 24;
        review_list.set_visible_height(list_height_for(height));
        Self {
            gateway,
            users: Vec::new(),
            reviews: Vec::new(),
            cursor: ListCursor::new(),
            session: None,
            loading: false,
            error: None,
            auth: AuthModalState::new(),
            width: 80,
            height,
            review_list,
        }
    }

    /// Returns the current cursor position.
    #[must_use]
    pub const fn cursor_position(&self) -> usize {
        self.cursor.cursor_position
    }

    /// Returns the review under the cursor.
    #[must_use]
    pub fn selected_review(&self) -> Option<&Review> {
        self.reviews.get(self.cursor.cursor_position)
    }

    /// Returns the signed-in user id.
    #[must_use]
    pub const fn session(&self) -> Option<UserId> {
        self.session
    }

    /// Returns the auth modal state.
    #[must_use]
    pub const fn auth(&self) -> &AuthModalState {
        &self.auth
    }

    /// Handles a message and updates state accordingly.
    ///
    /// Returns an optional command to execute asynchronously.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::CursorUp
            | AppMsg::CursorDown
            | AppMsg::PageUp
            | AppMsg::PageDown
            | AppMsg::Home
            | AppMsg::End => self.handle_navigation_msg(msg),
            AppMsg::Initialized
            | AppMsg::RefreshRequested
            | AppMsg::Refreshed { .. }
            | AppMsg::SessionResolved(_) => self.handle_data_msg(msg),
            AppMsg::OpenAuth
            | AppMsg::CloseAuth
            | AppMsg::AuthInput(_)
            | AppMsg::AuthBackspace
            | AppMsg::AuthFocusNext
            | AppMsg::AuthToggleMode
            | AppMsg::AuthSubmit
            | AppMsg::AuthSettled { .. }
            | AppMsg::LogoutRequested
            | AppMsg::LoggedOut(_) => self.handle_auth_msg(msg),
            AppMsg::Quit => self.handle_quit(),
            AppMsg::WindowResized { width, height } => self.handle_resize(*width, *height),
        }
    }

    #[expect(
        clippy::unnecessary_wraps,
        reason = "Returns Option<Cmd> for consistency with other message handlers"
    )]
    fn handle_quit(&mut self) -> Option<Cmd> {
        self.auth.close();
        Some(bubbletea_rs::quit())
    }

    fn handle_resize(&mut self, width: u16, height: u16) -> Option<Cmd> {
        self.width = width;
        self.height = height;
        self.review_list.set_visible_height(list_height_for(height));
        self.cursor.ensure_visible(self.review_list.visible_height());
        None
    }

    fn gateway(&self) -> Option<Arc<dyn CommunityGateway>> {
        self.gateway.clone()
    }
}

/// Number of reviews that fit below the chrome for a terminal `height`.
fn list_height_for(height: u16) -> usize {
    let rows = usize::from(height).saturating_sub(CHROME_HEIGHT);
    rows.div_euclid(ROWS_PER_REVIEW).max(1)
}
