//! Rendering logic for the community TUI application.
//!
//! This module contains the view rendering methods that produce string output
//! for display in the terminal. These are pure query methods that read state
//! without modification.

use super::CommunityApp;
use crate::tui::components::{AuthModalComponent, ReviewListViewContext, author_name};

const LIST_HINTS: &str = "j/k:move  r:refresh  a:sign in  o:sign out  q:quit";

impl CommunityApp {
    /// Renders the header bar.
    pub(super) fn render_header(&self) -> String {
        let title = "Serverboard - Reviews";
        let loading_indicator = if self.loading { " [Loading...]" } else { "" };
        format!("{title}{loading_indicator} ({})\n", self.reviews.len())
    }

    /// Renders the main body: the auth modal when open, else the review list.
    pub(super) fn render_body(&self) -> String {
        if self.auth.is_open() {
            return AuthModalComponent::view(&self.auth);
        }
        let ctx = ReviewListViewContext {
            reviews: &self.reviews,
            users: &self.users,
            cursor_position: self.cursor.cursor_position,
            scroll_offset: self.cursor.scroll_offset,
            visible_height: self.review_list.visible_height(),
        };
        self.review_list.view(&ctx)
    }

    /// Renders the status bar with session and help hints.
    pub(super) fn render_status_bar(&self) -> String {
        if let Some(error) = &self.error {
            return format!("Error: {error}\n");
        }
        format!("{}  |  {LIST_HINTS}\n", self.session_label())
    }

    /// Names the signed-in user, falling back to the id when the roster
    /// does not contain it.
    pub(super) fn session_label(&self) -> String {
        match self.session {
            None => "not signed in".to_owned(),
            Some(id) if self.users.iter().any(|user| user.id == id) => {
                format!("signed in as {}", author_name(&self.users, id))
            }
            Some(id) => format!("signed in as user #{id}"),
        }
    }
}
