//! Navigation handlers and cursor management.
//!
//! Each handler moves the cursor and then scrolls so the cursor remains in
//! the visible window.

use bubbletea_rs::Cmd;

use super::CommunityApp;
use crate::tui::messages::AppMsg;

impl CommunityApp {
    /// Dispatches navigation messages to their handlers.
    pub(super) fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        let count = self.reviews.len();
        let page_size = self.review_list.visible_height();
        match msg {
            AppMsg::CursorUp => self.cursor.up(1),
            AppMsg::CursorDown => self.cursor.down(1, count),
            AppMsg::PageUp => self.cursor.up(page_size),
            AppMsg::PageDown => self.cursor.down(page_size, count),
            AppMsg::Home => self.cursor.home(),
            AppMsg::End => self.cursor.end(count),
            _ => {
                // Unreachable: caller filters to navigation messages.
                return None;
            }
        }
        self.cursor.ensure_visible(page_size);
        None
    }
}
