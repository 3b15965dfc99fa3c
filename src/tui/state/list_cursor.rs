//! Cursor and scroll state for the review list.
//!
//! The cursor is clamped whenever the list is replaced, so a refresh that
//! returns fewer reviews never leaves it pointing past the end.

/// Cursor position and scroll window within a list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    /// Current cursor position (0-indexed).
    pub cursor_position: usize,
    /// Index of the first visible row.
    pub scroll_offset: usize,
}

impl ListCursor {
    /// Creates a cursor at the top of the list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamps the cursor to the valid range for `count` items.
    pub const fn clamp(&mut self, count: usize) {
        if count == 0 {
            self.cursor_position = 0;
            self.scroll_offset = 0;
        } else if self.cursor_position >= count {
            self.cursor_position = count.saturating_sub(1);
        }
    }

    /// Moves the cursor up by `step` rows.
    pub const fn up(&mut self, step: usize) {
        self.cursor_position = self.cursor_position.saturating_sub(step);
    }

    /// Moves the cursor down by `step` rows, stopping at the last item.
    pub fn down(&mut self, step: usize, count: usize) {
        let max_index = count.saturating_sub(1);
        self.cursor_position = self.cursor_position.saturating_add(step).min(max_index);
    }

    /// Moves the cursor to the first item.
    pub const fn home(&mut self) {
        self.cursor_position = 0;
        self.scroll_offset = 0;
    }

    /// Moves the cursor to the last item.
    pub const fn end(&mut self, count: usize) {
        self.cursor_position = count.saturating_sub(1);
    }

    /// Adjusts the scroll offset so the cursor stays inside the viewport.
    pub const fn ensure_visible(&mut self, visible_height: usize) {
        if self.cursor_position < self.scroll_offset {
            self.scroll_offset = self.cursor_position;
            return;
        }

        let viewport_end = self.scroll_offset.saturating_add(visible_height);
        if self.cursor_position >= viewport_end {
            self.scroll_offset = self
                .cursor_position
                .saturating_sub(visible_height.saturating_sub(1));
        }
    }
}
