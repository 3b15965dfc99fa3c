//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the application's
//! update function. Messages represent user actions, async command results,
//! and system events.

use crate::api::{ApiError, AuthUser, LogoutAck, ReviewFeed, UserId};

/// Messages for the community TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Navigation
    /// Move cursor up one review.
    CursorUp,
    /// Move cursor down one review.
    CursorDown,
    /// Move cursor up one page.
    PageUp,
    /// Move cursor down one page.
    PageDown,
    /// Move cursor to first review.
    Home,
    /// Move cursor to last review.
    End,

    // Data loading
    /// Startup tick that triggers the first load.
    Initialized,
    /// Request a reload of the reviews and the session.
    RefreshRequested,
    /// Reviews, roster and session finished loading.
    Refreshed {
        /// Review feed, or the failure that stopped it.
        feed: Result<ReviewFeed, ApiError>,
        /// Signed-in user id, if any.
        session: Result<Option<UserId>, ApiError>,
    },
    /// The current user id was refetched.
    SessionResolved(Result<Option<UserId>, ApiError>),

    // Auth modal
    /// Show the auth modal.
    OpenAuth,
    /// Hide the auth modal, cancelling a running submission.
    CloseAuth,
    /// Character typed into the focused field.
    AuthInput(char),
    /// Delete the last character of the focused field.
    AuthBackspace,
    /// Move focus to the other field.
    AuthFocusNext,
    /// Switch between login and signup.
    AuthToggleMode,
    /// Submit the form.
    AuthSubmit,
    /// A login or signup call settled.
    AuthSettled {
        /// Submission the result belongs to.
        ticket: u64,
        /// Signed-in identity, or the failure.
        result: Result<AuthUser, ApiError>,
    },

    // Session
    /// End the current session.
    LogoutRequested,
    /// Logout call settled.
    LoggedOut(Result<LogoutAck, ApiError>),

    // Application lifecycle
    /// Quit the application.
    Quit,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}
