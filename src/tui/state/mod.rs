//! State management for the community TUI.
//!
//! This module provides the list cursor used by the review list and the
//! form state behind the auth modal.

mod auth_form;
mod list_cursor;

pub use auth_form::{
    AuthField, AuthModalState, AuthMode, AuthOutcome, AuthPhase, CredentialError,
    PASSWORD_LENGTH, SubmitBlocked, Submission, USERNAME_LENGTH, validate,
};
pub use list_cursor::ListCursor;
