//! Login and signup form state for the auth modal.
//!
//! The form moves through [`AuthPhase`]: it opens `Idle`, enters
//! `Submitting` once local validation passes, and then either closes
//! (clearing the credentials) or settles into `Error` with the form still
//! populated so the user can retry. Each submission carries a ticket and a
//! cancellation signal; closing the modal cancels it and any result that
//! arrives for an older ticket is ignored.

use std::ops::RangeInclusive;

use thiserror::Error;
use zeroize::Zeroizing;

use crate::api::{Credentials, Describe};
use crate::tui::cancel::{CancelHandle, CancelSignal, cancel_pair};

/// Accepted username length in characters.
pub const USERNAME_LENGTH: RangeInclusive<usize> = 2..=32;

/// Accepted password length in characters.
pub const PASSWORD_LENGTH: RangeInclusive<usize> = 4..=64;

/// Which credential call the form submits to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    /// Sign in to an existing account.
    #[default]
    Login,
    /// Create a new account.
    Signup,
}

impl AuthMode {
    /// Label shown on the toggle, the title, and the idle submit button.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Login => "로그인",
            Self::Signup => "회원가입",
        }
    }

    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Signup,
            Self::Signup => Self::Login,
        }
    }
}

/// Lifecycle of the modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthPhase {
    /// Not shown.
    #[default]
    Closed,
    /// Shown and accepting input.
    Idle,
    /// Waiting on the login or signup call.
    Submitting,
    /// Shown with the message from the last failed submission.
    Error(String),
}

/// Input field that receives typed characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthField {
    /// Login name.
    #[default]
    Username,
    /// Masked password.
    Password,
}

/// Local validation failure that blocks a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CredentialError {
    /// Username left blank.
    #[error("아이디를 입력해주세요.")]
    UsernameMissing,
    /// Username outside the accepted length.
    #[error("아이디는 2~32자여야 합니다.")]
    UsernameLength,
    /// Password left blank.
    #[error("비밀번호를 입력해주세요.")]
    PasswordMissing,
    /// Password outside the accepted length.
    #[error("비밀번호는 4~64자여야 합니다.")]
    PasswordLength,
}

/// Why [`AuthModalState::begin_submit`] did not start a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// The modal is closed.
    Closed,
    /// A submission is already running.
    InFlight,
    /// The form failed validation; the hint is shown.
    Invalid(CredentialError),
}

/// A submission handed to the caller to execute.
#[derive(Debug)]
pub struct Submission {
    /// Identifies the submission when its result is reported back.
    pub ticket: u64,
    /// Login or signup.
    pub mode: AuthMode,
    /// Snapshot of the form.
    pub credentials: Credentials,
    /// Fires when the modal is closed before the call settles.
    pub signal: CancelSignal,
}

/// What the parent should do after a submission result is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    /// The result belonged to a cancelled or superseded submission.
    Ignored,
    /// The call failed; the modal shows the error.
    StillOpen,
    /// The call succeeded; the form was cleared and the modal closed.
    Closed,
}

struct InFlight {
    ticket: u64,
    handle: CancelHandle,
}

/// Editable state behind the auth modal.
#[derive(Default)]
pub struct AuthModalState {
    mode: AuthMode,
    username: String,
    password: Zeroizing<String>,
    phase: AuthPhase,
    focus: AuthField,
    hint: Option<CredentialError>,
    next_ticket: u64,
    in_flight: Option<InFlight>,
}

impl std::fmt::Debug for AuthModalState {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("AuthModalState")
            .field("mode", &self.mode)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("phase", &self.phase)
            .field("focus", &self.focus)
            .field("hint", &self.hint)
            .field(
                "in_flight",
                &self.in_flight.as_ref().map(|in_flight| in_flight.ticket),
            )
            .finish()
    }
}

impl AuthModalState {
    /// Creates a closed modal in login mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode.
    #[must_use]
    pub const fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> &AuthPhase {
        &self.phase
    }

    /// Whether the modal is shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase != AuthPhase::Closed
    }

    /// Whether a submission is running.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == AuthPhase::Submitting
    }

    /// Username as typed.
    #[must_use]
    pub const fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Number of password characters, for the masked field.
    #[must_use]
    pub fn password_len(&self) -> usize {
        self.password.chars().count()
    }

    /// Field receiving input.
    #[must_use]
    pub const fn focus(&self) -> AuthField {
        self.focus
    }

    /// Validation hint from the last blocked submission.
    #[must_use]
    pub const fn hint(&self) -> Option<CredentialError> {
        self.hint
    }

    /// Error message shown below the mode toggle.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            AuthPhase::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Shows the modal. Reopening keeps whatever was typed before.
    pub fn open(&mut self) {
        if self.phase == AuthPhase::Closed {
            self.phase = AuthPhase::Idle;
        }
    }

    /// Hides the modal and cancels a running submission.
    pub fn close(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.handle.cancel();
        }
        self.phase = AuthPhase::Closed;
        self.hint = None;
    }

    /// Switches mode. Ignored while closed or submitting.
    pub fn set_mode(&mut self, mode: AuthMode) {
        if matches!(self.phase, AuthPhase::Idle | AuthPhase::Error(_)) {
            self.mode = mode;
        }
    }

    /// Switches to the other mode. Ignored while closed or submitting.
    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    /// Moves focus to the other field.
    pub const fn focus_next(&mut self) {
        self.focus = match self.focus {
            AuthField::Username => AuthField::Password,
            AuthField::Password => AuthField::Username,
        };
    }

    /// Appends a character to the focused field up to its maximum length.
    pub fn input_char(&mut self, character: char) {
        if !self.accepts_input() || character.is_control() {
            return;
        }
        let (buffer, limit) = match self.focus {
            AuthField::Username => (&mut self.username, *USERNAME_LENGTH.end()),
            AuthField::Password => (&mut *self.password, *PASSWORD_LENGTH.end()),
        };
        if buffer.chars().count() < limit {
            buffer.push(character);
        }
    }

    /// Removes the last character of the focused field.
    pub fn backspace(&mut self) {
        if !self.accepts_input() {
            return;
        }
        match self.focus {
            AuthField::Username => {
                self.username.pop();
            }
            AuthField::Password => {
                self.password.pop();
            }
        }
    }

    /// Validates the form and starts a submission.
    ///
    /// A shown error is cleared once the submission starts.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitBlocked`] when the modal is closed, a submission is
    /// already running, or the form fails validation.
    pub fn begin_submit(&mut self) -> Result<Submission, SubmitBlocked> {
        match self.phase {
            AuthPhase::Closed => return Err(SubmitBlocked::Closed),
            AuthPhase::Submitting => return Err(SubmitBlocked::InFlight),
            AuthPhase::Idle | AuthPhase::Error(_) => {}
        }

        if let Err(error) = validate(&self.username, &self.password) {
            self.hint = Some(error);
            return Err(SubmitBlocked::Invalid(error));
        }

        self.hint = None;
        self.next_ticket = self.next_ticket.wrapping_add(1);
        let ticket = self.next_ticket;
        let (handle, signal) = cancel_pair();
        self.in_flight = Some(InFlight { ticket, handle });
        self.phase = AuthPhase::Submitting;

        Ok(Submission {
            ticket,
            mode: self.mode,
            credentials: Credentials::new(self.username.clone(), self.password.as_str()),
            signal,
        })
    }

    /// Applies the result of submission `ticket`.
    ///
    /// Results for anything but the running submission are ignored. On
    /// success the fields are cleared before the modal closes.
    pub fn finish_submit<E: Describe>(&mut self, ticket: u64, result: Result<(), E>) -> AuthOutcome {
        let is_current = self
            .in_flight
            .as_ref()
            .is_some_and(|in_flight| in_flight.ticket == ticket);
        if !is_current || self.phase != AuthPhase::Submitting {
            return AuthOutcome::Ignored;
        }
        self.in_flight = None;

        match result {
            Ok(()) => {
                self.username.clear();
                self.password.clear();
                self.focus = AuthField::Username;
                self.phase = AuthPhase::Closed;
                AuthOutcome::Closed
            }
            Err(error) => {
                self.phase = AuthPhase::Error(error.describe());
                AuthOutcome::StillOpen
            }
        }
    }

    fn accepts_input(&self) -> bool {
        matches!(self.phase, AuthPhase::Idle | AuthPhase::Error(_))
    }
}

/// Checks both fields against the required lengths.
///
/// # Errors
///
/// Returns the first failing rule, username before password.
pub fn validate(username: &str, password: &str) -> Result<(), CredentialError> {
    let username_len = username.chars().count();
    if username_len == 0 {
        return Err(CredentialError::UsernameMissing);
    }
    if !USERNAME_LENGTH.contains(&username_len) {
        return Err(CredentialError::UsernameLength);
    }
    let password_len = password.chars().count();
    if password_len == 0 {
        return Err(CredentialError::PasswordMissing);
    }
    if !PASSWORD_LENGTH.contains(&password_len) {
        return Err(CredentialError::PasswordLength);
    }
    Ok(())
}

#[cfg(test)]
#[path = "auth_form_tests.rs"]
mod tests;
