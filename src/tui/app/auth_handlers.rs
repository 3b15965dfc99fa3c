//! Auth modal and session handlers for the community TUI.
//!
//! Submissions run as commands wrapped in the modal's cancellation signal,
//! so closing the modal drops the request and no message comes back. A
//! successful submission closes the modal and refetches the session id.

use std::any::Any;
use std::sync::Arc;

use bubbletea_rs::Cmd;

use super::CommunityApp;
use super::data_handlers::NOT_CONNECTED_MESSAGE;
use crate::api::{ApiError, AuthUser, CommunityGateway, LogoutAck};
use crate::tui::cancel::run_until_cancelled;
use crate::tui::messages::AppMsg;
use crate::tui::state::{AuthMode, AuthOutcome, SubmitBlocked, Submission};

impl CommunityApp {
    /// Dispatches auth modal and session messages to their handlers.
    pub(super) fn handle_auth_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::OpenAuth => {
                self.auth.open();
                None
            }
            AppMsg::CloseAuth => {
                self.auth.close();
                None
            }
            AppMsg::AuthInput(character) => {
                self.auth.input_char(*character);
                None
            }
            AppMsg::AuthBackspace => {
                self.auth.backspace();
                None
            }
            AppMsg::AuthFocusNext => {
                self.auth.focus_next();
                None
            }
            AppMsg::AuthToggleMode => {
                self.auth.toggle_mode();
                None
            }
            AppMsg::AuthSubmit => self.handle_auth_submit(),
            AppMsg::AuthSettled { ticket, result } => self.handle_auth_settled(*ticket, result),
            AppMsg::LogoutRequested => self.handle_logout_requested(),
            AppMsg::LoggedOut(result) => self.handle_logged_out(result),
            _ => {
                // Unreachable: caller filters to auth messages.
                None
            }
        }
    }

    fn handle_auth_submit(&mut self) -> Option<Cmd> {
        let Some(gateway) = self.gateway() else {
            self.error = Some(NOT_CONNECTED_MESSAGE.to_owned());
            return None;
        };
        match self.auth.begin_submit() {
            Ok(submission) => Some(submit_cmd(gateway, submission)),
            Err(SubmitBlocked::Invalid(reason)) => {
                tracing::debug!(%reason, "auth submission blocked by validation");
                None
            }
            Err(SubmitBlocked::Closed | SubmitBlocked::InFlight) => None,
        }
    }

    fn handle_auth_settled(
        &mut self,
        ticket: u64,
        result: &Result<AuthUser, ApiError>,
    ) -> Option<Cmd> {
        let outcome = self
            .auth
            .finish_submit(ticket, result.as_ref().map(|_| ()).map_err(Clone::clone));
        match outcome {
            AuthOutcome::Closed => {
                if let Ok(user) = result {
                    tracing::debug!(user_id = user.id, "signed in");
                }
                self.session_cmd()
            }
            AuthOutcome::StillOpen => {
                if let Err(error) = result {
                    tracing::warn!(%error, "auth submission failed");
                }
                None
            }
            AuthOutcome::Ignored => {
                tracing::debug!(ticket, "ignoring result for a cancelled submission");
                None
            }
        }
    }

    fn handle_logout_requested(&mut self) -> Option<Cmd> {
        let Some(gateway) = self.gateway() else {
            self.error = Some(NOT_CONNECTED_MESSAGE.to_owned());
            return None;
        };
        Some(Box::pin(async move {
            let result = gateway.auth_logout().await;
            Some(Box::new(AppMsg::LoggedOut(result)) as Box<dyn Any + Send>)
        }))
    }

    fn handle_logged_out(&mut self, result: &Result<LogoutAck, ApiError>) -> Option<Cmd> {
        match result {
            Ok(ack) if ack.ok => {
                self.session = None;
                None
            }
            Ok(_) => self.session_cmd(),
            Err(error) => {
                tracing::warn!(%error, "logout failed");
                self.error = Some(error.to_string());
                None
            }
        }
    }
}

fn submit_cmd(gateway: Arc<dyn CommunityGateway>, submission: Submission) -> Cmd {
    let Submission {
        ticket,
        mode,
        credentials,
        signal,
    } = submission;
    Box::pin(async move {
        let call = async {
            match mode {
                AuthMode::Login => gateway.auth_login(&credentials).await,
                AuthMode::Signup => gateway.auth_signup(&credentials).await,
            }
        };
        let result = run_until_cancelled(signal, call).await?;
        Some(Box::new(AppMsg::AuthSettled { ticket, result }) as Box<dyn Any + Send>)
    })
}
