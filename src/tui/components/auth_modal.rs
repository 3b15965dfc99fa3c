//! Auth modal component.
//!
//! Renders the login/signup dialog as a bordered box. Column widths are
//! measured with `unicode-width`, since Hangul labels take two cells. Error
//! and hint text wrap onto extra rows so the whole message stays visible.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::text_wrap::wrap_with_prefix;
use crate::tui::state::{AuthField, AuthModalState, AuthMode};

/// Inner width of the dialog box in terminal cells.
const INNER_WIDTH: usize = 40;

/// Submit button label while a submission is running.
pub const SUBMITTING_LABEL: &str = "처리 중...";

const USERNAME_LABEL: &str = "아이디";
const PASSWORD_LABEL: &str = "비밀번호";
const KEY_HELP: &str = "Tab 이동  F2 전환  Enter 제출  Esc 닫기";

/// Component for displaying the auth modal.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthModalComponent;

impl AuthModalComponent {
    /// Renders the modal, or nothing when it is closed.
    #[must_use]
    pub fn view(state: &AuthModalState) -> String {
        if !state.is_open() {
            return String::new();
        }

        let mut lines = Vec::new();
        lines.push(title_line(state.mode()));
        lines.push(mode_toggle_line(state.mode()));
        if let Some(message) = state.error_message() {
            lines.extend(wrap_with_prefix("! ", message, INNER_WIDTH));
        }
        lines.push(field_line(
            USERNAME_LABEL,
            state.username(),
            state.focus() == AuthField::Username,
        ));
        lines.push(field_line(
            PASSWORD_LABEL,
            &"*".repeat(state.password_len()),
            state.focus() == AuthField::Password,
        ));
        if let Some(hint) = state.hint() {
            lines.extend(wrap_with_prefix("  ", &hint.to_string(), INNER_WIDTH));
        }
        let submit = if state.is_submitting() {
            SUBMITTING_LABEL
        } else {
            state.mode().label()
        };
        lines.push(format!("[ {submit} ]"));
        lines.push(KEY_HELP.to_owned());

        render_box(&lines)
    }
}

fn title_line(mode: AuthMode) -> String {
    let title = mode.label();
    let gap = INNER_WIDTH.saturating_sub(title.width() + "✕".width());
    format!("{title}{}✕", " ".repeat(gap))
}

fn mode_toggle_line(mode: AuthMode) -> String {
    let marker = |candidate: AuthMode| if candidate == mode { "▸" } else { " " };
    format!(
        "{}[{}] {}[{}]",
        marker(AuthMode::Login),
        AuthMode::Login.label(),
        marker(AuthMode::Signup),
        AuthMode::Signup.label(),
    )
}

fn field_line(label: &str, value: &str, focused: bool) -> String {
    let marker = if focused { ">" } else { " " };
    let cursor = if focused { "_" } else { "" };
    let label_pad = " ".repeat(PASSWORD_LABEL.width().saturating_sub(label.width()));
    format!("{marker} {label}{label_pad}: {value}{cursor}")
}

fn render_box(lines: &[String]) -> String {
    let border = "─".repeat(INNER_WIDTH + 2);
    let mut output = format!("┌{border}┐\n");
    for line in lines {
        output.push_str("│ ");
        output.push_str(&fit_to_width(line, INNER_WIDTH));
        output.push_str(" │\n");
    }
    output.push_str(&format!("└{border}┘\n"));
    output
}

/// Pads or cuts `text` so it occupies exactly `width` cells.
fn fit_to_width(text: &str, width: usize) -> String {
    let mut fitted = String::new();
    let mut used = 0;
    for character in text.chars() {
        let char_width = character.width().unwrap_or(0);
        if used + char_width > width {
            break;
        }
        fitted.push(character);
        used += char_width;
    }
    fitted.push_str(&" ".repeat(width - used));
    fitted
}
