//! Decoding of the `/api/auth/me` response.
//!
//! The endpoint answers with a bare integer. Depending on the server it is a
//! JSON number, a JSON string, or plain text, so the body is read leniently
//! and interpreted like JavaScript's `parseInt`: leading whitespace, an
//! optional sign, then as many decimal digits as are present.

use serde_json::Value;

use super::models::UserId;

/// Extracts the session user id from a raw response body.
///
/// Returns `None` when the body has no leading integer, which the API uses
/// for anonymous sessions, or when the value overflows.
///
/// Unlike `parseInt`, a negative value such as `-3` also yields `None`:
/// user ids are unsigned, so a negative id is treated as no session rather
/// than wrapped or rejected as an error. `-0` still parses as `0`.
#[must_use]
pub fn parse_session_id(body: &[u8]) -> Option<UserId> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Number(number)) => parse_leading_integer(&number.to_string()),
        Ok(Value::String(text)) => parse_leading_integer(&text),
        Ok(_) => None,
        Err(_) => std::str::from_utf8(body).ok().and_then(parse_leading_integer),
    }
}

/// `parseInt`-style decimal prefix parse.
fn parse_leading_integer(text: &str) -> Option<UserId> {
    let trimmed = text.trim_start();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digit_count = unsigned
        .chars()
        .take_while(char::is_ascii_digit)
        .count();
    let digits = unsigned.get(..digit_count)?;
    if digits.is_empty() {
        return None;
    }

    let value = digits.parse::<UserId>().ok()?;
    if negative && value != 0 {
        return None;
    }
    Some(value)
}
