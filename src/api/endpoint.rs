//! Endpoint paths and the validated API base URL.

use url::Url;

use super::error::ApiError;

/// `GET` the user roster.
pub const USERS: &str = "/api/users/";
/// `GET` the identifier of the session's user.
pub const AUTH_ME: &str = "/api/auth/me";
/// `GET` the server listing, `POST` a new server.
pub const SERVERS: &str = "/api/servers";
/// `GET` all reviews, `POST` a new review.
pub const REVIEWS: &str = "/api/reviews";
/// `GET` gallery posts.
pub const GALLERY: &str = "/api/gallery";
/// `GET` community posts, `POST` a new post.
pub const COMMUNITY_POSTS: &str = "/api/community/posts";
/// `GET` community comments, `POST` a new comment.
pub const COMMUNITY_COMMENTS: &str = "/api/community/comments";
/// `POST` credentials to start a session.
pub const AUTH_LOGIN: &str = "/api/auth/login";
/// `POST` credentials to register and start a session.
pub const AUTH_SIGNUP: &str = "/api/auth/signup";
/// `POST` to end the session.
pub const AUTH_LOGOUT: &str = "/api/auth/logout";

/// Absolute base URL every endpoint path is appended to.
///
/// Stored without a trailing slash so `base + "/api/..."` never doubles it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBaseUrl(String);

impl ApiBaseUrl {
    /// Validates an absolute `http` or `https` URL.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] when the value does not parse, is not
    /// absolute, or uses another scheme.
    pub fn parse(value: &str) -> Result<Self, ApiError> {
        let trimmed = value.trim();
        let parsed =
            Url::parse(trimmed).map_err(|error| ApiError::InvalidUrl(format!("{trimmed}: {error}")))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidUrl(format!(
                "{trimmed}: scheme must be http or https"
            )));
        }

        Ok(Self(trimmed.trim_end_matches('/').to_owned()))
    }

    /// Joins an endpoint path onto the base URL.
    #[must_use]
    pub fn join(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.0)
    }

    /// Base URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for ApiBaseUrl {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
