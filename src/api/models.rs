//! Data models exchanged with the community API.
//!
//! Entity types mirror what the API returns. Creation payloads are separate
//! types without the server-assigned attributes (identifiers, timestamps and
//! engagement counters), so a request can never carry them. All field names
//! are camelCase on the wire.

use serde::{Deserialize, Serialize};
use serde_json::Number;
use zeroize::Zeroizing;

/// Server-assigned user identifier.
pub type UserId = u64;

/// A registered site member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Identity key.
    pub id: UserId,
    /// Display and login name.
    pub username: String,
}

/// A listed game server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Server {
    /// Server-assigned identifier.
    pub id: u64,
    /// Server-assigned position in the listing.
    pub rank: u32,
    /// Server-assigned count of players currently online.
    pub online_players: u32,
    /// Fields supplied when the server was registered.
    #[serde(flatten)]
    pub listing: NewServer,
}

/// Caller-supplied fields for registering a server.
///
/// Sent as the body of `POST /api/servers`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewServer {
    /// Server name.
    pub name: String,
    /// Connection address (host or host:port).
    pub address: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Game version the server runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Player capacity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_players: Option<u32>,
    /// Search tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Homepage or community link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Star rating exactly as the API sent it.
///
/// Any JSON number is accepted, including fractions and values outside
/// `1..=5`; the range is only applied when the stars are drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(Number);

impl Rating {
    /// Rating as a float, or `None` if it cannot be represented as one.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.0.as_f64()
    }

    /// Raw JSON number.
    #[must_use]
    pub const fn as_number(&self) -> &Number {
        &self.0
    }
}

impl From<u8> for Rating {
    fn from(stars: u8) -> Self {
        Self(Number::from(stars))
    }
}

/// A user's rating of a server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Server-assigned identifier.
    pub id: u64,
    /// Author, joined against the user roster when rendering.
    pub user: UserId,
    /// Star rating, expected in `1..=5` but not checked.
    pub rating: Rating,
    /// Review text.
    pub comment: String,
    /// Server-assigned RFC 3339 creation time.
    pub timestamp: String,
}

/// Caller-supplied fields for `POST /api/reviews`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReview {
    /// Author identifier.
    pub user: UserId,
    /// Star rating.
    pub rating: Rating,
    /// Review text.
    pub comment: String,
}

/// An image shared in the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryPost {
    /// Server-assigned identifier.
    pub id: u64,
    /// Uploader.
    pub user: UserId,
    /// Server the image belongs to, if any.
    #[serde(default)]
    pub server_id: Option<u64>,
    /// Caption.
    #[serde(default)]
    pub title: String,
    /// Location of the image.
    pub image_url: String,
    /// Server-assigned RFC 3339 creation time.
    pub timestamp: String,
}

/// A community board post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityPost {
    /// Server-assigned identifier.
    pub id: u64,
    /// Server the post is filed under.
    pub server_id: u64,
    /// Denormalized author, when the API embeds it.
    #[serde(default)]
    pub user: Option<User>,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Server-assigned RFC 3339 creation time.
    pub timestamp: String,
    /// Server-maintained view counter.
    #[serde(default)]
    pub views: u64,
    /// Server-maintained recommendation counter.
    #[serde(default)]
    pub recommendations: u64,
    /// Server-maintained comment counter.
    #[serde(default)]
    pub comment_count: u64,
}

/// Caller-facing fields for a new community post.
///
/// Carries the view-model's embedded author; only `serverId`, `title` and
/// `content` are transmitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCommunityPost {
    /// Server the post is filed under.
    pub server_id: u64,
    /// Denormalized author held by the view-model.
    pub user: Option<User>,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
}

/// A comment on a community post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityComment {
    /// Server-assigned identifier.
    pub id: u64,
    /// Post being commented on.
    pub post_id: u64,
    /// Denormalized author, when the API embeds it.
    #[serde(default)]
    pub user: Option<User>,
    /// Comment body.
    pub content: String,
    /// Server-assigned RFC 3339 creation time.
    pub timestamp: String,
}

/// Caller-facing fields for a new comment; only `postId` and `content` are
/// transmitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCommunityComment {
    /// Post being commented on.
    pub post_id: u64,
    /// Denormalized author held by the view-model.
    pub user: Option<User>,
    /// Comment body.
    pub content: String,
}

/// Request body actually sent for a new community post.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CommunityPostBody<'a> {
    server_id: u64,
    title: &'a str,
    content: &'a str,
}

impl<'a> From<&'a NewCommunityPost> for CommunityPostBody<'a> {
    fn from(post: &'a NewCommunityPost) -> Self {
        Self {
            server_id: post.server_id,
            title: post.title.as_str(),
            content: post.content.as_str(),
        }
    }
}

/// Request body actually sent for a new comment.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CommunityCommentBody<'a> {
    post_id: u64,
    content: &'a str,
}

impl<'a> From<&'a NewCommunityComment> for CommunityCommentBody<'a> {
    fn from(comment: &'a NewCommunityComment) -> Self {
        Self {
            post_id: comment.post_id,
            content: comment.content.as_str(),
        }
    }
}

/// Username and password sent to the login and signup endpoints.
///
/// The password is wiped from memory when the value is dropped.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    username: String,
    password: Zeroizing<String>,
}

impl Credentials {
    /// Bundles a username and password.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Login name.
    #[must_use]
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Plain-text password.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Session identity returned by login and signup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthUser {
    /// Signed-in user's identifier.
    pub id: UserId,
    /// Signed-in user's name.
    pub username: String,
}

/// Acknowledgement returned by logout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LogoutAck {
    /// Whether the session was ended.
    pub ok: bool,
}

/// Empty JSON object sent as the logout body.
#[derive(Debug, Serialize)]
pub(crate) struct EmptyBody {}
