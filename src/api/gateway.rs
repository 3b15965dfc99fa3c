//! Gateways for calling the community REST API.
//!
//! [`CommunityGateway`] is the seam the rest of the crate talks to; tests
//! mock it. [`HttpCommunityGateway`] issues real requests through reqwest
//! with a cookie store, so a session cookie set by login is sent on every
//! later call. Every operation is a single request: no retries, no timeout,
//! no caching, and concurrent identical calls each reach the network.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::endpoint::{self, ApiBaseUrl};
use super::error::{ApiError, RequestError, RequestMethod};
use super::models::{
    AuthUser, CommunityComment, CommunityCommentBody, CommunityPost, CommunityPostBody,
    Credentials, EmptyBody, GalleryPost, LogoutAck, NewCommunityComment, NewCommunityPost,
    NewReview, NewServer, Review, Server, User, UserId,
};
use super::session_id::parse_session_id;

/// Gateway that can read and create community site entities.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommunityGateway: Send + Sync {
    /// Fetch the user roster.
    async fn fetch_users(&self) -> Result<Vec<User>, ApiError>;

    /// Fetch the identifier of the session's user.
    ///
    /// `Ok(None)` means the body held no integer (anonymous session).
    async fn fetch_id(&self) -> Result<Option<UserId>, ApiError>;

    /// Fetch the server listing.
    async fn fetch_servers(&self) -> Result<Vec<Server>, ApiError>;

    /// Fetch all reviews.
    async fn fetch_reviews(&self) -> Result<Vec<Review>, ApiError>;

    /// Fetch gallery posts.
    async fn fetch_gallery_posts(&self) -> Result<Vec<GalleryPost>, ApiError>;

    /// Fetch community posts.
    async fn fetch_community_posts(&self) -> Result<Vec<CommunityPost>, ApiError>;

    /// Fetch community comments.
    async fn fetch_community_comments(&self) -> Result<Vec<CommunityComment>, ApiError>;

    /// Register a server.
    async fn create_server(&self, server: &NewServer) -> Result<Server, ApiError>;

    /// Submit a review.
    async fn create_review(&self, review: &NewReview) -> Result<Review, ApiError>;

    /// Publish a community post. Only `serverId`, `title` and `content` are
    /// sent.
    async fn create_community_post(
        &self,
        post: &NewCommunityPost,
    ) -> Result<CommunityPost, ApiError>;

    /// Publish a comment. Only `postId` and `content` are sent.
    async fn create_community_comment(
        &self,
        comment: &NewCommunityComment,
    ) -> Result<CommunityComment, ApiError>;

    /// Start a session.
    async fn auth_login(&self, credentials: &Credentials) -> Result<AuthUser, ApiError>;

    /// Register an account and start a session.
    async fn auth_signup(&self, credentials: &Credentials) -> Result<AuthUser, ApiError>;

    /// End the session.
    async fn auth_logout(&self) -> Result<LogoutAck, ApiError>;
}

/// reqwest-backed gateway.
#[derive(Debug, Clone)]
pub struct HttpCommunityGateway {
    client: Client,
    base_url: ApiBaseUrl,
}

impl HttpCommunityGateway {
    /// Creates a gateway from an existing reqwest client.
    ///
    /// The client should have a cookie store enabled for session auth.
    #[must_use]
    pub const fn new(client: Client, base_url: ApiBaseUrl) -> Self {
        Self { client, base_url }
    }

    /// Builds a cookie-aware client for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] when reqwest cannot construct the
    /// client (for example when no TLS backend is available).
    pub fn for_base_url(base_url: ApiBaseUrl) -> Result<Self, ApiError> {
        let client = Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|error| ApiError::Configuration {
                message: format!("failed to configure HTTP client: {error}"),
            })?;
        Ok(Self::new(client, base_url))
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub const fn base_url(&self) -> &ApiBaseUrl {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let body = self.get_bytes(endpoint).await?;
        decode_json(endpoint, &body)
    }

    async fn get_bytes(&self, endpoint: &str) -> Result<Vec<u8>, ApiError> {
        tracing::debug!(method = "GET", endpoint, "calling community API");
        let response = self
            .client
            .get(self.base_url.join(endpoint))
            .send()
            .await
            .map_err(|error| map_transport_error(endpoint, &error))?;

        read_success_body(RequestMethod::Get, endpoint, response).await
    }

    async fn post_json<T, B>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        tracing::debug!(method = "POST", endpoint, "calling community API");
        // `.json()` also sets `Content-Type: application/json`.
        let response = self
            .client
            .post(self.base_url.join(endpoint))
            .json(body)
            .send()
            .await
            .map_err(|error| map_transport_error(endpoint, &error))?;

        let bytes = read_success_body(RequestMethod::Post, endpoint, response).await?;
        decode_json(endpoint, &bytes)
    }
}

#[async_trait]
impl CommunityGateway for HttpCommunityGateway {
    async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json(endpoint::USERS).await
    }

    async fn fetch_id(&self) -> Result<Option<UserId>, ApiError> {
        let body = self.get_bytes(endpoint::AUTH_ME).await?;
        Ok(parse_session_id(&body))
    }

    async fn fetch_servers(&self) -> Result<Vec<Server>, ApiError> {
        self.get_json(endpoint::SERVERS).await
    }

    async fn fetch_reviews(&self) -> Result<Vec<Review>, ApiError> {
        self.get_json(endpoint::REVIEWS).await
    }

    async fn fetch_gallery_posts(&self) -> Result<Vec<GalleryPost>, ApiError> {
        self.get_json(endpoint::GALLERY).await
    }

    async fn fetch_community_posts(&self) -> Result<Vec<CommunityPost>, ApiError> {
        self.get_json(endpoint::COMMUNITY_POSTS).await
    }

    async fn fetch_community_comments(&self) -> Result<Vec<CommunityComment>, ApiError> {
        self.get_json(endpoint::COMMUNITY_COMMENTS).await
    }

    async fn create_server(&self, server: &NewServer) -> Result<Server, ApiError> {
        self.post_json(endpoint::SERVERS, server).await
    }

    async fn create_review(&self, review: &NewReview) -> Result<Review, ApiError> {
        self.post_json(endpoint::REVIEWS, review).await
    }

    async fn create_community_post(
        &self,
        post: &NewCommunityPost,
    ) -> Result<CommunityPost, ApiError> {
        let body = CommunityPostBody::from(post);
        self.post_json(endpoint::COMMUNITY_POSTS, &body).await
    }

    async fn create_community_comment(
        &self,
        comment: &NewCommunityComment,
    ) -> Result<CommunityComment, ApiError> {
        let body = CommunityCommentBody::from(comment);
        self.post_json(endpoint::COMMUNITY_COMMENTS, &body).await
    }

    async fn auth_login(&self, credentials: &Credentials) -> Result<AuthUser, ApiError> {
        self.post_json(endpoint::AUTH_LOGIN, credentials).await
    }

    async fn auth_signup(&self, credentials: &Credentials) -> Result<AuthUser, ApiError> {
        self.post_json(endpoint::AUTH_SIGNUP, credentials).await
    }

    async fn auth_logout(&self) -> Result<LogoutAck, ApiError> {
        self.post_json(endpoint::AUTH_LOGOUT, &EmptyBody {}).await
    }
}

/// Returns the body of a 2xx response, or a [`RequestError`] otherwise.
///
/// The error body is best effort: a failed read becomes an empty string.
async fn read_success_body(
    method: RequestMethod,
    endpoint: &str,
    response: Response,
) -> Result<Vec<u8>, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(
            endpoint,
            status = status.as_u16(),
            "community API returned an error status"
        );
        return Err(ApiError::Request(RequestError {
            method,
            endpoint: endpoint.to_owned(),
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_owned(),
            body,
        }));
    }

    response
        .bytes()
        .await
        .map(|bytes| bytes.to_vec())
        .map_err(|error| map_transport_error(endpoint, &error))
}

fn decode_json<T: DeserializeOwned>(endpoint: &str, body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|error| ApiError::Parse {
        endpoint: endpoint.to_owned(),
        message: error.to_string(),
    })
}

fn map_transport_error(endpoint: &str, error: &reqwest::Error) -> ApiError {
    tracing::warn!(endpoint, "community API request did not complete: {error}");
    ApiError::Transport {
        endpoint: endpoint.to_owned(),
        message: error.to_string(),
    }
}

#[cfg(test)]
#[path = "gateway_tests.rs"]
mod tests;
