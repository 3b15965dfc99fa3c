//! Typed client for the community site REST API.
//!
//! Each operation binds one HTTP method and path to a request and response
//! shape. Reads are `GET` requests, writes are `POST` requests with a JSON
//! body; both send the session cookie and fail with [`ApiError`] on any
//! non-2xx status. Nothing is retried or cached.

pub mod endpoint;
pub mod error;
pub mod gateway;
pub mod intake;
pub mod models;
pub mod session_id;

pub use endpoint::ApiBaseUrl;
pub use error::{ApiError, Describe, FALLBACK_ERROR_MESSAGE, RequestError, RequestMethod};
pub use gateway::{CommunityGateway, HttpCommunityGateway};
pub use intake::{ReviewFeed, ReviewFeedIntake, SiteSummary};
pub use models::{
    AuthUser, CommunityComment, CommunityPost, Credentials, GalleryPost, LogoutAck,
    NewCommunityComment, NewCommunityPost, NewReview, NewServer, Rating, Review, Server, User,
    UserId,
};

#[cfg(test)]
pub use gateway::MockCommunityGateway;
