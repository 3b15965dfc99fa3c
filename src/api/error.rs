//! Error types exposed by the community API client.

use std::fmt;

use thiserror::Error;

/// Message shown to users when a failure carries no readable text.
pub const FALLBACK_ERROR_MESSAGE: &str = "요청 중 오류가 발생했습니다.";

/// HTTP verb used by a failed request, kept so messages name the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    /// Read requests issued by the `fetch_*` operations.
    Get,
    /// Write requests issued by the `create_*` and `auth_*` operations.
    Post,
}

/// A response was received but its status was outside the 2xx range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestError {
    /// Verb of the failed request.
    pub method: RequestMethod,
    /// Endpoint path, relative to the configured base URL.
    pub endpoint: String,
    /// Numeric HTTP status code.
    pub status: u16,
    /// Canonical reason phrase for the status, empty when unknown.
    pub status_text: String,
    /// Response body, or an empty string when it could not be read.
    pub body: String,
}

impl fmt::Display for RequestError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            method,
            endpoint,
            status,
            status_text,
            body,
        } = self;
        match method {
            RequestMethod::Get => write!(
                formatter,
                "Request to {endpoint} failed: {status} {status_text} {body}"
            ),
            RequestMethod::Post => {
                write!(formatter, "POST {endpoint} failed: {status} {status_text} {body}")
            }
        }
    }
}

impl std::error::Error for RequestError {}

/// Errors surfaced while configuring the client or talking to the API.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused connection, TLS).
    #[error("network error calling {endpoint}: {message}")]
    Transport {
        /// Endpoint that was being called.
        endpoint: String,
        /// Transport-level error detail.
        message: String,
    },

    /// The API answered with a non-success status.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// The response body did not decode into the expected shape.
    #[error("could not decode response from {endpoint}: {message}")]
    Parse {
        /// Endpoint whose body failed to decode.
        endpoint: String,
        /// Decoder error detail.
        message: String,
    },

    /// The configured base URL could not be parsed.
    #[error("API base URL is invalid: {0}")]
    InvalidUrl(String),

    /// Configuration could not be loaded or was incomplete.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl ApiError {
    /// Returns the HTTP status when the failure came from a non-2xx response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Request(request) => Some(request.status),
            _ => None,
        }
    }
}

/// Turns a failure into the text shown to a user.
///
/// Implementors only say whether they carry a readable message; callers use
/// [`Describe::describe`], which falls back to [`FALLBACK_ERROR_MESSAGE`].
pub trait Describe {
    /// Human-readable message carried by the failure, if any.
    fn message(&self) -> Option<String>;

    /// Message to display, defaulting to the localized fallback.
    fn describe(&self) -> String {
        self.message()
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_owned())
    }
}

impl Describe for ApiError {
    fn message(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl Describe for RequestError {
    fn message(&self) -> Option<String> {
        Some(self.to_string())
    }
}
