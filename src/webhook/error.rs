//! Error types for HTTP and webhook operations.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for HTTP operations.
///
/// Describes what went wrong at the transport level. The webhook client
/// folds all of these into [`ErrorKind::UnexpectedResponse`].
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The transport rejected the URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Structured failure payload returned by the webhook endpoint.
///
/// Unknown fields in the response body (such as Discord's nested `errors`
/// object) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Numeric error code, e.g. `50035` for an invalid form body.
    #[serde(default)]
    pub code: i64,

    /// Human readable description.
    #[serde(default)]
    pub message: String,
}

impl ApiError {
    /// Creates an error payload with the given code and message.
    #[must_use]
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

/// Comparable classification of a [`WebhookError`].
///
/// Callers branch on this rather than on error text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The environment variable holding the URL was unset or empty.
    MissingWebhookUrl,
    /// The URL did not parse as an absolute URL.
    InvalidUrl,
    /// The endpoint answered 400 with an [`ApiError`].
    BadRequest,
    /// Transport failure, an unhandled status, or an undecodable body.
    UnexpectedResponse,
    /// The message could not be encoded as JSON.
    InvalidMessage,
}

/// Error type for webhook construction and sending.
///
/// No variant is retried internally; every failure is reported as soon as
/// it happens. Use [`WebhookError::kind`] to branch on the failure class and
/// [`WebhookError::api_error`] to get at the endpoint's error payload.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The named environment variable is unset or empty.
    #[error("Missing webhook URL: environment variable '{var}' is unset or empty")]
    MissingWebhookUrl {
        /// Name of the variable that was looked up
        var: String,
    },

    /// The webhook URL is not a well-formed absolute URL.
    #[error("Invalid webhook URL '{url}': {reason}")]
    InvalidUrl {
        /// The rejected URL string
        url: String,
        /// Reason for invalidity
        reason: String,
    },

    /// The endpoint rejected the request with status 400.
    #[error("Bad request: {0}")]
    BadRequest(ApiError),

    /// The request never produced a response.
    #[error("Unexpected response: {0}")]
    Transport(#[from] HttpError),

    /// The endpoint answered with a status this client does not handle.
    #[error("Unexpected response: HTTP {status}")]
    UnexpectedStatus {
        /// Status returned by the endpoint
        status: http::StatusCode,
        /// Response body, if it was valid UTF-8
        body: Option<String>,
    },

    /// The endpoint's response body could not be decoded.
    #[error("Unexpected response: undecodable body for HTTP {status}: {source}")]
    MalformedBody {
        /// Status returned by the endpoint
        status: http::StatusCode,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The message could not be serialized.
    #[error("Invalid message: {0}")]
    Encode(#[source] serde_json::Error),
}

impl WebhookError {
    /// Returns the comparable classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingWebhookUrl { .. } => ErrorKind::MissingWebhookUrl,
            Self::InvalidUrl { .. } => ErrorKind::InvalidUrl,
            Self::BadRequest(_) => ErrorKind::BadRequest,
            Self::Transport(_) | Self::UnexpectedStatus { .. } | Self::MalformedBody { .. } => {
                ErrorKind::UnexpectedResponse
            }
            Self::Encode(_) => ErrorKind::InvalidMessage,
        }
    }

    /// Returns the endpoint's error payload for [`ErrorKind::BadRequest`].
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::BadRequest(api_error) => Some(api_error),
            _ => None,
        }
    }

    /// Returns the HTTP status, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<http::StatusCode> {
        match self {
            Self::BadRequest(_) => Some(http::StatusCode::BAD_REQUEST),
            Self::UnexpectedStatus { status, .. } | Self::MalformedBody { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// Returns true for construction-time errors (missing or invalid URL).
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::MissingWebhookUrl | ErrorKind::InvalidUrl
        )
    }
}

impl PartialEq<ErrorKind> for WebhookError {
    fn eq(&self, other: &ErrorKind) -> bool {
        self.kind() == *other
    }
}
