//! Error types for webhook dispatch.

use thiserror::Error;

/// Error type for HTTP operations.
///
/// Describes what went wrong at the transport level, before any
/// response status was received.
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

    /// The client refused to send the request, e.g. for a URL scheme it
    /// does not speak.
    #[error("Request rejected by client: {0}")]
    Rejected(String),
}

/// Broad category of a dispatch failure.
///
/// The host only ever sees a boolean, so this exists for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The notification properties cannot produce a valid request.
    Configuration,
    /// The request never got a response.
    Transport,
    /// The server answered with a non-2xx status.
    Protocol,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "configuration"),
            Self::Transport => write!(f, "transport"),
            Self::Protocol => write!(f, "protocol"),
        }
    }
}

/// Error type for a single webhook dispatch.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A required notification property was not supplied.
    #[error("Missing notification property: {0}")]
    MissingProperty(&'static str),

    /// The request method is not one of GET, POST, PUT or DELETE.
    #[error("Undefined request method '{0}'")]
    InvalidMethod(String),

    /// The webhook URL is not an absolute URL.
    #[error("Invalid webhook URL '{url}': {reason}")]
    InvalidUrl {
        /// The rejected URL string
        url: String,
        /// Reason for invalidity
        reason: String,
    },

    /// The content type contains bytes not allowed in a header value.
    #[error("Invalid content type '{value}': {reason}")]
    InvalidHeaderValue {
        /// The rejected content type
        value: String,
        /// Reason for invalidity
        reason: String,
    },

    /// The request failed before a response arrived.
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// The server responded with a status outside 200..300.
    #[error("Unexpected response status: {status}")]
    UnexpectedStatus {
        /// The HTTP status code received
        status: http::StatusCode,
        /// Response body, if valid UTF-8
        body: Option<String>,
    },
}

impl DispatchError {
    /// Returns the category this failure belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingProperty(_)
            | Self::InvalidMethod(_)
            | Self::InvalidUrl { .. }
            | Self::InvalidHeaderValue { .. } => ErrorKind::Configuration,
            // Nothing left the host, the properties asked for something unsendable
            Self::Transport(HttpError::Rejected(_)) => ErrorKind::Configuration,
            Self::Transport(_) => ErrorKind::Transport,
            Self::UnexpectedStatus { .. } => ErrorKind::Protocol,
        }
    }
}
