//! Error type shared by every Pronto API call

use thiserror::Error;

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, ProntoError>;

/// Every way a single API call can fail.
///
/// Each call fails through exactly one of these; nothing is retried.
#[derive(Debug, Error)]
pub enum ProntoError {
    /// Connection, DNS, TLS or timeout failure before a status was received.
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-2xx status.
    #[error("HTTP {status} for {endpoint}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// Server answered 2xx but the body was not valid JSON.
    #[error("failed to decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// An authenticated endpoint was called on a client with no access token.
    #[error("no access token bound to client, cannot call {endpoint}")]
    MissingToken { endpoint: String },

    /// A configured base URL could not be parsed or joined with a path.
    #[error("invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ProntoError {
    /// Endpoint path the failing call targeted, if any.
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            Self::Transport { endpoint, .. }
            | Self::Status { endpoint, .. }
            | Self::Decode { endpoint, .. }
            | Self::MissingToken { endpoint } => Some(endpoint),
            Self::InvalidUrl(_) => None,
        }
    }

    /// HTTP status code for `Status` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the server rejected the access token.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}
