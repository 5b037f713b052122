//! Error types for the Transfermarkt API client

use thiserror::Error;


pub type Result<T> = std::result::Result<T, TmError>;

/// Errors surfaced to callers.
///
/// Remote failures are deliberately absent here: the request primitive
/// converts them to `None` (see [`FetchError`] for the typed form).
#[derive(Error, Debug)]
pub enum TmError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to parse ID: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("{param} must be an array of numbers ({reason})")]
    InvalidArgument { param: &'static str, reason: String },
}

/// A failed round-trip to the upstream API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("HTTP status {status}")]
    Status { status: u16 },

    #[error("transport error: {0}")]
    Transport(String),
}

impl FetchError {
    /// HTTP status of the failed response, if the server sent one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FetchError::Status { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if let Some(status) = err.status() {
            FetchError::Status {
                status: status.as_u16(),
            }
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}
