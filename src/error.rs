//! Unified error types.
//!
//! Every fallible resource call returns `Result<_, FetchError>`. The request
//! state machine converts a `FetchError` into a display-safe
//! [`Failure`](crate::view::state::Failure) at its boundary, so nothing below
//! the view layer ever leaks a raw transport error to rendering code.

use thiserror::Error;

/// Classified failure of a single resource call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("HTTP error {code}: {body}")]
    HttpStatus { code: u16, body: String },

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),
}

/// Payload-free discriminant of a [`FetchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchErrorKind {
    HttpStatus,
    Decode,
    Unauthorized,
    NotFound,
    Network,
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::HttpStatus { .. } => FetchErrorKind::HttpStatus,
            FetchError::Decode(_) => FetchErrorKind::Decode,
            FetchError::Unauthorized => FetchErrorKind::Unauthorized,
            FetchError::NotFound(_) => FetchErrorKind::NotFound,
            FetchError::Network(_) => FetchErrorKind::Network,
        }
    }

    /// HTTP status code, when the failure came from a non-2xx response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FetchError::HttpStatus { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Human-readable reason, safe to put in front of a user.
    ///
    /// Never includes response bodies or transport details.
    pub fn display_message(&self) -> String {
        match self {
            FetchError::HttpStatus { code, .. } if *code >= 500 => {
                format!("The server failed to respond (HTTP {code}). Please try again.")
            }
            FetchError::HttpStatus { code, .. } => {
                format!("The request was rejected (HTTP {code}).")
            }
            FetchError::Decode(_) => "Received an unexpected response from the server.".to_string(),
            FetchError::Unauthorized => "You need to sign in to view this.".to_string(),
            FetchError::NotFound(_) => "The requested item could not be found.".to_string(),
            FetchError::Network(_) => {
                "Could not reach the server. Check your connection.".to_string()
            }
        }
    }
}

impl std::fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FetchErrorKind::HttpStatus => "http_status",
            FetchErrorKind::Decode => "decode",
            FetchErrorKind::Unauthorized => "unauthorized",
            FetchErrorKind::NotFound => "not_found",
            FetchErrorKind::Network => "network",
        };
        write!(f, "{}", s)
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

/// Client construction / configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[cfg(feature = "http")]
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Errors from persistent credential storage.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt storage file: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// The platform store could not be reached (e.g. browser storage disabled).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}
