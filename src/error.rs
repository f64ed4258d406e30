// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
}

/// Failures of a single network request against the image API.
///
/// The variants are kept apart for logging only; the user always sees the
/// same generic message (see [`FetchError::i18n_key`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The configured base URL could not be turned into a request URL.
    InvalidUrl(String),

    /// Connection, TLS, timeout or body transfer failure.
    Network(String),

    /// The server answered with a non-success HTTP status.
    Status(u16),

    /// The body was not the expected JSON payload.
    Decode(String),
}

/// i18n key of the single user-visible fetch failure message.
pub const FETCH_FAILED_KEY: &str = "error-fetch-failed";

impl FetchError {
    /// Returns the i18n message key shown to the user.
    ///
    /// Every variant maps to the same key: network failures, HTTP errors and
    /// malformed payloads are not distinguished in the UI.
    pub fn i18n_key(&self) -> &'static str {
        FETCH_FAILED_KEY
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::InvalidUrl(msg) => write!(f, "Invalid request URL: {}", msg),
            FetchError::Network(msg) => write!(f, "Network failure: {}", msg),
            FetchError::Status(code) => write!(f, "HTTP status: {}", code),
            FetchError::Decode(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            FetchError::Status(status.as_u16())
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

pub type Result<T> = std::result::Result<T, Error>;
