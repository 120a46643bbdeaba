//! Retrieval error type: one variant per observable failure.

use std::fmt;
use std::io;

/// Error returned by a retrieval call. Remote validation failures are kept
/// distinct so callers can tell a bad status from a bad payload; at most one
/// of them is ever produced per call (checks run in order, first hit wins).
#[derive(Debug)]
pub enum FetchError {
    /// The location string is not a valid absolute URL.
    Url(url::ParseError),
    /// libcurl failed before or during the transfer (DNS, refused, timeout).
    Transport(curl::Error),
    /// Response status was neither 200 nor 0 (0 is what a non-HTTP
    /// transport reports and counts as success).
    InvalidStatus(u32),
    /// `Content-Type` was missing (None) or did not contain `text/plain`.
    InvalidContentType(Option<String>),
    /// Body was empty or whitespace-only after trimming.
    EmptyResponse,
    /// Local file could not be read.
    Read(io::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Url(e) => write!(f, "invalid URL: {}", e),
            FetchError::Transport(e) => write!(f, "{}", e),
            FetchError::InvalidStatus(code) => {
                write!(f, "response status is invalid: HTTP {}", code)
            }
            FetchError::InvalidContentType(Some(ct)) => {
                write!(f, "response content type should be text/plain, got {}", ct)
            }
            FetchError::InvalidContentType(None) => write!(f, "response has no content type"),
            FetchError::EmptyResponse => write!(f, "response is empty"),
            FetchError::Read(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Url(e) => Some(e),
            FetchError::Transport(e) => Some(e),
            FetchError::Read(e) => Some(e),
            FetchError::InvalidStatus(_)
            | FetchError::InvalidContentType(_)
            | FetchError::EmptyResponse => None,
        }
    }
}

impl From<curl::Error> for FetchError {
    fn from(e: curl::Error) -> Self {
        FetchError::Transport(e)
    }
}

impl From<url::ParseError> for FetchError {
    fn from(e: url::ParseError) -> Self {
        FetchError::Url(e)
    }
}
