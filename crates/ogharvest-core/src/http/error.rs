//! Transport error type for page and image GETs.

use std::fmt;
use std::io;

/// Error returned by a single GET (curl failure, HTTP status, or sink failure).
#[derive(Debug)]
pub enum FetchError {
    /// The URL is not an absolute http(s) URL; no request was made.
    InvalidUrl(String),
    /// Curl reported an error (bad URL, DNS, connection, timeout, etc.).
    Curl(curl::Error),
    /// Final response had a non-2xx status.
    Http(u32),
    /// The body consumer failed (e.g. disk full while streaming to a file).
    Sink(io::Error),
}

impl FetchError {
    /// HTTP status of the failed response, if the server answered.
    pub fn status(&self) -> Option<u32> {
        match self {
            FetchError::Http(code) => Some(*code),
            FetchError::InvalidUrl(_) | FetchError::Curl(_) | FetchError::Sink(_) => None,
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::InvalidUrl(reason) => write!(f, "invalid URL: {}", reason),
            FetchError::Curl(e) => write!(f, "{}", e),
            FetchError::Http(code) => write!(f, "HTTP {}", code),
            FetchError::Sink(e) => write!(f, "write: {}", e),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Curl(e) => Some(e),
            FetchError::Sink(e) => Some(e),
            FetchError::InvalidUrl(_) | FetchError::Http(_) => None,
        }
    }
}

impl From<curl::Error> for FetchError {
    fn from(e: curl::Error) -> Self {
        FetchError::Curl(e)
    }
}
