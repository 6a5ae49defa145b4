//! Typed failures for page fetching and extraction.

use thiserror::Error;

/// Why a search page could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request failed with status: {0}")]
    Status(u16),

    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    #[error("failed to read response body: {0}")]
    Body(String),
}

impl From<wreq::Error> for FetchError {
    fn from(err: wreq::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

/// Diagnostic attached to an extraction that produced less than a full page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractIssue {
    #[error("fetch failed: {0}")]
    Transport(#[from] FetchError),

    #[error("no listings found on page")]
    NoListings,
}
