//! Shared error type across synthmetrics crates.
//!
//! Only startup-time failures (config acquisition and validation) are errors.
//! Per-request results are [`crate::Outcome`] values, never `SynthError`.

use thiserror::Error;

/// Stable error codes used in startup diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Config document is malformed or fails validation.
    BadConfig,
    /// Two endpoints share a uri.
    DuplicateUri,
    /// Endpoint names a response format we cannot frame.
    UnsupportedProvider,
    /// Config source could not be read or fetched.
    FetchFailed,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    /// String representation used in logs and tests.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::DuplicateUri => "DUPLICATE_URI",
            ErrorCode::UnsupportedProvider => "UNSUPPORTED_PROVIDER",
            ErrorCode::FetchFailed => "FETCH_FAILED",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, SynthError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum SynthError {
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("duplicate uri: {0}")]
    DuplicateUri(String),
    #[error("unsupported provider: {0}")]
    UnsupportedProvider(String),
    #[error("config fetch failed: {0}")]
    Fetch(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl SynthError {
    /// Map the error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            SynthError::BadConfig(_) => ErrorCode::BadConfig,
            SynthError::DuplicateUri(_) => ErrorCode::DuplicateUri,
            SynthError::UnsupportedProvider(_) => ErrorCode::UnsupportedProvider,
            SynthError::Fetch(_) => ErrorCode::FetchFailed,
            SynthError::Internal(_) => ErrorCode::Internal,
        }
    }
}
