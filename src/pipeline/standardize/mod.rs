pub mod client;
pub mod language;
pub mod prompt;
pub mod standardizer;

pub use client::*;
pub use language::*;
pub use prompt::*;
pub use standardizer::*;

use thiserror::Error;

/// Failures from the remote name-standardization collaborator.
#[derive(Error, Debug)]
pub enum StandardizeError {
    #[error("rename service is not reachable at {0}")]
    Connection(String),

    #[error("rename request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("rename service returned error (status {status}): {body}")]
    ServiceError { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("rename response could not be parsed: {0}")]
    ResponseParsing(String),
}

impl StandardizeError {
    /// Whether a retry can plausibly succeed.
    ///
    /// Connection failures, timeouts, throttling, and server-side errors are
    /// transient. A 4xx (other than 429) or a malformed response means the
    /// request itself is wrong — retrying repeats the failure.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Connection(_) | Self::Timeout { .. } | Self::HttpClient(_) => true,
            Self::ServiceError { status, .. } => *status == 429 || *status >= 500,
            Self::ResponseParsing(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_errors_are_retryable() {
        assert!(StandardizeError::Connection("http://localhost".into()).is_retryable());
        assert!(StandardizeError::Timeout { seconds: 30 }.is_retryable());
        assert!(StandardizeError::ServiceError { status: 503, body: String::new() }.is_retryable());
        assert!(StandardizeError::ServiceError { status: 429, body: String::new() }.is_retryable());
    }

    #[test]
    fn client_side_errors_are_not_retryable() {
        assert!(!StandardizeError::ServiceError { status: 400, body: String::new() }.is_retryable());
        assert!(!StandardizeError::ServiceError { status: 404, body: String::new() }.is_retryable());
        assert!(!StandardizeError::ResponseParsing("bad json".into()).is_retryable());
    }
}
