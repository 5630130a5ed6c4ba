//! Error status for retry logic

use std::fmt;

/// The status of an error, indicating whether it can be retried.
///
/// - `Permanent`: the error won't resolve without external changes
/// - `Temporary`: a retry might succeed
/// - `Persistent`: was temporary but persisted after retries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorStatus {
    /// Don't retry without external changes.
    ///
    /// Examples: LoadFailure, AbiMismatch, QueryInvalid
    #[default]
    Permanent,

    /// Retry may succeed.
    Temporary,

    /// Was temporary, but retries did not help.
    Persistent,
}

impl ErrorStatus {
    /// Check if retry is recommended
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorStatus::Temporary)
    }

    /// Mark as persistent after failed retries
    pub fn persist(self) -> Self {
        match self {
            ErrorStatus::Temporary => ErrorStatus::Persistent,
            other => other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorStatus::Permanent => "permanent",
            ErrorStatus::Temporary => "temporary",
            ErrorStatus::Persistent => "persistent",
        }
    }
}

impl fmt::Display for ErrorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
