//! Error kinds for gramcheck operations

use strum_macros::{Display, EnumIter, IntoStaticStr};

/// The kind of error that occurred.
///
/// Callers match on the kind to tell a broken grammar artifact apart from a
/// bad configuration or a failed filesystem read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display, EnumIter)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // Grammar errors
    // =========================================================================
    /// The runtime entry point returned the absent (null) language
    LoadFailure,

    /// The grammar was generated for an ABI the runtime cannot read
    AbiMismatch,

    /// The parser refused to accept the language
    ParserRejected,

    /// A query failed to compile against the grammar
    QueryInvalid,

    /// No loader is registered under the requested name
    UnsupportedGrammar,

    // =========================================================================
    // Configuration errors
    // =========================================================================
    /// Invalid configuration file contents
    ConfigInvalid,

    /// Invalid argument passed to function
    InvalidArgument,

    // =========================================================================
    // File/IO errors
    // =========================================================================
    /// File not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Check if this error kind is retryable by default.
    ///
    /// Grammar errors never are: an artifact either loads or it is broken.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorKind::IoFailed)
    }
}
