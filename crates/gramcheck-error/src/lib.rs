//! # gramcheck-error
//!
//! Unified error handling for gramcheck.
//!
//! - **ErrorKind**: what went wrong (e.g. LoadFailure, QueryInvalid)
//! - **ErrorStatus**: whether retrying makes sense (Permanent, Temporary, Persistent)
//! - **Context**: key-value pairs naming the grammar, query, or file involved
//! - **Source**: the underlying runtime or IO error, wrapped rather than leaked
//!
//! ## Usage
//!
//! ```rust
//! use gramcheck_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::LoadFailure, "Error loading Java grammar")
//!         .with_operation("verify_grammar_loads")
//!         .with_context("grammar", "java"))
//! }
//! ```
//!
//! Library functions return `Result<T, gramcheck_error::Error>`; external errors
//! are attached with `set_source(err)`.

mod error;
mod kind;
mod status;

pub use error::Error;
pub use kind::ErrorKind;
pub use status::ErrorStatus;

/// Result type alias using gramcheck Error
pub type Result<T> = std::result::Result<T, Error>;
