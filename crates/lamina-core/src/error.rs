//! Error types for Lamina Config.
//!
//! This module defines the error hierarchy used throughout
//! the Lamina Config system. All errors implement the standard
//! `std::error::Error` trait via `thiserror`.
//!
//! # Error Handling Philosophy
//!
//! Lamina distinguishes two tiers of failure:
//! - **Fatal** errors are returned as `Err` and abort the operation that
//!   raised them. The only fatal condition in the core is a configuration
//!   document whose root element carries the wrong tag ([`LaminaError::Schema`]).
//! - **Recoverable** conditions (a missing source, an unreadable file, a
//!   malformed element) are reported through the [`ConfigLog`] capability and
//!   the affected unit is dropped; they never abort a larger build or parse.
//!
//! [`ConfigLog`]: crate::log::ConfigLog
//!
//! # Example
//!
//! ```
//! use lamina_core::{LaminaError, Result};
//!
//! fn check_root(tag: &str) -> Result<()> {
//!     if tag != "lamina-config" {
//!         return Err(LaminaError::schema("lamina-config", tag));
//!     }
//!     Ok(())
//! }
//!
//! let err = check_root("beans").unwrap_err();
//! assert!(err.is_schema());
//! ```

use std::io;
use thiserror::Error;

/// Main error type for Lamina Config operations.
///
/// Each variant includes enough context to diagnose the issue without
/// re-running the failed operation.
#[derive(Debug, Error)]
pub enum LaminaError {
    /// The root element of a configuration document carried an unexpected tag.
    ///
    /// This is the only fatal condition raised by the scope tree extractor;
    /// it carries both the expected and the actual tag name.
    #[error("root element of configuration document should be '{expected}', not '{actual}'")]
    Schema {
        /// The tag name the extractor requires on the root element.
        expected: String,
        /// The tag name actually encountered.
        actual: String,
    },

    /// Error parsing the content of a property source.
    #[error("failed to parse properties from '{source_name}': {message}")]
    Parse {
        /// Identifier of the source that failed (path, resource name).
        source_name: String,
        /// Description of the parse error.
        message: String,
    },

    /// I/O error occurred while reading a source that was found.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl LaminaError {
    /// Creates a Schema error from the expected and actual root tag names.
    pub fn schema(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::Schema {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Creates a Parse error.
    pub fn parse_error(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Creates an Internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true if this is a document schema error.
    pub fn is_schema(&self) -> bool {
        matches!(self, Self::Schema { .. })
    }

    /// Returns true if this is a parse error.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Returns true if this is an I/O error.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

/// Type alias for Results with LaminaError.
pub type Result<T> = std::result::Result<T, LaminaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_names_both_tags() {
        let error = LaminaError::schema("lamina-config", "beans");
        let msg = format!("{}", error);

        assert!(msg.contains("lamina-config"));
        assert!(msg.contains("beans"));
        assert!(error.is_schema());
    }

    #[test]
    fn test_parse_error_display() {
        let error = LaminaError::parse_error("app.properties", "bad escape at line 3");
        let msg = format!("{}", error);

        assert!(msg.contains("app.properties"));
        assert!(msg.contains("bad escape at line 3"));
        assert!(error.is_parse_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let error: LaminaError = io_error.into();

        assert!(error.is_io_error());
        assert!(!error.is_schema());
    }

    #[test]
    fn test_result_with_question_mark() {
        fn inner() -> Result<()> {
            Err(LaminaError::internal("test"))
        }

        fn outer() -> Result<String> {
            inner()?;
            Ok("success".into())
        }

        assert!(outer().is_err());
    }
}
