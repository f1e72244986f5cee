//! Common type definitions and newtypes for Lamina Config.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The reserved identifier denoting the ambient process environment.
///
/// A source list containing this identifier picks up the process's
/// environment table at build time instead of loading a file.
pub const SYSTEM_SOURCE_ID: &str = "/";

/// Identifier of a property source.
///
/// A source identifier is typically a resource path such as
/// `"app.properties"` or `"/lamina.properties"`. The reserved identifier
/// `"/"` stands for the ambient process environment and bypasses resource
/// loading entirely.
///
/// # Example
///
/// ```
/// use lamina_core::SourceId;
///
/// let id = SourceId::new("app.properties");
/// assert_eq!(id.as_str(), "app.properties");
/// assert!(!id.is_system());
/// assert!(SourceId::system().is_system());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceId(String);

impl SourceId {
    /// Creates a new source identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the reserved identifier for the ambient process environment.
    pub fn system() -> Self {
        Self::new(SYSTEM_SOURCE_ID)
    }

    /// Returns true if this is the reserved ambient-environment identifier.
    pub fn is_system(&self) -> bool {
        self.0 == SYSTEM_SOURCE_ID
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SourceId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for SourceId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
