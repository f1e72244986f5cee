//! # Lamina Core
//!
//! Core resolution model for Lamina Config: layered property sources merged
//! into one queryable model, plus a scoped override tree.
//!
//! Two independent components compose the core:
//!
//! - [`PropertyAggregator`] folds an ordered list of named property sources
//!   into a single flat key/value lookup (later sources override earlier
//!   ones) and a prefix index over the dotted key namespace, so a query for
//!   `"db"` returns every key logically under it.
//! - [`scopes::extract_config`] parses a pre-parsed configuration document
//!   into a [`Config`]: one default scope plus named scopes, each with its
//!   own properties and per-user overrides. Malformed entries are reported
//!   through the [`ConfigLog`] capability and skipped; only a wrong root tag
//!   is fatal.
//!
//! Resource loading, document parsing and the logging sink are collaborators
//! behind narrow traits ([`ResourceLoader`], [`TreeElement`], [`ConfigLog`]);
//! the `lamina-sources` crate provides the filesystem and `tracing`
//! implementations.
//!
//! ## Example
//!
//! ```
//! use lamina_core::{Element, NullLog, PropertyAggregator, PropertyMap, PropertySource};
//! use lamina_core::scopes::extract_config;
//!
//! let mut base = PropertyMap::new();
//! base.insert("db.host", "A");
//! let mut overlay = PropertyMap::new();
//! overlay.insert("db.host", "B");
//! let agg = PropertyAggregator::from_sources(vec![
//!     PropertySource::new("base.properties", base),
//!     PropertySource::new("override.properties", overlay),
//! ]);
//! assert_eq!(agg.get("db.host"), Some("B"));
//!
//! let doc = Element::new("lamina-config").with_child(
//!     Element::new("default-config")
//!         .with_child(Element::new("property").with_attribute("name", "x").with_text("1")),
//! );
//! let config = extract_config(&doc, &NullLog).unwrap();
//! assert_eq!(config.default_scope().property("x"), Some("1"));
//! ```

pub mod aggregate;
pub mod document;
pub mod error;
pub mod log;
pub mod merge;
pub mod props;
pub mod scopes;
pub mod types;

// Re-exports
pub use aggregate::PropertyAggregator;
pub use document::{Element, TreeElement};
pub use error::{LaminaError, Result};
pub use log::{ConfigLog, NullLog};
pub use props::{PropertyMap, PropertySource, ResourceLoader};
pub use scopes::{Config, NamedScope};
pub use types::{SourceId, SYSTEM_SOURCE_ID};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
