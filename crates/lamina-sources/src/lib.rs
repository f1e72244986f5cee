//! # Lamina Sources
//!
//! Filesystem-backed property source loading for Lamina Config.
//!
//! This crate provides the I/O side of the core's collaborator seams: a
//! [`FsResourceLoader`] that resolves source identifiers against an ordered
//! list of search directories and parses Java-style `.properties` files, and
//! a [`TracingLog`] that reports the core's recoverable conditions through
//! the `tracing` macros.
//!
//! ## Example
//!
//! ```no_run
//! use lamina_core::{PropertyAggregator, SourceId};
//! use lamina_sources::{FsResourceLoader, TracingLog};
//!
//! let loader = FsResourceLoader::new("/etc/myapp");
//! let agg = PropertyAggregator::load(
//!     &[
//!         SourceId::from("base.properties"),
//!         SourceId::from("override.properties"),
//!         SourceId::system(),
//!     ],
//!     &loader,
//!     &TracingLog,
//! );
//! println!("{:?}", agg.get("db.host"));
//! ```

pub mod loader;
pub mod log;

// Re-exports
pub use loader::FsResourceLoader;
pub use log::TracingLog;

// Re-export lamina_core for consumers
pub use lamina_core;
