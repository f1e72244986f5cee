//! Logging capability for recoverable-condition reporting.
//!
//! The core never aborts on a malformed entry or a missing source; it reports
//! the condition through this capability and moves on. Keeping the capability
//! as a trait means the core has no dependency on any concrete logging
//! facility. The `lamina-sources` crate provides a `tracing`-backed
//! implementation.

/// Sink for the two reporting levels the core distinguishes.
///
/// `debug` carries expected, benign conditions (a source that simply is not
/// there); `warn` carries unexpected but non-fatal ones (an I/O failure on a
/// found source, a malformed document element).
pub trait ConfigLog: Send + Sync {
    /// Reports an expected, benign condition.
    fn debug(&self, message: &str);

    /// Reports an unexpected but recoverable condition.
    fn warn(&self, message: &str);
}

/// A [`ConfigLog`] that discards everything.
///
/// Useful for callers that do not care about recoverable-condition reporting,
/// and as a default in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLog;

impl ConfigLog for NullLog {
    fn debug(&self, _message: &str) {}

    fn warn(&self, _message: &str) {}
}
