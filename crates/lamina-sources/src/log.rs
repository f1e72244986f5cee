//! `tracing`-backed implementation of the core logging capability.

use lamina_core::ConfigLog;

/// Forwards the core's recoverable-condition reports to the `tracing`
/// macros at the matching levels.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl ConfigLog for TracingLog {
    fn debug(&self, message: &str) {
        tracing::debug!("{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }
}
