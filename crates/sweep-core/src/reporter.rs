//! Reporter trait for dependency injection
//!
//! The sweep reports progress and per-orphan warnings to a human operator
//! through this trait, so the core stays independent of how the CLI renders
//! its output.

/// Sink for operator-facing sweep output.
pub trait Reporter: Send + Sync {
    /// Log an informational message (counts, progress).
    fn info(&self, msg: &str);

    /// Log a warning about an orphan that was skipped.
    fn warning(&self, msg: &str);

    /// Log the final outcome of the run.
    fn success(&self, msg: &str);
}

impl<T: Reporter + ?Sized> Reporter for std::sync::Arc<T> {
    fn info(&self, msg: &str) {
        (**self).info(msg);
    }
    fn warning(&self, msg: &str) {
        (**self).warning(msg);
    }
    fn success(&self, msg: &str) {
        (**self).success(msg);
    }
}

/// A no-op reporter for silent runs.
#[derive(Debug, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn info(&self, _: &str) {}
    fn warning(&self, _: &str) {}
    fn success(&self, _: &str) {}
}
