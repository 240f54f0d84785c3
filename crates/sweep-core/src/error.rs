//! Errors surfaced by the sweep pipeline.

use thiserror::Error;

/// Boxed error from a provider client.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that abort a sweep.
///
/// Per-orphan resolution failures are not errors; they are reported as
/// warnings and recorded in [`crate::SweepReport::skipped`].
#[derive(Error, Debug)]
pub enum Error {
    /// A listing or delete call against the provider failed.
    #[error("{operation} request failed")]
    Provider {
        /// Provider operation, e.g. `lambda:ListFunctions`.
        operation: &'static str,
        /// Underlying client error.
        #[source]
        source: BoxError,
    },
}

impl Error {
    /// Wrap a client error raised by `operation`.
    pub fn provider(operation: &'static str, err: impl Into<BoxError>) -> Self {
        Self::Provider {
            operation,
            source: err.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
