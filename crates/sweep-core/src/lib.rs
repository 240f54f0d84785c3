//! sweep-core - orphaned Lambda@Edge cleanup
#![allow(clippy::doc_markdown)]
//!
//! Finds edge functions that no CloudFront distribution references any more
//! and deletes the CloudFormation stacks that deployed them.
//!
//! # Pipeline
//!
//! 1. [`inventory::list_edge_functions`]: every function whose ARN contains
//!    `edge-lambda`.
//! 2. [`inventory::list_attached_functions`]: every function ARN referenced by
//!    a cache behavior, version qualifier stripped.
//! 3. [`inventory::list_stacks`]: every stack summary.
//! 4. [`Sweeper::reconcile`]: orphans are resolved to a stack through
//!    [`naming::extract_stack_token`] and [`naming::find_stack`], and the
//!    stack is deleted.
//!
//! Providers are injected through the traits in [`source`]; the `aws` feature
//! (on by default) supplies SDK-backed implementations in [`aws`].

#[cfg(feature = "aws")]
pub mod aws;
pub mod config;
pub mod error;
pub mod inventory;
pub mod naming;
pub mod reconcile;
pub mod reporter;
pub mod source;
pub mod types;

#[cfg(test)]
mod testing;

pub use config::SweepConfig;
pub use error::{Error, Result};
pub use reconcile::{SkipReason, SkippedOrphan, SweepReport, Sweeper, orphans};
pub use reporter::{NullReporter, Reporter};
pub use source::{DistributionSource, FunctionSource, StackService};
pub use types::{CacheBehavior, Distribution, FunctionRecord, Page, StackSummary};
