//! Provider capability traits.
//!
//! The sweep talks to three services: one that lists functions, one that lists
//! distributions, and one that lists and deletes stacks. Each is injected
//! behind a page-at-a-time trait so the pipeline can run against in-memory
//! fakes as easily as against the AWS SDK clients.

use std::future::Future;

use async_trait::async_trait;
use tracing::debug;

use crate::error::Result;
use crate::types::{Distribution, FunctionRecord, Page, StackSummary};

/// Lists deployed functions.
#[async_trait]
pub trait FunctionSource: Send + Sync {
    /// Fetch the page starting at `cursor` (`None` for the first page).
    async fn list_functions(&self, cursor: Option<String>) -> Result<Page<FunctionRecord>>;
}

/// Lists content-delivery distributions.
#[async_trait]
pub trait DistributionSource: Send + Sync {
    /// Fetch the page starting at `cursor` (`None` for the first page).
    async fn list_distributions(&self, cursor: Option<String>) -> Result<Page<Distribution>>;
}

/// Lists and deletes provisioning stacks.
#[async_trait]
pub trait StackService: Send + Sync {
    /// Fetch the page starting at `cursor` (`None` for the first page).
    async fn list_stacks(&self, cursor: Option<String>) -> Result<Page<StackSummary>>;

    /// Request deletion of the named stack.
    ///
    /// Returns once the provider acknowledges the request; teardown continues
    /// asynchronously on the provider side.
    async fn delete_stack(&self, stack_name: &str) -> Result<()>;
}

/// Drain a paginated listing into a single vector.
///
/// Calls `fetch` with `None`, then with each returned cursor until a page has
/// no cursor. An empty cursor counts as absent. Items keep page order.
///
/// # Errors
///
/// Returns the first error produced by `fetch`; pages already fetched are
/// discarded.
pub async fn paginate<T, F, Fut>(operation: &'static str, mut fetch: F) -> Result<Vec<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let mut items = Vec::new();
    let mut cursor = None;
    let mut pages = 0usize;

    loop {
        let page = fetch(cursor.take()).await?;
        pages += 1;
        debug!(operation, page = pages, items = page.items.len(), "fetched page");
        items.extend(page.items);

        match page.next {
            Some(next) if !next.is_empty() => cursor = Some(next),
            _ => break,
        }
    }

    debug!(operation, pages, total = items.len(), "listing complete");
    Ok(items)
}
