//! In-memory providers and a recording reporter for tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::reporter::Reporter;
use crate::source::{DistributionSource, FunctionSource, StackService};
use crate::types::{Distribution, FunctionRecord, Page, StackSummary};

/// Serves prepared pages in order and records the cursor of every request.
struct PagedFake<T> {
    pages: Vec<Page<T>>,
    cursors: Mutex<Vec<Option<String>>>,
    fail: bool,
}

impl<T: Clone> PagedFake<T> {
    fn new(pages: Vec<Page<T>>) -> Self {
        Self {
            pages,
            cursors: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(Vec::new())
        }
    }

    fn serve(&self, operation: &'static str, cursor: Option<String>) -> Result<Page<T>> {
        if self.fail {
            return Err(Error::provider(
                operation,
                std::io::Error::other("access denied"),
            ));
        }
        let mut cursors = self.cursors.lock().unwrap();
        let index = cursors.len();
        cursors.push(cursor);
        Ok(self
            .pages
            .get(index)
            .cloned()
            .unwrap_or_else(|| Page::last(Vec::new())))
    }

    fn cursors(&self) -> Vec<Option<String>> {
        self.cursors.lock().unwrap().clone()
    }
}

pub(crate) struct FakeFunctions(PagedFake<FunctionRecord>);

impl FakeFunctions {
    pub(crate) fn new(pages: Vec<Page<FunctionRecord>>) -> Self {
        Self(PagedFake::new(pages))
    }

    /// Single page listing the given ARNs.
    pub(crate) fn with_arns(arns: &[&str]) -> Self {
        Self::new(vec![Page::last(
            arns.iter().copied().map(FunctionRecord::new).collect(),
        )])
    }

    pub(crate) fn failing() -> Self {
        Self(PagedFake::failing())
    }

    pub(crate) fn cursors(&self) -> Vec<Option<String>> {
        self.0.cursors()
    }
}

#[async_trait]
impl FunctionSource for FakeFunctions {
    async fn list_functions(&self, cursor: Option<String>) -> Result<Page<FunctionRecord>> {
        self.0.serve("lambda:ListFunctions", cursor)
    }
}

pub(crate) struct FakeDistributions(PagedFake<Distribution>);

impl FakeDistributions {
    pub(crate) fn new(pages: Vec<Page<Distribution>>) -> Self {
        Self(PagedFake::new(pages))
    }

    pub(crate) fn empty() -> Self {
        Self::new(vec![Page::last(Vec::new())])
    }

    pub(crate) fn failing() -> Self {
        Self(PagedFake::failing())
    }
}

#[async_trait]
impl DistributionSource for FakeDistributions {
    async fn list_distributions(&self, cursor: Option<String>) -> Result<Page<Distribution>> {
        self.0.serve("cloudfront:ListDistributions", cursor)
    }
}

pub(crate) struct FakeStacks {
    listing: PagedFake<StackSummary>,
    deleted: Mutex<Vec<String>>,
    fail_delete: bool,
}

impl FakeStacks {
    pub(crate) fn new(pages: Vec<Page<StackSummary>>) -> Self {
        Self {
            listing: PagedFake::new(pages),
            deleted: Mutex::new(Vec::new()),
            fail_delete: false,
        }
    }

    pub(crate) fn with_stacks(stacks: Vec<StackSummary>) -> Self {
        Self::new(vec![Page::last(stacks)])
    }

    pub(crate) fn failing_delete(stacks: Vec<StackSummary>) -> Self {
        Self {
            fail_delete: true,
            ..Self::with_stacks(stacks)
        }
    }

    pub(crate) fn failing_listing() -> Self {
        Self {
            listing: PagedFake::failing(),
            ..Self::new(Vec::new())
        }
    }

    /// Stack names passed to `delete_stack`, in call order.
    pub(crate) fn deleted(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl StackService for FakeStacks {
    async fn list_stacks(&self, cursor: Option<String>) -> Result<Page<StackSummary>> {
        self.listing.serve("cloudformation:ListStacks", cursor)
    }

    async fn delete_stack(&self, stack_name: &str) -> Result<()> {
        if self.fail_delete {
            return Err(Error::provider(
                "cloudformation:DeleteStack",
                std::io::Error::other("throttled"),
            ));
        }
        self.deleted.lock().unwrap().push(stack_name.to_string());
        Ok(())
    }
}

/// Captures every message passed to it.
#[derive(Default)]
pub(crate) struct RecordingReporter {
    infos: Mutex<Vec<String>>,
    warnings: Mutex<Vec<String>>,
    successes: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub(crate) fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }

    pub(crate) fn infos(&self) -> Vec<String> {
        self.infos.lock().unwrap().clone()
    }

    pub(crate) fn successes(&self) -> Vec<String> {
        self.successes.lock().unwrap().clone()
    }
}

impl Reporter for RecordingReporter {
    fn info(&self, msg: &str) {
        self.infos.lock().unwrap().push(msg.to_string());
    }

    fn warning(&self, msg: &str) {
        self.warnings.lock().unwrap().push(msg.to_string());
    }

    fn success(&self, msg: &str) {
        self.successes.lock().unwrap().push(msg.to_string());
    }
}
