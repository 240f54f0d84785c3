//! Provider-neutral projections of the resources the sweep reads.
//!
//! Each type carries only the fields the pipeline inspects. The AWS adapters
//! in [`crate::aws`] build them from SDK output shapes; tests build them by hand.

/// A deployed function as returned by the function-listing API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionRecord {
    /// Function ARN. Records without one are ignored by the enumerator.
    pub arn: Option<String>,
}

impl FunctionRecord {
    /// Record with the given ARN.
    pub fn new(arn: impl Into<String>) -> Self {
        Self {
            arn: Some(arn.into()),
        }
    }
}

/// A single cache behavior of a distribution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheBehavior {
    /// ARNs of the function associations, exactly as configured (possibly
    /// version-qualified).
    pub function_arns: Vec<String>,
}

impl CacheBehavior {
    /// Behavior associated with the given function ARNs.
    pub fn new<I, S>(function_arns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            function_arns: function_arns.into_iter().map(Into::into).collect(),
        }
    }
}

/// A content-delivery distribution, reduced to its cache behaviors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Distribution {
    /// The default cache behavior, if the provider returned one.
    pub default_behavior: Option<CacheBehavior>,
    /// Additional path-pattern cache behaviors.
    pub behaviors: Vec<CacheBehavior>,
}

impl Distribution {
    /// All cache behaviors: the default one first, then the additional ones.
    pub fn cache_behaviors(&self) -> impl Iterator<Item = &CacheBehavior> {
        self.default_behavior.iter().chain(self.behaviors.iter())
    }
}

/// Summary of a provisioning stack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackSummary {
    /// Provider-assigned stack id. Matched by substring against stack tokens.
    pub stack_id: Option<String>,
    /// Stack name, used for the delete request.
    pub stack_name: Option<String>,
}

impl StackSummary {
    /// Summary with both id and name set.
    pub fn new(stack_id: impl Into<String>, stack_name: impl Into<String>) -> Self {
        Self {
            stack_id: Some(stack_id.into()),
            stack_name: Some(stack_name.into()),
        }
    }
}

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items on this page, in provider order.
    pub items: Vec<T>,
    /// Cursor for the following page; `None` on the last page.
    pub next: Option<String>,
}

impl<T> Page<T> {
    /// A page followed by another one at `next`.
    pub fn new(items: Vec<T>, next: impl Into<String>) -> Self {
        Self {
            items,
            next: Some(next.into()),
        }
    }

    /// The final page of a listing.
    pub fn last(items: Vec<T>) -> Self {
        Self { items, next: None }
    }
}
