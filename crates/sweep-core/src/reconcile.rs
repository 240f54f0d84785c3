//! Orphan reconciliation and stack deletion.
//!
//! A sweep enumerates edge functions and attachments, takes the difference,
//! maps every orphan to its owning stack through the naming convention, and
//! requests deletion of that stack. Orphans whose stack cannot be resolved are
//! warned about and skipped; provider errors abort the run.

use std::collections::HashSet;
use std::fmt;

use tracing::{info, warn};

use crate::error::Result;
use crate::inventory::{list_attached_functions, list_edge_functions, list_stacks};
use crate::naming::{extract_stack_token, find_stack};
use crate::reporter::Reporter;
use crate::source::{DistributionSource, FunctionSource, StackService};
use crate::types::StackSummary;

/// Why an orphan was left in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The ARN carries no `edge-lambda-stack-<word>` token.
    NoStackToken,
    /// No listed stack id contains the extracted token.
    NoMatchingStack {
        /// The token that was searched for.
        token: String,
    },
}

/// An orphan that was not deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedOrphan {
    /// ARN of the orphaned function.
    pub arn: String,
    /// Why it was skipped.
    pub reason: SkipReason,
}

/// Outcome of a sweep.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Edge functions found.
    pub enumerated: usize,
    /// Attachment references found (duplicates included).
    pub attached: usize,
    /// Edge functions with no attachment.
    pub orphaned: usize,
    /// Stack deletions dispatched.
    pub deleted: usize,
    /// Orphans left in place, in encounter order.
    pub skipped: Vec<SkippedOrphan>,
}

/// Functions with no attachment, in the order and multiplicity of
/// `functions`.
///
/// Comparison is exact; `attached` is expected to have version qualifiers
/// already stripped.
pub fn orphans(functions: &[String], attached: &[String]) -> Vec<String> {
    let attached: HashSet<&str> = attached.iter().map(String::as_str).collect();
    functions
        .iter()
        .filter(|arn| !attached.contains(arn.as_str()))
        .cloned()
        .collect()
}

/// Runs the reconciliation pipeline against injected providers.
pub struct Sweeper<'a> {
    functions: &'a dyn FunctionSource,
    distributions: &'a dyn DistributionSource,
    stacks: &'a dyn StackService,
    reporter: &'a dyn Reporter,
}

impl fmt::Debug for Sweeper<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sweeper").finish_non_exhaustive()
    }
}

impl<'a> Sweeper<'a> {
    /// Build a sweeper over the given providers.
    pub fn new(
        functions: &'a dyn FunctionSource,
        distributions: &'a dyn DistributionSource,
        stacks: &'a dyn StackService,
        reporter: &'a dyn Reporter,
    ) -> Self {
        Self {
            functions,
            distributions,
            stacks,
            reporter,
        }
    }

    /// Enumerate everything and delete the stacks of orphaned edge functions.
    ///
    /// # Errors
    ///
    /// Any listing or delete failure aborts the run. Deletions dispatched
    /// before the failure are not rolled back.
    pub async fn run(&self) -> Result<SweepReport> {
        let functions = list_edge_functions(self.functions).await?;
        self.reporter
            .info(&format!("Found {} edge functions.", functions.len()));

        let attached = list_attached_functions(self.distributions).await?;
        self.reporter
            .info(&format!("Found {} attached functions.", attached.len()));

        let (orphaned, report) = self.tally(&functions, &attached);
        let stacks = list_stacks(self.stacks).await?;

        self.delete_orphans(orphaned, &stacks, report).await
    }

    /// Delete the stacks of `functions` that are missing from `attached`.
    ///
    /// # Errors
    ///
    /// Fails on the first delete request the provider rejects.
    pub async fn reconcile(
        &self,
        functions: &[String],
        attached: &[String],
        stacks: &[StackSummary],
    ) -> Result<SweepReport> {
        let (orphaned, report) = self.tally(functions, attached);
        self.delete_orphans(orphaned, stacks, report).await
    }

    fn tally(&self, functions: &[String], attached: &[String]) -> (Vec<String>, SweepReport) {
        let orphaned = orphans(functions, attached);
        self.reporter.info(&format!(
            "Calculated {} unattached functions.",
            orphaned.len()
        ));

        let report = SweepReport {
            enumerated: functions.len(),
            attached: attached.len(),
            orphaned: orphaned.len(),
            ..SweepReport::default()
        };
        (orphaned, report)
    }

    async fn delete_orphans(
        &self,
        orphaned: Vec<String>,
        stacks: &[StackSummary],
        mut report: SweepReport,
    ) -> Result<SweepReport> {
        for arn in orphaned {
            let Some(token) = extract_stack_token(&arn) else {
                warn!(%arn, "no stack token in function ARN");
                self.reporter
                    .warning(&format!("Could not resolve stack ID from {arn}."));
                report.skipped.push(SkippedOrphan {
                    arn,
                    reason: SkipReason::NoStackToken,
                });
                continue;
            };

            let Some(stack_name) =
                find_stack(token, stacks).and_then(|stack| stack.stack_name.as_deref())
            else {
                warn!(%arn, token, "no stack matches token");
                self.reporter.warning(&format!(
                    "Could not resolve stack for {arn} (stack ID search {token})."
                ));
                let token = token.to_string();
                report.skipped.push(SkippedOrphan {
                    arn,
                    reason: SkipReason::NoMatchingStack { token },
                });
                continue;
            };

            self.stacks.delete_stack(stack_name).await?;
            info!(%arn, stack = stack_name, "stack deletion requested");
            report.deleted += 1;
        }

        self.reporter.success(&format!(
            "Deleted {} stacks with unattached edge functions.",
            report.deleted
        ));
        Ok(report)
    }
}
