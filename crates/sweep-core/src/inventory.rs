//! Enumerators for the three inputs of a sweep.

use crate::error::Result;
use crate::naming::{is_edge_function, strip_version_qualifier};
use crate::source::{DistributionSource, FunctionSource, StackService, paginate};
use crate::types::{Distribution, StackSummary};

/// All edge function ARNs in the account, in listing order.
///
/// Records without an ARN are skipped.
///
/// # Errors
///
/// Fails on the first provider error.
pub async fn list_edge_functions(source: &dyn FunctionSource) -> Result<Vec<String>> {
    let records =
        paginate("lambda:ListFunctions", move |cursor| source.list_functions(cursor)).await?;

    Ok(records
        .into_iter()
        .filter_map(|record| record.arn)
        .filter(|arn| is_edge_function(arn))
        .collect())
}

/// ARNs of every function attached to any cache behavior of any
/// distribution, with version qualifiers stripped.
///
/// The result may contain duplicates when several behaviors reference the
/// same function.
///
/// # Errors
///
/// Fails on the first provider error.
pub async fn list_attached_functions(source: &dyn DistributionSource) -> Result<Vec<String>> {
    let distributions = paginate("cloudfront:ListDistributions", move |cursor| {
        source.list_distributions(cursor)
    })
    .await?;

    Ok(distributions
        .iter()
        .flat_map(Distribution::cache_behaviors)
        .flat_map(|behavior| behavior.function_arns.iter())
        .map(|arn| strip_version_qualifier(arn).to_string())
        .collect())
}

/// Every stack summary the provider lists. No status filtering is applied.
///
/// # Errors
///
/// Fails on the first provider error.
pub async fn list_stacks(service: &dyn StackService) -> Result<Vec<StackSummary>> {
    paginate("cloudformation:ListStacks", move |cursor| service.list_stacks(cursor)).await
}
