//! Naming conventions linking edge functions to the stacks that own them.
//!
//! The CDK `EdgeFunction` construct deploys its function from a stack named
//! `edge-lambda-stack-<hash>` and gives the function a name containing
//! `edge-lambda`. Nothing else ties the two resources together, so the sweep
//! resolves an orphaned function to its stack purely by these strings.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::StackSummary;

/// Substring that marks a function ARN as an edge function.
pub const EDGE_FUNCTION_MARKER: &str = "edge-lambda";

/// Literal prefix of the stack token embedded in edge function ARNs.
pub const STACK_TOKEN_PREFIX: &str = "edge-lambda-stack-";

// ASCII word characters only; stack names never contain anything else.
static STACK_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("{STACK_TOKEN_PREFIX}[0-9A-Za-z_]+"))
        .expect("stack token pattern is valid")
});

/// Whether `arn` names an edge function (case-sensitive).
pub fn is_edge_function(arn: &str) -> bool {
    arn.contains(EDGE_FUNCTION_MARKER)
}

/// Strip a trailing `:<digits>` version qualifier.
///
/// Identifiers without a numeric qualifier are returned unchanged.
///
/// ```
/// use sweep_core::naming::strip_version_qualifier;
///
/// assert_eq!(strip_version_qualifier("arn:aws:lambda:us-east-1:1:function:f:7"), "arn:aws:lambda:us-east-1:1:function:f");
/// assert_eq!(strip_version_qualifier("arn:aws:lambda:us-east-1:1:function:f"), "arn:aws:lambda:us-east-1:1:function:f");
/// ```
pub fn strip_version_qualifier(arn: &str) -> &str {
    match arn.rsplit_once(':') {
        Some((base, version))
            if !version.is_empty() && version.bytes().all(|b| b.is_ascii_digit()) =>
        {
            base
        }
        _ => arn,
    }
}

/// Extract the owning stack's token (`edge-lambda-stack-<word>`) from a
/// function ARN. Only the first occurrence is considered.
pub fn extract_stack_token(arn: &str) -> Option<&str> {
    STACK_TOKEN.find(arn).as_ref().map(regex::Match::as_str)
}

/// First stack whose id contains `token`.
///
/// Matching is by substring because stack ids wrap the name in an ARN with a
/// trailing unique suffix.
pub fn find_stack<'a>(token: &str, stacks: &'a [StackSummary]) -> Option<&'a StackSummary> {
    stacks
        .iter()
        .find(|stack| stack.stack_id.as_deref().is_some_and(|id| id.contains(token)))
}
