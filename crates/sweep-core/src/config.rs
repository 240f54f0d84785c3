//! Run configuration.

/// Region hosting Lambda@Edge functions and the stacks that deploy them.
///
/// Lambda@Edge functions can only be created in `us-east-1`, so both the
/// function and stack clients are pinned there. CloudFront is global.
pub const EDGE_REGION: &str = "us-east-1";

/// Settings for a sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepConfig {
    /// Region for the function and stack clients.
    pub region: String,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            region: EDGE_REGION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_region_is_edge_region() {
        assert_eq!(SweepConfig::default().region, "us-east-1");
    }
}
