//! Delete-fns command (orphaned edge function cleanup)

use anyhow::{Context, Result};
use sweep_core::aws::AwsProviders;
use sweep_core::{SweepConfig, Sweeper};
use tracing::info;

use crate::ui::ConsoleReporter;

/// Delete the stacks of Lambda@Edge functions no distribution references.
pub async fn delete_fns() -> Result<()> {
    let config = SweepConfig::default();
    let providers = AwsProviders::connect(&config).await;
    let reporter = ConsoleReporter::new();

    let report = Sweeper::new(
        &providers.functions,
        &providers.distributions,
        &providers.stacks,
        &reporter,
    )
    .run()
    .await
    .context("Failed to delete orphaned edge functions")?;

    info!(
        enumerated = report.enumerated,
        attached = report.attached,
        orphaned = report.orphaned,
        deleted = report.deleted,
        skipped = report.skipped.len(),
        "sweep finished"
    );
    Ok(())
}
