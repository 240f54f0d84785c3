//! AWS SDK implementations of the provider traits.
//!
//! - [`LambdaFunctions`]: `lambda:ListFunctions`
//! - [`CloudFrontDistributions`]: `cloudfront:ListDistributions`
//! - [`CloudFormationStacks`]: `cloudformation:ListStacks` / `DeleteStack`

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_cloudformation as cloudformation;
use aws_sdk_cloudfront as cloudfront;
use aws_sdk_lambda as lambda;
use cloudfront::types::{
    CacheBehaviors, DistributionSummary, LambdaFunctionAssociation, LambdaFunctionAssociations,
};
use tracing::debug;

use crate::config::SweepConfig;
use crate::error::{Error, Result};
use crate::source::{DistributionSource, FunctionSource, StackService};
use crate::types::{CacheBehavior, Distribution, FunctionRecord, Page, StackSummary};

/// Load shared SDK configuration from the default provider chain, with the
/// region pinned to `config.region`.
pub async fn load_sdk_config(config: &SweepConfig) -> SdkConfig {
    aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()))
        .load()
        .await
}

/// The three provider clients a sweep needs.
#[derive(Debug, Clone)]
pub struct AwsProviders {
    /// Lambda function listing.
    pub functions: LambdaFunctions,
    /// CloudFront distribution listing.
    pub distributions: CloudFrontDistributions,
    /// CloudFormation stack listing and deletion.
    pub stacks: CloudFormationStacks,
}

impl AwsProviders {
    /// Build all clients from the ambient credential chain.
    pub async fn connect(config: &SweepConfig) -> Self {
        let sdk_config = load_sdk_config(config).await;
        debug!(region = %config.region, "loaded AWS configuration");
        Self::from_sdk_config(&sdk_config)
    }

    /// Build all clients from an existing SDK configuration.
    pub fn from_sdk_config(sdk_config: &SdkConfig) -> Self {
        Self {
            functions: LambdaFunctions::new(lambda::Client::new(sdk_config)),
            distributions: CloudFrontDistributions::new(cloudfront::Client::new(sdk_config)),
            stacks: CloudFormationStacks::new(cloudformation::Client::new(sdk_config)),
        }
    }
}

/// Lambda-backed [`FunctionSource`].
#[derive(Debug, Clone)]
pub struct LambdaFunctions {
    client: lambda::Client,
}

impl LambdaFunctions {
    /// Wrap a Lambda client.
    pub fn new(client: lambda::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FunctionSource for LambdaFunctions {
    async fn list_functions(&self, cursor: Option<String>) -> Result<Page<FunctionRecord>> {
        let resp = self
            .client
            .list_functions()
            .set_marker(cursor)
            .send()
            .await
            .map_err(|e| Error::provider("lambda:ListFunctions", e))?;

        let items = resp
            .functions()
            .iter()
            .map(|function| FunctionRecord {
                arn: function.function_arn().map(str::to_string),
            })
            .collect();

        Ok(Page {
            items,
            next: resp.next_marker().map(str::to_string),
        })
    }
}

/// CloudFront-backed [`DistributionSource`].
#[derive(Debug, Clone)]
pub struct CloudFrontDistributions {
    client: cloudfront::Client,
}

impl CloudFrontDistributions {
    /// Wrap a CloudFront client.
    pub fn new(client: cloudfront::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DistributionSource for CloudFrontDistributions {
    async fn list_distributions(&self, cursor: Option<String>) -> Result<Page<Distribution>> {
        let resp = self
            .client
            .list_distributions()
            .set_marker(cursor)
            .send()
            .await
            .map_err(|e| Error::provider("cloudfront:ListDistributions", e))?;

        let Some(list) = resp.distribution_list() else {
            return Ok(Page::last(Vec::new()));
        };

        Ok(Page {
            items: list.items().iter().map(distribution_from_summary).collect(),
            next: list.next_marker().map(str::to_string),
        })
    }
}

fn distribution_from_summary(summary: &DistributionSummary) -> Distribution {
    Distribution {
        default_behavior: summary
            .default_cache_behavior()
            .map(|b| behavior_from_associations(b.lambda_function_associations())),
        behaviors: summary
            .cache_behaviors()
            .map(CacheBehaviors::items)
            .unwrap_or_default()
            .iter()
            .map(|b| behavior_from_associations(b.lambda_function_associations()))
            .collect(),
    }
}

fn behavior_from_associations(
    associations: Option<&LambdaFunctionAssociations>,
) -> CacheBehavior {
    CacheBehavior::new(
        associations
            .map(LambdaFunctionAssociations::items)
            .unwrap_or_default()
            .iter()
            .map(LambdaFunctionAssociation::lambda_function_arn),
    )
}

/// CloudFormation-backed [`StackService`].
#[derive(Debug, Clone)]
pub struct CloudFormationStacks {
    client: cloudformation::Client,
}

impl CloudFormationStacks {
    /// Wrap a CloudFormation client.
    pub fn new(client: cloudformation::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StackService for CloudFormationStacks {
    async fn list_stacks(&self, cursor: Option<String>) -> Result<Page<StackSummary>> {
        let resp = self
            .client
            .list_stacks()
            .set_next_token(cursor)
            .send()
            .await
            .map_err(|e| Error::provider("cloudformation:ListStacks", e))?;

        let items = resp
            .stack_summaries()
            .iter()
            .map(|summary| StackSummary {
                stack_id: summary.stack_id().map(str::to_string),
                stack_name: summary.stack_name().map(str::to_string),
            })
            .collect();

        Ok(Page {
            items,
            next: resp.next_token().map(str::to_string),
        })
    }

    async fn delete_stack(&self, stack_name: &str) -> Result<()> {
        self.client
            .delete_stack()
            .stack_name(stack_name)
            .send()
            .await
            .map_err(|e| Error::provider("cloudformation:DeleteStack", e))?;
        Ok(())
    }
}
