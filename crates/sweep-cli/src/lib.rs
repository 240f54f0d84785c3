//! edge-sweep - orphaned Lambda@Edge cleanup CLI
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
//!
//! Deletes the CloudFormation stacks of Lambda@Edge functions that no
//! CloudFront distribution references any more.

pub mod cmd;
pub mod ui;

use clap::{Parser, Subcommand};

/// Command-line interface.
#[derive(Debug, Parser)]
#[command(name = "edge-sweep")]
#[command(author, version, about = "edge-sweep - clean up orphaned Lambda@Edge functions")]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Delete orphaned Lambda@Edge functions in us-east-1
    #[command(name = "delete-fns")]
    DeleteFns,
}
