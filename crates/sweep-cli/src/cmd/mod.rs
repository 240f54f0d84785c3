//! Subcommand implementations.

pub mod delete_fns;
