//! Configuration conversion utilities for CLI arguments

use crate::cli::main_impl::Cli;
use crate::config::RemovalConfig;

/// Convert CLI arguments to a `RemovalConfig`
pub(crate) struct CliConfigBuilder;

impl CliConfigBuilder {
    /// Build a `RemovalConfig` from CLI arguments
    ///
    /// The threshold is already range-checked by clap's `u8` parsing, so
    /// there is nothing further to validate.
    pub(crate) fn from_cli(cli: &Cli) -> RemovalConfig {
        RemovalConfig::builder().threshold(cli.threshold).build()
    }
}
