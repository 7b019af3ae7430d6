//! Version probe.
//!
//! Registered under the literal key `--version` so `cairn --version`
//! resolves through the ordinary dispatch table.

use crate::config::Config;
use crate::error::Result;

use super::dispatcher::Command;

/// The version command implementation.
pub struct VersionCommand;

impl Command for VersionCommand {
    fn run(&self, _args: &[String], _config: &Config) -> Result<()> {
        println!("cairn {}", env!("CARGO_PKG_VERSION"));
        Ok(())
    }
}
