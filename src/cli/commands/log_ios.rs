//! Log-ios command implementation.
//!
//! `cairn log-ios` streams the booted simulator's unified log,
//! optionally filtered with `--filter <regex>`.

use clap::Parser;

use crate::config::Config;
use crate::error::Result;

use super::device_log::{stream_filtered, LogArgs};
use super::dispatcher::Command;

/// The log-ios command implementation.
pub struct LogIosCommand;

impl Command for LogIosCommand {
    fn run(&self, args: &[String], _config: &Config) -> Result<()> {
        let parsed = LogArgs::try_parse_from(args).map_err(anyhow::Error::new)?;
        stream_filtered(
            "xcrun",
            &[
                "simctl",
                "spawn",
                "booted",
                "log",
                "stream",
                "--style",
                "compact",
            ],
            parsed.filter.as_deref(),
        )
    }
}
