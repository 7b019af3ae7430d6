//! Log-android command implementation.
//!
//! `cairn log-android` streams `adb logcat` from the connected device,
//! optionally filtered with `--filter <regex>`.

use clap::Parser;

use crate::config::Config;
use crate::error::Result;

use super::device_log::{stream_filtered, LogArgs};
use super::dispatcher::Command;

/// The log-android command implementation.
pub struct LogAndroidCommand;

impl Command for LogAndroidCommand {
    fn run(&self, args: &[String], _config: &Config) -> Result<()> {
        let parsed = LogArgs::try_parse_from(args).map_err(anyhow::Error::new)?;
        stream_filtered("adb", &["logcat"], parsed.filter.as_deref())
    }
}
