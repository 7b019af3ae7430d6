//! Filtered device log streaming.
//!
//! Shared plumbing for `log-android` and `log-ios`: both spawn a
//! platform log tool, stream its output line by line, and optionally
//! drop lines not matching a user-supplied regex.

use clap::Parser;
use regex::Regex;

use crate::error::{CairnError, Result};
use crate::shell;

/// Options shared by the log streaming commands.
#[derive(Debug, Parser)]
#[command(name = "log", disable_version_flag = true)]
pub struct LogArgs {
    /// Only print lines matching this regular expression
    #[arg(long)]
    pub filter: Option<String>,

    /// Path to an alternate configuration file (read by the dispatcher)
    #[arg(long)]
    pub config: Option<String>,
}

/// Compile the optional filter pattern.
pub fn compile_filter(pattern: Option<&str>) -> Result<Option<Regex>> {
    match pattern {
        None => Ok(None),
        Some(p) => Regex::new(p)
            .map(Some)
            .map_err(|e| CairnError::InvalidFilter {
                pattern: p.to_string(),
                message: e.to_string(),
            }),
    }
}

/// Stream a log tool's output, printing lines that pass the filter.
///
/// Runs until the tool exits; log streamers normally run forever, so in
/// practice this returns when the user interrupts or the device
/// disappears.
pub fn stream_filtered(program: &str, args: &[&str], filter: Option<&str>) -> Result<()> {
    let filter = compile_filter(filter)?;

    shell::run_streaming(
        program,
        args,
        None,
        Box::new(move |line| {
            let text = line.text();
            if filter.as_ref().is_none_or(|re| re.is_match(text)) {
                println!("{text}");
            }
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_pattern_compiles_to_none() {
        assert!(compile_filter(None).unwrap().is_none());
    }

    #[test]
    fn valid_pattern_compiles() {
        let filter = compile_filter(Some("CairnBridge|Cairn")).unwrap().unwrap();
        assert!(filter.is_match("12-25 10:00:00 I Cairn: booted"));
        assert!(!filter.is_match("12-25 10:00:00 I Other: noise"));
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let err = compile_filter(Some("[unclosed")).unwrap_err();
        match err {
            CairnError::InvalidFilter { pattern, .. } => assert_eq!(pattern, "[unclosed"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn log_args_parse_filter() {
        let parsed =
            LogArgs::try_parse_from(["log-android", "--filter", "Cairn"].iter().copied()).unwrap();
        assert_eq!(parsed.filter.as_deref(), Some("Cairn"));
    }

    #[test]
    fn log_args_accept_config_flag() {
        let parsed =
            LogArgs::try_parse_from(["log-ios", "--config", "alt.yml"].iter().copied()).unwrap();
        assert_eq!(parsed.config.as_deref(), Some("alt.yml"));
    }
}
