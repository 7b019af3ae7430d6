//! Bundle and unbundle command implementations.
//!
//! Both commands delegate to the external bundler's build mode;
//! `unbundle` additionally asks for the output to be split into
//! lazy-loaded segments. The two share one handler parameterized on the
//! split flag.

use clap::Parser;

use crate::config::Config;
use crate::error::Result;
use crate::shell;

use super::dispatcher::Command;

/// Options accepted by `cairn bundle` and `cairn unbundle`.
#[derive(Debug, Parser)]
#[command(name = "bundle", disable_version_flag = true)]
pub struct BundleArgs {
    /// Entry module, overriding the configured one
    #[arg(long)]
    pub entry: Option<String>,

    /// Output path for the bundle
    #[arg(long, default_value = "main.bundle")]
    pub out: String,

    /// Build a development (non-minified) bundle
    #[arg(long)]
    pub dev: bool,

    /// Path to an alternate configuration file (read by the dispatcher)
    #[arg(long)]
    pub config: Option<String>,
}

/// The bundle/unbundle command implementation.
pub struct BundleCommand {
    split: bool,
}

impl BundleCommand {
    /// Plain offline bundle.
    pub fn new() -> Self {
        Self { split: false }
    }

    /// Bundle split into lazy-loaded segments.
    pub fn split() -> Self {
        Self { split: true }
    }
}

impl Default for BundleCommand {
    fn default() -> Self {
        Self::new()
    }
}

/// Arguments handed to the bundler's build mode.
fn build_args(args: &BundleArgs, config: &Config, split: bool) -> Vec<String> {
    let mut out = vec![
        "build".to_string(),
        "--root".to_string(),
        config.root.display().to_string(),
        "--entry".to_string(),
        args.entry.clone().unwrap_or_else(|| config.entry.clone()),
        "--out".to_string(),
        args.out.clone(),
    ];

    if args.dev {
        out.push("--dev".to_string());
    }
    if split {
        out.push("--split".to_string());
    }
    if !config.bundler.asset_exts.is_empty() {
        out.push("--asset-exts".to_string());
        out.push(config.bundler.asset_exts.join(","));
    }

    out
}

impl Command for BundleCommand {
    fn run(&self, args: &[String], config: &Config) -> Result<()> {
        let parsed = BundleArgs::try_parse_from(args).map_err(anyhow::Error::new)?;
        shell::run(
            &config.bundler.command,
            &build_args(&parsed, config, self.split),
            Some(&config.root),
        )
    }
}
