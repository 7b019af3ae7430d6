//! Run-ios command implementation.
//!
//! `cairn run-ios` builds the configured Xcode scheme for the iOS
//! simulator. The scheme falls back to the app name when not set
//! explicitly.

use crate::config::Config;
use crate::error::Result;
use crate::shell;

use super::dispatcher::Command;

/// The run-ios command implementation.
pub struct RunIosCommand;

/// Scheme to build: explicit config wins, then the app name.
fn scheme_for(config: &Config) -> Option<String> {
    config
        .ios
        .scheme
        .clone()
        .or_else(|| config.app_name.clone())
}

/// Arguments for the simulator build.
fn xcodebuild_args(scheme: &str, simulator: &str) -> Vec<String> {
    vec![
        "-scheme".to_string(),
        scheme.to_string(),
        "-destination".to_string(),
        format!("platform=iOS Simulator,name={simulator}"),
        "build".to_string(),
    ]
}

impl Command for RunIosCommand {
    fn run(&self, _args: &[String], config: &Config) -> Result<()> {
        let Some(scheme) = scheme_for(config) else {
            return Err(anyhow::anyhow!(
                "No iOS scheme configured; set ios.scheme or app_name in cairn.yml"
            )
            .into());
        };

        println!("Building scheme {scheme} for {}", config.ios.simulator);
        shell::run(
            "xcodebuild",
            &xcodebuild_args(&scheme, &config.ios.simulator),
            Some(&config.root.join("ios")),
        )
    }
}
