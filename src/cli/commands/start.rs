//! Start command implementation.
//!
//! `cairn start` runs the external bundler in serve mode, wiring in the
//! project's entry module and dev-server address. The bundler inherits
//! the terminal and runs until interrupted.

use crate::config::Config;
use crate::error::Result;
use crate::shell;

use super::dispatcher::Command;

/// The start command implementation.
pub struct StartCommand;

/// Arguments handed to the bundler's serve mode.
fn serve_args(config: &Config) -> Vec<String> {
    vec![
        "serve".to_string(),
        "--root".to_string(),
        config.root.display().to_string(),
        "--entry".to_string(),
        config.entry.clone(),
        "--host".to_string(),
        config.server.host.clone(),
        "--port".to_string(),
        config.server.port.to_string(),
    ]
}

impl Command for StartCommand {
    fn run(&self, _args: &[String], config: &Config) -> Result<()> {
        println!(
            "Starting dev server on {}:{}",
            config.server.host, config.server.port
        );
        shell::run(
            &config.bundler.command,
            &serve_args(config),
            Some(&config.root),
        )
    }
}
