//! Init guard.
//!
//! Bootstrapping a fresh project is the outer launcher's job (it calls
//! [`crate::scaffold::init`] before any project exists). When `init` is
//! typed inside an existing project it lands here instead; the guard
//! explains the situation and succeeds, because giving guidance is not
//! a failure.

use crate::config::Config;
use crate::error::Result;

use super::dispatcher::Command;

/// The init guard implementation.
pub struct InitGuardCommand;

impl Command for InitGuardCommand {
    fn run(&self, _args: &[String], _config: &Config) -> Result<()> {
        println!("A Cairn project already exists here.");
        println!();
        println!("To create a new app, run the launcher from an empty directory.");
        println!("Inside an existing project, the usual commands apply:");
        println!("  cairn start");
        println!("  cairn run-android");
        println!("  cairn run-ios");
        Ok(())
    }
}
