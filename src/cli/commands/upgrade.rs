//! Upgrade command implementation.
//!
//! `cairn upgrade` re-renders the app template over the project after a
//! tool upgrade. Files the user has modified differ from the template,
//! so the full console reporter is used and every conflict is prompted
//! individually.

use crate::config::Config;
use crate::error::Result;
use crate::scaffold::{ConsoleReporter, Environment, APP_TEMPLATE, APP_TEMPLATE_ID};

use super::dispatcher::Command;

/// The upgrade command implementation.
pub struct UpgradeCommand;

impl Command for UpgradeCommand {
    fn run(&self, _args: &[String], config: &Config) -> Result<()> {
        let name = config.project_name();

        let mut env = Environment::new(Box::new(ConsoleReporter::new()));
        env.register(APP_TEMPLATE_ID, &APP_TEMPLATE);
        env.create(APP_TEMPLATE_ID, vec![name])?
            .destination_root(&config.root)
            .run()?;

        println!("Project files are up to date");
        Ok(())
    }
}
