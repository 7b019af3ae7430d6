//! Android command implementation.
//!
//! `cairn android` generates an `android/` project shell for an app
//! that does not have one yet, named after the configured app.

use crate::config::Config;
use crate::error::Result;
use crate::scaffold::{ConsoleReporter, Environment, ANDROID_TEMPLATE, ANDROID_TEMPLATE_ID};

use super::dispatcher::Command;

/// The android command implementation.
pub struct AndroidCommand;

impl Command for AndroidCommand {
    fn run(&self, _args: &[String], config: &Config) -> Result<()> {
        let name = config.project_name();

        let mut env = Environment::new(Box::new(ConsoleReporter::new()));
        env.register(ANDROID_TEMPLATE_ID, &ANDROID_TEMPLATE);
        env.create(ANDROID_TEMPLATE_ID, vec![name.clone()])?
            .destination_root(&config.root)
            .run()?;

        println!("Generated Android project for {name}");
        Ok(())
    }
}
