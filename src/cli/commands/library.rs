//! New-library command implementation.
//!
//! `cairn new-library` instantiates the library template under the
//! project's `libraries/` directory. Unlike `init`, creation output is
//! shown in full; a handful of new files is signal here, not noise.

use clap::Parser;

use crate::config::Config;
use crate::error::Result;
use crate::scaffold::{ConsoleReporter, Environment, LIBRARY_TEMPLATE, LIBRARY_TEMPLATE_ID};

use super::dispatcher::Command;

/// Options accepted by `cairn new-library`.
#[derive(Debug, Parser)]
#[command(name = "new-library", disable_version_flag = true)]
pub struct NewLibraryArgs {
    /// Name of the library to generate
    #[arg(long)]
    pub name: String,

    /// Path to an alternate configuration file (read by the dispatcher)
    #[arg(long)]
    pub config: Option<String>,
}

/// The new-library command implementation.
pub struct NewLibraryCommand;

impl Command for NewLibraryCommand {
    fn run(&self, args: &[String], config: &Config) -> Result<()> {
        let parsed = NewLibraryArgs::try_parse_from(args).map_err(anyhow::Error::new)?;

        let mut env = Environment::new(Box::new(ConsoleReporter::new()));
        env.register(LIBRARY_TEMPLATE_ID, &LIBRARY_TEMPLATE);
        env.create(LIBRARY_TEMPLATE_ID, vec![parsed.name.clone()])?
            .destination_root(config.root.join("libraries"))
            .run()?;

        println!("Created library {} under libraries/", parsed.name);
        Ok(())
    }
}
