//! Dependencies command implementation.
//!
//! `dependencies` prints the project's resolved native dependency list.
//! It is part of the exported command set for embedding tools, not of
//! the CLI dispatch table.

use clap::Parser;

use crate::config::Config;
use crate::error::Result;

use super::dispatcher::Command;

/// Options accepted by `dependencies`.
#[derive(Debug, Parser)]
#[command(name = "dependencies", disable_version_flag = true)]
pub struct DependenciesArgs {
    /// Print the list as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to an alternate configuration file (read by the dispatcher)
    #[arg(long)]
    pub config: Option<String>,
}

/// The dependencies command implementation.
pub struct DependenciesCommand;

fn render(deps: &[String], json: bool) -> Result<String> {
    if json {
        serde_json::to_string_pretty(deps).map_err(|e| anyhow::Error::new(e).into())
    } else {
        Ok(deps.join("\n"))
    }
}

impl Command for DependenciesCommand {
    fn run(&self, args: &[String], config: &Config) -> Result<()> {
        let parsed = DependenciesArgs::try_parse_from(args).map_err(anyhow::Error::new)?;
        let output = render(&config.dependencies, parsed.json)?;
        if !output.is_empty() {
            println!("{output}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_render_is_one_per_line() {
        let deps = vec!["maps".to_string(), "camera".to_string()];
        assert_eq!(render(&deps, false).unwrap(), "maps\ncamera");
    }

    #[test]
    fn json_render_is_a_string_array() {
        let deps = vec!["maps".to_string()];
        let json = render(&deps, true).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, deps);
    }

    #[test]
    fn empty_list_renders_empty() {
        assert_eq!(render(&[], false).unwrap(), "");
        assert_eq!(
            serde_json::from_str::<Vec<String>>(&render(&[], true).unwrap()).unwrap(),
            Vec::<String>::new()
        );
    }
}
