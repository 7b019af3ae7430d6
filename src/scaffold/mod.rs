//! Project scaffolding.
//!
//! This module provides:
//! - [`Environment`] and [`Generator`] for template instantiation
//! - [`Reporter`] implementations for terminal and test output
//! - [`init`], the project-bootstrap entry point used by the outer
//!   launcher when it creates a fresh project directory
//!
//! `init` runs outside command dispatch: there is no project yet, so
//! no config resolution and no environment setup run.

pub mod environment;
pub mod generator;
pub mod recording;
pub mod reporter;
pub mod templates;

pub use environment::{validate_project_name, Environment};
pub use generator::Generator;
pub use recording::{Event, RecordingReporter};
pub use reporter::{ConsoleReporter, Reporter, SilentCreate};
pub use templates::{
    TemplateVars, ANDROID_TEMPLATE, ANDROID_TEMPLATE_ID, APP_TEMPLATE, APP_TEMPLATE_ID,
    LIBRARY_TEMPLATE, LIBRARY_TEMPLATE_ID,
};

use crate::error::Result;
use std::path::Path;

/// Arguments accepted by [`init`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldArgs {
    /// A bare project name; trailing process arguments are appended.
    Name(String),
    /// A fully prepared argument list, used as-is.
    List(Vec<String>),
}

/// Position of the first generator argument in the launcher's argv
/// (program, subcommand, project name).
const TRAILING_ARGS_OFFSET: usize = 3;

/// Normalize [`ScaffoldArgs`] into the generator's argument list.
///
/// `trailing` supplies the process arguments appended after a bare
/// name; [`init`] feeds it the real argv.
pub fn normalize_args<I>(args: ScaffoldArgs, trailing: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    match args {
        ScaffoldArgs::List(list) => list,
        ScaffoldArgs::Name(name) => {
            let mut out = vec![name];
            out.extend(trailing);
            out
        }
    }
}

/// Bootstrap a new application project in `project_dir`.
///
/// Renders the application template with file-creation output
/// suppressed; skips, warnings, and overwrite prompts still reach the
/// terminal. Generation errors propagate to the caller.
pub fn init(project_dir: &Path, args: ScaffoldArgs) -> Result<()> {
    let args = normalize_args(args, std::env::args().skip(TRAILING_ARGS_OFFSET));

    let reporter = SilentCreate::new(ConsoleReporter::new());
    let mut env = Environment::new(Box::new(reporter));
    env.register(APP_TEMPLATE_ID, &APP_TEMPLATE);

    let generator = env.create(APP_TEMPLATE_ID, args)?;
    let name = generator.project_name().to_string();
    generator.destination_root(project_dir).run()?;

    env.reporter().info(&format!(
        "\n{name} is ready at {}.\n\nNext steps:\n  cairn start        start the dev server\n  cairn run-android  build and install on Android\n  cairn run-ios      build for the iOS simulator",
        project_dir.display()
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_name_appends_trailing_args() {
        let args = normalize_args(
            ScaffoldArgs::Name("Summit".into()),
            vec!["--verbose".to_string(), "--template".to_string()],
        );
        assert_eq!(args, vec!["Summit", "--verbose", "--template"]);
    }

    #[test]
    fn normalize_name_without_trailing_is_just_name() {
        let args = normalize_args(ScaffoldArgs::Name("Summit".into()), vec![]);
        assert_eq!(args, vec!["Summit"]);
    }

    #[test]
    fn normalize_list_is_identity() {
        let list = vec!["Summit".to_string(), "--skip-install".to_string()];
        let args = normalize_args(ScaffoldArgs::List(list.clone()), vec!["ignored".to_string()]);
        assert_eq!(args, list);
    }

    #[test]
    fn init_rejects_invalid_name() {
        let temp = tempfile::TempDir::new().unwrap();
        let result = init(
            temp.path(),
            ScaffoldArgs::List(vec!["not a name".to_string()]),
        );
        assert!(result.is_err());
    }

    #[test]
    fn init_scaffolds_app_template() {
        let temp = tempfile::TempDir::new().unwrap();
        init(temp.path(), ScaffoldArgs::List(vec!["Summit".to_string()])).unwrap();

        assert!(temp.path().join("index.js").exists());
        assert!(temp.path().join("cairn.yml").exists());
    }
}
