//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`Dispatcher`] for routing invocations through the registry
//!
//! Dispatch is fixed-order: usage for empty invocations, then the
//! platform setup script, then registry lookup, config resolution, and
//! finally the handler. Handler errors propagate to the caller
//! untouched.

use std::path::{Path, PathBuf};

use crate::cli::args::extract_config_path;
use crate::cli::commands::registry::CommandRegistry;
use crate::config::{resolve_from, Config};
use crate::error::Result;
use crate::shell::run_setup_script;

/// Trait for command implementations.
///
/// Handlers receive the full invocation arguments (command name
/// included) and the resolved configuration. They report failure by
/// returning an error, which aborts the invocation.
pub trait Command {
    fn run(&self, args: &[String], config: &Config) -> Result<()>;
}

/// Result of command dispatch.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the invocation succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Routes an invocation through the command registry.
pub struct Dispatcher {
    tool_dir: PathBuf,
    registry: CommandRegistry,
}

impl Dispatcher {
    /// Create a dispatcher with the built-in command table.
    ///
    /// `tool_dir` is the directory the binary is installed in; the
    /// setup script is expected next to it and config discovery starts
    /// from it.
    pub fn new(tool_dir: PathBuf) -> Self {
        Self::with_registry(tool_dir, CommandRegistry::builtin())
    }

    /// Create a dispatcher with a custom registry.
    pub fn with_registry(tool_dir: PathBuf, registry: CommandRegistry) -> Self {
        Self { tool_dir, registry }
    }

    /// The tool's install directory.
    pub fn tool_dir(&self) -> &Path {
        &self.tool_dir
    }

    /// Dispatch one invocation.
    ///
    /// `args` is the process argument list without the program name;
    /// `args[0]` selects the command and the whole slice is handed to
    /// the handler verbatim.
    pub fn run(&self, args: &[String]) -> Result<CommandResult> {
        let Some(name) = args.first() else {
            return Ok(self.print_usage());
        };

        run_setup_script(&self.tool_dir)?;

        let Some(entry) = self.registry.get(name) else {
            eprintln!("Unrecognized command '{name}'");
            // The usage path owns the outcome for this branch too; no
            // separate status is forced here.
            return Ok(self.print_usage());
        };

        tracing::debug!("Dispatching '{}'", name);

        let explicit = extract_config_path(args);
        let config = resolve_from(&self.tool_dir, explicit.as_deref())?;

        entry.command().run(args, &config)?;
        Ok(CommandResult::success())
    }

    /// Print usage and return the usage outcome.
    fn print_usage(&self) -> CommandResult {
        println!("Usage: cairn <command> [--config <path>]");
        println!();
        println!("Commands:");
        for entry in self.registry.documented() {
            println!("  - {}: {}", entry.name(), entry.description());
        }
        CommandResult::failure(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::registry::CommandEntry;
    use std::fs;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    /// Handler double that records what it was invoked with.
    struct RecordingCommand {
        calls: Arc<Mutex<Vec<(Vec<String>, PathBuf)>>>,
    }

    impl Command for RecordingCommand {
        fn run(&self, args: &[String], config: &Config) -> Result<()> {
            self.calls
                .lock()
                .unwrap()
                .push((args.to_vec(), config.root.clone()));
            Ok(())
        }
    }

    struct FailingCommand;

    impl Command for FailingCommand {
        fn run(&self, _args: &[String], _config: &Config) -> Result<()> {
            Err(crate::error::CairnError::CommandFailed {
                command: "probe".into(),
                code: Some(2),
            })
        }
    }

    #[cfg(unix)]
    fn install_setup_script(tool_dir: &Path) {
        use std::os::unix::fs::PermissionsExt;
        let script = tool_dir.join("setup_env.sh");
        fs::write(&script, "#!/bin/sh\nexit 0\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    }

    fn recording_dispatcher(
        tool_dir: &Path,
        name: &'static str,
    ) -> (Dispatcher, Arc<Mutex<Vec<(Vec<String>, PathBuf)>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let registry = CommandRegistry::from_entries(vec![CommandEntry::documented(
            name,
            "recording double",
            Box::new(RecordingCommand {
                calls: Arc::clone(&calls),
            }),
        )]);
        (
            Dispatcher::with_registry(tool_dir.to_path_buf(), registry),
            calls,
        )
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn command_result_ctors() {
        let ok = CommandResult::success();
        assert!(ok.success);
        assert_eq!(ok.exit_code, 0);

        let failed = CommandResult::failure(1);
        assert!(!failed.success);
        assert_eq!(failed.exit_code, 1);
    }

    #[test]
    fn empty_args_returns_usage_outcome_without_setup() {
        let temp = TempDir::new().unwrap();
        // No setup script installed: the usage path must not require one.
        let (dispatcher, calls) = recording_dispatcher(temp.path(), "probe");

        let result = dispatcher.run(&[]).unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert!(calls.lock().unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn handler_receives_full_args_and_config() {
        let temp = TempDir::new().unwrap();
        install_setup_script(temp.path());
        fs::write(temp.path().join("cairn.yml"), "app_name: Probe").unwrap();
        let (dispatcher, calls) = recording_dispatcher(temp.path(), "probe");

        let result = dispatcher
            .run(&args(&["probe", "--flag", "value"]))
            .unwrap();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);

        let recorded = calls.lock().unwrap();
        assert_eq!(recorded.len(), 1);
        // The command name itself stays in the slice.
        assert_eq!(recorded[0].0, args(&["probe", "--flag", "value"]));
        assert_eq!(recorded[0].1, temp.path().to_path_buf());
    }

    #[cfg(unix)]
    #[test]
    fn explicit_config_is_loaded_and_left_in_args() {
        let temp = TempDir::new().unwrap();
        install_setup_script(temp.path());
        let custom = temp.path().join("alt.yml");
        fs::write(&custom, "app_name: Alt").unwrap();
        let (dispatcher, calls) = recording_dispatcher(temp.path(), "probe");

        let invocation = args(&["probe", "--config", custom.to_str().unwrap()]);
        dispatcher.run(&invocation).unwrap();

        let recorded = calls.lock().unwrap();
        assert_eq!(recorded[0].0, invocation);
        // Explicit config roots at the working directory.
        assert_eq!(recorded[0].1, std::env::current_dir().unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn unknown_command_shares_the_usage_outcome() {
        let temp = TempDir::new().unwrap();
        install_setup_script(temp.path());
        let (dispatcher, calls) = recording_dispatcher(temp.path(), "probe");

        let result = dispatcher.run(&args(&["bogus"])).unwrap();
        // Same outcome as an empty invocation.
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert!(calls.lock().unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn missing_setup_script_is_fatal() {
        let temp = TempDir::new().unwrap();
        let (dispatcher, calls) = recording_dispatcher(temp.path(), "probe");

        let err = dispatcher.run(&args(&["probe"])).unwrap_err();
        assert!(matches!(
            err,
            crate::error::CairnError::SetupScriptFailed { .. }
        ));
        assert!(calls.lock().unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn failing_setup_script_aborts_before_lookup() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let script = temp.path().join("setup_env.sh");
        fs::write(&script, "#!/bin/sh\nexit 9\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        let (dispatcher, calls) = recording_dispatcher(temp.path(), "probe");

        let err = dispatcher.run(&args(&["probe"])).unwrap_err();
        match err {
            crate::error::CairnError::SetupScriptFailed { code, .. } => {
                assert_eq!(code, Some(9));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(calls.lock().unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn handler_error_propagates() {
        let temp = TempDir::new().unwrap();
        install_setup_script(temp.path());
        let registry = CommandRegistry::from_entries(vec![CommandEntry::documented(
            "probe",
            "failing double",
            Box::new(FailingCommand),
        )]);
        let dispatcher = Dispatcher::with_registry(temp.path().to_path_buf(), registry);

        let err = dispatcher.run(&args(&["probe"])).unwrap_err();
        assert!(matches!(
            err,
            crate::error::CairnError::CommandFailed { code: Some(2), .. }
        ));
    }

    #[cfg(unix)]
    #[test]
    fn explicit_config_must_exist() {
        let temp = TempDir::new().unwrap();
        install_setup_script(temp.path());
        let (dispatcher, _) = recording_dispatcher(temp.path(), "probe");

        let err = dispatcher
            .run(&args(&["probe", "--config", "/nonexistent/alt.yml"]))
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::CairnError::ConfigNotFound { .. }
        ));
    }
}
