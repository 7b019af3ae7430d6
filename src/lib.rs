//! Cairn - command dispatch and project bootstrap for mobile-app
//! development.
//!
//! Cairn is the project-local CLI behind a globally installed launcher:
//! the launcher forwards invocations to [`run`] inside a project and
//! calls [`scaffold::init`] to bring a new project into existence.
//! Every command resolves the project's `cairn.yml` and then delegates
//! to an external tool (the bundler, gradle, adb, xcodebuild).
//!
//! # Modules
//!
//! - [`cli`] - command registry and dispatch
//! - [`config`] - configuration discovery, merging, and schema
//! - [`error`] - error types and result aliases
//! - [`scaffold`] - template-driven project generation
//! - [`shell`] - subprocess execution and environment setup
//!
//! # Example
//!
//! ```
//! use cairn::cli::CommandRegistry;
//!
//! // The exported command set: documented commands plus introspection.
//! let commands = CommandRegistry::public();
//! assert!(commands.get("start").is_some());
//! assert!(commands.get("dependencies").is_some());
//! assert!(commands.get("--version").is_none());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod scaffold;
pub mod shell;

pub use error::{CairnError, Result};

use cli::{CommandResult, Dispatcher};
use std::path::Path;

/// Dispatch one CLI invocation.
///
/// `tool_dir` is the binary's install directory (setup script location
/// and config discovery origin); `args` is the process argument list
/// without the program name.
pub fn run(tool_dir: &Path, args: &[String]) -> Result<CommandResult> {
    Dispatcher::new(tool_dir.to_path_buf()).run(args)
}
