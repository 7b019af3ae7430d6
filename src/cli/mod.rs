//! Command-line interface for Cairn.
//!
//! # Architecture
//!
//! - [`args`] - extraction of the dispatcher-level `--config` option
//! - [`commands`] - the registry, the dispatcher, and one module per
//!   command
//!
//! There is no top-level clap grammar: the command table itself is the
//! grammar, and each command parses its own options from the verbatim
//! argument slice.

pub mod args;
pub mod commands;

pub use args::extract_config_path;
pub use commands::{Command, CommandEntry, CommandRegistry, CommandResult, Dispatcher};
