//! Subprocess execution and platform environment setup.

pub mod command;
pub mod setup;

pub use command::{display_command, run, run_streaming, OutputCallback, OutputLine};
pub use setup::{run_setup_script, setup_script_name};
