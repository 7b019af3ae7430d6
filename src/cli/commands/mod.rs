//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a
//! uniform interface for handlers: the verbatim invocation arguments
//! plus the resolved project configuration.
//!
//! # Architecture
//!
//! Commands are registered in a [`CommandRegistry`] and routed by the
//! [`Dispatcher`]. The handlers themselves stay thin; almost all of
//! them delegate to an external tool (the bundler, gradle, adb,
//! xcodebuild) through [`crate::shell`].

pub mod android;
pub mod bundle;
pub mod dependencies;
pub mod device_log;
pub mod dispatcher;
pub mod init_guard;
pub mod library;
pub mod link;
pub mod log_android;
pub mod log_ios;
pub mod registry;
pub mod run_android;
pub mod run_ios;
pub mod start;
pub mod upgrade;
pub mod version;

pub use dispatcher::{Command, CommandResult, Dispatcher};
pub use registry::{CommandEntry, CommandRegistry};
