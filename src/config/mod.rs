//! Configuration resolution for Cairn.
//!
//! This module handles all aspects of configuration:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//!
//! # Example
//!
//! ```
//! use cairn::config::resolve_from;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("cairn.yml"), "app_name: Trailhead").unwrap();
//!
//! let config = resolve_from(temp.path(), None).unwrap();
//! assert_eq!(config.app_name, Some("Trailhead".to_string()));
//! assert_eq!(config.server.port, 8081);
//! ```
//!
//! # Resolution Order
//!
//! 1. `--config <path>` loads exactly that file (missing file is fatal)
//! 2. Otherwise the nearest `cairn.yml` at or above the tool's install
//!    directory is discovered
//! 3. No file at all falls back to the built-in defaults
//!
//! In every case the file is overlaid on the defaults, so partial
//! configs are the norm.

pub mod loader;
pub mod merger;
pub mod schema;

pub use loader::{find_config_file, load_config_value, parse_with_defaults, resolve_from, CONFIG_FILE};
pub use merger::deep_merge;
pub use schema::{AndroidConfig, BundlerConfig, Config, IosConfig, ServerConfig};
