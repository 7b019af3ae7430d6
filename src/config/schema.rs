//! Configuration schema definitions for Cairn.
//!
//! This module contains all the struct definitions that map to
//! the cairn.yml configuration file format.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for cairn.yml.
///
/// Every field carries a default so a missing or empty config file
/// yields a fully usable configuration. The `root` field is never read
/// from the file; the resolver fills it in with the directory that
/// project-relative paths are resolved against.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory project-relative paths resolve against. Set by the
    /// resolver, never deserialized.
    #[serde(skip)]
    pub root: PathBuf,

    /// Application name (for display and native project naming)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,

    /// JavaScript entry module, relative to root
    #[serde(default = "default_entry")]
    pub entry: String,

    /// Dev server settings
    pub server: ServerConfig,

    /// Bundler delegation settings
    pub bundler: BundlerConfig,

    /// Android project settings
    pub android: AndroidConfig,

    /// iOS project settings
    pub ios: IosConfig,

    /// Native library dependencies managed by `link`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::new(),
            app_name: None,
            entry: default_entry(),
            server: ServerConfig::default(),
            bundler: BundlerConfig::default(),
            android: AndroidConfig::default(),
            ios: IosConfig::default(),
            dependencies: Vec::new(),
        }
    }
}

impl Config {
    /// Built-in defaults with the given root context.
    pub fn defaults(root: PathBuf) -> Self {
        Self {
            root,
            ..Self::default()
        }
    }

    /// Name used for native projects: the configured app name, else the
    /// root directory's own name.
    pub fn project_name(&self) -> String {
        self.app_name
            .clone()
            .or_else(|| {
                self.root
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
            })
            .unwrap_or_else(|| "App".to_string())
    }
}

/// Dev server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Settings for the external bundler binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BundlerConfig {
    /// Bundler executable name or path
    #[serde(default = "default_bundler_command")]
    pub command: String,

    /// File extensions treated as bundled assets
    #[serde(default = "default_asset_exts")]
    pub asset_exts: Vec<String>,
}

impl Default for BundlerConfig {
    fn default() -> Self {
        Self {
            command: default_bundler_command(),
            asset_exts: default_asset_exts(),
        }
    }
}

/// Android project settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AndroidConfig {
    /// Gradle task invoked by `run-android`
    #[serde(default = "default_gradle_task")]
    pub gradle_task: String,

    /// Application package, used to launch the main activity after install
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
}

impl Default for AndroidConfig {
    fn default() -> Self {
        Self {
            gradle_task: default_gradle_task(),
            package: None,
        }
    }
}

/// iOS project settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IosConfig {
    /// Xcode scheme built by `run-ios`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,

    /// Simulator device name for the build destination
    #[serde(default = "default_simulator")]
    pub simulator: String,
}

impl Default for IosConfig {
    fn default() -> Self {
        Self {
            scheme: None,
            simulator: default_simulator(),
        }
    }
}

fn default_entry() -> String {
    "index.js".to_string()
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    8081
}

fn default_bundler_command() -> String {
    "cairn-bundler".to_string()
}

fn default_asset_exts() -> Vec<String> {
    ["png", "jpg", "jpeg", "gif", "webp", "ttf", "otf"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_gradle_task() -> String {
    "installDebug".to_string()
}

fn default_simulator() -> String {
    "iPhone 15".to_string()
}
