//! Run-android command implementation.
//!
//! `cairn run-android` builds and installs the app through the gradle
//! wrapper of the project's `android/` directory, then launches the main
//! activity when a package is configured.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::shell;

use super::dispatcher::Command;

/// The run-android command implementation.
pub struct RunAndroidCommand;

fn gradle_wrapper_name() -> &'static str {
    if cfg!(target_os = "windows") {
        "gradlew.bat"
    } else {
        "gradlew"
    }
}

/// Absolute path to the project's gradle wrapper.
fn gradle_wrapper(android_dir: &Path) -> PathBuf {
    android_dir.join(gradle_wrapper_name())
}

/// Arguments for launching the main activity over adb.
fn launch_args(package: &str) -> Vec<String> {
    vec![
        "shell".to_string(),
        "am".to_string(),
        "start".to_string(),
        "-n".to_string(),
        format!("{package}/.MainActivity"),
    ]
}

impl Command for RunAndroidCommand {
    fn run(&self, _args: &[String], config: &Config) -> Result<()> {
        let android_dir = config.root.join("android");
        let wrapper = gradle_wrapper(&android_dir).display().to_string();

        shell::run(
            &wrapper,
            &[config.android.gradle_task.as_str()],
            Some(&android_dir),
        )?;

        if let Some(package) = &config.android.package {
            println!("Launching {package}");
            shell::run("adb", &launch_args(package), None)?;
        }

        Ok(())
    }
}
