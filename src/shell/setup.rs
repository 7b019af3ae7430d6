//! Platform environment setup.
//!
//! A setup script ships next to the installed binary and runs before
//! every dispatched command. It prepares platform tooling (watchman
//! limits, device visibility, PATH additions) that handlers assume is
//! in place.

use crate::error::{CairnError, Result};
use std::path::Path;
use std::process::Command;

/// Name of the setup script for the current platform.
pub fn setup_script_name() -> &'static str {
    if cfg!(target_os = "windows") {
        "setup_env.bat"
    } else {
        "setup_env.sh"
    }
}

/// Run the environment setup script located in `tool_dir`.
///
/// The script runs synchronously with inherited stdio, so its output
/// appears before the command's own. A spawn failure (missing script,
/// no exec bit) or a non-zero exit is fatal for the whole dispatch.
pub fn run_setup_script(tool_dir: &Path) -> Result<()> {
    let script = tool_dir.join(setup_script_name());
    tracing::debug!("Running setup script {}", script.display());

    let status = Command::new(&script)
        .status()
        .map_err(|_| CairnError::SetupScriptFailed {
            script: script.clone(),
            code: None,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(CairnError::SetupScriptFailed {
            script,
            code: status.code(),
        })
    }
}
