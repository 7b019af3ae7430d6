//! Invocation argument handling.
//!
//! The top-level grammar is the registry itself: `args[0]` names the
//! command and everything is passed to the handler verbatim. The only
//! option the dispatcher reads at this level is `--config <path>`, and
//! even that stays in the slice so per-command grammars can declare it
//! too.

use std::path::PathBuf;

/// Extract the `--config <path>` value from an invocation, if present.
///
/// Only the first occurrence counts. A trailing `--config` with no
/// value, or an empty value, is treated as absent. The arguments are
/// not modified.
pub fn extract_config_path(args: &[String]) -> Option<PathBuf> {
    let pos = args.iter().position(|a| a == "--config")?;
    args.get(pos + 1)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
