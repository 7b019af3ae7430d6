//! Cairn CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by the `RUST_LOG` environment variable;
/// the default is INFO for this crate only.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cairn=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

/// The directory the tool is installed in.
///
/// `CAIRN_HOME` overrides the detected location, for relocated installs
/// and testing. Otherwise it is the running executable's directory.
fn tool_dir() -> PathBuf {
    if let Some(home) = std::env::var_os("CAIRN_HOME") {
        return PathBuf::from(home);
    }

    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let tool_dir = tool_dir();

    tracing::debug!("Cairn starting from {} with args: {:?}", tool_dir.display(), args);

    match cairn::run(&tool_dir, &args) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}
