//! Subprocess execution for delegated tools.
//!
//! Every command Cairn dispatches ends up delegating to an external
//! program (the bundler, gradle, adb, xcodebuild). These helpers run
//! such programs directly, without an intermediate shell, either with
//! inherited stdio or with per-line streaming into a callback.

use crate::error::{CairnError, Result};
use std::ffi::OsStr;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;

/// Output line from a streamed command.
#[derive(Debug, Clone)]
pub enum OutputLine {
    Stdout(String),
    Stderr(String),
}

impl OutputLine {
    /// The line text, whichever stream it came from.
    pub fn text(&self) -> &str {
        match self {
            OutputLine::Stdout(s) | OutputLine::Stderr(s) => s,
        }
    }
}

/// Callback for streaming output.
pub type OutputCallback = Box<dyn FnMut(OutputLine) + Send>;

/// Human-readable rendering of a program invocation, for error messages.
pub fn display_command<S: AsRef<OsStr>>(program: &str, args: &[S]) -> String {
    let mut parts = vec![program.to_string()];
    parts.extend(
        args.iter()
            .map(|a| a.as_ref().to_string_lossy().into_owned()),
    );
    parts.join(" ")
}

/// Run a program with inherited stdio and wait for it to finish.
///
/// # Errors
///
/// Returns `CommandFailed` if the program cannot be spawned or exits
/// with a non-zero status.
pub fn run<S: AsRef<OsStr>>(program: &str, args: &[S], cwd: Option<&Path>) -> Result<()> {
    let mut cmd = Command::new(program);
    cmd.args(args);

    if let Some(cwd) = cwd {
        cmd.current_dir(cwd);
    }

    let status = cmd.status().map_err(|_| CairnError::CommandFailed {
        command: display_command(program, args),
        code: None,
    })?;

    if status.success() {
        Ok(())
    } else {
        Err(CairnError::CommandFailed {
            command: display_command(program, args),
            code: status.code(),
        })
    }
}

/// Run a program, feeding each output line to `callback` as it arrives.
///
/// Stdout and stderr are read on separate threads and interleaved in
/// arrival order. Used for long-running log streams, so the callback is
/// invoked until the child exits or the streams close.
pub fn run_streaming<S: AsRef<OsStr>>(
    program: &str,
    args: &[S],
    cwd: Option<&Path>,
    mut callback: OutputCallback,
) -> Result<()> {
    let mut cmd = Command::new(program);
    cmd.args(args);

    if let Some(cwd) = cwd {
        cmd.current_dir(cwd);
    }

    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());
    cmd.stdin(Stdio::null());

    let mut child = cmd.spawn().map_err(|_| CairnError::CommandFailed {
        command: display_command(program, args),
        code: None,
    })?;

    let stdout = child.stdout.take().unwrap();
    let stderr = child.stderr.take().unwrap();

    let (tx, rx) = mpsc::channel();
    let tx_stdout = tx.clone();
    let tx_stderr = tx;

    let stdout_handle = thread::spawn(move || {
        let reader = BufReader::new(stdout);
        for line in reader.lines().map_while(std::result::Result::ok) {
            let _ = tx_stdout.send(OutputLine::Stdout(line));
        }
    });

    let stderr_handle = thread::spawn(move || {
        let reader = BufReader::new(stderr);
        for line in reader.lines().map_while(std::result::Result::ok) {
            let _ = tx_stderr.send(OutputLine::Stderr(line));
        }
    });

    for line in rx {
        callback(line);
    }

    let _ = stdout_handle.join();
    let _ = stderr_handle.join();

    let status = child.wait().map_err(|_| CairnError::CommandFailed {
        command: display_command(program, args),
        code: None,
    })?;

    if status.success() {
        Ok(())
    } else {
        Err(CairnError::CommandFailed {
            command: display_command(program, args),
            code: status.code(),
        })
    }
}
