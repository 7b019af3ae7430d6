//! Progress reporting for the scaffolding generator.
//!
//! The generator never talks to the terminal directly; everything it has
//! to say goes through a [`Reporter`]. That keeps file-creation noise
//! suppressible for `init` (which wraps the console reporter in
//! [`SilentCreate`]) and makes generator runs fully observable in tests
//! (see [`recording`](super::recording)).

use crate::error::{CairnError, Result};
use console::{style, Term};
use dialoguer::Confirm;
use std::io::Write;
use std::path::Path;

/// Sink for generator progress and prompts.
pub trait Reporter {
    /// A file was written.
    fn created(&mut self, path: &Path);

    /// A file was left untouched.
    fn skipped(&mut self, path: &Path, reason: &str);

    /// Display a message.
    fn info(&mut self, msg: &str);

    /// Display a warning.
    fn warn(&mut self, msg: &str);

    /// Display an error.
    fn error(&mut self, msg: &str);

    /// Ask a yes/no question. Non-interactive implementations answer no.
    fn confirm(&mut self, question: &str) -> Result<bool>;
}

/// Convert dialoguer errors to CairnError.
fn map_dialoguer_err(e: dialoguer::Error) -> CairnError {
    CairnError::Io(e.into())
}

/// Reporter that writes styled output to the terminal.
pub struct ConsoleReporter {
    term: Term,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for ConsoleReporter {
    fn created(&mut self, path: &Path) {
        writeln!(
            self.term,
            "  {} {}",
            style("create").green(),
            path.display()
        )
        .ok();
    }

    fn skipped(&mut self, path: &Path, reason: &str) {
        writeln!(
            self.term,
            "  {} {} ({})",
            style("skip").yellow(),
            path.display(),
            reason
        )
        .ok();
    }

    fn info(&mut self, msg: &str) {
        writeln!(self.term, "{msg}").ok();
    }

    fn warn(&mut self, msg: &str) {
        writeln!(self.term, "{}", style(msg).yellow()).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", style(msg).red()).ok();
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        if !self.term.is_term() {
            // No terminal to ask on; keep the existing file.
            return Ok(false);
        }

        Confirm::new()
            .with_prompt(question)
            .default(false)
            .interact_on(&self.term)
            .map_err(map_dialoguer_err)
    }
}

/// Decorator that drops file-creation reports and forwards everything
/// else to the wrapped reporter.
///
/// `init` scaffolds dozens of files into a fresh directory; the per-file
/// listing is noise there, while warnings and overwrite prompts still
/// have to get through.
pub struct SilentCreate<R: Reporter> {
    inner: R,
}

impl<R: Reporter> SilentCreate<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Consume the decorator and return the wrapped reporter.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Reporter> Reporter for SilentCreate<R> {
    fn created(&mut self, _path: &Path) {}

    fn skipped(&mut self, path: &Path, reason: &str) {
        self.inner.skipped(path, reason);
    }

    fn info(&mut self, msg: &str) {
        self.inner.info(msg);
    }

    fn warn(&mut self, msg: &str) {
        self.inner.warn(msg);
    }

    fn error(&mut self, msg: &str) {
        self.inner.error(msg);
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        self.inner.confirm(question)
    }
}
