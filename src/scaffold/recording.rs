//! Recording reporter for testing.
//!
//! `RecordingReporter` implements [`Reporter`] and captures every event
//! for later assertion. Confirm answers can be queued up front; an
//! unqueued confirm answers no, matching the non-interactive console
//! fallback.
//!
//! # Example
//!
//! ```
//! use cairn::scaffold::{RecordingReporter, Reporter};
//! use std::path::Path;
//!
//! let mut reporter = RecordingReporter::new();
//! reporter.created(Path::new("App.js"));
//! reporter.skipped(Path::new("index.js"), "identical");
//!
//! assert_eq!(reporter.created_paths().len(), 1);
//! assert_eq!(reporter.skipped_paths().len(), 1);
//! ```

use crate::error::Result;
use crate::scaffold::reporter::Reporter;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// One captured reporter interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Created(PathBuf),
    Skipped(PathBuf, String),
    Info(String),
    Warn(String),
    Error(String),
    Confirm(String),
}

/// Reporter that records interactions instead of printing them.
///
/// The event log is behind a shared handle so a test can keep one end
/// while the reporter itself moves into an environment.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: Rc<RefCell<Vec<Event>>>,
    confirm_responses: VecDeque<bool>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an answer for the next confirm call.
    pub fn push_confirm_response(&mut self, answer: bool) {
        self.confirm_responses.push_back(answer);
    }

    /// Shared handle to the event log, usable after the reporter has
    /// been moved elsewhere.
    pub fn events_handle(&self) -> Rc<RefCell<Vec<Event>>> {
        Rc::clone(&self.events)
    }

    /// Snapshot of all captured events in order.
    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    /// Paths reported as created, in order.
    pub fn created_paths(&self) -> Vec<PathBuf> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Created(p) => Some(p.clone()),
                _ => None,
            })
            .collect()
    }

    /// Paths reported as skipped, in order.
    pub fn skipped_paths(&self) -> Vec<PathBuf> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Skipped(p, _) => Some(p.clone()),
                _ => None,
            })
            .collect()
    }

    /// Questions asked through confirm, in order.
    pub fn confirm_questions(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Confirm(q) => Some(q.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn created(&mut self, path: &Path) {
        self.events
            .borrow_mut()
            .push(Event::Created(path.to_path_buf()));
    }

    fn skipped(&mut self, path: &Path, reason: &str) {
        self.events
            .borrow_mut()
            .push(Event::Skipped(path.to_path_buf(), reason.to_string()));
    }

    fn info(&mut self, msg: &str) {
        self.events.borrow_mut().push(Event::Info(msg.to_string()));
    }

    fn warn(&mut self, msg: &str) {
        self.events.borrow_mut().push(Event::Warn(msg.to_string()));
    }

    fn error(&mut self, msg: &str) {
        self.events.borrow_mut().push(Event::Error(msg.to_string()));
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        self.events
            .borrow_mut()
            .push(Event::Confirm(question.to_string()));
        Ok(self.confirm_responses.pop_front().unwrap_or(false))
    }
}
