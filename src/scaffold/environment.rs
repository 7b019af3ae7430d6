//! Code-generation environment.
//!
//! An [`Environment`] owns the reporter output channel and a registry of
//! embedded template trees. [`Environment::create`] instantiates one
//! template as a [`Generator`](super::generator::Generator), which does
//! the actual rendering.

use crate::error::{CairnError, Result};
use crate::scaffold::generator::Generator;
use crate::scaffold::reporter::Reporter;
use crate::scaffold::templates::TemplateVars;
use include_dir::Dir;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9]*$").expect("NAME_REGEX must compile"));

/// Validate a project name for use in file paths and native identifiers.
pub fn validate_project_name(name: &str) -> Result<()> {
    if NAME_REGEX.is_match(name) {
        Ok(())
    } else {
        Err(CairnError::InvalidProjectName {
            name: name.to_string(),
        })
    }
}

/// Owns a reporter and the set of registered templates.
pub struct Environment {
    reporter: Box<dyn Reporter>,
    templates: HashMap<&'static str, &'static Dir<'static>>,
}

impl Environment {
    /// Create an environment reporting through `reporter`.
    ///
    /// The reporter is fixed for the environment's lifetime; every
    /// generator created from it shares the same output channel.
    pub fn new(reporter: Box<dyn Reporter>) -> Self {
        Self {
            reporter,
            templates: HashMap::new(),
        }
    }

    /// Register an embedded template tree under `id`.
    pub fn register(&mut self, id: &'static str, template: &'static Dir<'static>) {
        self.templates.insert(id, template);
    }

    /// Ids of all registered templates.
    pub fn template_ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<_> = self.templates.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// The environment's reporter.
    pub fn reporter(&mut self) -> &mut dyn Reporter {
        self.reporter.as_mut()
    }

    /// Instantiate the template `id` with `args`.
    ///
    /// The first argument is the project name and must be a valid
    /// identifier; the rest is retained for the generator untouched.
    ///
    /// # Errors
    ///
    /// Returns `UnknownTemplate` for an unregistered id and
    /// `InvalidProjectName` for a missing or malformed name.
    pub fn create(&mut self, id: &str, args: Vec<String>) -> Result<Generator<'_>> {
        let template = *self
            .templates
            .get(id)
            .ok_or_else(|| CairnError::UnknownTemplate { id: id.to_string() })?;

        let mut args = args.into_iter();
        let name = args.next().unwrap_or_default();
        validate_project_name(&name)?;

        Ok(Generator::new(
            self,
            template,
            TemplateVars::new(&name),
            args.collect(),
        ))
    }
}
