//! Template instantiation.
//!
//! A [`Generator`] renders one embedded template tree into a destination
//! directory. Text files and path segments have their `{{name}}` and
//! `{{name_lower}}` tokens substituted; binary files copy verbatim.
//! Existing files are never clobbered silently: identical content is
//! skipped, differing content prompts through the reporter.

use crate::error::Result;
use crate::scaffold::environment::Environment;
use crate::scaffold::templates::TemplateVars;
use include_dir::{Dir, DirEntry, File};
use std::fs;
use std::path::{Path, PathBuf};

/// One pending template instantiation.
pub struct Generator<'env> {
    env: &'env mut Environment,
    template: &'static Dir<'static>,
    vars: TemplateVars,
    extra_args: Vec<String>,
    destination: PathBuf,
}

impl<'env> Generator<'env> {
    pub(crate) fn new(
        env: &'env mut Environment,
        template: &'static Dir<'static>,
        vars: TemplateVars,
        extra_args: Vec<String>,
    ) -> Self {
        Self {
            env,
            template,
            vars,
            extra_args,
            destination: PathBuf::from("."),
        }
    }

    /// The project name this generator renders with.
    pub fn project_name(&self) -> &str {
        self.vars.name()
    }

    /// Arguments past the project name, retained as given.
    pub fn args(&self) -> &[String] {
        &self.extra_args
    }

    /// Set the directory the template is rendered into.
    pub fn destination_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.destination = path.into();
        self
    }

    /// Render the template into the destination.
    ///
    /// The destination directory is created if needed. Every file lands
    /// via the conflict rules in [`write_file`](Self::write_file); any
    /// IO failure aborts the run where it stands.
    pub fn run(mut self) -> Result<()> {
        tracing::debug!(
            "Rendering template for '{}' into {}",
            self.vars.name(),
            self.destination.display()
        );
        fs::create_dir_all(&self.destination)?;
        self.render_dir(self.template)
    }

    fn render_dir(&mut self, dir: &'static Dir<'static>) -> Result<()> {
        for entry in dir.entries() {
            match entry {
                DirEntry::Dir(sub) => {
                    let rendered = self.render_path(sub.path());
                    fs::create_dir_all(self.destination.join(&rendered))?;
                    self.render_dir(sub)?;
                }
                DirEntry::File(file) => {
                    self.write_file(file)?;
                }
            }
        }
        Ok(())
    }

    /// Apply token substitution to a template-relative path.
    fn render_path(&self, path: &Path) -> PathBuf {
        PathBuf::from(self.vars.apply(&path.to_string_lossy()))
    }

    fn write_file(&mut self, file: &File<'static>) -> Result<()> {
        let rel = self.render_path(file.path());
        let dest = self.destination.join(&rel);

        // UTF-8 content is rendered, anything else copies through.
        let contents: Vec<u8> = match file.contents_utf8() {
            Some(text) => self.vars.apply(text).into_bytes(),
            None => file.contents().to_vec(),
        };

        if dest.exists() {
            let existing = fs::read(&dest)?;
            if existing == contents {
                self.env.reporter().skipped(&rel, "identical");
                return Ok(());
            }

            let question = format!("Overwrite {}?", rel.display());
            if !self.env.reporter().confirm(&question)? {
                self.env.reporter().skipped(&rel, "kept existing");
                return Ok(());
            }
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&dest, &contents)?;
        self.env.reporter().created(&rel);
        Ok(())
    }
}
