//! Built-in project templates embedded at compile time.
//!
//! Template trees live under `templates/` in the source repo and ship
//! inside the binary. File contents and path segments may carry
//! `{{name}}` and `{{name_lower}}` tokens, substituted at generation
//! time with the project name.

use include_dir::{include_dir, Dir};

/// Template id for a full application project.
pub const APP_TEMPLATE_ID: &str = "cairn:app";

/// Template id for a reusable native library.
pub const LIBRARY_TEMPLATE_ID: &str = "cairn:library";

/// Template id for an Android project shell.
pub const ANDROID_TEMPLATE_ID: &str = "cairn:android";

/// Embedded application template.
pub static APP_TEMPLATE: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates/app");

/// Embedded library template.
pub static LIBRARY_TEMPLATE: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates/library");

/// Embedded Android project template.
pub static ANDROID_TEMPLATE: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates/android");

/// Substitution variables for one generator run.
#[derive(Debug, Clone)]
pub struct TemplateVars {
    name: String,
    name_lower: String,
}

impl TemplateVars {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            name_lower: name.to_lowercase(),
        }
    }

    /// The project name as given.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace all recognized tokens in `input`.
    pub fn apply(&self, input: &str) -> String {
        input
            .replace("{{name}}", &self.name)
            .replace("{{name_lower}}", &self.name_lower)
    }
}
