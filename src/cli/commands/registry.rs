//! Command registry.
//!
//! All dispatchable commands live in one table. Entries carry a
//! `documented` tag: documented commands appear in usage output with a
//! description, undocumented ones (the version probe and the init
//! guard) stay dispatchable but invisible. [`CommandRegistry::public`]
//! builds the filtered set exported to embedding tools.

use crate::cli::commands::dispatcher::Command;

/// One named command in the registry.
pub struct CommandEntry {
    name: &'static str,
    description: &'static str,
    documented: bool,
    command: Box<dyn Command>,
}

impl CommandEntry {
    /// Entry that shows up in usage output.
    pub fn documented(
        name: &'static str,
        description: &'static str,
        command: Box<dyn Command>,
    ) -> Self {
        Self {
            name,
            description,
            documented: true,
            command,
        }
    }

    /// Entry that is dispatchable but hidden from usage output.
    pub fn hidden(name: &'static str, command: Box<dyn Command>) -> Self {
        Self {
            name,
            description: "",
            documented: false,
            command,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn is_documented(&self) -> bool {
        self.documented
    }

    pub fn command(&self) -> &dyn Command {
        self.command.as_ref()
    }
}

/// Closed table of commands, looked up by exact name.
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
}

impl CommandRegistry {
    /// Build a registry from entries, preserving their order.
    ///
    /// # Panics
    ///
    /// Panics if two entries share a name; the tables are static so a
    /// collision is a programming error.
    pub fn from_entries(entries: Vec<CommandEntry>) -> Self {
        for (i, entry) in entries.iter().enumerate() {
            for other in &entries[i + 1..] {
                assert!(
                    entry.name != other.name,
                    "duplicate command name '{}'",
                    entry.name
                );
            }
        }
        Self { entries }
    }

    /// The built-in dispatch table.
    pub fn builtin() -> Self {
        Self::from_entries(builtin_entries())
    }

    /// The command set exported to embedding tools: every documented
    /// command plus `dependencies`, minus the hidden entries.
    pub fn public() -> Self {
        let mut entries: Vec<_> = builtin_entries()
            .into_iter()
            .filter(CommandEntry::is_documented)
            .collect();
        entries.push(dependencies_entry());
        Self::from_entries(entries)
    }

    /// Look up a command by exact, case-sensitive name.
    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// All entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandEntry> {
        self.entries.iter()
    }

    /// Entries shown in usage output, in registration order.
    pub fn documented(&self) -> impl Iterator<Item = &CommandEntry> {
        self.entries.iter().filter(|e| e.documented)
    }

    /// Dispatchable entries hidden from usage output.
    pub fn undocumented(&self) -> impl Iterator<Item = &CommandEntry> {
        self.entries.iter().filter(|e| !e.documented)
    }
}

fn dependencies_entry() -> CommandEntry {
    CommandEntry::documented(
        "dependencies",
        "print the project's native dependencies",
        Box::new(super::dependencies::DependenciesCommand),
    )
}

fn builtin_entries() -> Vec<CommandEntry> {
    vec![
        CommandEntry::documented(
            "start",
            "start the development server",
            Box::new(super::start::StartCommand),
        ),
        CommandEntry::documented(
            "bundle",
            "build the offline JavaScript bundle",
            Box::new(super::bundle::BundleCommand::new()),
        ),
        CommandEntry::documented(
            "unbundle",
            "build the offline bundle split into lazy-loaded segments",
            Box::new(super::bundle::BundleCommand::split()),
        ),
        CommandEntry::documented(
            "new-library",
            "generate a native library bridge",
            Box::new(super::library::NewLibraryCommand),
        ),
        CommandEntry::documented(
            "android",
            "generate an Android project for the app",
            Box::new(super::android::AndroidCommand),
        ),
        CommandEntry::documented(
            "run-android",
            "build the app and install it on a connected Android device or emulator",
            Box::new(super::run_android::RunAndroidCommand),
        ),
        CommandEntry::documented(
            "log-android",
            "stream log output from a connected Android device",
            Box::new(super::log_android::LogAndroidCommand),
        ),
        CommandEntry::documented(
            "run-ios",
            "build the app and launch it in the iOS simulator",
            Box::new(super::run_ios::RunIosCommand),
        ),
        CommandEntry::documented(
            "log-ios",
            "stream log output from the iOS simulator",
            Box::new(super::log_ios::LogIosCommand),
        ),
        CommandEntry::documented(
            "upgrade",
            "re-apply the app template after upgrading cairn",
            Box::new(super::upgrade::UpgradeCommand),
        ),
        CommandEntry::documented(
            "link",
            "register native dependencies with the Android and iOS projects",
            Box::new(super::link::LinkCommand),
        ),
        CommandEntry::hidden("--version", Box::new(super::version::VersionCommand)),
        CommandEntry::hidden("init", Box::new(super::init_guard::InitGuardCommand)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lookup_is_exact_and_case_sensitive() {
        let registry = CommandRegistry::builtin();
        assert!(registry.get("start").is_some());
        assert!(registry.get("Start").is_none());
        assert!(registry.get("star").is_none());
        assert!(registry.get("start ").is_none());
    }

    #[test]
    fn builtin_contains_hidden_entries() {
        let registry = CommandRegistry::builtin();
        assert!(registry.get("--version").is_some());
        assert!(registry.get("init").is_some());

        let hidden: Vec<_> = registry.undocumented().map(CommandEntry::name).collect();
        assert_eq!(hidden, vec!["--version", "init"]);
    }

    #[test]
    fn documented_entries_keep_registration_order() {
        let registry = CommandRegistry::builtin();
        let names: Vec<_> = registry.documented().map(CommandEntry::name).collect();
        assert_eq!(
            names,
            vec![
                "start",
                "bundle",
                "unbundle",
                "new-library",
                "android",
                "run-android",
                "log-android",
                "run-ios",
                "log-ios",
                "upgrade",
                "link",
            ]
        );
    }

    #[test]
    fn documented_entries_have_descriptions() {
        let registry = CommandRegistry::builtin();
        for entry in registry.documented() {
            assert!(!entry.description().is_empty(), "{}", entry.name());
        }
    }

    #[test]
    fn hidden_entries_have_empty_descriptions() {
        let registry = CommandRegistry::builtin();
        for entry in registry.undocumented() {
            assert!(entry.description().is_empty(), "{}", entry.name());
        }
    }

    #[test]
    fn public_set_adds_dependencies_and_drops_hidden() {
        let public = CommandRegistry::public();
        assert!(public.get("dependencies").is_some());
        assert!(public.get("--version").is_none());
        assert!(public.get("init").is_none());
        assert!(public.get("start").is_some());
        assert!(public.get("link").is_some());
    }

    #[test]
    fn public_set_matches_documented_plus_dependencies() {
        let builtin = CommandRegistry::builtin();
        let public = CommandRegistry::public();

        let mut expected: Vec<_> = builtin.documented().map(CommandEntry::name).collect();
        expected.push("dependencies");

        let actual: Vec<_> = public.iter().map(CommandEntry::name).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    #[should_panic(expected = "duplicate command name")]
    fn duplicate_names_panic_at_construction() {
        CommandRegistry::from_entries(vec![
            CommandEntry::hidden("twice", Box::new(super::super::version::VersionCommand)),
            CommandEntry::hidden("twice", Box::new(super::super::version::VersionCommand)),
        ]);
    }
}
