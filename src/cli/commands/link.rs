//! Link command implementation.
//!
//! `cairn link` registers each configured native dependency with the
//! platform build systems: a gradle `include` line for Android and a
//! `pod` line for iOS. Both edits are idempotent, so running `link`
//! after every dependency change is safe.

use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::error::Result;

use super::dispatcher::Command;

/// The link command implementation.
pub struct LinkCommand;

/// Append `line` to the file unless it is already present.
///
/// Returns whether the file changed. A missing file is left alone; the
/// platform project may legitimately not exist yet.
fn ensure_line(path: &Path, line: &str) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }

    let content = fs::read_to_string(path)?;
    if content.lines().any(|l| l.trim() == line) {
        return Ok(false);
    }

    let new_content = if content.is_empty() || content.ends_with('\n') {
        format!("{content}{line}\n")
    } else {
        format!("{content}\n{line}\n")
    };
    fs::write(path, new_content)?;
    Ok(true)
}

impl Command for LinkCommand {
    fn run(&self, _args: &[String], config: &Config) -> Result<()> {
        if config.dependencies.is_empty() {
            println!("No dependencies to link");
            return Ok(());
        }

        let settings_gradle = config.root.join("android").join("settings.gradle");
        let podfile = config.root.join("ios").join("Podfile");

        for dep in &config.dependencies {
            let mut changed = false;
            changed |= ensure_line(&settings_gradle, &format!("include ':{dep}'"))?;
            changed |= ensure_line(&podfile, &format!("pod '{dep}'"))?;

            if changed {
                println!("  linked {dep}");
            } else {
                println!("  {dep} up to date");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn project_with_platforms(deps: &[&str]) -> (TempDir, Config) {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("android")).unwrap();
        fs::create_dir_all(temp.path().join("ios")).unwrap();
        fs::write(
            temp.path().join("android").join("settings.gradle"),
            "rootProject.name = 'Summit'\ninclude ':app'\n",
        )
        .unwrap();
        fs::write(
            temp.path().join("ios").join("Podfile"),
            "target 'Summit' do\nend\n",
        )
        .unwrap();

        let mut config = Config::defaults(temp.path().to_path_buf());
        config.dependencies = deps.iter().map(|s| s.to_string()).collect();
        (temp, config)
    }

    #[test]
    fn link_appends_to_both_platform_files() {
        let (temp, config) = project_with_platforms(&["maps"]);
        LinkCommand.run(&[], &config).unwrap();

        let gradle =
            fs::read_to_string(temp.path().join("android").join("settings.gradle")).unwrap();
        assert!(gradle.contains("include ':maps'"));
        assert!(gradle.contains("include ':app'"));

        let podfile = fs::read_to_string(temp.path().join("ios").join("Podfile")).unwrap();
        assert!(podfile.contains("pod 'maps'"));
    }

    #[test]
    fn link_is_idempotent() {
        let (temp, config) = project_with_platforms(&["maps", "camera"]);
        LinkCommand.run(&[], &config).unwrap();
        let first =
            fs::read_to_string(temp.path().join("android").join("settings.gradle")).unwrap();

        LinkCommand.run(&[], &config).unwrap();
        let second =
            fs::read_to_string(temp.path().join("android").join("settings.gradle")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn link_skips_missing_platform_files() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::defaults(temp.path().to_path_buf());
        config.dependencies = vec!["maps".into()];

        // Neither platform dir exists; nothing to edit, nothing to fail.
        LinkCommand.run(&[], &config).unwrap();
    }

    #[test]
    fn ensure_line_handles_missing_trailing_newline() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("settings.gradle");
        fs::write(&file, "include ':app'").unwrap();

        assert!(ensure_line(&file, "include ':maps'").unwrap());
        let content = fs::read_to_string(&file).unwrap();
        assert_eq!(content, "include ':app'\ninclude ':maps'\n");
    }

    #[test]
    fn ensure_line_matches_trimmed_lines() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("Podfile");
        fs::write(&file, "  pod 'maps'\n").unwrap();

        assert!(!ensure_line(&file, "pod 'maps'").unwrap());
    }
}
