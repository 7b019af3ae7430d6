//! Library integration tests.

use cairn::CairnError;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn error_types_are_public() {
    let err = CairnError::UnknownTemplate {
        id: "cairn:test".into(),
    };
    assert!(err.to_string().contains("cairn:test"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> cairn::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn run_with_no_args_reports_usage_failure() {
    // The usage path runs before environment setup, so an empty tool
    // dir works here.
    let temp = TempDir::new().unwrap();
    let result = cairn::run(temp.path(), &[]).unwrap();
    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
}

#[test]
fn config_flag_extraction_is_public() {
    use cairn::cli::extract_config_path;

    let args: Vec<String> = ["bundle", "--config", "alt.yml", "--dev"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(extract_config_path(&args), Some(PathBuf::from("alt.yml")));
}
