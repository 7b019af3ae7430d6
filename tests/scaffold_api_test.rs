//! Integration tests for the scaffold public API.

use cairn::scaffold::{
    init, validate_project_name, Environment, Event, RecordingReporter, ScaffoldArgs, SilentCreate,
    APP_TEMPLATE, APP_TEMPLATE_ID,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn init_scaffolds_a_full_project() {
    let temp = TempDir::new().unwrap();
    init(
        temp.path(),
        ScaffoldArgs::List(vec!["Summit".to_string()]),
    )
    .unwrap();

    assert!(temp.path().join("index.js").exists());
    assert!(temp.path().join("package.json").exists());
    assert!(temp.path().join("cairn.yml").exists());

    let config = fs::read_to_string(temp.path().join("cairn.yml")).unwrap();
    assert!(config.contains("app_name: Summit"));

    let activity = temp
        .path()
        .join("android")
        .join("app")
        .join("src")
        .join("main")
        .join("java")
        .join("com")
        .join("summit")
        .join("MainActivity.java");
    assert!(activity.exists());
    let source = fs::read_to_string(activity).unwrap();
    assert!(source.contains("package com.summit;"));
}

#[test]
fn init_rejects_invalid_names() {
    let temp = TempDir::new().unwrap();
    let result = init(
        temp.path(),
        ScaffoldArgs::List(vec!["9lives".to_string()]),
    );
    assert!(matches!(
        result.err(),
        Some(cairn::CairnError::InvalidProjectName { .. })
    ));
}

#[test]
fn silent_create_suppresses_creation_noise() {
    let temp = TempDir::new().unwrap();

    let recorder = RecordingReporter::new();
    let events = recorder.events_handle();
    let mut env = Environment::new(Box::new(SilentCreate::new(recorder)));
    env.register(APP_TEMPLATE_ID, &APP_TEMPLATE);
    env.create(APP_TEMPLATE_ID, vec!["Summit".to_string()])
        .unwrap()
        .destination_root(temp.path())
        .run()
        .unwrap();

    // Files land on disk, creation events do not reach the reporter.
    assert!(temp.path().join("index.js").exists());
    assert!(!events
        .borrow()
        .iter()
        .any(|e| matches!(e, Event::Created(_))));
}

#[test]
fn skips_still_pass_through_silent_create() {
    let temp = TempDir::new().unwrap();
    init(
        temp.path(),
        ScaffoldArgs::List(vec!["Summit".to_string()]),
    )
    .unwrap();

    let recorder = RecordingReporter::new();
    let events = recorder.events_handle();
    let mut env = Environment::new(Box::new(SilentCreate::new(recorder)));
    env.register(APP_TEMPLATE_ID, &APP_TEMPLATE);
    env.create(APP_TEMPLATE_ID, vec!["Summit".to_string()])
        .unwrap()
        .destination_root(temp.path())
        .run()
        .unwrap();

    assert!(events
        .borrow()
        .iter()
        .any(|e| matches!(e, Event::Skipped(_, reason) if reason == "identical")));
}

#[test]
fn environment_registry_is_queryable() {
    let mut env = Environment::new(Box::new(RecordingReporter::new()));
    env.register(APP_TEMPLATE_ID, &APP_TEMPLATE);
    assert_eq!(env.template_ids(), vec![APP_TEMPLATE_ID]);

    let result = env.create("cairn:missing", vec!["App".to_string()]);
    assert!(matches!(
        result.err(),
        Some(cairn::CairnError::UnknownTemplate { .. })
    ));
}

#[test]
fn name_validation_is_public() {
    assert!(validate_project_name("Summit").is_ok());
    assert!(validate_project_name("my app").is_err());
    assert!(validate_project_name("9lives").is_err());
}
