// tests/config_test.rs
use std::fs;
use std::path::PathBuf;

use serial_test::serial;
use tempfile::TempDir;

use gfl::config::{Config, ConfigSource, Resolver, CONFIG_FILE_ENV, DEFAULT_SOURCE};

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_defaults_when_no_source_exists() {
    let dir = TempDir::new().unwrap();
    let report = Resolver::new(
        dir.path().join("global.yml"),
        dir.path().join("local.yml"),
        None,
    )
    .resolve();

    assert_eq!(report.resolved.config, Config::default());
    assert_eq!(report.resolved.provenance.dev_base_branch, DEFAULT_SOURCE);
    // missing optional layers are a normal state, not an error
    assert!(report.sources.iter().all(|s| s.parse_error.is_none()));
}

#[test]
fn test_explicit_empty_string_overrides_earlier_value() {
    let dir = TempDir::new().unwrap();
    let global = write_file(&dir, "global.yml", "nickname: alice\ndevBaseBranch: dev\n");
    let local = write_file(&dir, "local.yml", "nickname: \"\"\n");

    let report = Resolver::new(global, local, None).resolve();

    assert_eq!(report.resolved.config.nickname, "");
    assert_eq!(report.resolved.provenance.nickname, "local");
    // the field local omitted keeps global's value and provenance
    assert_eq!(report.resolved.config.dev_base_branch, "dev");
    assert_eq!(report.resolved.provenance.dev_base_branch, "global");
}

#[test]
fn test_explicit_false_overrides_earlier_true() {
    let dir = TempDir::new().unwrap();
    let global = write_file(&dir, "global.yml", "debug: true\n");
    let local = write_file(&dir, "local.yml", "debug: false\n");

    let report = Resolver::new(global, local, None).resolve();

    assert!(!report.resolved.config.debug);
    assert_eq!(report.resolved.provenance.debug, "local");
}

#[test]
fn test_absence_never_overrides_presence() {
    let dir = TempDir::new().unwrap();
    let global = write_file(&dir, "global.yml", "devBaseBranch: develop\n");
    let local = write_file(&dir, "local.yml", "nickname: bob\n");

    let report = Resolver::new(global, local, None).resolve();

    assert_eq!(report.resolved.config.dev_base_branch, "develop");
    assert_eq!(report.resolved.provenance.dev_base_branch, "global");
}

#[test]
fn test_priority_end_to_end() {
    // defaults -> global(sets A) -> local(sets B) -> custom(sets A differently)
    let dir = TempDir::new().unwrap();
    let global = write_file(&dir, "global.yml", "featurePrefix: feat\n");
    let local = write_file(&dir, "local.yml", "fixPrefix: bugfix\n");
    let custom = write_file(&dir, "custom.yml", "featurePrefix: story\n");

    let report = Resolver::new(global, local, Some(custom)).resolve();
    let resolved = &report.resolved;

    assert_eq!(resolved.config.feature_prefix, "story");
    assert_eq!(resolved.provenance.feature_prefix, "custom");
    assert_eq!(resolved.config.fix_prefix, "bugfix");
    assert_eq!(resolved.provenance.fix_prefix, "local");
    assert_eq!(resolved.config.hotfix_prefix, "hotfix");
    assert_eq!(resolved.provenance.hotfix_prefix, DEFAULT_SOURCE);
}

#[test]
fn test_custom_path_equal_to_local_is_not_loaded_twice() {
    let dir = TempDir::new().unwrap();
    let local = write_file(&dir, "local.yml", "nickname: carol\n");

    let report = Resolver::new(dir.path().join("global.yml"), local.clone(), Some(local)).resolve();

    let names: Vec<&str> = report.sources.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["global", "local"]);
}

#[test]
fn test_malformed_source_is_skipped_but_visible() {
    let dir = TempDir::new().unwrap();
    let global = write_file(&dir, "global.yml", "productionBranch: master\n");
    let local = write_file(&dir, "local.yml", ": not : valid : yaml :");

    let report = Resolver::new(global, local, None).resolve();

    // the broken layer contributes nothing but resolution still completes
    assert_eq!(report.resolved.config.production_branch, "master");
    let broken = report.sources.iter().find(|s| s.name == "local").unwrap();
    assert!(broken.exists);
    assert!(broken.parse_error.is_some());
    assert!(broken.as_error().is_some());
}

#[test]
fn test_load_source_distinguishes_absent_from_broken() {
    let dir = TempDir::new().unwrap();

    let absent = ConfigSource::load("local", &dir.path().join("missing.yml"));
    assert!(!absent.exists);
    assert!(absent.parse_error.is_none());
    assert!(absent.fields.is_empty());

    let broken_path = write_file(&dir, "broken.yml", "debug: [unterminated\n");
    let broken = ConfigSource::load("local", &broken_path);
    assert!(broken.exists);
    assert!(broken.parse_error.is_some());
    assert!(broken.fields.is_empty());
}

#[test]
#[serial]
fn test_env_var_supplies_custom_source() {
    let dir = TempDir::new().unwrap();
    let custom = write_file(&dir, "custom.yml", "nickname: dave\n");

    std::env::set_var(CONFIG_FILE_ENV, &custom);
    let report = Resolver::from_environment().resolve();
    std::env::remove_var(CONFIG_FILE_ENV);

    let source = report.sources.iter().find(|s| s.name == "custom").unwrap();
    assert_eq!(source.path, custom);
    assert!(source.exists);
    assert_eq!(report.resolved.config.nickname, "dave");
    assert_eq!(report.resolved.provenance.nickname, "custom");
}

#[test]
#[serial]
fn test_blank_env_var_adds_no_custom_source() {
    std::env::set_var(CONFIG_FILE_ENV, "  ");
    let report = Resolver::from_environment().resolve();
    std::env::remove_var(CONFIG_FILE_ENV);

    assert!(report.sources.iter().all(|s| s.name != "custom"));
}
