use interop_kernel::config::{LoadError, load_and_configure, load_configuration, load_settings};
use interop_kernel::domain::Configuration;
use interop_kernel::{Component, ConfigError, RestAdapter};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const UNSET: &str = "INTEROP_TEST_UNSET_VARIABLE";

fn write(dir: &TempDir, name: &str, text: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, text).expect("write fixture");
    path
}

#[test]
fn documents_keep_key_order() {
    let dir = TempDir::new().expect("tempdir");
    let path = write(
        &dir,
        "harness.yaml",
        "test-cases: /cases\ncomparators:\n  Zed:\n    class: a\n  Alpha:\n    class: b\n",
    );

    let config: Configuration = load_configuration(&path).expect("loaded");
    assert_eq!(config["test-cases"], "/cases");
    let names: Vec<&String> = config["comparators"].as_object().expect("mapping").keys().collect();
    assert_eq!(names, ["Zed", "Alpha"]);
}

#[test]
fn absent_malformed_and_non_mapping_documents() {
    let dir = TempDir::new().expect("tempdir");

    let err = load_configuration(&dir.path().join("absent.yaml")).expect_err("absent");
    assert!(matches!(err, LoadError::NotFound { .. }));

    let path = write(&dir, "broken.yaml", "comparators: [unterminated\n");
    let err = load_configuration(&path).expect_err("malformed");
    let (source, context) = match err {
        LoadError::Config { source, context } => (source, context),
        other => panic!("unexpected error: {other:?}"),
    };
    assert!(matches!(source, ConfigError::Malformed { .. }));
    assert!(context.is_some_and(|path| path.ends_with("broken.yaml")));

    let path = write(&dir, "list.yaml", "- a\n- b\n");
    let err = load_configuration(&path).expect_err("sequence root");
    assert!(matches!(err, LoadError::Config { source: ConfigError::NotMapping { .. }, .. }));
}

#[test]
fn load_and_configure_uses_explicit_path() {
    let dir = TempDir::new().expect("tempdir");
    let url = "https://openprovenance.org/store/api/v0/documents/";
    let path = write(&dir, "store.yaml", &format!("url: {url}\n"));

    let mut adapter = RestAdapter::default();
    let used = load_and_configure(&mut adapter, UNSET, Path::new("nope.yaml"), Some(&path))
        .expect("configured");

    assert_eq!(used, path);
    assert_eq!(adapter.url(), url);
    assert_eq!(adapter.configuration().len(), 1);
}

#[test]
fn load_and_configure_reports_configure_errors() {
    let dir = TempDir::new().expect("tempdir");
    let path = write(&dir, "store.yaml", "endpoint: nowhere\n");

    let mut adapter = RestAdapter::default();
    let err = load_and_configure(&mut adapter, UNSET, Path::new("nope.yaml"), Some(&path))
        .expect_err("url missing");
    assert!(matches!(err, LoadError::Config { source: ConfigError::MissingKeys { .. }, .. }));

    let err = load_and_configure(&mut adapter, UNSET, &dir.path().join("default.yaml"), None)
        .expect_err("default absent");
    assert!(matches!(err, LoadError::NotFound { ref path } if path.ends_with("default.yaml")));
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Settings {
    name: String,
    log: Log,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Log {
    level: String,
    json: bool,
}

#[test]
fn settings_layer_environment_over_file() {
    let dir = TempDir::new().expect("tempdir");
    let path = write(&dir, "settings.toml", "name = \"harness\"\n[log]\nlevel = \"info\"\n");

    let env = [
        ("INTEROP__LOG__LEVEL", "debug"),
        ("INTEROP__LOG__JSON", "true"),
        ("OTHER__NAME", "x"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_owned(), v.to_owned()))
    .collect();
    let settings: Settings = load_settings(Some(&path), Some(env)).expect("settings");

    assert_eq!(settings.name, "harness");
    assert_eq!(settings.log.level, "debug");
    assert!(settings.log.json);
}

#[test]
fn settings_file_must_exist_when_named() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("absent.toml");
    let result: Result<Settings, _> = load_settings(Some(&path), Some(Default::default()));
    assert!(result.is_err());
}
