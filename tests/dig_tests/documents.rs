//! Digging into loaded JSON and YAML

use super::test_utils::{found, idx, int};
use nested_dig::document::{Document, DocumentFormat, LoadOptions};
use nested_dig::{ErrorKind, Key, Lookup, Value};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

const CONFIG_JSON: &str = r#"{
    "servers": [
        {"name": "alpha", "ports": [80, 443]},
        {"name": "beta", "ports": null}
    ]
}"#;

#[test]
fn test_json_path() {
    let doc = Document::from_json_str(CONFIG_JSON, &LoadOptions::default()).unwrap();
    let keys = [Key::str("servers"), idx(0), Key::str("ports"), idx(-1)];
    assert_eq!(doc.dig(&keys).unwrap(), found(int(443)));
}

#[test]
fn test_json_null_short_circuits() {
    let doc = Document::from_json_str(CONFIG_JSON, &LoadOptions::default()).unwrap();
    let keys = [Key::str("servers"), idx(1), Key::str("ports"), idx(0)];
    assert_eq!(doc.dig(&keys).unwrap(), Lookup::Absent);
}

#[test]
fn test_json_scalar_mid_path_fails() {
    let doc = Document::from_json_str(CONFIG_JSON, &LoadOptions::default()).unwrap();
    let keys = [Key::str("servers"), idx(0), Key::str("name"), idx(0)];
    assert_eq!(doc.dig(&keys).unwrap_err().kind(), ErrorKind::NotDiggable);
}

#[test]
fn test_symbolized_keys_need_symbols() {
    let options = LoadOptions {
        symbolize_keys: true,
    };
    let doc = Document::from_json_str(CONFIG_JSON, &options).unwrap();
    assert_eq!(doc.dig(&[Key::str("servers")]).unwrap(), Lookup::Absent);
    assert_eq!(
        doc.dig(&[Key::sym("servers"), idx(1), Key::sym("name")]).unwrap(),
        found(Value::str("beta"))
    );
}

#[test]
fn test_yaml_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");
    fs::write(
        &path,
        "database:\n  replicas:\n    - host: db1\n    - host: db2\n",
    )
    .unwrap();

    let doc = Document::load(&path, None, &LoadOptions::default()).unwrap();
    let keys = [Key::str("database"), Key::str("replicas"), idx(1), Key::str("host")];
    assert_eq!(doc.dig(&keys).unwrap(), found(Value::str("db2")));
}

#[test]
fn test_explicit_format_overrides_extension() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, "a: [1, 2]\n").unwrap();

    assert!(Document::load(&path, None, &LoadOptions::default()).is_err());
    let doc = Document::load(&path, Some(DocumentFormat::Yaml), &LoadOptions::default()).unwrap();
    assert_eq!(doc.dig(&[Key::str("a"), idx(1)]).unwrap(), found(int(2)));
}

#[test]
fn test_yaml_integer_and_boolean_keys() {
    let doc = Document::from_yaml_str("0: false\na: 1\n1: one\ntrue: yes_\n", &LoadOptions::default())
        .unwrap();

    assert_eq!(doc.dig(&[idx(0)]).unwrap(), found(Value::Bool(false)));
    assert_eq!(doc.dig(&[Key::str("a")]).unwrap(), found(int(1)));
    assert_eq!(doc.dig(&[idx(1)]).unwrap(), found(Value::str("one")));
    assert_eq!(doc.dig(&[Key::Bool(true)]).unwrap(), found(Value::str("yes_")));
    assert_eq!(doc.dig(&[idx(2)]).unwrap(), Lookup::Absent);
    assert_eq!(doc.dig(&[Key::str("1")]).unwrap(), Lookup::Absent);
}

#[test]
fn test_yaml_complex_key_does_not_fail_loading() {
    let doc = Document::from_yaml_str("? [a, b]\n: pair\nplain: 1\n", &LoadOptions::default())
        .unwrap();
    assert_eq!(doc.dig(&[Key::str("plain")]).unwrap(), found(int(1)));
}
