use dappforge::config::{get_config, load_from_reader, parse_config};
use dappforge::error::Error;
use std::io::Cursor;
use tempfile::TempDir;

#[test]
fn test_missing_config_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let options = get_config(dir.path()).unwrap();
    assert!(options.name.is_none());
    assert!(options.ui.is_none());
}

#[test]
fn test_yaml_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("dappforge.yaml"), "ui: tailwind\nanchor: counter\n").unwrap();

    let options = get_config(dir.path()).unwrap();
    assert_eq!(options.ui.as_deref(), Some("tailwind"));
    assert_eq!(options.anchor.as_deref(), Some("counter"));
}

#[test]
fn test_json_config_takes_precedence() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("dappforge.json"), r#"{"ui": "none"}"#).unwrap();
    std::fs::write(dir.path().join("dappforge.yml"), "ui: tailwind\n").unwrap();

    let options = get_config(dir.path()).unwrap();
    assert_eq!(options.ui.as_deref(), Some("none"));
}

#[test]
fn test_invalid_config() {
    let result = parse_config("- just\n- a list\n");
    assert!(matches!(result, Err(Error::ConfigError(_))));
}

#[test]
fn test_load_from_reader() {
    let options = load_from_reader(Cursor::new(r#" {"name": "my-app", "skipFormat": true} "#)).unwrap();
    assert_eq!(options.name.as_deref(), Some("my-app"));
    assert_eq!(options.skip_format, Some(true));

    let options = load_from_reader(Cursor::new("\n")).unwrap();
    assert!(options.name.is_none());
}
