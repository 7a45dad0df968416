//! CLI routing tests against an in-memory store configured from a file.

use clap::Parser;
use tempfile::TempDir;
use tokenkeep_cli::{run, Cli};
use tokenkeep_core::{BackendKind, Config};

fn memory_config(dir: &TempDir) -> String {
    let path = dir.path().join("tokenkeep.json5");
    let mut config = Config::default();
    config.store.backend = BackendKind::Memory;
    config.store.service = "tokenkeep-cli-test".to_string();
    config.save(&path).unwrap();
    path.display().to_string()
}

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn test_version() {
    run(cli(&["tokenkeep", "version"])).unwrap();
}

#[test]
fn test_get_missing_key_succeeds() {
    let dir = TempDir::new().unwrap();
    let config = memory_config(&dir);
    run(cli(&["tokenkeep", "--config", &config, "get", "accessToken"])).unwrap();
}

#[test]
fn test_set_with_value() {
    let dir = TempDir::new().unwrap();
    let config = memory_config(&dir);
    run(cli(&[
        "tokenkeep",
        "--config",
        &config,
        "set",
        "accessToken",
        "--value",
        r#"{"token":"abc123"}"#,
    ]))
    .unwrap();
}

#[test]
fn test_set_rejects_non_json_unless_string() {
    let dir = TempDir::new().unwrap();
    let config = memory_config(&dir);
    let plain = ["tokenkeep", "--config", config.as_str(), "set", "note", "--value", "hello"];
    assert!(run(cli(&plain)).is_err());

    let mut as_string = plain.to_vec();
    as_string.push("--string");
    run(cli(&as_string)).unwrap();
}

#[test]
fn test_remove_missing_key_fails() {
    let dir = TempDir::new().unwrap();
    let config = memory_config(&dir);
    let result = run(cli(&["tokenkeep", "--config", &config, "remove", "accessToken"]));
    assert!(result.is_err());
}

#[test]
fn test_empty_key_fails() {
    let dir = TempDir::new().unwrap();
    let config = memory_config(&dir);
    assert!(run(cli(&["tokenkeep", "--config", &config, "get", ""])).is_err());
}

#[test]
fn test_token_show_empty() {
    let dir = TempDir::new().unwrap();
    let config = memory_config(&dir);
    run(cli(&["tokenkeep", "--config", &config, "token", "show"])).unwrap();
}

#[test]
fn test_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json5");
    std::fs::write(&path, "{ store: ").unwrap();
    let path = path.display().to_string();
    assert!(run(cli(&["tokenkeep", "--config", &path, "get", "accessToken"])).is_err());
}
