use std::collections::HashMap;
use std::path::PathBuf;

use symcheck_api::config::{ApiConfig, CATALOG_PATH_VAR, LOG_FORMAT_VAR, LogFormat, BIND_ADDR_VAR};

fn config_from(pairs: &[(&str, &str)]) -> eyre::Result<ApiConfig> {
    let env: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ApiConfig::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn defaults_when_unset() {
    let config = config_from(&[]).unwrap();
    assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
    assert_eq!(config.log_format, LogFormat::Pretty);
    assert_eq!(config.catalog_path, None);
}

#[test]
fn reads_all_variables() {
    let config = config_from(&[
        (BIND_ADDR_VAR, "0.0.0.0:9000"),
        (LOG_FORMAT_VAR, "JSON"),
        (CATALOG_PATH_VAR, "/etc/symcheck/catalog.json"),
    ])
    .unwrap();
    assert_eq!(config.bind_addr.port(), 9000);
    assert_eq!(config.log_format, LogFormat::Json);
    assert_eq!(
        config.catalog_path,
        Some(PathBuf::from("/etc/symcheck/catalog.json"))
    );
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = config_from(&[(BIND_ADDR_VAR, "  "), (CATALOG_PATH_VAR, "")]).unwrap();
    assert_eq!(config.bind_addr.port(), 8080);
    assert_eq!(config.catalog_path, None);
}

#[test]
fn rejects_bad_values() {
    let err = config_from(&[(BIND_ADDR_VAR, "localhost")]).unwrap_err();
    assert!(err.to_string().contains(BIND_ADDR_VAR));

    let err = config_from(&[(LOG_FORMAT_VAR, "xml")]).unwrap_err();
    assert!(err.to_string().contains("xml"));
}
