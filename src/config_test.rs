use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    ServerConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn from_lookup_uses_defaults_when_unset() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.upstream.base_url, DEFAULT_CATALOG_API_URL);
    assert_eq!(
        cfg.upstream.timeouts,
        UpstreamTimeouts { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    );
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = config_from(&[
        ("PORT", "8081"),
        ("CATALOG_API_URL", "https://catalog.example.test/api/"),
        ("CATALOG_API_TIMEOUT_SECS", "12"),
        ("CATALOG_API_CONNECT_TIMEOUT_SECS", "2"),
    ])
    .unwrap();
    assert_eq!(cfg.port, 8081);
    assert_eq!(cfg.upstream.base_url, "https://catalog.example.test/api");
    assert_eq!(cfg.upstream.timeouts, UpstreamTimeouts { request_secs: 12, connect_secs: 2 });
    assert_eq!(cfg.upstream.timeouts.request(), Duration::from_secs(12));
    assert_eq!(cfg.upstream.timeouts.connect(), Duration::from_secs(2));
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = config_from(&[("PORT", "eighty")]).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("eighty".to_owned()));
    assert!(config_from(&[("PORT", "70000")]).is_err());
}

#[test]
fn from_lookup_rejects_non_http_upstream() {
    let err = config_from(&[("CATALOG_API_URL", "ftp://catalog")]).unwrap_err();
    assert!(err.to_string().contains("invalid CATALOG_API_URL"));
    assert!(config_from(&[("CATALOG_API_URL", "http://")]).is_err());
    assert!(config_from(&[("CATALOG_API_URL", "catalog:8080")]).is_err());
}

#[test]
fn from_lookup_rejects_zero_or_garbage_timeouts() {
    let err = config_from(&[("CATALOG_API_TIMEOUT_SECS", "0")]).unwrap_err();
    assert_eq!(err, ConfigError::InvalidTimeout { var: "CATALOG_API_TIMEOUT_SECS", value: "0".to_owned() });

    let err = config_from(&[("CATALOG_API_CONNECT_TIMEOUT_SECS", "soon")]).unwrap_err();
    assert_eq!(err.to_string(), "invalid CATALOG_API_CONNECT_TIMEOUT_SECS: soon");
}
