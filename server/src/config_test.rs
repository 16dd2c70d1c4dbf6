use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> =
        pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn reads_port_and_bind_addr() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", "8080"), ("BIND_ADDR", "127.0.0.1")])).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn accepts_ipv6_bind_addr() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("BIND_ADDR", "::1")])).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "[::1]:3000");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", "  "), ("BIND_ADDR", "")])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
}

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("http".to_owned()));
    assert_eq!(err.to_string(), "invalid PORT: \"http\"");

    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("70000".to_owned()));
}

#[test]
fn invalid_bind_addr_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("BIND_ADDR", "localhost")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBindAddr("localhost".to_owned()));
}
