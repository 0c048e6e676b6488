use super::*;

use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// defaults
// =============================================================================

#[test]
fn empty_environment_uses_defaults() {
    let config = AppConfig::from_lookup(lookup(&[])).expect("defaults should load");
    assert_eq!(config.port, DEFAULT_PORT);
    assert!(config.public_dir.ends_with("public"));
}

#[test]
fn blank_values_count_as_unset() {
    let config = AppConfig::from_lookup(lookup(&[("PORT", "  "), ("PUBLIC_DIR", "")]))
        .expect("blank values should fall back");
    assert_eq!(config.port, DEFAULT_PORT);
    assert!(config.public_dir.ends_with("public"));
}

// =============================================================================
// overrides
// =============================================================================

#[test]
fn port_and_public_dir_are_read() {
    let config = AppConfig::from_lookup(lookup(&[("PORT", "8080"), ("PUBLIC_DIR", "/srv/site")]))
        .expect("valid config should load");
    assert_eq!(config.port, 8080);
    assert_eq!(config.public_dir, PathBuf::from("/srv/site"));
    assert_eq!(config.bind_addr().port(), 8080);
}

#[test]
fn invalid_port_is_rejected() {
    let err = AppConfig::from_lookup(lookup(&[("PORT", "eighty")])).expect_err("should fail");
    assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "eighty"));
    assert!(err.to_string().contains("eighty"));
}

#[test]
fn out_of_range_port_is_rejected() {
    assert!(AppConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
}
