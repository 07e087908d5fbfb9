//! Integration tests for configuration loading

use std::collections::HashMap;

use babilado_core::config::{from_lookup, ConfigError, ProviderKind};

/// Build a lookup over a fixed set of variables.
fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();
    move |name: &str| map.get(name).cloned()
}

/// Test an empty environment loads with every default in place
#[test]
fn test_defaults_with_empty_environment() {
    let config = from_lookup(|_| None).unwrap();

    assert_eq!(config.provider.kind, ProviderKind::Gemini);
    // Url normalizes the bare host with a trailing slash.
    assert_eq!(
        config.provider.endpoint.as_ref().map(|u| u.as_str()),
        Some("https://generativelanguage.googleapis.com/")
    );
    assert!(config.provider.credential.is_none());
    assert_eq!(config.provider.model.as_deref(), Some("gemini-1.5-flash"));
    assert!(config.provider.temperature.is_none());
    assert_eq!(config.provider.max_output_tokens, 200);

    assert!(config.store.endpoint.is_none());
    assert!(config.store.credential.is_none());
    assert_eq!(config.store.collection, "terminals");

    assert_eq!(config.server.listen_addr.to_string(), "0.0.0.0:8080");
}

/// Test every variable is picked up when set
#[test]
fn test_full_environment() {
    let lookup = vars(&[
        ("BABILADO_PROVIDER", "gemini"),
        ("GEMINI_BASE_URL", "https://gemini.test/api"),
        ("GEMINI_API_KEY", "live-key-123456789"),
        ("GEMINI_MODEL", "gemini-2.0-pro"),
        ("GEMINI_TEMPERATURE", "0.5"),
        ("GEMINI_MAX_OUTPUT_TOKENS", "512"),
        (
            "FIRESTORE_URL",
            "https://firestore.googleapis.com/v1/projects/demo/databases/(default)/documents",
        ),
        ("FIRESTORE_API_KEY", "store-key-123"),
        ("FIRESTORE_COLLECTION", "kiosks"),
        ("BABILADO_LISTEN_ADDR", "127.0.0.1:9999"),
    ]);
    let config = from_lookup(lookup).unwrap();

    assert_eq!(
        config.provider.endpoint.as_ref().map(|u| u.as_str()),
        Some("https://gemini.test/api")
    );
    assert_eq!(
        config
            .provider
            .credential
            .as_ref()
            .map(|c| c.expose_secret()),
        Some("live-key-123456789")
    );
    assert_eq!(config.provider.model.as_deref(), Some("gemini-2.0-pro"));
    assert_eq!(config.provider.temperature, Some(0.5));
    assert_eq!(config.provider.max_output_tokens, 512);

    assert!(config.store.endpoint.is_some());
    assert_eq!(
        config.store.credential.as_ref().map(|c| c.expose_secret()),
        Some("store-key-123")
    );
    assert_eq!(config.store.collection, "kiosks");

    assert_eq!(config.server.listen_addr.to_string(), "127.0.0.1:9999");
}

/// Test empty and whitespace-only values fall back like unset ones
#[test]
fn test_blank_values_treated_as_unset() {
    let lookup = vars(&[
        ("GEMINI_API_KEY", ""),
        ("GEMINI_MODEL", "   "),
        ("FIRESTORE_COLLECTION", ""),
    ]);
    let config = from_lookup(lookup).unwrap();

    assert!(config.provider.credential.is_none());
    assert_eq!(config.provider.model.as_deref(), Some("gemini-1.5-flash"));
    assert_eq!(config.store.collection, "terminals");
}

/// Test a malformed temperature fails loading and names the variable
#[test]
fn test_invalid_temperature_fails_loading() {
    let lookup = vars(&[("GEMINI_TEMPERATURE", "warm")]);
    match from_lookup(lookup) {
        Err(ConfigError::Invalid { name, .. }) => assert_eq!(name, "GEMINI_TEMPERATURE"),
        other => panic!("expected invalid temperature, got {:?}", other),
    }
}

/// Test a malformed provider URL fails loading
#[test]
fn test_invalid_base_url_fails_loading() {
    let lookup = vars(&[("GEMINI_BASE_URL", "not a url")]);
    match from_lookup(lookup) {
        Err(ConfigError::Invalid { name, .. }) => assert_eq!(name, "GEMINI_BASE_URL"),
        other => panic!("expected invalid base URL, got {:?}", other),
    }
}

/// Test a malformed listen address fails loading
#[test]
fn test_invalid_listen_addr_fails_loading() {
    let lookup = vars(&[("BABILADO_LISTEN_ADDR", "8080")]);
    match from_lookup(lookup) {
        Err(ConfigError::Invalid { name, .. }) => assert_eq!(name, "BABILADO_LISTEN_ADDR"),
        other => panic!("expected invalid listen address, got {:?}", other),
    }
}

/// Test an unknown provider kind fails loading
#[test]
fn test_unknown_provider_kind_fails_loading() {
    let lookup = vars(&[("BABILADO_PROVIDER", "oracle")]);
    match from_lookup(lookup) {
        Err(ConfigError::Invalid { name, message }) => {
            assert_eq!(name, "BABILADO_PROVIDER");
            assert!(message.contains("oracle"));
        }
        other => panic!("expected invalid provider kind, got {:?}", other),
    }
}

/// Test debug output of a loaded configuration never leaks credentials
#[test]
fn test_config_debug_redacts_credentials() {
    let lookup = vars(&[
        ("GEMINI_API_KEY", "super-secret-gemini-key"),
        ("FIRESTORE_API_KEY", "super-secret-store-key"),
    ]);
    let config = from_lookup(lookup).unwrap();
    let debug_output = format!("{:?}", config);

    assert!(!debug_output.contains("super-secret-gemini-key"));
    assert!(!debug_output.contains("super-secret-store-key"));
    assert!(debug_output.contains("[REDACTED]"));
}
