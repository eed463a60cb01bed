//! Gate construction tests.


use actix_api_key_core::http::error::ConfigError;
use actix_api_key_core::http::security::{ApiKeyConfig, ApiKeyGate};

use common::{ApiKey, RecordingLookup};

fn assert_shareable<T: Send + Sync + Clone + 'static>() {}

#[test]
fn test_missing_lookup_is_a_config_error() {
    let result = ApiKeyConfig::<ApiKey>::new().build();

    match result {
        Err(ConfigError::MissingLookup) => {}
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("gate built without a lookup"),
    }
}

#[test]
fn test_missing_lookup_message() {
    let err = ApiKeyGate::<ApiKey>::builder()
        .header_key("X-CUSTOM-API-HEADER")
        .context_key("account.api.key")
        .build()
        .err()
        .unwrap();

    assert_eq!(
        err.to_string(),
        "Caller must implement a way to lookup an API key."
    );
}

#[test]
fn test_invalid_include_pattern() {
    let err = RecordingLookup::empty()
        .config()
        .include("^/api/[")
        .build()
        .err()
        .unwrap();

    assert!(matches!(err, ConfigError::InvalidPattern { ref pattern, .. } if pattern == "^/api/["));
}

#[test]
fn test_invalid_header_key() {
    let err = RecordingLookup::empty()
        .config()
        .header_key("X-API KEY")
        .build()
        .err()
        .unwrap();

    assert!(matches!(err, ConfigError::InvalidHeaderName { .. }));
}

#[test]
fn test_gate_can_be_shared_between_workers() {
    assert_shareable::<ApiKeyGate<ApiKey>>();
}

#[test]
fn test_gate_used_from_several_threads() {
    let lookup = RecordingLookup::empty();
    let gate = lookup.config().include("^/api/").build().unwrap();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let gate = gate.clone();
            std::thread::spawn(move || gate.path_filter().is_gated(&format!("/api/{}", i)))
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
