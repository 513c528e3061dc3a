use crate::tests::{EnvGuard, setup_config_dir};
use crate::{BridgeConfig, Config};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Bridge
// =========================================================================

#[test]
fn given_default_bridge_when_validate_then_ok() {
    // Given
    let bridge = BridgeConfig::default();

    // When
    let result = bridge.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
fn given_empty_event_name_when_validate_then_error() {
    // Given
    let bridge = BridgeConfig {
        restarting_event: String::new(),
        ..BridgeConfig::default()
    };

    // When
    let result = bridge.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
fn given_event_name_with_whitespace_when_validate_then_error() {
    // Given
    let bridge = BridgeConfig {
        ready_event: "sidecar ready".into(),
        ..BridgeConfig::default()
    };

    // When
    let result = bridge.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
fn given_duplicate_event_names_when_validate_then_error_names_both_keys() {
    // Given
    let bridge = BridgeConfig {
        error_event: "sidecar-ready".into(),
        ..BridgeConfig::default()
    };

    // When
    let message = bridge.validate().unwrap_err().to_string();

    // Then
    assert!(message.contains("bridge.ready_event"));
    assert!(message.contains("bridge.error_event"));
}

#[test]
#[serial]
fn given_duplicate_names_from_env_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _starting = EnvGuard::set("STUDIO_BRIDGE_STARTING_EVENT", "sidecar-error");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_bridge_disabled_when_validate_then_still_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _enabled = EnvGuard::set("STUDIO_BRIDGE_ENABLED", "false");

    // When
    let config = Config::load().unwrap();

    // Then
    assert!(!config.bridge.enabled);
    assert_that!(config.validate(), ok(anything()));
}
