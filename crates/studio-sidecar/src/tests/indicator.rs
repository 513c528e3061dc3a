use crate::{ConnectionState, ConnectionStatus, build_status_indicator};

use googletest::assert_that;
use googletest::prelude::{eq, none, some};

#[test]
fn given_ready_when_build_indicator_then_none() {
    // Given
    let state = ConnectionState {
        status: ConnectionStatus::Ready,
        port: Some(4000),
        ..ConnectionState::default()
    };

    // When / Then
    assert_that!(build_status_indicator(&state), none());
}

#[test]
fn given_connecting_when_build_indicator_then_generic_detail() {
    // When
    let indicator = build_status_indicator(&ConnectionState::default()).unwrap();

    // Then
    assert_that!(indicator.status, eq(ConnectionStatus::Connecting));
    assert_that!(indicator.label.as_str(), eq("Connecting"));
    assert_that!(indicator.detail.as_str(), eq("Connecting to backend..."));
}

#[test]
fn given_restarting_with_count_when_build_indicator_then_detail_names_attempt() {
    // Given
    let state = ConnectionState {
        status: ConnectionStatus::Restarting,
        retry_count: Some(3),
        ..ConnectionState::default()
    };

    // When
    let indicator = build_status_indicator(&state).unwrap();

    // Then
    assert_that!(
        indicator.detail.as_str(),
        eq("Backend restarting (attempt 3)...")
    );
}

#[test]
fn given_error_with_message_when_build_indicator_then_detail_is_message() {
    // Given
    let state = ConnectionState {
        status: ConnectionStatus::Error,
        error_message: Some("Port 4000 already in use".into()),
        ..ConnectionState::default()
    };

    // When
    let indicator = build_status_indicator(&state);

    // Then
    assert_that!(
        indicator.map(|i| i.detail),
        some(eq("Port 4000 already in use"))
    );
}

#[test]
fn given_error_with_blank_message_when_build_indicator_then_generic_detail() {
    // Given
    let state = ConnectionState {
        status: ConnectionStatus::Error,
        error_message: Some("   ".into()),
        ..ConnectionState::default()
    };

    // When
    let indicator = build_status_indicator(&state).unwrap();

    // Then
    assert_that!(indicator.label.as_str(), eq("Disconnected"));
    assert_that!(indicator.detail.as_str(), eq("Backend connection failed"));
}
