//! End-to-end flow through the public API: bridge → adapter → tracker → selection.

use studio_config::BridgeConfig;
use studio_sidecar::{
    ChannelNames, ConnectionState, ConnectionStatus, ConnectionTracker, ErrorPayload,
    IpcEventAdapter, LocalBridge, ReadyPayload, RestartingPayload, SidecarChannel,
    build_status_indicator,
};

use std::sync::Arc;

use googletest::prelude::*;

#[test]
fn given_sidecar_crash_and_recovery_when_events_flow_then_ui_sees_each_stage() {
    // Given
    let bridge = LocalBridge::new();
    let tracker = Arc::new(ConnectionTracker::new());
    let mut adapter = IpcEventAdapter::new(tracker.clone());
    adapter.install(Some(&bridge));
    let mut is_ready = tracker.select(|s| s.is_ready());
    let mut indicator = tracker.select(build_status_indicator);

    // When / Then: ready
    bridge
        .emit_json(SidecarChannel::Ready, &ReadyPayload { port: 4000 })
        .unwrap();
    assert_that!(is_ready.poll(), some(eq(true)));
    assert_that!(indicator.poll(), some(none()));

    // When / Then: crash
    bridge
        .emit_json(
            SidecarChannel::Error,
            &ErrorPayload {
                message: "sidecar exited with code 137".into(),
            },
        )
        .unwrap();
    assert_that!(is_ready.poll(), some(eq(false)));
    let shown = indicator.get().unwrap();
    assert_that!(shown.status, eq(ConnectionStatus::Error));
    assert_that!(shown.detail.as_str(), eq("sidecar exited with code 137"));

    // When / Then: restart attempts
    for attempt in 1..=2 {
        bridge
            .emit_json(
                SidecarChannel::Restarting,
                &RestartingPayload {
                    retry_count: attempt,
                },
            )
            .unwrap();
    }
    assert_that!(tracker.retry_count(), some(eq(2)));
    assert_that!(tracker.error_message(), none());
    assert_that!(tracker.port(), some(eq(4000)));

    // When / Then: recovered on a new port
    bridge.emit(SidecarChannel::Ready, r#"{"port":4001}"#);
    assert_eq!(
        tracker.snapshot(),
        ConnectionState {
            status: ConnectionStatus::Ready,
            error_message: None,
            retry_count: None,
            port: Some(4001),
        }
    );
    assert_that!(is_ready.poll(), some(eq(true)));
}

#[test]
fn given_hot_reload_when_adapter_reinstalled_then_each_event_applied_once() {
    // Given
    let bridge = LocalBridge::new();
    let tracker = Arc::new(ConnectionTracker::new());
    let mut adapter = IpcEventAdapter::new(tracker.clone());
    adapter.install(Some(&bridge));
    tracker.set_ready(4000);

    // When
    adapter.install(Some(&bridge));
    let delivered = bridge.emit(SidecarChannel::Restarting, r#"{"retryCount":1}"#);

    // Then
    assert_that!(delivered, eq(1));
    assert_that!(tracker.status(), eq(ConnectionStatus::Restarting));
    assert_that!(tracker.port(), some(eq(4000)));
}

#[test]
fn given_no_host_when_installed_then_stays_connecting() {
    // Given
    let tracker = Arc::new(ConnectionTracker::new());
    let mut adapter = IpcEventAdapter::new(tracker.clone());

    // When
    let active = adapter.install(None);

    // Then
    assert_that!(active, eq(0));
    assert_that!(tracker.status(), eq(ConnectionStatus::Connecting));
    let shown = build_status_indicator(&tracker.snapshot()).unwrap();
    assert_that!(shown.label.as_str(), eq("Connecting"));
}

#[test]
fn given_configured_event_names_when_resolve_then_maps_to_channels() {
    // Given
    let config = BridgeConfig {
        ready_event: "studio:ready".into(),
        ..BridgeConfig::default()
    };
    let names = ChannelNames::from(&config);

    // Then
    assert_that!(names.resolve("studio:ready"), some(eq(SidecarChannel::Ready)));
    assert_that!(
        names.resolve("sidecar-starting"),
        some(eq(SidecarChannel::Starting))
    );
    assert_that!(names.resolve("sidecar-ready"), none());
    assert_that!(names.name(SidecarChannel::Error), eq("sidecar-error"));
}
