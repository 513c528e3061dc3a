use crate::ListenerHandle;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn counting_handle() -> (ListenerHandle, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let handle = ListenerHandle::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    (handle, calls)
}

#[test]
fn given_active_handle_when_cancel_twice_then_unlisten_runs_once() {
    // Given
    let (mut handle, calls) = counting_handle();
    assert!(handle.is_active());

    // When
    handle.cancel();
    handle.cancel();

    // Then
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(!handle.is_active());
}

#[test]
fn given_active_handle_when_dropped_then_unlisten_runs() {
    // Given
    let (handle, calls) = counting_handle();

    // When
    drop(handle);

    // Then
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn given_cancelled_handle_when_dropped_then_unlisten_not_repeated() {
    // Given
    let (mut handle, calls) = counting_handle();
    handle.cancel();

    // When
    drop(handle);

    // Then
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
