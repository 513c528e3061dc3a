//! Owner of the sidecar connection state.

use crate::{ConnectionState, ConnectionStatus, Selection};

use log::debug;
use tokio::sync::watch;

/// Holds the current [`ConnectionState`] and applies whole-record transitions.
///
/// Every mutation runs inside `watch::Sender::send_if_modified`, so it is
/// atomic with respect to other mutations even when called from several
/// threads, and subscribers are only woken when the record actually changed.
#[derive(Debug)]
pub struct ConnectionTracker {
    state_tx: watch::Sender<ConnectionState>,
}

impl ConnectionTracker {
    /// Create a tracker in the `connecting` state.
    pub fn new() -> Self {
        let (state_tx, _) = watch::channel(ConnectionState::default());
        Self { state_tx }
    }

    /// Set the status, keeping the last known port.
    ///
    /// Detail fields that do not belong to `status` are cleared, so a
    /// reconnect signal after an error does not keep showing the old message.
    pub fn set_status(&self, status: ConnectionStatus) {
        self.transition(|state| {
            state.status = status;
            if status != ConnectionStatus::Error {
                state.error_message = None;
            }
            if status != ConnectionStatus::Restarting {
                state.retry_count = None;
            }
        });
    }

    /// Record a failure reported by the host.
    pub fn set_error(&self, message: impl Into<String>) {
        let message = message.into();
        self.transition(|state| {
            state.status = ConnectionStatus::Error;
            state.error_message = Some(message);
            state.retry_count = None;
        });
    }

    /// Record a restart attempt. The host owns the retry limit.
    pub fn set_restarting(&self, retry_count: u32) {
        self.transition(|state| {
            state.status = ConnectionStatus::Restarting;
            state.retry_count = Some(retry_count);
            state.error_message = None;
        });
    }

    /// Record that the sidecar is reachable on `port`.
    pub fn set_ready(&self, port: u16) {
        self.transition(|state| {
            state.status = ConnectionStatus::Ready;
            state.port = Some(port);
            state.error_message = None;
            state.retry_count = None;
        });
    }

    fn transition(&self, apply: impl FnOnce(&mut ConnectionState)) {
        let changed = self.state_tx.send_if_modified(|state| {
            let before = state.clone();
            apply(state);
            *state != before
        });

        if changed {
            debug!("Connection state changed: {:?}", *self.state_tx.borrow());
        }
    }

    /// Copy of the whole record.
    pub fn snapshot(&self) -> ConnectionState {
        self.state_tx.borrow().clone()
    }

    pub fn status(&self) -> ConnectionStatus {
        self.state_tx.borrow().status
    }

    pub fn error_message(&self) -> Option<String> {
        self.state_tx.borrow().error_message.clone()
    }

    pub fn retry_count(&self) -> Option<u32> {
        self.state_tx.borrow().retry_count
    }

    pub fn port(&self) -> Option<u16> {
        self.state_tx.borrow().port
    }

    /// Subscribe to every change of the record.
    pub fn subscribe(&self) -> watch::Receiver<ConnectionState> {
        self.state_tx.subscribe()
    }

    /// Subscribe to a derived value; see [`Selection`].
    pub fn select<T, F>(&self, selector: F) -> Selection<T, F>
    where
        T: PartialEq + Clone,
        F: Fn(&ConnectionState) -> T,
    {
        Selection::new(self.subscribe(), selector)
    }
}

impl Default for ConnectionTracker {
    fn default() -> Self {
        Self::new()
    }
}
