//! Bridges host sidecar events into a [`ConnectionTracker`].

use crate::{
    ConnectionStatus, ConnectionTracker, ErrorPayload, EventHandler, HostBridge, ListenerHandle,
    ReadyPayload, RestartingPayload, SidecarChannel, SidecarError, SidecarResult,
};

use std::sync::Arc;

use log::{info, warn};
use serde::de::DeserializeOwned;

/// Subscribes a tracker to the four sidecar channels of a host bridge.
///
/// Holds the listener handles of the current installation. Installing again
/// tears the previous ones down first, so a reload never double-delivers.
/// Dropping the adapter tears down as well.
pub struct IpcEventAdapter {
    tracker: Arc<ConnectionTracker>,
    listeners: Vec<ListenerHandle>,
}

impl IpcEventAdapter {
    pub fn new(tracker: Arc<ConnectionTracker>) -> Self {
        Self {
            tracker,
            listeners: Vec::with_capacity(SidecarChannel::ALL.len()),
        }
    }

    /// Subscribe to `bridge`, replacing any previous installation.
    ///
    /// With no bridge this only tears down: the tracker keeps whatever state
    /// it has (initially `connecting`). Returns the number of active
    /// subscriptions.
    pub fn install(&mut self, bridge: Option<&dyn HostBridge>) -> usize {
        self.teardown();

        let Some(bridge) = bridge else {
            info!("No host bridge available, sidecar status will stay at its current value");
            return 0;
        };

        for channel in SidecarChannel::ALL {
            let tracker = self.tracker.clone();
            let handler: EventHandler = Arc::new(move |payload: &str| {
                if let Err(e) = apply_event(&tracker, channel, payload) {
                    warn!("Ignoring sidecar event: {e}");
                }
            });
            self.listeners.push(bridge.listen(channel, handler));
        }

        info!("Subscribed to {} sidecar channels", self.listeners.len());
        self.listeners.len()
    }

    /// Cancel every active subscription. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        if self.listeners.is_empty() {
            return;
        }

        for listener in &mut self.listeners {
            listener.cancel();
        }
        self.listeners.clear();
        info!("Unsubscribed from sidecar channels");
    }

    pub fn is_installed(&self) -> bool {
        !self.listeners.is_empty()
    }

    pub fn tracker(&self) -> &Arc<ConnectionTracker> {
        &self.tracker
    }
}

impl Drop for IpcEventAdapter {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Apply one raw channel event to `tracker`.
///
/// The `starting` payload is ignored. Other payloads must decode, and a
/// `ready` port must be non-zero; on error the tracker is left unchanged.
pub fn apply_event(
    tracker: &ConnectionTracker,
    channel: SidecarChannel,
    payload: &str,
) -> SidecarResult<()> {
    match channel {
        SidecarChannel::Starting => tracker.set_status(ConnectionStatus::Connecting),
        SidecarChannel::Ready => {
            let ReadyPayload { port } = decode(channel, payload)?;
            if port == 0 {
                return Err(SidecarError::malformed(channel, "port must be non-zero"));
            }
            tracker.set_ready(port);
        }
        SidecarChannel::Restarting => {
            let RestartingPayload { retry_count } = decode(channel, payload)?;
            tracker.set_restarting(retry_count);
        }
        SidecarChannel::Error => {
            let ErrorPayload { message } = decode(channel, payload)?;
            tracker.set_error(message);
        }
    }

    Ok(())
}

fn decode<T: DeserializeOwned>(channel: SidecarChannel, payload: &str) -> SidecarResult<T> {
    serde_json::from_str(payload).map_err(|e| SidecarError::malformed(channel, e.to_string()))
}
