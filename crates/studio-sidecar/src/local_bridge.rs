//! In-process host bridge.

use crate::{EventHandler, HostBridge, ListenerHandle, SidecarChannel, SidecarResult};

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use log::{debug, trace};
use serde::Serialize;

/// Host bridge living in the same process as its listeners.
///
/// Used when the UI runs without the desktop host (preview, CLI, tests):
/// whoever owns the bridge calls [`LocalBridge::emit`] to deliver sidecar
/// events. Cloning shares the listener registry.
#[derive(Clone, Default)]
pub struct LocalBridge {
    inner: Arc<Mutex<BridgeInner>>,
}

#[derive(Default)]
struct BridgeInner {
    next_id: u64,
    listeners: HashMap<u64, (SidecarChannel, EventHandler)>,
}

impl LocalBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `payload` to every listener on `channel`, in registration order.
    ///
    /// Handlers run on the calling thread after the registry lock is
    /// released, so a handler may subscribe or unsubscribe. Returns the
    /// number of handlers invoked.
    pub fn emit(&self, channel: SidecarChannel, payload: &str) -> usize {
        let handlers: Vec<EventHandler> = {
            let inner = lock(&self.inner);
            let mut matching: Vec<(u64, EventHandler)> = inner
                .listeners
                .iter()
                .filter(|(_, (c, _))| *c == channel)
                .map(|(id, (_, handler))| (*id, handler.clone()))
                .collect();
            matching.sort_by_key(|(id, _)| *id);
            matching.into_iter().map(|(_, handler)| handler).collect()
        };

        trace!("Emitting {channel} to {} listener(s)", handlers.len());

        for handler in &handlers {
            handler(payload);
        }

        handlers.len()
    }

    /// Serialize `payload` to JSON and [`emit`](Self::emit) it.
    pub fn emit_json<T: Serialize>(
        &self,
        channel: SidecarChannel,
        payload: &T,
    ) -> SidecarResult<usize> {
        let json = serde_json::to_string(payload)?;
        Ok(self.emit(channel, &json))
    }

    pub fn listener_count(&self, channel: SidecarChannel) -> usize {
        lock(&self.inner)
            .listeners
            .values()
            .filter(|(c, _)| *c == channel)
            .count()
    }
}

impl HostBridge for LocalBridge {
    fn listen(&self, channel: SidecarChannel, handler: EventHandler) -> ListenerHandle {
        let id = {
            let mut inner = lock(&self.inner);
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.insert(id, (channel, handler));
            id
        };
        debug!("Registered {channel} listener {id}");

        let registry: Weak<Mutex<BridgeInner>> = Arc::downgrade(&self.inner);
        ListenerHandle::new(move || {
            // Bridge already gone: nothing left to unregister.
            if let Some(inner) = registry.upgrade() {
                lock(&inner).listeners.remove(&id);
                debug!("Removed {channel} listener {id}");
            }
        })
    }
}

// Handlers never run under the lock, so a poisoned registry is still consistent.
fn lock(inner: &Mutex<BridgeInner>) -> MutexGuard<'_, BridgeInner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}
