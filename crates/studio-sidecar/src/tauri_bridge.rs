//! Host bridge over the Tauri event system.

use crate::{ChannelNames, EventHandler, HostBridge, ListenerHandle, SidecarChannel};

use log::debug;
use tauri::{AppHandle, Event, Listener, Runtime};

/// Listens for sidecar lifecycle events emitted through a Tauri app.
pub struct TauriBridge<R: Runtime> {
    app: AppHandle<R>,
    names: ChannelNames,
}

impl<R: Runtime> TauriBridge<R> {
    pub fn new(app: AppHandle<R>, names: ChannelNames) -> Self {
        Self { app, names }
    }
}

impl<R: Runtime> HostBridge for TauriBridge<R> {
    fn listen(&self, channel: SidecarChannel, handler: EventHandler) -> ListenerHandle {
        let event_name = self.names.name(channel).to_string();
        let id = self
            .app
            .listen(event_name.clone(), move |event: Event| handler(event.payload()));
        debug!("Listening for Tauri event {event_name} ({channel})");

        let app = self.app.clone();
        ListenerHandle::new(move || app.unlisten(id))
    }
}
