//! Sidecar connection tracking for the BMAD Studio UI.
//!
//! A [`ConnectionTracker`] holds the believed state of the backend sidecar
//! connection. An [`IpcEventAdapter`] feeds it from a [`HostBridge`], which
//! may be absent when running outside the desktop host.

mod connection_state;
mod connection_status;
mod connection_tracker;
mod error;
mod event_adapter;
mod host_bridge;
mod listener_handle;
mod local_bridge;
mod payload;
mod selection;
mod sidecar_channel;
mod status_indicator;
#[cfg(feature = "tauri")]
mod tauri_bridge;

#[cfg(test)]
mod tests;

pub use connection_state::ConnectionState;
pub use connection_status::ConnectionStatus;
pub use connection_tracker::ConnectionTracker;
pub use error::{Result as SidecarResult, SidecarError};
pub use event_adapter::{IpcEventAdapter, apply_event};
pub use host_bridge::{EventHandler, HostBridge};
pub use listener_handle::ListenerHandle;
pub use local_bridge::LocalBridge;
pub use payload::{ErrorPayload, ReadyPayload, RestartingPayload};
pub use selection::Selection;
pub use sidecar_channel::{ChannelNames, SidecarChannel};
pub use status_indicator::{StatusIndicator, build_status_indicator};
#[cfg(feature = "tauri")]
pub use tauri_bridge::TauriBridge;
