use crate::{ListenerHandle, SidecarChannel};

use std::sync::Arc;

/// Callback invoked with the raw JSON payload text of one event.
pub type EventHandler = Arc<dyn Fn(&str) + Send + Sync>;

/// Event source provided by the desktop host.
///
/// Implementations deliver events synchronously on whatever thread the host
/// emits them from, and stop delivering once the returned handle is
/// cancelled or dropped.
pub trait HostBridge: Send + Sync {
    fn listen(&self, channel: SidecarChannel, handler: EventHandler) -> ListenerHandle;
}
