use std::fmt;

type Unlisten = Box<dyn FnOnce() + Send>;

/// Subscription returned by [`HostBridge::listen`](crate::HostBridge::listen).
///
/// Cancelling runs the unsubscribe action at most once. Dropping the handle
/// cancels it.
pub struct ListenerHandle {
    unlisten: Option<Unlisten>,
}

impl ListenerHandle {
    pub fn new(unlisten: impl FnOnce() + Send + 'static) -> Self {
        Self {
            unlisten: Some(Box::new(unlisten)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.unlisten.is_some()
    }

    pub fn cancel(&mut self) {
        if let Some(unlisten) = self.unlisten.take() {
            unlisten();
        }
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for ListenerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerHandle")
            .field("active", &self.is_active())
            .finish()
    }
}
