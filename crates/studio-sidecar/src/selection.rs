use crate::ConnectionState;

use tokio::sync::watch;

/// Equality-checked view over one derived value of the connection state.
///
/// Wakes only when `selector` yields a value different (by `PartialEq`)
/// from the last one observed.
pub struct Selection<T, F> {
    rx: watch::Receiver<ConnectionState>,
    selector: F,
    current: T,
}

impl<T, F> Selection<T, F>
where
    T: PartialEq + Clone,
    F: Fn(&ConnectionState) -> T,
{
    pub(crate) fn new(mut rx: watch::Receiver<ConnectionState>, selector: F) -> Self {
        let current = selector(&*rx.borrow_and_update());
        Self {
            rx,
            selector,
            current,
        }
    }

    /// Last observed value.
    pub fn get(&self) -> T {
        self.current.clone()
    }

    /// Re-read the state and return the new value if it differs.
    pub fn poll(&mut self) -> Option<T> {
        let next = (self.selector)(&*self.rx.borrow_and_update());
        self.accept(next)
    }

    /// Wait for the derived value to change.
    ///
    /// Returns `None` once the tracker has been dropped.
    pub async fn changed(&mut self) -> Option<T> {
        loop {
            self.rx.changed().await.ok()?;
            let next = (self.selector)(&*self.rx.borrow_and_update());
            if let Some(value) = self.accept(next) {
                return Some(value);
            }
        }
    }

    fn accept(&mut self, next: T) -> Option<T> {
        if next == self.current {
            return None;
        }
        self.current = next.clone();
        Some(next)
    }
}
