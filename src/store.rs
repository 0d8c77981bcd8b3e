//! # Store
//!
//! Explicitly owned observable value.
//!
//! Every piece of shared state (theme, answers, fetch snapshots) lives in one of these and is
//! handed to consumers by reference, never looked up globally. Subscribers get a
//! [`watch::Receiver`] and see the latest value after each write.
use tokio::sync::watch;

#[derive(Debug)]
pub struct Store<T> {
    sender: watch::Sender<T>,
}

impl<T: Clone> Store<T> {
    pub fn new(initial: T) -> Self {
        Self {
            sender: watch::Sender::new(initial),
        }
    }

    pub fn get(&self) -> T {
        self.sender.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.sender.subscribe()
    }

    /// Mutates in place and notifies every subscriber.
    pub fn update(&self, modify: impl FnOnce(&mut T)) {
        self.sender.send_modify(modify);
    }

    /// Mutates in place, notifying only when `modify` reports a change.
    ///
    /// The closure runs under the store lock, so a check-then-write inside it is atomic.
    pub fn update_if(&self, modify: impl FnOnce(&mut T) -> bool) -> bool {
        self.sender.send_if_modified(modify)
    }
}

impl<T: Clone + Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
