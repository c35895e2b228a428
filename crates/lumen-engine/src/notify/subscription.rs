use crate::error::Result;

use super::{ChannelId, Payload};

pub(crate) type ReceiveFn = Box<dyn FnMut(&Payload) -> Result<()>>;
pub(crate) type CompleteFn = Box<dyn FnOnce()>;

/// Callbacks attached to a single subscription.
///
/// `on_receive` runs for every push on the channel. `on_complete` runs at most
/// once, when the channel signals that no more notifications will arrive.
#[derive(Default)]
pub struct Reactor {
    pub(crate) on_receive: Option<ReceiveFn>,
    pub(crate) on_complete: Option<CompleteFn>,
}

impl Reactor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_receive<F>(mut self, f: F) -> Self
    where
        F: FnMut(&Payload) -> Result<()> + 'static,
    {
        self.on_receive = Some(Box::new(f));
        self
    }

    pub fn on_complete<F>(mut self, f: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        self.on_complete = Some(Box::new(f));
        self
    }
}

/// Unsubscribe token returned by [`Reactable::subscribe`].
///
/// The release action runs exactly once: on the first `dispose()` or on drop,
/// whichever comes first.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new<F>(release: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Self { release: Some(Box::new(release)) }
    }

    /// Token that has nothing to release.
    pub fn empty() -> Self {
        Self { release: None }
    }

    pub fn dispose(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }

    #[inline]
    pub fn is_disposed(&self) -> bool {
        self.release.is_none()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

/// Source of notifications that components subscribe to.
pub trait Reactable {
    fn subscribe(&self, channel: ChannelId, reactor: Reactor) -> Subscription;
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn dispose_runs_release_once() {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let mut sub = Subscription::new(move || c.set(c.get() + 1));

        sub.dispose();
        sub.dispose();
        drop(sub);

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn drop_releases_undisposed_token() {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        drop(Subscription::new(move || c.set(c.get() + 1)));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn empty_token_is_disposed() {
        assert!(Subscription::empty().is_disposed());
    }
}
