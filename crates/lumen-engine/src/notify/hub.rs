use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::error::Result;

use super::subscription::{CompleteFn, ReceiveFn};
use super::{ChannelId, Payload, Reactable, Reactor, Subscription};

struct Slot {
    on_receive: Option<ReceiveFn>,
    on_complete: Option<CompleteFn>,
}

struct Entry {
    key: u64,
    channel: ChannelId,
    slot: Rc<RefCell<Slot>>,
}

#[derive(Default)]
struct Registry {
    next_key: u64,
    entries: Vec<Entry>,
}

impl Registry {
    fn contains(&self, key: u64) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }
}

/// Single-threaded publish/subscribe hub.
///
/// Delivery is synchronous: `push` runs every subscriber of the channel before
/// it returns. Subscribers may unsubscribe (or subscribe) from inside a
/// callback. A subscriber that is already running when the same channel is
/// pushed again is skipped.
#[derive(Clone, Default)]
pub struct PushHub {
    registry: Rc<RefCell<Registry>>,
}

impl PushHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers `payload` to every subscriber of `channel`, in subscription order.
    ///
    /// Stops at the first subscriber error and returns it.
    pub fn push(&self, channel: ChannelId, payload: Payload) -> Result<()> {
        let targets: Vec<(u64, Rc<RefCell<Slot>>)> = self
            .registry
            .borrow()
            .entries
            .iter()
            .filter(|e| e.channel == channel)
            .map(|e| (e.key, e.slot.clone()))
            .collect();

        log::trace!("push {channel}: {} subscriber(s)", targets.len());

        for (key, slot) in targets {
            // An earlier callback may have released this subscription.
            if !self.registry.borrow().contains(key) {
                continue;
            }
            let Ok(mut slot) = slot.try_borrow_mut() else {
                log::warn!("re-entrant push on {channel} skipped for subscription {key}");
                continue;
            };
            if let Some(on_receive) = slot.on_receive.as_mut() {
                on_receive(&payload)?;
            }
        }

        Ok(())
    }

    /// Pushes a notification without payload.
    pub fn push_empty(&self, channel: ChannelId) -> Result<()> {
        self.push(channel, Payload::Empty)
    }

    /// Ends the `channel` stream: every current subscriber is removed and its
    /// completion callback runs once.
    pub fn complete(&self, channel: ChannelId) {
        let removed: Vec<Entry> = {
            let mut registry = self.registry.borrow_mut();
            let (removed, kept): (Vec<Entry>, Vec<Entry>) = registry
                .entries
                .drain(..)
                .partition(|e| e.channel == channel);
            registry.entries = kept;
            removed
        };

        log::debug!("complete {channel}: {} subscriber(s)", removed.len());

        for entry in removed {
            let on_complete = entry.slot.borrow_mut().on_complete.take();
            if let Some(on_complete) = on_complete {
                on_complete();
            }
        }
    }

    /// Number of live subscriptions on `channel`.
    pub fn subscriber_count(&self, channel: ChannelId) -> usize {
        self.registry
            .borrow()
            .entries
            .iter()
            .filter(|e| e.channel == channel)
            .count()
    }

    fn unsubscribe(registry: &Weak<RefCell<Registry>>, key: u64) {
        let Some(registry) = registry.upgrade() else { return };
        let removed: Option<Entry> = {
            let mut registry = registry.borrow_mut();
            registry
                .entries
                .iter()
                .position(|e| e.key == key)
                .map(|idx| registry.entries.remove(idx))
        };
        // Dropped outside the borrow: the slot's closures may own other tokens.
        drop(removed);
    }
}

impl Reactable for PushHub {
    fn subscribe(&self, channel: ChannelId, reactor: Reactor) -> Subscription {
        let key = {
            let mut registry = self.registry.borrow_mut();
            let key = registry.next_key;
            registry.next_key += 1;
            registry.entries.push(Entry {
                key,
                channel,
                slot: Rc::new(RefCell::new(Slot {
                    on_receive: reactor.on_receive,
                    on_complete: reactor.on_complete,
                })),
            });
            key
        };

        let registry = Rc::downgrade(&self.registry);
        Subscription::new(move || PushHub::unsubscribe(&registry, key))
    }
}
