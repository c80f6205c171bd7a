//! Sidebar collapsed-state broadcast.
//!
//! The layout owns the sidebar's collapsed flag. Components outside its
//! subtree (the category grid, for one) subscribe to a [`SidebarBus`] instead
//! of receiving the flag through props.
//!
//! The bus keeps only the latest value, so a slow subscriber may skip
//! intermediate toggles but always ends up seeing the final state.

use std::sync::Arc;
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SidebarState {
    pub collapsed: bool,
}

/// Publish/subscribe channel for [`SidebarState`].
///
/// Cheap to clone; all clones share the same channel.
#[derive(Debug, Clone)]
pub struct SidebarBus {
    tx: Arc<watch::Sender<SidebarState>>,
}

impl SidebarBus {
    #[must_use]
    pub fn new(initial: SidebarState) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    /// Publishes a new state to every subscriber.
    ///
    /// Succeeds even when nobody is listening; late subscribers read the
    /// value on their first probe.
    pub fn publish(&self, state: SidebarState) {
        self.tx.send_replace(state);
        tracing::trace!(collapsed = state.collapsed, subscribers = self.tx.receiver_count(), "sidebar state published");
    }

    /// Subscribes to state changes. Dropping the subscription unsubscribes.
    #[must_use]
    pub fn subscribe(&self) -> SidebarSubscription {
        SidebarSubscription { rx: self.tx.subscribe() }
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for SidebarBus {
    fn default() -> Self {
        Self::new(SidebarState::default())
    }
}

/// A listener's handle on the [`SidebarBus`].
#[derive(Debug)]
pub struct SidebarSubscription {
    rx: watch::Receiver<SidebarState>,
}

impl SidebarSubscription {
    /// Reads the current state and marks it seen.
    ///
    /// Call once on mount: the state may have been published before this
    /// subscription existed.
    pub fn probe(&mut self) -> SidebarState {
        *self.rx.borrow_and_update()
    }

    /// True if a state was published since the last probe or change.
    #[must_use]
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// Waits for the next published state.
    ///
    /// Returns `None` once every [`SidebarBus`] handle has been dropped.
    pub async fn changed(&mut self) -> Option<SidebarState> {
        self.rx.changed().await.ok()?;
        Some(*self.rx.borrow_and_update())
    }
}

/// Layout-level owner of the sidebar flag.
#[derive(Debug)]
pub struct SidebarLayout {
    collapsed: bool,
    bus: SidebarBus,
}

impl SidebarLayout {
    /// Creates the owner and publishes its initial state on `bus`.
    #[must_use]
    pub fn new(bus: SidebarBus, collapsed: bool) -> Self {
        bus.publish(SidebarState { collapsed });
        Self { collapsed, bus }
    }

    #[must_use]
    pub const fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Flips the flag and broadcasts it. Returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.set_collapsed(!self.collapsed);
        self.collapsed
    }

    /// Sets the flag, broadcasting only when it actually changes.
    pub fn set_collapsed(&mut self, collapsed: bool) {
        if self.collapsed == collapsed {
            return;
        }
        self.collapsed = collapsed;
        tracing::debug!(collapsed = collapsed, "sidebar toggled");
        self.bus.publish(SidebarState { collapsed });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn late_subscriber_probes_current_state() {
        let bus = SidebarBus::default();
        let mut layout = SidebarLayout::new(bus.clone(), false);
        layout.toggle();

        let mut sub = bus.subscribe();
        assert_eq!(sub.probe(), SidebarState { collapsed: true });
        assert!(!sub.has_changed());
    }

    #[test]
    fn setting_same_value_does_not_notify() {
        let bus = SidebarBus::default();
        let mut layout = SidebarLayout::new(bus.clone(), true);
        let mut sub = bus.subscribe();
        sub.probe();

        layout.set_collapsed(true);
        assert!(!sub.has_changed());

        layout.set_collapsed(false);
        assert!(sub.has_changed());
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let bus = SidebarBus::default();
        let sub = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 1);
        drop(sub);
        assert_eq!(bus.subscriber_count(), 0);
    }
}
