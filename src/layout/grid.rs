//! Category grid that adapts its column count to the sidebar.

use super::sidebar::{SidebarBus, SidebarState, SidebarSubscription};

/// Width taken by the expanded sidebar, in CSS pixels.
pub const SIDEBAR_EXPANDED_WIDTH: u32 = 320;

/// Width of the collapsed icon rail.
pub const SIDEBAR_COLLAPSED_WIDTH: u32 = 64;

/// Column count for a content area `available_width` pixels wide.
///
/// Breakpoints follow the listing grid: one column below 640, two below 768,
/// three below 1024, four otherwise.
#[must_use]
pub const fn columns_for_width(available_width: u32) -> usize {
    match available_width {
        0..=639 => 1,
        640..=767 => 2,
        768..=1023 => 3,
        _ => 4,
    }
}

/// Width left for content next to a sidebar in `state`.
#[must_use]
pub const fn available_width(viewport_width: u32, state: SidebarState) -> u32 {
    let sidebar = if state.collapsed {
        SIDEBAR_COLLAPSED_WIDTH
    } else {
        SIDEBAR_EXPANDED_WIDTH
    };
    viewport_width.saturating_sub(sidebar)
}

/// A listener on the sidebar bus that recomputes its columns on every change.
#[derive(Debug)]
pub struct CategoryGrid {
    viewport_width: u32,
    sidebar: SidebarState,
    columns: usize,
    subscription: SidebarSubscription,
}

impl CategoryGrid {
    /// Subscribes to `bus` and probes the current state right away, so the
    /// grid is correct even if the sidebar published before it mounted.
    #[must_use]
    pub fn mount(bus: &SidebarBus, viewport_width: u32) -> Self {
        let mut subscription = bus.subscribe();
        let sidebar = subscription.probe();
        let columns = columns_for_width(available_width(viewport_width, sidebar));
        tracing::debug!(viewport_width, collapsed = sidebar.collapsed, columns, "category grid mounted");

        Self {
            viewport_width,
            sidebar,
            columns,
            subscription,
        }
    }

    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub const fn sidebar(&self) -> SidebarState {
        self.sidebar
    }

    pub fn resize(&mut self, viewport_width: u32) {
        self.viewport_width = viewport_width;
        self.apply(self.sidebar);
    }

    /// Applies any state published since the last look, without waiting.
    ///
    /// Returns true if a new state was picked up.
    pub fn refresh(&mut self) -> bool {
        if !self.subscription.has_changed() {
            return false;
        }
        let state = self.subscription.probe();
        self.apply(state);
        true
    }

    /// Waits for the next sidebar change and applies it.
    ///
    /// Returns false once the bus is gone.
    pub async fn next_change(&mut self) -> bool {
        match self.subscription.changed().await {
            Some(state) => {
                self.apply(state);
                true
            }
            None => false,
        }
    }

    fn apply(&mut self, state: SidebarState) {
        self.sidebar = state;
        self.columns = columns_for_width(available_width(self.viewport_width, state));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::sidebar::SidebarLayout;

    #[test]
    fn breakpoints() {
        assert_eq!(columns_for_width(0), 1);
        assert_eq!(columns_for_width(639), 1);
        assert_eq!(columns_for_width(640), 2);
        assert_eq!(columns_for_width(1023), 3);
        assert_eq!(columns_for_width(1920), 4);
    }

    #[test]
    fn collapsing_the_sidebar_widens_the_grid() {
        let bus = SidebarBus::default();
        let mut layout = SidebarLayout::new(bus.clone(), false);

        // 1280 - 320 = 960 -> 3 columns; 1280 - 64 = 1216 -> 4 columns
        let mut grid = CategoryGrid::mount(&bus, 1280);
        assert_eq!(grid.columns(), 3);

        layout.toggle();
        assert!(grid.refresh());
        assert_eq!(grid.columns(), 4);
        assert!(!grid.refresh());

        // collapsed rail: 800 - 64 = 736 -> 2 columns; 700 - 64 = 636 -> 1
        grid.resize(800);
        assert_eq!(grid.columns(), 2);
        grid.resize(700);
        assert_eq!(grid.columns(), 1);
    }

    #[tokio::test]
    async fn listener_follows_changes_until_the_bus_closes() {
        let bus = SidebarBus::default();
        let mut layout = SidebarLayout::new(bus.clone(), false);
        let mut grid = CategoryGrid::mount(&bus, 1280);
        assert!(!grid.sidebar().collapsed);

        layout.toggle();
        assert!(grid.next_change().await);
        assert!(grid.sidebar().collapsed);
        assert_eq!(grid.columns(), 4);

        drop(layout);
        drop(bus);
        assert!(!grid.next_change().await);
        assert!(grid.sidebar().collapsed);
    }
}
