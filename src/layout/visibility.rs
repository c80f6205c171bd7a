//! Where (and whether) the trip sidebar is shown.

/// Viewports narrower than this are treated as mobile.
pub const MOBILE_BREAKPOINT: u32 = 768;

/// Route of the home page, the only page that shows the trip sidebar.
pub const HOME_ROUTE: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripSidebarPlacement {
    Hidden,
    /// Fixed column beside the page content (desktop).
    Docked,
    /// Rendered above the page content (mobile).
    Inline,
}

#[must_use]
pub const fn is_mobile(viewport_width: u32) -> bool {
    viewport_width < MOBILE_BREAKPOINT
}

/// Placement of the trip sidebar.
///
/// A pure function of the wallet being connected, the current route being
/// the home page and the viewport width.
#[must_use]
pub fn trip_sidebar_placement(connected: bool, route: &str, viewport_width: u32) -> TripSidebarPlacement {
    if !connected || route != HOME_ROUTE {
        return TripSidebarPlacement::Hidden;
    }
    if is_mobile(viewport_width) {
        TripSidebarPlacement::Inline
    } else {
        TripSidebarPlacement::Docked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_truth_table() {
        use TripSidebarPlacement::{Docked, Hidden, Inline};

        assert_eq!(trip_sidebar_placement(false, "/", 1280), Hidden);
        assert_eq!(trip_sidebar_placement(true, "/events", 1280), Hidden);
        assert_eq!(trip_sidebar_placement(true, "/", 1280), Docked);
        assert_eq!(trip_sidebar_placement(true, "/", 767), Inline);
        assert_eq!(trip_sidebar_placement(true, "/", 768), Docked);
    }
}
