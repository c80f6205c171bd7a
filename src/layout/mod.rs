//! Layout state shared across components.
//!
//! - [`sidebar`]: Collapsed-flag owner and its publish/subscribe bus
//! - [`grid`]: Category grid listening on the bus
//! - [`visibility`]: Trip sidebar placement rule

pub mod grid;
pub mod sidebar;
pub mod visibility;

pub use grid::{available_width, columns_for_width, CategoryGrid};
pub use sidebar::{SidebarBus, SidebarLayout, SidebarState, SidebarSubscription};
pub use visibility::{is_mobile, trip_sidebar_placement, TripSidebarPlacement, MOBILE_BREAKPOINT};
