//! Presentation-facing view models.
//!
//! The crate draws nothing itself. Whatever renders the spotlight consumes
//! the display-ready structs in [`viewmodel`]:
//!
//! ```text
//! AppState → compute_viewmodel → SpotlightViewModel → renderer
//! ```

pub mod viewmodel;

pub use viewmodel::{EmptyState, ResultRow, SearchBarInfo, SpotlightViewModel};
