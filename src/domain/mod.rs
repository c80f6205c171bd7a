//! Domain layer for the guide core.
//!
//! This module contains the data types of the city guide, independent of how
//! they are fetched, searched or displayed.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: Searchable catalog entries
//! - [`trip`]: Trip plan, events, restaurants and friends
//! - [`wallet`]: Wallet transactions
//! - [`poi`]: Map points of interest
//! - [`attendant`]: Attendee directory entries
//!
//! # Examples
//!
//! ```
//! use devconnect_guide::domain::{GuideError, Result};
//!
//! fn lookup(id: u32) -> Result<()> {
//!     Err(GuideError::ItemNotFound { id })
//! }
//! assert!(lookup(9).is_err());
//! ```

pub mod attendant;
pub mod error;
pub mod item;
pub mod poi;
pub mod trip;
pub mod wallet;

pub use attendant::Attendant;
pub use error::{GuideError, Result};
pub use item::{ItemKind, SearchItem};
pub use poi::{LatLng, PoiCategory, PointOfInterest};
pub use trip::{EventKind, Friend, Restaurant, TripEvent, TripPlan};
pub use wallet::{Transaction, TxKind, TxStatus};
