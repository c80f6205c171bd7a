//! In-memory search over the guide catalog.
//!
//! - [`matcher`]: Query normalization, substring matching and highlight ranges
//! - [`city`]: City filter for listing pages
//! - [`attendants`]: Attendee directory filter

pub mod attendants;
pub mod city;
pub mod matcher;

pub use attendants::{attendant_matches, filter_attendants, unique_roles};
pub use city::{city_label, city_name_from_slug, filter_by_city, Located, CITIES};
pub use matcher::{filter_items, match_ranges, matches, normalize_query, MIN_QUERY_CHARS};
