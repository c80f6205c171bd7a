//! City filter driven by the `?city=` route parameter.
//!
//! The parameter is a URL slug such as `puerto-madero`; it is turned back into
//! a display name ("Puerto Madero") and compared against each item's location.

use crate::domain::error::{GuideError, Result};
use crate::domain::{PointOfInterest, Restaurant, SearchItem, TripEvent};

/// Slug and label of every city offered by the city picker.
pub const CITIES: [(&str, &str); 7] = [
    ("all", "All Cities"),
    ("buenos-aires", "Buenos Aires"),
    ("palermo", "Palermo"),
    ("recoleta", "Recoleta"),
    ("san-telmo", "San Telmo"),
    ("belgrano", "Belgrano"),
    ("puerto-madero", "Puerto Madero"),
];

/// Anything that has an optional location to filter on.
pub trait Located {
    fn location(&self) -> Option<&str>;
}

impl Located for SearchItem {
    fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

impl Located for TripEvent {
    fn location(&self) -> Option<&str> {
        Some(&self.location)
    }
}

impl Located for Restaurant {
    fn location(&self) -> Option<&str> {
        Some(&self.location)
    }
}

impl Located for PointOfInterest {
    fn location(&self) -> Option<&str> {
        Some(&self.address)
    }
}

/// Converts a slug to its display form: `san-telmo` becomes `San Telmo`.
#[must_use]
pub fn city_name_from_slug(slug: &str) -> String {
    slug.to_lowercase()
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Looks up `slug` in [`CITIES`] and returns its label.
///
/// # Errors
///
/// Returns [`GuideError::Config`] for a slug the city picker does not offer.
pub fn city_label(slug: &str) -> Result<&'static str> {
    CITIES
        .iter()
        .find(|(known, _)| *known == slug)
        .map(|(_, label)| *label)
        .ok_or_else(|| GuideError::Config(format!("unknown city: {slug}")))
}

/// Keeps the items located in the city named by `city_param`.
///
/// `None`, an empty parameter and `"all"` keep everything. Items without a
/// location never match a concrete city.
#[must_use]
pub fn filter_by_city<'a, T: Located>(items: &'a [T], city_param: Option<&str>) -> Vec<&'a T> {
    let city = match city_param {
        None | Some("" | "all") => return items.iter().collect(),
        Some(slug) => city_name_from_slug(slug).to_lowercase(),
    };

    items
        .iter()
        .filter(|item| {
            item.location()
                .is_some_and(|location| location.to_lowercase().contains(&city))
        })
        .collect()
}
