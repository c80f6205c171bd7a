//! Searchable catalog items.
//!
//! A [`SearchItem`] is one entry of the city guide: an event, a place to stay,
//! a restaurant or an activity. Items are loaded once from the static catalog
//! and never mutated.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Event,
    Accommodation,
    Restaurant,
    Activity,
}

impl ItemKind {
    /// Lower-case name, as matched by search and shown in result meta lines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Event => "event",
            Self::Accommodation => "accommodation",
            Self::Restaurant => "restaurant",
            Self::Activity => "activity",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One searchable entry of the guide.
///
/// Ids are only unique within a kind; the catalog numbers every kind from 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItem {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    /// Route of the listing page for this item.
    pub link: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_as_type_field() {
        let item = SearchItem {
            id: 7,
            title: "Tango Show".to_string(),
            description: "Traditional tango".to_string(),
            category: "Entertainment".to_string(),
            kind: ItemKind::Activity,
            link: "/activities".to_string(),
            image_url: "https://example.org/tango.jpg".to_string(),
            location: None,
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "activity");
        assert_eq!(json["imageUrl"], "https://example.org/tango.jpg");
        assert!(json.get("location").is_none());
    }
}
