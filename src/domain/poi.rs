//! Points of interest shown on the city map.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoiCategory {
    Event,
    Accommodation,
    Restaurant,
    Activity,
    #[serde(rename = "hackerhome")]
    HackerHome,
}

impl PoiCategory {
    /// Parses a map tab value. `"all"` and unknown values yield `None`.
    #[must_use]
    pub fn from_tab(tab: &str) -> Option<Self> {
        match tab {
            "event" => Some(Self::Event),
            "accommodation" => Some(Self::Accommodation),
            "restaurant" => Some(Self::Restaurant),
            "activity" => Some(Self::Activity),
            "hackerhome" => Some(Self::HackerHome),
            _ => None,
        }
    }
}

/// Latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng(pub f64, pub f64);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointOfInterest {
    pub id: u32,
    pub name: String,
    pub category: PoiCategory,
    pub position: LatLng,
    pub address: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
