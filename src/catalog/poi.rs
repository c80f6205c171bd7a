//! Map points of interest around Buenos Aires.

use crate::domain::{LatLng, PoiCategory, PointOfInterest};

/// Initial map center (Obelisco area).
pub const DEFAULT_CENTER: LatLng = LatLng(-34.6037, -58.3816);

pub const DEFAULT_ZOOM: u8 = 13;

fn poi(id: u32, name: &str, category: PoiCategory, position: LatLng, address: &str, description: &str, image: &str) -> PointOfInterest {
    PointOfInterest {
        id,
        name: name.to_string(),
        category,
        position,
        address: address.to_string(),
        description: description.to_string(),
        image_url: Some(format!("https://images.unsplash.com/{image}?ixlib=rb-4.0.3")),
    }
}

#[must_use]
pub fn points_of_interest() -> Vec<PointOfInterest> {
    vec![
        poi(1, "Devconnect Buenos Aires", PoiCategory::Event, LatLng(-34.6037, -58.3816),
            "La Rural, Buenos Aires", "The main Devconnect event in Buenos Aires", "photo-1576437125697-e7a266bd0doq"),
        poi(2, "ETHLatam", PoiCategory::Event, LatLng(-34.6083, -58.3712),
            "Centro Cultural Konex, Buenos Aires", "Latin America's largest Ethereum community event", "photo-1591116681b-8f15b8c8ba11"),
        poi(3, "Casa Ethereum", PoiCategory::HackerHome, LatLng(-34.5890, -58.4245),
            "Palermo, Buenos Aires", "A community hacker house for Ethereum developers", "photo-1522071820081-009f0129c71c"),
        poi(4, "Alvear Palace Hotel", PoiCategory::Accommodation, LatLng(-34.5871, -58.3820),
            "Av. Alvear 1891, Buenos Aires", "A luxury hotel in the heart of Recoleta", "photo-1566073771259-6a8506099945"),
        poi(5, "Don Julio", PoiCategory::Restaurant, LatLng(-34.5957, -58.4279),
            "Guatemala 4699, Buenos Aires", "Famous steakhouse with traditional Argentine cuisine", "photo-1466978913421-dad2ebd01d17"),
        poi(6, "La Bomba de Tiempo", PoiCategory::Activity, LatLng(-34.6060, -58.4110),
            "Ciudad Cultural Konex, Buenos Aires", "Popular drum performance that happens every Monday", "photo-1526142684086-7ebd69df27a5"),
    ]
}

/// Points shown under a map tab; `None` is the "All" tab.
#[must_use]
pub fn points_in_category(category: Option<PoiCategory>) -> Vec<PointOfInterest> {
    points_of_interest()
        .into_iter()
        .filter(|p| category.map_or(true, |c| p.category == c))
        .collect()
}
