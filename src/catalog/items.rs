//! Sample search catalog: three events, accommodations, restaurants and activities.

use crate::domain::{ItemKind, SearchItem};
use std::sync::OnceLock;

fn item(
    id: u32,
    title: &str,
    description: &str,
    category: &str,
    kind: ItemKind,
    location: &str,
    image_url: &str,
) -> SearchItem {
    let link = match kind {
        ItemKind::Event => "/events",
        ItemKind::Accommodation => "/accommodations",
        ItemKind::Restaurant => "/restaurants",
        ItemKind::Activity => "/activities",
    };
    SearchItem {
        id,
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        kind,
        link: link.to_string(),
        image_url: image_url.to_string(),
        location: Some(location.to_string()),
    }
}

fn build() -> Vec<SearchItem> {
    use ItemKind::{Accommodation, Activity, Event, Restaurant};

    vec![
        item(1, "Devconnect Buenos Aires", "The main Devconnect event", "conference", Event,
            "La Rural, Buenos Aires", "https://images.unsplash.com/photo-1540575467063-178a50c2df87"),
        item(2, "ETHLatam", "Latin America's largest Ethereum community event", "conference", Event,
            "Centro Cultural Konex, Buenos Aires", "https://images.unsplash.com/photo-1591116681b-8f15b8c8ba11"),
        item(3, "Web3 Hackers Meetup", "An informal gathering for web3 developers", "social", Event,
            "Area 3, Palermo, Buenos Aires", "https://images.unsplash.com/photo-1540304453527-62f979142a17"),
        item(1, "Alvear Palace Hotel", "Luxury hotel in Recoleta", "Luxury", Accommodation,
            "Recoleta, Buenos Aires", "https://images.unsplash.com/photo-1566073771259-6a8506099945"),
        item(2, "Palermo Soho Loft", "Modern loft apartment", "Apartment", Accommodation,
            "Palermo, Buenos Aires", "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267"),
        item(3, "Ethereum Hacker House", "Collaborative living space for Web3 developers", "Hacker House", Accommodation,
            "Villa Crespo, Buenos Aires", "https://images.unsplash.com/photo-1600607687920-4e2a09cf159d"),
        item(1, "Don Julio", "Famous steakhouse", "Steakhouse", Restaurant,
            "Palermo, Buenos Aires", "https://images.unsplash.com/photo-1466978913421-dad2ebd01d17"),
        item(2, "El Preferido", "Historic local restaurant", "Argentine", Restaurant,
            "Palermo, Buenos Aires", "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4"),
        item(3, "Gran Dabbang", "Fusion restaurant with Southeast Asian flavors", "Fusion", Restaurant,
            "Palermo, Buenos Aires", "https://images.unsplash.com/photo-1414235077428-338989a2e8c0"),
        item(1, "La Bomba de Tiempo", "Famous drum performance", "Cultural", Activity,
            "Ciudad Cultural Konex, Buenos Aires", "https://images.unsplash.com/photo-1526142684086-7ebd69df27a5"),
        item(2, "San Telmo Sunday Market", "Historic market", "Shopping", Activity,
            "San Telmo, Buenos Aires", "https://images.unsplash.com/photo-1534274867514-d5b47ef89ed7"),
        item(3, "Tango Show", "Traditional Argentine tango performance", "Entertainment", Activity,
            "Puerto Madero, Buenos Aires", "https://images.unsplash.com/photo-1516307365426-bea591f05011"),
    ]
}

/// All catalog items in list order: events, accommodations, restaurants, activities.
pub fn all_items() -> &'static [SearchItem] {
    static ITEMS: OnceLock<Vec<SearchItem>> = OnceLock::new();
    ITEMS.get_or_init(build)
}

/// First item in list order carrying `id`.
///
/// Ids restart at 1 for every kind, so this resolves ids 1-3 to events.
#[must_use]
pub fn find_item(items: &[SearchItem], id: u32) -> Option<&SearchItem> {
    items.iter().find(|item| item.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_three_items_per_kind() {
        let items = all_items();
        assert_eq!(items.len(), 12);
        for kind in [ItemKind::Event, ItemKind::Accommodation, ItemKind::Restaurant, ItemKind::Activity] {
            assert_eq!(items.iter().filter(|i| i.kind == kind).count(), 3);
        }
    }

    #[test]
    fn lookup_prefers_first_item_with_id() {
        let found = find_item(all_items(), 2).unwrap();
        assert_eq!(found.title, "ETHLatam");
        assert!(find_item(all_items(), 4).is_none());
    }
}
