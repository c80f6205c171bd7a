//! Sample trip plan for a Devconnect week in Buenos Aires.

use crate::domain::{EventKind, Friend, Restaurant, TripEvent, TripPlan};
use chrono::NaiveDate;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, d).unwrap_or(NaiveDate::MIN)
}

fn event(id: &str, title: &str, date: u32, time: &str, location: &str, kind: EventKind, image: &str) -> TripEvent {
    TripEvent {
        id: id.to_string(),
        title: title.to_string(),
        date: day(date),
        time: time.to_string(),
        location: location.to_string(),
        kind,
        image_url: Some(image.to_string()),
    }
}

fn restaurant(id: &str, name: &str, cuisine: &str, location: &str, date: u32, time: &str, image: &str) -> Restaurant {
    Restaurant {
        id: id.to_string(),
        name: name.to_string(),
        cuisine: cuisine.to_string(),
        location: location.to_string(),
        date: day(date),
        time: time.to_string(),
        image_url: Some(image.to_string()),
    }
}

fn friend(id: &str, name: &str, wallet: &str, avatar: u8, events: &[&str]) -> Friend {
    Friend {
        id: id.to_string(),
        name: name.to_string(),
        wallet: wallet.to_string(),
        avatar_url: format!("https://i.pravatar.cc/150?img={avatar}"),
        attending_event_ids: events.iter().map(|e| (*e).to_string()).collect(),
    }
}

/// Builds the fixture plan: Nov 15-23 2025, 4 events, 3 restaurants, 4 friends.
#[must_use]
pub fn sample_trip_plan() -> TripPlan {
    TripPlan {
        start_date: day(15),
        end_date: day(23),
        events: vec![
            event("e1", "Ethereum World's Fair", 17, "10:00 - 18:00", "La Rural", EventKind::Conference,
                "https://images.unsplash.com/photo-1540575467063-178a50c2df87"),
            event("e2", "ETH Day Kickoff", 17, "09:00 - 12:00", "La Rural", EventKind::Conference,
                "https://images.unsplash.com/photo-1591116681b-8f15b8c8ba11"),
            event("e3", "Devconnect Official Event", 20, "10:00 - 16:00", "La Rural", EventKind::Conference,
                "https://images.unsplash.com/photo-1540304453527-62f979142a17"),
            event("e4", "Web3 Hackers Meetup", 19, "18:00 - 21:00", "Area 3, Palermo", EventKind::Social,
                "https://images.unsplash.com/photo-1517048676732-d65bc937f952"),
        ],
        restaurants: vec![
            restaurant("r1", "Don Julio", "Steakhouse", "Palermo", 17, "20:00",
                "https://images.unsplash.com/photo-1466978913421-dad2ebd01d17"),
            restaurant("r2", "El Preferido", "Argentine", "Palermo", 19, "21:00",
                "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4"),
            restaurant("r3", "Web3 Café", "Café", "Recoleta", 20, "10:00",
                "https://images.unsplash.com/photo-1559925393-8be0ec4767c8"),
        ],
        friends: vec![
            friend("f1", "Alex Rodriguez", "0x1234...5678", 1, &["e1", "e3"]),
            friend("f2", "Morgan Lee", "0x8765...4321", 2, &["e1", "e2", "e4"]),
            friend("f3", "Taylor Chen", "0x9876...1234", 3, &["e3", "e4"]),
            friend("f4", "Jordan Kim", "0x5432...9876", 4, &["e1", "e4"]),
        ],
    }
}
