//! Trip planning model.
//!
//! A [`TripPlan`] covers the dates of a visit together with the events,
//! restaurant bookings and friends attached to it. Friends reference events by
//! id, which gives a many-to-many relation between the two.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of scheduled trip event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Conference,
    Workshop,
    Hackathon,
    Social,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripEvent {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    /// Free-form time window, e.g. `"10:00 - 18:00"`.
    pub time: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A restaurant reservation on the trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub location: String,
    pub date: NaiveDate,
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Friend {
    pub id: String,
    pub name: String,
    /// Abbreviated wallet address.
    pub wallet: String,
    pub avatar_url: String,
    /// Ids of the [`TripEvent`]s this friend attends.
    #[serde(rename = "events")]
    pub attending_event_ids: Vec<String>,
}

impl Friend {
    #[must_use]
    pub fn attends(&self, event_id: &str) -> bool {
        self.attending_event_ids.iter().any(|id| id == event_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPlan {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub events: Vec<TripEvent>,
    pub restaurants: Vec<Restaurant>,
    pub friends: Vec<Friend>,
}

impl TripPlan {
    /// Friends attending the given event, in plan order.
    #[must_use]
    pub fn friends_attending(&self, event_id: &str) -> Vec<&Friend> {
        self.friends.iter().filter(|f| f.attends(event_id)).collect()
    }

    /// Events a friend attends, in plan order.
    ///
    /// Unknown friend ids and dangling event references yield nothing.
    #[must_use]
    pub fn events_for_friend(&self, friend_id: &str) -> Vec<&TripEvent> {
        let Some(friend) = self.friends.iter().find(|f| f.id == friend_id) else {
            return vec![];
        };
        self.events
            .iter()
            .filter(|event| friend.attends(&event.id))
            .collect()
    }

    /// Number of days covered by the trip, both ends included.
    #[must_use]
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days().max(0) + 1
    }
}
