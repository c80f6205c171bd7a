//! Date-bucketed view of trip events for the calendar.

use crate::domain::TripEvent;
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

/// Trip events grouped by calendar day.
///
/// Within a day, events keep the order they had in the source list.
#[derive(Debug, Clone, Default)]
pub struct EventCalendar {
    by_day: BTreeMap<NaiveDate, Vec<TripEvent>>,
}

impl EventCalendar {
    #[must_use]
    pub fn new(events: &[TripEvent]) -> Self {
        let mut by_day: BTreeMap<NaiveDate, Vec<TripEvent>> = BTreeMap::new();
        for event in events {
            by_day.entry(event.date).or_default().push(event.clone());
        }
        tracing::trace!(events = events.len(), days = by_day.len(), "calendar built");
        Self { by_day }
    }

    /// Events scheduled on `day`; empty if there are none.
    #[must_use]
    pub fn events_on(&self, day: NaiveDate) -> &[TripEvent] {
        self.by_day.get(&day).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn has_events(&self, day: NaiveDate) -> bool {
        self.by_day.contains_key(&day)
    }

    /// Days of `month` that carry at least one event, ascending.
    #[must_use]
    pub fn days_with_events(&self, year: i32, month: u32) -> Vec<u32> {
        self.by_day
            .keys()
            .filter(|day| day.year() == year && day.month() == month)
            .map(Datelike::day)
            .collect()
    }

    /// Iterates over `(day, events)` pairs in date order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &[TripEvent])> {
        self.by_day.iter().map(|(day, events)| (*day, events.as_slice()))
    }
}
