//! Trip-planning views over the trip plan.
//!
//! - [`calendar`]: Events bucketed by day
//! - [`countdown`]: Time left until the conference opens

pub mod calendar;
pub mod countdown;

pub use calendar::EventCalendar;
pub use countdown::{devconnect_start, Countdown};

#[cfg(test)]
mod tests {
    use crate::catalog::sample_trip_plan;

    #[test]
    fn friends_and_events_resolve_both_ways() {
        let plan = sample_trip_plan();

        let names: Vec<_> = plan.friends_attending("e4").iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Morgan Lee", "Taylor Chen", "Jordan Kim"]);

        let events: Vec<_> = plan.events_for_friend("f1").iter().map(|e| e.id.as_str()).collect();
        assert_eq!(events, vec!["e1", "e3"]);
        assert!(plan.events_for_friend("nobody").is_empty());

        assert_eq!(plan.duration_days(), 9);
    }
}
