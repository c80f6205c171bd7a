use chrono::NaiveDate;
use devconnect_guide::api::{RecordingClock, TripApi, TRIP_PLAN_DELAY};
use devconnect_guide::trip::EventCalendar;

#[tokio::test]
async fn trip_plan_is_stable_across_calls() {
    let clock = RecordingClock::default();
    let api = TripApi::new(clock.clone());

    let first = api.get_trip_plan().await.unwrap();
    let second = api.get_trip_plan().await.unwrap();
    assert_eq!(first, second);

    assert_eq!(first.start_date, NaiveDate::from_ymd_opt(2025, 11, 15).unwrap());
    assert_eq!(first.end_date, NaiveDate::from_ymd_opt(2025, 11, 23).unwrap());
    assert_eq!(
        (first.events.len(), first.restaurants.len(), first.friends.len()),
        (4, 3, 4)
    );
    assert_eq!(clock.sleeps(), vec![TRIP_PLAN_DELAY, TRIP_PLAN_DELAY]);
}

#[tokio::test]
async fn every_friend_reference_resolves_to_an_event() {
    let plan = TripApi::new(RecordingClock::default()).get_trip_plan().await.unwrap();

    for friend in &plan.friends {
        assert_eq!(
            plan.events_for_friend(&friend.id).len(),
            friend.attending_event_ids.len(),
            "{} has a dangling event reference",
            friend.name
        );
    }

    let calendar = EventCalendar::new(&plan.events);
    let bucketed: usize = calendar.iter().map(|(_, events)| events.len()).sum();
    assert_eq!(bucketed, plan.events.len());
}
