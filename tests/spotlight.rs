use devconnect_guide::app::{Event, KeyChord, SearchPhase, SpotlightController};
use devconnect_guide::storage::MemorySessionStore;
use devconnect_guide::{Config, Guide};
use devconnect_guide::api::SystemClock;
use std::time::Duration;

fn guide(config: &Config) -> Guide<SystemClock> {
    Guide::assemble(SystemClock, Box::new(MemorySessionStore::default()), config).unwrap()
}

fn type_text(ctl: &mut SpotlightController<SystemClock>, text: &str) {
    for c in text.chars() {
        ctl.dispatch(Event::Char(c)).unwrap();
    }
}

#[tokio::test(start_paused = true)]
async fn only_the_last_keystroke_searches() {
    let guide = guide(&Config::default());
    let mut ctl = guide.spotlight();
    ctl.dispatch(Event::Shortcut(KeyChord::meta('k'))).unwrap();

    type_text(&mut ctl, "rest");
    tokio::time::advance(Duration::from_millis(200)).await;
    type_text(&mut ctl, "aurant");

    ctl.settle().await.unwrap();

    let vm = ctl.viewmodel();
    assert_eq!(ctl.state().phase, SearchPhase::Results);
    assert_eq!(vm.search_bar.query, "restaurant");
    let titles: Vec<_> = vm.rows.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Don Julio", "El Preferido", "Gran Dabbang"]);
    assert_eq!(vm.rows[0].meta, format!("restaurant · {}", ctl.state().results[0].category));
}

#[tokio::test(start_paused = true)]
async fn results_for_a_superseded_query_never_show() {
    let guide = guide(&Config::default());
    let mut ctl = guide.spotlight();
    ctl.dispatch(Event::Open).unwrap();

    ctl.dispatch(Event::SetQuery("palermo".into())).unwrap();
    // Let the debounce fire so the "palermo" search is in flight.
    tokio::time::sleep(Duration::from_millis(310)).await;
    ctl.pump().unwrap();
    assert_eq!(ctl.state().phase, SearchPhase::Loading);

    ctl.dispatch(Event::SetQuery("eth".into())).unwrap();
    ctl.settle().await.unwrap();

    let titles: Vec<_> = ctl.state().results.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["ETHLatam", "Ethereum Hacker House"]);
}

#[tokio::test(start_paused = true)]
async fn closing_mid_search_discards_everything() {
    let guide = guide(&Config::default());
    let mut ctl = guide.spotlight();
    ctl.dispatch(Event::Shortcut(KeyChord::ctrl('K'))).unwrap();
    ctl.dispatch(Event::SetQuery("eth".into())).unwrap();

    ctl.dispatch(Event::Shortcut(KeyChord::ctrl('k'))).unwrap();
    ctl.settle().await.unwrap();

    let vm = ctl.viewmodel();
    assert!(!vm.open);
    assert!(vm.rows.is_empty());
    assert_eq!(ctl.state().phase, SearchPhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn failure_is_distinct_from_no_matches() {
    let failing = guide(&Config {
        simulate_search_error: true,
        ..Config::default()
    });
    let mut ctl = failing.spotlight();
    ctl.dispatch(Event::Open).unwrap();
    ctl.dispatch(Event::SetQuery("eth".into())).unwrap();
    ctl.settle().await.unwrap();

    assert_eq!(ctl.state().phase, SearchPhase::Error);
    let error = ctl.viewmodel().empty_state.unwrap();
    assert!(error.is_error);

    let healthy = guide(&Config::default());
    let mut ctl = healthy.spotlight();
    ctl.dispatch(Event::Open).unwrap();
    ctl.dispatch(Event::SetQuery("zzzz".into())).unwrap();
    ctl.settle().await.unwrap();

    assert_eq!(ctl.state().phase, SearchPhase::Empty);
    let empty = ctl.viewmodel().empty_state.unwrap();
    assert!(!empty.is_error);
    assert_eq!(empty.message, "No results found.");
}

#[tokio::test(start_paused = true)]
async fn selecting_a_result_navigates_to_its_link() {
    let guide = guide(&Config::default());
    let mut ctl = guide.spotlight();
    ctl.dispatch(Event::Open).unwrap();
    ctl.dispatch(Event::SetQuery("palermo".into())).unwrap();
    ctl.settle().await.unwrap();

    ctl.dispatch(Event::KeyUp).unwrap();
    let last = ctl.state().results.last().unwrap().link.clone();
    assert!(ctl.viewmodel().rows.last().unwrap().is_selected);

    ctl.dispatch(Event::SelectResult).unwrap();
    assert_eq!(ctl.navigations(), &[last][..]);
    assert!(!ctl.state().overlay_open);
}
