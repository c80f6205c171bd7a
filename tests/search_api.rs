use devconnect_guide::api::{RecordingClock, SearchApi, SearchOptions, ToastLog, SEARCH_DELAY};
use devconnect_guide::catalog::all_items;
use devconnect_guide::domain::SearchItem;
use devconnect_guide::GuideError;
use std::sync::Arc;

fn api() -> (SearchApi<RecordingClock>, RecordingClock, Arc<ToastLog>) {
    let clock = RecordingClock::default();
    let toasts = Arc::new(ToastLog::new());
    (SearchApi::new(clock.clone(), toasts.clone()), clock, toasts)
}

fn titles(items: &[SearchItem]) -> Vec<&str> {
    items.iter().map(|i| i.title.as_str()).collect()
}

#[tokio::test]
async fn eth_returns_exact_subset_in_catalog_order() {
    let (api, clock, _) = api();

    let results = api.search("  EtH ", SearchOptions::default()).await.unwrap();

    assert_eq!(titles(&results), vec!["ETHLatam", "Ethereum Hacker House"]);
    assert_eq!(clock.sleeps(), vec![SEARCH_DELAY]);
}

#[tokio::test]
async fn location_and_kind_fields_are_searched() {
    let (api, _, _) = api();

    let palermo = api.search("palermo", SearchOptions::default()).await.unwrap();
    assert_eq!(
        titles(&palermo),
        vec!["Web3 Hackers Meetup", "Palermo Soho Loft", "Don Julio", "El Preferido", "Gran Dabbang"]
    );

    let restaurants = api.search("restaurant", SearchOptions::default()).await.unwrap();
    assert_eq!(titles(&restaurants), vec!["Don Julio", "El Preferido", "Gran Dabbang"]);
}

#[tokio::test]
async fn every_result_matches_and_every_match_is_returned() {
    let (api, _, _) = api();

    for query in ["eth", "hotel", "tour", "buenos aires", "web3"] {
        let results = api.search(query, SearchOptions::default()).await.unwrap();
        let expected: Vec<_> = all_items()
            .iter()
            .filter(|item| devconnect_guide::search::matches(item, query))
            .cloned()
            .collect();
        assert_eq!(results, expected, "query {query:?}");
    }
}

#[tokio::test]
async fn short_queries_skip_the_delay() {
    let (api, clock, _) = api();

    for query in ["", " ", "e", " x "] {
        assert!(api.search(query, SearchOptions::default()).await.unwrap().is_empty());
    }
    assert!(clock.sleeps().is_empty());
}

#[tokio::test]
async fn unknown_ids_signal_item_not_found() {
    let (api, _, toasts) = api();

    for id in [0, 4, 99] {
        assert!(matches!(api.add_to_list(id).await, Err(GuideError::ItemNotFound { id: got }) if got == id));
    }
    assert!(api.add_to_favorites(2).await.is_ok());
    assert!(api.subscribe_to_item(3).await.is_ok());

    let titles: Vec<_> = toasts.entries().into_iter().map(|n| n.title).collect();
    assert_eq!(
        titles,
        vec![
            "Item not found",
            "Item not found",
            "Item not found",
            "Added ETHLatam to favorites",
            "Subscribed to updates for Web3 Hackers Meetup",
        ]
    );
}
