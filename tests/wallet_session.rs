use devconnect_guide::api::{MockWalletApi, Severity, SystemClock, ToastLog};
use devconnect_guide::catalog::MOCK_WALLET_ADDRESS;
use devconnect_guide::storage::{JsonSessionStore, MemorySessionStore, SessionRecord, SessionStore};
use devconnect_guide::wallet::{ConnectOutcome, DisconnectOutcome, WalletSession};
use std::sync::Arc;

fn session_with(store: Box<dyn SessionStore>) -> (WalletSession<SystemClock>, Arc<ToastLog>) {
    let toasts = Arc::new(ToastLog::new());
    let session = WalletSession::restore(MockWalletApi::new(SystemClock), store, toasts.clone()).unwrap();
    (session, toasts)
}

#[tokio::test(start_paused = true)]
async fn concurrent_connects_produce_one_session() {
    let (session, toasts) = session_with(Box::new(MemorySessionStore::default()));

    let (first, second) = tokio::join!(session.connect(), session.connect());
    let outcomes = [first.unwrap(), second.unwrap()];

    assert!(outcomes.contains(&ConnectOutcome::Connected));
    assert!(outcomes.contains(&ConnectOutcome::InProgress));

    let state = session.state();
    assert!(state.connected);
    assert!(!state.connecting);
    assert_eq!(state.transactions.len(), 3);

    let toasts = toasts.entries();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].title, "Wallet Connected");
}

#[tokio::test(start_paused = true)]
async fn disconnect_twice_is_idempotent() {
    let (session, toasts) = session_with(Box::new(MemorySessionStore::with_record(
        SessionRecord::connected(MOCK_WALLET_ADDRESS),
    )));
    assert!(session.is_connected());

    assert_eq!(session.disconnect().await.unwrap(), DisconnectOutcome::Disconnected);
    assert_eq!(session.disconnect().await.unwrap(), DisconnectOutcome::AlreadyDisconnected);

    let state = session.state();
    assert!(!state.connected);
    assert!(state.address.is_none());
    assert!(state.transactions.is_empty());

    let toasts = toasts.entries();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].title, "Wallet Disconnected");
    assert_eq!(toasts[0].severity, Severity::Success);
}

#[tokio::test(start_paused = true)]
async fn concurrent_disconnects_toast_once() {
    let (session, toasts) = session_with(Box::new(MemorySessionStore::with_record(
        SessionRecord::connected(MOCK_WALLET_ADDRESS),
    )));

    let (first, second) = tokio::join!(session.disconnect(), session.disconnect());
    let outcomes = [first.unwrap(), second.unwrap()];

    assert!(outcomes.contains(&DisconnectOutcome::Disconnected));
    assert!(outcomes.contains(&DisconnectOutcome::InProgress));

    let state = session.state();
    assert!(!state.connected);
    assert!(!state.disconnecting);
    assert!(!session.provider().is_connected());

    let titles: Vec<_> = toasts.entries().into_iter().map(|t| t.title).collect();
    assert_eq!(titles, vec!["Wallet Disconnected"]);
}

#[tokio::test(start_paused = true)]
async fn connected_flag_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    {
        let (session, _) = session_with(Box::new(JsonSessionStore::open(path.clone()).unwrap()));
        assert!(!session.is_connected());
        session.connect().await.unwrap();
    }

    let (restored, toasts) = session_with(Box::new(JsonSessionStore::open(path.clone()).unwrap()));
    let state = restored.state();
    assert!(state.connected);
    assert_eq!(state.address.as_deref(), Some(MOCK_WALLET_ADDRESS));
    assert_eq!(state.short_address().as_deref(), Some("0x71C7...976F"));
    assert!(restored.provider().is_connected());
    assert!(toasts.entries().is_empty(), "restoring does not toast");

    restored.disconnect().await.unwrap();
    let (after, _) = session_with(Box::new(JsonSessionStore::open(path).unwrap()));
    assert!(!after.is_connected());
}
