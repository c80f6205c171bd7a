//! Async driver for the spotlight state machine.
//!
//! [`handle_event`] is synchronous and side-effect free. The controller owns
//! an [`AppState`], runs every returned [`Action`] on a tokio task and routes
//! the outcome back through an unbounded `mpsc` channel as a new [`Event`].
//!
//! ```text
//! dispatch(Event) ─▶ handle_event ─▶ Actions ─▶ spawned tasks
//!        ▲                                          │
//!        └──────── pump()/next() ◀── mpsc ◀─────────┘
//! ```
//!
//! Debounce timers are never cancelled. A timer armed for an old generation
//! still fires, and `handle_event` drops it as stale.

use super::handler::{handle_event, Event, ItemAction};
use super::{Action, AppState};
use crate::api::{Clock, SearchApi, SearchOptions};
use crate::domain::error::Result;
use crate::ui::viewmodel::SpotlightViewModel;
use std::sync::Arc;
use tokio::sync::mpsc;

pub struct SpotlightController<C> {
    state: AppState,
    api: Arc<SearchApi<C>>,
    clock: C,
    options: SearchOptions,
    tx: mpsc::UnboundedSender<Event>,
    rx: mpsc::UnboundedReceiver<Event>,
    in_flight: usize,
    navigations: Vec<String>,
}

impl<C> SpotlightController<C>
where
    C: Clock + Clone + 'static,
{
    /// Creates a controller with a closed overlay.
    ///
    /// `clock` drives the debounce timers; the API keeps its own clock for
    /// simulated latency.
    pub fn new(api: Arc<SearchApi<C>>, clock: C) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(),
            api,
            clock,
            options: SearchOptions::default(),
            tx,
            rx,
            in_flight: 0,
            navigations: Vec::new(),
        }
    }

    /// Options passed to every search, e.g. to simulate backend failures.
    #[must_use]
    pub fn with_search_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub fn viewmodel(&self) -> SpotlightViewModel {
        self.state.compute_viewmodel()
    }

    /// Links opened via [`Action::Navigate`], oldest first.
    #[must_use]
    pub fn navigations(&self) -> &[String] {
        &self.navigations
    }

    /// Number of timers and API calls not yet reported back.
    #[must_use]
    pub const fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Feeds one event through the state machine and starts its actions.
    ///
    /// Must be called from within a tokio runtime. Returns whether the view
    /// should be re-rendered.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`handle_event`].
    pub fn dispatch(&mut self, event: Event) -> Result<bool> {
        let (rerender, actions) = handle_event(&mut self.state, &event)?;
        for action in actions {
            self.execute(action);
        }
        Ok(rerender)
    }

    /// Processes every completion that is already waiting, without blocking.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`handle_event`].
    pub fn pump(&mut self) -> Result<bool> {
        let mut rerender = false;
        while let Ok(event) = self.rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            rerender |= self.dispatch(event)?;
        }
        Ok(rerender)
    }

    /// Waits for the next completion and processes it.
    ///
    /// Returns `None` when nothing is in flight.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`handle_event`].
    pub async fn next(&mut self) -> Result<Option<bool>> {
        if self.in_flight == 0 {
            return Ok(None);
        }
        let Some(event) = self.rx.recv().await else {
            return Ok(None);
        };
        self.in_flight -= 1;
        self.dispatch(event).map(Some)
    }

    /// Processes completions until no timer or API call is outstanding.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`handle_event`].
    pub async fn settle(&mut self) -> Result<()> {
        while self.next().await?.is_some() {}
        Ok(())
    }

    fn execute(&mut self, action: Action) {
        tracing::trace!(action = ?action, "executing action");

        match action {
            Action::ArmDebounce { generation, delay } => {
                let clock = self.clock.clone();
                self.spawn(async move {
                    clock.sleep(delay).await;
                    Event::DebounceElapsed { generation }
                });
            }
            Action::Search { generation, query } => {
                let api = Arc::clone(&self.api);
                let options = self.options;
                self.spawn(async move {
                    match api.search(&query, options).await {
                        Ok(results) => Event::SearchCompleted { generation, results },
                        Err(e) => Event::SearchFailed {
                            generation,
                            message: e.to_string(),
                        },
                    }
                });
            }
            Action::Navigate { link } => {
                tracing::info!(link = %link, "navigating");
                self.navigations.push(link);
            }
            Action::AddToList { id } => {
                let api = Arc::clone(&self.api);
                self.spawn(async move {
                    let ok = api.add_to_list(id).await.is_ok();
                    Event::ItemActionFinished { action: ItemAction::AddToList, id, ok }
                });
            }
            Action::AddToFavorites { id } => {
                let api = Arc::clone(&self.api);
                self.spawn(async move {
                    let ok = api.add_to_favorites(id).await.is_ok();
                    Event::ItemActionFinished { action: ItemAction::AddToFavorites, id, ok }
                });
            }
            Action::SubscribeToItem { id } => {
                let api = Arc::clone(&self.api);
                self.spawn(async move {
                    let ok = api.subscribe_to_item(id).await.is_ok();
                    Event::ItemActionFinished { action: ItemAction::Subscribe, id, ok }
                });
            }
        }
    }

    fn spawn<F>(&mut self, task: F)
    where
        F: std::future::Future<Output = Event> + Send + 'static,
    {
        let tx = self.tx.clone();
        self.in_flight += 1;
        tokio::spawn(async move {
            let event = task.await;
            if tx.send(event).is_err() {
                tracing::trace!("controller dropped before task finished");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{SystemClock, ToastLog};
    use crate::app::{KeyChord, SearchPhase};

    fn controller() -> (SpotlightController<SystemClock>, Arc<ToastLog>) {
        let toasts = Arc::new(ToastLog::new());
        let api = Arc::new(SearchApi::new(SystemClock, toasts.clone()));
        (SpotlightController::new(api, SystemClock), toasts)
    }

    #[tokio::test(start_paused = true)]
    async fn fast_typing_issues_one_search() {
        let (mut ctl, _) = controller();
        ctl.dispatch(Event::Shortcut(KeyChord::ctrl('k'))).unwrap();
        for c in "palermo".chars() {
            ctl.dispatch(Event::Char(c)).unwrap();
        }
        // 6 debounce timers armed ("p" alone is too short)
        assert_eq!(ctl.in_flight(), 6);

        ctl.settle().await.unwrap();

        assert_eq!(ctl.state().phase, SearchPhase::Results);
        assert_eq!(ctl.state().results.len(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn simulated_failure_surfaces_error() {
        let (ctl, _) = controller();
        let mut ctl = ctl.with_search_options(SearchOptions {
            simulate_error: true,
            ..SearchOptions::default()
        });
        ctl.dispatch(Event::Open).unwrap();
        ctl.dispatch(Event::SetQuery("eth".into())).unwrap();
        ctl.settle().await.unwrap();

        assert_eq!(ctl.state().phase, SearchPhase::Error);
        assert!(ctl.viewmodel().empty_state.unwrap().is_error);
    }

    #[tokio::test(start_paused = true)]
    async fn item_action_notifies_once_settled() {
        let (mut ctl, toasts) = controller();
        ctl.dispatch(Event::Open).unwrap();
        ctl.dispatch(Event::SetQuery("restaurant".into())).unwrap();
        ctl.settle().await.unwrap();

        ctl.dispatch(Event::AddSelectedToFavorites).unwrap();
        ctl.settle().await.unwrap();

        let titles: Vec<_> = toasts.entries().into_iter().map(|n| n.title).collect();
        assert_eq!(titles.len(), 1);
        assert!(titles[0].ends_with("to favorites"));
    }
}
