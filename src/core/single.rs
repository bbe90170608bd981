//! # Single Resource Refresh
//!
//! View-model for one current resource keyed by a reactive selector (a
//! species, a city, a pair of coordinates), with a favorites collection whose
//! lifetime is independent of the fetches.
//!
//! ## Ordering
//!
//! Every `fetch_current()` issues a fresh [`Ticket`]. Only the newest ticket
//! is ever applied, so when the selector flips A → B before A resolves the
//! view ends on B regardless of which response arrives last.

use std::fmt::Debug;

use async_trait::async_trait;
use log::{debug, info};

use crate::core::favorites::{FavoritesSet, Identified};
use crate::core::fallback::{FallbackPolicy, Presentation, present};
use crate::core::fetch::{FetchError, FetchState, RequestTracker, Ticket};

/// A remote endpoint returning one resource for a selector.
#[async_trait]
pub trait ResourceSource<S, T>: Send + Sync {
    async fn fetch_one(&self, selector: &S) -> Result<T, FetchError>;
}

pub struct SingleResourceRefresh<S, T> {
    selector: S,
    state: FetchState<T>,
    /// Failure reason surfaced next to a placeholder.
    notice: Option<String>,
    favorites: FavoritesSet<T>,
    tracker: RequestTracker,
}

impl<S, T> SingleResourceRefresh<S, T>
where
    S: Clone + Debug,
    T: Identified + Clone,
{
    pub fn new(selector: S) -> Self {
        Self {
            selector,
            state: FetchState::Idle,
            notice: None,
            favorites: FavoritesSet::new(),
            tracker: RequestTracker::new(),
        }
    }

    pub fn selector(&self) -> &S {
        &self.selector
    }

    /// Starts a fetch for the active selector.
    pub fn fetch_current(&mut self) -> Ticket {
        let ticket = self.tracker.issue();
        self.state.begin();
        self.notice = None;
        debug!("Fetch {ticket} started for {:?}", self.selector);
        ticket
    }

    /// Replaces the selector and immediately fetches for it.
    pub fn change_selector(&mut self, selector: S) -> Ticket {
        info!("Selector changed: {:?} -> {:?}", self.selector, selector);
        self.selector = selector;
        self.fetch_current()
    }

    /// Applies a finished request. Superseded tickets are discarded.
    pub fn settle(&mut self, ticket: Ticket, result: Result<T, FetchError>) -> bool {
        self.settle_presented(ticket, result.into())
    }

    /// Applies a finished request through `policy`, which may substitute a
    /// placeholder for a failure.
    pub fn settle_with_fallback(
        &mut self,
        ticket: Ticket,
        result: Result<T, FetchError>,
        policy: &dyn FallbackPolicy<T>,
    ) -> bool {
        self.settle_presented(ticket, present(result, policy))
    }

    pub fn settle_presented(&mut self, ticket: Ticket, presentation: Presentation<T>) -> bool {
        if !self.tracker.is_current(ticket) || !self.state.is_loading() {
            debug!("Discarding superseded result {ticket} (selector now {:?})", self.selector);
            return false;
        }
        match presentation {
            Presentation::Live(item) => {
                self.state = FetchState::Ready(item);
                self.notice = None;
            }
            Presentation::Fallback { placeholder, reason } => {
                info!("Showing placeholder for {:?}: {reason}", self.selector);
                self.state = FetchState::Ready(placeholder);
                self.notice = Some(reason);
            }
            Presentation::Failed(reason) => {
                info!("Fetch {ticket} failed: {reason}");
                self.state = FetchState::Failed(reason);
                self.notice = None;
            }
        }
        true
    }

    /// Fetches from `source` for the active selector and waits for it.
    pub async fn refresh_from(&mut self, source: &dyn ResourceSource<S, T>) -> &FetchState<T> {
        let ticket = self.fetch_current();
        let selector = self.selector.clone();
        let result = source.fetch_one(&selector).await;
        self.settle(ticket, result);
        &self.state
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub fn current(&self) -> Option<&T> {
        self.state.ready()
    }

    /// The reason surfaced with a placeholder, or the failure reason.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref().or_else(|| self.state.failure())
    }

    /// Adds the current item to favorites. Duplicates are ignored.
    pub fn add_to_favorites(&mut self) -> bool {
        match self.state.ready() {
            Some(item) => self.favorites.add(item.clone()),
            None => false,
        }
    }

    pub fn remove_from_favorites(&mut self, id: &T::Id) -> bool {
        self.favorites.remove(id)
    }

    pub fn current_is_favorite(&self) -> bool {
        self.current()
            .is_some_and(|item| self.favorites.contains(&item.id()))
    }

    pub fn favorites(&self) -> &FavoritesSet<T> {
        &self.favorites
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Shot {
        id: String,
        from: &'static str,
    }

    impl Identified for Shot {
        type Id = String;
        fn id(&self) -> String {
            self.id.clone()
        }
    }

    fn shot(id: &str, from: &'static str) -> Shot {
        Shot {
            id: id.to_string(),
            from,
        }
    }

    struct Echo;

    #[async_trait]
    impl ResourceSource<&'static str, Shot> for Echo {
        async fn fetch_one(&self, selector: &&'static str) -> Result<Shot, FetchError> {
            Ok(shot(&format!("{selector}-1"), *selector))
        }
    }

    struct AlwaysDemo;

    impl FallbackPolicy<Shot> for AlwaysDemo {
        fn placeholder(&self, _error: &FetchError) -> Option<Shot> {
            Some(shot("demo", "demo"))
        }
    }

    #[test]
    fn test_later_selector_wins_when_earlier_resolves_last() {
        let mut view = SingleResourceRefresh::new("cat");
        let a = view.change_selector("cat");
        let b = view.change_selector("dog");

        assert!(view.settle(b, Ok(shot("d1", "dog"))));
        assert!(!view.settle(a, Ok(shot("c1", "cat"))));
        assert_eq!(view.current().map(|s| s.from), Some("dog"));
    }

    #[test]
    fn test_later_selector_wins_when_earlier_resolves_first() {
        let mut view = SingleResourceRefresh::new("cat");
        let a = view.change_selector("cat");
        let b = view.change_selector("dog");

        assert!(!view.settle(a, Ok(shot("c1", "cat"))));
        assert!(view.state().is_loading());
        assert!(view.settle(b, Ok(shot("d1", "dog"))));
        assert_eq!(view.current().map(|s| s.from), Some("dog"));
        assert_eq!(*view.selector(), "dog");
    }

    #[test]
    fn test_refresh_replaces_rather_than_merges() {
        let mut view = SingleResourceRefresh::new("cat");
        let t = view.fetch_current();
        view.settle(t, Ok(shot("c1", "cat")));
        let t = view.fetch_current();
        assert!(view.current().is_none());
        view.settle(t, Ok(shot("c2", "cat")));
        assert_eq!(view.current().map(|s| s.id.as_str()), Some("c2"));
    }

    #[test]
    fn test_add_to_favorites_twice_keeps_one() {
        let mut view = SingleResourceRefresh::new("cat");
        let t = view.fetch_current();
        view.settle(t, Ok(shot("c1", "cat")));
        assert!(view.add_to_favorites());
        assert!(!view.add_to_favorites());
        assert_eq!(view.favorites().len(), 1);
        assert!(view.current_is_favorite());
    }

    #[test]
    fn test_add_without_current_is_noop() {
        let mut view: SingleResourceRefresh<&str, Shot> = SingleResourceRefresh::new("cat");
        view.fetch_current();
        assert!(!view.add_to_favorites());
        assert!(view.favorites().is_empty());
    }

    #[test]
    fn test_favorites_survive_refresh_and_failures() {
        let mut view = SingleResourceRefresh::new("cat");
        let t = view.fetch_current();
        view.settle(t, Ok(shot("c1", "cat")));
        view.add_to_favorites();

        let t = view.change_selector("dog");
        view.settle(t, Err(FetchError::Transport("down".to_string())));
        assert_eq!(view.favorites().len(), 1);
        assert!(view.notice().unwrap().contains("down"));

        assert!(!view.remove_from_favorites(&"missing".to_string()));
        assert_eq!(view.favorites().len(), 1);
        assert!(view.remove_from_favorites(&"c1".to_string()));
        assert!(view.favorites().is_empty());
    }

    #[test]
    fn test_fallback_keeps_reason_next_to_placeholder() {
        let mut view = SingleResourceRefresh::new("somewhere");
        let t = view.fetch_current();
        view.settle_with_fallback(t, Err(FetchError::Timeout), &AlwaysDemo);
        assert_eq!(view.current().map(|s| s.id.as_str()), Some("demo"));
        assert!(view.notice().is_some());

        // A fresh fetch clears the notice.
        let t = view.fetch_current();
        assert!(view.notice().is_none());
        view.settle_with_fallback(t, Ok(shot("live", "somewhere")), &AlwaysDemo);
        assert!(view.notice().is_none());
    }

    #[test]
    fn test_refresh_from_source() {
        let mut view = SingleResourceRefresh::new("dog");
        let state = tokio_test::block_on(view.refresh_from(&Echo));
        assert_eq!(state.ready().map(|s| s.id.as_str()), Some("dog-1"));
    }
}
