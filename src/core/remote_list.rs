//! # Remote List View
//!
//! View-model for a collection fetched from a remote endpoint: holds the
//! fetch state, a live search term, and derives the visible subsequence.
//!
//! The view never performs I/O itself. `load()` / `retry()` hand out a
//! [`Ticket`]; whoever runs the request reports back with
//! [`RemoteListView::settle`]. [`RemoteListView::load_from`] wires the two
//! together for callers that can simply await.

use async_trait::async_trait;
use log::{debug, info};

use crate::core::fetch::{FetchError, FetchState, RequestTracker, Ticket};

/// An item that can be matched against a search term.
pub trait Searchable {
    /// The fields a search term is matched against.
    fn search_fields(&self) -> Vec<&str>;
}

/// A remote endpoint returning an ordered collection.
#[async_trait]
pub trait ListSource<T>: Send + Sync {
    async fn fetch_list(&self) -> Result<Vec<T>, FetchError>;
}

/// True if any searchable field contains `needle` (already lowercased).
fn matches_lowered<T: Searchable>(item: &T, needle: &str) -> bool {
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Returns the subsequence of `items` matching `term`, case-insensitively,
/// in original order. An empty term matches everything.
pub fn filter_items<'a, T: Searchable>(items: &'a [T], term: &str) -> Vec<&'a T> {
    if term.is_empty() {
        return items.iter().collect();
    }
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| matches_lowered(*item, &needle))
        .collect()
}

pub struct RemoteListView<T> {
    state: FetchState<Vec<T>>,
    filter: String,
    tracker: RequestTracker,
}

impl<T> Default for RemoteListView<T> {
    fn default() -> Self {
        Self {
            state: FetchState::Idle,
            filter: String::new(),
            tracker: RequestTracker::new(),
        }
    }
}

impl<T: Searchable> RemoteListView<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new load. The previous state is dropped immediately.
    pub fn load(&mut self) -> Ticket {
        let ticket = self.tracker.issue();
        self.state.begin();
        debug!("List load started {ticket}");
        ticket
    }

    /// Re-runs the load. Safe to call any number of times: only the newest
    /// ticket will ever be applied.
    pub fn retry(&mut self) -> Ticket {
        info!("List retry requested (was {})", self.state.label());
        self.load()
    }

    /// Applies the outcome of the request identified by `ticket`.
    ///
    /// Returns `false` (and changes nothing) when the ticket was superseded.
    pub fn settle(&mut self, ticket: Ticket, result: Result<Vec<T>, FetchError>) -> bool {
        if !self.tracker.is_current(ticket) || !self.state.is_loading() {
            debug!("Discarding superseded list result {ticket}");
            return false;
        }
        match &result {
            Ok(items) => debug!("List {ticket} ready with {} items", items.len()),
            Err(e) => info!("List {ticket} failed: {e}"),
        }
        self.state.resolve(result);
        true
    }

    /// Loads from `source` and waits for the outcome.
    pub async fn load_from(&mut self, source: &dyn ListSource<T>) -> &FetchState<Vec<T>> {
        let ticket = self.load();
        let result = source.fetch_list().await;
        self.settle(ticket, result);
        &self.state
    }

    /// Updates the live search term. Never triggers a fetch.
    pub fn set_filter(&mut self, term: impl Into<String>) {
        self.filter = term.into();
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn state(&self) -> &FetchState<Vec<T>> {
        &self.state
    }

    /// The full list, or an empty slice when not `Ready`.
    pub fn items(&self) -> &[T] {
        self.state.ready().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn visible(&self) -> Vec<&T> {
        filter_items(self.items(), &self.filter)
    }

    pub fn total(&self) -> usize {
        self.items().len()
    }

    /// True when a non-empty search term hides every loaded item.
    pub fn shows_no_results(&self) -> bool {
        self.state.ready().is_some() && !self.filter.is_empty() && self.visible().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u32,
        name: &'static str,
        note: Option<&'static str>,
    }

    impl Searchable for Item {
        fn search_fields(&self) -> Vec<&str> {
            let mut fields = vec![self.name];
            fields.extend(self.note);
            fields
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item { id: 1, name: "Alpha", note: Some("first letter") },
            Item { id: 2, name: "beta", note: None },
            Item { id: 3, name: "Gamma", note: Some("ALPHA particle") },
            Item { id: 4, name: "delta", note: Some("river mouth") },
        ]
    }

    struct StaticSource(Result<Vec<Item>, FetchError>);

    #[async_trait]
    impl ListSource<Item> for StaticSource {
        async fn fetch_list(&self) -> Result<Vec<Item>, FetchError> {
            self.0.clone()
        }
    }

    #[test]
    fn test_filter_empty_term_is_identity() {
        let list = items();
        let view = filter_items(&list, "");
        assert_eq!(view.len(), list.len());
        assert!(view.iter().zip(list.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_filter_is_case_insensitive_over_all_fields() {
        let list = items();
        let ids: Vec<u32> = filter_items(&list, "alpha").iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_filter_skips_absent_fields() {
        let list = items();
        let ids: Vec<u32> = filter_items(&list, "BET").iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_filter_view_is_ordered_subsequence_with_exact_membership() {
        let list = items();
        for term in ["a", "A", "t", "er", "zzz", "mouth", "Gam", " "] {
            let needle = term.to_lowercase();
            let view = filter_items(&list, term);

            // Subsequence preserving order: ids strictly increase in list position.
            let positions: Vec<usize> = view
                .iter()
                .map(|v| list.iter().position(|i| i == *v).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "term {term:?}");

            for item in &list {
                let included = view.contains(&item);
                let has_match = item
                    .search_fields()
                    .iter()
                    .any(|f| f.to_lowercase().contains(&needle));
                assert_eq!(included, has_match, "term {term:?}, item {}", item.id);
            }
        }
    }

    #[test]
    fn test_set_filter_does_not_touch_fetch_state() {
        let mut view = RemoteListView::new();
        let ticket = view.load();
        view.settle(ticket, Ok(items()));
        view.set_filter("delta");
        assert!(view.state().ready().is_some());
        assert_eq!(view.visible().len(), 1);
        assert_eq!(view.total(), 4);
    }

    #[test]
    fn test_shows_no_results_only_for_nonempty_term() {
        let mut view = RemoteListView::new();
        let ticket = view.load();
        view.settle(ticket, Ok(items()));
        assert!(!view.shows_no_results());
        view.set_filter("nothing-matches");
        assert!(view.shows_no_results());
    }

    #[test]
    fn test_retry_after_failure_settles_once() {
        let mut view: RemoteListView<Item> = RemoteListView::new();
        let first = view.load();
        view.settle(first, Err(FetchError::Transport("offline".to_string())));
        assert!(view.state().failure().unwrap().contains("offline"));

        let retry = view.retry();
        assert!(view.state().is_loading());
        assert!(view.settle(retry, Ok(items())));
        assert_eq!(view.total(), 4);

        // A second settle for the same ticket is ignored.
        assert!(!view.settle(retry, Ok(vec![])));
        assert_eq!(view.total(), 4);
    }

    #[test]
    fn test_repeated_retry_applies_only_newest() {
        let mut view = RemoteListView::new();
        let a = view.retry();
        let b = view.retry();
        assert!(view.settle(b, Ok(items()[..1].to_vec())));
        assert!(!view.settle(a, Ok(items())));
        assert_eq!(view.total(), 1);
    }

    #[test]
    fn test_load_from_source() {
        let mut view = RemoteListView::new();
        let source = StaticSource(Ok(items()));
        let state = tokio_test::block_on(view.load_from(&source));
        assert_eq!(state.ready().map(Vec::len), Some(4));

        let failing = StaticSource(Err(FetchError::Status {
            status: 500,
            body: String::new(),
        }));
        let state = tokio_test::block_on(view.load_from(&failing));
        assert_eq!(state.failure(), Some("API error (HTTP 500)"));
        assert!(view.items().is_empty());
    }
}
