//! # Catalog Controller
//!
//! Loads products and categories together and pages the products out to
//! the view in fixed-size increments.
//!
//! ## Controller Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       CatalogController                                 │
//! │                                                                         │
//! │   load_all() / refresh()                                               │
//! │        │                                                                │
//! │        ▼                                                                │
//! │   begin: reject if a load is in flight, state := Loading               │
//! │        │                                                                │
//! │        ├────────────────────────┬──────────────────────┐  tokio::join! │
//! │        ▼                        ▼                      │                │
//! │   ProductSource            CategorySource              │                │
//! │   fetch_all_items()        fetch_all_categories()      │                │
//! │        │                        │                      │                │
//! │        └──────────┬─────────────┘                      │                │
//! │                   ▼  (both settled)                                     │
//! │        ┌─────── both Ok? ───────┐                                       │
//! │        │ yes                    │ no                                    │
//! │        ▼                        ▼                                       │
//! │   feed.replace(items, cats)  feed untouched                            │
//! │   window := min(page, len)   state := Error                            │
//! │   state := Idle              emit_error(notice)                        │
//! │                                                                         │
//! │   load_more()      window += page, clamped; never fetches              │
//! │   visible_items()  items[..window], derived on every call              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Consistency
//! All state sits behind one `RwLock` and is written only at the start and
//! at the end of a load. The lock is never held across an `.await`, so a
//! reader always sees either the whole pre-load or the whole post-load feed.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use tracing::debug;

use nearnow_core::{Feed, LoadState, PageSummary};

use crate::error::{CatalogError, CatalogResult, FetchFailure};
use crate::events::{FeedEventEmitter, NoOpEmitter, LOAD_FAILED_NOTICE};
use crate::source::{CategorySource, ProductSource};

// =============================================================================
// Public Types
// =============================================================================

/// Why a load was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadKind {
    /// First load when the screen mounts, or an explicit reload.
    Initial,
    /// Pull-to-refresh.
    Refresh,
}

/// Result of a successful load.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<I, K> {
    /// The complete new collection.
    pub items: Vec<I>,
    pub categories: Vec<K>,
    /// Window after the reset.
    pub window: usize,
}

/// A consistent copy of everything the view renders.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedSnapshot<I, K> {
    pub visible: Vec<I>,
    pub categories: Vec<K>,
    pub summary: PageSummary,
    pub load_state: LoadState,
    /// True while a pull-to-refresh is in flight.
    pub refreshing: bool,
    pub last_loaded_at: Option<DateTime<Utc>>,
}

impl<I, K> FeedSnapshot<I, K> {
    pub fn has_more(&self) -> bool {
        self.summary.has_more()
    }

    /// True when a load finished without error but returned no items.
    pub fn is_empty_state(&self) -> bool {
        self.load_state == LoadState::Idle && self.summary.total == 0
    }
}

// =============================================================================
// Controller State
// =============================================================================

#[derive(Debug)]
struct ControllerState<I, K> {
    feed: Feed<I, K>,
    load_state: LoadState,
    in_flight: Option<LoadKind>,
    last_loaded_at: Option<DateTime<Utc>>,
}

fn read_state<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_state<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

/// Marks a load as in flight. If the load future is dropped before it
/// settles, the flag is cleared and the previous load state restored.
struct InFlight<'a, I, K> {
    state: &'a RwLock<ControllerState<I, K>>,
    previous: LoadState,
    armed: bool,
}

impl<I, K> InFlight<'_, I, K> {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl<I, K> Drop for InFlight<'_, I, K> {
    fn drop(&mut self) {
        if self.armed {
            let mut state = write_state(self.state);
            state.in_flight = None;
            state.load_state = self.previous;
        }
    }
}

// =============================================================================
// Catalog Controller
// =============================================================================

/// Home feed controller over a product source and a category source.
///
/// ## Usage
/// ```rust
/// use nearnow_catalog::{CatalogController, StaticSource};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let products = StaticSource::new("products", (1..=30).collect::<Vec<u32>>());
/// let categories = StaticSource::new("categories", vec!["dairy".to_string()]);
/// let controller = CatalogController::new(products, categories, 12).unwrap();
///
/// controller.load_all().await.unwrap();
/// assert_eq!(controller.window(), 12);
///
/// controller.load_more();
/// assert_eq!(controller.visible_items().len(), 24);
/// # }
/// ```
pub struct CatalogController<P, C>
where
    P: ProductSource,
    C: CategorySource,
{
    products: Arc<P>,
    categories: Arc<C>,
    state: Arc<RwLock<ControllerState<P::Item, C::Category>>>,
    emitter: Arc<dyn FeedEventEmitter>,
}

impl<P, C> Clone for CatalogController<P, C>
where
    P: ProductSource,
    C: CategorySource,
{
    fn clone(&self) -> Self {
        CatalogController {
            products: Arc::clone(&self.products),
            categories: Arc::clone(&self.categories),
            state: Arc::clone(&self.state),
            emitter: Arc::clone(&self.emitter),
        }
    }
}

impl<P, C> CatalogController<P, C>
where
    P: ProductSource,
    C: CategorySource,
{
    /// Creates a controller with an empty feed in the `Idle` state.
    pub fn new(products: P, categories: C, page_size: usize) -> CatalogResult<Self> {
        Self::with_emitter(products, categories, page_size, Arc::new(NoOpEmitter))
    }

    /// Creates a controller with a custom event emitter.
    pub fn with_emitter(
        products: P,
        categories: C,
        page_size: usize,
        emitter: Arc<dyn FeedEventEmitter>,
    ) -> CatalogResult<Self> {
        let state = ControllerState {
            feed: Feed::new(page_size)?,
            load_state: LoadState::Idle,
            in_flight: None,
            last_loaded_at: None,
        };

        Ok(CatalogController {
            products: Arc::new(products),
            categories: Arc::new(categories),
            state: Arc::new(RwLock::new(state)),
            emitter,
        })
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Fetches products and categories concurrently and replaces the feed.
    ///
    /// ## Outcomes
    /// - Both fetches succeed: feed replaced, window reset to the first
    ///   page, state `Idle`.
    /// - Either fetch fails: feed unchanged, state `Error`,
    ///   [`CatalogError::Fetch`] returned and one error notice emitted.
    /// - Another load in flight: [`CatalogError::FetchInProgress`], nothing
    ///   changes.
    pub async fn load_all(&self) -> CatalogResult<Loaded<P::Item, C::Category>> {
        self.load(LoadKind::Initial).await
    }

    /// Pull-to-refresh. Same contract as [`load_all`](Self::load_all);
    /// [`is_refreshing`](Self::is_refreshing) is true while it runs.
    pub async fn refresh(&self) -> CatalogResult<Loaded<P::Item, C::Category>> {
        self.load(LoadKind::Refresh).await
    }

    async fn load(&self, kind: LoadKind) -> CatalogResult<Loaded<P::Item, C::Category>> {
        let in_flight = self.begin(kind)?;
        self.emitter.emit_state(LoadState::Loading);
        debug!(?kind, "Feed load started");

        let (items, categories) = tokio::join!(
            self.products.fetch_all_items(),
            self.categories.fetch_all_categories(),
        );

        match (items, categories) {
            (Ok(items), Ok(categories)) => {
                let (loaded, summary) = {
                    let mut state = write_state(&self.state);
                    state.feed.replace(items, categories);
                    state.load_state = LoadState::Idle;
                    state.in_flight = None;
                    state.last_loaded_at = Some(Utc::now());

                    let loaded = Loaded {
                        items: state.feed.items().to_vec(),
                        categories: state.feed.categories().to_vec(),
                        window: state.feed.window(),
                    };
                    (loaded, state.feed.summary())
                };
                in_flight.disarm();

                debug!(
                    ?kind,
                    items = loaded.items.len(),
                    categories = loaded.categories.len(),
                    window = loaded.window,
                    "Feed load applied"
                );
                self.emitter.emit_state(LoadState::Idle);
                self.emitter.emit_window(summary);
                Ok(loaded)
            }
            (items, categories) => {
                let causes: Vec<_> = [items.err(), categories.err()]
                    .into_iter()
                    .flatten()
                    .collect();
                {
                    let mut state = write_state(&self.state);
                    state.load_state = LoadState::Error;
                    state.in_flight = None;
                }
                in_flight.disarm();

                self.emitter.emit_state(LoadState::Error);
                self.emitter.emit_error(LOAD_FAILED_NOTICE);
                Err(FetchFailure::new(causes).into())
            }
        }
    }

    fn begin(&self, kind: LoadKind) -> CatalogResult<InFlight<'_, P::Item, C::Category>> {
        let mut state = write_state(&self.state);
        if state.in_flight.is_some() {
            return Err(CatalogError::FetchInProgress);
        }

        let previous = state.load_state;
        state.in_flight = Some(kind);
        state.load_state = LoadState::Loading;

        Ok(InFlight {
            state: &self.state,
            previous,
            armed: true,
        })
    }

    // =========================================================================
    // Pagination
    // =========================================================================

    /// Reveals one more page of already-fetched items.
    ///
    /// Returns `true` if the window grew; `false` (and no change) once every
    /// item is visible.
    pub fn load_more(&self) -> bool {
        let (grew, summary) = {
            let mut state = write_state(&self.state);
            let grew = state.feed.load_more();
            (grew, state.feed.summary())
        };

        if grew {
            self.emitter.emit_window(summary);
        }
        grew
    }

    // =========================================================================
    // Read Access
    // =========================================================================

    /// The leading `window` items.
    pub fn visible_items(&self) -> Vec<P::Item> {
        read_state(&self.state).feed.visible_items().to_vec()
    }

    /// Runs `f` over the visible items without copying them.
    pub fn with_visible<R>(&self, f: impl FnOnce(&[P::Item]) -> R) -> R {
        f(read_state(&self.state).feed.visible_items())
    }

    pub fn has_more(&self) -> bool {
        read_state(&self.state).feed.has_more()
    }

    /// Number of visible items.
    pub fn window(&self) -> usize {
        read_state(&self.state).feed.window()
    }

    pub fn page_size(&self) -> usize {
        read_state(&self.state).feed.page_size()
    }

    /// Number of fetched items.
    pub fn total(&self) -> usize {
        read_state(&self.state).feed.total()
    }

    pub fn categories(&self) -> Vec<C::Category> {
        read_state(&self.state).feed.categories().to_vec()
    }

    pub fn load_state(&self) -> LoadState {
        read_state(&self.state).load_state
    }

    pub fn is_loading(&self) -> bool {
        read_state(&self.state).in_flight.is_some()
    }

    /// True while a pull-to-refresh is in flight.
    pub fn is_refreshing(&self) -> bool {
        read_state(&self.state).in_flight == Some(LoadKind::Refresh)
    }

    pub fn summary(&self) -> PageSummary {
        read_state(&self.state).feed.summary()
    }

    /// Completion time of the last successful load.
    pub fn last_loaded_at(&self) -> Option<DateTime<Utc>> {
        read_state(&self.state).last_loaded_at
    }

    /// Everything the view renders, taken under one lock.
    pub fn snapshot(&self) -> FeedSnapshot<P::Item, C::Category> {
        let state = read_state(&self.state);
        FeedSnapshot {
            visible: state.feed.visible_items().to_vec(),
            categories: state.feed.categories().to_vec(),
            summary: state.feed.summary(),
            load_state: state.load_state,
            refreshing: state.in_flight == Some(LoadKind::Refresh),
            last_loaded_at: state.last_loaded_at,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{FeedEvent, RecordingEmitter};
    use crate::source::{SourceError, StaticSource};
    use async_trait::async_trait;
    use std::time::Duration;
    use tokio::sync::{Barrier, Notify};

    type TestController = CatalogController<StaticSource<u32>, StaticSource<String>>;

    fn numbers(n: u32) -> Vec<u32> {
        (1..=n).collect()
    }

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn controller_with(
        items: Vec<u32>,
        categories: Vec<String>,
    ) -> (TestController, StaticSource<u32>, StaticSource<String>) {
        let products = StaticSource::new("products", items);
        let cats = StaticSource::new("categories", categories);
        let controller = CatalogController::new(products.clone(), cats.clone(), 12).unwrap();
        (controller, products, cats)
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let result = CatalogController::new(
            StaticSource::new("products", numbers(3)),
            StaticSource::new("categories", labels(&[])),
            0,
        );
        assert!(matches!(result, Err(CatalogError::Validation(_))));
    }

    #[test]
    fn test_new_controller_is_idle_and_empty() {
        let (controller, _, _) = controller_with(numbers(30), labels(&["dairy"]));
        assert_eq!(controller.load_state(), LoadState::Idle);
        assert_eq!(controller.window(), 0);
        assert!(controller.visible_items().is_empty());
        assert!(!controller.has_more());
        assert!(controller.last_loaded_at().is_none());
    }

    #[tokio::test]
    async fn test_thirty_items_paged_by_twelve() {
        let (controller, _, _) = controller_with(numbers(30), labels(&["dairy", "bakery"]));

        let loaded = controller.load_all().await.unwrap();
        assert_eq!(loaded.items.len(), 30);
        assert_eq!(loaded.categories, labels(&["dairy", "bakery"]));
        assert_eq!(loaded.window, 12);
        assert_eq!(controller.window(), 12);
        assert!(controller.has_more());
        assert_eq!(controller.visible_items(), numbers(12));

        assert!(controller.load_more());
        assert_eq!(controller.window(), 24);

        assert!(controller.load_more());
        assert_eq!(controller.window(), 30);
        assert!(!controller.has_more());

        assert!(!controller.load_more());
        assert_eq!(controller.window(), 30);
        assert_eq!(controller.visible_items(), numbers(30));
    }

    #[tokio::test]
    async fn test_short_collection_fits_in_first_page() {
        let (controller, _, _) = controller_with(numbers(5), labels(&[]));
        controller.load_all().await.unwrap();
        assert_eq!(controller.window(), 5);
        assert!(!controller.has_more());
    }

    #[tokio::test]
    async fn test_oversized_page_clamps_to_collection() {
        let controller = CatalogController::new(
            StaticSource::new("products", numbers(30)),
            StaticSource::new("categories", labels(&[])),
            1000,
        )
        .unwrap();

        let loaded = controller.load_all().await.unwrap();
        assert_eq!(loaded.window, 30);
        assert_eq!(controller.visible_items(), numbers(30));
        assert!(!controller.has_more());
        assert!(!controller.load_more());
        assert_eq!(controller.window(), 30);
    }

    #[tokio::test]
    async fn test_empty_collection_is_empty_state_not_error() {
        let (controller, _, _) = controller_with(Vec::new(), labels(&["dairy"]));
        controller.load_all().await.unwrap();

        assert_eq!(controller.window(), 0);
        assert!(controller.visible_items().is_empty());
        assert!(!controller.has_more());

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.load_state, LoadState::Idle);
        assert!(snapshot.is_empty_state());
    }

    #[tokio::test]
    async fn test_category_failure_applies_nothing() {
        let (controller, _, cats) = controller_with(numbers(30), labels(&["dairy"]));
        cats.fail_with("HTTP 500");

        let err = controller.load_all().await.unwrap_err();
        match err {
            CatalogError::Fetch(failure) => {
                assert!(failure.failed("categories"));
                assert!(!failure.failed("products"));
            }
            other => panic!("expected fetch failure, got {other:?}"),
        }

        assert_eq!(controller.load_state(), LoadState::Error);
        assert_eq!(controller.total(), 0);
        assert_eq!(controller.window(), 0);
        assert!(controller.categories().is_empty());
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_feed() {
        let (controller, products, cats) = controller_with(numbers(30), labels(&["dairy"]));
        controller.load_all().await.unwrap();
        controller.load_more();
        let before = controller.snapshot();

        products.set_items(numbers(3));
        cats.fail_with("timed out");
        assert!(controller.refresh().await.is_err());

        let after = controller.snapshot();
        assert_eq!(after.visible, before.visible);
        assert_eq!(after.categories, before.categories);
        assert_eq!(after.summary, before.summary);
        assert_eq!(after.last_loaded_at, before.last_loaded_at);
        assert_eq!(after.load_state, LoadState::Error);
    }

    #[tokio::test]
    async fn test_both_sources_failing_reports_both() {
        let (controller, products, cats) = controller_with(numbers(30), labels(&[]));
        products.fail_with("dns");
        cats.fail_with("dns");

        match controller.load_all().await {
            Err(CatalogError::Fetch(failure)) => assert_eq!(failure.causes().len(), 2),
            other => panic!("expected fetch failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_refresh_resets_window() {
        let (controller, products, _) = controller_with(numbers(30), labels(&[]));
        controller.load_all().await.unwrap();
        controller.load_more();
        assert_eq!(controller.window(), 24);

        products.set_items(numbers(10));
        let loaded = controller.refresh().await.unwrap();
        assert_eq!(loaded.window, 10);
        assert_eq!(controller.window(), 10);
        assert!(!controller.has_more());
    }

    #[tokio::test]
    async fn test_error_state_left_by_next_load() {
        let (controller, products, _) = controller_with(numbers(30), labels(&[]));
        products.fail_with("offline");
        assert!(controller.load_all().await.is_err());
        assert_eq!(controller.load_state(), LoadState::Error);

        // Stays in Error until someone loads again.
        controller.load_more();
        assert_eq!(controller.load_state(), LoadState::Error);

        products.set_items(numbers(30));
        controller.refresh().await.unwrap();
        assert_eq!(controller.load_state(), LoadState::Idle);
        assert_eq!(controller.window(), 12);
    }

    #[tokio::test]
    async fn test_load_more_never_fetches() {
        let (controller, products, cats) = controller_with(numbers(30), labels(&[]));
        controller.load_all().await.unwrap();

        for _ in 0..5 {
            controller.load_more();
        }
        assert_eq!(products.fetch_count(), 1);
        assert_eq!(cats.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_window_invariants_hold_for_any_page_size() {
        for page_size in 1..=9 {
            for len in [0u32, 1, 7, 12, 30] {
                let controller = CatalogController::new(
                    StaticSource::new("products", numbers(len)),
                    StaticSource::new("categories", labels(&[])),
                    page_size,
                )
                .unwrap();
                controller.load_all().await.unwrap();
                assert_eq!(controller.window(), page_size.min(len as usize));

                let mut previous = controller.window();
                for _ in 0..(len as usize + 2) {
                    controller.load_more();
                    let window = controller.window();
                    assert!(window >= previous);
                    assert!(window <= len as usize);
                    assert_eq!(controller.visible_items().len(), window);
                    previous = window;
                }
                assert!(!controller.has_more());
            }
        }
    }

    #[tokio::test]
    async fn test_events_for_success_and_failure() {
        let emitter = Arc::new(RecordingEmitter::new());
        let products = StaticSource::new("products", numbers(30));
        let controller = CatalogController::with_emitter(
            products.clone(),
            StaticSource::new("categories", labels(&[])),
            12,
            emitter.clone(),
        )
        .unwrap();

        controller.load_all().await.unwrap();
        controller.load_more();
        assert_eq!(
            emitter.take(),
            vec![
                FeedEvent::State(LoadState::Loading),
                FeedEvent::State(LoadState::Idle),
                FeedEvent::Window(PageSummary { shown: 12, total: 30 }),
                FeedEvent::Window(PageSummary { shown: 24, total: 30 }),
            ]
        );

        products.fail_with("offline");
        assert!(controller.refresh().await.is_err());
        assert_eq!(
            emitter.take(),
            vec![
                FeedEvent::State(LoadState::Loading),
                FeedEvent::State(LoadState::Error),
                FeedEvent::Error(LOAD_FAILED_NOTICE.to_string()),
            ]
        );

        // Error is not re-announced; only the window change is.
        controller.load_more();
        controller.load_more();
        assert_eq!(emitter.take(), vec![FeedEvent::Window(PageSummary { shown: 30, total: 30 })]);
    }

    // -------------------------------------------------------------------------
    // Concurrency
    // -------------------------------------------------------------------------

    /// Both fetches must reach the barrier before either returns.
    struct BarrierSource {
        name: &'static str,
        barrier: Arc<Barrier>,
    }

    #[async_trait]
    impl ProductSource for BarrierSource {
        type Item = u32;

        async fn fetch_all_items(&self) -> Result<Vec<u32>, SourceError> {
            self.barrier.wait().await;
            Ok(numbers(20))
        }
    }

    #[async_trait]
    impl CategorySource for BarrierSource {
        type Category = u32;

        async fn fetch_all_categories(&self) -> Result<Vec<u32>, SourceError> {
            self.barrier.wait().await;
            Err(SourceError::new(self.name, "boom"))
        }
    }

    #[tokio::test]
    async fn test_fetches_issued_concurrently_and_joined() {
        let barrier = Arc::new(Barrier::new(2));
        let controller = CatalogController::new(
            BarrierSource {
                name: "products",
                barrier: barrier.clone(),
            },
            BarrierSource {
                name: "categories",
                barrier,
            },
            12,
        )
        .unwrap();

        let result = tokio::time::timeout(Duration::from_secs(5), controller.load_all())
            .await
            .expect("fetches were not issued concurrently");
        assert!(result.is_err());
        assert_eq!(controller.total(), 0);
    }

    /// Holds the product fetch open until released.
    struct GatedSource {
        items: Arc<std::sync::Mutex<Vec<u32>>>,
        started: Arc<Notify>,
        release: Arc<Notify>,
    }

    #[async_trait]
    impl ProductSource for GatedSource {
        type Item = u32;

        async fn fetch_all_items(&self) -> Result<Vec<u32>, SourceError> {
            self.started.notify_one();
            self.release.notified().await;
            Ok(self.items.lock().unwrap().clone())
        }
    }

    fn gated_controller() -> (
        CatalogController<GatedSource, StaticSource<String>>,
        Arc<std::sync::Mutex<Vec<u32>>>,
        Arc<Notify>,
        Arc<Notify>,
    ) {
        let items = Arc::new(std::sync::Mutex::new(numbers(30)));
        let started = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        let controller = CatalogController::new(
            GatedSource {
                items: items.clone(),
                started: started.clone(),
                release: release.clone(),
            },
            StaticSource::new("categories", labels(&["dairy"])),
            12,
        )
        .unwrap();
        (controller, items, started, release)
    }

    #[tokio::test]
    async fn test_readers_see_old_feed_while_refresh_in_flight() {
        let (controller, items, started, release) = gated_controller();

        release.notify_one();
        controller.load_all().await.unwrap();
        // Drain the start signal left by the first load.
        started.notified().await;
        controller.load_more();

        *items.lock().unwrap() = numbers(10);
        let background = controller.clone();
        let task = tokio::spawn(async move { background.refresh().await });
        started.notified().await;

        let during = controller.snapshot();
        assert_eq!(during.load_state, LoadState::Loading);
        assert!(during.refreshing);
        assert_eq!(during.visible, numbers(24));
        assert_eq!(during.summary, PageSummary { shown: 24, total: 30 });

        release.notify_one();
        let loaded = task.await.unwrap().unwrap();
        assert_eq!(loaded.window, 10);

        let after = controller.snapshot();
        assert_eq!(after.load_state, LoadState::Idle);
        assert!(!after.refreshing);
        assert_eq!(after.visible, numbers(10));
    }

    #[tokio::test]
    async fn test_overlapping_load_rejected() {
        let (controller, _, started, release) = gated_controller();

        let background = controller.clone();
        let task = tokio::spawn(async move { background.load_all().await });
        started.notified().await;

        assert!(controller.is_loading());
        assert!(matches!(
            controller.refresh().await,
            Err(CatalogError::FetchInProgress)
        ));
        assert_eq!(controller.load_state(), LoadState::Loading);

        release.notify_one();
        task.await.unwrap().unwrap();
        assert_eq!(controller.window(), 12);
        assert!(!controller.is_loading());
    }

    #[tokio::test]
    async fn test_dropped_load_clears_in_flight() {
        let (controller, _, _, release) = gated_controller();

        let timed_out = tokio::time::timeout(Duration::from_millis(20), controller.load_all()).await;
        assert!(timed_out.is_err());
        assert_eq!(controller.load_state(), LoadState::Idle);
        assert!(!controller.is_loading());

        release.notify_one();
        controller.load_all().await.unwrap();
        assert_eq!(controller.window(), 12);
    }
}
