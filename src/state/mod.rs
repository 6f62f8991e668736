//! Application state management.
//!
//! `AppState` is the session: it owns the catalog state (paginator and
//! cache) and the selection state, and exposes the operations the UI
//! panels invoke. UI code borrows it for one frame; async fetch
//! completions are applied to it by the update loop.

mod bulk;
mod cache;
mod materializer;
mod paginator;
mod selection;
mod stats;
pub mod url_state;

pub use bulk::{clamp_bulk_count, BulkInput, BulkSelectState};
pub use materializer::SelectedArtworksView;
pub use paginator::{fetch_first_n, BulkFetch, PageLoadStatus, PageRequest, Paginator};
pub use selection::SelectionManager;
pub use stats::SessionStats;

use crate::catalog::{
    Artwork, ArtworkId, ArtworkPage, BulkFetchError, CatalogClient, FetchError,
};

/// Root application state containing all sub-states.
pub struct AppState {
    /// Current page, its records, and the session cache
    pub paginator: Paginator,

    /// Selected artwork ids across all pages
    pub selection: SelectionManager,

    /// Busy state of "select first N rows"
    pub bulk: BulkSelectState,

    /// Bulk-select popup contents
    pub bulk_input: BulkInput,

    /// Page requested by the UI, dispatched by the update loop
    pub page_change_requested: Option<u32>,

    /// Application status message displayed in top bar
    pub status_message: String,

    /// Session request statistics
    pub session_stats: SessionStats,

    selected_view: SelectedArtworksView,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates the session state with page 1 requested.
    pub fn new() -> Self {
        Self::with_initial_page(1)
    }

    pub fn with_initial_page(page: u32) -> Self {
        Self {
            paginator: Paginator::new(),
            selection: SelectionManager::new(),
            bulk: BulkSelectState::default(),
            bulk_input: BulkInput::default(),
            page_change_requested: Some(page.max(1)),
            status_message: "Ready".to_string(),
            session_stats: SessionStats::new(),
            selected_view: SelectedArtworksView::new(),
        }
    }

    // ========================================================================
    // Catalog view
    // ========================================================================

    pub fn current_page_data(&self) -> &[Artwork] {
        self.paginator.records()
    }

    pub fn total_records(&self) -> u64 {
        self.paginator.total_records()
    }

    pub fn loading(&self) -> bool {
        self.paginator.is_loading()
    }

    /// Zero-based offset of the current page's first row.
    pub fn first(&self) -> u64 {
        self.paginator.first()
    }

    pub fn current_page(&self) -> u32 {
        self.paginator.current_page()
    }

    pub fn page_count(&self) -> u32 {
        self.paginator.page_count()
    }

    /// Ids of the current page's records, in row order.
    pub fn current_page_ids(&self) -> Vec<ArtworkId> {
        self.current_page_data().iter().map(|a| a.id).collect()
    }

    /// Requests a page change; the update loop issues the fetch.
    pub fn on_page_change(&mut self, page: u32) {
        self.page_change_requested = Some(page.max(1));
    }

    pub fn take_page_change(&mut self) -> Option<u32> {
        self.page_change_requested.take()
    }

    // ========================================================================
    // Selection
    // ========================================================================

    pub fn is_selected(&self, id: ArtworkId) -> bool {
        self.selection.is_selected(id)
    }

    /// True when the current page is non-empty and every row is selected.
    pub fn is_page_fully_selected(&self) -> bool {
        self.selection.all_selected(&self.current_page_ids())
    }

    pub fn toggle_selection(&mut self, id: ArtworkId) {
        self.selection.toggle(id);
    }

    pub fn toggle_page_selection(&mut self, page_ids: &[ArtworkId], all_selected: bool) {
        self.selection.toggle_page(page_ids, all_selected);
    }

    /// Header checkbox: selects the current page, or deselects it if fully selected.
    pub fn toggle_current_page(&mut self) {
        let page_ids = self.current_page_ids();
        let all_selected = self.selection.all_selected(&page_ids);
        self.toggle_page_selection(&page_ids, all_selected);
    }

    pub fn remove_selection(&mut self, id: ArtworkId) {
        self.selection.remove(id);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.status_message = "Selection cleared".to_string();
    }

    /// Replaces the selection with exactly the given records.
    pub fn bulk_select(&mut self, records: &[Artwork]) {
        self.selection.replace_all(records.iter().map(|a| a.id));
    }

    /// Selected records that are present in the cache, in selection order.
    pub fn selected_artworks_view(&mut self) -> &[Artwork] {
        self.selected_view
            .get(&self.selection, self.paginator.cache())
    }

    // ========================================================================
    // Bulk selection
    // ========================================================================

    pub fn bulk_in_progress(&self) -> bool {
        self.bulk.in_progress()
    }

    /// Starts "select first `requested` rows".
    ///
    /// Clamps to the reported total and enters the busy state. Returns the
    /// clamped count, or `None` if the request was rejected.
    pub fn request_bulk_select(&mut self, requested: usize) -> Option<usize> {
        let Some(count) = clamp_bulk_count(requested, self.total_records()) else {
            log::warn!("Bulk select of {} ignored: no records available", requested);
            return None;
        };

        if !self.bulk.begin(count) {
            log::debug!("Bulk select already in progress, ignoring request");
            return None;
        }

        log::info!("Selecting first {} artwork(s)", count);
        self.status_message = format!("Selecting first {} rows...", count);
        Some(count)
    }

    /// Applies a finished bulk fetch and leaves the busy state.
    ///
    /// On failure the selection is left unchanged. Returns whether the
    /// selection was replaced.
    pub fn complete_bulk_select(
        &mut self,
        result: Result<BulkFetch, BulkFetchError>,
        latency_ms: f64,
    ) -> bool {
        self.session_stats.record_request(latency_ms, result.is_ok());

        let replaced = match result {
            Ok(fetch) => {
                let records = self.paginator.absorb_bulk(fetch);
                self.bulk_select(&records);
                log::info!("Selected {} artwork(s)", records.len());
                self.status_message = format!("Selected {} rows", records.len());
                true
            }
            Err(e) => {
                log::error!("Bulk selection failed: {}", e);
                self.status_message = format!("Bulk selection failed: {}", e);
                false
            }
        };

        self.bulk.finish();
        replaced
    }

    /// Runs the whole bulk-selection flow against `client`.
    #[allow(dead_code)] // The UI splits this across frames via FetchChannel
    pub async fn bulk_select_with<C: CatalogClient>(
        &mut self,
        client: &C,
        requested: usize,
    ) -> bool {
        if self.request_bulk_select(requested).is_none() {
            return false;
        }
        let Some(count) = self.bulk.take_pending() else {
            return false;
        };

        let started = web_time::Instant::now();
        let result = fetch_first_n(client, count).await;
        self.complete_bulk_select(result, started.elapsed().as_secs_f64() * 1000.0)
    }

    // ========================================================================
    // Page loads
    // ========================================================================

    /// Applies a finished page load.
    pub fn complete_page_load(
        &mut self,
        request: PageRequest,
        result: Result<ArtworkPage, FetchError>,
        latency_ms: f64,
    ) -> PageLoadStatus {
        self.session_stats.record_request(latency_ms, result.is_ok());

        let status = self.paginator.complete_page_load(request, result);
        match &status {
            PageLoadStatus::Applied => {
                self.status_message = format!(
                    "Page {} of {}",
                    self.current_page(),
                    self.page_count().max(1)
                );
            }
            PageLoadStatus::Failed(e) => {
                self.status_message = format!("Failed to load page {}: {}", request.page, e);
            }
            PageLoadStatus::Stale => {}
        }
        status
    }

    /// Loads `page` from `client` and applies the result.
    #[allow(dead_code)] // The UI splits this across frames via FetchChannel
    pub async fn load_page_with<C: CatalogClient>(
        &mut self,
        client: &C,
        page: u32,
    ) -> PageLoadStatus {
        let request = self.paginator.begin_page_load(page);
        let started = web_time::Instant::now();
        let result = client.fetch_page(request.page).await;
        self.complete_page_load(request, result, started.elapsed().as_secs_f64() * 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::testing::{ids, MockCatalog};

    fn selected_ids(state: &AppState) -> Vec<ArtworkId> {
        let mut selected: Vec<ArtworkId> = state.selection.ids().collect();
        selected.sort();
        selected
    }

    fn loaded_state(catalog: &MockCatalog) -> AppState {
        let mut state = AppState::new();
        let page = state.take_page_change().unwrap();
        pollster::block_on(state.load_page_with(catalog, page));
        state
    }

    #[test]
    fn test_initial_page_is_requested() {
        let mut state = AppState::with_initial_page(4);
        assert_eq!(state.take_page_change(), Some(4));
        assert_eq!(state.take_page_change(), None);
    }

    #[test]
    fn test_select_then_bulk_scenario() {
        let catalog = MockCatalog::new(100);
        let mut state = loaded_state(&catalog);
        assert_eq!(state.current_page_ids(), ids(1..=12));

        state.toggle_selection(ArtworkId(5));
        state.toggle_selection(ArtworkId(5));
        assert!(state.selection.is_empty());

        let page_ids = state.current_page_ids();
        state.toggle_page_selection(&page_ids, false);
        assert_eq!(selected_ids(&state), ids(1..=12));
        assert!(state.is_page_fully_selected());

        assert!(pollster::block_on(state.bulk_select_with(&catalog, 15)));

        assert_eq!(catalog.requested_pages(), vec![1, 1, 2]);
        assert_eq!(selected_ids(&state), ids(1..=15));
        assert!(state.is_selected(ArtworkId(6)));
        for id in 16..=24 {
            assert!(!state.is_selected(ArtworkId(id)));
            assert!(state.paginator.cache().get(&ArtworkId(id)).is_some());
        }
        assert!(!state.bulk_in_progress());
    }

    #[test]
    fn test_bulk_replaces_prior_selection() {
        let catalog = MockCatalog::new(100);
        let mut state = loaded_state(&catalog);
        state.toggle_selection(ArtworkId(50));
        state.toggle_selection(ArtworkId(3));

        pollster::block_on(state.bulk_select_with(&catalog, 4));

        assert_eq!(selected_ids(&state), ids(1..=4));
        assert!(!state.is_selected(ArtworkId(50)));
    }

    #[test]
    fn test_bulk_count_clamped_to_total() {
        let catalog = MockCatalog::new(20);
        let mut state = loaded_state(&catalog);

        pollster::block_on(state.bulk_select_with(&catalog, 500));

        assert_eq!(selected_ids(&state), ids(1..=20));
    }

    #[test]
    fn test_bulk_rejected_before_total_known() {
        let catalog = MockCatalog::new(100);
        let mut state = AppState::new();

        assert!(!pollster::block_on(state.bulk_select_with(&catalog, 5)));
        assert!(catalog.requested_pages().is_empty());
        assert!(!state.bulk_in_progress());
    }

    #[test]
    fn test_failed_bulk_keeps_selection_and_clears_busy() {
        let catalog = MockCatalog::new(100).failing_on(2);
        let mut state = loaded_state(&catalog);
        state.toggle_selection(ArtworkId(7));

        assert!(!pollster::block_on(state.bulk_select_with(&catalog, 20)));

        assert_eq!(selected_ids(&state), ids([7]));
        assert!(!state.bulk_in_progress());
        assert_eq!(state.session_stats.failed_request_count, 1);
    }

    #[test]
    fn test_busy_state_spans_dispatch() {
        let catalog = MockCatalog::new(100);
        let mut state = loaded_state(&catalog);

        assert_eq!(state.request_bulk_select(30), Some(30));
        assert!(state.bulk_in_progress());
        assert_eq!(state.request_bulk_select(10), None);

        let count = state.bulk.take_pending().unwrap();
        let result = pollster::block_on(fetch_first_n(&catalog, count));
        assert!(state.complete_bulk_select(result, 5.0));

        assert!(!state.bulk_in_progress());
        assert_eq!(state.selection.len(), 30);
    }

    #[test]
    fn test_failed_page_load_keeps_view() {
        let catalog = MockCatalog::new(100).failing_on(3);
        let mut state = loaded_state(&catalog);

        let status = pollster::block_on(state.load_page_with(&catalog, 3));

        assert!(matches!(status, PageLoadStatus::Failed(_)));
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.current_page_ids(), ids(1..=12));
        assert_eq!(state.total_records(), 100);
        assert!(!state.loading());
        assert!(state.status_message.starts_with("Failed to load page 3"));
    }

    #[test]
    fn test_stale_failure_keeps_status() {
        let catalog = MockCatalog::new(100);
        let mut state = AppState::new();

        let slow = state.paginator.begin_page_load(2);
        let fast = state.paginator.begin_page_load(3);
        state.complete_page_load(fast, Ok(catalog.page(3)), 10.0);
        assert_eq!(state.status_message, "Page 3 of 9");

        let status = state.complete_page_load(slow, Err(FetchError::Status(500)), 30.0);

        assert_eq!(status, PageLoadStatus::Stale);
        assert_eq!(state.current_page(), 3);
        assert_eq!(state.status_message, "Page 3 of 9");
    }

    #[test]
    fn test_selection_survives_paging() {
        let catalog = MockCatalog::new(100);
        let mut state = loaded_state(&catalog);
        state.toggle_selection(ArtworkId(2));

        pollster::block_on(state.load_page_with(&catalog, 2));
        assert_eq!(state.first(), 12);
        assert!(!state.is_page_fully_selected());
        state.toggle_current_page();

        let view: Vec<ArtworkId> = state.selected_artworks_view().iter().map(|a| a.id).collect();
        let mut expected = ids([2]);
        expected.extend(ids(13..=24));
        assert_eq!(view, expected);
    }

    #[test]
    fn test_header_toggle_deselects_full_page() {
        let catalog = MockCatalog::new(100);
        let mut state = loaded_state(&catalog);
        state.toggle_selection(ArtworkId(99));

        state.toggle_current_page();
        assert!(state.is_page_fully_selected());

        state.toggle_current_page();
        assert_eq!(selected_ids(&state), ids([99]));
    }

    #[test]
    fn test_remove_from_view() {
        let catalog = MockCatalog::new(100);
        let mut state = loaded_state(&catalog);
        state.toggle_current_page();

        state.remove_selection(ArtworkId(4));

        assert_eq!(state.selected_artworks_view().len(), 11);
        assert!(!state.is_page_fully_selected());
    }
}
