//! Page cache and paginator.
//!
//! Owns the current page, its records, the catalog's reported total, the
//! in-flight flag, and the accumulating [`ArtworkCache`]. Page loads are
//! split into a begin/complete pair so the egui update loop can issue the
//! fetch on a channel and apply the completion on a later frame; the async
//! `load_page` / `load_first_n` methods compose the same steps.
//!
//! ## Request sequencing
//!
//! Every `begin_page_load` bumps a generation counter. A completion for an
//! older generation still feeds the cache, but never replaces the current
//! page, so a slow response cannot overwrite a newer one.

use super::cache::ArtworkCache;
use crate::catalog::{
    Artwork, ArtworkPage, BulkFetchError, CatalogClient, FetchError, PAGE_SIZE,
};
use futures_util::future::try_join_all;
use futures_util::TryFutureExt;

/// Identifies one issued page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-indexed page number
    pub page: u32,
    /// Sequence number; higher is newer
    pub generation: u64,
}

/// What a page completion did to the paginator.
#[derive(Debug, Clone, PartialEq)]
pub enum PageLoadStatus {
    /// Became the current page.
    Applied,
    /// A newer request was issued first; records (if any) were cached only.
    Stale,
    /// The fetch failed; prior state was kept.
    Failed(FetchError),
}

/// Every page fetched for a "first N records" batch, in page order.
#[derive(Debug, Clone, Default)]
pub struct BulkFetch {
    /// Number of records requested
    pub count: usize,
    pub pages: Vec<ArtworkPage>,
}

impl BulkFetch {
    /// All fetched records, including those past `count`.
    pub fn records(&self) -> impl Iterator<Item = &Artwork> {
        self.pages.iter().flat_map(|page| page.data.iter())
    }

    /// The first `count` records in page order.
    pub fn first_n(&self) -> Vec<Artwork> {
        self.records().take(self.count).cloned().collect()
    }
}

/// Number of pages covering the first `count` records.
pub fn pages_needed(count: usize) -> u32 {
    count.div_ceil(PAGE_SIZE) as u32
}

/// Fetches pages `1..=pages_needed(count)` concurrently.
///
/// All-or-nothing: the first failing page fails the batch.
pub async fn fetch_first_n<C: CatalogClient>(
    client: &C,
    count: usize,
) -> Result<BulkFetch, BulkFetchError> {
    let fetches = (1..=pages_needed(count)).map(|page| {
        client
            .fetch_page(page)
            .map_err(move |source| BulkFetchError { page, source })
    });

    let pages = try_join_all(fetches).await?;
    Ok(BulkFetch { count, pages })
}

/// Catalog state: current page view plus the record cache.
#[derive(Debug)]
pub struct Paginator {
    current_page: u32,
    records: Vec<Artwork>,
    total_records: u64,
    loading: bool,
    cache: ArtworkCache,
    latest_generation: u64,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new()
    }
}

impl Paginator {
    pub fn new() -> Self {
        Self {
            current_page: 1,
            records: Vec::new(),
            total_records: 0,
            loading: false,
            cache: ArtworkCache::new(),
            latest_generation: 0,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Records of the current page, in catalog order.
    pub fn records(&self) -> &[Artwork] {
        &self.records
    }

    /// Total reported by the catalog on the last applied page load.
    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    /// True while the most recently issued page load is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn cache(&self) -> &ArtworkCache {
        &self.cache
    }

    /// Zero-based offset of the first record on the current page.
    pub fn first(&self) -> u64 {
        (self.current_page.max(1) as u64 - 1) * PAGE_SIZE as u64
    }

    pub fn page_count(&self) -> u32 {
        self.total_records.div_ceil(PAGE_SIZE as u64) as u32
    }

    /// Marks a load of `page` as in flight.
    ///
    /// Current records and total stay visible until the completion arrives.
    /// Page 0 is treated as page 1.
    pub fn begin_page_load(&mut self, page: u32) -> PageRequest {
        self.latest_generation += 1;
        self.loading = true;

        let request = PageRequest {
            page: page.max(1),
            generation: self.latest_generation,
        };
        log::info!(
            "Loading artworks page {} (request #{})",
            request.page,
            request.generation
        );
        request
    }

    /// Applies the completion of a previously issued page load.
    pub fn complete_page_load(
        &mut self,
        request: PageRequest,
        result: Result<ArtworkPage, FetchError>,
    ) -> PageLoadStatus {
        let is_latest = request.generation == self.latest_generation;
        if is_latest {
            self.loading = false;
        }

        match result {
            Ok(page) => {
                self.cache.upsert(&page.data);

                if !is_latest {
                    log::debug!(
                        "Discarding stale response for page {} (request #{}, latest #{})",
                        request.page,
                        request.generation,
                        self.latest_generation
                    );
                    return PageLoadStatus::Stale;
                }

                let pagination = &page.pagination;
                log::info!(
                    "Loaded page {}: {} artwork(s), {} total",
                    request.page,
                    page.data.len(),
                    pagination.total
                );
                log::debug!(
                    "Catalog reports page {} of {} (offset {}, limit {})",
                    pagination.current_page,
                    pagination.total_pages,
                    pagination.offset,
                    pagination.limit
                );
                self.current_page = request.page;
                self.total_records = page.pagination.total;
                self.records = page.data;
                PageLoadStatus::Applied
            }
            Err(e) if !is_latest => {
                log::debug!(
                    "Ignoring stale failure for page {} (request #{}, latest #{}): {}",
                    request.page,
                    request.generation,
                    self.latest_generation,
                    e
                );
                PageLoadStatus::Stale
            }
            Err(e) => {
                log::error!("Failed to load artworks page {}: {}", request.page, e);
                PageLoadStatus::Failed(e)
            }
        }
    }

    /// Loads `page` from the catalog and applies the result.
    #[allow(dead_code)] // The UI drives the begin/complete pair through FetchChannel
    pub async fn load_page<C: CatalogClient>(&mut self, client: &C, page: u32) -> PageLoadStatus {
        let request = self.begin_page_load(page);
        let result = client.fetch_page(request.page).await;
        self.complete_page_load(request, result)
    }

    /// Caches every record of a completed batch and returns the first `count`.
    pub fn absorb_bulk(&mut self, fetch: BulkFetch) -> Vec<Artwork> {
        self.cache.upsert(fetch.records());
        fetch.first_n()
    }

    /// Fetches the first `count` records across pages.
    ///
    /// Returns an empty vector if any page of the batch fails.
    #[allow(dead_code)] // The UI drives fetch_first_n/absorb_bulk through FetchChannel
    pub async fn load_first_n<C: CatalogClient>(
        &mut self,
        client: &C,
        count: usize,
    ) -> Vec<Artwork> {
        match fetch_first_n(client, count).await {
            Ok(fetch) => self.absorb_bulk(fetch),
            Err(e) => {
                log::error!("Failed to fetch multiple pages: {}", e);
                Vec::new()
            }
        }
    }
}
