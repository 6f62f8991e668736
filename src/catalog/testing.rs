//! Test double for the remote catalog.

use super::client::CatalogClient;
use super::config::PAGE_SIZE;
use super::error::FetchError;
use super::types::{Artwork, ArtworkId, ArtworkPage, Pagination};
use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// In-memory catalog whose records have ids `1..=total` in page order.
///
/// Records every page it is asked for and fails the pages it was told to.
pub struct MockCatalog {
    total: u64,
    failing_pages: HashSet<u32>,
    requested: RefCell<Vec<u32>>,
    yield_before_response: bool,
    in_flight: Cell<usize>,
    max_in_flight: Cell<usize>,
}

impl MockCatalog {
    pub fn new(total: u64) -> Self {
        Self {
            total,
            failing_pages: HashSet::new(),
            requested: RefCell::new(Vec::new()),
            yield_before_response: false,
            in_flight: Cell::new(0),
            max_in_flight: Cell::new(0),
        }
    }

    /// Makes every fetch return `Pending` once before it resolves.
    pub fn yielding(mut self) -> Self {
        self.yield_before_response = true;
        self
    }

    /// Highest number of fetches started but not yet finished at once.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.get()
    }

    /// Makes every fetch of `page` fail with a transport error.
    pub fn failing_on(mut self, page: u32) -> Self {
        self.failing_pages.insert(page);
        self
    }

    /// Pages fetched so far, in call order.
    pub fn requested_pages(&self) -> Vec<u32> {
        self.requested.borrow().clone()
    }

    /// The page this catalog serves for `page`, without recording a request.
    pub fn page(&self, page: u32) -> ArtworkPage {
        let size = PAGE_SIZE as u64;
        let first = (page.max(1) as u64 - 1) * size + 1;
        let last = (first + size - 1).min(self.total);

        ArtworkPage {
            pagination: Pagination {
                total: self.total,
                limit: PAGE_SIZE as u32,
                offset: first - 1,
                total_pages: self.total.div_ceil(size) as u32,
                current_page: page,
            },
            data: (first..=last).map(artwork).collect(),
        }
    }
}

impl CatalogClient for MockCatalog {
    async fn fetch_page(&self, page: u32) -> Result<ArtworkPage, FetchError> {
        self.requested.borrow_mut().push(page);

        let in_flight = self.in_flight.get() + 1;
        self.in_flight.set(in_flight);
        self.max_in_flight.set(self.max_in_flight.get().max(in_flight));
        if self.yield_before_response {
            YieldOnce::default().await;
        }
        self.in_flight.set(self.in_flight.get() - 1);

        if self.failing_pages.contains(&page) {
            return Err(FetchError::Transport("simulated transport error".to_string()));
        }
        Ok(self.page(page))
    }
}

/// Future that is pending on its first poll and ready on the second.
#[derive(Default)]
struct YieldOnce {
    yielded: bool,
}

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            return Poll::Ready(());
        }
        self.yielded = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

pub fn artwork(id: u64) -> Artwork {
    Artwork {
        id: ArtworkId(id),
        title: Some(format!("Artwork {}", id)),
        ..Default::default()
    }
}

pub fn ids(range: impl IntoIterator<Item = u64>) -> Vec<ArtworkId> {
    range.into_iter().map(ArtworkId).collect()
}
