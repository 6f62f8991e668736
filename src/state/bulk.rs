//! Busy state for "select first N rows" requests.

/// Clamps a requested row count to `[1, total_records]`.
///
/// Returns `None` when the catalog reports no records.
pub fn clamp_bulk_count(requested: usize, total_records: u64) -> Option<usize> {
    if total_records == 0 {
        return None;
    }
    let max = usize::try_from(total_records).unwrap_or(usize::MAX);
    Some(requested.clamp(1, max))
}

/// State of the bulk-selection flow, separate from per-page loading.
#[derive(Default, Debug)]
pub struct BulkSelectState {
    in_progress: bool,
    /// Clamped count waiting to be dispatched by the update loop
    pending: Option<usize>,
}

impl BulkSelectState {
    pub fn in_progress(&self) -> bool {
        self.in_progress
    }

    /// Enters the busy state for a clamped `count`.
    ///
    /// Returns false if a bulk selection is already running.
    pub fn begin(&mut self, count: usize) -> bool {
        if self.in_progress {
            return false;
        }
        self.in_progress = true;
        self.pending = Some(count);
        true
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Takes the count that still needs a fetch issued.
    pub fn take_pending(&mut self) -> Option<usize> {
        self.pending.take()
    }

    /// Leaves the busy state.
    pub fn finish(&mut self) {
        self.in_progress = false;
        self.pending = None;
    }
}

/// Contents of the bulk-select popup.
#[derive(Default, Debug)]
pub struct BulkInput {
    /// Whether the popup is shown
    pub open: bool,

    /// Requested row count; 0 means nothing entered yet
    pub count: usize,
}
