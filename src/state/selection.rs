//! Cross-page selection of artwork ids.
//!
//! Operates purely on ids: membership never depends on whether the
//! record has been fetched, and no operation touches the catalog.

use crate::catalog::ArtworkId;
use indexmap::IndexSet;

/// Set of selected artwork ids, kept in insertion order.
#[derive(Default, Debug, Clone)]
pub struct SelectionManager {
    ids: IndexSet<ArtworkId>,
    version: u64,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` if absent, removes it if present.
    pub fn toggle(&mut self, id: ArtworkId) {
        if !self.ids.shift_remove(&id) {
            self.ids.insert(id);
        }
        self.version += 1;
    }

    /// Removes every id in `page_ids` when the page is fully selected,
    /// otherwise adds every one of them. Other members are untouched.
    pub fn toggle_page(&mut self, page_ids: &[ArtworkId], currently_all_selected: bool) {
        for id in page_ids {
            if currently_all_selected {
                self.ids.shift_remove(id);
            } else {
                self.ids.insert(*id);
            }
        }
        self.version += 1;
    }

    /// Removes `id`; returns whether it was selected.
    pub fn remove(&mut self, id: ArtworkId) -> bool {
        let removed = self.ids.shift_remove(&id);
        if removed {
            self.version += 1;
        }
        removed
    }

    /// Discards the prior selection and selects exactly `ids`.
    pub fn replace_all(&mut self, ids: impl IntoIterator<Item = ArtworkId>) {
        self.ids = ids.into_iter().collect();
        self.version += 1;
    }

    pub fn clear(&mut self) {
        if !self.ids.is_empty() {
            self.ids.clear();
            self.version += 1;
        }
    }

    pub fn is_selected(&self, id: ArtworkId) -> bool {
        self.ids.contains(&id)
    }

    /// True if `page_ids` is non-empty and every id is selected.
    pub fn all_selected(&self, page_ids: &[ArtworkId]) -> bool {
        !page_ids.is_empty() && page_ids.iter().all(|id| self.ids.contains(id))
    }

    /// Selected ids in the order they were selected.
    pub fn ids(&self) -> impl Iterator<Item = ArtworkId> + '_ {
        self.ids.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Bumped by every mutating operation.
    pub fn version(&self) -> u64 {
        self.version
    }
}
