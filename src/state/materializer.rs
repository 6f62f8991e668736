//! Hydrated view of the current selection.

use super::cache::ArtworkCache;
use super::selection::SelectionManager;
use crate::catalog::Artwork;

/// Looks up every selected id in `cache`, in selection order.
///
/// Ids without a cached record are skipped.
pub fn materialize(selection: &SelectionManager, cache: &ArtworkCache) -> Vec<Artwork> {
    selection
        .ids()
        .filter_map(|id| cache.get(&id).cloned())
        .collect()
}

/// Memoized [`materialize`] keyed on the selection and cache versions.
#[derive(Default)]
pub struct SelectedArtworksView {
    key: Option<(u64, u64)>,
    artworks: Vec<Artwork>,
}

impl SelectedArtworksView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the hydrated selection, recomputing if either input changed.
    pub fn get(&mut self, selection: &SelectionManager, cache: &ArtworkCache) -> &[Artwork] {
        let key = (selection.version(), cache.version());
        if self.key != Some(key) {
            self.artworks = materialize(selection, cache);
            self.key = Some(key);
        }
        &self.artworks
    }
}
