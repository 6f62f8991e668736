//! Session-lifetime cache of every artwork observed from the catalog.

use crate::catalog::{Artwork, ArtworkId};
use std::collections::HashMap;

/// Accumulating id → record cache.
///
/// Entries are only inserted or overwritten, never removed. The version
/// counter advances whenever an upsert changes the contents, so derived
/// views can tell when they are stale.
#[derive(Default, Debug, Clone)]
pub struct ArtworkCache {
    records: HashMap<ArtworkId, Artwork>,
    version: u64,
}

impl ArtworkCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites each record by id.
    ///
    /// Idempotent: re-inserting identical records leaves the version unchanged.
    /// Returns the number of records that were new or changed.
    pub fn upsert<'a>(&mut self, records: impl IntoIterator<Item = &'a Artwork>) -> usize {
        let mut changed = 0;
        for record in records {
            if self.records.get(&record.id) != Some(record) {
                self.records.insert(record.id, record.clone());
                changed += 1;
            }
        }

        if changed > 0 {
            self.version += 1;
            log::debug!(
                "Cached {} new or updated artwork(s), {} total",
                changed,
                self.records.len()
            );
        }
        changed
    }

    pub fn get(&self, id: &ArtworkId) -> Option<&Artwork> {
        self.records.get(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Monotonic content version.
    pub fn version(&self) -> u64 {
        self.version
    }
}
