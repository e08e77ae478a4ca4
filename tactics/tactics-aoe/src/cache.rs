//! Memoised circle offsets.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use grid_spatial::GridPoint;
use tracing::debug;

use crate::circle::circle_offsets;

/// Thread-safe table of circle offsets keyed by whole-number radius.
///
/// The table only holds derived data, so it can be cleared at any time and
/// a poisoned lock is recovered rather than propagated.
///
/// # Example
///
/// ```
/// use tactics_aoe::CircleCache;
///
/// let cache = CircleCache::new();
/// let offsets = cache.get_or_compute(3);
/// assert_eq!(cache.len(), 1);
///
/// // Second lookup shares the stored list
/// assert!(std::sync::Arc::ptr_eq(&offsets, &cache.get_or_compute(3)));
///
/// cache.clear();
/// assert!(cache.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct CircleCache {
    offsets: RwLock<HashMap<u32, Arc<[GridPoint]>>>,
}

impl CircleCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the offsets for `radius`, computing and storing them on first use.
    pub fn get_or_compute(&self, radius: u32) -> Arc<[GridPoint]> {
        {
            let table = self.offsets.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(offsets) = table.get(&radius) {
                return Arc::clone(offsets);
            }
        }

        let mut table = self.offsets.write().unwrap_or_else(PoisonError::into_inner);
        // Another caller may have filled it between the two locks
        Arc::clone(table.entry(radius).or_insert_with(|| {
            let offsets: Arc<[GridPoint]> = circle_offsets(radius).into();
            debug!(radius, tiles = offsets.len(), "Cached circle offsets");
            offsets
        }))
    }

    /// Returns `true` if offsets for `radius` are stored.
    #[must_use]
    pub fn contains(&self, radius: u32) -> bool {
        self.offsets
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&radius)
    }

    /// Number of stored radii.
    #[must_use]
    pub fn len(&self) -> usize {
        self.offsets
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every stored radius.
    pub fn clear(&self) {
        self.offsets
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
