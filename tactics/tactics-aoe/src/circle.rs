//! Circular areas.
//!
//! # Example
//!
//! ```
//! use tactics_aoe::{circle_tiles, CircleCache};
//! use grid_spatial::GridPoint;
//!
//! let cache = CircleCache::new();
//! let blast = circle_tiles(GridPoint::new(10, 10), 2.0, Some(&cache)).unwrap();
//!
//! assert_eq!(blast.len(), 13);
//! assert!(blast.contains(&GridPoint::new(12, 10)));
//! assert!(!blast.contains(&GridPoint::new(12, 12)));
//! ```

use grid_spatial::{GridPoint, euclidean_distance};

use crate::cache::CircleCache;
use crate::error::{InvalidShapeError, check_size};

/// Largest radius whose offsets are memoised.
pub const MAX_CACHED_RADIUS: u32 = 10;

/// Returns the tiles within Euclidean `radius` of `center`.
///
/// For a 2D center with a whole-number radius up to [`MAX_CACHED_RADIUS`]
/// and a cache, the offsets are computed once per radius and translated.
/// Otherwise the bounding square (cube for a 3D center) is scanned directly.
/// Both routes return the same tiles in the same order.
///
/// # Errors
///
/// Returns [`InvalidShapeError::NegativeRadius`] or
/// [`InvalidShapeError::NonFinite`] for an unusable radius.
pub fn circle_tiles(
    center: GridPoint,
    radius: f64,
    cache: Option<&CircleCache>,
) -> Result<Vec<GridPoint>, InvalidShapeError> {
    check_size("radius", radius, InvalidShapeError::NegativeRadius)?;

    if let (Some(cache), Some(whole)) = (cache, cacheable_radius(center, radius)) {
        let offsets = cache.get_or_compute(whole);
        return Ok(offsets.iter().map(|&offset| center + offset).collect());
    }

    Ok(scan_circle(center, radius))
}

/// Offsets from the origin within a whole-number planar radius.
///
/// # Example
///
/// ```
/// use tactics_aoe::circle_offsets;
///
/// assert_eq!(circle_offsets(0).len(), 1);
/// assert_eq!(circle_offsets(1).len(), 5);
/// assert_eq!(circle_offsets(2).len(), 13);
/// ```
#[must_use]
pub fn circle_offsets(radius: u32) -> Vec<GridPoint> {
    scan_circle(GridPoint::origin(), f64::from(radius))
}

/// The radius as a cache key, if this call may use the cache.
fn cacheable_radius(center: GridPoint, radius: f64) -> Option<u32> {
    if center.is_3d() || radius.fract() != 0.0 || radius > f64::from(MAX_CACHED_RADIUS) {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = radius as u32;
    Some(whole)
}

/// Scans the bounding square or cube and keeps tiles within `radius`.
fn scan_circle(center: GridPoint, radius: f64) -> Vec<GridPoint> {
    #[allow(clippy::cast_possible_truncation)]
    let reach = radius.ceil() as i32;
    let depth = if center.is_3d() { reach } else { 0 };

    let mut tiles = Vec::new();
    for dx in -reach..=reach {
        for dy in -reach..=reach {
            for dz in -depth..=depth {
                let tile = center.offset(dx, dy, dz);
                if euclidean_distance(center, tile) <= radius {
                    tiles.push(tile);
                }
            }
        }
    }
    tiles
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn as_set(tiles: &[GridPoint]) -> HashSet<GridPoint> {
        tiles.iter().copied().collect()
    }

    #[test]
    fn test_zero_radius() {
        let center = GridPoint::new(4, -4);
        assert_eq!(circle_tiles(center, 0.0, None).unwrap(), vec![center]);
    }

    #[test]
    fn test_radius_one_is_a_plus() {
        let tiles = circle_tiles(GridPoint::new(0, 0), 1.0, None).unwrap();
        let expected: HashSet<_> = [(0, 0), (1, 0), (-1, 0), (0, 1), (0, -1)]
            .into_iter()
            .map(GridPoint::from)
            .collect();
        assert_eq!(as_set(&tiles), expected);
    }

    #[test]
    fn test_fractional_radius() {
        // sqrt(2) ~ 1.414 includes the diagonals
        let tiles = circle_tiles(GridPoint::new(0, 0), 1.5, None).unwrap();
        assert_eq!(tiles.len(), 9);
    }

    #[test]
    fn test_cached_matches_direct() {
        let cache = CircleCache::new();
        for radius in 0..=MAX_CACHED_RADIUS {
            let center = GridPoint::new(7, -3);
            let r = f64::from(radius);
            assert_eq!(
                circle_tiles(center, r, Some(&cache)).unwrap(),
                circle_tiles(center, r, None).unwrap()
            );
        }
        assert_eq!(cache.len(), usize::try_from(MAX_CACHED_RADIUS).unwrap() + 1);
    }

    #[test]
    fn test_translation_invariance() {
        let cache = CircleCache::new();
        let near = circle_tiles(GridPoint::new(0, 0), 5.0, Some(&cache)).unwrap();
        let far = circle_tiles(GridPoint::new(100, 100), 5.0, Some(&cache)).unwrap();
        assert_eq!(near.len(), far.len());
        for (a, b) in near.iter().zip(&far) {
            assert_eq!(*a + GridPoint::new(100, 100), *b);
        }
    }

    #[test]
    fn test_cache_skipped_when_not_applicable() {
        let cache = CircleCache::new();
        circle_tiles(GridPoint::new(0, 0), 2.5, Some(&cache)).unwrap();
        circle_tiles(GridPoint::new(0, 0), 11.0, Some(&cache)).unwrap();
        circle_tiles(GridPoint::new_3d(0, 0, 0), 3.0, Some(&cache)).unwrap();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_3d_sphere() {
        let center = GridPoint::new_3d(0, 0, 5);
        let tiles = circle_tiles(center, 1.0, None).unwrap();
        assert_eq!(tiles.len(), 7);
        assert!(tiles.contains(&GridPoint::new_3d(0, 0, 6)));
        assert!(tiles.iter().all(|t| t.is_3d()));
    }

    #[test]
    fn test_rejects_bad_radius() {
        assert_eq!(
            circle_tiles(GridPoint::new(0, 0), -2.0, None),
            Err(InvalidShapeError::NegativeRadius(-2.0))
        );
        assert!(circle_tiles(GridPoint::new(0, 0), f64::INFINITY, None).is_err());
    }
}
