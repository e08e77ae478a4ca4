//! Obstacle and opacity sets.

use std::collections::HashSet;

use crate::error::InvalidPointError;
use crate::point::GridPoint;

/// A set of tile keys, one per blocked or opaque tile.
///
/// The same type serves "impassable for movement" and "blocks sight". The
/// engine never asks why a tile is in the set; callers pass whichever set
/// matches the question.
///
/// # Example
///
/// ```
/// use grid_spatial::{GridPoint, TileSet};
///
/// let mut walls = TileSet::new();
/// walls.insert(GridPoint::new(2, 0));
///
/// assert!(walls.contains(GridPoint::new(2, 0)));
/// assert!(!walls.contains(GridPoint::new_3d(2, 0, 0)));
///
/// let parsed = TileSet::from_keys(["2,0", "3,0"]).unwrap();
/// assert_eq!(parsed.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TileSet {
    tiles: HashSet<GridPoint>,
}

impl TileSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty set with room for `capacity` tiles.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tiles: HashSet::with_capacity(capacity),
        }
    }

    /// Builds a set from legacy `"x,y"` / `"x,y,z"` string keys.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPointError::InvalidKey`] for the first malformed key.
    pub fn from_keys<I, S>(keys: I) -> Result<Self, InvalidPointError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        keys.into_iter()
            .map(|key| key.as_ref().parse::<GridPoint>())
            .collect()
    }

    /// Adds a tile. Returns `true` if it was not already present.
    pub fn insert(&mut self, tile: GridPoint) -> bool {
        self.tiles.insert(tile)
    }

    /// Removes a tile. Returns `true` if it was present.
    pub fn remove(&mut self, tile: GridPoint) -> bool {
        self.tiles.remove(&tile)
    }

    /// Checks whether a tile key is in the set.
    #[must_use]
    pub fn contains(&self, tile: GridPoint) -> bool {
        self.tiles.contains(&tile)
    }

    /// Number of tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Removes every tile.
    pub fn clear(&mut self) {
        self.tiles.clear();
    }

    /// Iterates over the tiles in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &GridPoint> {
        self.tiles.iter()
    }
}

impl FromIterator<GridPoint> for TileSet {
    fn from_iter<I: IntoIterator<Item = GridPoint>>(iter: I) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}

impl Extend<GridPoint> for TileSet {
    fn extend<I: IntoIterator<Item = GridPoint>>(&mut self, iter: I) {
        self.tiles.extend(iter);
    }
}

impl From<HashSet<GridPoint>> for TileSet {
    fn from(tiles: HashSet<GridPoint>) -> Self {
        Self { tiles }
    }
}

impl<'a> IntoIterator for &'a TileSet {
    type Item = &'a GridPoint;
    type IntoIter = std::collections::hash_set::Iter<'a, GridPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove() {
        let mut set = TileSet::new();
        assert!(set.is_empty());
        assert!(set.insert(GridPoint::new(1, 1)));
        assert!(!set.insert(GridPoint::new(1, 1)));
        assert_eq!(set.len(), 1);
        assert!(set.remove(GridPoint::new(1, 1)));
        assert!(set.is_empty());
    }

    #[test]
    fn test_from_keys() {
        let set = TileSet::from_keys(vec!["0,0", "1,2,3"]).unwrap();
        assert!(set.contains(GridPoint::new(0, 0)));
        assert!(set.contains(GridPoint::new_3d(1, 2, 3)));
    }

    #[test]
    fn test_from_keys_rejects_bad_key() {
        let result = TileSet::from_keys(["0,0", "oops"]);
        assert!(matches!(result, Err(InvalidPointError::InvalidKey(k)) if k == "oops"));
    }

    #[test]
    fn test_collect_and_extend() {
        let mut set: TileSet = (0..3).map(|x| GridPoint::new(x, 0)).collect();
        set.extend([GridPoint::new(9, 9)]);
        assert_eq!(set.len(), 4);
        assert_eq!((&set).into_iter().count(), 4);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let walls: TileSet = [GridPoint::new(0, 0), GridPoint::new(2, 5), GridPoint::new_3d(1, 1, 1)]
            .into_iter()
            .collect();

        let json = serde_json::to_string(&walls).unwrap();
        let parsed: TileSet = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, walls);
        assert!(parsed.contains(GridPoint::new_3d(1, 1, 1)));
        assert!(!parsed.contains(GridPoint::new(1, 1)));
    }
}
