//! Terrain movement cost multipliers.
//!
//! A terrain cost is a multiplier applied to the cost of stepping *into* a
//! tile: `1.0` is normal ground, `2.0` difficult terrain, and
//! [`f64::INFINITY`] makes a tile impassable without listing it as an
//! obstacle.
//!
//! # Example
//!
//! ```
//! use tactics_types::{TerrainCostMap, TerrainCosts};
//! use grid_spatial::GridPoint;
//!
//! let mut swamp = TerrainCosts::new();
//! swamp.set(GridPoint::new(2, 0), TerrainCosts::DIFFICULT);
//!
//! assert!((swamp.cost_of(GridPoint::new(2, 0)) - 2.0).abs() < 1e-10);
//! assert!((swamp.cost_of(GridPoint::new(3, 0)) - 1.0).abs() < 1e-10);
//!
//! // Any closure works too
//! let ridge = |p: GridPoint| if p.y > 5 { 3.0 } else { 1.0 };
//! assert!((ridge.cost_of(GridPoint::new(0, 6)) - 3.0).abs() < 1e-10);
//! ```

use std::collections::HashMap;

use grid_spatial::GridPoint;

/// Source of per-tile movement cost multipliers.
pub trait TerrainCostMap {
    /// Returns the multiplier for entering `point`.
    fn cost_of(&self, point: GridPoint) -> f64;
}

impl<F> TerrainCostMap for F
where
    F: Fn(GridPoint) -> f64,
{
    fn cost_of(&self, point: GridPoint) -> f64 {
        self(point)
    }
}

/// Map-backed terrain costs with a fallback for unlisted tiles.
///
/// Lookups use the exact tile key, so a 2D entry does not cover the 3D
/// tile at elevation 0.
///
/// With the `serde` feature the entries serialize as a list of
/// `[point, cost]` pairs sorted by point, since formats like JSON only
/// allow string map keys.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerrainCosts {
    /// Explicit per-tile multipliers.
    #[cfg_attr(feature = "serde", serde(with = "cost_entries"))]
    costs: HashMap<GridPoint, f64>,
    /// Multiplier for tiles without an entry.
    default_cost: f64,
}

impl TerrainCosts {
    /// Normal ground.
    pub const NORMAL: f64 = 1.0;
    /// Difficult terrain, twice the normal cost.
    pub const DIFFICULT: f64 = 2.0;
    /// Impassable terrain.
    pub const IMPASSABLE: f64 = f64::INFINITY;

    /// Creates an empty map where every tile costs [`Self::NORMAL`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            costs: HashMap::new(),
            default_cost: Self::NORMAL,
        }
    }

    /// Sets the multiplier used for tiles without an entry.
    #[must_use]
    pub const fn with_default_cost(mut self, cost: f64) -> Self {
        self.default_cost = cost;
        self
    }

    /// Sets the multiplier for one tile, returning the previous entry.
    pub fn set(&mut self, point: GridPoint, cost: f64) -> Option<f64> {
        self.costs.insert(point, cost)
    }

    /// Returns the explicit entry for a tile, if any.
    #[must_use]
    pub fn get(&self, point: GridPoint) -> Option<f64> {
        self.costs.get(&point).copied()
    }

    /// Removes the entry for a tile.
    pub fn remove(&mut self, point: GridPoint) -> Option<f64> {
        self.costs.remove(&point)
    }

    /// Returns the fallback multiplier.
    #[must_use]
    pub const fn default_cost(&self) -> f64 {
        self.default_cost
    }

    /// Number of explicit entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    /// Returns `true` if there are no explicit entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}

impl Default for TerrainCosts {
    fn default() -> Self {
        Self::new()
    }
}

impl TerrainCostMap for TerrainCosts {
    fn cost_of(&self, point: GridPoint) -> f64 {
        self.get(point).unwrap_or(self.default_cost)
    }
}

impl FromIterator<(GridPoint, f64)> for TerrainCosts {
    fn from_iter<I: IntoIterator<Item = (GridPoint, f64)>>(iter: I) -> Self {
        Self {
            costs: iter.into_iter().collect(),
            default_cost: Self::NORMAL,
        }
    }
}

#[cfg(feature = "serde")]
mod cost_entries {
    use std::collections::HashMap;

    use grid_spatial::GridPoint;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(
        costs: &HashMap<GridPoint, f64>,
        s: S,
    ) -> Result<S::Ok, S::Error> {
        let mut entries: Vec<(GridPoint, f64)> =
            costs.iter().map(|(point, cost)| (*point, *cost)).collect();
        entries.sort_by_key(|(point, _)| *point);
        entries.serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<HashMap<GridPoint, f64>, D::Error> {
        let entries = Vec::<(GridPoint, f64)>::deserialize(d)?;
        Ok(entries.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults_to_normal() {
        let costs = TerrainCosts::new();
        assert!(costs.is_empty());
        assert_relative_eq!(costs.cost_of(GridPoint::new(4, 4)), 1.0);
    }

    #[test]
    fn test_set_and_lookup() {
        let mut costs = TerrainCosts::new();
        assert_eq!(costs.set(GridPoint::new(1, 1), 2.0), None);
        assert_eq!(costs.set(GridPoint::new(1, 1), 3.0), Some(2.0));
        assert_relative_eq!(costs.cost_of(GridPoint::new(1, 1)), 3.0);
        assert_eq!(costs.len(), 1);
        assert_eq!(costs.remove(GridPoint::new(1, 1)), Some(3.0));
        assert!(costs.is_empty());
    }

    #[test]
    fn test_exact_key_lookup() {
        let costs: TerrainCosts = [(GridPoint::new(0, 0), TerrainCosts::IMPASSABLE)]
            .into_iter()
            .collect();
        assert!(costs.cost_of(GridPoint::new(0, 0)).is_infinite());
        assert_relative_eq!(costs.cost_of(GridPoint::new_3d(0, 0, 0)), 1.0);
    }

    #[test]
    fn test_custom_default() {
        let costs = TerrainCosts::new().with_default_cost(4.0);
        assert_relative_eq!(costs.cost_of(GridPoint::new(9, 9)), 4.0);
        assert_relative_eq!(costs.default_cost(), 4.0);
    }

    #[test]
    fn test_closure_as_cost_map() {
        let map = |p: GridPoint| f64::from(p.x.abs()) + 1.0;
        let dyn_map: &dyn TerrainCostMap = &map;
        assert_relative_eq!(dyn_map.cost_of(GridPoint::new(-2, 0)), 3.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_serde_round_trip() {
        let mut costs = TerrainCosts::new().with_default_cost(1.5);
        costs.set(GridPoint::new(1, 2), TerrainCosts::DIFFICULT);
        costs.set(GridPoint::new_3d(-4, 0, 3), 3.0);

        let json = serde_json::to_string(&costs).unwrap();
        assert!(json.contains("default_cost"));

        let parsed: TerrainCosts = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, costs);
        assert_relative_eq!(parsed.cost_of(GridPoint::new(1, 2)), 2.0);
        assert_relative_eq!(parsed.cost_of(GridPoint::new(9, 9)), 1.5);
    }

    #[cfg(feature = "serde")]
    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_serde_entries_are_ordered() {
        let costs: TerrainCosts = [
            (GridPoint::new(5, 0), 2.0),
            (GridPoint::new(-1, 3), 4.0),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&costs).unwrap();
        assert_eq!(
            json,
            r#"{"costs":[[{"x":-1,"y":3},4.0],[{"x":5,"y":0},2.0]],"default_cost":1.0}"#
        );
    }
}
