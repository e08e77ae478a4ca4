//! Neighbour generation for grid pathfinding.
//!
//! # Example
//!
//! ```
//! use tactics_pathfind::neighbors::NeighborGenerator;
//! use grid_spatial::{GridPoint, TileSet};
//!
//! let mut walls = TileSet::new();
//! walls.insert(GridPoint::new(1, 0));
//!
//! let generator = NeighborGenerator::new(&walls);
//! let neighbors: Vec<_> = generator.neighbors(GridPoint::new(0, 0)).collect();
//! assert_eq!(neighbors.len(), 7);  // 8 - 1 blocked
//! ```

use grid_spatial::{GridBounds, GridPoint, TileSet};

/// Generates passable neighbours of a tile.
///
/// Planar generators yield the 8 surrounding tiles at the same elevation;
/// 3D generators yield all 26, each carrying `z`. Obstacles and, when set,
/// tiles outside the bounds are filtered out.
#[derive(Debug, Clone, Copy)]
pub struct NeighborGenerator<'a> {
    /// Impassable tiles.
    obstacles: &'a TileSet,
    /// Optional search area.
    bounds: Option<&'a GridBounds>,
    /// Whether to use 26-connectivity.
    three_d: bool,
}

impl<'a> NeighborGenerator<'a> {
    /// Creates a planar generator with no bounds.
    #[must_use]
    pub const fn new(obstacles: &'a TileSet) -> Self {
        Self {
            obstacles,
            bounds: None,
            three_d: false,
        }
    }

    /// Sets whether to generate 26 neighbours in 3D.
    #[must_use]
    pub const fn with_3d(mut self, three_d: bool) -> Self {
        self.three_d = three_d;
        self
    }

    /// Restricts neighbours to `bounds`.
    #[must_use]
    pub const fn with_bounds(mut self, bounds: Option<&'a GridBounds>) -> Self {
        self.bounds = bounds;
        self
    }

    /// Returns the number of candidate neighbours per tile.
    #[must_use]
    pub const fn neighbor_count(&self) -> usize {
        if self.three_d { 26 } else { 8 }
    }

    /// Checks whether a tile can be entered.
    #[must_use]
    pub fn is_passable(&self, point: GridPoint) -> bool {
        !self.obstacles.contains(point) && self.bounds.is_none_or(|bounds| bounds.contains(point))
    }

    /// Returns an iterator over the passable neighbours of `point`.
    ///
    /// # Example
    ///
    /// ```
    /// use tactics_pathfind::neighbors::NeighborGenerator;
    /// use grid_spatial::{GridBounds, GridPoint, TileSet};
    ///
    /// let walls = TileSet::new();
    /// let bounds = GridBounds::new(GridPoint::new(0, 0), GridPoint::new(9, 9));
    /// let generator = NeighborGenerator::new(&walls).with_bounds(Some(&bounds));
    ///
    /// // A corner tile has only 3 neighbours inside the bounds
    /// assert_eq!(generator.neighbors(GridPoint::new(0, 0)).count(), 3);
    /// ```
    pub fn neighbors(&self, point: GridPoint) -> impl Iterator<Item = GridPoint> + '_ {
        let candidates: Box<dyn Iterator<Item = GridPoint>> = if self.three_d {
            Box::new(point.all_neighbors().into_iter())
        } else {
            Box::new(point.planar_neighbors().into_iter())
        };

        candidates.filter(|&n| self.is_passable(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_planar() {
        let walls = TileSet::new();
        let generator = NeighborGenerator::new(&walls);
        assert_eq!(generator.neighbor_count(), 8);
        let neighbors: Vec<_> = generator.neighbors(GridPoint::new(5, 5)).collect();
        assert_eq!(neighbors.len(), 8);
        assert!(neighbors.iter().all(|n| !n.is_3d()));
    }

    #[test]
    fn test_open_3d() {
        let walls = TileSet::new();
        let generator = NeighborGenerator::new(&walls).with_3d(true);
        assert_eq!(generator.neighbor_count(), 26);
        let neighbors: Vec<_> = generator.neighbors(GridPoint::new(0, 0)).collect();
        assert_eq!(neighbors.len(), 26);
        assert!(neighbors.iter().all(|n| n.is_3d()));
    }

    #[test]
    fn test_obstacles_filtered() {
        let walls: TileSet = GridPoint::new(0, 0).planar_neighbors().into_iter().collect();
        let generator = NeighborGenerator::new(&walls);
        assert_eq!(generator.neighbors(GridPoint::new(0, 0)).count(), 0);
        assert!(!generator.is_passable(GridPoint::new(1, 1)));
        assert!(generator.is_passable(GridPoint::new(2, 2)));
    }

    #[test]
    fn test_bounds_filter() {
        let walls = TileSet::new();
        let bounds = GridBounds::new(GridPoint::new(0, 0), GridPoint::new(4, 4));
        let generator = NeighborGenerator::new(&walls).with_bounds(Some(&bounds));
        assert_eq!(generator.neighbors(GridPoint::new(0, 2)).count(), 5);
        assert_eq!(generator.neighbors(GridPoint::new(2, 2)).count(), 8);
    }
}
