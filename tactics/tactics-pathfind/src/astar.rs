//! A* pathfinding on tile grids.
//!
//! # Example
//!
//! ```
//! use tactics_pathfind::astar::GridAStar;
//! use tactics_types::PathfindingOptions;
//! use grid_spatial::{GridPoint, TileSet};
//!
//! // A short wall across x = 2
//! let walls: TileSet = (-3..=3).map(|y| GridPoint::new(2, y)).collect();
//!
//! let pathfinder = GridAStar::new(&walls, PathfindingOptions::default());
//! let path = pathfinder
//!     .find_path(GridPoint::new(0, 0), GridPoint::new(5, 0))
//!     .unwrap()
//!     .expect("path should go around the wall");
//!
//! assert_eq!(path.first(), Some(&GridPoint::new(0, 0)));
//! assert_eq!(path.last(), Some(&GridPoint::new(5, 0)));
//! assert!(path.iter().all(|p| !walls.contains(*p)));
//! ```

use std::collections::{HashMap, HashSet};

use grid_spatial::{GridPoint, InvalidPointError, TileSet, validate};
use tactics_types::{GridPath, PathfindingOptions};
use tracing::debug;

use crate::cost::{edge_cost, heuristic};
use crate::neighbors::NeighborGenerator;
use crate::queue::PriorityQueue;

/// Counters collected during one search, reported through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
struct SearchStats {
    /// Open-set extractions, stale entries included.
    iterations: usize,
    /// Tiles whose neighbours were examined.
    expanded: usize,
    /// Inserts for a tile that already had a queued entry.
    duplicates: usize,
}

/// A* pathfinder over a fixed obstacle set.
///
/// The pathfinder borrows its obstacles and options, so one instance can
/// answer many queries against the same board state.
///
/// # Example
///
/// ```
/// use tactics_pathfind::astar::GridAStar;
/// use tactics_types::PathfindingOptions;
/// use grid_spatial::{GridPoint, TileSet};
///
/// let walls = TileSet::new();
/// let pathfinder = GridAStar::new(&walls, PathfindingOptions::default());
///
/// let path = pathfinder
///     .find_path(GridPoint::new(0, 0), GridPoint::new(4, 3))
///     .unwrap()
///     .unwrap();
/// // Uniform diagonals: one step per Chebyshev unit
/// assert_eq!(path.steps(), 4);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GridAStar<'a> {
    /// Impassable tiles.
    obstacles: &'a TileSet,
    /// Search options.
    options: PathfindingOptions<'a>,
}

impl<'a> GridAStar<'a> {
    /// Creates a pathfinder over `obstacles`.
    #[must_use]
    pub const fn new(obstacles: &'a TileSet, options: PathfindingOptions<'a>) -> Self {
        Self { obstacles, options }
    }

    /// Returns the options.
    #[must_use]
    pub const fn options(&self) -> &PathfindingOptions<'a> {
        &self.options
    }

    /// Finds a cheapest path from `start` to `end`.
    ///
    /// Returns `Ok(None)` when `end` is an obstacle, when the open set runs
    /// dry, or when the iteration budget is spent. The start tile itself is
    /// never checked against the obstacles.
    ///
    /// Searches are planar when neither endpoint carries `z`, otherwise
    /// 26-connected with every expanded tile carrying `z`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPointError::OutOfBounds`] if bounds are set and
    /// either endpoint lies outside them.
    pub fn find_path(
        &self,
        start: GridPoint,
        end: GridPoint,
    ) -> Result<Option<GridPath>, InvalidPointError> {
        let bounds = self.options.bounds();
        validate(start, bounds)?;
        validate(end, bounds)?;

        if start.same_tile(end) {
            return Ok(Some(GridPath::from_single(start)));
        }

        if self.obstacles.contains(end) {
            debug!(start = %start, end = %end, "Destination is blocked");
            return Ok(None);
        }

        Ok(self.search(start, end))
    }

    fn search(&self, start: GridPoint, end: GridPoint) -> Option<GridPath> {
        let generator = NeighborGenerator::new(self.obstacles)
            .with_3d(start.is_3d() || end.is_3d())
            .with_bounds(self.options.bounds());
        let max_iterations = self.options.max_iterations();

        let mut open = PriorityQueue::new();
        let mut closed: HashSet<GridPoint> = HashSet::new();
        let mut g_score: HashMap<GridPoint, f64> = HashMap::new();
        let mut came_from: HashMap<GridPoint, GridPoint> = HashMap::new();
        let mut stats = SearchStats::default();

        g_score.insert(start, 0.0);
        open.insert(start, heuristic(start, end));

        while let Some(current) = open.extract_min() {
            stats.iterations += 1;
            if stats.iterations > max_iterations {
                debug!(
                    start = %start,
                    end = %end,
                    iterations = stats.iterations,
                    expanded = stats.expanded,
                    duplicates = stats.duplicates,
                    "Iteration budget exhausted"
                );
                return None;
            }

            if current.same_tile(end) {
                let path = reconstruct_path(&came_from, current);
                debug!(
                    start = %start,
                    end = %end,
                    steps = path.steps(),
                    cost = g_score.get(&current).copied().unwrap_or_default(),
                    iterations = stats.iterations,
                    expanded = stats.expanded,
                    duplicates = stats.duplicates,
                    "Path found"
                );
                return Some(path);
            }

            // Stale duplicate of a tile that was already expanded
            if !closed.insert(current) {
                continue;
            }
            stats.expanded += 1;

            let current_g = g_score.get(&current).copied().unwrap_or(f64::INFINITY);

            for neighbor in generator.neighbors(current) {
                if closed.contains(&neighbor) {
                    continue;
                }
                let Some(step) = edge_cost(current, neighbor, &self.options) else {
                    continue;
                };

                let tentative = current_g + step;
                if g_score.get(&neighbor).is_none_or(|&known| tentative < known) {
                    came_from.insert(neighbor, current);
                    g_score.insert(neighbor, tentative);
                    if open.insert(neighbor, tentative + heuristic(neighbor, end)) {
                        stats.duplicates += 1;
                    }
                }
            }
        }

        debug!(
            start = %start,
            end = %end,
            iterations = stats.iterations,
            expanded = stats.expanded,
            duplicates = stats.duplicates,
            "No path: open set exhausted"
        );
        None
    }
}

/// Walks the predecessor map back from `end` and returns the forward path.
fn reconstruct_path(came_from: &HashMap<GridPoint, GridPoint>, end: GridPoint) -> GridPath {
    let mut points = vec![end];
    let mut current = end;
    while let Some(&previous) = came_from.get(&current) {
        points.push(previous);
        current = previous;
    }
    points.reverse();
    GridPath::new(points)
}

/// Convenience function for one-off point-to-point pathfinding.
///
/// # Errors
///
/// Returns [`InvalidPointError::OutOfBounds`] if bounds are set and either
/// endpoint lies outside them.
///
/// # Example
///
/// ```
/// use tactics_pathfind::astar::find_path;
/// use tactics_types::PathfindingOptions;
/// use grid_spatial::{GridPoint, TileSet};
///
/// let mut walls = TileSet::new();
/// walls.insert(GridPoint::new(3, 0));
///
/// let path = find_path(
///     GridPoint::new(0, 0),
///     GridPoint::new(3, 0),
///     &walls,
///     &PathfindingOptions::default(),
/// );
/// assert_eq!(path, Ok(None));  // the destination is a wall
/// ```
pub fn find_path(
    start: GridPoint,
    end: GridPoint,
    obstacles: &TileSet,
    options: &PathfindingOptions<'_>,
) -> Result<Option<GridPath>, InvalidPointError> {
    GridAStar::new(obstacles, *options).find_path(start, end)
}
