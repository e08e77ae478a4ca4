//! Path smoothing and simplification.
//!
//! Pathfinder output moves one tile at a time. For display, or for movers
//! that travel in straight lines, the path can be reduced to the waypoints
//! where it actually has to turn.
//!
//! # Example
//!
//! ```
//! use tactics_pathfind::astar::find_path;
//! use tactics_pathfind::smooth::smooth_path;
//! use tactics_types::PathfindingOptions;
//! use grid_spatial::{GridPoint, TileSet};
//!
//! let walls = TileSet::new();
//! let path = find_path(
//!     GridPoint::new(0, 0),
//!     GridPoint::new(10, 0),
//!     &walls,
//!     &PathfindingOptions::default(),
//! )
//! .unwrap()
//! .unwrap();
//! assert_eq!(path.len(), 11);
//!
//! let smoothed = smooth_path(path.points(), &walls);
//! assert_eq!(smoothed, vec![GridPoint::new(0, 0), GridPoint::new(10, 0)]);
//! ```

use grid_spatial::{GridPoint, TileSet, has_line_of_sight};
use tactics_types::GridPath;

/// A path smoother that removes waypoints using line-of-sight checks.
///
/// The smoother is greedy: from the current waypoint it scans the remaining
/// waypoints from the far end backwards and jumps to the first one it can
/// see, skipping everything in between.
///
/// # Example
///
/// ```
/// use tactics_pathfind::smooth::PathSmoother;
/// use tactics_types::GridPath;
/// use grid_spatial::{GridPoint, TileSet};
///
/// let mut walls = TileSet::new();
/// walls.insert(GridPoint::new(1, 1));
///
/// let smoother = PathSmoother::new(&walls);
/// let path = GridPath::new(vec![
///     GridPoint::new(0, 0),
///     GridPoint::new(1, 0),
///     GridPoint::new(2, 1),
///     GridPoint::new(2, 2),
/// ]);
///
/// let smoothed = smoother.smooth(&path);
/// assert!(smoothed.len() < path.len());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PathSmoother<'a> {
    /// Tiles that block sight between waypoints.
    obstacles: &'a TileSet,
}

impl<'a> PathSmoother<'a> {
    /// Creates a smoother over `obstacles`.
    #[must_use]
    pub const fn new(obstacles: &'a TileSet) -> Self {
        Self { obstacles }
    }

    /// Checks whether two waypoints can be joined by a straight run.
    #[must_use]
    pub fn has_line_of_sight(&self, from: GridPoint, to: GridPoint) -> bool {
        has_line_of_sight(from, to, self.obstacles)
    }

    /// Smooths a sequence of waypoints.
    ///
    /// Sequences of two or fewer points are returned unchanged. The output
    /// keeps the first and last points and never grows.
    #[must_use]
    pub fn smooth_points(&self, points: &[GridPoint]) -> Vec<GridPoint> {
        if points.len() <= 2 {
            return points.to_vec();
        }

        let last = points.len() - 1;
        let mut smoothed = vec![points[0]];
        let mut current = 0;

        while current < last {
            let anchor = points[current];
            let next = ((current + 2)..=last)
                .rev()
                .find(|&i| self.has_line_of_sight(anchor, points[i]))
                .unwrap_or(current + 1);

            smoothed.push(points[next]);
            current = next;
        }

        smoothed
    }

    /// Smooths a [`GridPath`].
    #[must_use]
    pub fn smooth(&self, path: &GridPath) -> GridPath {
        GridPath::new(self.smooth_points(path.points()))
    }
}

/// Smooths a waypoint sequence against `obstacles`.
///
/// See [`PathSmoother`] for the algorithm.
#[must_use]
pub fn smooth_path(path: &[GridPoint], obstacles: &TileSet) -> Vec<GridPoint> {
    PathSmoother::new(obstacles).smooth_points(path)
}

/// Drops waypoints where the path continues in the same direction.
///
/// Unlike [`smooth_path`] this never cuts corners, so it is safe without an
/// obstacle set. Directions are compared after reducing each step by the
/// greatest common divisor of its components, so `(2, 0)` and `(1, 0)`
/// count as the same heading.
///
/// # Example
///
/// ```
/// use tactics_pathfind::smooth::remove_collinear;
/// use grid_spatial::GridPoint;
///
/// let path = [
///     GridPoint::new(0, 0),
///     GridPoint::new(1, 0),
///     GridPoint::new(2, 0),
///     GridPoint::new(3, 1),
///     GridPoint::new(4, 2),
/// ];
/// assert_eq!(
///     remove_collinear(&path),
///     vec![GridPoint::new(0, 0), GridPoint::new(2, 0), GridPoint::new(4, 2)],
/// );
/// ```
#[must_use]
pub fn remove_collinear(path: &[GridPoint]) -> Vec<GridPoint> {
    if path.len() <= 2 {
        return path.to_vec();
    }

    let mut result = vec![path[0]];
    for window in path.windows(3) {
        let incoming = heading(window[0], window[1]);
        let outgoing = heading(window[1], window[2]);
        if incoming != outgoing {
            result.push(window[1]);
        }
    }
    result.push(path[path.len() - 1]);
    result
}

/// Step direction reduced to lowest terms. Missing `z` reads as 0.
fn heading(from: GridPoint, to: GridPoint) -> [i64; 3] {
    let [fx, fy, fz] = from.as_array().map(i64::from);
    let [tx, ty, tz] = to.as_array().map(i64::from);
    let delta = [tx - fx, ty - fy, tz - fz];

    let divisor = delta.iter().fold(0, |acc, &d| gcd(acc, d.abs()));
    if divisor == 0 {
        return delta;
    }
    delta.map(|d| d / divisor)
}

const fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}
