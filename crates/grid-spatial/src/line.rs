//! Line tracing and line of sight.
//!
//! Lines are rasterised with Bresenham's algorithm: integer stepping with
//! sign-adjusted steps and error accumulation, so every octant direction
//! produces a gap-free 8-connected run of tiles including both endpoints.
//! When either endpoint carries `z`, the tracer steps along the dominant
//! axis in 3D instead.
//!
//! # Example
//!
//! ```
//! use grid_spatial::{trace_line, has_line_of_sight, GridPoint, TileSet};
//!
//! let line = trace_line(GridPoint::new(0, 0), GridPoint::new(4, 2));
//! assert_eq!(line.first(), Some(&GridPoint::new(0, 0)));
//! assert_eq!(line.last(), Some(&GridPoint::new(4, 2)));
//! assert_eq!(line.len(), 5);
//!
//! let mut walls = TileSet::new();
//! walls.insert(line[2]);
//! assert!(!has_line_of_sight(GridPoint::new(0, 0), GridPoint::new(4, 2), &walls));
//! ```

use crate::point::GridPoint;
use crate::tiles::TileSet;

/// Iterator over the tiles of a Bresenham line, start and end inclusive.
///
/// # Example
///
/// ```
/// use grid_spatial::{BresenhamLine, GridPoint};
///
/// let tiles: Vec<_> = BresenhamLine::new(GridPoint::new(0, 0), GridPoint::new(-3, 0)).collect();
/// assert_eq!(tiles, vec![
///     GridPoint::new(0, 0),
///     GridPoint::new(-1, 0),
///     GridPoint::new(-2, 0),
///     GridPoint::new(-3, 0),
/// ]);
/// ```
#[derive(Debug, Clone)]
pub struct BresenhamLine {
    /// Current tile as `[x, y, z]`.
    current: [i64; 3],
    /// Final tile as `[x, y, z]`.
    end: [i64; 3],
    /// Step direction per axis (-1, 0 or 1).
    step: [i64; 3],
    /// Absolute delta per axis.
    delta: [i64; 3],
    /// Error terms. Planar lines use `error[0]`; 3D lines keep one per axis.
    error: [i64; 3],
    /// Index of the axis with the largest delta (3D only).
    drive: usize,
    /// Whether yielded points carry `z`.
    is_3d: bool,
    /// Set once the end tile has been yielded.
    done: bool,
}

impl BresenhamLine {
    /// Starts a line between two tiles.
    #[must_use]
    pub fn new(start: GridPoint, end: GridPoint) -> Self {
        let is_3d = start.is_3d() || end.is_3d();
        let current = start.as_array().map(i64::from);
        let end = end.as_array().map(i64::from);

        let mut step = [0i64; 3];
        let mut delta = [0i64; 3];
        for axis in 0..3 {
            step[axis] = (end[axis] - current[axis]).signum();
            delta[axis] = (end[axis] - current[axis]).abs();
        }

        let mut drive = 0;
        for axis in 1..3 {
            if delta[axis] > delta[drive] {
                drive = axis;
            }
        }

        let error = if is_3d {
            let mut error = [0i64; 3];
            for axis in 0..3 {
                error[axis] = 2 * delta[axis] - delta[drive];
            }
            error
        } else {
            [delta[0] - delta[1], 0, 0]
        };

        Self {
            current,
            end,
            step,
            delta,
            error,
            drive,
            is_3d,
            done: false,
        }
    }

    fn point(&self) -> GridPoint {
        #[allow(clippy::cast_possible_truncation)]
        let [x, y, z] = self.current.map(|v| v as i32);
        if self.is_3d {
            GridPoint::new_3d(x, y, z)
        } else {
            GridPoint::new(x, y)
        }
    }

    fn advance_planar(&mut self) {
        let doubled = 2 * self.error[0];
        if doubled > -self.delta[1] {
            self.error[0] -= self.delta[1];
            self.current[0] += self.step[0];
        }
        if doubled < self.delta[0] {
            self.error[0] += self.delta[0];
            self.current[1] += self.step[1];
        }
    }

    fn advance_3d(&mut self) {
        let drive = self.drive;
        for axis in 0..3 {
            if axis == drive {
                continue;
            }
            if self.error[axis] >= 0 {
                self.current[axis] += self.step[axis];
                self.error[axis] -= 2 * self.delta[drive];
            }
            self.error[axis] += 2 * self.delta[axis];
        }
        self.current[drive] += self.step[drive];
    }
}

impl Iterator for BresenhamLine {
    type Item = GridPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let point = self.point();

        if self.current == self.end {
            self.done = true;
        } else if self.is_3d {
            self.advance_3d();
        } else {
            self.advance_planar();
        }

        Some(point)
    }
}

/// Traces the tiles between two points, both endpoints included.
#[must_use]
pub fn trace_line(start: GridPoint, end: GridPoint) -> Vec<GridPoint> {
    BresenhamLine::new(start, end).collect()
}

/// Returns the first interior tile on the line that is in `obstacles`.
///
/// The endpoints themselves never block.
#[must_use]
pub fn first_blocker(start: GridPoint, end: GridPoint, obstacles: &TileSet) -> Option<GridPoint> {
    BresenhamLine::new(start, end)
        .skip(1)
        .take_while(|tile| !tile.same_tile(end))
        .find(|tile| obstacles.contains(*tile))
}

/// Checks whether `end` is visible from `start`.
///
/// Returns `false` if any tile strictly between the endpoints is in
/// `obstacles`. An obstacle tile itself can be seen, but not past it.
///
/// # Example
///
/// ```
/// use grid_spatial::{has_line_of_sight, GridPoint, TileSet};
///
/// let mut walls = TileSet::new();
/// walls.insert(GridPoint::new(5, 0));
///
/// assert!(has_line_of_sight(GridPoint::new(0, 0), GridPoint::new(5, 0), &walls));
/// assert!(!has_line_of_sight(GridPoint::new(0, 0), GridPoint::new(6, 0), &walls));
/// ```
#[must_use]
pub fn has_line_of_sight(start: GridPoint, end: GridPoint, obstacles: &TileSet) -> bool {
    first_blocker(start, end, obstacles).is_none()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> GridPoint {
        GridPoint::new(x, y)
    }

    #[test]
    fn test_single_tile_line() {
        assert_eq!(trace_line(p(3, 3), p(3, 3)), vec![p(3, 3)]);
    }

    #[test]
    fn test_horizontal_and_vertical() {
        assert_eq!(trace_line(p(0, 0), p(3, 0)), vec![p(0, 0), p(1, 0), p(2, 0), p(3, 0)]);
        assert_eq!(trace_line(p(0, 0), p(0, -2)), vec![p(0, 0), p(0, -1), p(0, -2)]);
    }

    #[test]
    fn test_diagonal() {
        assert_eq!(trace_line(p(0, 0), p(3, 3)), vec![p(0, 0), p(1, 1), p(2, 2), p(3, 3)]);
        assert_eq!(trace_line(p(0, 0), p(-2, 2)), vec![p(0, 0), p(-1, 1), p(-2, 2)]);
    }

    #[test]
    fn test_shallow_line() {
        let line = trace_line(p(0, 0), p(5, 2));
        assert_eq!(line.len(), 6);
        assert_eq!(line[0], p(0, 0));
        assert_eq!(line[5], p(5, 2));
        // x advances every step on a shallow line
        for (i, tile) in line.iter().enumerate() {
            assert_eq!(tile.x, i32::try_from(i).unwrap());
        }
    }

    #[test]
    fn test_every_octant_is_connected() {
        let targets = [
            p(7, 3),
            p(3, 7),
            p(-3, 7),
            p(-7, 3),
            p(-7, -3),
            p(-3, -7),
            p(3, -7),
            p(7, -3),
        ];
        for target in targets {
            let line = trace_line(p(0, 0), target);
            assert_eq!(line.first(), Some(&p(0, 0)));
            assert_eq!(line.last(), Some(&target));
            assert_eq!(line.len(), 8);
            for pair in line.windows(2) {
                assert!(pair[0].is_adjacent(pair[1]));
            }
        }
    }

    #[test]
    fn test_3d_line() {
        let start = GridPoint::new_3d(0, 0, 0);
        let end = GridPoint::new_3d(2, 4, 6);
        let line = trace_line(start, end);
        assert_eq!(line.len(), 7);
        assert_eq!(line.last(), Some(&end));
        assert!(line.iter().all(|t| t.is_3d()));
        for pair in line.windows(2) {
            assert!(pair[0].is_adjacent(pair[1]));
        }
    }

    #[test]
    fn test_mixed_dimension_line_is_3d() {
        let line = trace_line(p(0, 0), GridPoint::new_3d(2, 0, 1));
        assert_eq!(line.first(), Some(&GridPoint::new_3d(0, 0, 0)));
        assert_eq!(line.last(), Some(&GridPoint::new_3d(2, 0, 1)));
    }

    #[test]
    fn test_line_of_sight_clear() {
        assert!(has_line_of_sight(p(0, 0), p(9, 4), &TileSet::new()));
    }

    #[test]
    fn test_line_of_sight_ignores_endpoints() {
        let walls: TileSet = [p(0, 0), p(6, 2)].into_iter().collect();
        assert!(has_line_of_sight(p(0, 0), p(6, 2), &walls));
    }

    #[test]
    fn test_line_of_sight_blocked_by_interior() {
        let line = trace_line(p(0, 0), p(6, 2));
        for interior in &line[1..line.len() - 1] {
            let walls: TileSet = [*interior].into_iter().collect();
            assert!(!has_line_of_sight(p(0, 0), p(6, 2), &walls));
            assert_eq!(first_blocker(p(0, 0), p(6, 2), &walls), Some(*interior));
        }
    }
}
