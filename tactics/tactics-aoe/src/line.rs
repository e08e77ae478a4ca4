//! Line-shaped areas.

use grid_spatial::{GridPoint, trace_line};

/// Returns the tiles of a line area from `start` to `end`, both included.
///
/// The line is not stopped by obstacles; filter with
/// [`grid_spatial::first_blocker`] when the effect should be.
///
/// # Example
///
/// ```
/// use tactics_aoe::line_tiles;
/// use grid_spatial::GridPoint;
///
/// let bolt = line_tiles(GridPoint::new(0, 0), GridPoint::new(-3, 3));
/// assert_eq!(bolt.len(), 4);
/// assert_eq!(bolt[3], GridPoint::new(-3, 3));
/// ```
#[must_use]
pub fn line_tiles(start: GridPoint, end: GridPoint) -> Vec<GridPoint> {
    trace_line(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_trace_line() {
        let start = GridPoint::new(2, -1);
        let end = GridPoint::new(9, 3);
        assert_eq!(line_tiles(start, end), trace_line(start, end));
    }

    #[test]
    fn test_single_tile() {
        let tile = GridPoint::new_3d(1, 1, 1);
        assert_eq!(line_tiles(tile, tile), vec![tile]);
    }
}
