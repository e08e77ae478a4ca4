//! Tile paths.
//!
//! # Example
//!
//! ```
//! use tactics_types::GridPath;
//! use grid_spatial::GridPoint;
//!
//! let path = GridPath::new(vec![
//!     GridPoint::new(0, 0),
//!     GridPoint::new(1, 1),
//!     GridPoint::new(2, 1),
//! ]);
//!
//! assert_eq!(path.len(), 3);
//! assert_eq!(path.steps(), 2);
//! assert!(path.is_connected());
//! ```

use grid_spatial::{GridPoint, euclidean_distance};

/// An ordered sequence of tiles from a start to an end.
///
/// Paths produced by the pathfinder are connected: each tile is one grid
/// step from the previous. Smoothed paths keep only waypoints and are not.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GridPath {
    points: Vec<GridPoint>,
}

impl GridPath {
    /// Creates a path from a sequence of tiles.
    #[must_use]
    pub const fn new(points: Vec<GridPoint>) -> Self {
        Self { points }
    }

    /// Creates an empty path.
    #[must_use]
    pub const fn empty() -> Self {
        Self { points: Vec::new() }
    }

    /// Creates a path of a single tile.
    ///
    /// # Example
    ///
    /// ```
    /// use tactics_types::GridPath;
    /// use grid_spatial::GridPoint;
    ///
    /// let path = GridPath::from_single(GridPoint::new(4, 2));
    /// assert_eq!(path.len(), 1);
    /// assert_eq!(path.steps(), 0);
    /// ```
    #[must_use]
    pub fn from_single(point: GridPoint) -> Self {
        Self {
            points: vec![point],
        }
    }

    /// Number of tiles, endpoints included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the path has no tiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of moves: one less than the number of tiles.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Returns the tiles as a slice.
    #[must_use]
    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    /// Returns the first tile, if any.
    #[must_use]
    pub fn first(&self) -> Option<&GridPoint> {
        self.points.first()
    }

    /// Returns the last tile, if any.
    #[must_use]
    pub fn last(&self) -> Option<&GridPoint> {
        self.points.last()
    }

    /// Returns the tile at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&GridPoint> {
        self.points.get(index)
    }

    /// Returns `true` if the path passes through `point`.
    #[must_use]
    pub fn contains(&self, point: GridPoint) -> bool {
        self.points.contains(&point)
    }

    /// Returns an iterator over the tiles.
    pub fn iter(&self) -> impl Iterator<Item = &GridPoint> {
        self.points.iter()
    }

    /// Returns an iterator over consecutive tile pairs.
    pub fn segments(&self) -> impl Iterator<Item = (&GridPoint, &GridPoint)> {
        self.points.windows(2).map(|w| (&w[0], &w[1]))
    }

    /// Returns `true` if every consecutive pair is one grid step apart.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.segments().all(|(a, b)| a.is_adjacent(*b))
    }

    /// Geometric length: the sum of Euclidean segment lengths.
    ///
    /// # Example
    ///
    /// ```
    /// use tactics_types::GridPath;
    /// use grid_spatial::GridPoint;
    ///
    /// let path = GridPath::new(vec![GridPoint::new(0, 0), GridPoint::new(3, 4)]);
    /// assert!((path.length() - 5.0).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn length(&self) -> f64 {
        self.segments()
            .map(|(a, b)| euclidean_distance(*a, *b))
            .sum()
    }

    /// Reverses the path direction.
    pub fn reverse(&mut self) {
        self.points.reverse();
    }

    /// Consumes the path, returning its tiles.
    #[must_use]
    pub fn into_points(self) -> Vec<GridPoint> {
        self.points
    }
}

impl From<Vec<GridPoint>> for GridPath {
    fn from(points: Vec<GridPoint>) -> Self {
        Self::new(points)
    }
}

impl From<GridPath> for Vec<GridPoint> {
    fn from(path: GridPath) -> Self {
        path.points
    }
}

impl FromIterator<GridPoint> for GridPath {
    fn from_iter<I: IntoIterator<Item = GridPoint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for GridPath {
    type Item = GridPoint;
    type IntoIter = std::vec::IntoIter<GridPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a GridPath {
    type Item = &'a GridPoint;
    type IntoIter = std::slice::Iter<'a, GridPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
