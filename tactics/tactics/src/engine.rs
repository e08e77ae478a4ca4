//! The spatial engine facade.

use std::collections::HashSet;

use grid_spatial::{DistanceMetric, GridBounds, GridPoint, InvalidPointError, TileSet};
use tactics_aoe::{AoeShape, CircleCache, InvalidShapeError};
use tactics_types::{GridPath, PathfindingOptions};
use tracing::debug;

/// Entry point for every spatial query.
///
/// The engine's only state is its [`CircleCache`]. Everything else is passed
/// in per call, so one engine can serve many maps and many threads at once.
///
/// # Example
///
/// ```
/// use tactics::prelude::*;
/// use std::sync::Arc;
///
/// let engine = Arc::new(SpatialEngine::new());
///
/// let worker = {
///     let engine = Arc::clone(&engine);
///     std::thread::spawn(move || engine.circle_tiles(GridPoint::new(0, 0), 3.0, true))
/// };
///
/// let tiles = worker.join().unwrap().unwrap();
/// assert_eq!(tiles.len(), 29);
/// assert_eq!(engine.cache().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct SpatialEngine {
    circles: CircleCache,
}

#[allow(clippy::unused_self)]
impl SpatialEngine {
    /// Creates an engine with an empty circle cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The engine's circle cache.
    #[must_use]
    pub const fn cache(&self) -> &CircleCache {
        &self.circles
    }

    /// Distance between two tiles under `metric`.
    #[must_use]
    pub fn distance(&self, a: GridPoint, b: GridPoint, metric: DistanceMetric) -> f64 {
        grid_spatial::distance(a, b, metric)
    }

    /// Checks that `point` lies inside `bounds`, when given.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPointError::OutOfBounds`] if it does not.
    pub fn validate(
        &self,
        point: GridPoint,
        bounds: Option<&GridBounds>,
    ) -> Result<(), InvalidPointError> {
        grid_spatial::validate(point, bounds)
    }

    /// Finds a path from `start` to `end` around `obstacles`.
    ///
    /// `Ok(None)` means no path exists or the iteration budget ran out.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPointError`] if either endpoint is outside the
    /// options' bounds.
    pub fn find_path(
        &self,
        start: GridPoint,
        end: GridPoint,
        obstacles: &TileSet,
        options: &PathfindingOptions<'_>,
    ) -> Result<Option<GridPath>, InvalidPointError> {
        tactics_pathfind::find_path(start, end, obstacles, options)
    }

    /// Removes waypoints that can be skipped by a straight run.
    #[must_use]
    pub fn smooth_path(&self, path: &[GridPoint], obstacles: &TileSet) -> Vec<GridPoint> {
        tactics_pathfind::smooth_path(path, obstacles)
    }

    /// Tiles on the Bresenham line from `start` to `end`, both included.
    #[must_use]
    pub fn trace_line(&self, start: GridPoint, end: GridPoint) -> Vec<GridPoint> {
        grid_spatial::trace_line(start, end)
    }

    /// Returns `true` if no tile strictly between the endpoints is an obstacle.
    #[must_use]
    pub fn has_line_of_sight(&self, start: GridPoint, end: GridPoint, obstacles: &TileSet) -> bool {
        grid_spatial::has_line_of_sight(start, end, obstacles)
    }

    /// Tiles visible from `origin` within `range`.
    #[must_use]
    pub fn field_of_view(
        &self,
        origin: GridPoint,
        range: u32,
        opaque: &TileSet,
    ) -> HashSet<GridPoint> {
        grid_spatial::field_of_view(origin, range, opaque)
    }

    /// Tiles within `radius` of `center`.
    ///
    /// With `use_cache` set, eligible circles go through the engine's cache.
    /// The result is the same either way.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidShapeError`] for a negative or non-finite radius.
    pub fn circle_tiles(
        &self,
        center: GridPoint,
        radius: f64,
        use_cache: bool,
    ) -> Result<Vec<GridPoint>, InvalidShapeError> {
        tactics_aoe::circle_tiles(center, radius, self.cache_if(use_cache))
    }

    /// Tiles inside a cone from `origin` along `direction`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidShapeError`] for an unusable length, angle or
    /// direction.
    pub fn cone_tiles(
        &self,
        origin: GridPoint,
        direction: grid_spatial::Vector3<f64>,
        length: f64,
        angle_degrees: f64,
    ) -> Result<Vec<GridPoint>, InvalidShapeError> {
        tactics_aoe::cone_tiles(origin, direction, length, angle_degrees)
    }

    /// Tiles of a line area from `start` to `end`.
    #[must_use]
    pub fn line_tiles(&self, start: GridPoint, end: GridPoint) -> Vec<GridPoint> {
        tactics_aoe::line_tiles(start, end)
    }

    /// Resolves any [`AoeShape`] to tiles.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidShapeError`] if the shape's parameters are unusable.
    pub fn shape_tiles(
        &self,
        shape: &AoeShape,
        use_cache: bool,
    ) -> Result<Vec<GridPoint>, InvalidShapeError> {
        shape.tiles(self.cache_if(use_cache))
    }

    /// Drops every memoised circle.
    pub fn clear_cache(&self) {
        let dropped = self.circles.len();
        self.circles.clear();
        debug!(dropped, "Cleared circle cache");
    }

    const fn cache_if(&self, use_cache: bool) -> Option<&CircleCache> {
        if use_cache { Some(&self.circles) } else { None }
    }
}
