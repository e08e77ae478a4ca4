//! Shape descriptions that can be stored and resolved later.
//!
//! Ability definitions usually carry their area as data ("20 ft cone") and
//! only resolve it to tiles once a caster and target are known.
//!
//! # Example
//!
//! ```
//! use tactics_aoe::{AoeShape, CircleCache};
//! use grid_spatial::GridPoint;
//!
//! let fireball = AoeShape::circle(GridPoint::new(5, 5), 3.0);
//! let cache = CircleCache::new();
//!
//! let tiles = fireball.tiles(Some(&cache)).unwrap();
//! assert!(tiles.contains(&GridPoint::new(8, 5)));
//! assert_eq!(fireball.anchor(), GridPoint::new(5, 5));
//! ```

use grid_spatial::{GridBounds, GridPoint, validate};
use nalgebra::Vector3;

use crate::cache::CircleCache;
use crate::circle::circle_tiles;
use crate::cone::cone_tiles;
use crate::error::InvalidShapeError;
use crate::line::line_tiles;

/// An area-of-effect shape.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "shape", rename_all = "lowercase"))]
pub enum AoeShape {
    /// Every tile within `radius` of `center`.
    Circle {
        /// Center tile.
        center: GridPoint,
        /// Euclidean radius in tiles.
        radius: f64,
    },

    /// A cone spreading from `origin` along `direction`.
    Cone {
        /// Apex tile.
        origin: GridPoint,
        /// Axis of the cone. Need not be normalised.
        direction: Vector3<f64>,
        /// Reach in tiles.
        length: f64,
        /// Full opening angle in degrees, in `(0, 360]`.
        angle_degrees: f64,
    },

    /// A Bresenham line between two tiles.
    Line {
        /// First tile.
        start: GridPoint,
        /// Last tile.
        end: GridPoint,
    },
}

impl AoeShape {
    /// Creates a circle shape.
    #[must_use]
    pub const fn circle(center: GridPoint, radius: f64) -> Self {
        Self::Circle { center, radius }
    }

    /// Creates a cone shape.
    #[must_use]
    pub const fn cone(
        origin: GridPoint,
        direction: Vector3<f64>,
        length: f64,
        angle_degrees: f64,
    ) -> Self {
        Self::Cone {
            origin,
            direction,
            length,
            angle_degrees,
        }
    }

    /// Creates a line shape.
    #[must_use]
    pub const fn line(start: GridPoint, end: GridPoint) -> Self {
        Self::Line { start, end }
    }

    /// The tile the shape is placed at: circle center, cone apex or line start.
    #[must_use]
    pub const fn anchor(&self) -> GridPoint {
        match *self {
            Self::Circle { center, .. } => center,
            Self::Cone { origin, .. } => origin,
            Self::Line { start, .. } => start,
        }
    }

    /// Resolves the shape to tiles.
    ///
    /// `cache` is only consulted by circles.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidShapeError`] if the shape's parameters are unusable.
    pub fn tiles(&self, cache: Option<&CircleCache>) -> Result<Vec<GridPoint>, InvalidShapeError> {
        match *self {
            Self::Circle { center, radius } => circle_tiles(center, radius, cache),
            Self::Cone {
                origin,
                direction,
                length,
                angle_degrees,
            } => cone_tiles(origin, direction, length, angle_degrees),
            Self::Line { start, end } => Ok(line_tiles(start, end)),
        }
    }

    /// Resolves the shape to tiles, clipped to a map.
    ///
    /// The anchor (and a line's end) must lie inside `bounds`; tiles that
    /// spill past the edge are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidShapeError::Point`] if an anchor lies outside
    /// `bounds`, or another [`InvalidShapeError`] for unusable parameters.
    ///
    /// # Example
    ///
    /// ```
    /// use tactics_aoe::AoeShape;
    /// use grid_spatial::{GridBounds, GridPoint};
    ///
    /// let map = GridBounds::new(GridPoint::new(0, 0), GridPoint::new(9, 9));
    /// let corner_blast = AoeShape::circle(GridPoint::new(0, 0), 1.0);
    ///
    /// let tiles = corner_blast.tiles_within(None, &map).unwrap();
    /// assert_eq!(tiles.len(), 3);
    /// ```
    pub fn tiles_within(
        &self,
        cache: Option<&CircleCache>,
        bounds: &GridBounds,
    ) -> Result<Vec<GridPoint>, InvalidShapeError> {
        validate(self.anchor(), Some(bounds))?;
        if let Self::Line { end, .. } = *self {
            validate(end, Some(bounds))?;
        }

        let mut tiles = self.tiles(cache)?;
        tiles.retain(|tile| bounds.contains(*tile));
        Ok(tiles)
    }
}
