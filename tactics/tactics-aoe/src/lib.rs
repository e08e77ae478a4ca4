//! Area-of-effect shapes for tactical tile grids.
//!
//! Resolves circles, cones and lines to the `grid-spatial` tiles they cover.
//!
//! # Overview
//!
//! - [`circle_tiles`] - Tiles within a Euclidean radius, optionally through a
//!   [`CircleCache`]
//! - [`cone_tiles`] - Tiles inside a cone given a direction, length and angle
//! - [`line_tiles`] - Bresenham line between two tiles
//! - [`AoeShape`] - Any of the above as data
//!
//! Shapes are not clipped by obstacles. Combine with
//! [`grid_spatial::has_line_of_sight`] or [`grid_spatial::field_of_view`] when
//! walls should stop an effect.
//!
//! # Example
//!
//! ```
//! use tactics_aoe::{cone_tiles, circle_tiles, CircleCache};
//! use grid_spatial::{GridPoint, Vector3};
//!
//! let cache = CircleCache::new();
//! let center = GridPoint::new(4, 4);
//!
//! let blast = circle_tiles(center, 3.0, Some(&cache)).unwrap();
//! let spray = cone_tiles(center, Vector3::new(0.0, -1.0, 0.0), 3.0, 360.0).unwrap();
//!
//! // A full-turn cone covers the same tiles as the circle
//! assert_eq!(blast.len(), spray.len());
//! ```
//!
//! # Caching
//!
//! Circles with a 2D center and a whole-number radius up to
//! [`MAX_CACHED_RADIUS`] reuse memoised offsets. The cache is safe to share
//! between threads and holds only derived data.

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod cache;
mod circle;
mod cone;
mod error;
mod line;
mod shape;

pub use cache::CircleCache;
pub use circle::{MAX_CACHED_RADIUS, circle_offsets, circle_tiles};
pub use cone::{CONE_EPSILON, cone_tiles};
pub use error::InvalidShapeError;
pub use line::line_tiles;
pub use shape::AoeShape;
