//! Integer tile grids for tactical games.
//!
//! This crate provides the spatial vocabulary shared by the tactics crates:
//!
//! - [`GridPoint`] - 2D or 3D tile coordinate, also the hashable tile key
//! - [`GridBounds`] and [`validate`] - Inclusive bounds and point validation
//! - [`DistanceMetric`] and [`distance`] - Euclidean, Manhattan and Chebyshev metrics
//! - [`TileSet`] - Obstacle / opacity sets
//! - [`trace_line`] and [`has_line_of_sight`] - Bresenham lines and visibility
//! - [`field_of_view`] - Recursive shadowcasting
//!
//! # Layer 0 Crate
//!
//! No engine or framework dependencies. Everything here is a pure function of
//! its inputs, so the crate can sit under a game server, a CLI or a WASM
//! front-end alike.
//!
//! # Coordinate Systems
//!
//! Tiles are addressed by `i32` indices:
//! - X: column
//! - Y: row
//! - Z: elevation (optional)
//!
//! A point without `z` is a 2D tile. Mixed-dimension operations read a
//! missing `z` as 0.
//!
//! # Example
//!
//! ```
//! use grid_spatial::{distance, field_of_view, has_line_of_sight, DistanceMetric, GridPoint, TileSet};
//!
//! let archer = GridPoint::new(0, 0);
//! let target = GridPoint::new(6, 2);
//!
//! let mut walls = TileSet::new();
//! walls.insert(GridPoint::new(3, 1));
//!
//! assert!((distance(archer, target, DistanceMetric::Chebyshev) - 6.0).abs() < 1e-10);
//! assert!(!has_line_of_sight(archer, target, &walls));
//!
//! let visible = field_of_view(archer, 8, &walls);
//! assert!(visible.contains(&GridPoint::new(3, 1)));
//! ```
//!
//! # Raw Input
//!
//! Coordinates arriving as floats (JSON, scripting layers) go through
//! [`GridPoint::from_f64`], which rejects non-finite, fractional and
//! out-of-range values:
//!
//! ```
//! use grid_spatial::{GridPoint, InvalidPointError};
//!
//! assert!(GridPoint::from_f64(2.0, 3.0, None).is_ok());
//! assert!(matches!(
//!     GridPoint::from_f64(f64::NAN, 0.0, None),
//!     Err(InvalidPointError::NonFinite { axis: 'x', .. })
//! ));
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod bounds;
mod distance;
mod error;
mod fov;
mod line;
mod point;
mod tiles;

// Re-export core types
pub use bounds::{GridBounds, validate};
pub use distance::{DistanceMetric, chebyshev_distance, distance, euclidean_distance};
pub use error::InvalidPointError;
pub use fov::{field_of_view, is_visible};
pub use line::{BresenhamLine, first_blocker, has_line_of_sight, trace_line};
pub use point::GridPoint;
pub use tiles::TileSet;

// Re-export nalgebra types for convenience
pub use nalgebra::Vector3;
