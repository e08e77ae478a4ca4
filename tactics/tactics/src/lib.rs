//! Spatial reasoning for turn-based tactics.
//!
//! This umbrella crate re-exports the tactics crates and adds
//! [`SpatialEngine`], a facade that owns the shared circle cache. All crates
//! are Layer 0 (no engine dependencies) and every operation is a pure
//! function of its inputs.
//!
//! # Quick Start
//!
//! ```
//! use tactics::prelude::*;
//!
//! let engine = SpatialEngine::new();
//!
//! let mut walls = TileSet::new();
//! for y in -2..=2 {
//!     walls.insert(GridPoint::new(3, y));
//! }
//!
//! let knight = GridPoint::new(0, 0);
//! let goblin = GridPoint::new(6, 0);
//!
//! // Can the knight reach the goblin?
//! let path = engine
//!     .find_path(knight, goblin, &walls, &PathfindingOptions::default())
//!     .unwrap()
//!     .expect("Path should exist");
//! assert_eq!(path.first(), Some(&knight));
//! assert_eq!(path.last(), Some(&goblin));
//!
//! // Can the knight see it?
//! assert!(!engine.has_line_of_sight(knight, goblin, &walls));
//!
//! // Who does a fireball on the goblin hit?
//! let blast = engine.circle_tiles(goblin, 2.0, true).unwrap();
//! assert!(blast.contains(&GridPoint::new(7, 1)));
//! ```
//!
//! # Module Organization
//!
//! - [`spatial`] - Points, bounds, distances, line tracing and field of view
//! - [`types`] - Pathfinding options, terrain costs and paths
//! - [`pathfind`] - A\*, path smoothing and the priority queue
//! - [`aoe`] - Circle, cone and line area effects
//!
//! # Feature Flags
//!
//! - `serde` - Serialization for the plain-data types in every crate

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod engine;

// =============================================================================
// Re-exports
// =============================================================================

/// Points, bounds, distances, line tracing and field of view.
pub use grid_spatial as spatial;

/// Pathfinding options, terrain costs and paths.
pub use tactics_types as types;

/// A*, path smoothing and the priority queue.
pub use tactics_pathfind as pathfind;

/// Circle, cone and line area effects.
pub use tactics_aoe as aoe;

pub use engine::SpatialEngine;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for tactical spatial queries.
///
/// # Usage
///
/// ```
/// use tactics::prelude::*;
/// ```
pub mod prelude {
    // Geometry
    pub use grid_spatial::{
        DistanceMetric, GridBounds, GridPoint, InvalidPointError, TileSet, Vector3,
    };

    // Movement
    pub use tactics_types::{
        DiagonalCost, GridPath, PathfindingOptions, TerrainCostMap, TerrainCosts,
    };

    // Area effects
    pub use tactics_aoe::{AoeShape, CircleCache, InvalidShapeError};

    // Facade
    pub use crate::SpatialEngine;
}
