//! Core types for tactical grid movement: options, terrain costs and paths.
//!
//! # Overview
//!
//! - **Configuration**: search settings ([`PathfindingOptions`], [`DiagonalCost`])
//! - **Terrain**: per-tile cost multipliers ([`TerrainCostMap`], [`TerrainCosts`])
//! - **Paths**: search results ([`GridPath`])
//!
//! # Example
//!
//! ```
//! use tactics_types::{DiagonalCost, GridPath, PathfindingOptions, TerrainCosts};
//! use grid_spatial::GridPoint;
//!
//! let mut terrain = TerrainCosts::new();
//! terrain.set(GridPoint::new(3, 3), TerrainCosts::DIFFICULT);
//!
//! let options = PathfindingOptions::default()
//!     .with_diagonal_cost(DiagonalCost::Alternating)
//!     .with_terrain_costs(&terrain);
//! assert!(options.validate().is_empty());
//!
//! // Paths are computed by the tactics-pathfind crate
//! let path = GridPath::from_single(GridPoint::new(0, 0));
//! assert_eq!(path.steps(), 0);
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: Enables serialization/deserialization for the plain-data types

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

pub mod config;
pub mod path;
pub mod terrain;

// Re-export main types at crate root for convenience
pub use config::{DEFAULT_MAX_ITERATIONS, DiagonalCost, MovementCostFn, PathfindingOptions};
pub use path::GridPath;
pub use terrain::{TerrainCostMap, TerrainCosts};

#[cfg(test)]
mod integration_tests {
    use super::*;
    use grid_spatial::{GridBounds, GridPoint};

    /// Options, terrain and paths can be used together.
    #[test]
    fn test_full_workflow_types() {
        let terrain: TerrainCosts = [(GridPoint::new(1, 1), TerrainCosts::IMPASSABLE)]
            .into_iter()
            .collect();
        let options = PathfindingOptions::new()
            .with_terrain_costs(&terrain)
            .with_bounds(GridBounds::new(GridPoint::new(0, 0), GridPoint::new(3, 3)));

        let cost = options
            .terrain_costs()
            .map_or(1.0, |t| t.cost_of(GridPoint::new(1, 1)));
        assert!(cost.is_infinite());

        let path = GridPath::new(vec![GridPoint::new(0, 0), GridPoint::new(1, 0)]);
        assert!(path.iter().all(|p| options.bounds().is_some_and(|b| b.contains(*p))));
    }
}
