//! Step costs and the search heuristic.
//!
//! # Example
//!
//! ```
//! use tactics_pathfind::cost::{edge_cost, heuristic};
//! use tactics_types::{DiagonalCost, PathfindingOptions};
//! use grid_spatial::GridPoint;
//!
//! let options = PathfindingOptions::default().with_diagonal_cost(DiagonalCost::Alternating);
//! let from = GridPoint::new(0, 0);
//!
//! assert_eq!(edge_cost(from, GridPoint::new(1, 0), &options), Some(1.0));
//! assert_eq!(edge_cost(from, GridPoint::new(1, 1), &options), Some(1.5));
//! assert!((heuristic(from, GridPoint::new(3, 7)) - 7.0).abs() < 1e-10);
//! ```

use grid_spatial::{GridPoint, chebyshev_distance};
use tactics_types::PathfindingOptions;

/// Estimated remaining cost from `from` to `goal`: the Chebyshev distance.
///
/// Admissible as long as no step costs less than 1, i.e. for the built-in
/// diagonal policies with terrain multipliers ≥ 1.
#[must_use]
pub fn heuristic(from: GridPoint, goal: GridPoint) -> f64 {
    chebyshev_distance(from, goal)
}

/// Base cost of stepping between two adjacent tiles, before terrain.
///
/// Uses the movement cost override when one is set, otherwise the diagonal
/// policy. A step is diagonal when more than one axis changes.
#[must_use]
pub fn move_cost(from: GridPoint, to: GridPoint, options: &PathfindingOptions<'_>) -> f64 {
    options.movement_cost().map_or_else(
        || options.diagonal_cost().step_cost(from.axes_changed(to)),
        |cost| cost(from, to),
    )
}

/// Terrain multiplier for entering `to`. 1 when no terrain map is set.
#[must_use]
pub fn terrain_multiplier(to: GridPoint, options: &PathfindingOptions<'_>) -> f64 {
    options
        .terrain_costs()
        .map_or(1.0, |terrain| terrain.cost_of(to))
}

/// Full cost of the edge `from -> to`, or `None` if it cannot be taken.
///
/// The edge is impassable when the product of move cost and terrain
/// multiplier is negative, infinite or NaN.
#[must_use]
pub fn edge_cost(from: GridPoint, to: GridPoint, options: &PathfindingOptions<'_>) -> Option<f64> {
    let cost = move_cost(from, to, options) * terrain_multiplier(to, options);
    (cost.is_finite() && cost >= 0.0).then_some(cost)
}
