//! Configuration for grid pathfinding.
//!
//! # Example
//!
//! ```
//! use tactics_types::{DiagonalCost, PathfindingOptions, TerrainCosts};
//! use grid_spatial::{GridBounds, GridPoint};
//!
//! let terrain = TerrainCosts::new();
//! let options = PathfindingOptions::default()
//!     .with_max_iterations(2_000)
//!     .with_diagonal_cost(DiagonalCost::Alternating)
//!     .with_terrain_costs(&terrain)
//!     .with_bounds(GridBounds::new(GridPoint::new(0, 0), GridPoint::new(31, 31)));
//!
//! assert_eq!(options.max_iterations(), 2_000);
//! assert!(options.validate().is_empty());
//! ```

use std::fmt;

use grid_spatial::{GridBounds, GridPoint};

use crate::terrain::TerrainCostMap;

/// Default expansion budget for a single search.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Caller-supplied step cost, replacing the diagonal policy entirely.
pub type MovementCostFn<'a> = dyn Fn(GridPoint, GridPoint) -> f64 + 'a;

/// How diagonal steps are priced.
///
/// A step is diagonal when more than one axis changes. Orthogonal steps
/// always cost 1.
///
/// # Example
///
/// ```
/// use tactics_types::DiagonalCost;
///
/// assert!((DiagonalCost::Uniform.step_cost(2) - 1.0).abs() < 1e-10);
/// assert!((DiagonalCost::Alternating.step_cost(2) - 1.5).abs() < 1e-10);
/// assert!((DiagonalCost::Fixed(1.4).step_cost(3) - 1.4).abs() < 1e-10);
/// assert!((DiagonalCost::Fixed(1.4).step_cost(1) - 1.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DiagonalCost {
    /// Every step costs 1. Path cost equals Chebyshev distance.
    #[default]
    Uniform,

    /// Diagonals cost 1.5, the average of the tabletop 1-2-1-2 rule.
    Alternating,

    /// Diagonals cost the given amount.
    Fixed(f64),
}

impl DiagonalCost {
    /// Diagonal cost used by [`DiagonalCost::Alternating`].
    pub const ALTERNATING: f64 = 1.5;

    /// Cost of one step that changes `axes_changed` axes.
    #[must_use]
    pub const fn step_cost(self, axes_changed: usize) -> f64 {
        if axes_changed <= 1 {
            return 1.0;
        }
        match self {
            Self::Uniform => 1.0,
            Self::Alternating => Self::ALTERNATING,
            Self::Fixed(cost) => cost,
        }
    }
}

/// Options for a single A* search.
///
/// Borrowed collaborators (terrain map, cost override) keep the options
/// `Copy`, so one value can drive many searches.
///
/// Defaults:
/// - Max iterations: 10 000
/// - Diagonal cost: [`DiagonalCost::Uniform`]
/// - No movement cost override
/// - No terrain costs
/// - No bounds
#[derive(Clone, Copy)]
pub struct PathfindingOptions<'a> {
    max_iterations: usize,
    diagonal_cost: DiagonalCost,
    movement_cost: Option<&'a MovementCostFn<'a>>,
    terrain_costs: Option<&'a dyn TerrainCostMap>,
    bounds: Option<GridBounds>,
}

impl<'a> PathfindingOptions<'a> {
    /// Creates options with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            diagonal_cost: DiagonalCost::Uniform,
            movement_cost: None,
            terrain_costs: None,
            bounds: None,
        }
    }

    /// Sets the expansion budget. Exhausting it yields "no path".
    #[must_use]
    pub const fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the diagonal pricing policy.
    #[must_use]
    pub const fn with_diagonal_cost(mut self, diagonal_cost: DiagonalCost) -> Self {
        self.diagonal_cost = diagonal_cost;
        self
    }

    /// Overrides the step cost between adjacent tiles.
    ///
    /// The diagonal policy is ignored while an override is set. Terrain
    /// multipliers still apply on top.
    #[must_use]
    pub const fn with_movement_cost(mut self, cost: &'a MovementCostFn<'a>) -> Self {
        self.movement_cost = Some(cost);
        self
    }

    /// Removes the movement cost override.
    #[must_use]
    pub const fn without_movement_cost(mut self) -> Self {
        self.movement_cost = None;
        self
    }

    /// Sets the terrain multiplier source.
    #[must_use]
    pub const fn with_terrain_costs(mut self, terrain: &'a dyn TerrainCostMap) -> Self {
        self.terrain_costs = Some(terrain);
        self
    }

    /// Removes the terrain multiplier source.
    #[must_use]
    pub const fn without_terrain_costs(mut self) -> Self {
        self.terrain_costs = None;
        self
    }

    /// Restricts the search (and endpoint validation) to `bounds`.
    #[must_use]
    pub const fn with_bounds(mut self, bounds: GridBounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Removes the bounds.
    #[must_use]
    pub const fn without_bounds(mut self) -> Self {
        self.bounds = None;
        self
    }

    /// Returns the expansion budget.
    #[must_use]
    pub const fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Returns the diagonal pricing policy.
    #[must_use]
    pub const fn diagonal_cost(&self) -> DiagonalCost {
        self.diagonal_cost
    }

    /// Returns the movement cost override, if set.
    #[must_use]
    pub const fn movement_cost(&self) -> Option<&'a MovementCostFn<'a>> {
        self.movement_cost
    }

    /// Returns the terrain multiplier source, if set.
    #[must_use]
    pub const fn terrain_costs(&self) -> Option<&'a dyn TerrainCostMap> {
        self.terrain_costs
    }

    /// Returns the bounds, if set.
    #[must_use]
    pub const fn bounds(&self) -> Option<&GridBounds> {
        self.bounds.as_ref()
    }

    /// Validates the options and returns any issues.
    ///
    /// Issues are advisory: a search with a zero budget or a negative
    /// diagonal cost still runs, it just never finds anything useful.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.max_iterations == 0 {
            issues.push("max_iterations is 0; every non-trivial search will fail".to_string());
        }

        if let DiagonalCost::Fixed(cost) = self.diagonal_cost {
            if !cost.is_finite() || cost < 0.0 {
                issues.push(format!(
                    "diagonal cost {cost} makes every diagonal step impassable"
                ));
            }
        }

        issues
    }
}

impl Default for PathfindingOptions<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PathfindingOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathfindingOptions")
            .field("max_iterations", &self.max_iterations)
            .field("diagonal_cost", &self.diagonal_cost)
            .field("movement_cost", &self.movement_cost.map(|_| "<fn>"))
            .field("terrain_costs", &self.terrain_costs.map(|_| "<map>"))
            .field("bounds", &self.bounds)
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::terrain::TerrainCosts;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults() {
        let options = PathfindingOptions::default();
        assert_eq!(options.max_iterations(), 10_000);
        assert_eq!(options.diagonal_cost(), DiagonalCost::Uniform);
        assert!(options.movement_cost().is_none());
        assert!(options.terrain_costs().is_none());
        assert!(options.bounds().is_none());
        assert!(options.validate().is_empty());
    }

    #[test]
    fn test_step_cost_policies() {
        assert_relative_eq!(DiagonalCost::Uniform.step_cost(1), 1.0);
        assert_relative_eq!(DiagonalCost::Uniform.step_cost(3), 1.0);
        assert_relative_eq!(DiagonalCost::Alternating.step_cost(1), 1.0);
        assert_relative_eq!(DiagonalCost::Alternating.step_cost(2), 1.5);
        assert_relative_eq!(DiagonalCost::Fixed(2.0).step_cost(2), 2.0);
        assert_relative_eq!(DiagonalCost::Fixed(2.0).step_cost(0), 1.0);
    }

    #[test]
    fn test_builder_round_trip() {
        let terrain = TerrainCosts::new();
        let cost = |_: GridPoint, _: GridPoint| 3.0;
        let bounds = GridBounds::new(GridPoint::new(0, 0), GridPoint::new(5, 5));

        let options = PathfindingOptions::new()
            .with_max_iterations(50)
            .with_diagonal_cost(DiagonalCost::Fixed(1.4))
            .with_movement_cost(&cost)
            .with_terrain_costs(&terrain)
            .with_bounds(bounds);

        assert_eq!(options.max_iterations(), 50);
        assert_eq!(options.bounds(), Some(&bounds));
        let override_fn = options.movement_cost().unwrap();
        assert_relative_eq!(override_fn(GridPoint::new(0, 0), GridPoint::new(1, 0)), 3.0);

        let cleared = options
            .without_movement_cost()
            .without_terrain_costs()
            .without_bounds();
        assert!(cleared.movement_cost().is_none());
        assert!(cleared.terrain_costs().is_none());
        assert!(cleared.bounds().is_none());
    }

    #[test]
    fn test_validate_flags_bad_settings() {
        let options = PathfindingOptions::new()
            .with_max_iterations(0)
            .with_diagonal_cost(DiagonalCost::Fixed(f64::NAN));
        assert_eq!(options.validate().len(), 2);
    }

    #[test]
    fn test_debug_hides_closures() {
        let cost = |_: GridPoint, _: GridPoint| 1.0;
        let options = PathfindingOptions::new().with_movement_cost(&cost);
        let debug = format!("{options:?}");
        assert!(debug.contains("<fn>"));
        assert!(debug.contains("max_iterations: 10000"));
    }
}
