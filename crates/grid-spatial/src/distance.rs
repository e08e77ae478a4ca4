//! Distance metrics between tiles.
//!
//! # Example
//!
//! ```
//! use grid_spatial::{distance, DistanceMetric, GridPoint};
//!
//! let a = GridPoint::new(0, 0);
//! let b = GridPoint::new(3, 4);
//!
//! assert!((distance(a, b, DistanceMetric::Euclidean) - 5.0).abs() < 1e-10);
//! assert!((distance(a, b, DistanceMetric::Manhattan) - 7.0).abs() < 1e-10);
//! assert!((distance(a, b, DistanceMetric::Chebyshev) - 4.0).abs() < 1e-10);
//! ```

use crate::point::GridPoint;

/// How distance between two tiles is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DistanceMetric {
    /// Straight-line distance: sqrt(dx² + dy² + dz²).
    ///
    /// Used for circular ranges and area effects.
    #[default]
    Euclidean,

    /// Sum of absolute differences: |dx| + |dy| + |dz|.
    Manhattan,

    /// Maximum of absolute differences: max(|dx|, |dy|, |dz|).
    ///
    /// The number of king moves on an 8/26-connected grid.
    Chebyshev,
}

/// Computes the distance between two points under the given metric.
///
/// A missing `z` reads as 0 on each operand, so 2D and 3D points compare.
#[must_use]
pub fn distance(a: GridPoint, b: GridPoint, metric: DistanceMetric) -> f64 {
    let [dx, dy, dz] = deltas(a, b);

    match metric {
        DistanceMetric::Euclidean => dx.mul_add(dx, dy.mul_add(dy, dz * dz)).sqrt(),
        DistanceMetric::Manhattan => dx + dy + dz,
        DistanceMetric::Chebyshev => dx.max(dy).max(dz),
    }
}

/// Chebyshev distance. This is the pathfinder's heuristic.
#[must_use]
pub fn chebyshev_distance(a: GridPoint, b: GridPoint) -> f64 {
    distance(a, b, DistanceMetric::Chebyshev)
}

/// Euclidean distance.
#[must_use]
pub fn euclidean_distance(a: GridPoint, b: GridPoint) -> f64 {
    distance(a, b, DistanceMetric::Euclidean)
}

fn deltas(a: GridPoint, b: GridPoint) -> [f64; 3] {
    let [ax, ay, az] = a.as_array();
    let [bx, by, bz] = b.as_array();
    [
        f64::from(ax.abs_diff(bx)),
        f64::from(ay.abs_diff(by)),
        f64::from(az.abs_diff(bz)),
    ]
}
