//! Inclusive tile bounds and point validation.

use std::fmt;

use crate::error::InvalidPointError;
use crate::point::GridPoint;

/// Axis-aligned inclusive bounds in tile space.
///
/// The `z` axis is only constrained when both corners carry `z`; points
/// without `z` are then checked at elevation 0.
///
/// # Example
///
/// ```
/// use grid_spatial::{GridBounds, GridPoint};
///
/// let bounds = GridBounds::new(GridPoint::new(0, 0), GridPoint::new(9, 9));
///
/// assert!(bounds.contains(GridPoint::new(0, 9)));
/// assert!(!bounds.contains(GridPoint::new(10, 0)));
/// // 2D bounds do not constrain elevation
/// assert!(bounds.contains(GridPoint::new_3d(5, 5, 40)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridBounds {
    /// Minimum corner (inclusive).
    pub min: GridPoint,
    /// Maximum corner (inclusive).
    pub max: GridPoint,
}

impl GridBounds {
    /// Creates bounds from two corners, ordering them so min ≤ max per axis.
    ///
    /// The result constrains `z` only if both corners carry `z`.
    #[must_use]
    pub fn new(a: GridPoint, b: GridPoint) -> Self {
        let (min_z, max_z) = match (a.z, b.z) {
            (Some(az), Some(bz)) => (Some(az.min(bz)), Some(az.max(bz))),
            _ => (None, None),
        };
        Self {
            min: GridPoint {
                x: a.x.min(b.x),
                y: a.y.min(b.y),
                z: min_z,
            },
            max: GridPoint {
                x: a.x.max(b.x),
                y: a.y.max(b.y),
                z: max_z,
            },
        }
    }

    /// Returns `true` if the bounds constrain elevation.
    #[must_use]
    pub const fn is_3d(&self) -> bool {
        self.min.z.is_some() && self.max.z.is_some()
    }

    /// Checks whether a point lies inside the bounds.
    #[must_use]
    pub fn contains(&self, point: GridPoint) -> bool {
        let planar = (self.min.x..=self.max.x).contains(&point.x)
            && (self.min.y..=self.max.y).contains(&point.y);

        if !planar {
            return false;
        }

        match (self.min.z, self.max.z) {
            (Some(min_z), Some(max_z)) => (min_z..=max_z).contains(&point.z_or_zero()),
            _ => true,
        }
    }
}

impl fmt::Display for GridBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{}]", self.min, self.max)
    }
}

/// Validates a point against optional bounds.
///
/// Integer points are finite by construction, so without bounds this only
/// succeeds; use [`GridPoint::from_f64`] to validate raw numeric input.
///
/// # Errors
///
/// Returns [`InvalidPointError::OutOfBounds`] if bounds are given and the
/// point lies outside them.
///
/// # Example
///
/// ```
/// use grid_spatial::{validate, GridBounds, GridPoint};
///
/// let bounds = GridBounds::new(GridPoint::new(0, 0), GridPoint::new(4, 4));
/// assert!(validate(GridPoint::new(2, 2), Some(&bounds)).is_ok());
/// assert!(validate(GridPoint::new(-1, 2), Some(&bounds)).is_err());
/// assert!(validate(GridPoint::new(-1, 2), None).is_ok());
/// ```
pub fn validate(point: GridPoint, bounds: Option<&GridBounds>) -> Result<(), InvalidPointError> {
    match bounds {
        Some(bounds) if !bounds.contains(point) => Err(InvalidPointError::OutOfBounds {
            point,
            bounds: *bounds,
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_orders_corners() {
        let bounds = GridBounds::new(GridPoint::new(10, 2), GridPoint::new(0, 8));
        assert_eq!(bounds.min, GridPoint::new(0, 2));
        assert_eq!(bounds.max, GridPoint::new(10, 8));
        assert!(!bounds.is_3d());
    }

    #[test]
    fn test_contains_is_inclusive() {
        let bounds = GridBounds::new(GridPoint::new(0, 0), GridPoint::new(3, 3));
        assert!(bounds.contains(GridPoint::new(0, 0)));
        assert!(bounds.contains(GridPoint::new(3, 3)));
        assert!(!bounds.contains(GridPoint::new(4, 3)));
        assert!(!bounds.contains(GridPoint::new(0, -1)));
    }

    #[test]
    fn test_contains_checks_z_only_for_3d_bounds() {
        let bounds = GridBounds::new(GridPoint::new_3d(0, 0, 1), GridPoint::new_3d(3, 3, 2));
        assert!(bounds.is_3d());
        assert!(bounds.contains(GridPoint::new_3d(1, 1, 2)));
        assert!(!bounds.contains(GridPoint::new_3d(1, 1, 3)));
        // Missing z reads as 0, which is below min z
        assert!(!bounds.contains(GridPoint::new(1, 1)));
    }

    #[test]
    fn test_mixed_corners_are_planar() {
        let bounds = GridBounds::new(GridPoint::new_3d(0, 0, 5), GridPoint::new(3, 3));
        assert!(!bounds.is_3d());
        assert!(bounds.contains(GridPoint::new_3d(1, 1, -100)));
    }

    #[test]
    fn test_validate_reports_bounds() {
        let bounds = GridBounds::new(GridPoint::new(0, 0), GridPoint::new(1, 1));
        let err = validate(GridPoint::new(5, 5), Some(&bounds)).unwrap_err();
        assert_eq!(
            err,
            InvalidPointError::OutOfBounds {
                point: GridPoint::new(5, 5),
                bounds,
            }
        );
    }
}
