//! Cone-shaped areas.
//!
//! A cone spreads from an origin tile along a direction. A tile is inside
//! when it is within `length` of the origin and the angle between the
//! direction and the tile's offset is at most half the cone angle.
//!
//! # Example
//!
//! ```
//! use tactics_aoe::cone_tiles;
//! use grid_spatial::{GridPoint, Vector3};
//!
//! let breath = cone_tiles(GridPoint::new(0, 0), Vector3::x(), 4.0, 90.0).unwrap();
//!
//! assert!(breath.contains(&GridPoint::new(0, 0)));   // origin always
//! assert!(breath.contains(&GridPoint::new(3, 0)));   // straight ahead
//! assert!(breath.contains(&GridPoint::new(2, 2)));   // on the 45° edge
//! assert!(!breath.contains(&GridPoint::new(-1, 0))); // behind
//! ```

use grid_spatial::{GridPoint, euclidean_distance};
use nalgebra::Vector3;

use crate::error::{InvalidShapeError, check_size};

/// Slack on the cosine test so tiles exactly on the cone edge are kept.
pub const CONE_EPSILON: f64 = 1e-4;

/// Returns the tiles inside a cone.
///
/// For a 2D origin only the `x` and `y` components of `direction` are used
/// and the scan is planar. For a 3D origin the full vector is used and the
/// bounding cube is scanned. The origin tile is always included.
///
/// # Errors
///
/// - [`InvalidShapeError::NegativeLength`] / [`InvalidShapeError::NonFinite`]
///   for an unusable length
/// - [`InvalidShapeError::AngleOutOfRange`] unless `0 < angle_degrees <= 360`
/// - [`InvalidShapeError::NonFiniteDirection`] / [`InvalidShapeError::ZeroDirection`]
///   for an unusable direction
pub fn cone_tiles(
    origin: GridPoint,
    direction: Vector3<f64>,
    length: f64,
    angle_degrees: f64,
) -> Result<Vec<GridPoint>, InvalidShapeError> {
    check_size("length", length, InvalidShapeError::NegativeLength)?;
    if angle_degrees.is_nan() || angle_degrees <= 0.0 || angle_degrees > 360.0 {
        return Err(InvalidShapeError::AngleOutOfRange(angle_degrees));
    }
    let axis = normalized_direction(origin, direction)?;
    let min_cos = (angle_degrees / 2.0).to_radians().cos() - CONE_EPSILON;

    #[allow(clippy::cast_possible_truncation)]
    let reach = length.ceil() as i32;
    let depth = if origin.is_3d() { reach } else { 0 };

    let mut tiles = Vec::new();
    for dx in -reach..=reach {
        for dy in -reach..=reach {
            for dz in -depth..=depth {
                let tile = origin.offset(dx, dy, dz);
                if dx == 0 && dy == 0 && dz == 0 {
                    tiles.push(tile);
                    continue;
                }

                let dist = euclidean_distance(origin, tile);
                if dist > length {
                    continue;
                }

                let offset = Vector3::new(f64::from(dx), f64::from(dy), f64::from(dz));
                if offset.dot(&axis) / dist >= min_cos {
                    tiles.push(tile);
                }
            }
        }
    }

    Ok(tiles)
}

/// Validates and normalises a cone direction for the origin's dimension.
fn normalized_direction(
    origin: GridPoint,
    direction: Vector3<f64>,
) -> Result<Vector3<f64>, InvalidShapeError> {
    if direction.iter().any(|c| !c.is_finite()) {
        return Err(InvalidShapeError::NonFiniteDirection);
    }

    let direction = if origin.is_3d() {
        direction
    } else {
        Vector3::new(direction.x, direction.y, 0.0)
    };

    direction
        .try_normalize(0.0)
        .ok_or(InvalidShapeError::ZeroDirection)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::circle::circle_tiles;
    use std::collections::HashSet;

    fn as_set(tiles: &[GridPoint]) -> HashSet<GridPoint> {
        tiles.iter().copied().collect()
    }

    #[test]
    fn test_full_turn_equals_circle() {
        for length in [0.0, 1.0, 2.5, 6.0] {
            let origin = GridPoint::new(3, 3);
            let cone = cone_tiles(origin, Vector3::new(1.0, 1.0, 0.0), length, 360.0).unwrap();
            let circle = circle_tiles(origin, length, None).unwrap();
            assert_eq!(as_set(&cone), as_set(&circle));
        }
    }

    #[test]
    fn test_zero_length_is_origin() {
        let origin = GridPoint::new(1, 2);
        let tiles = cone_tiles(origin, Vector3::y(), 0.0, 60.0).unwrap();
        assert_eq!(tiles, vec![origin]);
    }

    #[test]
    fn test_narrow_cone_is_a_ray() {
        let tiles = cone_tiles(GridPoint::new(0, 0), Vector3::y(), 3.0, 1.0).unwrap();
        let expected: HashSet<_> = (0..=3).map(|y| GridPoint::new(0, y)).collect();
        assert_eq!(as_set(&tiles), expected);
    }

    #[test]
    fn test_edge_tiles_within_epsilon() {
        // (2, 2) sits exactly on the 45° boundary of a 90° cone along +x
        let tiles = cone_tiles(GridPoint::new(0, 0), Vector3::x(), 3.0, 90.0).unwrap();
        assert!(tiles.contains(&GridPoint::new(2, 2)));
        assert!(tiles.contains(&GridPoint::new(2, -2)));
        assert!(!tiles.contains(&GridPoint::new(1, 2)));
    }

    #[test]
    fn test_direction_magnitude_is_irrelevant() {
        let origin = GridPoint::new(0, 0);
        let unit = cone_tiles(origin, Vector3::new(1.0, 2.0, 0.0), 5.0, 45.0).unwrap();
        let long = cone_tiles(origin, Vector3::new(10.0, 20.0, 0.0), 5.0, 45.0).unwrap();
        assert_eq!(unit, long);
    }

    #[test]
    fn test_2d_origin_ignores_direction_z() {
        let origin = GridPoint::new(0, 0);
        let tilted = cone_tiles(origin, Vector3::new(1.0, 0.0, 5.0), 4.0, 60.0).unwrap();
        let flat = cone_tiles(origin, Vector3::x(), 4.0, 60.0).unwrap();
        assert_eq!(tilted, flat);
        assert!(tilted.iter().all(|t| !t.is_3d()));
    }

    #[test]
    fn test_3d_cone_points_up() {
        let origin = GridPoint::new_3d(0, 0, 0);
        let tiles = cone_tiles(origin, Vector3::z(), 3.0, 30.0).unwrap();
        assert!(tiles.contains(&GridPoint::new_3d(0, 0, 3)));
        assert!(!tiles.contains(&GridPoint::new_3d(0, 0, -1)));
        assert!(!tiles.contains(&GridPoint::new_3d(2, 0, 0)));
    }

    #[test]
    fn test_rejects_bad_parameters() {
        let origin = GridPoint::new(0, 0);
        assert_eq!(
            cone_tiles(origin, Vector3::x(), -1.0, 90.0),
            Err(InvalidShapeError::NegativeLength(-1.0))
        );
        assert_eq!(
            cone_tiles(origin, Vector3::x(), 3.0, 0.0),
            Err(InvalidShapeError::AngleOutOfRange(0.0))
        );
        assert_eq!(
            cone_tiles(origin, Vector3::x(), 3.0, 361.0),
            Err(InvalidShapeError::AngleOutOfRange(361.0))
        );
        assert!(matches!(
            cone_tiles(origin, Vector3::x(), 3.0, f64::NAN),
            Err(InvalidShapeError::AngleOutOfRange(_))
        ));
        assert_eq!(
            cone_tiles(origin, Vector3::zeros(), 3.0, 90.0),
            Err(InvalidShapeError::ZeroDirection)
        );
        assert_eq!(
            cone_tiles(origin, Vector3::z(), 3.0, 90.0),
            Err(InvalidShapeError::ZeroDirection)
        );
        assert_eq!(
            cone_tiles(origin, Vector3::new(f64::NAN, 0.0, 0.0), 3.0, 90.0),
            Err(InvalidShapeError::NonFiniteDirection)
        );
    }
}
