//! Tile coordinate types.

use std::fmt;
use std::str::FromStr;

use nalgebra::Vector3;

use crate::error::InvalidPointError;

/// A discrete tile coordinate, 2D or 3D.
///
/// A point without `z` is a 2D tile. When either operand of a binary
/// operation carries `z`, the operation runs with 3D semantics and a
/// missing `z` reads as 0.
///
/// `GridPoint` is also the canonical hashable tile key: `(1, 2)` and
/// `(1, 2, 0)` are different keys, the same way the strings `"1,2"` and
/// `"1,2,0"` are different.
///
/// # Example
///
/// ```
/// use grid_spatial::GridPoint;
///
/// let flat = GridPoint::new(1, 2);
/// let raised = GridPoint::new_3d(1, 2, 0);
///
/// assert!(!flat.is_3d());
/// assert_ne!(flat, raised);
/// assert!(flat.same_tile(raised));
/// assert_eq!(flat.to_string(), "1,2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
    /// Elevation index, absent for 2D tiles.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub z: Option<i32>,
}

impl GridPoint {
    /// Creates a 2D point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y, z: None }
    }

    /// Creates a 3D point.
    #[must_use]
    pub const fn new_3d(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z: Some(z) }
    }

    /// The 2D origin `(0, 0)`.
    #[must_use]
    pub const fn origin() -> Self {
        Self::new(0, 0)
    }

    /// Converts floating-point coordinates into a tile point.
    ///
    /// This is the validation boundary for coordinates that arrive as
    /// numbers from outside the engine.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPointError`] if any coordinate is NaN or infinite,
    /// has a fractional part, or does not fit in an `i32`.
    ///
    /// # Example
    ///
    /// ```
    /// use grid_spatial::GridPoint;
    ///
    /// let p = GridPoint::from_f64(3.0, -4.0, Some(1.0)).unwrap();
    /// assert_eq!(p, GridPoint::new_3d(3, -4, 1));
    ///
    /// assert!(GridPoint::from_f64(0.5, 0.0, None).is_err());
    /// ```
    pub fn from_f64(x: f64, y: f64, z: Option<f64>) -> Result<Self, InvalidPointError> {
        let x = tile_index('x', x)?;
        let y = tile_index('y', y)?;
        let z = z.map(|value| tile_index('z', value)).transpose()?;
        Ok(Self { x, y, z })
    }

    /// Returns `true` if the point carries an elevation.
    #[must_use]
    pub const fn is_3d(self) -> bool {
        self.z.is_some()
    }

    /// Elevation, reading a missing `z` as 0.
    #[must_use]
    pub const fn z_or_zero(self) -> i32 {
        match self.z {
            Some(z) => z,
            None => 0,
        }
    }

    /// Returns this point with the given elevation.
    #[must_use]
    pub const fn with_z(self, z: Option<i32>) -> Self {
        Self { z, ..self }
    }

    /// Coordinate-wise equality, reading a missing `z` as 0.
    ///
    /// Unlike `==`, `(1, 2)` and `(1, 2, 0)` are the same tile here.
    #[must_use]
    pub const fn same_tile(self, other: Self) -> bool {
        self.x == other.x && self.y == other.y && self.z_or_zero() == other.z_or_zero()
    }

    /// Returns the coordinate as `[x, y, z]` with a missing `z` as 0.
    #[must_use]
    pub const fn as_array(self) -> [i32; 3] {
        [self.x, self.y, self.z_or_zero()]
    }

    /// Converts to a floating-point vector, missing `z` as 0.
    #[must_use]
    pub fn to_vector(self) -> Vector3<f64> {
        Vector3::new(
            f64::from(self.x),
            f64::from(self.y),
            f64::from(self.z_or_zero()),
        )
    }

    /// Offsets the point. The result is 3D if `self` is 3D or `dz` is non-zero.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        let z = match self.z {
            Some(z) => Some(z.wrapping_add(dz)),
            None if dz != 0 => Some(dz),
            None => None,
        };
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
            z,
        }
    }

    /// Returns the 8 planar neighbours, keeping this point's elevation.
    ///
    /// # Example
    ///
    /// ```
    /// use grid_spatial::GridPoint;
    ///
    /// let neighbors = GridPoint::new(0, 0).planar_neighbors();
    /// assert_eq!(neighbors.len(), 8);
    /// assert!(neighbors.contains(&GridPoint::new(1, 1)));
    /// ```
    #[must_use]
    pub fn planar_neighbors(self) -> [Self; 8] {
        let mut result = [self; 8];
        let mut idx = 0;

        for dx in -1i32..=1 {
            for dy in -1i32..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                result[idx] = Self {
                    x: self.x.wrapping_add(dx),
                    y: self.y.wrapping_add(dy),
                    z: self.z,
                };
                idx += 1;
            }
        }

        result
    }

    /// Returns all 26 neighbours in 3D. Every neighbour carries `z`.
    ///
    /// # Example
    ///
    /// ```
    /// use grid_spatial::GridPoint;
    ///
    /// let neighbors = GridPoint::new(0, 0).all_neighbors();
    /// assert_eq!(neighbors.len(), 26);
    /// assert!(neighbors.iter().all(|n| n.is_3d()));
    /// ```
    #[must_use]
    pub fn all_neighbors(self) -> [Self; 26] {
        let base = self.z_or_zero();
        let mut result = [Self::new_3d(self.x, self.y, base); 26];
        let mut idx = 0;

        for dx in -1i32..=1 {
            for dy in -1i32..=1 {
                for dz in -1i32..=1 {
                    if dx == 0 && dy == 0 && dz == 0 {
                        continue;
                    }
                    result[idx] = Self::new_3d(
                        self.x.wrapping_add(dx),
                        self.y.wrapping_add(dy),
                        base.wrapping_add(dz),
                    );
                    idx += 1;
                }
            }
        }

        result
    }

    /// Number of axes that differ between two points (missing `z` as 0).
    #[must_use]
    pub fn axes_changed(self, other: Self) -> usize {
        let [ax, ay, az] = self.as_array();
        let [bx, by, bz] = other.as_array();
        usize::from(ax != bx) + usize::from(ay != by) + usize::from(az != bz)
    }

    /// Returns `true` if `other` is one grid step away (8- or 26-connected).
    #[must_use]
    pub fn is_adjacent(self, other: Self) -> bool {
        let [ax, ay, az] = self.as_array();
        let [bx, by, bz] = other.as_array();
        let (dx, dy, dz) = (ax.abs_diff(bx), ay.abs_diff(by), az.abs_diff(bz));
        dx.max(dy).max(dz) == 1
    }
}

fn tile_index(axis: char, value: f64) -> Result<i32, InvalidPointError> {
    if !value.is_finite() {
        return Err(InvalidPointError::NonFinite { axis, value });
    }
    if value.fract() != 0.0 {
        return Err(InvalidPointError::Fractional { axis, value });
    }
    if value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
        return Err(InvalidPointError::Overflow { axis, value });
    }
    #[allow(clippy::cast_possible_truncation)]
    let index = value as i32;
    Ok(index)
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.z {
            Some(z) => write!(f, "{},{},{}", self.x, self.y, z),
            None => write!(f, "{},{}", self.x, self.y),
        }
    }
}

impl FromStr for GridPoint {
    type Err = InvalidPointError;

    /// Parses the legacy `"x,y"` / `"x,y,z"` key form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidPointError::InvalidKey(s.to_string());
        let parts = s
            .split(',')
            .map(|part| part.trim().parse::<i32>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;

        match parts.as_slice() {
            [x, y] => Ok(Self::new(*x, *y)),
            [x, y, z] => Ok(Self::new_3d(*x, *y, *z)),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<[f64; 2]> for GridPoint {
    type Error = InvalidPointError;

    fn try_from([x, y]: [f64; 2]) -> Result<Self, Self::Error> {
        Self::from_f64(x, y, None)
    }
}

impl TryFrom<[f64; 3]> for GridPoint {
    type Error = InvalidPointError;

    fn try_from([x, y, z]: [f64; 3]) -> Result<Self, Self::Error> {
        Self::from_f64(x, y, Some(z))
    }
}

impl From<(i32, i32)> for GridPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<(i32, i32, i32)> for GridPoint {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new_3d(x, y, z)
    }
}

impl std::ops::Add for GridPoint {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let z = match (self.z, other.z) {
            (None, None) => None,
            _ => Some(self.z_or_zero().wrapping_add(other.z_or_zero())),
        };
        Self {
            x: self.x.wrapping_add(other.x),
            y: self.y.wrapping_add(other.y),
            z,
        }
    }
}

impl std::ops::Sub for GridPoint {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        let z = match (self.z, other.z) {
            (None, None) => None,
            _ => Some(self.z_or_zero().wrapping_sub(other.z_or_zero())),
        };
        Self {
            x: self.x.wrapping_sub(other.x),
            y: self.y.wrapping_sub(other.y),
            z,
        }
    }
}
