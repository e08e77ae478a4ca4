//! Error types for point validation.

use crate::bounds::GridBounds;
use crate::point::GridPoint;

/// Errors raised when a point fails validation.
///
/// These are caller errors: they are reported before any search or scan
/// begins and retrying with the same input will fail the same way.
///
/// # Example
///
/// ```
/// use grid_spatial::{GridPoint, InvalidPointError};
///
/// let err = GridPoint::from_f64(f64::NAN, 0.0, None).unwrap_err();
/// assert!(matches!(err, InvalidPointError::NonFinite { axis: 'x', .. }));
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum InvalidPointError {
    /// A coordinate was NaN or infinite.
    #[error("coordinate {axis} is not finite: {value}")]
    NonFinite {
        /// Axis name (`x`, `y` or `z`).
        axis: char,
        /// The offending value.
        value: f64,
    },

    /// A coordinate was finite but not a whole tile index.
    #[error("coordinate {axis} is not a whole tile index: {value}")]
    Fractional {
        /// Axis name (`x`, `y` or `z`).
        axis: char,
        /// The offending value.
        value: f64,
    },

    /// A coordinate does not fit in an `i32` tile index.
    #[error("coordinate {axis} is outside the representable grid: {value}")]
    Overflow {
        /// Axis name (`x`, `y` or `z`).
        axis: char,
        /// The offending value.
        value: f64,
    },

    /// The point lies outside the caller-supplied bounds.
    #[error("point {point} is outside bounds {bounds}")]
    OutOfBounds {
        /// The rejected point.
        point: GridPoint,
        /// The bounds it was checked against.
        bounds: GridBounds,
    },

    /// A legacy string key could not be parsed as `"x,y"` or `"x,y,z"`.
    #[error("invalid tile key {0:?}")]
    InvalidKey(String),
}
