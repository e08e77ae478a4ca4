//! Error types for area-of-effect shapes.

use grid_spatial::InvalidPointError;

/// Errors raised when a shape's parameters are unusable.
///
/// Like [`InvalidPointError`], these are reported before any tiles are
/// scanned.
///
/// # Example
///
/// ```
/// use tactics_aoe::{circle_tiles, InvalidShapeError};
/// use grid_spatial::GridPoint;
///
/// let err = circle_tiles(GridPoint::new(0, 0), -1.0, None).unwrap_err();
/// assert!(matches!(err, InvalidShapeError::NegativeRadius(_)));
/// assert!(err.to_string().contains("radius"));
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum InvalidShapeError {
    /// A circle radius was below zero.
    #[error("radius must be non-negative, got {0}")]
    NegativeRadius(f64),

    /// A cone length was below zero.
    #[error("length must be non-negative, got {0}")]
    NegativeLength(f64),

    /// A size parameter was NaN or infinite.
    #[error("{parameter} must be finite, got {value}")]
    NonFinite {
        /// Which parameter (`radius` or `length`).
        parameter: &'static str,
        /// The offending value.
        value: f64,
    },

    /// A cone angle was outside `(0, 360]` degrees.
    #[error("cone angle must be in (0, 360] degrees, got {0}")]
    AngleOutOfRange(f64),

    /// A cone direction had zero length.
    #[error("cone direction must be non-zero")]
    ZeroDirection,

    /// A cone direction had a NaN or infinite component.
    #[error("cone direction must be finite")]
    NonFiniteDirection,

    /// An anchor point failed validation.
    #[error(transparent)]
    Point(#[from] InvalidPointError),
}

/// Checks that a size parameter is finite and non-negative.
pub(crate) fn check_size(
    parameter: &'static str,
    value: f64,
    negative: fn(f64) -> InvalidShapeError,
) -> Result<(), InvalidShapeError> {
    if !value.is_finite() {
        return Err(InvalidShapeError::NonFinite { parameter, value });
    }
    if value < 0.0 {
        return Err(negative(value));
    }
    Ok(())
}
