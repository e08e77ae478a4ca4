//! Field of view by recursive shadowcasting.
//!
//! # Algorithm
//!
//! The plane around the origin is split into eight octants. Each octant is
//! swept row by row outward from the origin, keeping a window of slopes that
//! is still lit. When a row runs into an opaque tile the part of the window
//! above it is handed to the next row as a narrower scan, and the current row
//! continues looking for the point where light reappears.
//!
//! Scans are kept on an explicit work stack rather than the call stack, so
//! large ranges cannot overflow it. Every scan is fully determined by its
//! `(row, start_slope, end_slope)` triple, so the lit set is the same as the
//! recursive formulation.
//!
//! # Example
//!
//! ```
//! use grid_spatial::{field_of_view, GridPoint, TileSet};
//!
//! let origin = GridPoint::new(0, 0);
//! let mut walls = TileSet::new();
//! walls.insert(GridPoint::new(2, 0));
//!
//! let visible = field_of_view(origin, 5, &walls);
//! assert!(visible.contains(&origin));
//! assert!(visible.contains(&GridPoint::new(2, 0)));   // the wall itself
//! assert!(!visible.contains(&GridPoint::new(4, 0)));  // behind the wall
//! ```

use std::collections::HashSet;

use tracing::trace;

use crate::point::GridPoint;
use crate::tiles::TileSet;

/// Octant transforms `(xx, xy, yx, yy)` mapping row-local offsets to tiles.
const OCTANTS: [[i32; 4]; 8] = [
    [1, 0, 0, 1],
    [0, 1, 1, 0],
    [0, -1, 1, 0],
    [-1, 0, 0, 1],
    [-1, 0, 0, -1],
    [0, -1, -1, 0],
    [0, 1, -1, 0],
    [1, 0, 0, -1],
];

/// A pending sweep of one octant from `row` outward within a slope window.
#[derive(Debug, Clone, Copy)]
struct Scan {
    row: i32,
    start_slope: f64,
    end_slope: f64,
}

/// Computes the set of tiles visible from `origin` within `range`.
///
/// The origin is always visible. Opaque tiles are themselves visible but
/// hide what lies behind them. A tile is within range when
/// `dx² + dy² ≤ range²`. Visible tiles carry the origin's `z`.
#[must_use]
pub fn field_of_view(origin: GridPoint, range: u32, opaque: &TileSet) -> HashSet<GridPoint> {
    let mut visible = HashSet::new();
    visible.insert(origin);

    let range = i32::try_from(range).unwrap_or(i32::MAX);
    if range == 0 {
        return visible;
    }

    for transform in &OCTANTS {
        cast_octant(origin, range, opaque, *transform, &mut visible);
    }

    trace!(
        origin = %origin,
        range,
        visible = visible.len(),
        "field of view computed"
    );

    visible
}

/// Checks whether `target` is inside the field of view from `origin`.
#[must_use]
pub fn is_visible(origin: GridPoint, target: GridPoint, range: u32, opaque: &TileSet) -> bool {
    field_of_view(origin, range, opaque).contains(&target)
}

#[allow(clippy::cast_precision_loss)]
fn cast_octant(
    origin: GridPoint,
    range: i32,
    opaque: &TileSet,
    [xx, xy, yx, yy]: [i32; 4],
    visible: &mut HashSet<GridPoint>,
) {
    let range_squared = i64::from(range) * i64::from(range);
    let mut pending = vec![Scan {
        row: 1,
        start_slope: 1.0,
        end_slope: 0.0,
    }];

    while let Some(scan) = pending.pop() {
        let end_slope = scan.end_slope;
        let mut start_slope = scan.start_slope;
        if start_slope < end_slope {
            continue;
        }

        let mut next_start_slope = start_slope;

        for row in scan.row..=range {
            let dy = -row;
            let mut blocked = false;

            for dx in -row..=0 {
                let left_slope = (f64::from(dx) - 0.5) / (f64::from(dy) + 0.5);
                let right_slope = (f64::from(dx) + 0.5) / (f64::from(dy) - 0.5);

                if start_slope < right_slope {
                    continue;
                }
                if end_slope > left_slope {
                    break;
                }

                let tile = GridPoint {
                    x: origin
                        .x
                        .wrapping_add(dx.wrapping_mul(xx))
                        .wrapping_add(dy.wrapping_mul(xy)),
                    y: origin
                        .y
                        .wrapping_add(dx.wrapping_mul(yx))
                        .wrapping_add(dy.wrapping_mul(yy)),
                    z: origin.z,
                };

                let offset_squared = i64::from(dx) * i64::from(dx) + i64::from(dy) * i64::from(dy);
                if offset_squared <= range_squared {
                    visible.insert(tile);
                }

                let is_opaque = opaque.contains(tile);
                if blocked {
                    if is_opaque {
                        next_start_slope = right_slope;
                    } else {
                        blocked = false;
                        start_slope = next_start_slope;
                    }
                } else if is_opaque && row < range {
                    blocked = true;
                    pending.push(Scan {
                        row: row + 1,
                        start_slope,
                        end_slope: left_slope,
                    });
                    next_start_slope = right_slope;
                }
            }

            if blocked {
                break;
            }
        }
    }
}
