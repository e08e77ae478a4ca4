//! Pathfinding for tactical tile grids.
//!
//! This crate finds movement paths over `grid-spatial` tiles using the
//! `tactics-types` options and path types.
//!
//! # Overview
//!
//! - **A\*** ([`astar::GridAStar`]): 8-connected in 2D, 26-connected in 3D,
//!   Chebyshev heuristic, configurable diagonal and terrain costs
//! - **Path Smoothing** ([`smooth::PathSmoother`]): line-of-sight string
//!   pulling, plus [`smooth::remove_collinear`]
//! - **Priority Queue** ([`queue::PriorityQueue`]): the min-heap behind the
//!   open set
//!
//! # Quick Start
//!
//! ```
//! use tactics_pathfind::{astar::GridAStar, smooth::PathSmoother};
//! use tactics_types::{DiagonalCost, PathfindingOptions};
//! use grid_spatial::{GridPoint, TileSet};
//!
//! let mut walls = TileSet::new();
//! walls.insert(GridPoint::new(5, 0));
//!
//! let options = PathfindingOptions::default().with_diagonal_cost(DiagonalCost::Alternating);
//! let pathfinder = GridAStar::new(&walls, options);
//!
//! let path = pathfinder
//!     .find_path(GridPoint::new(0, 0), GridPoint::new(10, 0))
//!     .unwrap()
//!     .expect("Path should exist");
//! assert!(path.is_connected());
//!
//! let smoothed = PathSmoother::new(&walls).smooth(&path);
//! assert!(smoothed.len() <= path.len());
//! ```
//!
//! # Costs
//!
//! Each step costs `move_cost(from, to) * terrain(to)`:
//!
//! | Diagonal policy | Orthogonal | Diagonal |
//! |-----------------|------------|----------|
//! | `Uniform` | 1 | 1 |
//! | `Alternating` | 1 | 1.5 |
//! | `Fixed(c)` | 1 | c |
//!
//! A movement cost override replaces the policy column entirely. Steps whose
//! cost comes out infinite, NaN or negative are never taken.
//!
//! # Budget
//!
//! Every search stops after `max_iterations` open-set extractions and
//! reports "no path". That is a normal outcome, not an error: callers decide
//! whether to retry with a larger budget.

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

pub mod astar;
pub mod cost;
pub mod neighbors;
pub mod queue;
pub mod smooth;

// Re-export main entry points at crate root
pub use astar::{GridAStar, find_path};
pub use queue::PriorityQueue;
pub use smooth::{PathSmoother, remove_collinear, smooth_path};
