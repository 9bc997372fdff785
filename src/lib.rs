//! Procedural rotating-tile maze core.
//!
//! Builds a grid of tiles, decides which neighbors are passable from each tile's wall
//! orientation, places doors and objectives, and answers shortest-path queries.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

#[cfg_attr(coverage_nightly, coverage(off))]
pub mod formatter;
#[cfg_attr(coverage_nightly, coverage(off))]
pub mod logging;

pub mod config;
pub mod constants;
pub mod error;
pub mod map;
pub mod placement;
pub mod solver;
pub mod world;

pub use config::{Difficulty, WorldConfig};
pub use error::{MazeError, MazeResult};
pub use solver::{Path, Solution};
pub use world::{RotationJob, World, WorldReport};
