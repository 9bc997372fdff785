//! This module contains all the constants used by the maze core.

/// The edge length of a square tile, in world units.
///
/// This is also the cost of stepping between two connected tiles.
pub const TILE_SIZE: f32 = 10.0;
/// The height at which tile positions sit above the ground plane.
pub const TILE_HEIGHT: f32 = 2.5;

/// Multiplier applied to the straight-line distance used as the A* heuristic.
///
/// World positions are already expressed in the same units as [`TILE_SIZE`], so the
/// heuristic stays admissible at 1.0.
pub const HEURISTIC_SCALE: f32 = 1.0;

/// The largest width or height accepted by the generator.
pub const MAX_GRID_DIMENSION: u32 = 128;

/// Default grid width, in tiles.
pub const DEFAULT_WIDTH: u32 = 15;
/// Default grid height, in tiles.
pub const DEFAULT_HEIGHT: u32 = 15;
/// Default probability that a generated tile is open floor.
pub const DEFAULT_ACCESSIBLE_RATIO: f32 = 0.7;

/// Number of numeric puzzle markers placed per level.
pub const DEFAULT_OBJECTIVE_SLOTS: usize = 4;
/// Puzzle markers carry a single digit, drawn from `0..PUZZLE_DIGIT_RANGE`.
pub const PUZZLE_DIGIT_RANGE: u8 = 10;

/// Chance that a single obstructed tile turns during [`crate::world::World::rotate_all_tiles`].
pub const ROTATE_ALL_CHANCE: f64 = 0.75;
