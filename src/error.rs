//! Centralized error types for the maze core.
//!
//! This module defines all error types used throughout the crate,
//! providing a consistent error handling approach.

use glam::UVec2;

use crate::map::tile::TileId;

/// Main error type for the maze core.
///
/// This is the primary error type that should be used in public APIs.
/// It can represent any error that can occur while building or mutating a level.
#[derive(thiserror::Error, Debug)]
pub enum MazeError {
    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Placement error: {0}")]
    Placement(#[from] PlacementError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("World error: {0}")]
    World(#[from] WorldError),
}

/// Errors raised by the grid generator before any tile is created.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GenerationError {
    #[error("Grid dimensions must be within 1..={max}, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32, max: u32 },

    #[error("Accessible ratio must be within [0, 1], got {0}")]
    InvalidRatio(f32),
}

/// Errors raised while placing doors and objectives.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PlacementError {
    #[error("Door cap is {required} but only {available} obstructed tiles can take a door")]
    NotEnoughObstructedTiles { required: usize, available: usize },
}

/// Errors related to level configuration.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(i64),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Failed to load configuration: {0}")]
    Load(Box<figment::Error>),
}

/// Errors raised by operations on a generated world.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WorldError {
    #[error("No world has been generated")]
    NotGenerated,

    #[error("Tile coordinate out of bounds: {0}")]
    CoordinateOutOfBounds(UVec2),

    #[error("Tile not found: {0}")]
    TileNotFound(TileId),

    #[error("Tile {0} is open floor and cannot rotate")]
    NotRotatable(UVec2),

    #[error("Tile {0} is already rotating")]
    RotationInFlight(UVec2),

    #[error("Tile {0} has no rotation in flight")]
    NoRotationInFlight(UVec2),

    #[error("Tile {0} is not a door")]
    NotADoor(UVec2),
}

/// Result type for maze operations.
pub type MazeResult<T> = Result<T, MazeError>;
