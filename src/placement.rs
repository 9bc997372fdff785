//! Door and objective placement on a generated grid.

use glam::UVec2;
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::{debug, warn};

use crate::constants::PUZZLE_DIGIT_RANGE;
use crate::error::PlacementError;
use crate::map::grid::Grid;
use crate::map::tile::{Marker, TileId};

/// A puzzle digit attached to a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleMarker {
    pub tile: TileId,
    pub coord: UVec2,
    pub digit: u8,
}

/// Everything objective placement decided, for the embedding layer to persist and validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectivePlacement {
    /// Puzzle markers, in slot order.
    pub puzzles: Vec<PuzzleMarker>,
    /// The tile holding the key.
    pub key: TileId,
    pub key_coord: UVec2,
}

impl ObjectivePlacement {
    /// The code the player has to find, in slot order.
    pub fn digits(&self) -> Vec<u8> {
        self.puzzles.iter().map(|marker| marker.digit).collect()
    }
}

/// Turns `cap` distinct obstructed tiles into closed doors.
///
/// Doors are drawn uniformly from the obstructed tiles that are not already doors, so placement
/// always finishes once the grid has enough of them.
///
/// # Errors
///
/// Returns [`PlacementError::NotEnoughObstructedTiles`] if fewer than `cap` tiles can take a door.
pub fn place_doors<R: Rng + ?Sized>(grid: &mut Grid, cap: usize, rng: &mut R) -> Result<usize, PlacementError> {
    if cap == 0 {
        return Ok(0);
    }

    let eligible: Vec<TileId> = grid
        .tiles()
        .filter(|(_, tile)| !tile.is_accessible() && !tile.is_door())
        .map(|(id, _)| id)
        .collect();

    if eligible.len() < cap {
        warn!(required = cap, available = eligible.len(), "Not enough obstructed tiles for doors");
        return Err(PlacementError::NotEnoughObstructedTiles {
            required: cap,
            available: eligible.len(),
        });
    }

    let mut placed = 0;
    for &id in eligible.choose_multiple(rng, cap) {
        if let Some(tile) = grid.tile_mut(id) {
            tile.make_door();
            placed += 1;
            debug!(x = tile.coord.x, y = tile.coord.y, placed, "Placed door");
        }
    }

    debug!(doors = placed, eligible = eligible.len(), "Door placement finished");
    Ok(placed)
}

/// Attaches `slots` puzzle digits and one key to random tiles of any kind.
///
/// Slots may share a tile; each digit is drawn independently from `0..10`.
pub fn place_objectives<R: Rng + ?Sized>(grid: &mut Grid, slots: usize, rng: &mut R) -> ObjectivePlacement {
    let mut puzzles = Vec::with_capacity(slots);

    for _ in 0..slots {
        let id = grid.random_tile(rng);
        let digit = rng.random_range(0..PUZZLE_DIGIT_RANGE);
        if let Some(tile) = grid.tile_mut(id) {
            tile.attach(Marker::Puzzle(digit));
            puzzles.push(PuzzleMarker {
                tile: id,
                coord: tile.coord,
                digit,
            });
        }
    }

    let key = grid.random_tile(rng);
    let mut key_coord = UVec2::ZERO;
    if let Some(tile) = grid.tile_mut(key) {
        tile.attach(Marker::Key);
        key_coord = tile.coord;
    }

    debug!(slots = puzzles.len(), key_x = key_coord.x, key_y = key_coord.y, "Placed objectives");

    ObjectivePlacement {
        puzzles,
        key,
        key_coord,
    }
}
