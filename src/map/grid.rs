//! The tile grid: storage, lookups and random access.

use glam::{IVec2, UVec2};
use rand::Rng;
use smallvec::SmallVec;

use crate::error::WorldError;

use super::rotation::Rotation;
use super::tile::{Accessibility, Tile, TileId};

/// The rectangular grid of tiles making up one level.
///
/// Tiles are stored in generation order (x-major, then y), so a tile's [`TileId`] is
/// `x * height + y` and the start tile is always id `0`.
#[derive(Debug, Clone)]
pub struct Grid {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
    start: TileId,
}

impl Grid {
    /// Wraps already-generated tiles. Callers guarantee generation order.
    pub(crate) fn from_tiles(width: u32, height: u32, tiles: Vec<Tile>) -> Self {
        debug_assert_eq!(tiles.len(), (width * height) as usize);
        Self {
            width,
            height,
            tiles,
            start: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The grid dimensions, in tiles.
    pub fn dimensions(&self) -> UVec2 {
        UVec2::new(self.width, self.height)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The first generated tile; always open floor.
    pub fn start(&self) -> TileId {
        self.start
    }

    pub fn contains(&self, coord: IVec2) -> bool {
        coord.x >= 0 && coord.y >= 0 && (coord.x as u32) < self.width && (coord.y as u32) < self.height
    }

    /// Translates a grid coordinate to a tile id.
    pub fn id_of(&self, coord: UVec2) -> Option<TileId> {
        (coord.x < self.width && coord.y < self.height).then(|| (coord.x * self.height + coord.y) as TileId)
    }

    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id)
    }

    pub fn tile_at(&self, coord: UVec2) -> Option<&Tile> {
        self.id_of(coord).and_then(|id| self.tile(id))
    }

    pub(crate) fn tile_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.tiles.get_mut(id)
    }

    /// Iterates over all tiles with their ids, in generation order.
    pub fn tiles(&self) -> impl Iterator<Item = (TileId, &Tile)> {
        self.tiles.iter().enumerate()
    }

    /// The ids of the tiles linked to `id`.
    pub fn neighbors_of(&self, id: TileId) -> SmallVec<[TileId; 4]> {
        self.tile(id)
            .map(|tile| tile.neighbors().iter().map(|(_, neighbor)| neighbor).collect())
            .unwrap_or_default()
    }

    /// Picks a tile uniformly at random.
    pub fn random_tile<R: Rng + ?Sized>(&self, rng: &mut R) -> TileId {
        let x = rng.random_range(0..self.width);
        let y = rng.random_range(0..self.height);
        (x * self.height + y) as TileId
    }

    /// Counts tiles matching a predicate.
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Tile) -> bool,
    {
        self.tiles.iter().filter(|tile| predicate(tile)).count()
    }

    /// Sets the rotation of an obstructed tile immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the tile does not exist or is open floor.
    pub fn set_rotation(&mut self, id: TileId, rotation: Rotation) -> Result<(), WorldError> {
        let tile = self.tile_mut(id).ok_or(WorldError::TileNotFound(id))?;
        match tile.accessibility() {
            Accessibility::Open => Err(WorldError::NotRotatable(tile.coord)),
            Accessibility::Obstructed(_) => {
                tile.set_rotation(rotation);
                Ok(())
            }
        }
    }
}
