use bitflags::bitflags;
use glam::{UVec2, Vec3};
use smallvec::SmallVec;

use super::direction::Direction;
use super::rotation::Rotation;

/// A unique identifier for a tile, represented by its index in the grid's storage.
pub type TileId = usize;

/// Whether a tile is open floor or carries a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accessibility {
    /// Open floor; never blocks movement on its own.
    Open,
    /// A wall-bearing tile, oriented by its rotation.
    Obstructed(Rotation),
}

bitflags! {
    /// State toggled on a tile after generation, mostly on behalf of the embedding layer.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct TileFlags: u8 {
        /// The tile is rendered.
        const VISIBLE = 1 << 0;
        /// The tile's info placard is shown.
        const PLACARD_VISIBLE = 1 << 1;
        /// The tile is a door.
        const DOOR = 1 << 2;
        /// The door has been opened with the key.
        const DOOR_OPEN = 1 << 3;
    }
}

impl Default for TileFlags {
    fn default() -> Self {
        TileFlags::VISIBLE | TileFlags::PLACARD_VISIBLE
    }
}

/// An objective attached to a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// A pedestal showing one digit of the level's code.
    Puzzle(u8),
    /// The key that opens doors.
    Key,
}

/// The neighbors of a tile, one optional slot per direction.
///
/// Mirrors the shape of a graph intersection: O(1) lookup in any direction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Neighbors {
    pub left: Option<TileId>,
    pub right: Option<TileId>,
    pub back: Option<TileId>,
    pub forward: Option<TileId>,
}

impl Neighbors {
    /// Returns an iterator over the linked neighbors, in a stable order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, TileId)> + '_ {
        Direction::DIRECTIONS
            .into_iter()
            .filter_map(|dir| self.get(dir).map(|id| (dir, id)))
    }

    /// Retrieves the neighbor in the specified direction, if it exists.
    pub fn get(&self, direction: Direction) -> Option<TileId> {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::Back => self.back,
            Direction::Forward => self.forward,
        }
    }

    /// Finds the direction leading to `target`, if it is a neighbor.
    pub fn direction_to(&self, target: TileId) -> Option<Direction> {
        self.iter().find(|&(_, id)| id == target).map(|(dir, _)| dir)
    }

    /// Returns the number of linked neighbors.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn set(&mut self, direction: Direction, tile: TileId) {
        match direction {
            Direction::Left => self.left = Some(tile),
            Direction::Right => self.right = Some(tile),
            Direction::Back => self.back = Some(tile),
            Direction::Forward => self.forward = Some(tile),
        }
    }
}

/// A single cell of the maze.
#[derive(Debug, Clone)]
pub struct Tile {
    /// Integer grid coordinate, unique within a grid.
    pub coord: UVec2,
    /// Center of the tile in world space.
    pub position: Vec3,
    pub(crate) accessibility: Accessibility,
    pub(crate) flags: TileFlags,
    pub(crate) neighbors: Neighbors,
    pub(crate) markers: SmallVec<[Marker; 2]>,
}

impl Tile {
    pub fn new(coord: UVec2, position: Vec3, accessibility: Accessibility) -> Self {
        Self {
            coord,
            position,
            accessibility,
            flags: TileFlags::default(),
            neighbors: Neighbors::default(),
            markers: SmallVec::new(),
        }
    }

    pub fn accessibility(&self) -> Accessibility {
        self.accessibility
    }

    /// Returns `true` for open floor.
    pub fn is_accessible(&self) -> bool {
        matches!(self.accessibility, Accessibility::Open)
    }

    /// The rotation of an obstructed tile; `None` for open floor.
    pub fn rotation(&self) -> Option<Rotation> {
        match self.accessibility {
            Accessibility::Open => None,
            Accessibility::Obstructed(rotation) => Some(rotation),
        }
    }

    /// The side carrying this tile's wall, if it currently has one.
    ///
    /// Open floor and opened doors have no wall.
    pub fn wall_side(&self) -> Option<Direction> {
        if self.is_open_door() {
            return None;
        }
        self.rotation().map(Rotation::wall_side)
    }

    pub fn flags(&self) -> TileFlags {
        self.flags
    }

    pub fn is_door(&self) -> bool {
        self.flags.contains(TileFlags::DOOR)
    }

    pub fn is_open_door(&self) -> bool {
        self.flags.contains(TileFlags::DOOR | TileFlags::DOOR_OPEN)
    }

    pub fn is_visible(&self) -> bool {
        self.flags.contains(TileFlags::VISIBLE)
    }

    pub fn is_placard_visible(&self) -> bool {
        self.flags.contains(TileFlags::PLACARD_VISIBLE)
    }

    pub fn neighbors(&self) -> &Neighbors {
        &self.neighbors
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub(crate) fn set_rotation(&mut self, rotation: Rotation) {
        if let Accessibility::Obstructed(current) = &mut self.accessibility {
            *current = rotation;
        }
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.flags.set(TileFlags::VISIBLE, visible);
    }

    /// Marks the tile as a (closed) door and hides its placard.
    pub(crate) fn make_door(&mut self) {
        self.flags.insert(TileFlags::DOOR);
        self.flags.remove(TileFlags::DOOR_OPEN | TileFlags::PLACARD_VISIBLE);
    }

    pub(crate) fn open_door(&mut self) {
        if self.is_door() {
            self.flags.insert(TileFlags::DOOR_OPEN);
        }
    }

    pub(crate) fn attach(&mut self, marker: Marker) {
        self.markers.push(marker);
    }
}
