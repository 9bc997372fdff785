//! Live traversability between adjacent tiles.
//!
//! Every obstructed tile carries a single wall, and its [`Rotation`](super::rotation::Rotation)
//! decides which side that wall faces. A step from `a` to `b` in direction `d` is blocked when
//! `a`'s wall faces `d`, or when `b`'s wall faces back towards `a`. Two open tiles are always
//! connected. Opened doors carry no wall.
//!
//! Nothing here is cached: rotations can change between queries.

use super::direction::Direction;
use super::grid::Grid;
use super::tile::{Tile, TileId};

/// Returns `true` if the wall layout allows stepping from `from` in `direction` into `to`.
///
/// The caller guarantees `to` lies one step from `from` in `direction`.
pub fn can_step(from: &Tile, to: &Tile, direction: Direction) -> bool {
    if from.is_accessible() && to.is_accessible() {
        return true;
    }

    let blocked_leaving = from.wall_side() == Some(direction);
    let blocked_entering = to.wall_side() == Some(direction.opposite());

    !(blocked_leaving || blocked_entering)
}

/// Returns `true` if `to` is a linked neighbor of `from` and the step between them is open.
///
/// Unknown ids, identical ids and non-adjacent tiles are never traversable.
pub fn is_traversable(grid: &Grid, from: TileId, to: TileId) -> bool {
    let (Some(from_tile), Some(to_tile)) = (grid.tile(from), grid.tile(to)) else {
        return false;
    };

    match from_tile.neighbors().direction_to(to) {
        Some(direction) => can_step(from_tile, to_tile, direction),
        None => false,
    }
}

/// The neighbors of `id` that can be entered from it right now.
pub fn traversable_neighbors(grid: &Grid, id: TileId) -> impl Iterator<Item = TileId> + '_ {
    let tile = grid.tile(id);
    tile.into_iter().flat_map(move |from| {
        from.neighbors().iter().filter_map(move |(dir, neighbor)| {
            let to = grid.tile(neighbor)?;
            can_step(from, to, dir).then_some(neighbor)
        })
    })
}
