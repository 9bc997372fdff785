//! Links each tile to its orthogonal neighbors.

use glam::IVec2;
use tracing::debug;

use super::direction::Direction;
use super::grid::Grid;

/// Links every tile to each in-bounds orthogonal neighbor.
///
/// This is a pure function of the grid geometry: no diagonals and no wraparound. Whether a link
/// can actually be walked is decided later, per query, by [`crate::map::access`].
pub fn connect(grid: &mut Grid) {
    let mut links = 0usize;

    for id in 0..grid.len() {
        let Some(coord) = grid.tile(id).map(|tile| tile.coord.as_ivec2()) else {
            continue;
        };

        for dir in Direction::DIRECTIONS {
            let neighbor: IVec2 = coord + dir.as_ivec2();

            // Skip if the neighbor is out of bounds
            if !grid.contains(neighbor) {
                continue;
            }

            let Some(neighbor_id) = grid.id_of(neighbor.as_uvec2()) else {
                continue;
            };

            if let Some(tile) = grid.tile_mut(id) {
                tile.neighbors.set(dir, neighbor_id);
                links += 1;
            }
        }
    }

    debug!(tiles = grid.len(), links, "Connected grid");
}
