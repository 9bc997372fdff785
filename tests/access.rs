mod common;

use common::{grid_from_rows, id, open_grid};
use speculoos::prelude::*;
use tilemaze::map::access::{is_traversable, traversable_neighbors};

#[test]
fn test_open_grid_fully_traversable() {
    let grid = open_grid(3, 3);
    for (tile_id, _) in grid.tiles() {
        let expected = grid.neighbors_of(tile_id).len();
        assert_that(&traversable_neighbors(&grid, tile_id).count()).is_equal_to(expected);
    }
}

#[test]
fn test_wall_blocks_in_both_directions() {
    // (1,0) has its wall facing right, towards (2,0)
    let grid = grid_from_rows(&[".>.", "...", "..."]);
    let wall = id(&grid, 1, 0);
    let right = id(&grid, 2, 0);
    let left = id(&grid, 0, 0);

    assert_that(&is_traversable(&grid, wall, right)).is_false();
    assert_that(&is_traversable(&grid, right, wall)).is_false();
    assert_that(&is_traversable(&grid, wall, left)).is_true();
    assert_that(&is_traversable(&grid, left, wall)).is_true();
    assert_that(&is_traversable(&grid, wall, id(&grid, 1, 1))).is_true();
}

#[test]
fn test_facing_walls_between_obstructed_tiles() {
    // Forward is +y: (0,1) faces forward into (0,2), which faces back into (0,1)
    let grid = grid_from_rows(&["..", "^.", "v."]);
    assert_that(&is_traversable(&grid, id(&grid, 0, 1), id(&grid, 0, 2))).is_false();

    // Two walls facing away from each other leave the step open
    let grid = grid_from_rows(&["..", "v.", "^."]);
    assert_that(&is_traversable(&grid, id(&grid, 0, 1), id(&grid, 0, 2))).is_true();
}

#[test]
fn test_non_adjacent_and_unknown_tiles() {
    let grid = open_grid(3, 3);
    let corner = id(&grid, 0, 0);

    assert_that(&is_traversable(&grid, corner, corner)).is_false();
    assert_that(&is_traversable(&grid, corner, id(&grid, 1, 1))).is_false();
    assert_that(&is_traversable(&grid, corner, id(&grid, 2, 0))).is_false();
    assert_that(&is_traversable(&grid, corner, 500)).is_false();
    assert_that(&traversable_neighbors(&grid, 500).count()).is_equal_to(0);
}

#[test]
fn test_rotation_changes_traversability() {
    let mut grid = grid_from_rows(&[".<.", "...", "..."]);
    let wall = id(&grid, 1, 0);
    let left = id(&grid, 0, 0);
    assert_that(&is_traversable(&grid, left, wall)).is_false();

    let rotation = grid.tile(wall).and_then(|tile| tile.rotation()).unwrap();
    grid.set_rotation(wall, rotation.turned()).unwrap();
    assert_that(&is_traversable(&grid, left, wall)).is_true();
}
