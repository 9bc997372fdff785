mod common;

use common::{open_grid, rng};
use glam::UVec2;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;
use tilemaze::constants::PUZZLE_DIGIT_RANGE;
use tilemaze::error::PlacementError;
use tilemaze::map::generator::build_with;
use tilemaze::map::rotation::Rotation;
use tilemaze::map::tile::{Accessibility, Marker};
use tilemaze::placement::{place_doors, place_objectives};

fn walled_grid(size: u32) -> tilemaze::map::grid::Grid {
    build_with(size, size, |_| Accessibility::Obstructed(Rotation::Deg90)).unwrap()
}

#[test]
fn test_places_exactly_cap_doors() {
    for seed in 0..20 {
        let mut grid = walled_grid(6);
        let placed = place_doors(&mut grid, 5, &mut rng(seed)).unwrap();

        assert_that(&placed).is_equal_to(5);
        assert_that(&grid.count(|tile| tile.is_door())).is_equal_to(5);
        assert_that(&grid.tiles().filter(|(_, t)| t.is_door()).all(|(_, t)| !t.is_accessible())).is_true();
    }
}

#[test]
fn test_sparse_obstructed_tiles_all_become_doors() {
    let walls = [
        UVec2::new(3, 7),
        UVec2::new(64, 64),
        UVec2::new(127, 0),
        UVec2::new(0, 127),
        UVec2::new(127, 127),
    ];

    for seed in 0..20 {
        let mut grid = build_with(128, 128, |coord| {
            if walls.contains(&coord) {
                Accessibility::Obstructed(Rotation::Deg180)
            } else {
                Accessibility::Open
            }
        })
        .unwrap();

        assert_eq!(place_doors(&mut grid, 5, &mut rng(seed)), Ok(5), "seed {seed}");

        let mut doors: Vec<UVec2> = grid.tiles().filter(|(_, t)| t.is_door()).map(|(_, t)| t.coord).collect();
        doors.sort_by_key(|coord| (coord.x, coord.y));
        let mut expected = walls.to_vec();
        expected.sort_by_key(|coord| (coord.x, coord.y));
        assert_eq!(doors, expected);
    }
}

#[test]
fn test_doors_only_on_obstructed_tiles_in_mixed_grid() {
    let mut grid = build_with(20, 20, |coord| {
        if (coord.x + coord.y) % 7 == 0 {
            Accessibility::Obstructed(Rotation::Deg0)
        } else {
            Accessibility::Open
        }
    })
    .unwrap();
    let obstructed = grid.count(|tile| !tile.is_accessible());

    let placed = place_doors(&mut grid, 5, &mut rng(4)).unwrap();
    assert_that(&placed).is_equal_to(5);
    assert_that(&grid.tiles().filter(|(_, t)| t.is_door()).all(|(_, t)| !t.is_accessible())).is_true();
    assert_that(&grid.count(|tile| !tile.is_accessible())).is_equal_to(obstructed);
}

#[test]
fn test_doors_start_closed_without_placard() {
    let mut grid = walled_grid(4);
    place_doors(&mut grid, 3, &mut rng(2)).unwrap();

    for (_, tile) in grid.tiles().filter(|(_, t)| t.is_door()) {
        assert_that(&tile.is_open_door()).is_false();
        assert_that(&tile.is_placard_visible()).is_false();
        assert_that(&tile.wall_side().is_some()).is_true();
    }
}

#[test]
fn test_every_obstructed_tile_can_become_a_door() {
    // 3x3 leaves exactly eight obstructed tiles after the forced-open start
    let mut grid = walled_grid(3);
    let placed = place_doors(&mut grid, 8, &mut rng(5)).unwrap();
    assert_that(&placed).is_equal_to(8);
}

#[test]
fn test_not_enough_obstructed_tiles() {
    let mut grid = open_grid(5, 5);
    let result = place_doors(&mut grid, 5, &mut rng(0));

    assert_eq!(
        result,
        Err(PlacementError::NotEnoughObstructedTiles {
            required: 5,
            available: 0
        })
    );
    assert_that(&grid.count(|tile| tile.is_door())).is_equal_to(0);
}

#[test]
fn test_zero_cap() {
    let mut grid = open_grid(2, 2);
    assert_eq!(place_doors(&mut grid, 0, &mut rng(0)), Ok(0));
}

#[test]
fn test_objectives() {
    let mut grid = walled_grid(5);
    let placement = place_objectives(&mut grid, 4, &mut rng(8));

    assert_that(&placement.puzzles.len()).is_equal_to(4);
    assert_that(&placement.digits().iter().all(|d| *d < PUZZLE_DIGIT_RANGE)).is_true();
    assert_that(&grid.tile(placement.key).is_some()).is_true();
    assert_eq!(grid.id_of(placement.key_coord), Some(placement.key));

    for marker in &placement.puzzles {
        let tile = grid.tile(marker.tile).unwrap();
        assert_eq!(tile.coord, marker.coord);
        assert_that(&tile.markers().contains(&Marker::Puzzle(marker.digit))).is_true();
    }

    let keys = grid
        .tiles()
        .flat_map(|(_, tile)| tile.markers().iter())
        .filter(|marker| **marker == Marker::Key)
        .count();
    assert_that(&keys).is_equal_to(1);
}

#[test]
fn test_objectives_without_slots() {
    let mut grid = open_grid(3, 3);
    let placement = place_objectives(&mut grid, 0, &mut rng(1));
    assert_that(&placement.puzzles.is_empty()).is_true();
    assert_that(&placement.key).is_less_than(9);
}
