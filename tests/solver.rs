mod common;

use common::{grid_from_rows, id, open_grid, rng};
use pathfinding::prelude::dijkstra;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;
use tilemaze::constants::TILE_SIZE;
use tilemaze::map::access::{is_traversable, traversable_neighbors};
use tilemaze::map::connectivity::connect;
use tilemaze::map::generator::generate;
use tilemaze::map::grid::Grid;
use tilemaze::map::tile::TileId;
use tilemaze::solver::{reachable_from, solve, Solution};

fn assert_valid_route(grid: &Grid, tiles: &[TileId]) {
    for pair in tiles.windows(2) {
        assert_that(&is_traversable(grid, pair[0], pair[1])).is_true();
    }
}

#[test]
fn test_open_grid_corner_to_corner() {
    let grid = open_grid(3, 3);
    let solution = solve(&grid, Some(id(&grid, 0, 0)), Some(id(&grid, 2, 2)));

    let path = solution.path().expect("route exists");
    assert_eq!(path.tiles.len(), 5);
    assert_eq!(path.steps(), 4);
    assert_eq!(path.cost, 4.0 * TILE_SIZE);
    assert_eq!(path.tiles.first(), Some(&id(&grid, 0, 0)));
    assert_eq!(path.tiles.last(), Some(&id(&grid, 2, 2)));
    assert_valid_route(&grid, &path.tiles);
}

#[test]
fn test_walled_in_destination() {
    let grid = grid_from_rows(&[".^.", ">.<", ".v."]);
    let center = id(&grid, 1, 1);

    assert_that(&traversable_neighbors(&grid, center).count()).is_equal_to(0);
    assert_eq!(solve(&grid, Some(id(&grid, 0, 0)), Some(center)), Solution::NoRoute);
    assert_eq!(solve(&grid, Some(center), Some(id(&grid, 2, 2))), Solution::NoRoute);
}

#[test]
fn test_route_around_a_wall() {
    // The wall at (1,0) faces left, so the top row cannot be crossed directly
    let grid = grid_from_rows(&[".<.", "...", "..."]);
    let path = solve(&grid, Some(id(&grid, 0, 0)), Some(id(&grid, 2, 0)))
        .path()
        .cloned()
        .expect("route exists");

    assert_eq!(path.steps(), 4);
    assert_valid_route(&grid, &path.tiles);
}

#[test]
fn test_adjacent_tiles_take_direct_path() {
    let grid = open_grid(4, 4);
    let a = id(&grid, 1, 1);
    let b = id(&grid, 1, 2);

    let path = solve(&grid, Some(a), Some(b)).path().cloned().expect("route exists");
    assert_eq!(path.tiles, vec![a, b]);
    assert_eq!(path.cost, TILE_SIZE);
}

#[test]
fn test_same_tile() {
    let grid = open_grid(2, 2);
    let path = solve(&grid, Some(0), Some(0)).path().cloned().expect("trivial route");
    assert_eq!(path.tiles, vec![0]);
    assert_eq!(path.cost, 0.0);
}

#[test]
fn test_missing_endpoints() {
    let grid = open_grid(2, 2);
    assert_eq!(solve(&grid, None, Some(1)), Solution::NothingToSolve);
    assert_eq!(solve(&grid, Some(1), None), Solution::NothingToSolve);
    assert_eq!(solve(&grid, Some(0), Some(99)), Solution::NothingToSolve);
}

#[test]
fn test_repeated_queries_agree() {
    let mut grid = generate(12, 12, 0.6, &mut rng(11)).unwrap();
    connect(&mut grid);

    let first = solve(&grid, Some(0), Some(grid.len() - 1));
    let second = solve(&grid, Some(0), Some(grid.len() - 1));
    assert_eq!(first, second);
}

#[test]
fn test_costs_match_dijkstra() {
    for seed in 0..40 {
        let mut grid = generate(10, 8, 0.65, &mut rng(seed)).unwrap();
        connect(&mut grid);
        let begin = grid.start();

        for destination in [grid.len() - 1, grid.len() / 2, 9] {
            let expected = dijkstra(
                &begin,
                |&n| traversable_neighbors(&grid, n).map(|m| (m, 1u32)).collect::<Vec<_>>(),
                |&n| n == destination,
            );

            match (solve(&grid, Some(begin), Some(destination)), expected) {
                (Solution::Found(path), Some((_, steps))) => {
                    assert_eq!(path.cost, steps as f32 * TILE_SIZE, "seed {seed}, destination {destination}");
                    assert_eq!(path.steps(), steps as usize);
                    assert_valid_route(&grid, &path.tiles);
                }
                (Solution::NoRoute, None) => {}
                (actual, expected) => panic!("seed {seed}: solver gave {actual:?}, oracle gave {expected:?}"),
            }
        }
    }
}

#[test]
fn test_reachable_from() {
    let grid = grid_from_rows(&[".^.", ">.<", ".v."]);
    let center = id(&grid, 1, 1);

    assert_eq!(reachable_from(&grid, center), vec![center]);
    let from_start = reachable_from(&grid, grid.start());
    assert_that(&from_start.len()).is_equal_to(8);
    assert_that(&from_start.contains(&center)).is_false();
    assert_that(&reachable_from(&grid, 1000).is_empty()).is_true();
}
