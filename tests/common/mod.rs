#![allow(dead_code)]

use glam::UVec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tilemaze::map::connectivity::connect;
use tilemaze::map::generator::build_with;
use tilemaze::map::grid::Grid;
use tilemaze::map::rotation::Rotation;
use tilemaze::map::tile::{Accessibility, TileId};

pub fn rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// A connected grid of open floor.
pub fn open_grid(width: u32, height: u32) -> Grid {
    let mut grid = build_with(width, height, |_| Accessibility::Open).unwrap();
    connect(&mut grid);
    grid
}

/// A connected grid built from rows of characters, first row is `y = 0`.
///
/// `.` is open floor; `^ > v <` are walls facing forward, right, back and left.
pub fn grid_from_rows(rows: &[&str]) -> Grid {
    let height = rows.len() as u32;
    let width = rows[0].len() as u32;
    let mut grid = build_with(width, height, |coord| {
        let c = rows[coord.y as usize].as_bytes()[coord.x as usize];
        match c {
            b'.' => Accessibility::Open,
            b'^' => Accessibility::Obstructed(Rotation::Deg0),
            b'>' => Accessibility::Obstructed(Rotation::Deg90),
            b'v' => Accessibility::Obstructed(Rotation::Deg180),
            b'<' => Accessibility::Obstructed(Rotation::Deg270),
            other => panic!("unknown layout character {}", other as char),
        }
    })
    .unwrap();
    connect(&mut grid);
    grid
}

pub fn id(grid: &Grid, x: u32, y: u32) -> TileId {
    grid.id_of(UVec2::new(x, y)).unwrap()
}
