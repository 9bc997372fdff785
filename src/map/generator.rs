//! Randomized grid generation.

use glam::{UVec2, Vec3};
use rand::Rng;
use tracing::{debug, trace};

use crate::constants::{MAX_GRID_DIMENSION, TILE_HEIGHT, TILE_SIZE};
use crate::error::GenerationError;

use super::grid::Grid;
use super::tile::{Accessibility, Tile};

/// Checks grid dimensions before any tile is created.
pub fn validate_dimensions(width: u32, height: u32) -> Result<(), GenerationError> {
    if width == 0 || height == 0 || width > MAX_GRID_DIMENSION || height > MAX_GRID_DIMENSION {
        return Err(GenerationError::InvalidDimensions {
            width,
            height,
            max: MAX_GRID_DIMENSION,
        });
    }
    Ok(())
}

/// Checks that the open-floor probability lies within `[0, 1]`.
pub fn validate_ratio(accessible_ratio: f32) -> Result<(), GenerationError> {
    if !(0.0..=1.0).contains(&accessible_ratio) {
        return Err(GenerationError::InvalidRatio(accessible_ratio));
    }
    Ok(())
}

/// Returns the world-space center of the tile at `coord`.
///
/// The grid is centered on the origin: the lower corner sits at `-(size / 2) * TILE_SIZE` on both
/// plane axes, and grid `y` maps to world `z`.
pub fn world_position(coord: UVec2, width: u32, height: u32) -> Vec3 {
    let origin_x = -((width / 2) as f32 * TILE_SIZE);
    let origin_z = -((height / 2) as f32 * TILE_SIZE);
    Vec3::new(
        origin_x + coord.x as f32 * TILE_SIZE + TILE_SIZE / 2.0,
        TILE_HEIGHT,
        origin_z + coord.y as f32 * TILE_SIZE + TILE_SIZE / 2.0,
    )
}

/// Builds a grid whose tile layout is decided by `layout`.
///
/// Coordinates are visited x-major, then y. The first cell is always open floor regardless of
/// what `layout` returns for it. Neighbor links are not set.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidDimensions`] if either dimension is zero or too large.
pub fn build_with<F>(width: u32, height: u32, mut layout: F) -> Result<Grid, GenerationError>
where
    F: FnMut(UVec2) -> Accessibility,
{
    validate_dimensions(width, height)?;

    let mut tiles = Vec::with_capacity((width * height) as usize);
    for x in 0..width {
        for y in 0..height {
            let coord = UVec2::new(x, y);
            let accessibility = if tiles.is_empty() {
                Accessibility::Open
            } else {
                layout(coord)
            };
            tiles.push(Tile::new(coord, world_position(coord, width, height), accessibility));
        }
    }

    Ok(Grid::from_tiles(width, height, tiles))
}

/// Generates a random grid.
///
/// Every cell after the first is open floor with probability `accessible_ratio`, otherwise it
/// is obstructed with a uniformly random rotation.
///
/// # Errors
///
/// Returns an error for invalid dimensions or a ratio outside `[0, 1]`.
pub fn generate<R: Rng + ?Sized>(
    width: u32,
    height: u32,
    accessible_ratio: f32,
    rng: &mut R,
) -> Result<Grid, GenerationError> {
    validate_ratio(accessible_ratio)?;

    let grid = build_with(width, height, |coord| {
        if rng.random::<f32>() < accessible_ratio {
            Accessibility::Open
        } else {
            let rotation = rng.random();
            trace!(x = coord.x, y = coord.y, %rotation, "Obstructed tile");
            Accessibility::Obstructed(rotation)
        }
    })?;

    debug!(
        width,
        height,
        accessible_ratio,
        open = grid.count(|tile| tile.is_accessible()),
        "Generated grid"
    );

    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::rotation::Rotation;

    #[test]
    fn test_world_position_centers_grid() {
        let pos = world_position(UVec2::new(0, 0), 3, 3);
        assert_eq!(pos, Vec3::new(-5.0, TILE_HEIGHT, -5.0));

        let pos = world_position(UVec2::new(2, 1), 3, 3);
        assert_eq!(pos, Vec3::new(15.0, TILE_HEIGHT, 5.0));
    }

    #[test]
    fn test_build_with_forces_open_start() {
        let grid = build_with(2, 2, |_| Accessibility::Obstructed(Rotation::Deg0)).unwrap();
        assert!(grid.tile(grid.start()).unwrap().is_accessible());
        assert_eq!(grid.count(|tile| tile.is_accessible()), 1);
    }

    #[test]
    fn test_validate_dimensions() {
        assert!(validate_dimensions(1, 1).is_ok());
        assert!(validate_dimensions(0, 5).is_err());
        assert!(validate_dimensions(5, 0).is_err());
        assert!(validate_dimensions(MAX_GRID_DIMENSION + 1, 5).is_err());
    }
}
