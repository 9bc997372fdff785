//! The level facade consumed by the embedding layer.
//!
//! [`World`] owns the current grid, the random source, the last path query and the bookkeeping for
//! tile rotations that are being animated outside the core.

use glam::UVec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::config::WorldConfig;
use crate::constants::ROTATE_ALL_CHANCE;
use crate::error::{MazeResult, WorldError};
use crate::formatter;
use crate::map::connectivity::connect;
use crate::map::generator::generate;
use crate::map::grid::Grid;
use crate::map::rotation::Rotation;
use crate::map::tile::{Tile, TileId};
use crate::placement::{place_doors, place_objectives, ObjectivePlacement};
use crate::solver::{self, Solution};

/// A rotation that has been started but not yet committed.
///
/// The tile keeps its `from` rotation until [`World::complete_rotation`] is called; the
/// embedding layer animates in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationJob {
    pub tile: TileId,
    pub coord: UVec2,
    pub from: Rotation,
    pub to: Rotation,
}

/// Summary of a freshly generated level.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldReport {
    pub dimensions: UVec2,
    pub start: TileId,
    pub open_tiles: usize,
    pub obstructed_tiles: usize,
    pub doors: usize,
    pub objectives: ObjectivePlacement,
    /// Tiles reachable from the start tile at generation time, start included.
    pub reachable_from_start: usize,
}

/// The current level and everything needed to query and mutate it.
pub struct World {
    config: WorldConfig,
    grid: Option<Grid>,
    rng: SmallRng,
    objectives: Option<ObjectivePlacement>,
    last_solution: Option<Solution>,
    rotations: Vec<RotationJob>,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Creates an empty world with an OS-seeded random source.
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_os_rng())
    }

    /// Creates an empty world with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    fn with_rng(rng: SmallRng) -> Self {
        Self {
            config: WorldConfig::default(),
            grid: None,
            rng,
            objectives: None,
            last_solution: None,
            rotations: Vec::new(),
        }
    }

    /// Builds a new level: grid, connections, doors and objectives.
    ///
    /// Any previous level is released first. On failure no grid is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the doors cannot be placed.
    pub fn generate_world(&mut self, config: WorldConfig) -> MazeResult<WorldReport> {
        self.cleanup_world();
        config.validate()?;

        if let Some(seed) = config.seed {
            self.rng = SmallRng::seed_from_u64(seed);
        }

        let mut grid = generate(config.width, config.height, config.accessible_ratio, &mut self.rng)?;
        connect(&mut grid);

        let doors = place_doors(&mut grid, config.difficulty.max_doors(), &mut self.rng)?;
        let objectives = place_objectives(&mut grid, config.objective_slots, &mut self.rng);

        let report = WorldReport {
            dimensions: grid.dimensions(),
            start: grid.start(),
            open_tiles: grid.count(Tile::is_accessible),
            obstructed_tiles: grid.count(|tile| !tile.is_accessible()),
            doors,
            objectives: objectives.clone(),
            reachable_from_start: solver::reachable_from(&grid, grid.start()).len(),
        };

        formatter::increment_level();
        info!(
            width = config.width,
            height = config.height,
            difficulty = config.difficulty.as_ref(),
            doors,
            reachable = report.reachable_from_start,
            digits = ?objectives.digits(),
            "World generated"
        );

        self.grid = Some(grid);
        self.objectives = Some(objectives);
        self.config = config;

        Ok(report)
    }

    /// Releases every tile of the current level.
    pub fn cleanup_world(&mut self) {
        if let Some(grid) = self.grid.take() {
            debug!(tiles = grid.len(), "Cleaning up world");
        }
        self.objectives = None;
        self.last_solution = None;
        self.rotations.clear();
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn objectives(&self) -> Option<&ObjectivePlacement> {
        self.objectives.as_ref()
    }

    pub fn start_tile(&self) -> Option<TileId> {
        self.grid.as_ref().map(Grid::start)
    }

    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.grid.as_ref()?.tile(id)
    }

    pub fn tile_at(&self, coord: UVec2) -> Option<&Tile> {
        self.grid.as_ref()?.tile_at(coord)
    }

    /// Translates a grid coordinate into a tile id.
    pub fn tile_id(&self, coord: UVec2) -> Option<TileId> {
        self.grid.as_ref()?.id_of(coord)
    }

    /// The grid dimensions, or zero when no level exists.
    pub fn max_tiles(&self) -> UVec2 {
        self.grid.as_ref().map(Grid::dimensions).unwrap_or(UVec2::ZERO)
    }

    /// A uniformly random tile of the current level.
    pub fn random_tile(&mut self) -> Option<TileId> {
        let grid = self.grid.as_ref()?;
        Some(grid.random_tile(&mut self.rng))
    }

    /// Toggles the render flag of a tile.
    ///
    /// # Errors
    ///
    /// Returns an error if no level exists or the coordinate is out of bounds.
    pub fn set_tile_visibility(&mut self, coord: UVec2, visible: bool) -> MazeResult<()> {
        let tile = self.tile_mut_at(coord)?;
        tile.set_visible(visible);
        Ok(())
    }

    /// Opens a door tile, removing its wall for every later query.
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinate is unknown or the tile is not a door.
    pub fn open_door(&mut self, coord: UVec2) -> MazeResult<()> {
        let tile = self.tile_mut_at(coord)?;
        if !tile.is_door() {
            return Err(WorldError::NotADoor(coord).into());
        }
        tile.open_door();
        debug!(x = coord.x, y = coord.y, "Door opened");
        Ok(())
    }

    /// Finds a route between two tiles and remembers it as the last solution.
    pub fn solve(&mut self, begin: Option<TileId>, destination: Option<TileId>) -> Solution {
        let solution = match &self.grid {
            Some(grid) => solver::solve(grid, begin, destination),
            None => {
                warn!("Cannot solve without a world");
                Solution::NothingToSolve
            }
        };
        self.last_solution = Some(solution.clone());
        solution
    }

    /// The outcome of the most recent [`World::solve`] call.
    pub fn last_solution(&self) -> Option<&Solution> {
        self.last_solution.as_ref()
    }

    /// Tiles reachable from `start` under the current wall layout.
    pub fn reachable_from(&self, start: TileId) -> Vec<TileId> {
        self.grid
            .as_ref()
            .map(|grid| solver::reachable_from(grid, start))
            .unwrap_or_default()
    }

    /// `false` while any tile rotation is in flight.
    pub fn tile_rotation_status(&self) -> bool {
        self.rotations.is_empty()
    }

    /// Rotations started but not yet completed.
    pub fn pending_rotations(&self) -> &[RotationJob] {
        &self.rotations
    }

    /// Starts a quarter turn on a single obstructed tile.
    ///
    /// # Errors
    ///
    /// Returns an error if the tile is unknown, open floor, or already turning.
    pub fn rotate_tile(&mut self, coord: UVec2) -> MazeResult<RotationJob> {
        let grid = self.grid.as_ref().ok_or(WorldError::NotGenerated)?;
        let id = grid.id_of(coord).ok_or(WorldError::CoordinateOutOfBounds(coord))?;
        let tile = grid.tile(id).ok_or(WorldError::TileNotFound(id))?;
        let from = tile.rotation().ok_or(WorldError::NotRotatable(coord))?;

        if self.rotations.iter().any(|job| job.tile == id) {
            return Err(WorldError::RotationInFlight(coord).into());
        }

        let job = RotationJob {
            tile: id,
            coord,
            from,
            to: from.turned(),
        };
        self.rotations.push(job);
        debug!(x = coord.x, y = coord.y, %from, to = %job.to, "Rotation started");
        Ok(job)
    }

    /// Starts a quarter turn on roughly three in four obstructed tiles.
    ///
    /// Tiles already turning are skipped.
    pub fn rotate_all_tiles(&mut self) -> Vec<RotationJob> {
        let Some(grid) = self.grid.as_ref() else {
            return Vec::new();
        };

        let candidates: Vec<(TileId, UVec2, Rotation)> = grid
            .tiles()
            .filter_map(|(id, tile)| tile.rotation().map(|rotation| (id, tile.coord, rotation)))
            .filter(|(id, _, _)| !self.rotations.iter().any(|job| job.tile == *id))
            .collect();

        let mut started = Vec::new();
        for (tile, coord, from) in candidates {
            if !self.rng.random_bool(ROTATE_ALL_CHANCE) {
                continue;
            }
            let job = RotationJob {
                tile,
                coord,
                from,
                to: from.turned(),
            };
            self.rotations.push(job);
            started.push(job);
        }

        debug!(started = started.len(), "Rotating tiles");
        started
    }

    /// Commits a rotation once its animation has finished.
    ///
    /// # Errors
    ///
    /// Returns an error if the tile has no rotation in flight.
    pub fn complete_rotation(&mut self, tile: TileId) -> MazeResult<Rotation> {
        let grid = self.grid.as_mut().ok_or(WorldError::NotGenerated)?;
        let index = self.rotations.iter().position(|job| job.tile == tile).ok_or_else(|| {
            let coord = grid.tile(tile).map(|t| t.coord).unwrap_or(UVec2::ZERO);
            WorldError::NoRotationInFlight(coord)
        })?;

        let job = self.rotations.swap_remove(index);
        grid.set_rotation(job.tile, job.to)?;
        debug!(x = job.coord.x, y = job.coord.y, rotation = %job.to, "Rotation finished");
        Ok(job.to)
    }

    /// Commits every in-flight rotation. Returns how many were committed.
    pub fn complete_all_rotations(&mut self) -> MazeResult<usize> {
        let tiles: Vec<TileId> = self.rotations.iter().map(|job| job.tile).collect();
        for tile in &tiles {
            self.complete_rotation(*tile)?;
        }
        Ok(tiles.len())
    }

    fn tile_mut_at(&mut self, coord: UVec2) -> Result<&mut Tile, WorldError> {
        let grid = self.grid.as_mut().ok_or(WorldError::NotGenerated)?;
        let id = grid.id_of(coord).ok_or(WorldError::CoordinateOutOfBounds(coord))?;
        grid.tile_mut(id).ok_or(WorldError::TileNotFound(id))
    }
}
