#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

use anyhow::Result;
use clap::Parser;
use tilemaze::logging::init_tracing;
use tilemaze::{Difficulty, Solution, World, WorldConfig};
use tracing::{info, warn, Level};

/// Generates a rotating-tile maze and walks it before and after a turn.
///
/// Flags override the `TILEMAZE_*` environment variables.
#[derive(Debug, Parser)]
#[command(name = "tilemaze", version, about)]
struct Cli {
    /// Seed for a reproducible level
    #[arg(short, long)]
    seed: Option<u64>,

    /// Grid width, in tiles
    #[arg(long)]
    width: Option<u32>,

    /// Grid height, in tiles
    #[arg(long)]
    height: Option<u32>,

    /// Probability that a tile is open floor
    #[arg(long)]
    ratio: Option<f32>,

    /// easy, normal, hard, or their index
    #[arg(short, long)]
    difficulty: Option<Difficulty>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Applies the flags that were given on top of `config`.
    fn apply(&self, config: &mut WorldConfig) {
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(ratio) = self.ratio {
            config.accessible_ratio = ratio;
        }
        if let Some(difficulty) = self.difficulty {
            config.difficulty = difficulty;
        }
    }
}

/// Generates one level, walks from the start tile to the key, then turns the maze and walks again.
pub fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = WorldConfig::from_env()?;
    cli.apply(&mut config);

    init_tracing(if cli.verbose { Level::DEBUG } else { Level::INFO })?;

    let mut world = World::new();
    let report = world.generate_world(config)?;
    info!(
        open = report.open_tiles,
        obstructed = report.obstructed_tiles,
        doors = report.doors,
        reachable = report.reachable_from_start,
        "Level ready"
    );

    let begin = world.start_tile();
    let destination = Some(report.objectives.key);

    for pass in ["initial", "rotated"] {
        match world.solve(begin, destination) {
            Solution::Found(path) => info!(pass, steps = path.steps(), cost = path.cost, "Key is reachable"),
            Solution::NoRoute => warn!(pass, "Key is walled off"),
            Solution::NothingToSolve => warn!(pass, "Nothing to solve"),
        }

        if pass == "initial" {
            let jobs = world.rotate_all_tiles();
            info!(turning = jobs.len(), ready = world.tile_rotation_status(), "Rotating maze");
            world.complete_all_rotations()?;
        }
    }

    world.cleanup_world();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from(["tilemaze", "-s", "7", "--width", "9", "-d", "hard"]).unwrap();
        let mut config = WorldConfig::default();
        cli.apply(&mut config);

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.width, 9);
        assert_eq!(config.height, WorldConfig::default().height);
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_bad_difficulty_rejected() {
        assert!(Cli::try_parse_from(["tilemaze", "--difficulty", "impossible"]).is_err());
    }
}
