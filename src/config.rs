//! Level configuration.
//!
//! The embedding layer owns persistence; it hands the stored difficulty (and anything else it
//! wants to pin) to the core through [`WorldConfig`].

use std::str::FromStr;

use figment::providers::{Env, Serialized};
use figment::value::UncasedStr;
use figment::Figment;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumIter};
use tracing::debug;

use crate::constants::{DEFAULT_ACCESSIBLE_RATIO, DEFAULT_HEIGHT, DEFAULT_OBJECTIVE_SLOTS, DEFAULT_WIDTH};
use crate::error::{ConfigError, MazeResult};
use crate::map::generator::{validate_dimensions, validate_ratio};

/// Prefix shared by every environment override.
pub const ENV_PREFIX: &str = "TILEMAZE_";

/// Challenge level chosen by the player. Decides how many doors a level gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, EnumIter, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase", try_from = "DifficultyValue")]
pub enum Difficulty {
    #[default]
    Easy,
    Normal,
    Hard,
}

/// A difficulty as stored by the embedding layer: either its index or its name.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DifficultyValue {
    Index(i64),
    Name(String),
}

impl TryFrom<DifficultyValue> for Difficulty {
    type Error = ConfigError;

    fn try_from(value: DifficultyValue) -> Result<Self, Self::Error> {
        match value {
            DifficultyValue::Index(index) => Difficulty::try_from(index),
            DifficultyValue::Name(name) => name.parse(),
        }
    }
}

impl Difficulty {
    /// The number of doors placed at this difficulty.
    pub const fn max_doors(self) -> usize {
        match self {
            Difficulty::Easy => 5,
            Difficulty::Normal => 3,
            Difficulty::Hard => 1,
        }
    }

    /// The integer stored by the embedding layer.
    pub const fn as_index(self) -> i64 {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Normal => 1,
            Difficulty::Hard => 2,
        }
    }
}

impl TryFrom<i64> for Difficulty {
    type Error = ConfigError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Difficulty::Easy),
            1 => Ok(Difficulty::Normal),
            2 => Ok(Difficulty::Hard),
            other => Err(ConfigError::UnknownDifficulty(other)),
        }
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "normal" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            other => other
                .parse::<i64>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "difficulty",
                    value: s.to_string(),
                })
                .and_then(Difficulty::try_from),
        }
    }
}

/// Everything needed to generate a level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Grid width, in tiles
    pub width: u32,
    /// Grid height, in tiles
    pub height: u32,
    /// Probability that a tile after the first is open floor
    pub accessible_ratio: f32,
    pub difficulty: Difficulty,
    /// Number of puzzle digits to place
    pub objective_slots: usize,
    /// Fixed seed for reproducible levels; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            accessible_ratio: DEFAULT_ACCESSIBLE_RATIO,
            difficulty: Difficulty::default(),
            objective_slots: DEFAULT_OBJECTIVE_SLOTS,
            seed: None,
        }
    }
}

impl WorldConfig {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_accessible_ratio(mut self, ratio: f32) -> Self {
        self.accessible_ratio = ratio;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_objective_slots(mut self, slots: usize) -> Self {
        self.objective_slots = slots;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Loads defaults, then applies any `TILEMAZE_*` environment overrides.
    ///
    /// Recognized keys: `TILEMAZE_WIDTH`, `TILEMAZE_HEIGHT`, `TILEMAZE_RATIO`,
    /// `TILEMAZE_DIFFICULTY`, `TILEMAZE_SLOTS`, `TILEMAZE_SEED`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    /// Default values merged with the `TILEMAZE_*` environment provider.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(WorldConfig::default())).merge(Env::prefixed(ENV_PREFIX).map(|key| {
            if key == UncasedStr::new("ratio") {
                "accessible_ratio".into()
            } else if key == UncasedStr::new("slots") {
                "objective_slots".into()
            } else {
                key.into()
            }
        }))
    }

    /// Extracts a configuration from any figment, such as [`WorldConfig::figment`] with extra
    /// providers merged on top.
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: WorldConfig = figment.extract().map_err(|e| ConfigError::Load(Box::new(e)))?;
        debug!(?config, "Loaded configuration");
        Ok(config)
    }

    /// Checks the configuration before any generation work starts.
    ///
    /// # Errors
    ///
    /// Returns a [`GenerationError`](crate::error::GenerationError) for out-of-range dimensions or
    /// a ratio outside `[0, 1]`.
    pub fn validate(&self) -> MazeResult<()> {
        validate_dimensions(self.width, self.height)?;
        validate_ratio(self.accessible_ratio)?;
        Ok(())
    }
}
