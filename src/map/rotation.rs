//! Quarter-turn orientation of obstructed tiles.

use std::fmt;

use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use super::direction::Direction;

/// The yaw of a wall-bearing tile, in quarter turns.
///
/// Each obstructed tile carries exactly one wall; its rotation decides which side of the tile that
/// wall faces (see [`Rotation::wall_side`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// All rotations, in clockwise order starting at zero.
    pub const ALL: [Rotation; 4] = [Rotation::Deg0, Rotation::Deg90, Rotation::Deg180, Rotation::Deg270];

    /// Returns the rotation in whole degrees.
    pub const fn degrees(self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// Builds a rotation from whole degrees. Any multiple of 90 is accepted and wrapped.
    pub fn from_degrees(degrees: i32) -> Option<Rotation> {
        if degrees % 90 != 0 {
            return None;
        }
        match degrees.rem_euclid(360) {
            0 => Some(Rotation::Deg0),
            90 => Some(Rotation::Deg90),
            180 => Some(Rotation::Deg180),
            270 => Some(Rotation::Deg270),
            _ => None,
        }
    }

    /// The next quarter turn, wrapping from 270 back to 0.
    pub const fn turned(self) -> Rotation {
        match self {
            Rotation::Deg0 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg180,
            Rotation::Deg180 => Rotation::Deg270,
            Rotation::Deg270 => Rotation::Deg0,
        }
    }

    /// The side of the tile that carries the wall at this rotation.
    pub const fn wall_side(self) -> Direction {
        match self {
            Rotation::Deg0 => Direction::Forward,
            Rotation::Deg90 => Direction::Right,
            Rotation::Deg180 => Direction::Back,
            Rotation::Deg270 => Direction::Left,
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

impl Distribution<Rotation> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Rotation {
        Rotation::ALL[rng.random_range(0..Rotation::ALL.len())]
    }
}
