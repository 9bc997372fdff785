use glam::IVec2;
use strum_macros::AsRefStr;

/// The four cardinal directions on the grid plane.
///
/// Grid `x` grows to the [`Direction::Right`], grid `y` grows [`Direction::Forward`] (along the
/// world depth axis).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
#[repr(usize)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Back,
    Forward,
}

impl Direction {
    /// The four cardinal directions, in the order neighbors are linked.
    pub const DIRECTIONS: [Direction; 4] = [Direction::Left, Direction::Right, Direction::Back, Direction::Forward];

    /// Returns the opposite direction. Constant time.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Back => Direction::Forward,
            Direction::Forward => Direction::Back,
        }
    }

    /// Returns the grid offset of a single step in this direction.
    pub fn as_ivec2(self) -> IVec2 {
        self.into()
    }

    /// Returns the direction as a usize (0-3). Constant time.
    /// This is useful for indexing into arrays.
    pub const fn as_usize(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Right => 1,
            Direction::Back => 2,
            Direction::Forward => 3,
        }
    }

    /// Finds the direction of a single orthogonal step, if `offset` is one.
    pub fn from_offset(offset: IVec2) -> Option<Direction> {
        Self::DIRECTIONS.into_iter().find(|dir| dir.as_ivec2() == offset)
    }
}

impl From<Direction> for IVec2 {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Left => -IVec2::X,
            Direction::Right => IVec2::X,
            Direction::Back => -IVec2::Y,
            Direction::Forward => IVec2::Y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_opposite() {
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
        assert_eq!(Direction::Back.opposite(), Direction::Forward);
        assert_eq!(Direction::Forward.opposite(), Direction::Back);
    }

    #[test]
    fn test_direction_from_offset() {
        for dir in Direction::DIRECTIONS {
            assert_eq!(Direction::from_offset(dir.as_ivec2()), Some(dir));
        }
        assert_eq!(Direction::from_offset(IVec2::new(1, 1)), None);
        assert_eq!(Direction::from_offset(IVec2::ZERO), None);
        assert_eq!(Direction::from_offset(IVec2::new(2, 0)), None);
    }

    #[test]
    fn test_direction_as_usize_is_unique() {
        let mut seen = [false; 4];
        for dir in Direction::DIRECTIONS {
            assert!(!seen[dir.as_usize()]);
            seen[dir.as_usize()] = true;
        }
    }

    #[test]
    fn test_direction_names() {
        assert_eq!(Direction::Forward.as_ref(), "forward");
        assert_eq!(Direction::Left.as_ref(), "left");
    }
}
