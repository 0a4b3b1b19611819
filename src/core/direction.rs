//! Compass directions a word can run in

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eight directions a word may be written along
///
/// `x` grows to the east and `y` grows to the south, matching row-major grid
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All eight directions
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// Step vector `(dx, dy)`, each component in `-1..=1`
    #[inline]
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::North => (0, -1),
            Self::NorthEast => (1, -1),
            Self::East => (1, 0),
            Self::SouthEast => (1, 1),
            Self::South => (0, 1),
            Self::SouthWest => (-1, 1),
            Self::West => (-1, 0),
            Self::NorthWest => (-1, -1),
        }
    }

    /// Direction for a step vector, `None` for `(0, 0)` or out-of-range components
    #[must_use]
    pub fn from_delta(dx: isize, dy: isize) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.delta() == (dx, dy))
    }

    /// Arrow glyph used by terminal output
    #[must_use]
    pub const fn arrow(self) -> char {
        match self {
            Self::North => '↑',
            Self::NorthEast => '↗',
            Self::East => '→',
            Self::SouthEast => '↘',
            Self::South => '↓',
            Self::SouthWest => '↙',
            Self::West => '←',
            Self::NorthWest => '↖',
        }
    }

    /// True when the word reads right-to-left or bottom-to-top
    #[must_use]
    pub const fn is_reversed(self) -> bool {
        let (dx, dy) = self.delta();
        dx < 0 || (dx == 0 && dy < 0)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::NorthEast => "north-east",
            Self::East => "east",
            Self::SouthEast => "south-east",
            Self::South => "south",
            Self::SouthWest => "south-west",
            Self::West => "west",
            Self::NorthWest => "north-west",
        };
        f.write_str(name)
    }
}
