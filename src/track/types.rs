use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, TrackError};

/// A cell on the landscape grid. Serialized as an `[x, y]` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(i64, i64)", into = "(i64, i64)")]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl Coord {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub(crate) fn step(self, step: Step) -> Self {
        match step {
            Step::East => Self::new(self.x + 1, self.y),
            Step::North => Self::new(self.x, self.y + 1),
            Step::West => Self::new(self.x - 1, self.y),
            Step::South => Self::new(self.x, self.y - 1),
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i64, i64)> for Coord {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coord> for (i64, i64) {
    fn from(coord: Coord) -> Self {
        (coord.x, coord.y)
    }
}

/// One chain-code step. The digits 1 to 4 move east, north, west and south.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    East,
    North,
    West,
    South,
}

impl Step {
    pub fn code(self) -> char {
        match self {
            Step::East => '1',
            Step::North => '2',
            Step::West => '3',
            Step::South => '4',
        }
    }

    /// True when the two steps lie on different axes, i.e. moving from one to
    /// the other is a 90 degree turn.
    pub fn is_perpendicular_to(self, other: Step) -> bool {
        self.is_horizontal() != other.is_horizontal()
    }

    fn is_horizontal(self) -> bool {
        matches!(self, Step::East | Step::West)
    }
}

impl TryFrom<char> for Step {
    type Error = TrackError;

    fn try_from(c: char) -> Result<Self> {
        match c {
            '1' => Ok(Step::East),
            '2' => Ok(Step::North),
            '3' => Ok(Step::West),
            '4' => Ok(Step::South),
            _ => Err(TrackError::invalid_value("Chain Code must consist of digits 1, 2, 3, 4.")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Road {
    Residential,
    Local,
    Motorway,
}

impl Road {
    pub fn code(self) -> char {
        match self {
            Road::Residential => 'r',
            Road::Local => 'l',
            Road::Motorway => 'm',
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<char> for Road {
    type Error = TrackError;

    fn try_from(c: char) -> Result<Self> {
        match c {
            'r' => Ok(Road::Residential),
            'l' => Ok(Road::Local),
            'm' => Ok(Road::Motorway),
            _ => Err(TrackError::invalid_value("Road type must consist of the characters r, l or m.")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Terrain {
    Dirt,
    Gravel,
    Paved,
}

impl Terrain {
    pub fn code(self) -> char {
        match self {
            Terrain::Dirt => 'd',
            Terrain::Gravel => 'g',
            Terrain::Paved => 'p',
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<char> for Terrain {
    type Error = TrackError;

    fn try_from(c: char) -> Result<Self> {
        match c {
            'd' => Ok(Terrain::Dirt),
            'g' => Ok(Terrain::Gravel),
            'p' => Ok(Terrain::Paved),
            _ => Err(TrackError::invalid_value("Terrain must consist of characters p, g or d.")),
        }
    }
}
