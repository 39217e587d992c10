//! Cardinal headings and their modular rotation.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::MissionError;

/// One of the four cardinal headings.
///
/// Discriminants follow the trigonometric angle `index * 90°`, so turning
/// left (counter-clockwise) is `+1 mod 4` and turning right is `-1 mod 4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    East = 0,
    North = 1,
    West = 2,
    South = 3,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [Self::East, Self::North, Self::West, Self::South];

    const UNIT: [IVec2; 4] = [IVec2::X, IVec2::Y, IVec2::NEG_X, IVec2::NEG_Y];
    const LETTERS: [char; 4] = ['E', 'N', 'W', 'S'];
    const ARROWS: [char; 4] = ['>', '^', '<', 'V'];

    pub fn index(self) -> u8 {
        self as u8
    }

    fn from_index_wrapping(index: i32) -> Self {
        Self::ALL[index.rem_euclid(4) as usize]
    }

    /// Counter-clockwise quarter turn.
    pub fn left(self) -> Self {
        Self::from_index_wrapping(i32::from(self.index()) + 1)
    }

    /// Clockwise quarter turn.
    pub fn right(self) -> Self {
        Self::from_index_wrapping(i32::from(self.index()) - 1)
    }

    /// Unit displacement of a single forward step.
    pub fn unit_vector(self) -> IVec2 {
        Self::UNIT[self as usize]
    }

    /// Compass letter (`E`, `N`, `W`, `S`).
    pub fn letter(self) -> char {
        Self::LETTERS[self as usize]
    }

    /// Arrow avatar used on the rendered map.
    pub fn arrow(self) -> char {
        Self::ARROWS[self as usize]
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        Self::LETTERS
            .iter()
            .position(|&l| l == letter.to_ascii_uppercase())
            .map(|i| Self::ALL[i])
    }
}

impl TryFrom<i64> for Orientation {
    type Error = MissionError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(MissionError::InvalidOrientation(value))
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
