//! Dice primitives: a single six-sided die, a pair per side, and the sides.
use core::fmt;

use crate::config::GameConfig;

/// Error returned when a face value falls outside `1..=6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("die face {0} is outside 1..=6")]
pub struct DieError(pub u8);

/// A single six-sided die showing one face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct Die(u8);

impl Die {
    pub const ONE: Die = Die(1);
    pub const SIX: Die = Die(GameConfig::DIE_FACES);

    /// Creates a die showing `face`, or `None` when the face does not exist.
    pub const fn new(face: u8) -> Option<Self> {
        if face >= 1 && face <= GameConfig::DIE_FACES {
            Some(Die(face))
        } else {
            None
        }
    }

    /// Maps a raw oracle roll (already in `1..=6`) to a die.
    pub(crate) fn from_roll(roll: u32) -> Self {
        let face = (roll.saturating_sub(1) % u32::from(GameConfig::DIE_FACES)) as u8 + 1;
        Die(face)
    }

    pub const fn face(self) -> u8 {
        self.0
    }
}

impl Default for Die {
    fn default() -> Self {
        Die::ONE
    }
}

impl TryFrom<u8> for Die {
    type Error = DieError;

    fn try_from(face: u8) -> Result<Self, Self::Error> {
        Die::new(face).ok_or(DieError(face))
    }
}

impl From<Die> for u8 {
    fn from(die: Die) -> Self {
        die.0
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The two dice rolled by one side in a round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DicePair {
    pub first: Die,
    pub second: Die,
}

impl DicePair {
    pub const SNAKE_EYES: DicePair = DicePair::new(Die::ONE, Die::ONE);
    pub const BOXCARS: DicePair = DicePair::new(Die::SIX, Die::SIX);

    pub const fn new(first: Die, second: Die) -> Self {
        Self { first, second }
    }

    /// Builds a pair from raw faces, rejecting faces outside `1..=6`.
    pub fn from_faces(first: u8, second: u8) -> Result<Self, DieError> {
        Ok(Self::new(Die::try_from(first)?, Die::try_from(second)?))
    }

    pub const fn sum(&self) -> u8 {
        self.first.face() + self.second.face()
    }

    pub const fn is_double(&self) -> bool {
        self.first.face() == self.second.face()
    }

    /// Double ones.
    pub const fn is_snake_eyes(&self) -> bool {
        self.is_double() && self.first.face() == 1
    }

    /// Double sixes.
    pub const fn is_boxcars(&self) -> bool {
        self.is_double() && self.first.face() == GameConfig::DIE_FACES
    }
}

impl fmt::Display for DicePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.first, self.second)
    }
}

/// Which side of the table a pair belongs to.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    Player,
    /// Bober, the house.
    Opponent,
}

impl Side {
    /// Stable index mixed into RNG seeds.
    pub const fn index(self) -> u32 {
        match self {
            Side::Player => 0,
            Side::Opponent => 1,
        }
    }
}
