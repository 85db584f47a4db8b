use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const DECK_SIZE: usize = 52;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Position {0} is outside 1..=52")]
pub struct PositionOutOfRange(pub u32);

/// A 1-based slot in a 52-card deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Position(u8);

impl Position {
    pub const TOP: Position = Position(1);
    pub const BOTTOM: Position = Position(DECK_SIZE as u8);

    pub fn new(value: u32) -> Result<Self, PositionOutOfRange> {
        if (1..=DECK_SIZE as u32).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(PositionOutOfRange(value))
        }
    }

    pub fn get(self) -> usize {
        self.0 as usize
    }

    /// Zero-based offset into a deck slice.
    pub fn index(self) -> usize {
        self.get() - 1
    }

    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < DECK_SIZE);
        Self((index % DECK_SIZE) as u8 + 1)
    }
}

impl TryFrom<u32> for Position {
    type Error = PositionOutOfRange;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Position::new(value)
    }
}

impl From<Position> for u32 {
    fn from(position: Position) -> u32 {
        position.0 as u32
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
