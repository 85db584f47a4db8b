use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardParseError {
    #[error("Invalid rank: {0}")]
    InvalidRank(String),
    #[error("Invalid suit: {0}")]
    InvalidSuit(String),
    #[error("Invalid card code: {0}")]
    InvalidCode(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Suit {
    Hearts = 0,
    Spades = 1,
    Diamonds = 2,
    Clubs = 3,
}

impl Suit {
    pub fn symbol(&self) -> &'static str {
        match self {
            Suit::Hearts => "H",
            Suit::Spades => "S",
            Suit::Diamonds => "D",
            Suit::Clubs => "C",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<&str> for Suit {
    type Error = CardParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "H" => Ok(Suit::Hearts),
            "S" => Ok(Suit::Spades),
            "D" => Ok(Suit::Diamonds),
            "C" => Ok(Suit::Clubs),
            _ => Err(CardParseError::InvalidSuit(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Rank {
    Ace = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
}

impl Rank {
    pub fn symbol(&self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    /// Value of a rank whose symbol is a number (2 through 10).
    pub fn numeric_value(&self) -> Option<u8> {
        match self {
            Rank::Ace | Rank::Jack | Rank::Queen | Rank::King => None,
            other => Some(*other as u8),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<&str> for Rank {
    type Error = CardParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "A" => Ok(Rank::Ace),
            "2" => Ok(Rank::Two),
            "3" => Ok(Rank::Three),
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            "6" => Ok(Rank::Six),
            "7" => Ok(Rank::Seven),
            "8" => Ok(Rank::Eight),
            "9" => Ok(Rank::Nine),
            "10" => Ok(Rank::Ten),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            _ => Err(CardParseError::InvalidRank(s.to_string())),
        }
    }
}

/// A playing card, written as its code: rank symbol then suit symbol ("10S", "AH").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn from_code(s: &str) -> Result<Self, CardParseError> {
        if !s.is_ascii() || !(2..=3).contains(&s.len()) {
            return Err(CardParseError::InvalidCode(s.to_string()));
        }

        let (rank, suit) = s.split_at(s.len() - 1);
        let rank = Rank::try_from(rank)?;
        let suit = Suit::try_from(suit)?;

        Ok(Self::new(rank, suit))
    }

    pub fn all_cards() -> Vec<Card> {
        let mut cards = Vec::new();
        for suit in Suit::iter() {
            for rank in Rank::iter() {
                cards.push(Card::new(rank, suit));
            }
        }
        cards
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::from_code(s)
    }
}

// Cards travel over the wire as their code string.
impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Card::from_code(&code).map_err(serde::de::Error::custom)
    }
}
