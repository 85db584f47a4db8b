// The stack is the memorized card order the whole trick rests on. It is built
// once and only ever read afterwards, so it is shared as a plain &'static.

mod position;

pub use position::{Position, PositionOutOfRange, DECK_SIZE};

use once_cell::sync::Lazy;
use std::collections::HashMap;
use thiserror::Error;

use crate::cards::{
    Card,
    Rank::{self, *},
    Suit::{self, *},
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StackError {
    #[error("A stack holds 52 cards, got {0}")]
    WrongLength(usize),
    #[error("Card {0} appears more than once")]
    DuplicateCard(Card),
}

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Mnemonica, top of the deck first.
pub const MNEMONICA_ORDER: [Card; DECK_SIZE] = [
    card(Four, Clubs),
    card(Two, Hearts),
    card(Seven, Diamonds),
    card(Three, Clubs),
    card(Four, Hearts),
    card(Six, Diamonds),
    card(Ace, Spades),
    card(Five, Hearts),
    card(Nine, Spades),
    card(Two, Spades),
    card(Queen, Hearts),
    card(Three, Diamonds),
    card(Queen, Clubs),
    card(Eight, Hearts),
    card(Six, Spades),
    card(Five, Spades),
    card(Nine, Hearts),
    card(King, Clubs),
    card(Two, Diamonds),
    card(Jack, Hearts),
    card(Three, Spades),
    card(Eight, Spades),
    card(Six, Hearts),
    card(Ten, Clubs),
    card(Five, Diamonds),
    card(King, Diamonds),
    card(Two, Clubs),
    card(Three, Hearts),
    card(Eight, Diamonds),
    card(Five, Clubs),
    card(King, Spades),
    card(Jack, Diamonds),
    card(Eight, Clubs),
    card(Ten, Spades),
    card(King, Hearts),
    card(Jack, Clubs),
    card(Seven, Spades),
    card(Ten, Hearts),
    card(Ace, Diamonds),
    card(Four, Spades),
    card(Seven, Hearts),
    card(Four, Diamonds),
    card(Ace, Clubs),
    card(Nine, Clubs),
    card(Jack, Spades),
    card(Queen, Diamonds),
    card(Seven, Clubs),
    card(Queen, Spades),
    card(Ten, Diamonds),
    card(Six, Clubs),
    card(Ace, Hearts),
    card(Nine, Diamonds),
];

static MNEMONICA: Lazy<Stack> = Lazy::new(|| {
    Stack::from_cards(MNEMONICA_ORDER).expect("Mnemonica order is a full deck permutation")
});

/// A fixed ordering of all 52 cards, addressed by 1-based position.
#[derive(Debug, Clone)]
pub struct Stack {
    cards: Vec<Card>,
    positions: HashMap<Card, Position>,
}

impl Stack {
    /// The process-wide Mnemonica stack.
    pub fn mnemonica() -> &'static Stack {
        &MNEMONICA
    }

    /// Builds a stack, rejecting anything that is not a permutation of the deck.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Result<Self, StackError> {
        let cards: Vec<Card> = cards.into_iter().collect();
        if cards.len() != DECK_SIZE {
            return Err(StackError::WrongLength(cards.len()));
        }

        let mut positions = HashMap::with_capacity(DECK_SIZE);
        for (index, card) in cards.iter().enumerate() {
            if positions.insert(*card, Position::from_index(index)).is_some() {
                return Err(StackError::DuplicateCard(*card));
            }
        }

        Ok(Self { cards, positions })
    }

    pub fn position_of(&self, card: &Card) -> Option<Position> {
        self.positions.get(card).copied()
    }

    pub fn card_at(&self, position: Position) -> Card {
        self.cards[position.index()]
    }

    pub fn cards(&self) -> impl Iterator<Item = (Position, Card)> + '_ {
        self.cards
            .iter()
            .enumerate()
            .map(|(index, card)| (Position::from_index(index), *card))
    }
}
