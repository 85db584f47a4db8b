//! Reads a card and a target position out of free-form text.
//!
//! The text is normalized and tokenized, then the card patterns are tried at
//! each token from left to right. At a given token the patterns run in a fixed
//! priority order (linked words, adjacent words, compact code) and the first
//! match ends the scan. The position is the first 1..=52 whole number; when
//! the rank is a number (2 to 10), the first occurrence of that number is
//! taken to be the rank's own digits and skipped.

mod normalize;
mod numbers;
mod strategies;

pub use normalize::{normalize, tokenize, Token};
pub use numbers::position_candidates;
pub use strategies::{AdjacentWords, CardPattern, CompactCode, LinkedWords};

use thiserror::Error;
use tracing::{debug, instrument};

use crate::{cards::Card, stack::Position};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("Could not detect card value and suit")]
    CardNotRecognized,
    #[error("Could not detect position number")]
    PositionNotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExtractorOptions {
    /// Accept a suit word where "of"/"de" would go ("ten hearts spades").
    pub relaxed_linker: bool,
}

/// The card named in the text and where it should end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extraction {
    pub card: Card,
    pub position: Position,
}

pub struct Extractor {
    patterns: Vec<Box<dyn CardPattern>>,
}

impl Extractor {
    pub fn new(options: ExtractorOptions) -> Self {
        Self {
            patterns: vec![
                Box::new(LinkedWords {
                    relaxed: options.relaxed_linker,
                }),
                Box::new(AdjacentWords),
                Box::new(CompactCode),
            ],
        }
    }

    #[instrument(skip(self))]
    pub fn extract(&self, text: &str) -> Result<Extraction, ExtractError> {
        let tokens = tokenize(&normalize(text));

        let card = self
            .find_card(&tokens)
            .ok_or(ExtractError::CardNotRecognized)?;

        let mut candidates = position_candidates(&tokens);
        if let Some(value) = card.rank.numeric_value() {
            if let Some(own) = candidates.iter().position(|p| p.get() == value as usize) {
                candidates.remove(own);
            }
        }

        let position = candidates
            .first()
            .copied()
            .ok_or(ExtractError::PositionNotFound)?;

        Ok(Extraction { card, position })
    }

    fn find_card(&self, tokens: &[Token]) -> Option<Card> {
        (0..tokens.len()).find_map(|at| {
            self.patterns.iter().find_map(|pattern| {
                let card = pattern.match_at(tokens, at)?;
                debug!(pattern = pattern.name(), card = %card, token = at, "Card matched");
                Some(card)
            })
        })
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(ExtractorOptions::default())
    }
}
