use thiserror::Error;

use crate::{
    cards::Card,
    stack::{Position, Stack, DECK_SIZE},
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CutError {
    #[error("Card {0} not found in stack")]
    CardNotInStack(Card),
}

/// Where to cut so that a card lands at a target position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CutOutcome {
    /// Position the card holds in the uncut stack.
    pub card_position: Position,
    /// Number of cards taken off the top; this many go to the bottom.
    pub cut_position: Position,
    /// Last card of the cut-off block, which ends up on the bottom.
    pub cut_card: Card,
    pub top_position: Position,
    /// New top card after the cut.
    pub top_card: Card,
}

/// Computes the cut that brings `card` to `target`, counting from the new top.
///
/// A card already sitting at `target` gives a cut of 52: the whole deck goes
/// to the bottom and the order is unchanged.
pub fn compute(stack: &Stack, card: &Card, target: Position) -> Result<CutOutcome, CutError> {
    let card_position = stack
        .position_of(card)
        .ok_or(CutError::CardNotInStack(*card))?;

    let (from, to) = (card_position.get(), target.get());
    let cut = if from > to {
        from - to
    } else {
        DECK_SIZE - (to - from)
    };

    let cut_position = Position::from_index(cut - 1);
    let top_position = Position::from_index(cut % DECK_SIZE);

    Ok(CutOutcome {
        card_position,
        cut_position,
        cut_card: stack.card_at(cut_position),
        top_position,
        top_card: stack.card_at(top_position),
    })
}

impl CutOutcome {
    /// The deck order after performing this cut on `stack`, top card first.
    pub fn apply(&self, stack: &Stack) -> Vec<Card> {
        let mut cards: Vec<Card> = stack.cards().map(|(_, card)| card).collect();
        cards.rotate_left(self.cut_position.get() % DECK_SIZE);
        cards
    }
}
