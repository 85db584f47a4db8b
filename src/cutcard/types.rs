use serde::{Deserialize, Serialize};

use crate::{cards::Card, cut::CutOutcome, stack::Position};

/// Request payload for computing a cut
#[derive(Debug, Serialize, Deserialize)]
pub struct CutCardRequest {
    // Missing and null both mean "no text"; the service rejects them.
    #[serde(default)]
    pub text: Option<String>,
}

/// The block taken off the top and the card at its bottom
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CutSummary {
    pub bottom_card: Card,
    pub card_position: Position,
}

/// What the deck looks like once the cut is made
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AfterCut {
    pub top_card: Card,
    pub top_card_position: Position,
}

/// Response for the cut computation endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CutCardResponse {
    pub input: String,
    pub card: Card, // lands at target_position once the cut is made
    pub card_stack_position: Position,
    pub target_position: Position,
    pub cut: CutSummary,
    pub after_cut: AfterCut,
}

impl CutCardResponse {
    pub fn new(input: String, card: Card, target: Position, outcome: CutOutcome) -> Self {
        Self {
            input,
            card,
            card_stack_position: outcome.card_position,
            target_position: target,
            cut: CutSummary {
                bottom_card: outcome.cut_card,
                card_position: outcome.cut_position,
            },
            after_cut: AfterCut {
                top_card: outcome.top_card,
                top_card_position: outcome.top_position,
            },
        }
    }
}

/// One slot of the stack listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StackEntry {
    pub position: Position,
    pub card: Card,
}
