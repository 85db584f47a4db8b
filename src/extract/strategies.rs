use crate::cards::{
    vocabulary::{is_linker, is_suit_symbol, rank_letter, rank_word, suit_letter, suit_word},
    Card, Rank,
};

use super::normalize::Token;

/// One way of reading a card starting at a given token.
pub trait CardPattern: Send + Sync {
    fn name(&self) -> &'static str;

    fn match_at(&self, tokens: &[Token], at: usize) -> Option<Card>;
}

/// `<rank> of|de <suit>`, e.g. "ten of spades", "dix de pique".
///
/// When `relaxed` is set the middle token may also be a suit word, and the
/// suit is read from the third token.
pub struct LinkedWords {
    pub relaxed: bool,
}

impl CardPattern for LinkedWords {
    fn name(&self) -> &'static str {
        "linked_words"
    }

    fn match_at(&self, tokens: &[Token], at: usize) -> Option<Card> {
        let [rank, middle, suit] = tokens.get(at..at + 3)? else {
            return None;
        };

        let linked =
            is_linker(&middle.text) || (self.relaxed && suit_word(&middle.text).is_some());
        if !linked {
            return None;
        }

        Some(Card::new(rank_word(&rank.text)?, suit_word(&suit.text)?))
    }
}

/// `<rank> <suit>`, e.g. "queen hearts", "7 ♣".
///
/// A bare letter rank ("a", "k") only counts in front of a suit symbol
/// ("A♥", "K ♠"); otherwise "a" is just the article.
pub struct AdjacentWords;

impl AdjacentWords {
    fn symbol_follows(suit: &Token) -> bool {
        let mut chars = suit.text.chars();
        matches!((chars.next(), chars.next()), (Some(c), None) if is_suit_symbol(c))
    }
}

impl CardPattern for AdjacentWords {
    fn name(&self) -> &'static str {
        "adjacent_words"
    }

    fn match_at(&self, tokens: &[Token], at: usize) -> Option<Card> {
        let [rank, suit] = tokens.get(at..at + 2)? else {
            return None;
        };

        let rank = rank_word(&rank.text).or_else(|| {
            Self::symbol_follows(suit)
                .then(|| rank_letter(&rank.text))
                .flatten()
        })?;

        Some(Card::new(rank, suit_word(&suit.text)?))
    }
}

/// A single token holding rank and suit letter, e.g. "10s", "ah", "kd".
pub struct CompactCode;

impl CompactCode {
    fn parse(text: &str) -> Option<Card> {
        let mut chars = text.chars();
        let suit = suit_letter(chars.next_back()?)?;

        let rank = match chars.as_str() {
            "10" => Rank::Ten,
            digit @ ("2" | "3" | "4" | "5" | "6" | "7" | "8" | "9") => rank_word(digit)?,
            letter => rank_letter(letter)?,
        };

        Some(Card::new(rank, suit))
    }
}

impl CardPattern for CompactCode {
    fn name(&self) -> &'static str {
        "compact_code"
    }

    fn match_at(&self, tokens: &[Token], at: usize) -> Option<Card> {
        Self::parse(&tokens.get(at)?.text)
    }
}
