//! English and French words for ranks and suits.
//!
//! Lookups expect normalized tokens: lower case, accents stripped.

use super::basic::{Rank, Suit};

/// Maps a rank word or number to its rank.
pub fn rank_word(token: &str) -> Option<Rank> {
    let rank = match token {
        "ace" | "as" | "one" | "1" => Rank::Ace,
        "two" | "deux" | "2" => Rank::Two,
        "three" | "trois" | "3" => Rank::Three,
        "four" | "quatre" | "4" => Rank::Four,
        "five" | "cinq" | "5" => Rank::Five,
        "six" | "6" => Rank::Six,
        "seven" | "sept" | "7" => Rank::Seven,
        "eight" | "huit" | "8" => Rank::Eight,
        "nine" | "neuf" | "9" => Rank::Nine,
        "ten" | "dix" | "10" => Rank::Ten,
        "jack" | "valet" | "11" => Rank::Jack,
        "queen" | "reine" | "dame" | "12" => Rank::Queen,
        "king" | "roi" | "13" => Rank::King,
        _ => return None,
    };
    Some(rank)
}

/// Single-letter ranks ("a", "j", "q", "k"). Only meaningful next to a
/// suit: "a" on its own is the article.
pub fn rank_letter(token: &str) -> Option<Rank> {
    match token {
        "a" => Some(Rank::Ace),
        "j" => Some(Rank::Jack),
        "q" => Some(Rank::Queen),
        "k" => Some(Rank::King),
        _ => None,
    }
}

/// Maps a suit word, single letter or suit symbol to its suit.
pub fn suit_word(token: &str) -> Option<Suit> {
    let suit = match token {
        "hearts" | "heart" | "coeur" | "coeurs" | "h" | "♥" | "♡" => Suit::Hearts,
        "spades" | "spade" | "pique" | "piques" | "s" | "♠" | "♤" => Suit::Spades,
        "diamonds" | "diamond" | "carreau" | "carreaux" | "d" | "♦" | "♢" => {
            Suit::Diamonds
        }
        "clubs" | "club" | "trefle" | "trefles" | "c" | "♣" | "♧" => Suit::Clubs,
        _ => return None,
    };
    Some(suit)
}

/// Suit for a single-letter abbreviation only.
pub fn suit_letter(letter: char) -> Option<Suit> {
    match letter {
        'h' => Some(Suit::Hearts),
        's' => Some(Suit::Spades),
        'd' => Some(Suit::Diamonds),
        'c' => Some(Suit::Clubs),
        _ => None,
    }
}

/// Words joining a rank to its suit ("ten of spades", "dix de pique").
pub fn is_linker(token: &str) -> bool {
    matches!(token, "of" | "de")
}

/// Characters that name a suit on their own and form a token by themselves.
pub fn is_suit_symbol(c: char) -> bool {
    matches!(c, '♥' | '♠' | '♦' | '♣' | '♡' | '♤' | '♢' | '♧')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ace", Rank::Ace)]
    #[case("as", Rank::Ace)]
    #[case("one", Rank::Ace)]
    #[case("1", Rank::Ace)]
    #[case("deux", Rank::Two)]
    #[case("dix", Rank::Ten)]
    #[case("10", Rank::Ten)]
    #[case("valet", Rank::Jack)]
    #[case("11", Rank::Jack)]
    #[case("reine", Rank::Queen)]
    #[case("dame", Rank::Queen)]
    #[case("roi", Rank::King)]
    #[case("13", Rank::King)]
    fn test_rank_words(#[case] token: &str, #[case] expected: Rank) {
        assert_eq!(rank_word(token), Some(expected));
    }

    #[rstest]
    #[case("coeur", Suit::Hearts)]
    #[case("♥", Suit::Hearts)]
    #[case("piques", Suit::Spades)]
    #[case("carreaux", Suit::Diamonds)]
    #[case("diamond", Suit::Diamonds)]
    #[case("trefle", Suit::Clubs)]
    #[case("♣", Suit::Clubs)]
    #[case("c", Suit::Clubs)]
    fn test_suit_words(#[case] token: &str, #[case] expected: Suit) {
        assert_eq!(suit_word(token), Some(expected));
    }

    #[test]
    fn test_unknown_words() {
        assert_eq!(rank_word("0"), None);
        assert_eq!(rank_word("14"), None);
        assert_eq!(rank_word("Ace"), None); // Lookups expect lower case
        assert_eq!(rank_word("a"), None);
        assert_eq!(rank_letter("a"), Some(Rank::Ace));
        assert_eq!(rank_letter("k"), Some(Rank::King));
        assert_eq!(rank_letter("ace"), None);
        assert_eq!(suit_word("trèfle"), None); // Lookups expect accents stripped
        assert_eq!(suit_word("of"), None);
        assert!(is_linker("de"));
        assert!(!is_linker("the"));
    }
}
