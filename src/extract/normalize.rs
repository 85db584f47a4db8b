use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::cards::vocabulary::is_suit_symbol;

/// A word, number or suit symbol from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
}

/// Strips accents, folds ligatures and lowercases.
pub fn normalize(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for c in text.nfd().filter(|c| !is_combining_mark(*c)) {
        match c {
            'œ' | 'Œ' => normalized.push_str("oe"),
            'æ' | 'Æ' => normalized.push_str("ae"),
            other => normalized.extend(other.to_lowercase()),
        }
    }
    normalized
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Splits normalized text into word tokens. Suit symbols stand alone as
/// tokens; every other non-word character separates tokens.
pub fn tokenize(normalized: &str) -> Vec<Token> {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for c in normalized.chars() {
        if is_word_char(c) {
            current.push(c);
            continue;
        }
        if !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        if is_suit_symbol(c) {
            words.push(c.to_string());
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    words.into_iter().map(|text| Token { text }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str) -> Vec<String> {
        tokenize(&normalize(text))
            .into_iter()
            .map(|token| token.text)
            .collect()
    }

    #[test]
    fn test_normalize_strips_accents_and_case() {
        assert_eq!(normalize("Trèfle"), "trefle");
        assert_eq!(normalize("CŒUR"), "coeur");
        assert_eq!(normalize("Dix de Cœur"), "dix de coeur");
        assert_eq!(normalize("Ça"), "ca");
    }

    #[test]
    fn test_tokenize_splits_on_punctuation_and_lines() {
        assert_eq!(
            texts("Ten of spades,\nposition: 20!"),
            vec!["ten", "of", "spades", "position", "20"]
        );
        assert_eq!(texts("  ...  "), Vec::<String>::new());
    }

    #[test]
    fn test_tokenize_keeps_suit_symbols() {
        assert_eq!(texts("A♥ at 12"), vec!["a", "♥", "at", "12"]);
        assert_eq!(texts("10♠"), vec!["10", "♠"]);
    }

    #[test]
    fn test_tokenize_keeps_compact_codes_together() {
        assert_eq!(texts("10s at 20"), vec!["10s", "at", "20"]);
        assert_eq!(texts("snake_case 5"), vec!["snake_case", "5"]);
    }

}
