use crate::stack::Position;

use super::normalize::Token;

/// Collects every 1..=52 whole number, left to right. Numbers with leading
/// zeros and numbers glued to letters ("10s") are not candidates.
pub fn position_candidates(tokens: &[Token]) -> Vec<Position> {
    tokens
        .iter()
        .filter(|token| token.text.bytes().all(|b| b.is_ascii_digit()))
        .filter(|token| !token.text.starts_with('0'))
        .filter_map(|token| {
            // Anything too long to parse is far outside the deck anyway.
            let value: u32 = token.text.parse().ok()?;
            Position::new(value).ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::normalize::tokenize;

    fn values(text: &str) -> Vec<usize> {
        position_candidates(&tokenize(text))
            .into_iter()
            .map(Position::get)
            .collect()
    }

    #[test]
    fn test_collects_in_order() {
        assert_eq!(values("10 of spades at 20, or 3"), vec![10, 20, 3]);
    }

    #[test]
    fn test_full_range_accepted() {
        assert_eq!(values("1 9 10 49 50 51 52"), vec![1, 9, 10, 49, 50, 51, 52]);
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(values("0 53 100 99999999999999999999"), Vec::<usize>::new());
    }

    #[test]
    fn test_leading_zero_and_glued_numbers_rejected() {
        assert_eq!(values("07 10s 5th"), Vec::<usize>::new());
    }

}
