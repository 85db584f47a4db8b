pub mod basic;
pub mod vocabulary;

pub use basic::{Card, CardParseError, Rank, Suit};
