use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    #[error("card text is empty")]
    Empty,
    #[error("unknown rank in {0:?}")]
    Rank(String),
    #[error("unknown suit in {0:?}")]
    Suit(String),
}

/// Parses `"4C"`, `"qh"` or `"A♠"`: one rank symbol followed by one suit symbol.
impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        let mut chars = text.chars();
        let rank_char = chars.next().ok_or(ParseCardError::Empty)?;
        let suit_text = chars.as_str();

        let rank = Rank::from_symbol(rank_char.encode_utf8(&mut [0; 4]))
            .ok_or_else(|| ParseCardError::Rank(text.to_string()))?;
        let suit = Suit::from_symbol(suit_text).ok_or_else(|| ParseCardError::Suit(text.to_string()))?;
        Ok(Card::new(rank, suit))
    }
}
