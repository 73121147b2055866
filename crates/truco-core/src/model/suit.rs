use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    Spades = 0,
    Hearts = 1,
    Diamonds = 2,
    Clubs = 3,
}

impl Suit {
    /// Deck order used when building a fresh deck.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Strongest first: the order trumps are ranked among themselves.
    pub const BY_STRENGTH: [Suit; 4] = [Suit::Clubs, Suit::Hearts, Suit::Spades, Suit::Diamonds];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Suit::Spades),
            1 => Some(Suit::Hearts),
            2 => Some(Suit::Diamonds),
            3 => Some(Suit::Clubs),
            _ => None,
        }
    }

    /// Tie-break weight among trumps: clubs 4, hearts 3, spades 2, diamonds 1.
    pub const fn trump_strength(self) -> u8 {
        match self {
            Suit::Clubs => 4,
            Suit::Hearts => 3,
            Suit::Spades => 2,
            Suit::Diamonds => 1,
        }
    }

    /// Clubs and hearts, the two suits that win trump ties.
    pub const fn is_strong(self) -> bool {
        matches!(self, Suit::Clubs | Suit::Hearts)
    }

    pub const fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "S" | "s" | "♠" => Some(Suit::Spades),
            "H" | "h" | "♥" => Some(Suit::Hearts),
            "D" | "d" | "♦" => Some(Suit::Diamonds),
            "C" | "c" | "♣" => Some(Suit::Clubs),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Suit::Spades => "S",
            Suit::Hearts => "H",
            Suit::Diamonds => "D",
            Suit::Clubs => "C",
        };
        f.write_str(symbol)
    }
}
