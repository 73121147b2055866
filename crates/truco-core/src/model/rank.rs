use core::fmt;
use serde::{Deserialize, Serialize};

/// Card ranks of the 40-card deck, declared in ladder order (weakest first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Four = 1,
    Five = 2,
    Six = 3,
    Seven = 4,
    Queen = 5,
    Jack = 6,
    King = 7,
    Ace = 8,
    Two = 9,
    Three = 10,
}

impl Rank {
    pub const ORDERED: [Rank; 10] = [
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Queen,
        Rank::Jack,
        Rank::King,
        Rank::Ace,
        Rank::Two,
        Rank::Three,
    ];

    pub const fn from_strength(value: u8) -> Option<Self> {
        match value {
            1 => Some(Rank::Four),
            2 => Some(Rank::Five),
            3 => Some(Rank::Six),
            4 => Some(Rank::Seven),
            5 => Some(Rank::Queen),
            6 => Some(Rank::Jack),
            7 => Some(Rank::King),
            8 => Some(Rank::Ace),
            9 => Some(Rank::Two),
            10 => Some(Rank::Three),
            _ => None,
        }
    }

    /// Position on the ladder, 1 for a four up to 10 for a three.
    pub const fn strength(self) -> u8 {
        self as u8
    }

    /// The rank that follows on the ladder; a three wraps around to a four.
    pub const fn next(self) -> Rank {
        match self {
            Rank::Four => Rank::Five,
            Rank::Five => Rank::Six,
            Rank::Six => Rank::Seven,
            Rank::Seven => Rank::Queen,
            Rank::Queen => Rank::Jack,
            Rank::Jack => Rank::King,
            Rank::King => Rank::Ace,
            Rank::Ace => Rank::Two,
            Rank::Two => Rank::Three,
            Rank::Three => Rank::Four,
        }
    }

    /// Ace, two and three.
    pub const fn is_top(self) -> bool {
        matches!(self, Rank::Ace | Rank::Two | Rank::Three)
    }

    /// King, jack and queen.
    pub const fn is_face(self) -> bool {
        matches!(self, Rank::King | Rank::Jack | Rank::Queen)
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "4" => Some(Rank::Four),
            "5" => Some(Rank::Five),
            "6" => Some(Rank::Six),
            "7" => Some(Rank::Seven),
            "Q" | "q" => Some(Rank::Queen),
            "J" | "j" => Some(Rank::Jack),
            "K" | "k" => Some(Rank::King),
            "A" | "a" => Some(Rank::Ace),
            "2" => Some(Rank::Two),
            "3" => Some(Rank::Three),
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Queen => "Q",
            Rank::Jack => "J",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
        };
        f.write_str(text)
    }
}
