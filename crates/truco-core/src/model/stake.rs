use core::fmt;
use serde::{Deserialize, Serialize};

/// Points riding on the current round. Truco calls walk it up the ladder
/// 1, 3, 6, 9, 12 and it never goes past 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Stake(u32);

impl Stake {
    pub const LADDER: [u32; 5] = [1, 3, 6, 9, 12];
    pub const MIN: Stake = Stake(1);
    pub const MAX: Stake = Stake(12);

    pub const fn value(self) -> u32 {
        self.0
    }

    pub const fn is_capped(self) -> bool {
        self.0 >= Self::MAX.0
    }

    /// The next rung, or `None` at the cap.
    pub fn raised(self) -> Option<Stake> {
        Self::LADDER
            .iter()
            .copied()
            .find(|&value| value > self.0)
            .map(Stake)
    }

    pub fn from_value(value: u32) -> Option<Stake> {
        Self::LADDER.contains(&value).then_some(Stake(value))
    }
}

impl Default for Stake {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Display for Stake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
