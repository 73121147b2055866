use crate::model::seat::Team;
use serde::{Deserialize, Serialize};

/// Points needed to take the match.
pub const WINNING_SCORE: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    totals: [u32; 2],
}

impl ScoreBoard {
    pub const fn new() -> Self {
        Self { totals: [0; 2] }
    }

    pub fn credit(&mut self, team: Team, points: u32) {
        self.totals[team.index()] += points;
    }

    pub fn set_totals(&mut self, totals: [u32; 2]) {
        self.totals = totals;
    }

    pub fn score(&self, team: Team) -> u32 {
        self.totals[team.index()]
    }

    pub fn standings(&self) -> &[u32; 2] {
        &self.totals
    }

    /// The first team at or past the winning score, if any.
    pub fn winner(&self) -> Option<Team> {
        Team::BOTH
            .iter()
            .copied()
            .find(|team| self.score(*team) >= WINNING_SCORE)
    }
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{ScoreBoard, WINNING_SCORE};
    use crate::model::seat::Team;

    #[test]
    fn credits_accumulate_per_team() {
        let mut board = ScoreBoard::new();
        board.credit(Team::EastWest, 3);
        board.credit(Team::EastWest, 1);
        assert_eq!(board.score(Team::EastWest), 4);
        assert_eq!(board.score(Team::NorthSouth), 0);
    }

    #[test]
    fn winner_appears_only_at_twelve() {
        let mut board = ScoreBoard::new();
        board.credit(Team::NorthSouth, WINNING_SCORE - 1);
        assert_eq!(board.winner(), None);
        board.credit(Team::NorthSouth, 1);
        assert_eq!(board.winner(), Some(Team::NorthSouth));
    }

    #[test]
    fn overshooting_still_wins() {
        let mut board = ScoreBoard::new();
        board.set_totals([10, 9]);
        board.credit(Team::EastWest, 6);
        assert_eq!(board.standings(), &[10, 15]);
        assert_eq!(board.winner(), Some(Team::EastWest));
    }
}
