use crate::model::deck::Deck;
use crate::model::round::RoundState;
use crate::model::score::ScoreBoard;
use crate::model::seat::{Seat, Team};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Seat that leads every round and every hand within it.
pub const OPENING_SEAT: Seat = Seat::North;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    InProgress,
    Over(Team),
}

/// Scores, the live round and the match's random source.
#[derive(Debug, Clone)]
pub struct MatchState {
    scores: ScoreBoard,
    round_number: u32,
    current_round: RoundState,
    phase: MatchPhase,
    rng: StdRng,
    seed: u64,
}

impl MatchState {
    pub fn new() -> Self {
        let seed: u64 = rand::random();
        Self::with_seed(seed)
    }

    pub fn with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);
        Self {
            scores: ScoreBoard::new(),
            round_number: 1,
            current_round: RoundState::deal(&deck, OPENING_SEAT),
            phase: MatchPhase::InProgress,
            rng,
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    pub fn round(&self) -> &RoundState {
        &self.current_round
    }

    pub fn round_mut(&mut self) -> &mut RoundState {
        &mut self.current_round
    }

    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn winner(&self) -> Option<Team> {
        match self.phase {
            MatchPhase::Over(team) => Some(team),
            MatchPhase::InProgress => None,
        }
    }

    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Borrows the public state and the random source together so a policy
    /// can read one while drawing from the other.
    pub fn decision_parts(&mut self) -> (&RoundState, &ScoreBoard, &mut StdRng) {
        (&self.current_round, &self.scores, &mut self.rng)
    }

    /// Adds `points` to `team` and closes the match once a team reaches the
    /// winning score. Returns the match winner, if any.
    pub fn credit(&mut self, team: Team, points: u32) -> Option<Team> {
        self.scores.credit(team, points);
        if let Some(winner) = self.scores.winner() {
            self.phase = MatchPhase::Over(winner);
        }
        self.winner()
    }

    pub fn start_next_round(&mut self) {
        let deck = Deck::shuffled(&mut self.rng);
        self.deal_from(&deck);
    }

    /// Replaces the live round with a deal from `deck` in its current order.
    pub fn deal_from(&mut self, deck: &Deck) {
        self.round_number += 1;
        self.current_round = RoundState::deal(deck, OPENING_SEAT);
    }

    /// Zeroes the scores and redeals. The random stream carries on.
    pub fn reset(&mut self) {
        self.scores = ScoreBoard::new();
        self.phase = MatchPhase::InProgress;
        self.round_number = 0;
        self.start_next_round();
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{MatchPhase, MatchState, OPENING_SEAT};
    use crate::model::seat::Team;
    use crate::model::stake::Stake;

    #[test]
    fn new_match_starts_at_round_one_with_opening_seat() {
        let state = MatchState::with_seed(0);
        assert_eq!(state.round_number(), 1);
        assert_eq!(state.round().turn(), OPENING_SEAT);
        assert_eq!(state.phase(), MatchPhase::InProgress);
    }

    #[test]
    fn same_seed_deals_same_cards() {
        let a = MatchState::with_seed(77);
        let b = MatchState::with_seed(77);
        assert_eq!(a.round().hands(), b.round().hands());
        assert_eq!(a.round().turn_card(), b.round().turn_card());
        assert_eq!(a.seed(), 77);
    }

    #[test]
    fn next_round_resets_stake_and_counters() {
        let mut state = MatchState::with_seed(3);
        state.round_mut().raise_stake();
        state.start_next_round();
        assert_eq!(state.round_number(), 2);
        assert_eq!(state.round().stake(), Stake::MIN);
        assert_eq!(state.round().hand_wins(), [0, 0]);
    }

    #[test]
    fn credit_closes_match_only_at_twelve() {
        let mut state = MatchState::with_seed(5);
        assert_eq!(state.credit(Team::EastWest, 11), None);
        assert_eq!(state.phase(), MatchPhase::InProgress);
        assert_eq!(state.credit(Team::EastWest, 1), Some(Team::EastWest));
        assert_eq!(state.phase(), MatchPhase::Over(Team::EastWest));
    }

    #[test]
    fn reset_clears_scores_and_reopens() {
        let mut state = MatchState::with_seed(9);
        state.credit(Team::NorthSouth, 12);
        state.reset();
        assert_eq!(state.scores().standings(), &[0, 0]);
        assert_eq!(state.phase(), MatchPhase::InProgress);
        assert_eq!(state.round_number(), 1);
    }
}
