use super::match_state::MatchState;
use crate::model::card::Card;
use crate::model::seat::{Seat, Team};
use crate::model::trick::Play;
use serde::{Deserialize, Serialize};

/// Public table state for renderers: no hidden cards, only hand sizes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchSnapshot {
    pub seed: u64,
    pub round_number: u32,
    pub scores: [u32; 2],
    pub stake: u32,
    pub hand_wins: [u8; 2],
    pub hands_played: usize,
    pub turn_card: Card,
    pub trumps: [Card; 4],
    pub trick: Vec<Play>,
    pub turn: Seat,
    pub hand_sizes: [usize; 4],
    pub winner: Option<Team>,
}

impl MatchSnapshot {
    pub fn capture(state: &MatchState) -> Self {
        let round = state.round();
        MatchSnapshot {
            seed: state.seed(),
            round_number: state.round_number(),
            scores: *state.scores().standings(),
            stake: round.stake().value(),
            hand_wins: round.hand_wins(),
            hands_played: round.hands_played(),
            turn_card: round.turn_card(),
            trumps: round.trumps().cards(),
            trick: round.current_trick().plays().to_vec(),
            turn: round.turn(),
            hand_sizes: Seat::LOOP.map(|seat| round.hand(seat).len()),
            winner: state.winner(),
        }
    }

    pub fn to_json(state: &MatchState) -> serde_json::Result<String> {
        let snapshot = Self::capture(state);
        serde_json::to_string_pretty(&snapshot)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::MatchSnapshot;
    use crate::game::match_state::MatchState;
    use crate::model::seat::Seat;

    #[test]
    fn snapshot_serializes_to_json() {
        let state = MatchState::with_seed(99);
        let json = MatchSnapshot::to_json(&state).unwrap();
        assert!(json.contains("\"seed\": 99"));
        assert!(json.contains("\"stake\": 1"));
    }

    #[test]
    fn snapshot_reads_back_identically() {
        let mut state = MatchState::with_seed(11);
        let card = state.round().hand(Seat::North).cards()[0];
        state.round_mut().play_card(Seat::North, card).unwrap();

        let snapshot = MatchSnapshot::capture(&state);
        assert_eq!(snapshot.hand_sizes, [2, 3, 3, 3]);
        assert_eq!(snapshot.turn, Seat::East);
        assert_eq!(snapshot.trick.len(), 1);

        let json = MatchSnapshot::to_json(&state).unwrap();
        assert_eq!(MatchSnapshot::from_json(&json).unwrap(), snapshot);
    }
}
