use serde::{Deserialize, Serialize};

/// Tuning knobs for the heuristic seats. `Default` carries the stock table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotParams {
    pub trump_weight: u32,
    pub top_card_weight: u32,
    pub face_card_weight: u32,
    pub strong_suit_weight: u32,
    pub top_pair_bonus: u32,
    /// Lowest card value that lets the human's partner open strong.
    pub partner_open_value: u8,
    /// Widest margin at which a non-final follower still spends a winner.
    pub kill_margin: u8,

    pub base_acceptance: f64,
    pub strong_team_threshold: f64,
    pub strong_team_bonus: f64,
    pub weak_team_threshold: f64,
    pub weak_team_penalty: f64,
    pub leading_bonus: f64,
    pub near_win_score: u32,
    pub own_near_win_bonus: f64,
    pub rival_near_win_bonus: f64,
    pub first_hand_bonus: f64,
    /// Extra acceptance keyed by the seat to act, indexed N, E, S, W.
    pub seat_aggression: [f64; 4],
    pub min_acceptance: f64,
    pub max_acceptance: f64,
}

impl Default for BotParams {
    fn default() -> Self {
        Self {
            trump_weight: 15,
            top_card_weight: 8,
            face_card_weight: 4,
            strong_suit_weight: 4,
            top_pair_bonus: 10,
            partner_open_value: 8,
            kill_margin: 2,

            base_acceptance: 0.70,
            strong_team_threshold: 12.0,
            strong_team_bonus: 0.30,
            weak_team_threshold: 8.0,
            weak_team_penalty: 0.10,
            leading_bonus: 0.20,
            near_win_score: 9,
            own_near_win_bonus: 0.25,
            rival_near_win_bonus: 0.15,
            first_hand_bonus: 0.15,
            seat_aggression: [0.0, 0.0, 0.10, 0.15],
            min_acceptance: 0.20,
            max_acceptance: 0.95,
        }
    }
}
