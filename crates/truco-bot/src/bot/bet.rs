use super::{BotParams, evaluate_hand_strength};
use rand::Rng;
use truco_core::game::policy::RaiseView;
use truco_core::model::round::RoundState;
use truco_core::model::score::ScoreBoard;
use truco_core::model::seat::{Seat, Team};

/// Public state the deciding team weighs when a raise is called.
#[derive(Debug, Clone, Copy)]
pub struct BetContext<'a> {
    pub requester: Team,
    pub round: &'a RoundState,
    pub scores: &'a ScoreBoard,
    pub turn: Seat,
}

impl BetContext<'_> {
    pub fn deciding_team(&self) -> Team {
        self.requester.opponent()
    }

    /// Mean hand strength across the deciding team's two seats.
    pub fn team_strength(&self, params: &BotParams) -> f64 {
        let seats = self.deciding_team().seats();
        let total: u32 = seats
            .iter()
            .map(|&seat| evaluate_hand_strength(self.round.hand(seat), self.round.trumps(), params))
            .sum();
        f64::from(total) / seats.len() as f64
    }
}

impl<'a> From<&RaiseView<'a>> for BetContext<'a> {
    fn from(view: &RaiseView<'a>) -> Self {
        Self {
            requester: view.requester,
            round: view.round,
            scores: view.scores,
            turn: view.turn,
        }
    }
}

/// Probability that the deciding team accepts, before sampling.
pub fn acceptance_probability(ctx: &BetContext<'_>, params: &BotParams) -> f64 {
    let deciding = ctx.deciding_team();
    let mut chance = params.base_acceptance;

    let strength = ctx.team_strength(params);
    if strength > params.strong_team_threshold {
        chance += params.strong_team_bonus;
    }
    if strength < params.weak_team_threshold {
        chance -= params.weak_team_penalty;
    }

    let wins = ctx.round.hand_wins();
    if wins[deciding.index()] > wins[ctx.requester.index()] {
        chance += params.leading_bonus;
    }

    if ctx.scores.score(deciding) >= params.near_win_score {
        chance += params.own_near_win_bonus;
    } else if ctx.scores.score(ctx.requester) >= params.near_win_score {
        chance += params.rival_near_win_bonus;
    }

    if ctx.round.hands_played() == 0 {
        chance += params.first_hand_bonus;
    }

    chance += params.seat_aggression[ctx.turn.index()];
    // The upper bound wins when the two are inverted.
    chance.max(params.min_acceptance).min(params.max_acceptance)
}

/// Outcome of one raise answer with the numbers behind it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BetDecision {
    pub chance: f64,
    pub sample: f64,
    pub accepted: bool,
}

/// Draws one uniform sample against [`acceptance_probability`].
pub fn decide_bet_acceptance<R: Rng + ?Sized>(
    ctx: &BetContext<'_>,
    params: &BotParams,
    rng: &mut R,
) -> BetDecision {
    let chance = acceptance_probability(ctx, params);
    let sample = rng.r#gen::<f64>();
    BetDecision {
        chance,
        sample,
        accepted: sample < chance,
    }
}
