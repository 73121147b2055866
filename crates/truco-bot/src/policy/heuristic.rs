use crate::bot::{
    BetContext, BetDecision, BotParams, PlayChoice, PlayPlanner, decide_bet_acceptance,
};
use rand::RngCore;
use truco_core::game::policy::{PlayView, Policy, RaiseView};
use truco_core::model::card::Card;
use tracing::{Level, event};

/// Rule-based seat: [`PlayPlanner`] for cards, a weighted coin for raises.
#[derive(Debug, Clone, Default)]
pub struct HeuristicPolicy {
    params: BotParams,
}

impl HeuristicPolicy {
    pub fn new(params: BotParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &BotParams {
        &self.params
    }
}

impl Policy for HeuristicPolicy {
    fn choose_card(&mut self, view: &PlayView<'_>) -> Card {
        match PlayPlanner::choose(view, &self.params) {
            Some(choice) => {
                log_play_decision(view, choice);
                choice.card
            }
            // The engine never asks an empty hand; any card is refused and replaced.
            None => view.trumps.turn_card(),
        }
    }

    fn accepts_raise(&mut self, view: &RaiseView<'_>, rng: &mut dyn RngCore) -> bool {
        let ctx = BetContext::from(view);
        let decision = decide_bet_acceptance(&ctx, &self.params, rng);
        log_bet_decision(&ctx, view.proposed.value(), decision);
        decision.accepted
    }
}

fn log_play_decision(view: &PlayView<'_>, choice: PlayChoice) {
    if !tracing::enabled!(Level::INFO) {
        return;
    }

    let hand = view
        .hand
        .iter()
        .map(|card| card.to_string())
        .collect::<Vec<_>>()
        .join(",");

    event!(
        target: "truco_bot::play",
        Level::INFO,
        seat = %view.seat,
        hand = %hand,
        chosen = %choice.card,
        trick_cards = view.trick.plays().len(),
        partners_human = view.partners_human,
        reason = choice.reason,
    );
}

fn log_bet_decision(ctx: &BetContext<'_>, proposed: u32, decision: BetDecision) {
    event!(
        target: "truco_bot::bet",
        Level::INFO,
        requester = %ctx.requester,
        deciding = %ctx.deciding_team(),
        turn = %ctx.turn,
        proposed,
        hand_wins = ?ctx.round.hand_wins(),
        chance = decision.chance,
        sample = decision.sample,
        accepted = decision.accepted,
    );
}
