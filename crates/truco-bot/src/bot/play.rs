use super::BotParams;
use truco_core::game::policy::PlayView;
use truco_core::model::card::Card;
use truco_core::model::trump::TrumpSet;

/// A chosen card and the rule that picked it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayChoice {
    pub card: Card,
    pub reason: &'static str,
}

impl PlayChoice {
    const fn new(card: Card, reason: &'static str) -> Self {
        Self { card, reason }
    }
}

pub struct PlayPlanner;

impl PlayPlanner {
    /// Picks a card for `view.seat`. `None` only when the hand is empty.
    pub fn choose(view: &PlayView<'_>, params: &BotParams) -> Option<PlayChoice> {
        let ranked = ranked_cards(view.hand.cards(), view.trumps);
        let strongest = *ranked.first()?;
        let weakest = *ranked.last()?;

        let Some(best) = view.trick.best_play(view.trumps) else {
            return Some(Self::open(view, params, strongest, weakest));
        };

        if best.seat.team() == view.seat.team() {
            return Some(PlayChoice::new(weakest, "team_winning"));
        }

        let to_beat = view.trumps.rank_value(best.card);
        let cheapest_winner = ranked
            .iter()
            .rev()
            .copied()
            .find(|&card| view.trumps.rank_value(card) > to_beat);
        let Some(winner) = cheapest_winner else {
            return Some(PlayChoice::new(weakest, "cannot_beat"));
        };

        let last_to_play = view.trick.plays().len() == 3;
        let margin = view.trumps.rank_value(winner) - to_beat;
        if last_to_play {
            Some(PlayChoice::new(winner, "last_play_kill"))
        } else if margin <= params.kill_margin {
            Some(PlayChoice::new(winner, "narrow_kill"))
        } else {
            Some(PlayChoice::new(weakest, "save_winner"))
        }
    }

    fn open(view: &PlayView<'_>, params: &BotParams, strongest: Card, weakest: Card) -> PlayChoice {
        let holds_trump = view.hand.iter().any(|&card| view.trumps.contains(card));
        if view.partners_human {
            let holds_high = view
                .hand
                .iter()
                .any(|&card| view.trumps.rank_value(card) >= params.partner_open_value);
            if holds_trump || holds_high {
                PlayChoice::new(strongest, "partner_lead_strong")
            } else {
                PlayChoice::new(weakest, "partner_lead_weak")
            }
        } else if holds_trump {
            PlayChoice::new(strongest, "lead_trump")
        } else {
            PlayChoice::new(weakest, "lead_weak")
        }
    }
}

/// Cards strongest first; equal values keep their hand order.
fn ranked_cards(cards: &[Card], trumps: &TrumpSet) -> Vec<Card> {
    let mut ranked = cards.to_vec();
    ranked.sort_by(|a, b| trumps.rank_value(*b).cmp(&trumps.rank_value(*a)));
    ranked
}
