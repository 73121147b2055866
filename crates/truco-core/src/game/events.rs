use crate::model::card::Card;
use crate::model::hand::Hand;
use crate::model::seat::{Seat, Team};
use crate::model::stake::Stake;
use serde::{Deserialize, Serialize};
use std::sync::mpsc::Sender;
use tracing::{Level, event};

/// Everything the engine announces to renderers, audio and loggers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum MatchEvent {
    CardsDealt {
        round: u32,
        hands: [Hand; 4],
        turn_card: Card,
        trumps: [Card; 4],
    },
    CardPlayed {
        seat: Seat,
        card: Card,
        /// `None` once the trick is full.
        next: Option<Seat>,
    },
    TrickResolved {
        winner: Seat,
        hand_wins: [u8; 2],
    },
    RoundDecided {
        winner: Team,
        points: u32,
        scores: [u32; 2],
    },
    MatchOver {
        winner: Team,
        scores: [u32; 2],
    },
    BetRequested {
        requester: Team,
        proposed: Stake,
    },
    BetResult {
        accepted: bool,
        /// The new stake when accepted, the points awarded when declined.
        value: u32,
    },
}

impl MatchEvent {
    pub fn name(&self) -> &'static str {
        match self {
            MatchEvent::CardsDealt { .. } => "cards_dealt",
            MatchEvent::CardPlayed { .. } => "card_played",
            MatchEvent::TrickResolved { .. } => "trick_resolved",
            MatchEvent::RoundDecided { .. } => "round_decided",
            MatchEvent::MatchOver { .. } => "match_over",
            MatchEvent::BetRequested { .. } => "bet_requested",
            MatchEvent::BetResult { .. } => "bet_result",
        }
    }
}

/// Subscriber to engine events. Observers never see engine state directly.
pub trait MatchObserver {
    fn on_event(&mut self, event: &MatchEvent);
}

impl MatchObserver for Sender<MatchEvent> {
    fn on_event(&mut self, event: &MatchEvent) {
        // A dropped receiver only means nobody is listening any more.
        let _ = self.send(event.clone());
    }
}

/// Writes each event to the `truco_core::events` tracing target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl MatchObserver for TracingObserver {
    fn on_event(&mut self, event: &MatchEvent) {
        if !tracing::enabled!(target: "truco_core::events", Level::DEBUG) {
            return;
        }
        let payload = serde_json::to_string(event).unwrap_or_default();
        event!(
            target: "truco_core::events",
            Level::DEBUG,
            kind = event.name(),
            payload = %payload,
        );
    }
}
