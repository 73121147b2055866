use crate::error::EngineError;
use crate::game::events::{MatchEvent, MatchObserver};
use crate::game::match_state::{MatchPhase, MatchState};
use crate::game::policy::{PlayView, Policy, RaiseView};
use crate::game::scheduler::{Action, Agenda, Clock, Pacing};
use crate::model::card::Card;
use crate::model::deck::Deck;
use crate::model::round::{PlayOutcome, RoundState};
use crate::model::score::ScoreBoard;
use crate::model::seat::{Seat, Team};
use crate::model::stake::Stake;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seat driven from outside the engine; `None` automates all four.
    #[serde(default = "default_human")]
    pub human: Option<Seat>,
    #[serde(default)]
    pub pacing: Pacing,
}

impl EngineConfig {
    /// Every seat automated with no pauses, for simulations.
    pub const fn headless() -> Self {
        Self {
            human: None,
            pacing: Pacing::INSTANT,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            human: default_human(),
            pacing: Pacing::default(),
        }
    }
}

fn default_human() -> Option<Seat> {
    Some(Seat::North)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetOutcome {
    Accepted { stake: Stake },
    Declined { awarded: u32 },
}

/// Rules authority for one match session. Human input arrives through
/// `play_card`, `request_bet_escalation`, `concede` and `start_new_match`;
/// automated seats are queued on the agenda and driven by `run_next`.
///
/// A new engine waits for `start_new_match` (or `deal_from_deck`) so that
/// subscribers see the opening `CardsDealt`. Until then every inbound call
/// is refused with `NotStarted`.
pub struct MatchEngine<P: Policy> {
    state: MatchState,
    started: bool,
    config: EngineConfig,
    policy: P,
    observers: Vec<Box<dyn MatchObserver>>,
    agenda: Agenda,
}

impl<P: Policy> MatchEngine<P> {
    pub fn new(config: EngineConfig, policy: P) -> Self {
        Self::from_state(MatchState::new(), config, policy)
    }

    pub fn with_seed(config: EngineConfig, policy: P, seed: u64) -> Self {
        Self::from_state(MatchState::with_seed(seed), config, policy)
    }

    fn from_state(state: MatchState, config: EngineConfig, policy: P) -> Self {
        Self {
            state,
            started: false,
            config,
            policy,
            observers: Vec::new(),
            agenda: Agenda::new(),
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn MatchObserver>) {
        self.observers.push(observer);
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn round(&self) -> &RoundState {
        self.state.round()
    }

    pub fn scores(&self) -> &ScoreBoard {
        self.state.scores()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn agenda(&self) -> &Agenda {
        &self.agenda
    }

    pub fn turn(&self) -> Seat {
        self.state.round().turn()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_over(&self) -> bool {
        matches!(self.state.phase(), MatchPhase::Over(_))
    }

    pub fn is_automated(&self, seat: Seat) -> bool {
        self.config.human != Some(seat)
    }

    /// Zeroes the scores and deals the first round of a new match.
    pub fn start_new_match(&mut self) {
        info!(seed = self.state.seed(), "starting new match");
        self.agenda.clear();
        self.state.reset();
        self.started = true;
        self.announce_deal();
    }

    /// Replaces the current round with a deal from `deck` as stacked.
    pub fn deal_from_deck(&mut self, deck: &Deck) {
        self.agenda.clear();
        self.state.deal_from(deck);
        self.started = true;
        self.announce_deal();
    }

    pub fn play_card(&mut self, seat: Seat, card: Card) -> Result<PlayOutcome, EngineError> {
        self.ensure_in_progress()?;
        let outcome = self.state.round_mut().play_card(seat, card)?;
        debug!(%seat, %card, "card played");

        let next = match outcome {
            PlayOutcome::Played { next } => Some(next),
            PlayOutcome::TrickFull => None,
        };
        self.emit(MatchEvent::CardPlayed { seat, card, next });

        match next {
            Some(next) => self.schedule_seat(next),
            None => self
                .agenda
                .push(Action::ResolveTrick, self.config.pacing.trick_delay()),
        }
        Ok(outcome)
    }

    /// Truco called by the human seat's team (North/South when no seat is human).
    pub fn request_bet_escalation(&mut self) -> Result<BetOutcome, EngineError> {
        let requester = self
            .config
            .human
            .map(Seat::team)
            .unwrap_or(Team::NorthSouth);
        self.request_bet_escalation_by(requester)
    }

    pub fn request_bet_escalation_by(&mut self, requester: Team) -> Result<BetOutcome, EngineError> {
        self.ensure_in_progress()?;
        let current = self.state.round().stake();
        let proposed = current.raised().ok_or(EngineError::BetAtCap)?;
        self.emit(MatchEvent::BetRequested {
            requester,
            proposed,
        });

        let turn = self.state.round().turn();
        let accepted = {
            let (round, scores, rng) = self.state.decision_parts();
            let view = RaiseView {
                requester,
                proposed,
                round,
                scores,
                turn,
            };
            self.policy.accepts_raise(&view, rng)
        };

        if accepted {
            self.state.round_mut().raise_stake();
            info!(%requester, stake = proposed.value(), "raise accepted");
            self.emit(MatchEvent::BetResult {
                accepted: true,
                value: proposed.value(),
            });
            Ok(BetOutcome::Accepted { stake: proposed })
        } else {
            let awarded = current.value();
            info!(%requester, awarded, "raise declined");
            self.emit(MatchEvent::BetResult {
                accepted: false,
                value: awarded,
            });
            self.award_round(requester, awarded);
            Ok(BetOutcome::Declined { awarded })
        }
    }

    /// `team` runs from the round; the opponents collect the current stake.
    pub fn concede(&mut self, team: Team) -> Result<u32, EngineError> {
        self.ensure_in_progress()?;
        let points = self.state.round().stake().value();
        info!(%team, points, "round conceded");
        self.award_round(team.opponent(), points);
        Ok(points)
    }

    /// Runs the oldest pending continuation after waiting out its delay.
    pub fn run_next<C: Clock + ?Sized>(&mut self, clock: &mut C) -> Option<Action> {
        let scheduled = self.agenda.pop()?;
        clock.wait(scheduled.delay);
        match scheduled.action {
            Action::AutoPlay(seat) => self.auto_play(seat),
            Action::ResolveTrick => self.resolve_trick(),
        }
        Some(scheduled.action)
    }

    /// Drains the agenda. Stops on its own when the human seat is due or the
    /// match is over. Returns how many continuations ran.
    pub fn run_until_idle<C: Clock + ?Sized>(&mut self, clock: &mut C) -> usize {
        let mut steps = 0;
        while self.run_next(clock).is_some() {
            steps += 1;
        }
        steps
    }

    fn auto_play(&mut self, seat: Seat) {
        if self.is_over() {
            return;
        }
        let round = self.state.round();
        if round.decided().is_some() || round.current_trick().is_complete() || round.turn() != seat {
            debug!(%seat, "skipping stale automated play");
            return;
        }

        let hand = round.hand(seat);
        let Some(fallback) = hand.cards().first().copied() else {
            warn!(%seat, "automated seat has no cards");
            return;
        };
        let view = PlayView {
            seat,
            hand,
            trick: round.current_trick(),
            trumps: round.trumps(),
            partners_human: self
                .config
                .human
                .is_some_and(|human| human != seat && human.team() == seat.team()),
        };
        let chosen = self.policy.choose_card(&view);
        let card = if hand.contains(chosen) {
            chosen
        } else {
            warn!(%seat, card = %chosen, "policy picked a card outside the hand");
            fallback
        };

        if let Err(err) = self.play_card(seat, card) {
            warn!(%seat, %card, error = %err, "automated play rejected");
        }
    }

    fn resolve_trick(&mut self) {
        if self.is_over() {
            return;
        }
        let Some(resolution) = self.state.round_mut().resolve_trick() else {
            return;
        };
        debug!(winner = %resolution.winner, hand_wins = ?resolution.hand_wins, "trick resolved");
        self.emit(MatchEvent::TrickResolved {
            winner: resolution.winner,
            hand_wins: resolution.hand_wins,
        });

        match resolution.decided {
            Some(team) => {
                let points = self.state.round().stake().value();
                self.award_round(team, points);
            }
            None => self.schedule_seat(self.state.round().turn()),
        }
    }

    fn award_round(&mut self, winner: Team, points: u32) {
        self.agenda.clear();
        let match_winner = self.state.credit(winner, points);
        let scores = *self.state.scores().standings();
        info!(%winner, points, ?scores, "round decided");
        self.emit(MatchEvent::RoundDecided {
            winner,
            points,
            scores,
        });

        match match_winner {
            Some(team) => {
                info!(winner = %team, ?scores, "match over");
                self.emit(MatchEvent::MatchOver {
                    winner: team,
                    scores,
                });
            }
            None => {
                self.state.start_next_round();
                self.announce_deal();
            }
        }
    }

    fn announce_deal(&mut self) {
        let round = self.state.round();
        let event = MatchEvent::CardsDealt {
            round: self.state.round_number(),
            hands: round.hands().clone(),
            turn_card: round.turn_card(),
            trumps: round.trumps().cards(),
        };
        debug!(round = self.state.round_number(), turn_card = %round.turn_card(), "cards dealt");
        let opener = round.turn();
        self.emit(event);
        self.schedule_seat(opener);
    }

    fn schedule_seat(&mut self, seat: Seat) {
        if self.is_automated(seat) && !self.is_over() {
            self.agenda
                .push(Action::AutoPlay(seat), self.config.pacing.ai_delay());
        }
    }

    fn ensure_in_progress(&self) -> Result<(), EngineError> {
        if !self.started {
            Err(EngineError::NotStarted)
        } else if self.is_over() {
            Err(EngineError::MatchOver)
        } else {
            Ok(())
        }
    }

    fn emit(&mut self, event: MatchEvent) {
        for observer in self.observers.iter_mut() {
            observer.on_event(&event);
        }
    }
}
