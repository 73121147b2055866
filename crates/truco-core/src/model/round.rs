use crate::error::PlayError;
use crate::model::card::Card;
use crate::model::deck::Deck;
use crate::model::hand::{HAND_SIZE, Hand};
use crate::model::seat::{Seat, Team};
use crate::model::stake::Stake;
use crate::model::trick::{Play, Trick, TrickError};
use crate::model::trump::TrumpSet;
use std::array;

/// Tricks in a round.
pub const HANDS_PER_ROUND: usize = 3;
/// Trick wins that settle a round early.
pub const HAND_WINS_TO_DECIDE: u8 = 2;

/// One deal: three tricks at most, played for a single stake.
#[derive(Debug, Clone)]
pub struct RoundState {
    hands: [Hand; 4],
    trumps: TrumpSet,
    current_trick: Trick,
    trick_history: Vec<Trick>,
    opening_seat: Seat,
    hand_wins: [u8; 2],
    last_winner: Option<Seat>,
    stake: Stake,
    decided: Option<Team>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Zero-based index of the hand-within-round being played.
    PlayingHand(usize),
    Decided(Team),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Played { next: Seat },
    TrickFull,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrickResolution {
    pub winner: Seat,
    pub plays: Vec<Play>,
    pub hand_wins: [u8; 2],
    pub decided: Option<Team>,
}

impl RoundState {
    /// Three cards to each seat in seat order, then the thirteenth card is
    /// turned face up. The rest of the deck sits out the round.
    pub fn deal(deck: &Deck, opening_seat: Seat) -> Self {
        let cards = deck.cards();
        let hands = array::from_fn(|seat| {
            let start = seat * HAND_SIZE;
            Hand::with_cards(cards[start..start + HAND_SIZE].to_vec())
        });
        let turn_card = cards[4 * HAND_SIZE];
        Self::from_hands(hands, turn_card, opening_seat)
    }

    pub fn from_hands(hands: [Hand; 4], turn_card: Card, opening_seat: Seat) -> Self {
        Self {
            hands,
            trumps: TrumpSet::from_turn_card(turn_card),
            current_trick: Trick::new(opening_seat),
            trick_history: Vec::with_capacity(HANDS_PER_ROUND),
            opening_seat,
            hand_wins: [0; 2],
            last_winner: None,
            stake: Stake::MIN,
            decided: None,
        }
    }

    pub fn hand(&self, seat: Seat) -> &Hand {
        &self.hands[seat.index()]
    }

    pub fn hands(&self) -> &[Hand; 4] {
        &self.hands
    }

    pub fn trumps(&self) -> &TrumpSet {
        &self.trumps
    }

    pub fn turn_card(&self) -> Card {
        self.trumps.turn_card()
    }

    pub fn current_trick(&self) -> &Trick {
        &self.current_trick
    }

    pub fn trick_history(&self) -> &[Trick] {
        &self.trick_history
    }

    pub fn opening_seat(&self) -> Seat {
        self.opening_seat
    }

    pub fn last_winner(&self) -> Option<Seat> {
        self.last_winner
    }

    pub fn hand_wins(&self) -> [u8; 2] {
        self.hand_wins
    }

    pub fn hands_played(&self) -> usize {
        self.trick_history.len()
    }

    pub fn stake(&self) -> Stake {
        self.stake
    }

    pub fn decided(&self) -> Option<Team> {
        self.decided
    }

    pub fn phase(&self) -> RoundPhase {
        match self.decided {
            Some(team) => RoundPhase::Decided(team),
            None => RoundPhase::PlayingHand(self.hands_played()),
        }
    }

    /// Seat expected to play next.
    pub fn turn(&self) -> Seat {
        self.current_trick.expected_seat()
    }

    /// Moves the stake one rung up the ladder; `None` when already capped.
    pub fn raise_stake(&mut self) -> Option<Stake> {
        let raised = self.stake.raised()?;
        self.stake = raised;
        Some(raised)
    }

    pub fn play_card(&mut self, seat: Seat, card: Card) -> Result<PlayOutcome, PlayError> {
        if self.decided.is_some() {
            return Err(PlayError::RoundDecided);
        }
        if self.current_trick.is_complete() {
            return Err(PlayError::TrickComplete);
        }

        let expected = self.turn();
        if expected != seat {
            return Err(PlayError::OutOfTurn {
                expected,
                actual: seat,
            });
        }

        if !self.hands[seat.index()].contains(card) {
            return Err(PlayError::CardNotInHand { seat, card });
        }

        self.current_trick.play(seat, card).map_err(|err| match err {
            TrickError::TrickComplete => PlayError::TrickComplete,
            TrickError::OutOfTurn { expected, actual } => PlayError::OutOfTurn { expected, actual },
        })?;
        self.hands[seat.index()].remove(card);

        if self.current_trick.is_complete() {
            Ok(PlayOutcome::TrickFull)
        } else {
            Ok(PlayOutcome::Played { next: self.turn() })
        }
    }

    /// Scores a full trick and opens the next one at the round's opening
    /// seat. Returns `None` while the trick still has seats to play.
    pub fn resolve_trick(&mut self) -> Option<TrickResolution> {
        let winner = self.current_trick.winner(&self.trumps)?;
        let team = winner.team();
        self.hand_wins[team.index()] += 1;
        self.last_winner = Some(winner);

        let finished = std::mem::replace(&mut self.current_trick, Trick::new(self.opening_seat));
        let plays = finished.plays().to_vec();
        self.trick_history.push(finished);

        self.decided = self.settled_winner();

        Some(TrickResolution {
            winner,
            plays,
            hand_wins: self.hand_wins,
            decided: self.decided,
        })
    }

    fn settled_winner(&self) -> Option<Team> {
        if let Some(team) = Team::BOTH
            .iter()
            .copied()
            .find(|team| self.hand_wins[team.index()] >= HAND_WINS_TO_DECIDE)
        {
            return Some(team);
        }

        if self.hands_played() < HANDS_PER_ROUND {
            return None;
        }

        let [north_south, east_west] = self.hand_wins;
        if east_west > north_south {
            Some(Team::EastWest)
        } else {
            Some(Team::NorthSouth)
        }
    }
}
