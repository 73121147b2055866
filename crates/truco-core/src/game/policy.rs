use crate::model::card::Card;
use crate::model::hand::Hand;
use crate::model::round::RoundState;
use crate::model::score::ScoreBoard;
use crate::model::seat::{Seat, Team};
use crate::model::stake::Stake;
use crate::model::trick::Trick;
use crate::model::trump::TrumpSet;
use rand::RngCore;

/// Public state an automated seat sees when it is asked for a card.
#[derive(Debug, Clone, Copy)]
pub struct PlayView<'a> {
    pub seat: Seat,
    pub hand: &'a Hand,
    pub trick: &'a Trick,
    pub trumps: &'a TrumpSet,
    /// The seat partners the human player.
    pub partners_human: bool,
}

/// State handed to the deciding team when a raise is called.
#[derive(Debug, Clone, Copy)]
pub struct RaiseView<'a> {
    pub requester: Team,
    pub proposed: Stake,
    pub round: &'a RoundState,
    pub scores: &'a ScoreBoard,
    /// Seat whose turn it was when the raise was called.
    pub turn: Seat,
}

impl RaiseView<'_> {
    pub fn deciding_team(&self) -> Team {
        self.requester.opponent()
    }
}

/// Decision interface for every seat the engine plays on its own.
pub trait Policy {
    /// Pick a card from `view.hand`. A card outside the hand is replaced by
    /// the first held card.
    fn choose_card(&mut self, view: &PlayView<'_>) -> Card;

    /// Answer a truco call on behalf of the deciding team.
    fn accepts_raise(&mut self, view: &RaiseView<'_>, rng: &mut dyn RngCore) -> bool;
}

impl<P: Policy + ?Sized> Policy for Box<P> {
    fn choose_card(&mut self, view: &PlayView<'_>) -> Card {
        (**self).choose_card(view)
    }

    fn accepts_raise(&mut self, view: &RaiseView<'_>, rng: &mut dyn RngCore) -> bool {
        (**self).accepts_raise(view, rng)
    }
}
