use crate::model::card::Card;
use crate::model::seat::Seat;
use thiserror::Error;

/// Reasons a single card play is refused. A refused play never changes state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error("expected {expected} to play next but got {actual}")]
    OutOfTurn { expected: Seat, actual: Seat },
    #[error("{seat} does not hold {card}")]
    CardNotInHand { seat: Seat, card: Card },
    #[error("trick is full and waiting to be resolved")]
    TrickComplete,
    #[error("round is already decided")]
    RoundDecided,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Play(#[from] PlayError),
    #[error("stake is already at its cap")]
    BetAtCap,
    #[error("match has not been dealt yet")]
    NotStarted,
    #[error("match is over")]
    MatchOver,
    #[error("seat index {0} is out of range")]
    InvalidSeat(usize),
    #[error("team index {0} is out of range")]
    InvalidTeam(usize),
}
