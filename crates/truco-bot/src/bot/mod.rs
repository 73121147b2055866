mod bet;
mod params;
mod play;
mod strength;

pub use bet::{BetContext, BetDecision, acceptance_probability, decide_bet_acceptance};
pub use params::BotParams;
pub use play::{PlayChoice, PlayPlanner};
pub use strength::evaluate_hand_strength;
