pub mod bot;
pub mod policy;

pub use bot::{
    BetContext, BetDecision, BotParams, PlayChoice, PlayPlanner, acceptance_probability,
    decide_bet_acceptance, evaluate_hand_strength,
};
pub use policy::HeuristicPolicy;
