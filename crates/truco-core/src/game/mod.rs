pub mod engine;
pub mod events;
pub mod match_state;
pub mod policy;
pub mod scheduler;
pub mod serialization;
