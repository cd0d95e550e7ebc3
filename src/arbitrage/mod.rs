//! Opportunity detection over sampled router prices

pub mod confidence;
pub mod evaluator;

pub use confidence::confidence_score;
pub use evaluator::{estimate_gas_cost, evaluate, spread_profit};
