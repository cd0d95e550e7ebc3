//! Core data types and structures

pub mod addresses;
pub mod arbitrage;
pub mod execution;
pub mod market;
pub mod validation;

pub use addresses::*;
pub use arbitrage::*;
pub use execution::*;
pub use market::*;
pub use validation::*;
