//! Cross-router arbitrage bot for Sepolia
//!
//! Samples the same token pair on two DEX routers, evaluates the spread
//! into profit-positive opportunities, reconciles each one against the
//! executor contract's own estimate, and submits the trades that clear
//! the execution threshold.

pub mod arbitrage;
pub mod config;
pub mod contract;
pub mod driver;
pub mod errors;
pub mod execution;
pub mod network;
pub mod quotes;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export commonly used items
pub use config::Config;
pub use errors::{BotError, BotResult};
pub use types::*;

// Type alias for our concrete provider
pub type ConcreteProvider = alloy::providers::RootProvider<alloy::transports::BoxTransport>;
