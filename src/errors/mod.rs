//! Error taxonomy shared across the pipeline

pub mod bot_error;

pub use bot_error::*;
