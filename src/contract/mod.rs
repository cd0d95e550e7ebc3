//! Executor contract surface

pub mod executor;

pub use executor::{ArbExecutorApi, ArbExecutorContract};
