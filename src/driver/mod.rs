//! Session driver

pub mod cycle;

pub use cycle::{CycleDriver, DriverState, SessionSummary};
