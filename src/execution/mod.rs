//! Trade execution

pub mod coordinator;

pub use coordinator::ExecutionCoordinator;
