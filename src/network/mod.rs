//! Network providers and connection management

pub mod gas;
pub mod providers;
pub mod retry;

pub use gas::*;
pub use providers::*;
pub use retry::*;
