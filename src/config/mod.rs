//! Configuration management. The loaded `Config` is passed explicitly into
//! every component constructor; there is no process-wide singleton.

pub mod settings;

pub use settings::*;
