//! Local-versus-contract opportunity reconciliation

pub mod tolerance;
pub mod validator;

pub use tolerance::*;
pub use validator::*;
