//! Quote sources and price sampling

pub mod sampler;
pub mod source;
pub mod tokens;

pub use sampler::*;
pub use source::*;
pub use tokens::*;
