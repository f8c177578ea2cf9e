//! Domain layer containing the entities both security state machines operate on.

pub mod entities;

// Re-export commonly used domain types
pub use entities::*;
