//! Application layer - Use cases and port interfaces
//!
//! Contains the announce operation and trait definitions for external
//! system interactions.

pub mod announce;
pub mod ports;

// Re-export use cases
pub use announce::{AnnounceInput, AnnounceOutput, AnnounceUseCase};
