//! Metrics core: pure functions of an immutable record snapshot.

pub mod calculator;
pub mod classifier;
pub mod filter;
pub mod logic;
pub mod ranking;

pub use logic::Core;
