//! Proof-of-work implementation.

pub mod algorithm;
pub mod difficulty;
pub mod pow;
pub mod spacing;
