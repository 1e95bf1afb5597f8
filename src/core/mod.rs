//! Core domain types for the word scramble game
//!
//! This module contains the fundamental domain types with zero game logic.
//! All types here are pure, testable, and independent of any host interface.

mod candidate;
mod letters;

pub use candidate::Candidate;
pub use letters::LetterPool;
