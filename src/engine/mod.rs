//! Validation and scoring engine
//!
//! Pure decision logic: given a root word, a history and a candidate,
//! accept or reject with a specific reason and keep the score.

mod game;
mod rules;

pub use game::{AcceptedWord, FALLBACK_ROOT, Game};
pub use rules::{
    MIN_WORD_LENGTH, RejectionReason, calculate_score, is_different_from_root, is_long_enough,
    is_original, is_possible, is_real,
};
