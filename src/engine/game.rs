//! Round state and the submit pipeline

use super::rules::{
    RejectionReason, calculate_score, is_different_from_root, is_long_enough, is_original,
    is_possible, is_real,
};
use crate::core::Candidate;
use crate::dictionary::Dictionary;
use crate::wordlists::WordSource;

/// Root word used when the word source yields nothing
///
/// An unavailable pool degrades the game to a fixed round instead of
/// aborting; the degradation is logged as a warning.
pub const FALLBACK_ROOT: &str = "silkworm";

/// A successfully accepted word and the points it scored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedWord {
    pub word: String,
    pub points: usize,
}

/// One round of the scramble game
///
/// Holds the root word, the accepted-word history (most recent first) and
/// the running score. Mutated only by successful [`Game::submit`] calls;
/// [`Game::new_round`] replaces the round wholesale. Callers sharing a game
/// across threads must serialize submissions themselves.
pub struct Game<'a, D: Dictionary> {
    dictionary: &'a D,
    language: String,
    root_word: String,
    used_words: Vec<String>,
    score: usize,
}

impl<'a, D: Dictionary> Game<'a, D> {
    /// Start a round with a root word drawn from `source`
    ///
    /// Picks one pool entry uniformly at random. An empty or unavailable
    /// pool falls back to [`FALLBACK_ROOT`].
    pub fn start<W: WordSource>(
        source: &W,
        dictionary: &'a D,
        language: impl Into<String>,
    ) -> Self {
        Self {
            dictionary,
            language: language.into(),
            root_word: draw_root(source),
            used_words: Vec::new(),
            score: 0,
        }
    }

    /// Start a round anchored to a specific root word
    ///
    /// The root is normalized the same way pool entries are.
    pub fn with_root(root_word: &str, dictionary: &'a D, language: impl Into<String>) -> Self {
        Self {
            dictionary,
            language: language.into(),
            root_word: root_word.trim().to_lowercase(),
            used_words: Vec::new(),
            score: 0,
        }
    }

    /// Replace this round with a fresh one
    ///
    /// Draws a new root from `source` and clears the history and score.
    pub fn new_round<W: WordSource>(&mut self, source: &W) {
        self.root_word = draw_root(source);
        self.used_words.clear();
        self.score = 0;
    }

    /// Submit a candidate word
    ///
    /// The input is trimmed and lowercased first. Blank input is silently
    /// ignored and returns `None` with the round untouched. Otherwise the
    /// five checks run in a fixed order and the first failure wins, so the
    /// rejection a player sees is deterministic:
    ///
    /// 1. not already used → [`RejectionReason::AlreadyUsed`]
    /// 2. spellable from the root → [`RejectionReason::NotPossibleFromRoot`]
    /// 3. a real dictionary word → [`RejectionReason::NotARealWord`]
    /// 4. at least three letters → [`RejectionReason::TooShort`]
    /// 5. not the root itself → [`RejectionReason::SameAsRoot`]
    ///
    /// On acceptance the word is prepended to the history and the score
    /// grows by the word's letter count. On rejection the round state is
    /// unchanged.
    pub fn submit(&mut self, input: &str) -> Option<Result<AcceptedWord, RejectionReason>> {
        let candidate = Candidate::parse(input)?;

        if let Err(reason) = self.validate(&candidate) {
            return Some(Err(reason));
        }

        let points = candidate.letter_count();
        self.used_words.insert(0, candidate.text().to_string());
        self.score += points;

        Some(Ok(AcceptedWord {
            word: candidate.text().to_string(),
            points,
        }))
    }

    /// Run the acceptance checks without mutating the round
    ///
    /// # Errors
    ///
    /// Returns the first failing check's [`RejectionReason`], in the same
    /// order [`Game::submit`] applies them.
    pub fn validate(&self, candidate: &Candidate) -> Result<(), RejectionReason> {
        let word = candidate.text();

        if !is_original(&self.used_words, word) {
            return Err(RejectionReason::AlreadyUsed);
        }
        if !is_possible(&self.root_word, word) {
            return Err(RejectionReason::NotPossibleFromRoot);
        }
        if !is_real(self.dictionary, word, &self.language) {
            return Err(RejectionReason::NotARealWord);
        }
        if !is_long_enough(word) {
            return Err(RejectionReason::TooShort);
        }
        if !is_different_from_root(&self.root_word, word) {
            return Err(RejectionReason::SameAsRoot);
        }

        Ok(())
    }

    /// The round's root word
    #[inline]
    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first
    #[inline]
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    /// The running score
    #[inline]
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// The language candidates are checked against
    #[inline]
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Recompute the score from the history
    ///
    /// Always equals [`Game::score`]; the cached value is maintained
    /// incrementally as words are accepted.
    #[must_use]
    pub fn calculate_score(&self) -> usize {
        calculate_score(&self.used_words)
    }
}

/// Draw a root word from the source, falling back when the pool is empty
fn draw_root<W: WordSource>(source: &W) -> String {
    use rand::prelude::IndexedRandom;

    let pool = source.load_word_pool();

    if let Some(root) = pool.choose(&mut rand::rng()) {
        root.trim().to_lowercase()
    } else {
        log::warn!("word pool unavailable or empty, falling back to '{FALLBACK_ROOT}'");
        FALLBACK_ROOT.to_string()
    }
}
