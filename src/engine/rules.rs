//! Acceptance rules for candidate words
//!
//! The five checks a candidate must pass, in the order they are applied, plus
//! the closed set of rejection reasons a failed check produces.

use crate::core::LetterPool;
use crate::dictionary::Dictionary;
use std::fmt;

/// Minimum accepted word length
pub const MIN_WORD_LENGTH: usize = 3;

/// Why a candidate was rejected
///
/// A closed set of expected, player-correctable conditions. Each reason
/// carries the alert title and message the hosts render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    /// The word is already in the round's history
    AlreadyUsed,
    /// The word cannot be spelled from the root's letters
    NotPossibleFromRoot,
    /// The dictionary does not recognize the word
    NotARealWord,
    /// The word is shorter than [`MIN_WORD_LENGTH`]
    TooShort,
    /// The word is the root word itself
    SameAsRoot,
}

impl RejectionReason {
    /// Alert title for this rejection
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::AlreadyUsed => "Word used already",
            Self::NotPossibleFromRoot => "Word not possible",
            Self::NotARealWord => "Word not recognized",
            Self::TooShort => "Word too short",
            Self::SameAsRoot => "Word is the same as root",
        }
    }

    /// Alert message for this rejection
    ///
    /// `root_word` is interpolated into the message for rejections that
    /// reference the round's root.
    #[must_use]
    pub fn message(self, root_word: &str) -> String {
        match self {
            Self::AlreadyUsed => "Be more original".to_string(),
            Self::NotPossibleFromRoot => {
                format!("You can't spell that word from '{root_word}'!")
            }
            Self::NotARealWord => "You can't just make them up, you know!".to_string(),
            Self::TooShort => "You can come up with a word longer than that!".to_string(),
            Self::SameAsRoot => "That's too easy. At least change the word!".to_string(),
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl std::error::Error for RejectionReason {}

/// Check that `word` has not been played before in this round
///
/// `used_words` entries and `word` are both expected in normalized
/// (lowercase) form, so a plain contains check is case-insensitive.
#[must_use]
pub fn is_original(used_words: &[String], word: &str) -> bool {
    !used_words.iter().any(|used| used == word)
}

/// Check that `word` can be spelled from the root's letters
///
/// Each letter of `word` consumes one matching occurrence from a working
/// copy of the root's letters.
#[must_use]
pub fn is_possible(root_word: &str, word: &str) -> bool {
    LetterPool::new(root_word).can_spell(word)
}

/// Check that `word` is a recognized dictionary word in `language`
#[must_use]
pub fn is_real<D: Dictionary + ?Sized>(dictionary: &D, word: &str, language: &str) -> bool {
    dictionary.is_real_word(word, language)
}

/// Check that `word` meets the minimum length
#[must_use]
pub fn is_long_enough(word: &str) -> bool {
    word.chars().count() >= MIN_WORD_LENGTH
}

/// Check that `word` is not the root word itself
#[must_use]
pub fn is_different_from_root(root_word: &str, word: &str) -> bool {
    word != root_word
}

/// Sum of the lengths of all accepted words
///
/// The score a history is worth; one point per letter.
#[must_use]
pub fn calculate_score(used_words: &[String]) -> usize {
    used_words.iter().map(|word| word.chars().count()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListDictionary;

    #[test]
    fn originality_checks_history() {
        let used = vec!["silk".to_string(), "worm".to_string()];
        assert!(!is_original(&used, "silk"));
        assert!(is_original(&used, "work"));
        assert!(is_original(&[], "silk"));
    }

    #[test]
    fn possibility_consumes_root_letters() {
        assert!(is_possible("silkworm", "silk"));
        assert!(is_possible("silkworm", "skim"));
        assert!(!is_possible("silkworm", "glass"));
        // Single 'i' in the root, two requested
        assert!(!is_possible("silkworm", "ii"));
    }

    #[test]
    fn reality_defers_to_dictionary() {
        let dictionary = WordListDictionary::from_words(["silk"], "en");
        assert!(is_real(&dictionary, "silk", "en"));
        assert!(!is_real(&dictionary, "rowk", "en"));
    }

    #[test]
    fn length_threshold_is_three() {
        assert!(!is_long_enough(""));
        assert!(!is_long_enough("ab"));
        assert!(is_long_enough("abc"));
        assert!(is_long_enough("abcd"));
    }

    #[test]
    fn root_equality_is_exact() {
        assert!(!is_different_from_root("silkworm", "silkworm"));
        assert!(is_different_from_root("silkworm", "silk"));
    }

    #[test]
    fn score_sums_word_lengths() {
        assert_eq!(calculate_score(&[]), 0);

        let words = vec!["silk".to_string(), "worm".to_string(), "ilk".to_string()];
        assert_eq!(calculate_score(&words), 11);
    }

    #[test]
    fn rejection_titles_and_messages() {
        assert_eq!(RejectionReason::AlreadyUsed.title(), "Word used already");
        assert_eq!(
            RejectionReason::NotPossibleFromRoot.message("silkworm"),
            "You can't spell that word from 'silkworm'!"
        );
        assert_eq!(
            RejectionReason::TooShort.message("silkworm"),
            "You can come up with a word longer than that!"
        );
    }

    #[test]
    fn rejection_display_is_title() {
        assert_eq!(
            format!("{}", RejectionReason::NotARealWord),
            "Word not recognized"
        );
    }
}
