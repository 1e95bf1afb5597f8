//! Word checking command
//!
//! Runs a single candidate through the acceptance rules against a fresh
//! round and reports each rule's outcome.

use crate::core::Candidate;
use crate::dictionary::Dictionary;
use crate::engine::{
    Game, RejectionReason, is_different_from_root, is_long_enough, is_original, is_possible,
    is_real,
};

/// Outcome of one acceptance rule
pub struct RuleCheck {
    pub name: &'static str,
    pub passed: bool,
}

/// Result of checking a candidate against a root word
pub struct CheckResult {
    pub root_word: String,
    pub word: String,
    pub checks: Vec<RuleCheck>,
    /// Points the word would score, or the winning rejection
    pub verdict: Result<usize, RejectionReason>,
}

/// Check a candidate word against a root word
///
/// The rules run against an empty history, so originality always passes;
/// it is reported anyway to keep the breakdown complete.
///
/// # Errors
///
/// Returns an error if the candidate is blank after trimming.
pub fn check_word<D: Dictionary>(
    root_word: &str,
    word: &str,
    dictionary: &D,
    language: &str,
) -> Result<CheckResult, String> {
    let candidate =
        Candidate::parse(word).ok_or_else(|| "No word given (input was blank)".to_string())?;

    let game = Game::with_root(root_word, dictionary, language);
    let root = game.root_word().to_string();
    let text = candidate.text();

    let checks = vec![
        RuleCheck {
            name: "original",
            passed: is_original(game.used_words(), text),
        },
        RuleCheck {
            name: "possible",
            passed: is_possible(&root, text),
        },
        RuleCheck {
            name: "real word",
            passed: is_real(dictionary, text, language),
        },
        RuleCheck {
            name: "long enough",
            passed: is_long_enough(text),
        },
        RuleCheck {
            name: "differs from root",
            passed: is_different_from_root(&root, text),
        },
    ];

    let verdict = game
        .validate(&candidate)
        .map(|()| candidate.letter_count());

    Ok(CheckResult {
        root_word: root,
        word: text.to_string(),
        checks,
        verdict,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListDictionary;

    fn test_dictionary() -> WordListDictionary {
        WordListDictionary::from_words(["silk", "is", "silkworm"], "en")
    }

    #[test]
    fn check_accepted_word_reports_points() {
        let dictionary = test_dictionary();
        let result = check_word("silkworm", "silk", &dictionary, "en").unwrap();

        assert_eq!(result.verdict, Ok(4));
        assert!(result.checks.iter().all(|check| check.passed));
    }

    #[test]
    fn check_reports_failing_rule() {
        let dictionary = test_dictionary();
        let result = check_word("silkworm", "glass", &dictionary, "en").unwrap();

        assert_eq!(result.verdict, Err(RejectionReason::NotPossibleFromRoot));
        let possible = result
            .checks
            .iter()
            .find(|check| check.name == "possible")
            .unwrap();
        assert!(!possible.passed);
    }

    #[test]
    fn check_verdict_follows_rule_order() {
        // "is" fails only the length rule; everything before it passes
        let dictionary = test_dictionary();
        let result = check_word("silkworm", "is", &dictionary, "en").unwrap();

        assert_eq!(result.verdict, Err(RejectionReason::TooShort));
    }

    #[test]
    fn check_normalizes_both_inputs() {
        let dictionary = test_dictionary();
        let result = check_word(" SILKWORM ", " Silk ", &dictionary, "en").unwrap();

        assert_eq!(result.root_word, "silkworm");
        assert_eq!(result.word, "silk");
        assert_eq!(result.verdict, Ok(4));
    }

    #[test]
    fn check_blank_word_is_an_error() {
        let dictionary = test_dictionary();
        assert!(check_word("silkworm", "   ", &dictionary, "en").is_err());
    }
}
