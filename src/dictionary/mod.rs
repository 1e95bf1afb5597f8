//! Dictionary capability
//!
//! The engine only ever asks one question of a dictionary: is this word a
//! correctly spelled word in a given language? Hosts plug in whatever answers
//! that — the bundled word list, a file on disk, or something API-backed.

mod wordlist;

pub use wordlist::WordListDictionary;

/// A word-reality oracle
///
/// Implementations must be deterministic for a fixed dictionary version:
/// the same word and language always produce the same answer.
pub trait Dictionary {
    /// Returns `true` iff `word` is a correctly spelled word in `language`
    ///
    /// `language` is a BCP-47 tag such as `"en"` or `"en-US"`. A dictionary
    /// for a different language returns `false` rather than erroring.
    fn is_real_word(&self, word: &str, language: &str) -> bool;
}
