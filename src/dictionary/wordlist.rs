//! Word-list-backed dictionary

use super::Dictionary;
use crate::wordlists::{self, loader};
use rustc_hash::FxHashSet;
use std::io;
use std::path::Path;

/// A dictionary backed by a set of known words
///
/// Words are stored lowercased; lookups expect normalized input (the engine
/// lowercases candidates before checking). The set is tagged with the
/// language it covers and answers `false` for any other language.
pub struct WordListDictionary {
    words: FxHashSet<String>,
    language: String,
}

impl WordListDictionary {
    /// Build a dictionary from an iterator of words
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::{Dictionary, WordListDictionary};
    ///
    /// let dictionary = WordListDictionary::from_words(["silk", "worm"], "en");
    /// assert!(dictionary.is_real_word("silk", "en"));
    /// assert!(!dictionary.is_real_word("rowk", "en"));
    /// ```
    pub fn from_words<I, S>(words: I, language: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        Self {
            words,
            language: language.into(),
        }
    }

    /// The bundled English dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(wordlists::DICTIONARY.iter().copied(), "en")
    }

    /// Load a dictionary from a file with one word per line
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P, language: impl Into<String>) -> io::Result<Self> {
        let words = loader::load_from_file(path)?;
        Ok(Self::from_words(words, language))
    }

    /// Number of words in the list
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The language tag this list covers
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }
}

impl Dictionary for WordListDictionary {
    fn is_real_word(&self, word: &str, language: &str) -> bool {
        if !same_primary_language(&self.language, language) {
            return false;
        }
        self.words.contains(word)
    }
}

/// Compare the primary subtags of two BCP-47 tags, case-insensitively
///
/// "en" matches "en-US" and "en_GB"; "en" does not match "fr".
fn same_primary_language(a: &str, b: &str) -> bool {
    let primary = |tag: &str| -> String {
        tag.split(['-', '_'])
            .next()
            .unwrap_or(tag)
            .to_ascii_lowercase()
    };
    primary(a) == primary(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_listed_words() {
        let dictionary = WordListDictionary::from_words(["silk", "worm"], "en");
        assert!(dictionary.is_real_word("silk", "en"));
        assert!(dictionary.is_real_word("worm", "en"));
        assert!(!dictionary.is_real_word("rowk", "en"));
    }

    #[test]
    fn normalizes_list_entries() {
        let dictionary = WordListDictionary::from_words(["  SILK ", "Worm"], "en");
        assert!(dictionary.is_real_word("silk", "en"));
        assert!(dictionary.is_real_word("worm", "en"));
    }

    #[test]
    fn skips_blank_entries() {
        let dictionary = WordListDictionary::from_words(["", "  ", "silk"], "en");
        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn language_mismatch_is_false() {
        let dictionary = WordListDictionary::from_words(["silk"], "en");
        assert!(!dictionary.is_real_word("silk", "fr"));
    }

    #[test]
    fn regional_variants_match_primary_subtag() {
        let dictionary = WordListDictionary::from_words(["silk"], "en");
        assert!(dictionary.is_real_word("silk", "en-US"));
        assert!(dictionary.is_real_word("silk", "en_GB"));
        assert!(dictionary.is_real_word("silk", "EN"));
    }

    #[test]
    fn lookup_is_deterministic() {
        let dictionary = WordListDictionary::from_words(["silk"], "en");
        for _ in 0..3 {
            assert!(dictionary.is_real_word("silk", "en"));
            assert!(!dictionary.is_real_word("milk", "en"));
        }
    }

    #[test]
    fn embedded_dictionary_is_populated() {
        let dictionary = WordListDictionary::embedded();
        assert!(!dictionary.is_empty());
        assert_eq!(dictionary.language(), "en");
        assert!(dictionary.is_real_word("silk", "en"));
        assert!(dictionary.is_real_word("silkworm", "en"));
    }
}
