//! Word source capability
//!
//! Supplies the pool of root words a round can start from. An empty pool
//! signals unavailability; the engine handles that with its documented
//! fallback rather than an error.

use super::{ROOT_WORDS, loader};
use std::path::PathBuf;

/// A supplier of candidate root words
pub trait WordSource {
    /// Returns the pool of root words
    ///
    /// An empty vector signals the source is unavailable.
    fn load_word_pool(&self) -> Vec<String>;
}

/// The root word pool compiled into the binary
pub struct EmbeddedWordSource;

impl WordSource for EmbeddedWordSource {
    fn load_word_pool(&self) -> Vec<String> {
        loader::words_from_slice(ROOT_WORDS)
    }
}

/// A root word pool read from a file, one word per line
///
/// The file is read on every call so an edited pool takes effect on the
/// next round. Read failures degrade to an empty pool with a logged
/// warning; they never abort the game.
pub struct FileWordSource {
    path: PathBuf,
}

impl FileWordSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordSource for FileWordSource {
    fn load_word_pool(&self) -> Vec<String> {
        match loader::load_from_file(&self.path) {
            Ok(words) => words,
            Err(e) => {
                log::warn!("could not read word pool {}: {e}", self.path.display());
                Vec::new()
            }
        }
    }
}

/// Runtime-selected word source
///
/// Allows the CLI to pick a source from a flag while call sites stay
/// statically dispatched.
pub enum PoolSource {
    /// The embedded pool
    Embedded(EmbeddedWordSource),
    /// A pool file on disk
    File(FileWordSource),
}

impl PoolSource {
    /// Create a source from a CLI argument
    ///
    /// `"embedded"` selects the compiled-in pool; anything else is treated
    /// as a file path.
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "embedded" => Self::Embedded(EmbeddedWordSource),
            path => Self::File(FileWordSource::new(path)),
        }
    }
}

impl WordSource for PoolSource {
    fn load_word_pool(&self) -> Vec<String> {
        match self {
            Self::Embedded(source) => source.load_word_pool(),
            Self::File(source) => source.load_word_pool(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_source_yields_full_pool() {
        let pool = EmbeddedWordSource.load_word_pool();
        assert_eq!(pool.len(), ROOT_WORDS.len());
        assert!(pool.iter().any(|word| word == "silkworm"));
    }

    #[test]
    fn missing_file_degrades_to_empty_pool() {
        let source = FileWordSource::new("/nonexistent/start.txt");
        assert!(source.load_word_pool().is_empty());
    }

    #[test]
    fn pool_source_from_arg_selects_embedded() {
        let source = PoolSource::from_arg("embedded");
        assert!(matches!(source, PoolSource::Embedded(_)));
        assert!(!source.load_word_pool().is_empty());
    }

    #[test]
    fn pool_source_from_arg_treats_other_values_as_paths() {
        let source = PoolSource::from_arg("/nonexistent/start.txt");
        assert!(matches!(source, PoolSource::File(_)));
        assert!(source.load_word_pool().is_empty());
    }
}
