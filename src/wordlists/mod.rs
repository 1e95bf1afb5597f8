//! Word lists for the scramble game
//!
//! Provides the embedded root pool and dictionary, file loading, and the
//! word source capability rounds draw their root from.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, ROOT_WORDS, ROOT_WORDS_COUNT};
pub use source::{EmbeddedWordSource, FileWordSource, PoolSource, WordSource};
