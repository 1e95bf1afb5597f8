//! Word Scramble
//!
//! A word-building game: each round hands the player a root word, and every
//! real word spelled from its letters scores one point per letter.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::dictionary::WordListDictionary;
//! use word_scramble::engine::Game;
//!
//! let dictionary = WordListDictionary::from_words(["silk", "worm"], "en");
//! let mut game = Game::with_root("silkworm", &dictionary, "en");
//!
//! let accepted = game.submit("silk").unwrap().unwrap();
//! assert_eq!(accepted.points, 4);
//! assert_eq!(game.score(), 4);
//! ```

// Core domain types
pub mod core;

// Validation and scoring engine
pub mod engine;

// Dictionary capability
pub mod dictionary;

// Word lists and root sources
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
