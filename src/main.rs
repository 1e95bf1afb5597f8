//! Word Scramble - CLI
//!
//! Word-building game with TUI and CLI modes: spell sub-words from a root
//! word, score a point per letter.

use anyhow::Result;
use clap::{Parser, Subcommand};
use word_scramble::{
    commands::{check_word, run_audit, run_simple},
    dictionary::WordListDictionary,
    output::{print_audit_statistics, print_check_result},
    wordlists::{
        DICTIONARY, PoolSource, WordSource,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Word scramble game: build sub-words from a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root pool: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    word_pool: String,

    /// Dictionary: 'embedded' (default) or path to a word list file
    #[arg(short = 'd', long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Language tag candidates are checked against
    #[arg(short = 'l', long, global = true, default_value = "en")]
    language: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive round loop without TUI)
    Simple,

    /// Check a single word against a root word
    Check {
        /// The root word supplying the letters
        root: String,

        /// The candidate word to check
        word: String,
    },

    /// Audit the root pool for playability
    Audit {
        /// Limit number of roots to audit
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Load the dictionary based on the -d flag
///
/// Returns the dictionary plus the word list backing it; the audit command
/// needs to enumerate the list, which the `Dictionary` trait cannot do.
fn load_dictionary(mode: &str, language: &str) -> Result<(WordListDictionary, Vec<String>)> {
    match mode {
        "embedded" => Ok((
            WordListDictionary::embedded(),
            words_from_slice(DICTIONARY),
        )),
        path => {
            let words = load_from_file(path)?;
            let dictionary = WordListDictionary::from_words(words.iter(), language);
            Ok((dictionary, words))
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let source = PoolSource::from_arg(&cli.word_pool);
    let (dictionary, dictionary_words) = load_dictionary(&cli.dictionary, &cli.language)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&source, &dictionary, &cli.language),
        Commands::Simple => {
            run_simple(&source, &dictionary, &cli.language).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Check { root, word } => {
            let result = check_word(&root, &word, &dictionary, &cli.language)
                .map_err(|e| anyhow::anyhow!(e))?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Audit { limit } => {
            let roots = source.load_word_pool();
            let stats = run_audit(&roots, &dictionary_words, &dictionary, &cli.language, limit);
            print_audit_statistics(&stats);
            Ok(())
        }
    }
}

fn run_play_command(
    source: &PoolSource,
    dictionary: &WordListDictionary,
    language: &str,
) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let app = App::new(source, dictionary, language);
    run_tui(app)
}
