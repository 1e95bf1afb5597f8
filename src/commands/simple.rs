//! Simple interactive CLI mode
//!
//! Text-based round loop without TUI

use crate::dictionary::Dictionary;
use crate::engine::Game;
use crate::output::formatters::letter_count_badge;
use crate::wordlists::WordSource;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<W: WordSource, D: Dictionary>(
    source: &W,
    dictionary: &D,
    language: &str,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Word Scramble - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Make words from the letters of the root word.");
    println!("Every accepted word scores one point per letter.\n");
    println!("Commands: 'new' for a new root, 'words' to list your answers,");
    println!("          'score' for the totals, 'quit' to exit\n");

    let mut game = Game::start(source, dictionary, language);
    let mut best_score = 0;

    loop {
        println!("────────────────────────────────────────────────────────────");
        println!(
            "Root word: {}   (score: {})",
            game.root_word().to_uppercase().bright_yellow().bold(),
            game.score().to_string().bright_cyan()
        );
        println!("────────────────────────────────────────────────────────────");

        let input = get_user_input("Your word")?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                best_score = best_score.max(game.score());
                println!(
                    "\nFinal score: {}   Best round: {}",
                    game.score().to_string().bright_cyan().bold(),
                    best_score.to_string().bright_green().bold()
                );
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                best_score = best_score.max(game.score());
                println!(
                    "\nRound over: {} words, {} points (best: {best_score})",
                    game.used_words().len(),
                    game.score()
                );
                game.new_round(source);
                println!("{}", "\n🔄 New round started!\n".bright_cyan());
            }
            "words" | "list" => {
                if game.used_words().is_empty() {
                    println!("\nNo words yet.\n");
                } else {
                    println!();
                    for word in game.used_words() {
                        println!(
                            "  {} {}  {} letters",
                            letter_count_badge(word.chars().count()),
                            word,
                            word.chars().count()
                        );
                    }
                    println!();
                }
            }
            "score" => {
                println!(
                    "\nScore: {}   Best: {}\n",
                    game.score(),
                    best_score.max(game.score())
                );
            }
            _ => match game.submit(&input) {
                // Blank input, nothing to do
                None => {}
                Some(Ok(accepted)) => {
                    println!(
                        "\n{} {} {}  {}\n",
                        "✓".green().bold(),
                        letter_count_badge(accepted.points),
                        accepted.word.bright_white().bold(),
                        format!("+{} points", accepted.points).green()
                    );
                }
                Some(Err(reason)) => {
                    println!(
                        "\n{} {}",
                        "✗".red().bold(),
                        reason.title().bright_red().bold()
                    );
                    println!("  {}\n", reason.message(game.root_word()));
                }
            },
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
