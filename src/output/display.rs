//! Display functions for command results

use super::formatters::{create_progress_bar, letter_count_badge};
use crate::commands::{AuditStatistics, CheckResult};
use colored::Colorize;

/// Print the result of checking a word
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Checking {} against root {}",
        result.word.to_uppercase().bright_white().bold(),
        result.root_word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());
    println!();

    for check in &result.checks {
        let mark = if check.passed {
            "✓".green()
        } else {
            "✗".red()
        };
        println!("  {mark} {}", check.name);
    }

    println!();
    match &result.verdict {
        Ok(points) => {
            println!(
                "{}",
                format!(
                    "✅ Accepted: {} {} scores {points} points",
                    letter_count_badge(*points),
                    result.word
                )
                .green()
                .bold()
            );
        }
        Err(reason) => {
            println!("{}", format!("❌ {}", reason.title()).red().bold());
            println!("   {}", reason.message(&result.root_word));
        }
    }
}

/// Print aggregate statistics from a pool audit
pub fn print_audit_statistics(stats: &AuditStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ROOT POOL AUDIT".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {} roots audited", stats.total_roots);
    println!(
        "   Dictionary-real: {} / {}",
        stats.real_roots.to_string().bright_yellow(),
        stats.total_roots
    );
    println!("   Average sub-words: {:.1}", stats.average_sub_words);
    println!(
        "   Took {:.2}s ({:.0} roots/s)",
        stats.duration.as_secs_f64(),
        stats.roots_per_second
    );

    if let Some(best) = &stats.best_root {
        println!(
            "\n🏆 Richest root: {} ({} sub-words, {} attainable points)",
            best.root.to_uppercase().bright_green().bold(),
            best.sub_word_count,
            best.attainable_score
        );
    }

    if !stats.worst_roots.is_empty() {
        let scale = stats
            .best_root
            .as_ref()
            .map_or(1, |best| best.sub_word_count.max(1));

        println!("\n⚠️  Poorest roots:");
        for report in &stats.worst_roots {
            let bar = create_progress_bar(report.sub_word_count as f64, scale as f64, 20);
            let marker = if report.is_real { " " } else { "✗" };
            println!(
                "   {marker} {:<10} [{}] {} sub-words",
                report.root,
                bar.red(),
                report.sub_word_count
            );
        }
        if stats.worst_roots.iter().any(|report| !report.is_real) {
            println!("   ✗ = root missing from the dictionary");
        }
    }

    println!();
}
