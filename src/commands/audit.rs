//! Root pool audit command
//!
//! Sweeps the root word pool and reports how playable each root is: whether
//! the dictionary recognizes it, how many sub-words it yields, and what
//! score a perfect player could reach.

use crate::core::LetterPool;
use crate::dictionary::Dictionary;
use crate::engine::MIN_WORD_LENGTH;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Playability report for a single root word
#[derive(Debug, Clone)]
pub struct RootReport {
    pub root: String,
    /// Whether the dictionary recognizes the root itself
    pub is_real: bool,
    /// Dictionary words spellable from the root (length ≥ 3, not the root)
    pub sub_word_count: usize,
    /// Score from playing every sub-word once
    pub attainable_score: usize,
}

/// Aggregate statistics from auditing the pool
#[derive(Debug)]
pub struct AuditStatistics {
    pub total_roots: usize,
    pub real_roots: usize,
    pub average_sub_words: f64,
    pub best_root: Option<RootReport>,
    pub worst_roots: Vec<RootReport>,
    pub duration: Duration,
    pub roots_per_second: f64,
}

/// Audit a root pool against a dictionary word list
///
/// `dictionary_words` is the full list backing `dictionary`; the sweep
/// enumerates it per root, which the membership-only [`Dictionary`] trait
/// cannot do. Roots are processed in parallel.
pub fn run_audit<D: Dictionary + Sync>(
    roots: &[String],
    dictionary_words: &[String],
    dictionary: &D,
    language: &str,
    limit: Option<usize>,
) -> AuditStatistics {
    let audit_roots: Vec<&String> = roots
        .iter()
        .take(limit.unwrap_or(roots.len()))
        .collect();

    println!("🔍 Auditing {} root words...", audit_roots.len());

    // Progress bar
    let pb = ProgressBar::new(audit_roots.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let mut reports: Vec<RootReport> = audit_roots
        .par_iter()
        .map(|root| {
            let report = audit_root(root.as_str(), dictionary_words, dictionary, language);
            pb.inc(1);
            report
        })
        .collect();

    pb.finish_with_message("done");

    let duration = start.elapsed();
    let total_roots = reports.len();
    let real_roots = reports.iter().filter(|report| report.is_real).count();
    let total_sub_words: usize = reports.iter().map(|report| report.sub_word_count).sum();

    reports.sort_by(|a, b| b.sub_word_count.cmp(&a.sub_word_count));
    let best_root = reports.first().cloned();
    let worst_roots: Vec<RootReport> = reports.iter().rev().take(5).cloned().collect();

    AuditStatistics {
        total_roots,
        real_roots,
        average_sub_words: if total_roots == 0 {
            0.0
        } else {
            total_sub_words as f64 / total_roots as f64
        },
        best_root,
        worst_roots,
        duration,
        roots_per_second: total_roots as f64 / duration.as_secs_f64(),
    }
}

/// Audit a single root word
fn audit_root<D: Dictionary>(
    root: &str,
    dictionary_words: &[String],
    dictionary: &D,
    language: &str,
) -> RootReport {
    let pool = LetterPool::new(root);

    let sub_words: Vec<&String> = dictionary_words
        .iter()
        .filter(|word| {
            word.as_str() != root
                && word.chars().count() >= MIN_WORD_LENGTH
                && pool.can_spell(word)
        })
        .collect();

    RootReport {
        root: root.to_string(),
        is_real: dictionary.is_real_word(root, language),
        sub_word_count: sub_words.len(),
        attainable_score: sub_words.iter().map(|word| word.chars().count()).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListDictionary;

    fn fixture() -> (Vec<String>, Vec<String>, WordListDictionary) {
        let roots = vec!["silkworm".to_string(), "keyboard".to_string()];
        let words: Vec<String> = ["silk", "worm", "work", "milk", "key", "board", "silkworm"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let dictionary = WordListDictionary::from_words(words.clone(), "en");
        (roots, words, dictionary)
    }

    #[test]
    fn audit_counts_sub_words() {
        let (_, words, dictionary) = fixture();
        let report = audit_root("silkworm", &words, &dictionary, "en");

        // silk, worm, work, milk; not "key"/"board", not the root itself
        assert_eq!(report.sub_word_count, 4);
        assert_eq!(report.attainable_score, 16);
        assert!(report.is_real);
    }

    #[test]
    fn audit_excludes_short_words() {
        let words = vec!["ilk".to_string(), "is".to_string()];
        let dictionary = WordListDictionary::from_words(words.clone(), "en");
        let report = audit_root("silkworm", &words, &dictionary, "en");

        // "is" is spellable but below the minimum length
        assert_eq!(report.sub_word_count, 1);
    }

    #[test]
    fn audit_flags_fake_roots() {
        let (_, words, dictionary) = fixture();
        let report = audit_root("zzzzzzzz", &words, &dictionary, "en");

        assert!(!report.is_real);
        assert_eq!(report.sub_word_count, 0);
    }

    #[test]
    fn audit_statistics_aggregate() {
        let (roots, words, dictionary) = fixture();
        let stats = run_audit(&roots, &words, &dictionary, "en", None);

        assert_eq!(stats.total_roots, 2);
        assert_eq!(stats.real_roots, 1); // "keyboard" is not in the fixture list
        assert_eq!(stats.best_root.as_ref().unwrap().root, "silkworm");
        assert!(stats.average_sub_words > 0.0);
        assert!(stats.worst_roots.len() <= 5);
    }

    #[test]
    fn audit_respects_limit() {
        let (roots, words, dictionary) = fixture();
        let stats = run_audit(&roots, &words, &dictionary, "en", Some(1));

        assert_eq!(stats.total_roots, 1);
    }

    #[test]
    fn audit_empty_pool() {
        let (_, words, dictionary) = fixture();
        let stats = run_audit(&[], &words, &dictionary, "en", None);

        assert_eq!(stats.total_roots, 0);
        assert!(stats.best_root.is_none());
    }
}
