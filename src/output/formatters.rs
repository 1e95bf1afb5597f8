//! Formatting utilities for terminal output

/// Format a word's letter count as a circled badge
///
/// The terminal cousin of the app's per-word count marker. Counts above
/// twenty fall back to a plain parenthesized number.
#[must_use]
pub fn letter_count_badge(count: usize) -> String {
    const CIRCLED: [char; 20] = [
        '①', '②', '③', '④', '⑤', '⑥', '⑦', '⑧', '⑨', '⑩', '⑪', '⑫', '⑬', '⑭', '⑮', '⑯', '⑰',
        '⑱', '⑲', '⑳',
    ];

    match count {
        1..=20 => CIRCLED[count - 1].to_string(),
        _ => format!("({count})"),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_for_small_counts() {
        assert_eq!(letter_count_badge(1), "①");
        assert_eq!(letter_count_badge(4), "④");
        assert_eq!(letter_count_badge(8), "⑧");
        assert_eq!(letter_count_badge(20), "⑳");
    }

    #[test]
    fn badge_falls_back_past_twenty() {
        assert_eq!(letter_count_badge(21), "(21)");
        assert_eq!(letter_count_badge(0), "(0)");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }
}
