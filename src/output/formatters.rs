//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for one row of the word length distribution
#[must_use]
pub fn length_bar(count: usize, max_count: usize, width: usize) -> String {
    create_progress_bar(count as f64, max_count as f64, width)
}

/// Letters of a puzzle as shown in the header, center letter first
#[must_use]
pub fn puzzle_letters(center: char, outer: &str) -> String {
    let outer: Vec<String> = outer.chars().map(|c| c.to_uppercase().to_string()).collect();
    format!("({}) {}", center.to_uppercase(), outer.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(0.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn length_bar_scales_to_largest_bucket() {
        assert_eq!(length_bar(4, 8, 8), "████░░░░");
        assert_eq!(length_bar(8, 8, 8), "████████");
    }

    #[test]
    fn puzzle_letters_uppercases() {
        assert_eq!(puzzle_letters('i', "bcelnv"), "(I) B C E L N V");
    }
}
