mod charts;

pub use charts::{format_condition_series, format_distribution};

use is_terminal::IsTerminal;

/// Color only when stdout is an interactive terminal.
pub fn color_enabled() -> bool {
    std::io::stdout().is_terminal()
}

/// Proportional block bar. A non-zero count always gets at least one cell
/// so rare buckets stay visible.
pub fn bar(count: usize, max: usize, width: usize) -> String {
    if count == 0 || max == 0 {
        return String::new();
    }
    let cells = (count * width).div_ceil(max).clamp(1, width);
    "█".repeat(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_scales_to_width() {
        assert_eq!(bar(10, 10, 20).chars().count(), 20);
        assert_eq!(bar(5, 10, 20).chars().count(), 10);
        assert_eq!(bar(0, 10, 20), "");
    }

    #[test]
    fn test_nonzero_count_is_visible() {
        assert_eq!(bar(1, 1000, 20).chars().count(), 1);
    }
}
