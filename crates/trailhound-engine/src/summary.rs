use serde::Serialize;

/// Mean, median, and mode of one value set. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NumericSummary {
    pub mean: f64,
    pub median: f64,
    pub mode: f64,
}

/// Summarize a value set. `None` on empty input — callers must branch
/// instead of rendering zeros.
///
/// Mode ties break toward the first value (in ascending order) to reach the
/// maximum count, i.e. the smallest of the tied values.
pub fn numeric_summary(values: &[f64]) -> Option<NumericSummary> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mean = sorted.iter().sum::<f64>() / sorted.len() as f64;

    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    };

    // Runs of equal values are adjacent after sorting; strict > keeps the
    // first (smallest) value among tied run lengths.
    let mut mode = sorted[0];
    let mut best_run = 0;
    let mut i = 0;
    while i < sorted.len() {
        let mut j = i + 1;
        while j < sorted.len() && sorted[j] == sorted[i] {
            j += 1;
        }
        if j - i > best_run {
            best_run = j - i;
            mode = sorted[i];
        }
        i = j;
    }

    Some(NumericSummary { mean, median, mode })
}
