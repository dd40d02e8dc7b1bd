use serde::Serialize;

/// Bin count used by the per-dog detail charts.
pub const DEFAULT_BIN_COUNT: usize = 6;

/// One bucket of a distribution chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistogramBin {
    pub range_label: String,
    pub count: usize,
}

/// Success and failure cohorts binned over a shared scale so the two are
/// directly comparable in one chart. Bins align index-for-index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitHistogram {
    pub success: Vec<HistogramBin>,
    pub failure: Vec<HistogramBin>,
}

/// Bin both cohorts into `bin_count` equal-width buckets spanning the
/// combined min..max of the two value sets.
///
/// Intervals are half-open except the last, which is closed on the right so
/// the maximum lands in a bin. When all values are identical the result
/// collapses to a single bin labeled with that value. `None` when both
/// cohorts are empty — render "no data", not an all-zero chart.
pub fn split_histogram(
    success: &[f64],
    failure: &[f64],
    bin_count: usize,
) -> Option<SplitHistogram> {
    let mut combined = success.iter().chain(failure.iter()).copied();
    let first = combined.next()?;
    let (min, max) = combined.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if min == max {
        let label = format!("{:.1}", min);
        return Some(SplitHistogram {
            success: vec![HistogramBin {
                range_label: label.clone(),
                count: success.len(),
            }],
            failure: vec![HistogramBin {
                range_label: label,
                count: failure.len(),
            }],
        });
    }

    let bin_count = bin_count.max(1);
    let width = (max - min) / bin_count as f64;

    let labels: Vec<String> = (0..bin_count)
        .map(|i| {
            let start = min + i as f64 * width;
            // Quote the exact maximum for the last bin rather than the
            // accumulated float, so the label always covers it.
            let end = if i + 1 == bin_count {
                max
            } else {
                min + (i + 1) as f64 * width
            };
            format!("{:.1}–{:.1}", start, end)
        })
        .collect();

    let bin_for = |v: f64| -> usize {
        // Clamp absorbs the maximum itself and float edge error at it.
        (((v - min) / width).floor() as usize).min(bin_count - 1)
    };

    let count_cohort = |values: &[f64]| -> Vec<HistogramBin> {
        let mut counts = vec![0usize; bin_count];
        for &v in values {
            counts[bin_for(v)] += 1;
        }
        labels
            .iter()
            .zip(counts)
            .map(|(label, count)| HistogramBin {
                range_label: label.clone(),
                count,
            })
            .collect()
    };

    Some(SplitHistogram {
        success: count_cohort(success),
        failure: count_cohort(failure),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(bins: &[HistogramBin]) -> Vec<usize> {
        bins.iter().map(|b| b.count).collect()
    }

    #[test]
    fn test_both_cohorts_empty_is_no_distribution() {
        assert_eq!(split_histogram(&[], &[], 6), None);
    }

    #[test]
    fn test_identical_values_collapse_to_one_bin() {
        let h = split_histogram(&[1.0, 1.0, 1.0], &[1.0, 1.0, 1.0], 6).unwrap();
        assert_eq!(h.success.len(), 1);
        assert_eq!(h.failure.len(), 1);
        assert_eq!(h.success[0].range_label, "1.0");
        assert_eq!(h.success[0].count, 3);
        assert_eq!(h.failure[0].count, 3);
    }

    #[test]
    fn test_last_bin_is_right_closed() {
        let h = split_histogram(&[0.0, 10.0], &[5.0], 2).unwrap();
        assert_eq!(counts(&h.success), vec![1, 1]);
        // Boundary value 5 falls into the last bin, not the first.
        assert_eq!(counts(&h.failure), vec![0, 1]);
        assert_eq!(h.success[0].range_label, "0.0–5.0");
        assert_eq!(h.success[1].range_label, "5.0–10.0");
    }

    #[test]
    fn test_one_cohort_empty_still_gets_aligned_bins() {
        let h = split_histogram(&[1.0, 2.0, 3.0], &[], 3).unwrap();
        assert_eq!(h.success.len(), 3);
        assert_eq!(h.failure.len(), 3);
        assert_eq!(counts(&h.failure), vec![0, 0, 0]);
        assert_eq!(
            h.success[0].range_label, h.failure[0].range_label,
            "cohort bins must align"
        );
    }

    #[test]
    fn test_maximum_lands_in_final_bin() {
        let h = split_histogram(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[], 6).unwrap();
        assert_eq!(counts(&h.success), vec![1, 1, 1, 1, 1, 2]);
    }
}
