use owo_colors::OwoColorize;

use trailhound_engine::{ConditionGroup, Distribution};

use super::bar;

const BAR_WIDTH: usize = 20;

/// Format one measured quantity of the per-dog view: the summary line plus
/// the success-vs-failure histogram. States "no data recorded" explicitly
/// when the distribution is unavailable.
pub fn format_distribution(heading: &str, dist: &Distribution, color: bool) -> Vec<String> {
    let Some(summary) = &dist.summary else {
        return vec![format!("{}: no data recorded", heading)];
    };

    let mut lines = Vec::new();
    lines.push(format!(
        "{}  mean {:.1}  median {:.1}  mode {:.1}",
        if color {
            heading.bold().to_string()
        } else {
            heading.to_string()
        },
        summary.mean,
        summary.median,
        summary.mode,
    ));

    let Some(histogram) = &dist.histogram else {
        return lines;
    };

    let label_width = histogram
        .success
        .iter()
        .map(|b| b.range_label.chars().count())
        .max()
        .unwrap_or(0);
    let max_count = histogram
        .success
        .iter()
        .chain(histogram.failure.iter())
        .map(|b| b.count)
        .max()
        .unwrap_or(0);

    for (hit, miss) in histogram.success.iter().zip(histogram.failure.iter()) {
        let hit_bar = bar(hit.count, max_count, BAR_WIDTH);
        let miss_bar = bar(miss.count, max_count, BAR_WIDTH);
        let (hit_bar, miss_bar) = if color {
            (hit_bar.green().to_string(), miss_bar.red().to_string())
        } else {
            (hit_bar, miss_bar)
        };
        lines.push(format!(
            "  {:>width$}  ✓ {:>3} {}",
            hit.range_label,
            hit.count,
            hit_bar,
            width = label_width,
        ));
        lines.push(format!(
            "  {:>width$}  ✗ {:>3} {}",
            "",
            miss.count,
            miss_bar,
            width = label_width,
        ));
    }

    lines
}

/// Format the success-rate-vs-value curve for one condition, one row per
/// exact observed value.
pub fn format_condition_series(
    heading: &str,
    groups: &[ConditionGroup],
    color: bool,
) -> Vec<String> {
    if groups.is_empty() {
        return vec![format!("{}: no data recorded", heading)];
    }

    let mut lines = Vec::new();
    lines.push(if color {
        heading.bold().to_string()
    } else {
        heading.to_string()
    });

    for group in groups {
        let rate_bar = bar(group.success_rate_pct as usize, 100, BAR_WIDTH);
        let rate_bar = if color {
            rate_bar.cyan().to_string()
        } else {
            rate_bar
        };
        lines.push(format!(
            "  {:>8.1}  {:>3}% ({} of {})  {}",
            group.value, group.success_rate_pct, group.success, group.total, rate_bar,
        ));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use trailhound_engine::DogReport;
    use trailhound_testing::{dog_id, session};

    #[test]
    fn test_unavailable_distribution_states_no_data() {
        let sessions = vec![session(dog_id(1), "success").duration("not-long").build()];
        let report = DogReport::build(&sessions).unwrap();

        let lines = format_distribution("Duration (s)", &report.duration, false);
        assert_eq!(lines, vec!["Duration (s): no data recorded".to_string()]);
    }

    #[test]
    fn test_distribution_has_summary_line_and_cohort_rows() {
        let sessions = vec![
            session(dog_id(1), "success").duration(30).build(),
            session(dog_id(1), "fail").duration(90).build(),
        ];
        let report = DogReport::build(&sessions).unwrap();

        let lines = format_distribution("Duration (s)", &report.duration, false);
        assert!(lines[0].contains("mean 60.0"));
        assert!(lines[0].contains("median 60.0"));
        assert!(lines[0].contains("mode 30.0"));
        // Six bins, one success and one failure row each.
        assert_eq!(lines.len(), 1 + 12);
        assert!(lines[1].contains("30.0–40.0"));
        assert!(lines[1].contains("✓"));
        assert!(lines[2].contains("✗"));
    }

    #[test]
    fn test_condition_series_rows_show_rate_and_counts() {
        let groups = vec![ConditionGroup {
            value: 18.0,
            total: 2,
            success: 1,
            fail: 1,
            success_rate_pct: 50,
        }];

        let lines = format_condition_series("Success rate by temp", &groups, false);
        assert_eq!(lines[0], "Success rate by temp");
        assert!(lines[1].contains("18.0"));
        assert!(lines[1].contains("50% (1 of 2)"));
    }

    #[test]
    fn test_empty_condition_series_states_no_data() {
        let lines = format_condition_series("Success rate by wind", &[], false);
        assert_eq!(
            lines,
            vec!["Success rate by wind: no data recorded".to_string()]
        );
    }
}
