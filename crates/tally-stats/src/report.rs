//! Tab-separated report rendering for the statistics pipeline.

use tally_report::format::{format_elapsed, format_mode, format_number};

use crate::descriptive::StatisticsResult;

/// Renders the statistics report block, without a trailing newline.
///
/// One `NAME\tvalue` line per statistic in fixed order, then the elapsed
/// time. Absent statistics render as `#N/A`.
///
/// # Examples
///
/// ```
/// use tally_stats::{StatisticsResult, render_report};
///
/// let stats = StatisticsResult::from_values(&[1.0, 2.0, 3.0]);
/// let report = render_report(&stats, 0.001);
/// assert!(report.starts_with("COUNT\t3\nMEAN\t2\n"));
/// assert!(report.ends_with("ELAPSED_SECONDS\t0.001000"));
/// ```
#[must_use]
#[expect(clippy::cast_precision_loss)]
pub fn render_report(stats: &StatisticsResult, elapsed_seconds: f64) -> String {
    let lines = [
        format!("COUNT\t{}", format_number(Some(stats.count as f64))),
        format!("MEAN\t{}", format_number(stats.mean)),
        format!("MEDIAN\t{}", format_number(stats.median)),
        format!("MODE\t{}", format_mode(stats.mode.as_deref())),
        format!("SD\t{}", format_number(stats.std_dev)),
        format!("VARIANCE\t{}", format_number(stats.variance)),
        format!("ELAPSED_SECONDS\t{}", format_elapsed(elapsed_seconds)),
    ];
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_lines_in_fixed_order() {
        let stats = StatisticsResult::from_values(&[1.0, 1.0, 2.0, 4.0]);
        let report = render_report(&stats, 0.0);
        let lines = report.lines().collect::<Vec<_>>();
        assert_eq!(
            lines,
            [
                "COUNT\t4",
                "MEAN\t2",
                "MEDIAN\t1.5",
                "MODE\t1",
                "SD\t1.2247448714",
                "VARIANCE\t1.5",
                "ELAPSED_SECONDS\t0.000000",
            ],
        );
    }

    #[test]
    fn test_empty_sample_renders_sentinels_not_zeros() {
        let stats = StatisticsResult::from_values(&[]);
        let report = render_report(&stats, 0.0);
        let lines = report.lines().collect::<Vec<_>>();
        assert_eq!(
            lines,
            [
                "COUNT\t0",
                "MEAN\t#N/A",
                "MEDIAN\t#N/A",
                "MODE\t#N/A",
                "SD\t#N/A",
                "VARIANCE\t#N/A",
                "ELAPSED_SECONDS\t0.000000",
            ],
        );
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let values = [2.0, 7.5, 2.0, 9.0];
        let first = render_report(&StatisticsResult::from_values(&values), 0.25);
        let second = render_report(&StatisticsResult::from_values(&values), 0.25);
        assert_eq!(first, second);
    }
}
