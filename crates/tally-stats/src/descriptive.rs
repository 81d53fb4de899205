//! Descriptive statistics computed with elementary algorithms.

use std::collections::HashMap;

/// Descriptive statistics for a numeric sample.
///
/// Every field except `count` is `None` when the sample is empty; the
/// formatter renders those as the `#N/A` sentinel, never as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsResult {
    /// Number of valid values in the sample.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: Option<f64>,
    /// Middle value of the sorted sample (average of the two middle values
    /// for an even count).
    pub median: Option<f64>,
    /// All values attaining the maximum frequency, sorted ascending, or
    /// `None` when the sample is empty or no value repeats.
    pub mode: Option<Vec<f64>>,
    /// Population variance (summed squared deviations divided by `count`).
    pub variance: Option<f64>,
    /// Standard deviation, the non-negative square root of the variance.
    pub std_dev: Option<f64>,
}

impl StatisticsResult {
    /// Computes statistics from unsorted values.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally_stats::StatisticsResult;
    ///
    /// let stats = StatisticsResult::from_values(&[1.0, 1.0, 2.0, 3.0]);
    /// assert_eq!(stats.count, 4);
    /// assert_eq!(stats.mean, Some(1.75));
    /// assert_eq!(stats.median, Some(1.5));
    /// assert_eq!(stats.mode, Some(vec![1.0]));
    /// ```
    #[must_use]
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return StatisticsResult {
                count: 0,
                mean: None,
                median: None,
                mode: None,
                variance: None,
                std_dev: None,
            };
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let mean = mean(values);
        let variance = variance(values, mean);
        StatisticsResult {
            count: values.len(),
            mean: Some(mean),
            median: Some(median(&sorted)),
            mode: mode(values),
            variance: Some(variance),
            std_dev: Some(variance.sqrt()),
        }
    }
}

#[expect(clippy::cast_precision_loss)]
fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn median(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Frequency map over exact numeric equality, then an explicit ascending
/// sort of the values at the maximum frequency. Returns `None` when no
/// value occurs more than once.
fn mode(values: &[f64]) -> Option<Vec<f64>> {
    let mut counts: HashMap<u64, (f64, usize)> = HashMap::new();
    for &value in values {
        // Fold -0.0 into 0.0 so both zeros count as the same value.
        let value = if value == 0.0 { 0.0 } else { value };
        counts.entry(value.to_bits()).or_insert((value, 0)).1 += 1;
    }

    let max_count = counts.values().map(|&(_, count)| count).max()?;
    if max_count <= 1 {
        return None;
    }

    let mut modes = counts
        .values()
        .filter(|&&(_, count)| count == max_count)
        .map(|&(value, _)| value)
        .collect::<Vec<_>>();
    modes.sort_by(f64::total_cmp);
    Some(modes)
}

#[expect(clippy::cast_precision_loss)]
fn variance(values: &[f64], mean: f64) -> f64 {
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64
}
