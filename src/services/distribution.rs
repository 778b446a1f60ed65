use serde::Serialize;

/// Number of unit-width Kp bins: [0,1) through [8,9], left-closed.
pub const KP_BIN_COUNT: usize = 9;

/// Empirical Kp distribution over the nine canonical unit bins.
///
/// Bin `i` counts analog Kp values in `[i, i+1)`; the top value 9.0 lands
/// in the final bin instead of falling off the edge. Counts always sum to
/// the number of analogs aggregated.
///
/// # Examples
///
/// ```
/// use aafs_rust::services::distribution::KpDistribution;
///
/// let dist = KpDistribution::from_analogs(&[0.33, 0.33, 1.0, 4.0, 4.0, 7.0]);
/// assert_eq!(dist.counts()[0], 2);
/// assert_eq!(dist.counts()[1], 1);
/// assert_eq!(dist.counts()[4], 2);
/// assert_eq!(dist.counts()[7], 1);
/// assert_eq!(dist.total(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KpDistribution {
    counts: [usize; KP_BIN_COUNT],
    total: usize,
}

/// One display bucket of the distribution, grouped on the NOAA G scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupedCount {
    pub label: &'static str,
    pub count: usize,
}

/// Summary statistics over the analog Kp values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalogSummary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub max: f64,
}

impl KpDistribution {
    /// Bin the analog Kp values.
    pub fn from_analogs(kp_values: &[f64]) -> Self {
        let mut counts = [0usize; KP_BIN_COUNT];
        for &kp in kp_values {
            counts[bin_index(kp)] += 1;
        }
        Self {
            counts,
            total: kp_values.len(),
        }
    }

    /// Counts per unit bin, index = integer part of Kp.
    pub fn counts(&self) -> &[usize; KP_BIN_COUNT] {
        &self.counts
    }

    /// Number of analogs aggregated.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Per-bin probabilities in percent. With the standard analog count of
    /// 100 these equal the raw counts.
    pub fn percentages(&self) -> [f64; KP_BIN_COUNT] {
        let mut percentages = [0.0; KP_BIN_COUNT];
        if self.total == 0 {
            return percentages;
        }
        for (pct, &count) in percentages.iter_mut().zip(&self.counts) {
            *pct = count as f64 * 100.0 / self.total as f64;
        }
        percentages
    }

    /// Counts grouped into the six display buckets of the storm scale:
    /// quiet conditions collapse to one bucket, G4 and G5 share the top
    /// one.
    pub fn grouped(&self) -> Vec<GroupedCount> {
        vec![
            GroupedCount {
                label: "Kp 0-3",
                count: self.counts[..=3].iter().sum(),
            },
            GroupedCount {
                label: "Kp 4",
                count: self.counts[4],
            },
            GroupedCount {
                label: "Kp 5 (G1)",
                count: self.counts[5],
            },
            GroupedCount {
                label: "Kp 6 (G2)",
                count: self.counts[6],
            },
            GroupedCount {
                label: "Kp 7 (G3)",
                count: self.counts[7],
            },
            GroupedCount {
                label: "Kp 8-9 (G4-5)",
                count: self.counts[8],
            },
        ]
    }
}

fn bin_index(kp: f64) -> usize {
    // Kp lives in [0, 9]; exactly 9.0 belongs to the top bin
    let idx = kp.floor() as isize;
    idx.clamp(0, KP_BIN_COUNT as isize - 1) as usize
}

/// Compute summary statistics for the analog set.
pub fn summarize_analogs(values: &[f64]) -> AnalogSummary {
    if values.is_empty() {
        return AnalogSummary {
            count: 0,
            mean: 0.0,
            median: 0.0,
            max: 0.0,
        };
    }

    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let median = if count % 2 == 0 {
        (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
    } else {
        sorted[count / 2]
    };

    let max = sorted.last().copied().unwrap_or(0.0);

    AnalogSummary {
        count,
        mean,
        median,
        max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binning_example() {
        let dist = KpDistribution::from_analogs(&[0.33, 0.33, 1.0, 4.0, 4.0, 7.0]);

        assert_eq!(dist.counts()[0], 2);
        assert_eq!(dist.counts()[1], 1);
        assert_eq!(dist.counts()[4], 2);
        assert_eq!(dist.counts()[7], 1);
        assert_eq!(dist.counts()[2], 0);
        assert_eq!(dist.total(), 6);
    }

    #[test]
    fn test_bin_edges() {
        // Integer Kp falls into the bin it opens; 9.0 stays in the top bin
        assert_eq!(KpDistribution::from_analogs(&[4.0]).counts()[4], 1);
        assert_eq!(KpDistribution::from_analogs(&[9.0]).counts()[8], 1);
        assert_eq!(KpDistribution::from_analogs(&[8.67]).counts()[8], 1);
        assert_eq!(KpDistribution::from_analogs(&[0.0]).counts()[0], 1);
    }

    #[test]
    fn test_counts_sum_to_total() {
        let values = vec![0.0, 1.33, 2.67, 3.0, 4.33, 5.67, 6.0, 7.33, 8.0, 9.0];
        let dist = KpDistribution::from_analogs(&values);

        assert_eq!(dist.counts().iter().sum::<usize>(), values.len());
        assert_eq!(dist.total(), values.len());
    }

    #[test]
    fn test_percentages() {
        let dist = KpDistribution::from_analogs(&[1.0, 1.0, 5.0, 7.0]);
        let pct = dist.percentages();

        assert_eq!(pct[1], 50.0);
        assert_eq!(pct[5], 25.0);
        assert_eq!(pct[7], 25.0);
        assert_eq!(pct.iter().sum::<f64>(), 100.0);
    }

    #[test]
    fn test_percentages_of_empty_distribution() {
        let dist = KpDistribution::from_analogs(&[]);
        assert_eq!(dist.percentages(), [0.0; KP_BIN_COUNT]);
    }

    #[test]
    fn test_grouped_buckets() {
        let values = vec![0.33, 1.0, 2.67, 3.33, 4.0, 5.0, 5.33, 6.0, 7.0, 8.67];
        let dist = KpDistribution::from_analogs(&values);
        let grouped = dist.grouped();

        let expected = vec![
            ("Kp 0-3", 4),
            ("Kp 4", 1),
            ("Kp 5 (G1)", 2),
            ("Kp 6 (G2)", 1),
            ("Kp 7 (G3)", 1),
            ("Kp 8-9 (G4-5)", 1),
        ];
        let actual: Vec<_> = grouped.iter().map(|g| (g.label, g.count)).collect();
        assert_eq!(actual, expected);

        let grouped_total: usize = grouped.iter().map(|g| g.count).sum();
        assert_eq!(grouped_total, dist.total());
    }

    #[test]
    fn test_summarize_analogs() {
        let summary = summarize_analogs(&[1.0, 2.0, 3.0, 4.0, 5.0]);

        assert_eq!(summary.count, 5);
        assert_eq!(summary.mean, 3.0);
        assert_eq!(summary.median, 3.0);
        assert_eq!(summary.max, 5.0);
    }

    #[test]
    fn test_summarize_even_count_median() {
        let summary = summarize_analogs(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(summary.median, 2.5);
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize_analogs(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.mean, 0.0);
    }
}
