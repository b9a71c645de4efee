use super::model::{IrisDataset, Species, NUMERIC_COLUMNS};

// ---------------------------------------------------------------------------
// Per-column descriptive statistics
// ---------------------------------------------------------------------------

/// Descriptive statistics for one numeric column, matching what pandas
/// `describe()` reports: sample standard deviation (ddof = 1) and linearly
/// interpolated percentiles.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnStats {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl ColumnStats {
    /// Compute statistics from a column of values.
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return ColumnStats {
                count: 0,
                mean: f64::NAN,
                std_dev: f64::NAN,
                min: f64::NAN,
                q25: f64::NAN,
                median: f64::NAN,
                q75: f64::NAN,
                max: f64::NAN,
            };
        }

        let count = values.len();
        let mean = values.iter().sum::<f64>() / count as f64;

        // Sample variance; NaN for a single observation, like pandas.
        let std_dev = if count > 1 {
            let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
            (ss / (count - 1) as f64).sqrt()
        } else {
            f64::NAN
        };

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        ColumnStats {
            count,
            mean,
            std_dev,
            min: sorted[0],
            q25: percentile(&sorted, 0.25),
            median: percentile(&sorted, 0.50),
            q75: percentile(&sorted, 0.75),
            max: sorted[count - 1],
        }
    }

    /// Values in presentation order, paired with their row labels.
    fn rows(&self) -> [(&'static str, f64); 8] {
        [
            ("count", self.count as f64),
            ("mean", self.mean),
            ("std", self.std_dev),
            ("min", self.min),
            ("25%", self.q25),
            ("50%", self.median),
            ("75%", self.q75),
            ("max", self.max),
        ]
    }
}

/// Linear-interpolation percentile over an already sorted slice.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let pos = q * (n - 1) as f64;
    let lo = pos.floor() as usize;
    let frac = pos - lo as f64;
    if frac == 0.0 {
        sorted[lo]
    } else {
        sorted[lo] + frac * (sorted[lo + 1] - sorted[lo])
    }
}

// ---------------------------------------------------------------------------
// Species value counts
// ---------------------------------------------------------------------------

/// Frequency of each species, ordered by descending count. Ties keep the
/// order in which the species first appear in the dataset (unspecified as
/// far as callers are concerned).
pub fn species_value_counts(dataset: &IrisDataset) -> Vec<(Species, usize)> {
    let mut counts: Vec<(Species, usize)> = Vec::new();
    for row in dataset.rows() {
        match counts.iter_mut().find(|(s, _)| *s == row.species) {
            Some((_, n)) => *n += 1,
            None => counts.push((row.species, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

// ---------------------------------------------------------------------------
// Text report
// ---------------------------------------------------------------------------

/// Render the full summary report over the complete dataset.
///
/// Layout is fixed: the per-column statistics table, a blank line, the
/// `Value Counts for Species` header, a blank line, the counts, and a
/// trailing blank line. Every statistic is formatted with exactly two
/// digits after the decimal point.
pub fn summary_report(dataset: &IrisDataset) -> String {
    let stats: Vec<ColumnStats> = (0..NUMERIC_COLUMNS.len())
        .map(|i| ColumnStats::from_values(&dataset.numeric_column(i)))
        .collect();

    let table = stats_table(&stats);
    let counts = value_counts_block(&species_value_counts(dataset));

    format!("{table}\n\nValue Counts for Species\n\n{counts}\n\n")
}

/// Pandas-like text table: row labels down the left, one right-aligned
/// column per numeric field.
fn stats_table(stats: &[ColumnStats]) -> String {
    // One vector of formatted cells per numeric column.
    let cells: Vec<Vec<String>> = stats
        .iter()
        .map(|s| s.rows().iter().map(|(_, v)| format!("{v:.2}")).collect())
        .collect();

    // Each column is at least as wide as its header or its widest value.
    let widths: Vec<usize> = NUMERIC_COLUMNS
        .iter()
        .zip(&cells)
        .map(|(name, col)| {
            col.iter()
                .map(String::len)
                .max()
                .unwrap_or(0)
                .max(name.len())
        })
        .collect();

    let labels: Vec<&'static str> = stats
        .first()
        .map(|s| s.rows().iter().map(|(l, _)| *l).collect())
        .unwrap_or_default();
    let label_width = labels.iter().map(|l| l.len()).max().unwrap_or(0);

    let mut out = String::new();
    out.push_str(&" ".repeat(label_width));
    for (name, &width) in NUMERIC_COLUMNS.iter().zip(&widths) {
        out.push_str(&format!("  {name:>width$}"));
    }
    for (row_idx, label) in labels.iter().enumerate() {
        out.push('\n');
        out.push_str(&format!("{label:<label_width$}"));
        for (col, &width) in cells.iter().zip(&widths) {
            out.push_str(&format!("  {:>width$}", col[row_idx]));
        }
    }
    out
}

/// Value counts as aligned `species  count` lines.
fn value_counts_block(counts: &[(Species, usize)]) -> String {
    let name_width = counts
        .iter()
        .map(|(s, _)| s.to_string().len())
        .max()
        .unwrap_or(0);
    counts
        .iter()
        .map(|(species, n)| format!("{:<name_width$}    {n}", species.to_string()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{filtered_indices, RangeFilter};
    use crate::data::loader::load_embedded;
    use crate::data::model::IrisRow;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn stats_match_known_values() {
        let values = [1.0, 2.0, 3.0, 4.0];
        let s = ColumnStats::from_values(&values);
        assert_eq!(s.count, 4);
        assert!(close(s.mean, 2.5));
        // Sample std of 1..4 is sqrt(5/3).
        assert!(close(s.std_dev, (5.0f64 / 3.0).sqrt()));
        assert!(close(s.min, 1.0));
        assert!(close(s.q25, 1.75));
        assert!(close(s.median, 2.5));
        assert!(close(s.q75, 3.25));
        assert!(close(s.max, 4.0));
    }

    #[test]
    fn single_value_has_nan_std() {
        let s = ColumnStats::from_values(&[2.0]);
        assert_eq!(s.count, 1);
        assert!(s.std_dev.is_nan());
        assert!(close(s.median, 2.0));
    }

    #[test]
    fn iris_sepal_length_mean_is_well_known() {
        let ds = load_embedded().unwrap();
        let s = ColumnStats::from_values(&ds.numeric_column(0));
        assert_eq!(s.count, 150);
        assert!((s.mean - 5.843333).abs() < 1e-4);
        assert!((s.std_dev - 0.828066).abs() < 1e-4);
    }

    #[test]
    fn value_counts_are_descending_with_first_seen_ties() {
        let ds = load_embedded().unwrap();
        let counts = species_value_counts(&ds);
        assert_eq!(counts.len(), 3);
        assert!(counts.windows(2).all(|w| w[0].1 >= w[1].1));
        // All three species tie at 50, so file order wins.
        assert_eq!(counts[0], (Species::Setosa, 50));
        assert_eq!(counts[1], (Species::Versicolor, 50));
        assert_eq!(counts[2], (Species::Virginica, 50));
    }

    #[test]
    fn report_layout_is_fixed() {
        let ds = IrisDataset::from_rows(vec![
            IrisRow {
                sepal_length_cm: 5.0,
                sepal_width_cm: 3.0,
                petal_length_cm: 1.5,
                petal_width_cm: 0.2,
                species: Species::Setosa,
            },
            IrisRow {
                sepal_length_cm: 6.0,
                sepal_width_cm: 2.8,
                petal_length_cm: 4.5,
                petal_width_cm: 1.4,
                species: Species::Versicolor,
            },
        ]);
        let report = summary_report(&ds);
        assert!(report.contains("\n\nValue Counts for Species\n\n"));
        assert!(report.ends_with("\n\n"));
        assert!(report.contains("count"));
        assert!(report.contains("petal_length_cm"));
        // Two decimal places everywhere.
        assert!(report.contains("2.00"));
        assert!(report.contains("3.00"));
    }

    #[test]
    fn report_ignores_filter_state() {
        let ds = load_embedded().unwrap();
        let before = summary_report(&ds);
        // Filter down to an empty view; the report must not change.
        let filter = RangeFilter {
            length: (7.0, 1.0),
            ..RangeFilter::default()
        };
        assert!(filtered_indices(&ds, &filter).is_empty());
        assert_eq!(summary_report(&ds), before);
    }
}
