use std::collections::HashMap;

use super::model::{CellValue, DataTable, TableColumn};

/// Numeric columns with at most this many distinct values get one bar per value.
pub const MAX_DISCRETE_VALUES: usize = 20;
/// Upper bound on equal-width bins for continuous columns.
pub const MAX_BINS: usize = 50;

// ---------------------------------------------------------------------------
// Histogram model
// ---------------------------------------------------------------------------

/// How the x axis of a histogram should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistogramKind {
    /// One bar per distinct text/bool value, in order of first appearance.
    Categorical,
    /// One bar per distinct numeric value, ascending.
    Discrete,
    /// Equal-width numeric bins.
    Continuous,
}

/// A single bar.  `start..end` is only meaningful for continuous histograms.
#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    pub label: String,
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub column: String,
    pub title: String,
    pub kind: HistogramKind,
    pub bins: Vec<Bin>,
}

impl Histogram {
    /// Number of non-null cells counted.
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// One histogram per column, in column order.
pub fn table_histograms(table: &DataTable) -> Vec<Histogram> {
    table.columns.iter().map(column_histogram).collect()
}

/// Build the frequency histogram of a single column; null cells are skipped.
pub fn column_histogram(column: &TableColumn) -> Histogram {
    let numeric: Option<Vec<f64>> = column.present_values().map(CellValue::as_f64).collect();

    let (kind, bins) = match numeric {
        Some(values) if !values.is_empty() => numeric_bins(values),
        // An all-null column has nothing to bin.
        Some(_) => (HistogramKind::Categorical, Vec::new()),
        None => (HistogramKind::Categorical, categorical_bins(column)),
    };

    Histogram {
        column: column.name.clone(),
        title: format!("Distribution of {}", column.name),
        kind,
        bins,
    }
}

fn categorical_bins(column: &TableColumn) -> Vec<Bin> {
    let mut index: HashMap<&CellValue, usize> = HashMap::new();
    let mut bins: Vec<Bin> = Vec::new();

    for value in column.present_values() {
        let slot = *index.entry(value).or_insert_with(|| {
            let pos = bins.len() as f64;
            bins.push(Bin {
                label: value.to_string(),
                start: pos,
                end: pos + 1.0,
                count: 0,
            });
            bins.len() - 1
        });
        bins[slot].count += 1;
    }
    bins
}

fn numeric_bins(mut values: Vec<f64>) -> (HistogramKind, Vec<Bin>) {
    values.sort_by(f64::total_cmp);

    let mut distinct: Vec<(f64, usize)> = Vec::new();
    for v in &values {
        match distinct.last_mut() {
            Some((last, count)) if *last == *v => *count += 1,
            _ => distinct.push((*v, 1)),
        }
    }

    if distinct.len() <= MAX_DISCRETE_VALUES {
        let bins = distinct
            .into_iter()
            .map(|(v, count)| Bin {
                label: format!("{v}"),
                start: v,
                end: v,
                count,
            })
            .collect();
        return (HistogramKind::Discrete, bins);
    }

    (HistogramKind::Continuous, equal_width_bins(&values))
}

/// Sturges' rule: `ceil(log2 n) + 1` bins.
pub fn sturges_bin_count(n: usize) -> usize {
    if n <= 1 {
        return 1;
    }
    let k = (n as f64).log2().ceil() as usize + 1;
    k.clamp(1, MAX_BINS)
}

/// `sorted` must be non-empty and ascending.
fn equal_width_bins(sorted: &[f64]) -> Vec<Bin> {
    let min = sorted[0];
    let max = sorted[sorted.len() - 1];
    let range = max - min;

    if range.abs() < f64::EPSILON {
        return vec![Bin {
            label: format!("{min}"),
            start: min,
            end: max,
            count: sorted.len(),
        }];
    }

    let n_bins = sturges_bin_count(sorted.len());
    let width = range / n_bins as f64;

    let mut bins: Vec<Bin> = (0..n_bins)
        .map(|i| {
            let start = min + width * i as f64;
            let end = if i + 1 == n_bins {
                max
            } else {
                min + width * (i + 1) as f64
            };
            Bin {
                label: format!("{start:.3}–{end:.3}"),
                start,
                end,
                count: 0,
            }
        })
        .collect();

    for &v in sorted {
        // The last bin is closed on the right so `max` lands in it.
        let idx = (((v - min) / width).floor() as usize).min(n_bins - 1);
        bins[idx].count += 1;
    }
    bins
}
