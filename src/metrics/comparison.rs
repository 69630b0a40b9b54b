use super::report::ClassificationReport;

/// Table header, first column included.
pub const COMPARISON_COLUMNS: [&str; 5] = ["Model", "Accuracy", "Precision", "Recall", "F1-Score"];

// ---------------------------------------------------------------------------
// ComparisonTable
// ---------------------------------------------------------------------------

/// One model variant's headline scores.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub model: String,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
}

impl ComparisonRow {
    /// Headline row of a report: its accuracy plus the weighted averages.
    pub fn from_report(model: &str, report: &ClassificationReport) -> Self {
        let w = &report.weighted_avg;
        Self {
            model: model.to_string(),
            accuracy: report.accuracy,
            precision: w.precision,
            recall: w.recall,
            f1_score: w.f1_score,
        }
    }

    /// Metric values in the order of `COMPARISON_COLUMNS[1..]`.
    pub fn values(&self) -> [f64; 4] {
        [self.accuracy, self.precision, self.recall, self.f1_score]
    }

    /// All cells as display text, model name first.  Scores keep a decimal
    /// point even when whole (`1.0`, not `1`).
    pub fn cells(&self) -> Vec<String> {
        std::iter::once(self.model.clone())
            .chain(self.values().iter().map(|v| format!("{v:?}")))
            .collect()
    }
}

/// Raw vs. preprocessed model scores.  Derived from the reports so the two
/// can never disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonTable {
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    pub fn from_reports(raw: &ClassificationReport, preprocessed: &ClassificationReport) -> Self {
        Self {
            rows: vec![
                ComparisonRow::from_report("Raw Data", raw),
                ComparisonRow::from_report("Preprocessed Data", preprocessed),
            ],
        }
    }

    pub fn columns(&self) -> &'static [&'static str] {
        &COMPARISON_COLUMNS
    }
}
