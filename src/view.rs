use crate::dashboard::{DatasetChoice, LoadedData};
use crate::data::histogram::{Histogram, table_histograms};
use crate::metrics::comparison::{COMPARISON_COLUMNS, ComparisonTable};
use crate::metrics::report::{CLASS_LABELS, ClassificationReport};

pub const INSIGHTS: [&str; 4] = [
    "Raw Data: The model performs exceptionally well with an accuracy of 99.75%, but this could indicate overfitting.",
    "Preprocessed Data: After preprocessing, the accuracy drops to 86.38%, with more realistic precision, recall, and F1-score values.",
    "Significance: Preprocessing reduces overfitting and results in a more generalizable model.",
    "Use the bar charts and tables above to analyze and compare performance metrics interactively.",
];

// ---------------------------------------------------------------------------
// Chart models
// ---------------------------------------------------------------------------

/// One coloured series of a grouped bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub name: String,
    /// One value per group.
    pub values: Vec<f64>,
}

/// Bars grouped along the x axis, one bar per series inside each group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedBarChart {
    pub id: String,
    pub title: String,
    pub groups: Vec<String>,
    pub series: Vec<BarSeries>,
}

impl GroupedBarChart {
    /// Value of `series` in `group`, if both exist.
    pub fn value(&self, group: &str, series: &str) -> Option<f64> {
        let g = self.groups.iter().position(|x| x == group)?;
        let s = self.series.iter().find(|s| s.name == series)?;
        s.values.get(g).copied()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSection {
    pub heading: String,
    pub chart: GroupedBarChart,
}

// ---------------------------------------------------------------------------
// DashboardView – everything drawn in one pass
// ---------------------------------------------------------------------------

/// Plain-data description of the whole page.  Built by pure functions so the
/// same inputs always give the same view.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub choice: DatasetChoice,
    pub distribution_heading: String,
    pub histograms: Vec<Histogram>,
    pub metrics: Vec<MetricsSection>,
    pub comparison_chart: GroupedBarChart,
    pub comparison_table: ComparisonTable,
}

impl DashboardView {
    pub fn build(data: &LoadedData, choice: DatasetChoice) -> Self {
        let metrics = [
            (DatasetChoice::Raw, &data.raw_report),
            (DatasetChoice::Preprocessed, &data.preprocessed_report),
        ]
        .into_iter()
        .map(|(variant, report)| MetricsSection {
            heading: format!("Training Metrics ({})", variant.label()),
            chart: metrics_chart(variant, report),
        })
        .collect();

        Self {
            choice,
            distribution_heading: format!("{} Distribution", choice.label()),
            histograms: table_histograms(data.table(choice)),
            metrics,
            comparison_chart: comparison_chart(&data.comparison),
            comparison_table: data.comparison.clone(),
        }
    }
}

/// Per-class precision / recall / F1 of one report.
pub fn metrics_chart(variant: DatasetChoice, report: &ClassificationReport) -> GroupedBarChart {
    let groups = CLASS_LABELS.iter().map(|c| format!("Class {c}")).collect();

    let series = ["precision", "recall", "f1-score"]
        .into_iter()
        .enumerate()
        .map(|(i, name)| BarSeries {
            name: name.to_string(),
            values: CLASS_LABELS
                .iter()
                .map(|c| report.class(c).map_or(0.0, |m| m.scores()[i].1))
                .collect(),
        })
        .collect();

    GroupedBarChart {
        id: format!("metrics_{variant:?}").to_lowercase(),
        title: format!("Classification Metrics for {}", variant.label()),
        groups,
        series,
    }
}

/// Accuracy / precision / recall / F1 per model variant.
pub fn comparison_chart(table: &ComparisonTable) -> GroupedBarChart {
    let series = COMPARISON_COLUMNS[1..]
        .iter()
        .enumerate()
        .map(|(i, name)| BarSeries {
            name: name.to_string(),
            values: table.rows.iter().map(|r| r.values()[i]).collect(),
        })
        .collect();

    GroupedBarChart {
        id: "comparison".to_string(),
        title: "Performance Comparison Between Raw and Preprocessed Data".to_string(),
        groups: table.rows.iter().map(|r| r.model.clone()).collect(),
        series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::tests::{full_source, test_config};

    fn loaded() -> LoadedData {
        LoadedData::load(&test_config(), &full_source()).unwrap()
    }

    #[test]
    fn histograms_follow_the_selection() {
        let data = loaded();

        let raw = DashboardView::build(&data, DatasetChoice::Raw);
        assert_eq!(raw.distribution_heading, "Raw Data Distribution");
        let cols: Vec<_> = raw.histograms.iter().map(|h| h.column.as_str()).collect();
        assert_eq!(cols, vec!["planet", "crew", "success"]);

        let pre = DashboardView::build(&data, DatasetChoice::Preprocessed);
        assert_eq!(pre.distribution_heading, "Preprocessed Data Distribution");
        let cols: Vec<_> = pre.histograms.iter().map(|h| h.column.as_str()).collect();
        assert_eq!(cols, vec!["crew_scaled", "success"]);
    }

    #[test]
    fn comparison_is_independent_of_selection() {
        let data = loaded();
        let raw = DashboardView::build(&data, DatasetChoice::Raw);
        let pre = DashboardView::build(&data, DatasetChoice::Preprocessed);
        assert_eq!(raw.comparison_table, pre.comparison_table);
        assert_eq!(raw.comparison_table.rows.len(), 2);
        assert_eq!(raw.comparison_table.columns().len(), 5);
    }

    #[test]
    fn comparison_accuracy_bars_are_exact() {
        let view = DashboardView::build(&loaded(), DatasetChoice::Raw);
        let chart = &view.comparison_chart;
        assert_eq!(chart.value("Raw Data", "Accuracy"), Some(0.9975));
        assert_eq!(chart.value("Preprocessed Data", "Accuracy"), Some(0.86375));
        assert_eq!(chart.series.len(), 4);
    }

    #[test]
    fn metric_charts_group_by_class() {
        let view = DashboardView::build(&loaded(), DatasetChoice::Raw);
        assert_eq!(view.metrics.len(), 2);
        assert_eq!(view.metrics[0].heading, "Training Metrics (Raw Data)");

        let chart = &view.metrics[1].chart;
        assert_eq!(chart.title, "Classification Metrics for Preprocessed Data");
        assert_eq!(chart.groups, vec!["Class 0", "Class 1"]);
        assert_eq!(chart.value("Class 0", "precision"), Some(0.8555));
        assert_eq!(chart.value("Class 1", "f1-score"), Some(0.8537));
        assert_ne!(view.metrics[0].chart.id, chart.id);
    }

    #[test]
    fn rebuilding_is_idempotent() {
        let data = loaded();
        for choice in DatasetChoice::ALL {
            assert_eq!(
                DashboardView::build(&data, choice),
                DashboardView::build(&data, choice)
            );
        }
    }
}
