use std::sync::Arc;

use crate::config::DashboardConfig;
use crate::data::loader::{CsvSource, load_table};
use crate::data::model::DataTable;
use crate::error::DataError;
use crate::metrics::comparison::ComparisonTable;
use crate::metrics::report::{ClassificationReport, PREPROCESSED_REPORT_JSON, RAW_REPORT_JSON};

// ---------------------------------------------------------------------------
// DatasetChoice – the sidebar radio
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DatasetChoice {
    #[default]
    Raw,
    Preprocessed,
}

impl DatasetChoice {
    pub const ALL: [DatasetChoice; 2] = [DatasetChoice::Raw, DatasetChoice::Preprocessed];

    pub fn label(self) -> &'static str {
        match self {
            DatasetChoice::Raw => "Raw Data",
            DatasetChoice::Preprocessed => "Preprocessed Data",
        }
    }
}

// ---------------------------------------------------------------------------
// LoadedData – everything one render pass needs
// ---------------------------------------------------------------------------

/// Both datasets plus the evaluation summaries.  Either everything loads or
/// the pass fails with a single [`DataError`].
#[derive(Debug, Clone)]
pub struct LoadedData {
    pub raw: Arc<DataTable>,
    pub preprocessed: Arc<DataTable>,
    pub raw_report: ClassificationReport,
    pub preprocessed_report: ClassificationReport,
    pub comparison: ComparisonTable,
}

impl LoadedData {
    /// Fetch both datasets and parse the embedded reports.
    pub fn load(config: &DashboardConfig, source: &dyn CsvSource) -> Result<Self, DataError> {
        let raw = Arc::new(load_table(source, &config.raw_url)?);
        let preprocessed = Arc::new(load_table(source, &config.preprocessed_url)?);

        let raw_report = ClassificationReport::parse("raw", RAW_REPORT_JSON)?;
        let preprocessed_report =
            ClassificationReport::parse("preprocessed", PREPROCESSED_REPORT_JSON)?;
        for (name, report) in [("raw", &raw_report), ("preprocessed", &preprocessed_report)] {
            for warning in report.consistency_warnings() {
                log::warn!("Classification report '{name}': {warning}");
            }
        }

        let comparison = ComparisonTable::from_reports(&raw_report, &preprocessed_report);

        Ok(Self {
            raw,
            preprocessed,
            raw_report,
            preprocessed_report,
            comparison,
        })
    }

    /// The table the histograms are drawn from.
    pub fn table(&self, choice: DatasetChoice) -> &DataTable {
        match choice {
            DatasetChoice::Raw => &self.raw,
            DatasetChoice::Preprocessed => &self.preprocessed,
        }
    }
}
