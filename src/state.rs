use crate::config::DashboardConfig;
use crate::dashboard::{DatasetChoice, LoadedData};
use crate::data::loader::CsvSource;
use crate::view::DashboardView;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// Sidebar radio selection.
    pub choice: DatasetChoice,

    /// Result of the last load (None until the first pass).
    pub data: Option<LoadedData>,

    /// View built from `data` and `choice` (cached).
    pub view: Option<DashboardView>,

    /// Error message shown in place of the dashboard, and nowhere else.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            choice: DatasetChoice::default(),
            data: None,
            view: None,
            status_message: None,
        }
    }

    /// Run a render pass: load everything, or record why it failed.
    /// A failure leaves no data or view behind.
    pub fn load(&mut self, source: &dyn CsvSource) {
        match LoadedData::load(&self.config, source) {
            Ok(data) => {
                log::info!(
                    "Dashboard ready: {} raw rows, {} preprocessed rows",
                    data.raw.len(),
                    data.preprocessed.len()
                );
                self.view = Some(DashboardView::build(&data, self.choice));
                self.data = Some(data);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to load dashboard data: {e:#}");
                self.data = None;
                self.view = None;
                self.status_message = Some(format!("Error loading data: {e}"));
            }
        }
    }

    /// Fetch both datasets again.
    pub fn reload(&mut self, source: &dyn CsvSource) {
        log::info!("Reloading datasets");
        self.load(source);
    }

    /// Row counts for the top bar.  `None` unless the last load succeeded, so
    /// a failure is only reported by the central panel.
    pub fn summary(&self) -> Option<String> {
        self.data.as_ref().map(|data| {
            format!(
                "{} raw rows, {} preprocessed rows",
                data.raw.len(),
                data.preprocessed.len()
            )
        })
    }

    /// Change the radio selection and rebuild the view.
    pub fn set_choice(&mut self, choice: DatasetChoice) {
        if self.choice == choice && self.view.is_some() {
            return;
        }
        self.choice = choice;
        if let Some(data) = &self.data {
            self.view = Some(DashboardView::build(data, choice));
        }
    }
}
