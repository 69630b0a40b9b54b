use eframe::egui;

use crate::config::DashboardConfig;
use crate::data::loader::HttpSource;
use crate::state::AppState;
use crate::ui::{panels, sections};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    pub state: AppState,
    source: HttpSource,
}

impl DashboardApp {
    /// Build the app and run the first render pass synchronously.
    pub fn new(config: DashboardConfig) -> Self {
        let source = HttpSource::new(&config);
        let mut state = AppState::new(config);
        state.load(&source);
        Self { state, source }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state, &self.source);
        });

        // ---- Left side panel: dataset selector ----
        egui::SidePanel::left("options_panel")
            .default_width(200.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            sections::dashboard(ui, &self.state);
        });
    }
}
