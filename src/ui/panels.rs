use eframe::egui::{self, Ui};

use crate::dashboard::DatasetChoice;
use crate::data::loader::CsvSource;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – dataset selector
// ---------------------------------------------------------------------------

/// Render the left options panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Options");
    ui.separator();

    ui.label("Choose data to display:");
    let mut choice = state.choice;
    for option in DatasetChoice::ALL {
        ui.radio_value(&mut choice, option, option.label());
    }
    if choice != state.choice {
        log::debug!("Selection changed to {}", choice.label());
        state.set_choice(choice);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState, source: &dyn CsvSource) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("Data", |ui: &mut Ui| {
            if ui.button("Reload").clicked() {
                state.reload(source);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(summary) = state.summary() {
            ui.label(summary);
        }
    });
}
