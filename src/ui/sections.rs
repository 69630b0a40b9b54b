use eframe::egui::{Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::metrics::comparison::ComparisonTable;
use crate::state::AppState;
use crate::view::{DashboardView, INSIGHTS};

use super::plot;

// ---------------------------------------------------------------------------
// Central panel – the four dashboard sections
// ---------------------------------------------------------------------------

/// Render the dashboard, or only the error if the last load failed.
pub fn dashboard(ui: &mut Ui, state: &AppState) {
    let view = match &state.view {
        Some(view) => view,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| match &state.status_message {
                Some(msg) => {
                    ui.label(RichText::new(msg).color(Color32::RED).heading());
                }
                None => {
                    ui.heading("Loading data…");
                }
            });
            return;
        }
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading(RichText::new("Interactive Dashboard for Alien Mission Data").size(26.0));
            ui.add_space(8.0);

            distribution_section(ui, view);
            metrics_section(ui, view);
            comparison_section(ui, view);
            insights_section(ui);
        });
}

fn distribution_section(ui: &mut Ui, view: &DashboardView) {
    ui.heading("1. Data Distribution Visualization");
    ui.label(RichText::new(&view.distribution_heading).strong().size(18.0));
    for (index, hist) in view.histograms.iter().enumerate() {
        plot::histogram_plot(ui, index, hist);
        ui.add_space(8.0);
    }
    ui.separator();
}

fn metrics_section(ui: &mut Ui, view: &DashboardView) {
    ui.heading("2. Model Performance Metrics");
    for section in &view.metrics {
        ui.label(RichText::new(&section.heading).strong().size(18.0));
        plot::grouped_bar_plot(ui, &section.chart);
        ui.add_space(8.0);
    }
    ui.separator();
}

fn comparison_section(ui: &mut Ui, view: &DashboardView) {
    ui.heading("3. Model Comparison");
    plot::grouped_bar_plot(ui, &view.comparison_chart);
    ui.add_space(8.0);

    ui.label(RichText::new("Comparison Table").strong().size(18.0));
    comparison_table(ui, &view.comparison_table);
    ui.separator();
}

fn comparison_table(ui: &mut Ui, table: &ComparisonTable) {
    let columns = table.columns();
    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .columns(Column::auto().at_least(110.0), columns.len())
        .header(22.0, |mut header| {
            for name in columns {
                header.col(|ui: &mut Ui| {
                    ui.strong(*name);
                });
            }
        })
        .body(|mut body| {
            for row in &table.rows {
                body.row(20.0, |mut table_row| {
                    for cell in row.cells() {
                        table_row.col(|ui: &mut Ui| {
                            ui.label(cell);
                        });
                    }
                });
            }
        });
}

fn insights_section(ui: &mut Ui) {
    ui.heading("4. Insights");
    for line in INSIGHTS {
        ui.horizontal_wrapped(|ui: &mut Ui| {
            ui.label("•");
            match line.split_once(": ") {
                Some((lead, rest)) => {
                    ui.label(RichText::new(format!("{lead}:")).strong());
                    ui.label(rest);
                }
                None => {
                    ui.label(line);
                }
            }
        });
    }
    ui.add_space(8.0);
}
