use eframe::egui::{RichText, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::color::{HISTOGRAM_COLOR, generate_palette};
use crate::data::histogram::{Histogram, HistogramKind};
use crate::view::GroupedBarChart;

const PLOT_HEIGHT: f32 = 280.0;
/// Share of a group's slot taken by its bars.
const GROUP_WIDTH: f64 = 0.8;

// ---------------------------------------------------------------------------
// Histogram
// ---------------------------------------------------------------------------

/// Plot id of the `index`-th histogram.  Header names may repeat, so the
/// position is part of the id.
pub fn histogram_plot_id(index: usize, hist: &Histogram) -> String {
    format!("hist_{index}_{}", hist.column)
}

/// Render the `index`-th column histogram with its title.
pub fn histogram_plot(ui: &mut Ui, index: usize, hist: &Histogram) {
    ui.label(RichText::new(&hist.title).strong());

    if hist.bins.is_empty() {
        ui.label("No values to plot.");
        return;
    }

    let bars: Vec<Bar> = hist
        .bins
        .iter()
        .enumerate()
        .map(|(i, bin)| {
            let (x, width) = match hist.kind {
                HistogramKind::Continuous => ((bin.start + bin.end) / 2.0, bin.end - bin.start),
                HistogramKind::Categorical | HistogramKind::Discrete => (i as f64, GROUP_WIDTH),
            };
            Bar::new(x, bin.count as f64)
                .width(width)
                .name(&bin.label)
                .fill(HISTOGRAM_COLOR)
        })
        .collect();

    let mut plot = Plot::new(histogram_plot_id(index, hist))
        .height(PLOT_HEIGHT)
        .x_axis_label(hist.column.clone())
        .y_axis_label("count")
        .include_y(0.0)
        .allow_scroll(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false);

    // Category positions are indices, so label them with the bin text.
    if hist.kind != HistogramKind::Continuous {
        let labels: Vec<String> = hist.bins.iter().map(|b| b.label.clone()).collect();
        plot = plot.x_axis_formatter(move |mark, _range| category_label(&labels, mark.value));
    }

    plot.show(ui, |plot_ui| {
        plot_ui.bar_chart(BarChart::new(bars).name("count").color(HISTOGRAM_COLOR));
    });
}

// ---------------------------------------------------------------------------
// Grouped bar chart
// ---------------------------------------------------------------------------

/// Render a grouped bar chart: one cluster per group, one colour per series.
pub fn grouped_bar_plot(ui: &mut Ui, chart: &GroupedBarChart) {
    ui.label(RichText::new(&chart.title).strong());

    let n_series = chart.series.len().max(1);
    let bar_width = GROUP_WIDTH / n_series as f64;
    let colors = generate_palette(chart.series.len());
    let labels = chart.groups.clone();

    Plot::new(&chart.id)
        .height(PLOT_HEIGHT)
        .legend(Legend::default())
        .y_axis_label("value")
        .include_y(0.0)
        .include_y(1.0)
        .allow_scroll(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .x_axis_formatter(move |mark, _range| category_label(&labels, mark.value))
        .show(ui, |plot_ui| {
            for (s, (series, color)) in chart.series.iter().zip(colors).enumerate() {
                let offset = (s as f64 - (n_series as f64 - 1.0) / 2.0) * bar_width;
                let bars: Vec<Bar> = series
                    .values
                    .iter()
                    .enumerate()
                    .map(|(g, &value)| {
                        let group = chart.groups.get(g).map(String::as_str).unwrap_or("");
                        Bar::new(g as f64 + offset, value)
                            .width(bar_width)
                            .name(format!("{group} · {}", series.name))
                            .fill(color)
                    })
                    .collect();

                plot_ui.bar_chart(BarChart::new(bars).name(&series.name).color(color));
            }
        });
}

/// Axis text for a category index; blank between categories.
fn category_label(labels: &[String], x: f64) -> String {
    let idx = x.round();
    if (x - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    labels.get(idx as usize).cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_column_names_get_distinct_plot_ids() {
        use crate::data::histogram::table_histograms;
        use crate::data::loader::parse_csv;

        let table = parse_csv(b"speed,speed\n1,2\n", "mem://dup").unwrap();
        let hists = table_histograms(&table);
        assert_eq!(hists[0].column, hists[1].column);
        assert_ne!(histogram_plot_id(0, &hists[0]), histogram_plot_id(1, &hists[1]));
    }

    #[test]
    fn category_labels_only_at_integer_positions() {
        let labels = vec!["Class 0".to_string(), "Class 1".to_string()];
        assert_eq!(category_label(&labels, 0.0), "Class 0");
        assert_eq!(category_label(&labels, 1.0), "Class 1");
        assert_eq!(category_label(&labels, 0.5), "");
        assert_eq!(category_label(&labels, -1.0), "");
        assert_eq!(category_label(&labels, 7.0), "");
    }
}
