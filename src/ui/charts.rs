use eframe::egui::{RichText, Ui};
use egui_plot::{Bar, BarChart, Plot};

use crate::color::ColorMap;
use crate::data::counts::CountSeries;
use crate::state::AppState;

const CHART_HEIGHT: f32 = 220.0;

// ---------------------------------------------------------------------------
// Sí / No distribution charts
// ---------------------------------------------------------------------------

/// Render one bar chart per configured column present in the filtered data,
/// side by side.
pub fn distribution_charts(ui: &mut Ui, state: &AppState) {
    let counts = &state.view.counts;
    if counts.is_empty() {
        return;
    }

    ui.heading("📊 Distribución Sí / No por variable");
    ui.columns(counts.len(), |cols| {
        for (ui, (column, series)) in cols.iter_mut().zip(counts) {
            ui.label(RichText::new(format!("{column}  (n = {})", series.total())).strong());
            if series.unlisted > 0 {
                ui.small(format!("{} con otros valores", series.unlisted));
            }
            if !series.is_empty() {
                bar_chart(ui, column, series, &state.color_map);
            }
        }
    });
}

fn bar_chart(ui: &mut Ui, column: &str, series: &CountSeries, colors: &ColorMap) {
    let labels: Vec<String> = series.buckets.iter().map(|(v, _)| v.to_string()).collect();

    let bars: Vec<Bar> = series
        .buckets
        .iter()
        .enumerate()
        .map(|(i, (value, n))| {
            Bar::new(i as f64, *n as f64)
                .name(value.to_string())
                .fill(colors.color_for(value))
                .width(0.6)
        })
        .collect();

    Plot::new(format!("counts_{column}"))
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show_grid([false, true])
        .include_y(0.0)
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > f64::EPSILON || idx < 0.0 {
                return String::new();
            }
            labels.get(idx as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}
