use eframe::egui::{self, RichText, Ui};

use crate::config::DashboardConfig;
use crate::state::AppState;
use crate::ui::{charts, panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ExplorerApp {
    pub state: AppState,
}

impl ExplorerApp {
    /// Build the app and read the configured input file once.
    pub fn new(config: DashboardConfig) -> Self {
        let mut state = AppState::new(config);
        let path = state.config.data_path.clone();
        state.load(&path);
        Self { state }
    }
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: results ----
        egui::CentralPanel::default().show(ctx, |ui| {
            results(ui, &mut self.state);
        });
    }
}

fn results(ui: &mut Ui, state: &mut AppState) {
    ui.heading("📊 Explorador interactivo de Sindicatos y Patrones");

    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("Abra una hoja de cálculo para empezar  (Archivo → Abrir…)");
        });
        return;
    }

    ui.label(RichText::new("📄 Resultados filtrados").strong());
    ui.horizontal(|ui: &mut Ui| {
        ui.vertical(|ui: &mut Ui| {
            ui.label("Registros");
            ui.label(RichText::new(panels::format_count(state.view.filtered.len())).size(28.0));
        });
        ui.add_space(24.0);
        if ui.button("📥 Descargar Excel filtrado").clicked() {
            panels::save_file_dialog(state);
        }
    });
    ui.separator();

    if state.view.filtered.is_empty() {
        ui.label("Ningún registro coincide con los filtros.");
    } else {
        table::data_table(ui, &state.view.filtered);
    }
    ui.separator();

    charts::distribution_charts(ui, state);
}
